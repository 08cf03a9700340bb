#![warn(rust_2018_idioms, clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::get_unwrap)]

fn main() {
    if let Err(e) = cangjie_tools::cangjie::run_cangjie_extract() {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
