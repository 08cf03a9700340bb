mod command_line;
mod patch;
mod pipeline;

use std::path::Path;

use crate::cangjie::Config;

pub(in crate::cangjie) fn full_path(directory: &Path, filename: &str) -> String {
    directory.join(filename).to_str().unwrap().to_string()
}

pub(in crate::cangjie) fn write_file(directory: &Path, filename: &str, content: &str) -> String {
    let full_path = full_path(directory, filename);
    std::fs::write(&full_path, content).unwrap();
    full_path
}

pub(in crate::cangjie) fn read_file(full_path: &str) -> String {
    std::fs::read_to_string(full_path).unwrap()
}

pub(in crate::cangjie) fn io_config(input_full_path: &str, output_full_path: &str) -> Config {
    Config::new()
        .input_full_path(String::from(input_full_path))
        .output_full_path(String::from(output_full_path))
}
