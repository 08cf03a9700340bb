//! `cangjie`
//!
//! # はじめに
//!
//! 倉頡 (Cangjie) の碼表とそこから作られる JSON / script を加工する小さな command 群。
//!
//! - `cangjie_convert` 碼表の英字 code を倉頡字根 (日月金...) に変換する
//! - `cangjie_extract` 変換済みの碼表から 5 字根の code を抜き出し JSON 配列にする
//! - `cangjie_shuffle` JSON 配列の順序を打ち乱す
//! - `cangjie_patch` script 中の配列 literal (既定では `La`) を別ファイルの配列で置き換える
//!
//! どの command も入力全体を読んでから変換し、出力全体を一度に書く。command 間でデータを
//! 受け渡すのはファイルのみ。
//!
//!
//! # 碼表の行
//!
//! `"序号→code<TAB>文字"` または `"code<TAB>文字"` 。 tab で 2 field に分割できない行は
//! 変換の対象外 (`cangjie_convert` はそのまま出力し `cangjie_extract` は読み飛ばす) 。

mod cangjie_convert;
mod cangjie_extract;
mod cangjie_patch;
mod cangjie_shuffle;
mod code_table;
mod command_line;
mod error;

#[cfg(unix)]
#[cfg(test)]
mod test_unix;

use crate::cangjie::cangjie_convert::CangjieConvert;
use crate::cangjie::cangjie_extract::CangjieExtract;
use crate::cangjie::cangjie_patch::{ArrayPatcher, PatchSession, Prompt};
use crate::cangjie::cangjie_shuffle::CangjieShuffle;

pub use crate::cangjie::error::CangjieError;

#[macro_export]
macro_rules! define_builder {
    ($name: ident, $type: ty) => {
        #[allow(dead_code, clippy::wrong_self_convention, clippy::missing_const_for_fn)]
        fn $name(mut self, $name: $type) -> Self {
            self.$name = $name;
            self
        }
    };
}

const DEFAULT_CONVERT_OUTPUT_FULL_PATH: &str = "cangjie_converted.txt";
const DEFAULT_EXTRACT_OUTPUT_FULL_PATH: &str = "five_char_codes.json";
const DEFAULT_ARRAY_NAME: &str = "La";
const BACKUP_SUFFIX: &str = ".bak";
const JSON_EXTENSION: &str = ".json";
const JSON_INDENT_SPACES: u16 = 2;
const FIXED_CODE_LENGTH: usize = 5;
const INDEX_SEPARATOR: char = '→';
const FIELD_SEPARATOR: char = '\t';

#[derive(Clone, Default)]
pub(in crate::cangjie) struct Config {
    input_full_path: String,
    output_full_path: String,
    array_name: String,
    is_verbose: bool,
}

impl Config {
    fn new() -> Self {
        Self {
            array_name: String::from(DEFAULT_ARRAY_NAME),
            ..Self::default()
        }
    }

    define_builder!(input_full_path, String);
    define_builder!(output_full_path, String);
    define_builder!(array_name, String);
    define_builder!(is_verbose, bool);
}

fn print_warning(message: &str) {
    println!("Warning: {}", message);
}

fn setup_logger(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let result = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
    if result.is_err() {
        log::debug!("logger already initialized");
    }
}

/// # Errors
///
/// 引数が足りない場合、入力ファイルが存在しない場合や I/O error が発生した場合に `Err` を返す。
pub fn run_cangjie_convert() -> Result<(), CangjieError> {
    let mut command_line = cangjie_convert::command_line::CangjieConvertCommandLine::new();
    command_line.start()?;
    let config = command_line.get_config();
    setup_logger(config.is_verbose);
    CangjieConvert::run(&config)?;
    Ok(())
}

/// # Errors
///
/// 引数が足りない場合、入力ファイルが存在しない場合や I/O error が発生した場合に `Err` を返す。
pub fn run_cangjie_extract() -> Result<(), CangjieError> {
    let mut command_line = cangjie_extract::command_line::CangjieExtractCommandLine::new();
    command_line.start()?;
    let config = command_line.get_config();
    setup_logger(config.is_verbose);
    CangjieExtract::run(&config)?;
    Ok(())
}

/// # Errors
///
/// 入力ファイルが存在しない、 JSON として読めない、あるいは top level が配列でない場合に
/// `Err` を返す。
pub fn run_cangjie_shuffle() -> Result<(), CangjieError> {
    let mut command_line = cangjie_shuffle::command_line::CangjieShuffleCommandLine::new();
    command_line.start()?;
    let config = command_line.get_config();
    setup_logger(config.is_verbose);
    CangjieShuffle::run(&config)?;
    Ok(())
}

/// # Errors
///
/// 入力されたパスが空、ファイルが存在しない、配列を取り出せない、あるいは I/O error が
/// 発生した場合に `Err` を返す。
pub fn run_cangjie_patch() -> Result<(), CangjieError> {
    let mut command_line = cangjie_patch::command_line::CangjiePatchCommandLine::new();
    command_line.start()?;
    let config = command_line.get_config();
    setup_logger(config.is_verbose);
    let patcher = ArrayPatcher::new(&config.array_name)?;
    let prompt = Prompt::new(std::io::stdin().lock(), std::io::stdout());
    PatchSession::new(prompt, patcher).run()
}
