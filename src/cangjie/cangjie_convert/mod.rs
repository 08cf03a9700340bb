//! `cangjie_convert`
//!
//! 碼表の英字 code を倉頡字根に変換する。
//!
//! - 入力 `"序号→字母序列<TAB>文字"` または `"字母序列<TAB>文字"`
//! - 出力 `"序号→字根序列<TAB>文字"` または `"字根序列<TAB>文字"`
//!
//! 2 field に分割できない行はそのまま、空行は空行のまま出力する。出力は `'\n'` で join する
//! ので末尾の改行は保証しない。

pub(in crate::cangjie) mod command_line;

use crate::cangjie::code_table::{CodeTableRow, Radical};
use crate::cangjie::{CangjieError, Config};

pub(in crate::cangjie) struct CangjieConvert {}

impl CangjieConvert {
    /// 変換した行数を返す。
    pub(in crate::cangjie) fn run(config: &Config) -> Result<usize, CangjieError> {
        let content = std::fs::read_to_string(&config.input_full_path)?;
        let converted_lines = Self::convert_text(&content);
        log::debug!(
            "convert {} lines  input={}",
            converted_lines.len(),
            config.input_full_path
        );
        std::fs::write(&config.output_full_path, converted_lines.join("\n"))?;
        println!("Conversion complete");
        println!("Input file: {}", config.input_full_path);
        println!("Output file: {}", config.output_full_path);
        println!("Converted lines: {}", converted_lines.len());
        Ok(converted_lines.len())
    }

    pub(in crate::cangjie) fn convert_text(content: &str) -> Vec<String> {
        content.lines().map(Self::convert_line).collect()
    }

    pub(in crate::cangjie) fn convert_line(line: &str) -> String {
        if line.trim().is_empty() {
            return String::new();
        }
        CodeTableRow::parse(line).map_or_else(
            || String::from(line),
            |row| row.to_line_with_code(&Radical::convert_letters(row.code)),
        )
    }
}
