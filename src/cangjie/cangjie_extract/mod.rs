//! `cangjie_extract`
//!
//! 変換済みの碼表から `FIXED_CODE_LENGTH` (5) 字根ちょうどで、すべてが CJK Unified Ideographs
//! の code を取り出し、重複を除いて sort した JSON 配列として書き出す。
//!
//! 2 field に分割できない行は黙って読み飛ばす。

pub(in crate::cangjie) mod command_line;

use rustc_hash::FxHashSet;

use crate::cangjie::code_table::{CodeTableRow, Radical};
use crate::cangjie::{CangjieError, Config, FIXED_CODE_LENGTH, JSON_INDENT_SPACES};

pub(in crate::cangjie) struct CangjieExtract {}

impl CangjieExtract {
    /// 書き出した code の数を返す。
    pub(in crate::cangjie) fn run(config: &Config) -> Result<usize, CangjieError> {
        let content = std::fs::read_to_string(&config.input_full_path)?;
        let codes = Self::extract_codes(&content);
        std::fs::write(&config.output_full_path, Self::to_json(&codes))?;
        println!(
            "Generated {} {}-character codes from {}",
            codes.len(),
            FIXED_CODE_LENGTH,
            config.input_full_path
        );
        println!("Saved to {}", config.output_full_path);
        Ok(codes.len())
    }

    pub(in crate::cangjie) fn extract_codes(content: &str) -> Vec<String> {
        Self::filter_codes(
            content
                .lines()
                .filter_map(CodeTableRow::parse)
                .map(|row| row.code),
        )
    }

    pub(in crate::cangjie) fn filter_codes<'a, I>(codes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let unique_codes = codes
            .into_iter()
            .filter(|code| Self::is_fixed_length_code(code))
            .collect::<FxHashSet<&str>>();
        log::debug!("unique codes={}", unique_codes.len());
        let mut result = unique_codes
            .into_iter()
            .map(String::from)
            .collect::<Vec<String>>();
        result.sort_unstable();
        result
    }

    pub(in crate::cangjie) fn is_fixed_length_code(code: &str) -> bool {
        code.chars().count() == FIXED_CODE_LENGTH && code.chars().all(Radical::is_ideograph)
    }

    pub(in crate::cangjie) fn to_json(codes: &[String]) -> String {
        json::JsonValue::Array(
            codes
                .iter()
                .map(|code| json::JsonValue::from(code.as_str()))
                .collect(),
        )
        .pretty(JSON_INDENT_SPACES)
    }
}
