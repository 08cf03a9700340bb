//! `cangjie_shuffle`
//!
//! JSON 配列の順序を打ち乱して書き出す。出力先を省略すると入力ファイルを上書きする。
//!
//! 読み込んだ配列は直接 shuffle せず copy に対して shuffle する。

pub(in crate::cangjie) mod command_line;

use json::JsonValue;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cangjie::{print_warning, CangjieError, Config, JSON_EXTENSION, JSON_INDENT_SPACES};

pub(in crate::cangjie) struct CangjieShuffle {}

impl CangjieShuffle {
    /// shuffle した要素数を返す。
    pub(in crate::cangjie) fn run(config: &Config) -> Result<usize, CangjieError> {
        if !Self::has_json_extension(&config.input_full_path) {
            print_warning(&format!(
                r#"input file "{}" may not be a JSON file"#,
                config.input_full_path
            ));
        }
        let members = Self::read_list(&config.input_full_path)?;
        let shuffled_members = Self::shuffle_members(&members, &mut rand::thread_rng());
        let length = shuffled_members.len();
        std::fs::write(
            &config.output_full_path,
            JsonValue::Array(shuffled_members).pretty(JSON_INDENT_SPACES),
        )?;
        println!("Shuffled {} codes", length);
        if config.input_full_path == config.output_full_path {
            println!("Updated file: {}", config.input_full_path);
        } else {
            println!("Original file: {}", config.input_full_path);
            println!("Output file: {}", config.output_full_path);
        }
        Ok(length)
    }

    pub(in crate::cangjie) fn has_json_extension(full_path: &str) -> bool {
        full_path.to_lowercase().ends_with(JSON_EXTENSION)
    }

    pub(in crate::cangjie) fn read_list(full_path: &str) -> Result<Vec<JsonValue>, CangjieError> {
        let content = std::fs::read_to_string(full_path)?;
        Self::parse_list(full_path, &content)
    }

    pub(in crate::cangjie) fn parse_list(
        full_path: &str,
        content: &str,
    ) -> Result<Vec<JsonValue>, CangjieError> {
        match json::parse(content) {
            Ok(JsonValue::Array(members)) => Ok(members),
            Ok(other) => Err(CangjieError::NotList {
                full_path: String::from(full_path),
                found: Self::type_name(&other),
            }),
            Err(source) => Err(CangjieError::InvalidJson {
                full_path: String::from(full_path),
                source,
            }),
        }
    }

    /// `members` は変更せず、一様にランダムな並べ替えを返す。
    pub(in crate::cangjie) fn shuffle_members<R>(
        members: &[JsonValue],
        rng: &mut R,
    ) -> Vec<JsonValue>
    where
        R: Rng + ?Sized,
    {
        let mut shuffled_members = members.to_vec();
        shuffled_members.shuffle(rng);
        shuffled_members
    }

    const fn type_name(value: &JsonValue) -> &'static str {
        match value {
            JsonValue::Null => "null",
            JsonValue::Short(_) | JsonValue::String(_) => "string",
            JsonValue::Number(_) => "number",
            JsonValue::Boolean(_) => "boolean",
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "list",
        }
    }
}
