use json::JsonValue;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cangjie::CangjieError;

// 最初の '[' から最後の ']' まで (改行を含む)
static RE_BRACKET_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[(.*)\]").expect("invalid bracket span regex"));
static RE_COMMA_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",[ \t]*\r?\n").expect("invalid comma newline regex"));

/// 配列の取り出し方。 `EXTRACT_STRATEGIES` の順に試し、最初に成功したものを使う。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::cangjie) enum ExtractStrategy {
    /// `[...]` を JSON として parse する
    Json,
    /// `[...]` の中身を `",\n"` で分割し、要素の引用符を外す
    CommaSplit,
    /// `[` で始まる行から `]` で終わる行までを 1 行 1 要素として読む
    LineScan,
}

const EXTRACT_STRATEGIES: [ExtractStrategy; 3] = [
    ExtractStrategy::Json,
    ExtractStrategy::CommaSplit,
    ExtractStrategy::LineScan,
];

#[derive(Debug)]
pub(in crate::cangjie) enum ExtractFailure {
    NoBracketSpan,
    InvalidJson(json::Error),
    NotArray,
    NoElements,
    Unterminated,
}

impl std::fmt::Display for ExtractFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoBracketSpan => write!(f, "no bracket span"),
            Self::InvalidJson(e) => write!(f, "invalid JSON: {}", e),
            Self::NotArray => write!(f, "not an array"),
            Self::NoElements => write!(f, "no elements"),
            Self::Unterminated => write!(f, "unterminated array"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::cangjie) struct ExtractedArray {
    pub(in crate::cangjie) strategy: ExtractStrategy,
    pub(in crate::cangjie) elements: Vec<String>,
}

pub(in crate::cangjie) struct ArrayExtractor;

impl ArrayExtractor {
    pub(in crate::cangjie) fn extract_file(
        full_path: &str,
    ) -> Result<Option<ExtractedArray>, CangjieError> {
        let content = std::fs::read_to_string(full_path)?;
        Ok(Self::extract(&content))
    }

    /// どの方法でも取り出せなければ `None` 。
    pub(in crate::cangjie) fn extract(content: &str) -> Option<ExtractedArray> {
        let content = content.trim();
        for strategy in EXTRACT_STRATEGIES {
            match strategy.extract(content) {
                Ok(elements) => {
                    log::debug!("extract {:?} elements={}", strategy, elements.len());
                    return Some(ExtractedArray { strategy, elements });
                }
                Err(ExtractFailure::InvalidJson(e)) => {
                    log::warn!("JSON parse failed ({}), trying manual parsing", e);
                }
                Err(failure) => log::debug!("extract {:?} failed: {}", strategy, failure),
            }
        }
        None
    }
}

impl ExtractStrategy {
    pub(in crate::cangjie) fn extract(
        self,
        content: &str,
    ) -> Result<Vec<String>, ExtractFailure> {
        match self {
            Self::Json => Self::extract_json(content),
            Self::CommaSplit => Self::extract_comma_split(content),
            Self::LineScan => Self::extract_line_scan(content),
        }
    }

    fn extract_json(content: &str) -> Result<Vec<String>, ExtractFailure> {
        let span = RE_BRACKET_SPAN
            .find(content)
            .ok_or(ExtractFailure::NoBracketSpan)?;
        match json::parse(span.as_str()).map_err(ExtractFailure::InvalidJson)? {
            JsonValue::Array(members) => Ok(members.iter().map(Self::member_to_string).collect()),
            _ => Err(ExtractFailure::NotArray),
        }
    }

    // 文字列以外の要素は JSON の表記をそのまま要素とする
    fn member_to_string(member: &JsonValue) -> String {
        member.as_str().map_or_else(|| member.dump(), String::from)
    }

    fn extract_comma_split(content: &str) -> Result<Vec<String>, ExtractFailure> {
        let captures = RE_BRACKET_SPAN
            .captures(content)
            .ok_or(ExtractFailure::NoBracketSpan)?;
        let elements = RE_COMMA_NEWLINE
            .split(captures[1].trim())
            .map(|token| token.trim().trim_end_matches(',').trim_end())
            .filter(|token| !token.is_empty())
            .map(|token| String::from(Self::strip_quotes(token)))
            .collect::<Vec<String>>();
        if elements.is_empty() {
            Err(ExtractFailure::NoElements)
        } else {
            Ok(elements)
        }
    }

    fn extract_line_scan(content: &str) -> Result<Vec<String>, ExtractFailure> {
        let mut elements = Vec::new();
        let mut is_in_array = false;
        for line in content.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix('[') {
                if let Some(end) = rest.find(']') {
                    return Ok(rest[..end]
                        .split(',')
                        .map(Self::clean_line_element)
                        .filter(|element| !element.is_empty())
                        .map(String::from)
                        .collect());
                }
                is_in_array = true;
                Self::push_line_element(&mut elements, rest);
            } else if is_in_array && line.trim_end_matches(';').ends_with(']') {
                let end = line.find(']').unwrap_or(line.len());
                Self::push_line_element(&mut elements, &line[..end]);
                return Ok(elements);
            } else if is_in_array {
                Self::push_line_element(&mut elements, line);
            }
        }
        if is_in_array {
            Err(ExtractFailure::Unterminated)
        } else {
            Err(ExtractFailure::NoBracketSpan)
        }
    }

    fn push_line_element(elements: &mut Vec<String>, text: &str) {
        let element = Self::clean_line_element(text);
        if !element.is_empty() {
            elements.push(String::from(element));
        }
    }

    fn clean_line_element(text: &str) -> &str {
        text.trim()
            .trim_end_matches(',')
            .trim_matches(|c: char| c == ' ' || c == '"' || c == '\'')
    }

    fn strip_quotes(token: &str) -> &str {
        let is_quoted = token.len() >= 2
            && ((token.starts_with('"') && token.ends_with('"'))
                || (token.starts_with('\'') && token.ends_with('\'')));
        if is_quoted {
            &token[1..token.len() - 1]
        } else {
            token
        }
    }
}
