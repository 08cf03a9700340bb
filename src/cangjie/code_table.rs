use crate::cangjie::{FIELD_SEPARATOR, INDEX_SEPARATOR};

/// 英字 a-z に対応する倉頡字根。 index は `letter - b'a'` 。
const RADICAL_TABLE: [char; 26] = [
    '日', '月', '金', '木', '水', '火', '土', '竹', '戈', '十', '大', '中', '一', '弓', '人', '心',
    '手', '口', '尸', '廿', '山', '女', '田', '難', '卜', '片',
];

pub(in crate::cangjie) struct Radical;

impl Radical {
    /// 大文字小文字は区別しない。英字以外は `None` 。
    pub(in crate::cangjie) const fn from_letter(letter: char) -> Option<char> {
        if letter.is_ascii_alphabetic() {
            Some(RADICAL_TABLE[(letter.to_ascii_lowercase() as u8 - b'a') as usize])
        } else {
            None
        }
    }

    /// 英字を字根に置き換える。英字以外はそのまま残す。
    pub(in crate::cangjie) fn convert_letters(letters: &str) -> String {
        letters
            .chars()
            .map(|c| Self::from_letter(c).unwrap_or(c))
            .collect()
    }

    /// CJK Unified Ideographs (U+4E00..=U+9FFF) かどうか。
    pub(in crate::cangjie) const fn is_ideograph(c: char) -> bool {
        matches!(c, '\u{4e00}'..='\u{9fff}')
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::cangjie) struct CodeTableRow<'a> {
    pub(in crate::cangjie) index: Option<&'a str>,
    pub(in crate::cangjie) code: &'a str,
    pub(in crate::cangjie) character: &'a str,
}

impl<'a> CodeTableRow<'a> {
    /// 前後の空白を除いた行を tab で分割し、ちょうど 2 field のときだけ `Some` を返す。
    pub(in crate::cangjie) fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        let (index_code, character) = line.split_once(FIELD_SEPARATOR)?;
        if character.contains(FIELD_SEPARATOR) {
            return None;
        }
        let (index, code) = match index_code.split_once(INDEX_SEPARATOR) {
            Some((index, code)) => (Some(index.trim()), code.trim()),
            None => (None, index_code.trim()),
        };
        Some(Self {
            index: index.filter(|index| !index.is_empty()),
            code,
            character,
        })
    }

    pub(in crate::cangjie) fn to_line_with_code(&self, code: &str) -> String {
        self.index.map_or_else(
            || format!("{}{}{}", code, FIELD_SEPARATOR, self.character),
            |index| {
                format!(
                    "{}{}{}{}{}",
                    index, INDEX_SEPARATOR, code, FIELD_SEPARATOR, self.character
                )
            },
        )
    }
}

impl std::fmt::Display for CodeTableRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_line_with_code(self.code))
    }
}
