//! `cangjie_patch`
//!
//! # はじめに
//!
//! 埋め込み先 script (template) 中の配列 literal (既定では `La`) を、データ script 中の配列の
//! 要素で置き換える。置き換える前に template を `<template>.bak` に copy する。書き込みに
//! 失敗しても自動では元に戻さないので、必要なら `.bak` から手で戻す。
//!
//!
//! # データ script からの取り出し
//!
//! `ExtractStrategy` の順 (JSON → `",\n"` 分割 → 行単位) に試し、最初に成功したものを使う。
//!
//!
//! # template の置き換え
//!
//! `var` → `let` → `const` → 代入のみ、の順に宣言を探し、最初に見つかった種類の宣言の
//! literal をすべて置き換える。宣言の前置部分と末尾の `;` はそのまま残す。宣言が見つからない場合は
//! ファイル末尾に宣言を追加する。
//!
//! literal の検出は正規表現による。 literal 中に入れ子の `[` `]` があると正しく置き換え
//! られないことに注意。

mod array_extractor;
mod batch;
mod session;

pub(in crate::cangjie) mod command_line;

use regex::Regex;

pub(in crate::cangjie) use crate::cangjie::cangjie_patch::array_extractor::{
    ArrayExtractor, ExtractedArray,
};
pub(in crate::cangjie) use crate::cangjie::cangjie_patch::batch::BatchCandidates;
pub(in crate::cangjie) use crate::cangjie::cangjie_patch::session::{PatchSession, Prompt};
use crate::cangjie::{CangjieError, BACKUP_SUFFIX};

const LITERAL_SEPARATOR: &str = ",\n\t\t";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::cangjie) enum Declaration {
    Var,
    Let,
    Const,
    Assignment,
}

const DECLARATIONS: [Declaration; 4] = [
    Declaration::Var,
    Declaration::Let,
    Declaration::Const,
    Declaration::Assignment,
];

impl Declaration {
    const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Var => Some("var"),
            Self::Let => Some("let"),
            Self::Const => Some("const"),
            Self::Assignment => None,
        }
    }

    /// group 1 が宣言の前置部分、 group 2 が末尾の `;` (無ければ空) 。
    /// literal は次の (escape されていない) `]` まで。
    ///
    /// 代入のみの場合、名前の直前は行頭か識別子に使えない文字 (group 1 に含める) 。
    fn pattern(self, array_name: &str) -> String {
        let name = regex::escape(array_name);
        let prefix = self.keyword().map_or_else(
            || format!(r"(?:^|[^\w$]){}", name),
            |keyword| format!(r"\b{}\s+{}", keyword, name),
        );
        format!(r"(?sm)({}\s*=\s*)\[(?:\\.|[^\]\\])*\](;?)", prefix)
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword().unwrap_or("assignment"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::cangjie) enum Replacement {
    Declaration(Declaration),
    Appended,
}

#[derive(Debug)]
pub(in crate::cangjie) struct PatchReport {
    pub(in crate::cangjie) extracted: ExtractedArray,
    pub(in crate::cangjie) backup_full_path: String,
    pub(in crate::cangjie) replacement: Replacement,
    pub(in crate::cangjie) patched_content: String,
}

pub(in crate::cangjie) struct ArrayPatcher {
    array_name: String,
    patterns: Vec<(Declaration, Regex)>,
}

impl ArrayPatcher {
    pub(in crate::cangjie) fn new(array_name: &str) -> Result<Self, CangjieError> {
        let mut patterns = Vec::new();
        for declaration in DECLARATIONS {
            patterns.push((declaration, Regex::new(&declaration.pattern(array_name))?));
        }
        Ok(Self {
            array_name: String::from(array_name),
            patterns,
        })
    }

    pub(in crate::cangjie) fn get_array_name(&self) -> &str {
        &self.array_name
    }

    /// データを取り出し、 backup を作ってから template を書き換える。
    pub(in crate::cangjie) fn patch_file(
        &self,
        template_full_path: &str,
        data_full_path: &str,
    ) -> Result<PatchReport, CangjieError> {
        for full_path in [template_full_path, data_full_path] {
            if !std::path::Path::new(full_path).is_file() {
                return Err(CangjieError::MissingFile(String::from(full_path)));
            }
        }
        let extracted = ArrayExtractor::extract_file(data_full_path)?
            .ok_or_else(|| CangjieError::ArrayNotFound(String::from(data_full_path)))?;
        let backup_full_path = format!("{}{}", template_full_path, BACKUP_SUFFIX);
        std::fs::copy(template_full_path, &backup_full_path)?;
        log::info!("backup {} -> {}", template_full_path, backup_full_path);
        let content = std::fs::read_to_string(template_full_path)?;
        let (patched_content, replacement) = self.replace(&content, &extracted.elements);
        std::fs::write(template_full_path, &patched_content)?;
        Ok(PatchReport {
            extracted,
            backup_full_path,
            replacement,
            patched_content,
        })
    }

    pub(in crate::cangjie) fn replace(
        &self,
        content: &str,
        elements: &[String],
    ) -> (String, Replacement) {
        let literal = Self::format_literal(elements);
        for (declaration, regex) in &self.patterns {
            if regex.is_match(content) {
                log::debug!("match {} pattern={}", declaration, regex.as_str());
                let replaced = regex.replace_all(content, |captures: &regex::Captures<'_>| {
                    format!("{}{}{}", &captures[1], literal, &captures[2])
                });
                return (replaced.into_owned(), Replacement::Declaration(*declaration));
            }
        }
        (
            format!(
                "{}\n\nvar {} = {};\n",
                content.trim_end(),
                self.array_name,
                literal
            ),
            Replacement::Appended,
        )
    }

    /// `["a",\n\t\t"b"]` の形式。要素は JSON の文字列として quote する。
    pub(in crate::cangjie) fn format_literal(elements: &[String]) -> String {
        format!(
            "[{}]",
            elements
                .iter()
                .map(|element| json::stringify(element.as_str()))
                .collect::<Vec<String>>()
                .join(LITERAL_SEPARATOR)
        )
    }
}
