use std::path::{Path, PathBuf};

use crate::cangjie::CangjieError;

const SCRIPT_EXTENSION: &str = ".js";
const TEMPLATE_NAME_KEYWORD: &str = "la";
const DATA_NAME_KEYWORD: &str = "array";

/// batch mode で選択候補となる script file の一覧。
///
/// 名前 (小文字化したもの) に `"la"` を含む `*.js` を埋め込み先、 `"array"` を含む `*.js` を
/// データとして扱う。一覧は名前順。
#[derive(Debug)]
pub(in crate::cangjie) struct BatchCandidates {
    template_directory: PathBuf,
    data_directory: PathBuf,
    pub(in crate::cangjie) template_filenames: Vec<String>,
    pub(in crate::cangjie) data_filenames: Vec<String>,
}

impl BatchCandidates {
    /// 空文字列の directory は current directory とみなす。
    pub(in crate::cangjie) fn scan(
        template_directory: &str,
        data_directory: &str,
    ) -> Result<Self, CangjieError> {
        let template_directory = Self::resolve_directory(template_directory)?;
        let data_directory = Self::resolve_directory(data_directory)?;
        let template_filenames =
            Self::list_script_filenames(&template_directory, TEMPLATE_NAME_KEYWORD)?;
        let data_filenames = Self::list_script_filenames(&data_directory, DATA_NAME_KEYWORD)?;
        log::debug!(
            "batch candidates templates={} data={}",
            template_filenames.len(),
            data_filenames.len()
        );
        Ok(Self {
            template_directory,
            data_directory,
            template_filenames,
            data_filenames,
        })
    }

    pub(in crate::cangjie) fn is_empty(&self) -> bool {
        self.template_filenames.is_empty() || self.data_filenames.is_empty()
    }

    pub(in crate::cangjie) fn to_no_candidates_error(&self) -> CangjieError {
        CangjieError::NoCandidates {
            template_directory: self.template_directory.to_string_lossy().into_owned(),
            data_directory: self.data_directory.to_string_lossy().into_owned(),
        }
    }

    /// 番号は 1 始まり。 `(template_full_path, data_full_path)` を返す。
    pub(in crate::cangjie) fn select(
        &self,
        template_number: usize,
        data_number: usize,
    ) -> Result<(String, String), CangjieError> {
        let template_filename = Self::get_numbered(&self.template_filenames, template_number)?;
        let data_filename = Self::get_numbered(&self.data_filenames, data_number)?;
        Ok((
            Self::join(&self.template_directory, template_filename),
            Self::join(&self.data_directory, data_filename),
        ))
    }

    /// `"1"` から `"{length}"` までを受け付ける。
    pub(in crate::cangjie) fn parse_selection(
        answer: &str,
        length: usize,
    ) -> Result<usize, CangjieError> {
        answer
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|number| (1..=length).contains(number))
            .ok_or_else(|| {
                CangjieError::Selection(format!(r#""{}" (expected 1-{})"#, answer, length))
            })
    }

    fn get_numbered(filenames: &[String], number: usize) -> Result<&str, CangjieError> {
        number
            .checked_sub(1)
            .and_then(|index| filenames.get(index))
            .map(String::as_str)
            .ok_or_else(|| {
                CangjieError::Selection(format!("{} (expected 1-{})", number, filenames.len()))
            })
    }

    fn resolve_directory(directory: &str) -> Result<PathBuf, CangjieError> {
        if directory.is_empty() {
            return Ok(std::env::current_dir()?);
        }
        let path = PathBuf::from(directory);
        if path.is_dir() {
            Ok(path)
        } else {
            Err(CangjieError::MissingFile(String::from(directory)))
        }
    }

    fn list_script_filenames(directory: &Path, keyword: &str) -> Result<Vec<String>, CangjieError> {
        let mut filenames = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();
            if filename.ends_with(SCRIPT_EXTENSION) && filename.to_lowercase().contains(keyword) {
                filenames.push(filename);
            }
        }
        filenames.sort();
        Ok(filenames)
    }

    fn join(directory: &Path, filename: &str) -> String {
        directory.join(filename).to_string_lossy().into_owned()
    }
}
