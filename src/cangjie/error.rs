#[derive(Debug, thiserror::Error)]
pub enum CangjieError {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error(r#"Json error: "{full_path}" is not valid JSON ({source})"#)]
    InvalidJson {
        full_path: String,
        source: json::Error,
    },
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error(r#"file "{0}" not found"#)]
    MissingFile(String),
    #[error(r#""{full_path}" should contain a JSON list but found {found}"#)]
    NotList {
        full_path: String,
        found: &'static str,
    },
    #[error(r#"could not extract an array from "{0}""#)]
    ArrayNotFound(String),
    #[error(r#"no template or data script files found in "{template_directory}" and "{data_directory}""#)]
    NoCandidates {
        template_directory: String,
        data_directory: String,
    },
    #[error("invalid selection: {0}")]
    Selection(String),
    #[error("CommandLine error")]
    CommandLine,
}
