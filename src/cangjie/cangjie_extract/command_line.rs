use crate::cangjie::command_line::CommandLineUtility;
use crate::cangjie::{CangjieError, Config, DEFAULT_EXTRACT_OUTPUT_FULL_PATH, FIXED_CODE_LENGTH};

pub(in crate::cangjie) struct CangjieExtractCommandLine {
    config: Config,
}

impl CangjieExtractCommandLine {
    pub(in crate::cangjie) fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub(in crate::cangjie) fn get_config(&self) -> Config {
        self.config.clone()
    }

    pub(in crate::cangjie) fn start(&mut self) -> Result<(), CangjieError> {
        self.start_from(std::env::args_os())
    }

    pub(in crate::cangjie) fn start_from<I, T>(&mut self, args: I) -> Result<(), CangjieError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let about = format!(
            "Extract {}-radical codes from a converted Cangjie code table into a JSON list",
            FIXED_CODE_LENGTH
        );
        let output_help = format!(
            "output JSON file (default: {})",
            DEFAULT_EXTRACT_OUTPUT_FULL_PATH
        );
        let mut command = CommandLineUtility::input_output_command(
            "cangjie_extract",
            &about,
            "converted code table (index→radicals<TAB>character)",
            &output_help,
        );
        let matches = command
            .try_get_matches_from_mut(args)
            .unwrap_or_else(|e| e.exit());
        CommandLineUtility::setup_input_output(
            &mut command,
            &matches,
            Some(DEFAULT_EXTRACT_OUTPUT_FULL_PATH),
            &mut self.config,
        )
    }
}
