use crate::cangjie::command_line::CommandLineUtility;
use crate::cangjie::{CangjieError, Config, DEFAULT_CONVERT_OUTPUT_FULL_PATH};

pub(in crate::cangjie) struct CangjieConvertCommandLine {
    config: Config,
}

impl CangjieConvertCommandLine {
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
        let output_help = format!(
            "output file (default: {})",
            DEFAULT_CONVERT_OUTPUT_FULL_PATH
        );
        let mut command = CommandLineUtility::input_output_command(
            "cangjie_convert",
            "Convert the letter codes of a Cangjie code table into radicals",
            "code table (index→letters<TAB>character)",
            &output_help,
        );
        let matches = command
            .try_get_matches_from_mut(args)
            .unwrap_or_else(|e| e.exit());
        CommandLineUtility::setup_input_output(
            &mut command,
            &matches,
            Some(DEFAULT_CONVERT_OUTPUT_FULL_PATH),
            &mut self.config,
        )
    }
}
