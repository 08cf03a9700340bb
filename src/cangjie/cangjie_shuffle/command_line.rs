use crate::cangjie::command_line::CommandLineUtility;
use crate::cangjie::{CangjieError, Config};

pub(in crate::cangjie) struct CangjieShuffleCommandLine {
    config: Config,
}

impl CangjieShuffleCommandLine {
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
        let mut command = CommandLineUtility::input_output_command(
            "cangjie_shuffle",
            "Shuffle the order of a JSON list",
            "JSON file containing a list",
            "output JSON file (default: overwrite INPUT)",
        );
        let matches = command
            .try_get_matches_from_mut(args)
            .unwrap_or_else(|e| e.exit());
        CommandLineUtility::setup_input_output(&mut command, &matches, None, &mut self.config)
    }
}
