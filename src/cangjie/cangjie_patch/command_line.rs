use crate::cangjie::command_line::CommandLineUtility;
use crate::cangjie::{CangjieError, Config};

/// file path などは対話的に入力するため、 command line で指定できるのは `--verbose` のみ。
pub(in crate::cangjie) struct CangjiePatchCommandLine {
    config: Config,
}

impl CangjiePatchCommandLine {
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
        let matches = clap::command!()
            .name("cangjie_patch")
            .about("Replace the array literal of a script file with the array of another file")
            .arg(CommandLineUtility::verbose_arg())
            .try_get_matches_from(args)
            .unwrap_or_else(|e| e.exit());
        self.config.is_verbose = matches.get_flag("verbose");
        Ok(())
    }
}
