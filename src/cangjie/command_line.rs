use crate::cangjie::{CangjieError, Config};

pub(in crate::cangjie) struct CommandLineUtility;

impl CommandLineUtility {
    /// `<INPUT> [OUTPUT] [--verbose]` 形式の command を作る。
    pub(in crate::cangjie) fn input_output_command(
        name: &'static str,
        about: &str,
        input_help: &str,
        output_help: &str,
    ) -> clap::Command {
        clap::command!()
            .name(name)
            .about(about.to_string())
            .arg(
                clap::Arg::new("input")
                    .value_name("INPUT")
                    .help(input_help.to_string()),
            )
            .arg(
                clap::Arg::new("output")
                    .value_name("OUTPUT")
                    .help(output_help.to_string()),
            )
            .arg(Self::verbose_arg())
    }

    pub(in crate::cangjie) fn verbose_arg() -> clap::Arg {
        clap::Arg::new("verbose")
            .long("verbose")
            .action(clap::ArgAction::SetTrue)
            .help("verbose mode")
    }

    /// INPUT が無ければ help を表示して `Err` を返す。
    pub(in crate::cangjie) fn setup_input_output(
        command: &mut clap::Command,
        matches: &clap::ArgMatches,
        default_output_full_path: Option<&str>,
        config: &mut Config,
    ) -> Result<(), CangjieError> {
        config.is_verbose = matches.get_flag("verbose");
        let Some(input_full_path) = matches.get_one::<String>("input") else {
            if command.print_help().is_err() {
                return Err(CangjieError::CommandLine);
            }
            println!();
            return Err(CangjieError::MissingArgument("INPUT"));
        };
        Self::input_validator(input_full_path)?;
        config.input_full_path = input_full_path.clone();
        config.output_full_path = matches
            .get_one::<String>("output")
            .map(String::as_str)
            .or(default_output_full_path)
            .unwrap_or(input_full_path)
            .to_string();
        Ok(())
    }

    pub(in crate::cangjie) fn input_validator(value: &str) -> Result<(), CangjieError> {
        if std::path::Path::new(value).exists() {
            Ok(())
        } else {
            Err(CangjieError::MissingFile(String::from(value)))
        }
    }
}
