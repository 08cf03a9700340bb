use crate::cangjie::cangjie_convert::command_line::CangjieConvertCommandLine;
use crate::cangjie::cangjie_extract::command_line::CangjieExtractCommandLine;
use crate::cangjie::cangjie_patch::command_line::CangjiePatchCommandLine;
use crate::cangjie::cangjie_shuffle::command_line::CangjieShuffleCommandLine;
use crate::cangjie::test_unix::{full_path, write_file};
use crate::cangjie::{
    CangjieError, DEFAULT_ARRAY_NAME, DEFAULT_CONVERT_OUTPUT_FULL_PATH,
    DEFAULT_EXTRACT_OUTPUT_FULL_PATH,
};

#[test]
fn convert_command_line_test() {
    let directory = tempfile::tempdir().unwrap();
    let input = write_file(directory.path(), "table.txt", "");
    let output = full_path(directory.path(), "out.txt");

    let mut command_line = CangjieConvertCommandLine::new();
    command_line.start_from(["cangjie_convert", input.as_str()]).unwrap();
    let config = command_line.get_config();
    assert_eq!(config.input_full_path, input);
    assert_eq!(config.output_full_path, DEFAULT_CONVERT_OUTPUT_FULL_PATH);
    assert!(!config.is_verbose);

    let mut command_line = CangjieConvertCommandLine::new();
    command_line
        .start_from(["cangjie_convert", "--verbose", input.as_str(), output.as_str()])
        .unwrap();
    let config = command_line.get_config();
    assert_eq!(config.output_full_path, output);
    assert!(config.is_verbose);
}

#[test]
fn extract_command_line_test() {
    let directory = tempfile::tempdir().unwrap();
    let input = write_file(directory.path(), "converted.txt", "");
    let mut command_line = CangjieExtractCommandLine::new();
    command_line.start_from(["cangjie_extract", input.as_str()]).unwrap();
    let config = command_line.get_config();
    assert_eq!(config.output_full_path, DEFAULT_EXTRACT_OUTPUT_FULL_PATH);
}

#[test]
fn shuffle_command_line_test() {
    let directory = tempfile::tempdir().unwrap();
    let input = write_file(directory.path(), "codes.json", "[]");
    let output = full_path(directory.path(), "shuffled.json");

    let mut command_line = CangjieShuffleCommandLine::new();
    command_line.start_from(["cangjie_shuffle", input.as_str()]).unwrap();
    assert_eq!(command_line.get_config().output_full_path, input);

    let mut command_line = CangjieShuffleCommandLine::new();
    command_line
        .start_from(["cangjie_shuffle", input.as_str(), output.as_str()])
        .unwrap();
    assert_eq!(command_line.get_config().output_full_path, output);
}

#[test]
fn command_line_missing_input_test() {
    let directory = tempfile::tempdir().unwrap();
    let missing = full_path(directory.path(), "missing.txt");
    assert!(matches!(
        CangjieConvertCommandLine::new().start_from(["cangjie_convert", missing.as_str()]),
        Err(CangjieError::MissingFile(_))
    ));
    assert!(matches!(
        CangjieShuffleCommandLine::new().start_from(["cangjie_shuffle", missing.as_str()]),
        Err(CangjieError::MissingFile(_))
    ));
    assert!(matches!(
        CangjieExtractCommandLine::new().start_from(["cangjie_extract"]),
        Err(CangjieError::MissingArgument("INPUT"))
    ));
}

#[test]
fn patch_command_line_test() {
    let mut command_line = CangjiePatchCommandLine::new();
    command_line.start_from(["cangjie_patch"]).unwrap();
    let config = command_line.get_config();
    assert!(!config.is_verbose);
    assert_eq!(config.array_name, DEFAULT_ARRAY_NAME);

    let mut command_line = CangjiePatchCommandLine::new();
    command_line
        .start_from(["cangjie_patch", "--verbose"])
        .unwrap();
    assert!(command_line.get_config().is_verbose);
}
