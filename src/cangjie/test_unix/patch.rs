use std::io::Cursor;

use crate::cangjie::cangjie_patch::{
    ArrayExtractor, ArrayPatcher, PatchSession, Prompt, Replacement,
};
use crate::cangjie::test_unix::{full_path, read_file, write_file};
use crate::cangjie::{CangjieError, BACKUP_SUFFIX, DEFAULT_ARRAY_NAME};

const TEMPLATE: &str = "function draw() {}\nvar La = [\"x\"];\ndraw();\n";
const DATA: &str = "var data = [\"a\", \"b\", \"c\"];\n";

fn new_session(input: &str) -> PatchSession<Cursor<Vec<u8>>, Vec<u8>> {
    PatchSession::new(
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
        ArrayPatcher::new(DEFAULT_ARRAY_NAME).unwrap(),
    )
}

fn backup_full_path(full_path: &str) -> String {
    format!("{}{}", full_path, BACKUP_SUFFIX)
}

#[test]
fn patch_file_test() {
    let directory = tempfile::tempdir().unwrap();
    let template = write_file(directory.path(), "la.js", TEMPLATE);
    let data = write_file(directory.path(), "array.js", DATA);
    let patcher = ArrayPatcher::new(DEFAULT_ARRAY_NAME).unwrap();
    let report = patcher.patch_file(&template, &data).unwrap();
    assert_eq!(report.extracted.elements, vec!["a", "b", "c"]);
    assert_eq!(report.backup_full_path, backup_full_path(&template));
    assert_eq!(read_file(&report.backup_full_path), TEMPLATE);
    let patched = read_file(&template);
    assert_eq!(patched, report.patched_content);
    assert!(patched.starts_with("function draw() {}\nvar La = [\"a\","));
    assert!(patched.ends_with("\"c\"];\ndraw();\n"));
    assert_eq!(
        ArrayExtractor::extract(&patched).unwrap().elements,
        vec!["a", "b", "c"]
    );
    assert_eq!(read_file(&data), DATA);
}

#[test]
fn patch_file_append_test() {
    let directory = tempfile::tempdir().unwrap();
    let template = write_file(directory.path(), "la.js", "draw();\n");
    let data = write_file(directory.path(), "array.js", "[\"日月金竹戈\"]");
    let patcher = ArrayPatcher::new(DEFAULT_ARRAY_NAME).unwrap();
    let report = patcher.patch_file(&template, &data).unwrap();
    assert_eq!(report.replacement, Replacement::Appended);
    assert_eq!(read_file(&template), "draw();\n\nvar La = [\"日月金竹戈\"];\n");
}

#[test]
fn patch_file_error_test() {
    let directory = tempfile::tempdir().unwrap();
    let template = write_file(directory.path(), "la.js", TEMPLATE);
    let no_array = write_file(directory.path(), "array.js", "nothing here\n");
    let missing = full_path(directory.path(), "missing.js");
    let patcher = ArrayPatcher::new(DEFAULT_ARRAY_NAME).unwrap();
    assert!(matches!(
        patcher.patch_file(&template, &missing),
        Err(CangjieError::MissingFile(_))
    ));
    assert!(matches!(
        patcher.patch_file(&missing, &no_array),
        Err(CangjieError::MissingFile(_))
    ));
    assert!(matches!(
        patcher.patch_file(&template, &no_array),
        Err(CangjieError::ArrayNotFound(_))
    ));
    assert_eq!(read_file(&template), TEMPLATE);
    assert!(!std::path::Path::new(&backup_full_path(&template)).exists());
}

#[test]
fn session_single_test() {
    let directory = tempfile::tempdir().unwrap();
    let template = write_file(directory.path(), "la.js", TEMPLATE);
    let data = write_file(directory.path(), "array.js", DATA);
    let mut session = new_session(&format!("1\n{}\n{}\n", template, data));
    session.run().unwrap();
    let output = String::from_utf8(session.into_writer()).unwrap();
    assert!(output.contains("Extracted 3 elements"));
    assert!(output.contains("    1. a\n    2. b\n    3. c\n"));
    assert!(output.contains("Replacement succeeded"));
    assert!(output.contains("   2: var La = [\"a\",\n"));
    assert_eq!(read_file(&backup_full_path(&template)), TEMPLATE);
}

#[test]
fn session_single_append_test() {
    let directory = tempfile::tempdir().unwrap();
    let template = write_file(directory.path(), "la.js", "draw();\n");
    let data = write_file(directory.path(), "array.js", DATA);
    let mut session = new_session(&format!("1\n{}\n{}\n", template, data));
    session.run().unwrap();
    let output = String::from_utf8(session.into_writer()).unwrap();
    assert!(output.contains(&format!(
        "Warning: La array declaration not found, appended to the end of {}\n",
        template
    )));
    assert_eq!(
        read_file(&template),
        "draw();\n\nvar La = [\"a\",\n\t\t\"b\",\n\t\t\"c\"];\n"
    );
}

#[test]
fn session_batch_test() {
    let template_directory = tempfile::tempdir().unwrap();
    let data_directory = tempfile::tempdir().unwrap();
    write_file(template_directory.path(), "a_la.js", "var La = [];\n");
    let template = write_file(template_directory.path(), "b_la.js", TEMPLATE);
    write_file(data_directory.path(), "array.js", DATA);
    let input = format!(
        "2\n{}\n{}\n2\n1\nY\n",
        template_directory.path().to_str().unwrap(),
        data_directory.path().to_str().unwrap()
    );
    let mut session = new_session(&input);
    session.run().unwrap();
    let output = String::from_utf8(session.into_writer()).unwrap();
    assert!(output.contains("Found 2 template files:\n  1. a_la.js\n  2. b_la.js\n"));
    assert!(output.contains("Found 1 data files:\n  1. array.js\n"));
    assert!(output.contains("Batch process complete"));
    assert_eq!(
        read_file(&full_path(template_directory.path(), "a_la.js")),
        "var La = [];\n"
    );
    assert_eq!(
        ArrayExtractor::extract(&read_file(&template)).unwrap().elements,
        vec!["a", "b", "c"]
    );
}

#[test]
fn session_batch_cancel_test() {
    let directory = tempfile::tempdir().unwrap();
    let template = write_file(directory.path(), "la.js", TEMPLATE);
    write_file(directory.path(), "array.js", DATA);
    let directory_name = directory.path().to_str().unwrap();
    let input = format!("2\n{}\n{}\n1\n1\nn\n", directory_name, directory_name);
    let mut session = new_session(&input);
    session.run().unwrap();
    let output = String::from_utf8(session.into_writer()).unwrap();
    assert!(output.ends_with("Cancelled\n"));
    assert_eq!(read_file(&template), TEMPLATE);
    assert!(!std::path::Path::new(&backup_full_path(&template)).exists());
}

#[test]
fn session_batch_error_test() {
    let directory = tempfile::tempdir().unwrap();
    write_file(directory.path(), "la.js", TEMPLATE);
    let directory_name = directory.path().to_str().unwrap();
    let input = format!("2\n{}\n{}\n", directory_name, directory_name);
    assert!(matches!(
        new_session(&input).run(),
        Err(CangjieError::NoCandidates { .. })
    ));

    write_file(directory.path(), "array.js", DATA);
    let input = format!("2\n{}\n{}\n5\n", directory_name, directory_name);
    assert!(matches!(
        new_session(&input).run(),
        Err(CangjieError::Selection(_))
    ));
}
