use json::JsonValue;

use crate::cangjie::cangjie_convert::CangjieConvert;
use crate::cangjie::cangjie_extract::CangjieExtract;
use crate::cangjie::cangjie_shuffle::CangjieShuffle;
use crate::cangjie::test_unix::{full_path, io_config, read_file, write_file};
use crate::cangjie::CangjieError;

const CODE_TABLE: &str = "1→abc\tX
2→hqi\t我
3→hqiab\t甲

# comment
4→onfab\t乙
5→hqiab\t丙
6→abcdef\t丁
";

fn parse_strings(content: &str) -> Vec<String> {
    match json::parse(content).unwrap() {
        JsonValue::Array(members) => members
            .iter()
            .map(|member| member.as_str().unwrap().to_string())
            .collect(),
        _ => panic!("not a list"),
    }
}

#[test]
fn convert_run_test() {
    let directory = tempfile::tempdir().unwrap();
    let input = write_file(directory.path(), "table.txt", CODE_TABLE);
    let output = full_path(directory.path(), "converted.txt");
    let lines = CangjieConvert::run(&io_config(&input, &output)).unwrap();
    assert_eq!(lines, 8);
    let converted = read_file(&output);
    assert!(!converted.ends_with('\n'));
    assert_eq!(
        converted.lines().collect::<Vec<&str>>(),
        vec![
            "1→日月金\tX",
            "2→竹手戈\t我",
            "3→竹手戈日月\t甲",
            "",
            "# comment",
            "4→人弓火日月\t乙",
            "5→竹手戈日月\t丙",
            "6→日月金木水火\t丁",
        ]
    );
}

#[test]
fn convert_extract_shuffle_pipeline_test() {
    let directory = tempfile::tempdir().unwrap();
    let table = write_file(directory.path(), "table.txt", CODE_TABLE);
    let converted = full_path(directory.path(), "converted.txt");
    let codes = full_path(directory.path(), "codes.json");
    CangjieConvert::run(&io_config(&table, &converted)).unwrap();

    let length = CangjieExtract::run(&io_config(&converted, &codes)).unwrap();
    assert_eq!(length, 2);
    let extracted = parse_strings(&read_file(&codes));
    assert_eq!(extracted, vec!["人弓火日月", "竹手戈日月"]);
    assert!(read_file(&codes).contains("\n  \""));

    let length = CangjieShuffle::run(&io_config(&codes, &codes)).unwrap();
    assert_eq!(length, 2);
    let mut shuffled = parse_strings(&read_file(&codes));
    shuffled.sort();
    assert_eq!(shuffled, extracted);
}

#[test]
fn extract_run_empty_test() {
    let directory = tempfile::tempdir().unwrap();
    let input = write_file(directory.path(), "table.txt", "abc\tX\nnot a row\n");
    let output = full_path(directory.path(), "codes.json");
    assert_eq!(CangjieExtract::run(&io_config(&input, &output)).unwrap(), 0);
    assert!(parse_strings(&read_file(&output)).is_empty());
}

#[test]
fn shuffle_run_keeps_members_test() {
    let directory = tempfile::tempdir().unwrap();
    let input = write_file(directory.path(), "list.txt", r#"[1, "a", null, [2], {"k": 3}]"#);
    let output = full_path(directory.path(), "shuffled.json");
    assert_eq!(CangjieShuffle::run(&io_config(&input, &output)).unwrap(), 5);
    assert_eq!(read_file(&input), r#"[1, "a", null, [2], {"k": 3}]"#);
    let mut dumps = match json::parse(&read_file(&output)).unwrap() {
        JsonValue::Array(members) => members.iter().map(JsonValue::dump).collect::<Vec<_>>(),
        _ => panic!("not a list"),
    };
    dumps.sort();
    let mut expected = vec!["1", "\"a\"", "null", "[2]", "{\"k\":3}"];
    expected.sort_unstable();
    assert_eq!(dumps, expected);
}

#[test]
fn shuffle_run_error_test() {
    let directory = tempfile::tempdir().unwrap();
    let object = write_file(directory.path(), "object.json", r#"{"a": 1}"#);
    assert!(matches!(
        CangjieShuffle::run(&io_config(&object, &object)),
        Err(CangjieError::NotList { found: "object", .. })
    ));
    assert_eq!(read_file(&object), r#"{"a": 1}"#);

    let broken = write_file(directory.path(), "broken.json", "[1, 2");
    assert!(matches!(
        CangjieShuffle::run(&io_config(&broken, &broken)),
        Err(CangjieError::InvalidJson { .. })
    ));
    assert_eq!(read_file(&broken), "[1, 2");
}
