use std::fs;
use tempfile::tempdir;
use treebat::output::{self, OutputFormat, CONTENT_TYPE};
use treebat::{convert, load_options, ConversionRequest, LineEnding, TreebatError};
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let listing = "MyProject/\n├── main.py\n├── requirements.txt\n└── src/\n    └── app.py\n";
    let conversion = convert(&ConversionRequest::new(listing)).unwrap();
    assert_eq!(conversion.root, "MyProject");
    assert_eq!(conversion.entries.len(), 4);
    let path = output::write_script_to_dir(&conversion, dir.path()).unwrap();
    assert!(path.ends_with("MyProject.bat"));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, conversion.script);
    assert!(written.starts_with("@echo off\nset ROOT=MyProject\nmkdir %ROOT%\n"));
    assert_eq!(CONTENT_TYPE, "text/plain");
}
#[test]
fn integration_validation_errors() {
    let err = convert(&ConversionRequest::new("  \n\t\n")).unwrap_err();
    assert!(matches!(err, TreebatError::EmptyInput));
    let err = convert(&ConversionRequest::new("main.py\nlib.rs")).unwrap_err();
    assert!(matches!(err, TreebatError::NoRoot));
    assert!(err.to_string().contains("MyProject/"));
}
#[test]
fn integration_options_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("treebat.json");
    fs::write(&config, r#"{"root_variable": "BASE", "pause": false, "line_ending": "crlf"}"#)
        .unwrap();
    let options = load_options(&config).unwrap();
    assert_eq!(options.line_ending, LineEnding::CrLf);
    let conversion =
        convert(&ConversionRequest::new("P/\nsrc/").with_options(options)).unwrap();
    assert_eq!(
        conversion.script,
        "@echo off\r\nset BASE=P\r\nmkdir %BASE%\r\nmkdir %BASE%\\src\r\necho ✅ Project structure created successfully!"
    );
    fs::write(&config, "{not json").unwrap();
    assert!(matches!(
        load_options(&config),
        Err(TreebatError::Config { .. })
    ));
}
#[test]
fn integration_json_and_entries_output() {
    let conversion = convert(&ConversionRequest::new("P/\n├── a.txt\n└── b/")).unwrap();
    let json = output::format_conversion(&conversion, OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["root"], "P");
    assert_eq!(value["entries"][0]["kind"], "file");
    assert_eq!(value["entries"][1]["kind"], "directory");
    assert_eq!(value["entries"][1]["path"], "b");
    let listing = output::format_conversion(&conversion, OutputFormat::Entries, false).unwrap();
    assert_eq!(listing, "P/\nfile  a.txt\ndir   b\n");
}
#[test]
fn integration_root_must_be_plain_file_name() {
    let base = tempdir().unwrap();
    let out = base.path().join("out");
    fs::create_dir(&out).unwrap();
    for listing in ["../escaped/\na.txt", "a/b/\nc.txt", "..\\up/\nd.txt", "./\ne.txt"] {
        let conversion = convert(&ConversionRequest::new(listing)).unwrap();
        let err = output::write_script_to_dir(&conversion, &out).unwrap_err();
        assert!(matches!(err, TreebatError::InvalidRoot(_)), "{listing:?}");
    }
    assert!(!base.path().join("escaped.bat").exists());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    assert_eq!(output::script_file_name("MyProject").unwrap(), "MyProject.bat");
}
