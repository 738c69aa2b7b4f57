use std::io;

use workergen::error::Error;

#[test]
fn test_io_error_names_path() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err = Error::io("/tmp/out/file.txt", io_err);

    match &err {
        Error::IoError { path, .. } => assert_eq!(path, "/tmp/out/file.txt"),
        _ => panic!("Expected IoError variant"),
    }
    assert_eq!(err.to_string(), "IO error on '/tmp/out/file.txt': file not found.");
}

#[test]
fn test_error_display() {
    let err = Error::PathResolutionError {
        path: "tpl".to_string(),
        reason: "no name".to_string(),
    };
    assert_eq!(err.to_string(), "Unable to resolve path 'tpl': no name.");

    let err = Error::TemplateParseError {
        template: "a.txt".to_string(),
        reason: "unclosed action".to_string(),
    };
    assert_eq!(err.to_string(), "Unable to parse template 'a.txt': unclosed action.");
}
