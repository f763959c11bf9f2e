use std::io;
use std::path::PathBuf;

use lin::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::InconsistentAnswers("unknown preprocessor 'stylus'".to_string());
    assert_eq!(err.to_string(), "Inconsistent answers: unknown preprocessor 'stylus'.");

    let err = Error::OutputDirectoryExistsError { output_dir: "shop".to_string() };
    assert_eq!(err.to_string(), "Project directory 'shop' already exists.");
}

#[test]
fn test_materialize_error_names_file() {
    let err = Error::MaterializeError {
        path: PathBuf::from("shop/version.json"),
        source: Box::new(Error::IoError(io::Error::new(io::ErrorKind::NotFound, "missing"))),
    };
    assert!(err.to_string().starts_with("Failed to materialize 'shop/version.json'"));
}
