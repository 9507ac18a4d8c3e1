//! Tests for error handling

use std::path::PathBuf;

use symline_core::error::{InspectError, Result};

#[test]
fn test_process_not_found_display()
{
    let error = InspectError::ProcessNotFound("producer.exe".to_string());
    let message = format!("{}", error);
    assert!(message.contains("producer.exe"));
    assert!(message.contains("no running process"));
}

#[test]
fn test_attach_failed_display()
{
    let error = InspectError::AttachFailed {
        pid: 12345,
        reason: "process does not exist".to_string(),
    };
    let message = format!("{}", error);
    assert!(message.contains("12345"));
    assert!(message.contains("process does not exist"));
}

#[test]
fn test_image_parse_display()
{
    let error = InspectError::ImageParse {
        path: PathBuf::from("/usr/bin/producer"),
        reason: "bad magic".to_string(),
    };
    let message = format!("{}", error);
    assert!(message.contains("/usr/bin/producer"));
    assert!(message.contains("bad magic"));
}

#[test]
fn test_symbol_not_found_display()
{
    let error = InspectError::SymbolNotFound("Person::passVoid".to_string());
    let message = format!("{}", error);
    assert!(message.contains("Person::passVoid"));
    assert!(message.contains("not found"));
}

#[test]
fn test_no_line_info_display()
{
    let error = InspectError::NoLineInfo("Person::passVoid".to_string());
    let message = format!("{}", error);
    assert!(message.contains("no source-line information"));
    assert!(message.contains("Person::passVoid"));
}

#[test]
fn test_io_error_conversion()
{
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: InspectError = io.into();
    let message = format!("{}", error);
    assert!(message.contains("IO error"));
    assert!(message.contains("gone"));
}

#[test]
fn test_result_type()
{
    // Test that Result type is properly aliased
    let _result: Result<()> = Ok(());
    let _error_result: Result<()> = Err(InspectError::ProcessNotFound("x".to_string()));
}
