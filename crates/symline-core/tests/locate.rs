//! Tests for the process locator
//!
//! The scan itself is a pure function over snapshot records, so these run
//! against synthetic lists instead of live processes.

use symline_core::locate::find_in;
use symline_core::types::{ProcessId, ProcessRecord};

fn record(pid: u32, name: &str) -> ProcessRecord
{
    ProcessRecord::new(ProcessId::from(pid), name, None)
}

#[test]
fn test_find_in_returns_matching_pid()
{
    let records = vec![record(1, "init"), record(321, "producer.exe"), record(999, "consumer.exe")];
    assert_eq!(find_in(&records, "producer.exe"), Some(ProcessId::from(321)));
}

#[test]
fn test_find_in_empty_list()
{
    assert_eq!(find_in(&[], "producer.exe"), None);
}

#[test]
fn test_find_in_no_match()
{
    let records = vec![record(1, "init"), record(2, "kthreadd")];
    assert_eq!(find_in(&records, "producer.exe"), None);
}

#[test]
fn test_find_in_is_case_insensitive()
{
    let records = vec![record(7, "Producer.EXE")];
    assert_eq!(find_in(&records, "producer.exe"), Some(ProcessId::from(7)));
    assert_eq!(find_in(&records, "PRODUCER.exe"), Some(ProcessId::from(7)));

    let lower = vec![record(8, "producer.exe")];
    assert_eq!(find_in(&lower, "Producer.EXE"), Some(ProcessId::from(8)));
}

#[test]
fn test_find_in_first_match_wins()
{
    let records = vec![
        record(10, "producer.exe"),
        record(20, "producer.exe"),
        record(30, "producer.exe"),
    ];
    assert_eq!(find_in(&records, "producer.exe"), Some(ProcessId::from(10)));
}

#[test]
fn test_find_in_does_not_match_substrings()
{
    let records = vec![record(5, "producer.exe.backup")];
    assert_eq!(find_in(&records, "producer.exe"), None);
}
