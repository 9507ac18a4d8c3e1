//! Tests for platform-agnostic types

use symline_core::types::{Address, ProcessId, ProcessRecord, SourceLocation, SymbolLanguage, SymbolName};

#[test]
fn test_process_id_from_u32()
{
    let pid = ProcessId::from(12345);
    assert_eq!(pid.0, 12345);
}

#[test]
fn test_process_id_to_u32()
{
    let pid = ProcessId::from(54321);
    let value: u32 = pid.into();
    assert_eq!(value, 54321);
}

#[test]
fn test_process_id_equality()
{
    let pid1 = ProcessId::from(12345);
    let pid2 = ProcessId::from(12345);
    let pid3 = ProcessId::from(54321);

    assert_eq!(pid1, pid2);
    assert_ne!(pid1, pid3);
}

#[test]
fn test_process_id_display()
{
    assert_eq!(format!("{}", ProcessId::from(4242)), "4242");
}

#[test]
fn test_process_record_new()
{
    let record = ProcessRecord::new(ProcessId::from(100), "producer.exe", Some("alice".to_string()));
    assert_eq!(record.pid, ProcessId::from(100));
    assert_eq!(record.name, "producer.exe");
    assert_eq!(record.user.as_deref(), Some("alice"));
}

#[test]
fn test_process_record_without_user()
{
    let record = ProcessRecord::new(ProcessId::from(2), "kthreadd", None);
    assert_eq!(record.user, None);
}

#[test]
fn test_address_value()
{
    let addr = Address::from(0x1000);
    assert_eq!(addr.value(), 0x1000);
    assert_eq!(u64::from(addr), 0x1000);
}

#[test]
fn test_address_checked_arithmetic()
{
    let addr = Address::from(0x1000);
    assert_eq!(addr.checked_add(0x100), Some(Address::from(0x1100)));
    assert_eq!(addr.checked_add(u64::MAX), None);
    assert_eq!(addr.checked_sub(0x100), Some(Address::from(0xf00)));
    assert_eq!(addr.checked_sub(u64::MAX), None);
}

#[test]
fn test_address_saturating_add()
{
    let addr = Address::from(0x1000);
    assert_eq!(addr.saturating_add(0x100), Address::from(0x1100));
    assert_eq!(addr.saturating_add(u64::MAX), Address::new(u64::MAX));
}

#[test]
fn test_address_parse_hex_and_decimal()
{
    assert_eq!("0x1000".parse::<Address>().unwrap(), Address::from(0x1000));
    assert_eq!("0XdeadBEEF".parse::<Address>().unwrap(), Address::from(0xdead_beef));
    assert_eq!("4096".parse::<Address>().unwrap(), Address::from(4096));
    assert!("banana".parse::<Address>().is_err());
    assert!("0x".parse::<Address>().is_err());
}

#[test]
fn test_address_display()
{
    assert_eq!(format!("{}", Address::from(0x1000)), "0x0000000000001000");
    assert_eq!(format!("{}", Address::ZERO), "0x0000000000000000");
}

#[test]
fn test_symbol_name_display_prefers_demangled()
{
    let mangled_only = SymbolName::new("_Z9passVoidv".to_string(), None, SymbolLanguage::Cpp);
    assert_eq!(mangled_only.display_name(), "_Z9passVoidv");

    let demangled = SymbolName::new(
        "_ZN6Person8passVoidE".to_string(),
        Some("Person::passVoid".to_string()),
        SymbolLanguage::Rust,
    );
    assert_eq!(demangled.display_name(), "Person::passVoid");
    assert_eq!(format!("{demangled}"), "Person::passVoid");
}

#[test]
fn test_symbol_name_matches_raw_and_demangled()
{
    let name = SymbolName::new(
        "_ZN6Person8passVoidE".to_string(),
        Some("Person::passVoid".to_string()),
        SymbolLanguage::Rust,
    );

    assert!(name.matches("_ZN6Person8passVoidE"));
    assert!(name.matches("Person::passVoid"));
    assert!(!name.matches("Person::passInt"));
    assert!(!name.matches("passVoid"));
}

#[test]
fn test_symbol_name_matches_hash_stripped()
{
    let name = SymbolName::new(
        "_ZN4core3fmt5write17h0123456789abcdefE".to_string(),
        Some("core::fmt::write::h0123456789abcdef".to_string()),
        SymbolLanguage::Rust,
    );

    assert!(name.matches("core::fmt::write"));
    assert!(name.matches("core::fmt::write::h0123456789abcdef"));
    // A non-hash final segment must not be stripped
    let plain = SymbolName::new(
        "x".to_string(),
        Some("Person::passVoid".to_string()),
        SymbolLanguage::Rust,
    );
    assert!(!plain.matches("Person"));
}

#[test]
fn test_source_location_display_full()
{
    let location = SourceLocation {
        file: "src/person.cpp".to_string(),
        line: Some(42),
        column: Some(5),
    };
    assert_eq!(format!("{location}"), "src/person.cpp:42:5");
}

#[test]
fn test_source_location_display_no_column()
{
    let location = SourceLocation {
        file: "src/person.cpp".to_string(),
        line: Some(42),
        column: None,
    };
    assert_eq!(format!("{location}"), "src/person.cpp:42");
}

#[test]
fn test_source_location_display_file_only()
{
    let location = SourceLocation::from_file("src/person.cpp");
    assert_eq!(location.line, None);
    assert_eq!(location.column, None);
    assert_eq!(format!("{location}"), "src/person.cpp");
}
