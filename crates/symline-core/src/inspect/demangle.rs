//! Symbol demangling utilities.
//!
//! Compilers "mangle" symbol names to encode type information and
//! namespaces. This module turns raw linkage names back into human-readable
//! form and classifies their source language:
//!
//! - Rust symbols: start with `_R` (v0) or `_ZN` (legacy), or contain `::`
//! - C++ symbols: start with `_Z` (Itanium mangling)
//! - Everything else: unmangled C or unknown
//!
//! Only Rust demangling is attempted; Itanium-mangled C++ names are kept
//! raw, so they match queries by their linkage name.

use rustc_demangle::try_demangle;

use crate::error::InspectError;
use crate::types::{SymbolLanguage, SymbolName};

/// Create a `SymbolName` from a raw mangled symbol string.
///
/// Attempts to demangle the symbol with `rustc_demangle` and detects its
/// language from the mangling pattern. Demangling failure is not an error:
/// the raw name simply stands alone.
pub(crate) fn make_symbol_name(raw: String) -> SymbolName
{
    let demangled = try_demangle(&raw).ok().map(|d| d.to_string());
    let language = if raw.starts_with("_R") || raw.starts_with("_ZN") || raw.contains("::") {
        SymbolLanguage::Rust
    } else if raw.starts_with("_Z") {
        SymbolLanguage::Cpp
    } else {
        SymbolLanguage::Unknown
    };

    SymbolName::new(raw, demangled, language)
}

/// Map a gimli DWARF error to an `InspectError` with context.
pub(crate) fn map_dwarf_error(context: &str, err: gimli::Error) -> InspectError
{
    InspectError::Dwarf(format!("{context}: {err}"))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn legacy_rust_symbol_demangles()
    {
        let name = make_symbol_name("_ZN4core3fmt5write17h0123456789abcdefE".to_string());
        assert_eq!(name.language(), SymbolLanguage::Rust);
        let demangled = name.demangled().expect("legacy Rust symbol should demangle");
        assert!(demangled.starts_with("core::fmt::write"));
    }

    #[test]
    fn plain_c_symbol_stays_raw()
    {
        let name = make_symbol_name("main".to_string());
        assert_eq!(name.language(), SymbolLanguage::Unknown);
        assert_eq!(name.demangled(), None);
        assert_eq!(name.display_name(), "main");
    }

    #[test]
    fn itanium_symbol_is_classified_cpp()
    {
        let name = make_symbol_name("_Z9passVoidv".to_string());
        assert_eq!(name.language(), SymbolLanguage::Cpp);
    }
}
