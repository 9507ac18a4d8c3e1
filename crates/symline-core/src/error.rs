//! # Error Types
//!
//! General error handling for the inspector.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for inspector operations
///
/// This enum represents all the ways locating a process and resolving a
/// symbol to a source line can fail. Every failure class gets its own
/// variant so callers can report a precise diagnostic instead of
/// collapsing everything into one opaque condition.
///
/// ## Error Categories
///
/// 1. **Process errors**: ProcessNotFound, AttachFailed
/// 2. **Image errors**: ImageParse, Dwarf
/// 3. **Resolution errors**: SymbolNotFound, NoLineInfo
/// 4. **I/O errors**: Io (reading the executable from disk)
#[derive(Error, Debug)]
pub enum InspectError
{
    /// No running process matches the requested executable name
    ///
    /// Name comparison is case-insensitive; this is returned only when no
    /// record in the enumeration snapshot matches at all.
    #[error("no running process matches '{0}'")]
    ProcessNotFound(String),

    /// Failed to bind the inspector to a process
    ///
    /// This happens when:
    /// - The PID does not exist or the process exited between enumeration
    ///   and attach
    /// - The executable path for the process cannot be determined
    #[error("failed to attach inspector to PID {pid}: {reason}")]
    AttachFailed
    {
        /// PID the attach was attempted against
        pid: u32,
        /// Description of what went wrong
        reason: String,
    },

    /// The process's executable could not be parsed as an object file
    #[error("failed to parse {}: {reason}", path.display())]
    ImageParse
    {
        /// Path of the executable that failed to parse
        path: PathBuf,
        /// Underlying parser message
        reason: String,
    },

    /// DWARF debug information could not be loaded or decoded
    ///
    /// The string carries the operation that failed plus the decoder's
    /// message (e.g. "loading DWARF sections: ...").
    #[error("DWARF error: {0}")]
    Dwarf(String),

    /// No symbol in the image matches the requested name
    ///
    /// The query is compared against raw linkage names and demangled names;
    /// a stripped binary typically produces this error for every query.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol or address resolved, but carries no source-line records
    ///
    /// This is the "binary built without debug info" case: the symbol table
    /// knows the name, but the line table has nothing for its address.
    #[error("no source-line information for {0}")]
    NoLineInfo(String),

    /// I/O error (reading the executable, etc.)
    ///
    /// A standard Rust `std::io::Error` converted to our error type.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, InspectError>`
///
/// ```rust
/// use symline_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, InspectError>;
