//! # symline-core
//!
//! Process location and debug-symbol source-line resolution for symline.
//!
//! This crate provides the library half of the tool:
//! - Enumerating running processes and locating one by executable name
//! - Binding an inspector to a process id
//! - Resolving a symbol name (or address) to a source file and line
//!
//! The heavy lifting is done by the surrounding ecosystem: `sysinfo` for
//! process enumeration, `object` for parsing the executable, and
//! `gimli`/`addr2line` for DWARF line tables. This crate wires those pieces
//! together behind a small typed API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symline_core::{find_process, Inspector};
//!
//! # fn main() -> symline_core::Result<()> {
//! if let Some(pid) = find_process("producer") {
//!     let inspector = Inspector::attach(pid)?;
//!     let location = inspector.line_for_symbol("Person::passVoid")?;
//!     println!("{}", location.file);
//!     println!("{location}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod inspect;
pub mod locate;
pub mod types;

// Re-export commonly used types
pub use error::{InspectError, Result};
pub use inspect::{BinaryImage, Inspector};
pub use locate::{find_in, find_process, snapshot};
pub use types::{Address, ProcessId, ProcessRecord, SourceLocation};
