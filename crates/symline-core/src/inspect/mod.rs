//! # Inspector
//!
//! Binding to a running process and resolving symbols to source lines.
//!
//! An [`Inspector`] is constructed over a process id. Construction resolves
//! the process's main executable path and parses it into a [`BinaryImage`];
//! both steps can fail (invalid pid, process exited, unreadable or
//! unparseable executable) and every failure is reported as a distinct
//! [`InspectError`](crate::error::InspectError) variant.
//!
//! Two queries are exposed, mirroring the classic dbghelp pair: resolve a
//! symbol *name* to a line, and resolve a raw *address* to a line.

use std::path::PathBuf;

use gimli::{EndianArcSlice, RunTimeEndian};
use sysinfo::{Pid, PidExt, ProcessExt, System, SystemExt};
use tracing::{debug, info, warn};

use crate::error::{InspectError, Result};
use crate::types::{Address, ProcessId, SourceLocation};

mod demangle;
mod image;

pub use image::{BinaryImage, SymbolEntry};

pub(crate) type OwnedReader = EndianArcSlice<RunTimeEndian>;

/// Symbol inspector bound to one running process.
///
/// Owns the parsed image of the process's main executable. Queries are
/// read-only; the target process is never stopped, written to, or otherwise
/// disturbed.
pub struct Inspector
{
    pid: ProcessId,
    image: BinaryImage,
}

impl Inspector
{
    /// Bind an inspector to a running process
    ///
    /// Resolves the main executable path for `pid` and parses it.
    ///
    /// ## Errors
    ///
    /// - `AttachFailed`: the pid does not exist, the process exited, or its
    ///   executable path is not available
    /// - `ImageParse` / `Io`: the executable could not be read or parsed
    pub fn attach(pid: ProcessId) -> Result<Self>
    {
        let path = executable_path(pid)?;
        info!("inspecting {} for PID {pid}", path.display());
        let image = BinaryImage::open(&path)?;
        Ok(Self { pid, image })
    }

    /// The process this inspector is bound to.
    pub fn pid(&self) -> ProcessId
    {
        self.pid
    }

    /// The parsed executable image.
    pub fn image(&self) -> &BinaryImage
    {
        &self.image
    }

    /// Resolve a symbol name to its source location
    ///
    /// Accepts a bare name (`Person::passVoid`, `_ZN6Person8passVoidEv`) or
    /// a module-qualified name in the debugger's `module!symbol` form
    /// (`producer!Person::passVoid`). The module prefix is checked against
    /// the executable's file stem; a mismatch is logged but does not fail
    /// the lookup, since there is only one image to search either way.
    ///
    /// ## Errors
    ///
    /// - `SymbolNotFound`: no symbol-table entry matches the name
    /// - `NoLineInfo`: the symbol exists but the line table has no record
    ///   for its address (typically a binary built without debug info)
    pub fn line_for_symbol(&self, symbol: &str) -> Result<SourceLocation>
    {
        let bare = match symbol.split_once('!') {
            Some((module, rest)) => {
                let stem = self
                    .image
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or_default();
                if !module.eq_ignore_ascii_case(stem) {
                    warn!("qualified module '{module}' does not match image '{stem}'");
                }
                rest
            }
            None => symbol,
        };

        let entry = self
            .image
            .find_symbol(bare)
            .ok_or_else(|| InspectError::SymbolNotFound(bare.to_string()))?;
        debug!("symbol '{}' is at {}", entry.name.display_name(), entry.address);

        self.image
            .line_for_address(entry.address)?
            .ok_or_else(|| InspectError::NoLineInfo(entry.name.display_name().to_string()))
    }

    /// Resolve an image address to its source location
    ///
    /// The address is interpreted in the executable's own address space
    /// (link-time addresses, as found in the symbol table).
    ///
    /// ## Errors
    ///
    /// - `NoLineInfo`: the line table has no record covering the address
    pub fn line_for_address(&self, address: Address) -> Result<SourceLocation>
    {
        self.image
            .line_for_address(address)?
            .ok_or_else(|| InspectError::NoLineInfo(format!("address {address}")))
    }
}

/// Resolve the main executable path for a pid.
fn executable_path(pid: ProcessId) -> Result<PathBuf>
{
    let sys_pid = Pid::from_u32(pid.0);
    let mut system = System::new();
    if !system.refresh_process(sys_pid) {
        return Err(InspectError::AttachFailed {
            pid: pid.0,
            reason: "process does not exist or has already exited".to_string(),
        });
    }

    let process = system.process(sys_pid).ok_or_else(|| InspectError::AttachFailed {
        pid: pid.0,
        reason: "process disappeared during refresh".to_string(),
    })?;

    let exe = process.exe();
    if exe.as_os_str().is_empty() {
        return Err(InspectError::AttachFailed {
            pid: pid.0,
            reason: "executable path is not available".to_string(),
        });
    }

    Ok(exe.to_path_buf())
}
