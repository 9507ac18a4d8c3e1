//! Process identity types.

use std::fmt;

/// Process identifier (PID)
///
/// A PID is a unique number assigned to each running process by the operating
/// system. On Unix-like systems (macOS, Linux), PIDs are typically 32-bit
/// unsigned integers.
///
/// ## Why wrap it in a struct?
///
/// Using a newtype pattern (`struct ProcessId(u32)`) instead of a raw `u32`
/// provides:
/// - **Type safety**: Prevents accidentally passing a random number where a PID is expected
/// - **Self-documenting code**: Makes it clear what the value represents
/// - **Future extensibility**: Can add methods or validation later
///
/// ## Example
///
/// ```rust,no_run
/// use symline_core::types::ProcessId;
/// use symline_core::Inspector;
///
/// let pid = ProcessId::from(12345);
/// let inspector = Inspector::attach(pid)?;
/// # Ok::<(), symline_core::InspectError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(pub u32);

impl From<u32> for ProcessId
{
    fn from(pid: u32) -> Self
    {
        ProcessId(pid)
    }
}

impl From<ProcessId> for u32
{
    fn from(pid: ProcessId) -> Self
    {
        pid.0
    }
}

impl fmt::Display for ProcessId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

/// A snapshot of one running process
///
/// Carries the (pid, name, user) triple produced by process enumeration.
/// Records are read-only snapshot data: they describe the process at the
/// moment of enumeration and are never refreshed or written back.
///
/// The owning user may not be resolvable (e.g. kernel threads, or a uid with
/// no passwd entry), hence the `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord
{
    /// Process identifier.
    pub pid: ProcessId,
    /// Executable name as reported by the operating system.
    pub name: String,
    /// Name of the owning user, if it could be resolved.
    pub user: Option<String>,
}

impl ProcessRecord
{
    /// Create a new process record
    pub fn new(pid: ProcessId, name: impl Into<String>, user: Option<String>) -> Self
    {
        Self {
            pid,
            name: name.into(),
            user,
        }
    }
}

/// CPU architecture of an inspected binary image
///
/// Different architectures carry different pointer widths and instruction
/// sets; the inspector only needs the classification for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture
{
    /// 64-bit ARM (Apple Silicon, aarch64 Linux)
    Arm64,
    /// 64-bit x86 (Intel/AMD)
    X86_64,
    /// Any other architecture (or unknown)
    Unknown(&'static str),
}

impl fmt::Display for Architecture
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Architecture::Arm64 => write!(f, "arm64"),
            Architecture::X86_64 => write!(f, "x86_64"),
            Architecture::Unknown(name) => write!(f, "{name}"),
        }
    }
}
