//! # Process Location
//!
//! Enumerating running processes and finding one by executable name.
//!
//! Enumeration goes through `sysinfo`, which abstracts over `/proc` on
//! Linux, `libproc` on macOS, and the toolhelp snapshot API on Windows.
//! The lookup itself is a pure scan over the snapshot, so it can be tested
//! without any live processes.

use sysinfo::{PidExt, ProcessExt, System, SystemExt, UserExt};
use tracing::debug;

use crate::types::{ProcessId, ProcessRecord};

/// Take a snapshot of all locally running processes
///
/// Each record carries the (pid, name, user) triple. The owning user is
/// resolved from the process uid where the platform exposes one; kernel
/// threads and foreign uids yield `None`.
///
/// Records are sorted by pid so that "first match" in [`find_in`] is
/// deterministic rather than an artifact of hash-map iteration order.
pub fn snapshot() -> Vec<ProcessRecord>
{
    let system = System::new_all();
    let mut records: Vec<ProcessRecord> = system
        .processes()
        .iter()
        .map(|(pid, process)| {
            let user = process
                .user_id()
                .and_then(|uid| system.get_user_by_id(uid))
                .map(|user| user.name().to_string());
            ProcessRecord::new(ProcessId::from(pid.as_u32()), process.name(), user)
        })
        .collect();
    records.sort_by_key(|record| record.pid.0);

    debug!("enumerated {} running processes", records.len());
    records
}

/// Scan a list of process records for the first name match
///
/// Comparison is case-insensitive: `Producer.EXE` matches a record named
/// `producer.exe` and vice versa. Returns the pid of the first matching
/// record, or `None` when nothing matches (including the empty list).
pub fn find_in(records: &[ProcessRecord], name: &str) -> Option<ProcessId>
{
    let wanted = name.to_lowercase();
    records
        .iter()
        .find(|record| record.name.to_lowercase() == wanted)
        .map(|record| record.pid)
}

/// Locate a running process by executable name
///
/// Convenience wrapper: snapshots the process table and scans it with
/// [`find_in`].
pub fn find_process(name: &str) -> Option<ProcessId>
{
    let pid = find_in(&snapshot(), name);
    match pid {
        Some(pid) => debug!("process '{name}' resolved to PID {pid}"),
        None => debug!("no running process matches '{name}'"),
    }
    pid
}
