use sysinfo::System;

use crate::model::stats::MemoryUsage;

/// Reads the memory footprint of the current process.
///
/// # Returns
/// - `Some(MemoryUsage)` - Resident and virtual memory in bytes
/// - `None` - The platform does not expose the process or the read failed
pub fn read_memory_usage() -> Option<MemoryUsage> {
    let pid = sysinfo::get_current_pid().ok()?;

    let mut system = System::new();
    if !system.refresh_process(pid) {
        return None;
    }

    let process = system.process(pid)?;

    Some(MemoryUsage {
        rss: process.memory(),
        virtual_memory: process.virtual_memory(),
    })
}
