// src/system/privilege.rs

//! The root check guarding privileged commands.

/// Whether the current process runs as root.
///
/// This looks at the owner of `/proc/self`, which is the effective uid,
/// not the real uid `getuid` would return. A setuid-root binary run by a
/// normal user therefore counts as root. A process that is not dumpable
/// also sees `/proc/self` owned by root. When it cannot be inspected the
/// answer is `false`.
#[cfg(unix)]
pub fn is_root() -> bool {
    use std::os::unix::fs::MetadataExt;

    match std::fs::metadata("/proc/self") {
        Ok(meta) => meta.uid() == 0,
        Err(e) => {
            log::debug!("Cannot determine process owner: {}", e);
            false
        }
    }
}

/// Without `/proc` nothing is treated as privileged.
#[cfg(not(unix))]
pub fn is_root() -> bool {
    false
}
