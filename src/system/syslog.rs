// src/system/syslog.rs

//! System log growth around a command.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// End-of-file position of a system log, taken before a command runs.
#[derive(Debug)]
pub struct SyslogSnapshot {
    path: PathBuf,
    file: File,
    offset: u64,
}

impl SyslogSnapshot {
    /// Opens the first readable candidate and records its end offset.
    ///
    /// Best effort: returns `None` when no candidate can be opened.
    pub fn take(candidates: &[PathBuf]) -> Option<Self> {
        candidates.iter().find_map(|path| match Self::open(path) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::trace!("System log '{}' unavailable: {}", path.display(), e);
                None
            }
        })
    }

    fn open(path: &Path) -> std::io::Result<Self> {
        let mut file = File::open(path)?;
        let offset = file.seek(SeekFrom::End(0))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            offset,
        })
    }

    /// The log that was opened.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Its size when the snapshot was taken.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Bytes appended to the log since the snapshot was taken.
    pub fn growth(&mut self) -> std::io::Result<u64> {
        let end = self.file.seek(SeekFrom::End(0))?;
        Ok(end.saturating_sub(self.offset))
    }
}
