// src/dev_utils.rs

//! Development helpers.

use std::time::Instant;

/// RAII timer for the phases of a parse. Reports the elapsed time at
/// `trace` level when dropped, so it costs nothing visible unless
/// `RUST_LOG=trace` is set.
#[derive(Debug)]
pub struct BlockTimer {
    name: &'static str,
    start: Instant,
}

impl BlockTimer {
    /// Starts timing phase `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for BlockTimer {
    fn drop(&mut self) {
        log::trace!("PROFILE [{}]: {} µs", self.name, self.start.elapsed().as_micros());
    }
}
