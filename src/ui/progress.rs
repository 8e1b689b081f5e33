use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

use crate::types::Direction;

/// Line counter shown on stderr while a batch runs.
///
/// The total is unknown until the input ends, so this is a spinner with a
/// running count rather than a bar.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    pub fn new(direction: Direction) -> Result<Self> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg} {pos} lines ({per_sec}, {elapsed})").map_err(|e| anyhow!("invalid progress template: {e}"))?;

        bar.set_style(style);
        bar.set_message(direction.action());

        Ok(Self { bar })
    }

    pub fn add(&self, delta: u64) {
        self.bar.inc(delta);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish();
        }
    }
}
