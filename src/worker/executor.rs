//! Parallel line conversion using Rayon.
//!
//! Lines are independent messages, each with its own session, so they can be
//! converted on any thread in any order.

use flume::{Receiver, Sender};
use rayon::prelude::*;

use crate::types::{Task, TaskResult};
use crate::worker::pipeline::Pipeline;

/// Parallel task executor using Rayon.
pub struct Executor {
    pipeline: Pipeline,
}

impl Executor {
    #[inline]
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Converts every task from the channel in parallel.
    ///
    /// Blocks until the task channel closes, so run it off the async runtime.
    pub fn process(&self, tasks: &Receiver<Task>, results: Sender<TaskResult>) {
        tasks.iter().par_bridge().for_each(|task| {
            // The writer drops its receiver after a failed task; later sends are moot.
            let _ = results.send(self.pipeline.process(&task));
        });
    }
}
