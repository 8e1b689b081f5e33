//! Batch conversion of line-oriented input.
//!
//! A reader task splits the input into lines, an executor converts them in
//! parallel on the Rayon pool, and the writer puts them back in input order.

use std::num::NonZeroUsize;
use std::thread;

use anyhow::{Context, Result, anyhow};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use crate::config::{BATCH_CHANNEL_FACTOR, DEFAULT_CONCURRENCY};
use crate::ui::progress::Progress;
use crate::worker::executor::Executor;
use crate::worker::reader::Reader;
use crate::worker::writer::Writer;

pub mod buffer;
pub mod executor;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use pipeline::Pipeline;

pub struct Worker {
    pipeline: Pipeline,
    concurrency: usize,
    show_progress: bool,
}

impl Worker {
    pub fn new(pipeline: Pipeline) -> Self {
        let concurrency = thread::available_parallelism().map_or(DEFAULT_CONCURRENCY, NonZeroUsize::get);
        Self { pipeline, concurrency, show_progress: false }
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Converts every line of `input` and writes the results to `output`.
    ///
    /// Returns the number of lines written.
    pub async fn process<R, W>(self, input: R, output: W) -> Result<u64>
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin,
    {
        let direction = self.pipeline.direction();
        let progress = if self.show_progress { Some(Progress::new(direction)?) } else { None };

        let channel_size = self.concurrency * BATCH_CHANNEL_FACTOR;
        let (task_sender, task_receiver) = flume::bounded(channel_size);
        let (result_sender, result_receiver) = flume::bounded(channel_size);
        debug!(%direction, concurrency = self.concurrency, channel_size, "starting batch");

        let reader = Reader::new();
        let reader_handle = tokio::spawn(async move { reader.read_all(input, &task_sender).await });

        let executor = Executor::new(self.pipeline);
        let executor_handle = tokio::task::spawn_blocking(move || executor.process(&task_receiver, result_sender));

        let mut writer = Writer::new();
        let write_result = writer.write_all(output, result_receiver, progress.as_ref()).await;
        // Dropping the receiver (inside write_all) unblocks the executor even on failure.
        let read_result = reader_handle.await.map_err(|e| anyhow!("reader task failed: {e}"))?;
        executor_handle.await.map_err(|e| anyhow!("executor task failed: {e}"))?;

        if let Some(bar) = progress {
            bar.finish();
        }

        let read = read_result.context("reading failed")?;
        let written = write_result.context("writing failed")?;
        debug!(read, written, "batch finished");

        Ok(written)
    }
}
