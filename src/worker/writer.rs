//! Ordered line writer.
//!
//! Results come back from the executor in whatever order the threads finish;
//! the writer restores input order before writing one line per result.

use anyhow::{Context, Result, bail};
use flume::Receiver;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::types::TaskResult;
use crate::ui::progress::Progress;
use crate::worker::buffer::Buffer;

pub struct Writer {
    buffer: Buffer,
    written: u64,
}

impl Writer {
    #[inline]
    pub fn new() -> Self {
        Self { buffer: Buffer::new(0), written: 0 }
    }

    /// Consumes results from the receiver and writes them to the output.
    ///
    /// Stops at the first failed task. Returns the number of lines written.
    pub async fn write_all<W: AsyncWrite + Unpin>(&mut self, output: W, receiver: Receiver<TaskResult>, progress: Option<&Progress>) -> Result<u64> {
        let mut writer = BufWriter::new(output);

        while let Ok(result) = receiver.recv_async().await {
            let ready = self.buffer.add(result);
            self.write_batch(&mut writer, &ready, progress).await?;
        }

        let remaining = self.buffer.flush();
        self.write_batch(&mut writer, &remaining, progress).await?;

        writer.flush().await.context("failed to flush output")?;
        Ok(self.written)
    }

    async fn write_batch<W: AsyncWrite + Unpin>(&mut self, writer: &mut W, results: &[TaskResult], progress: Option<&Progress>) -> Result<()> {
        for r in results {
            if let Some(err) = &r.error {
                bail!("line {} failed: {}", r.index + 1, err);
            }

            writer.write_all(r.text.as_bytes()).await.context("failed to write line")?;
            writer.write_all(b"\n").await.context("failed to write line")?;
            self.written += 1;

            if let Some(bar) = progress {
                bar.add(1);
            }
        }

        Ok(())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
