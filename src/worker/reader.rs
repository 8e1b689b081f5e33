//! Line reader: the input stage of the batch worker.
//!
//! Every line of the input is one message. Line terminators (`\n` or `\r\n`)
//! are not part of the message.

use anyhow::{Context, Result, anyhow};
use flume::Sender;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::types::Task;

/// Splits the input into line tasks for the executor.
#[derive(Default)]
pub struct Reader;

impl Reader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Reads lines until EOF, sending each as a task.
    ///
    /// Returns the number of lines read.
    pub async fn read_all<R: AsyncRead + Unpin>(&self, input: R, sender: &Sender<Task>) -> Result<u64> {
        let mut lines = BufReader::new(input).lines();
        let mut index = 0u64;

        while let Some(text) = lines.next_line().await.with_context(|| format!("failed to read line {}", index + 1))? {
            sender.send_async(Task { text, index }).await.map_err(|_| anyhow!("channel closed"))?;
            index += 1;
        }

        Ok(index)
    }
}
