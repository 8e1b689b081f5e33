use hashbrown::HashMap;

use crate::types::TaskResult;

/// Holds results that arrive ahead of their turn until the gap is filled.
pub struct Buffer {
    buffer: HashMap<u64, TaskResult>,

    next_idx: u64,
}

impl Buffer {
    #[inline]
    pub fn new(start: u64) -> Self {
        Self { buffer: HashMap::new(), next_idx: start }
    }

    #[must_use]
    #[inline]
    pub fn add(&mut self, result: TaskResult) -> Vec<TaskResult> {
        self.buffer.insert(result.index, result);

        let mut ready: Vec<TaskResult> = Vec::new();

        while let Some(result) = self.buffer.remove(&self.next_idx) {
            ready.push(result);
            self.next_idx += 1;
        }

        ready
    }

    #[must_use]
    #[inline]
    pub fn flush(&mut self) -> Vec<TaskResult> {
        if self.buffer.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<(u64, TaskResult)> = self.buffer.drain().collect();

        results.sort_unstable_by_key(|(idx, _)| *idx);

        results.into_iter().map(|(_, result)| result).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(results: &[TaskResult]) -> Vec<u64> {
        results.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_in_order_results_release_immediately() {
        let mut buffer = Buffer::new(0);
        assert_eq!(indices(&buffer.add(TaskResult::ok(0, "a".into()))), [0]);
        assert_eq!(indices(&buffer.add(TaskResult::ok(1, "b".into()))), [1]);
    }

    #[test]
    fn test_gap_holds_results_back() {
        let mut buffer = Buffer::new(0);
        assert!(buffer.add(TaskResult::ok(2, "c".into())).is_empty());
        assert!(buffer.add(TaskResult::ok(1, "b".into())).is_empty());
        assert_eq!(indices(&buffer.add(TaskResult::ok(0, "a".into()))), [0, 1, 2]);
    }

    #[test]
    fn test_flush_returns_leftovers_sorted() {
        let mut buffer = Buffer::new(0);
        let _ = buffer.add(TaskResult::ok(5, "x".into()));
        let _ = buffer.add(TaskResult::ok(3, "y".into()));
        assert_eq!(indices(&buffer.flush()), [3, 5]);
        assert!(buffer.flush().is_empty());
    }
}
