use crate::cipher::{self, Plugboard};
use crate::error::Result;
use crate::types::{Direction, Task, TaskResult};

/// Converts individual lines for the batch worker.
///
/// Holds only the call parameters; every task gets its own session inside
/// [`cipher::convert`].
pub struct Pipeline {
    direction: Direction,
    plug_a: Option<String>,
    plug_b: Option<String>,
}

impl Pipeline {
    /// Creates a pipeline, rejecting an unusable plug pair before any line is read.
    pub fn new(direction: Direction, plug_a: Option<String>, plug_b: Option<String>) -> Result<Self> {
        Plugboard::build(plug_a.as_deref(), plug_b.as_deref())?;
        Ok(Self { direction, plug_a, plug_b })
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn process(&self, task: &Task) -> TaskResult {
        match cipher::convert(&task.text, self.direction, self.plug_a.as_deref(), self.plug_b.as_deref()) {
            Ok(text) => TaskResult::ok(task.index, text),
            Err(e) => TaskResult::err(task.index, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_process_encodes_line() {
        let pipeline = Pipeline::new(Direction::Encode, None, None).unwrap();
        let result = pipeline.process(&Task { text: "ab".into(), index: 7 });
        assert_eq!(result.index, 7);
        assert_eq!(result.text, "Xl");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_process_reports_bad_line() {
        let pipeline = Pipeline::new(Direction::Decode, None, None).unwrap();
        let result = pipeline.process(&Task { text: "a~".into(), index: 0 });
        assert!(result.error.is_some_and(|e| e.contains("'~'")));
    }

    #[test]
    fn test_new_rejects_bad_plugboard() {
        let err = Pipeline::new(Direction::Encode, Some("ab".into()), Some("bc".into())).err();
        assert!(matches!(err, Some(CipherError::NonInvolutivePlugboard { .. })));
    }
}
