//! Sequencer: the order in which positions are fed to the rotor.
//!
//! The rotor's periodic reset is driven by the step counter, so the order in
//! which characters are processed changes the ciphertext even though every
//! output character lands back in its original position. The order is picked
//! from the message length:
//!
//! | class         | lengths          | processing order                           |
//! |---------------|------------------|--------------------------------------------|
//! | `empty`       | 0                | nothing                                    |
//! | `single`      | 1                | `0`                                        |
//! | `first-even`  | `L % 4 == 0`     | `L/2 .. L-1`, then `L/2-1 .. 0`            |
//! | `first-odd`   | `L % 4 == 1`, 2  | `L-1 .. 0`                                 |
//! | `second-even` | `L % 4 == 2`     | `L/2-1 .. 0`, then `L/2 .. L-1`            |
//! | `second-odd`  | `L % 4 == 3`     | `0 .. L-1`                                 |
//!
//! The split points differ per class and are kept exactly as listed.

use std::iter::FusedIterator;
use std::ops::Range;

/// Which processing order a message length selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ShiftClass {
    Empty,
    Single,
    FirstEven,
    FirstOdd,
    SecondEven,
    SecondOdd,
}

impl ShiftClass {
    /// Classifies a message length.
    pub fn of(len: usize) -> Self {
        match len {
            0 => Self::Empty,
            1 => Self::Single,
            2 => Self::FirstOdd,
            _ => match len % 4 {
                0 => Self::FirstEven,
                1 => Self::FirstOdd,
                2 => Self::SecondEven,
                _ => Self::SecondOdd,
            },
        }
    }
}

/// One contiguous run of positions, walked forwards or backwards.
#[derive(Debug, Clone)]
enum Run {
    Forward(Range<usize>),
    Backward(Range<usize>),
}

impl Run {
    fn next(&mut self) -> Option<usize> {
        match self {
            Self::Forward(range) => range.next(),
            Self::Backward(range) => range.next_back(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Forward(range) | Self::Backward(range) => range.len(),
        }
    }
}

/// The processing order for one message, produced once and consumed once.
#[derive(Debug, Clone)]
pub struct Sequence {
    class: ShiftClass,
    first: Run,
    second: Run,
}

impl Sequence {
    /// Builds the processing order for a message of `len` characters.
    pub fn new(len: usize) -> Self {
        let class = ShiftClass::of(len);
        let center = len / 2;

        let (first, second) = match class {
            ShiftClass::Empty | ShiftClass::Single | ShiftClass::SecondOdd => (Run::Forward(0..len), Run::Forward(0..0)),
            ShiftClass::FirstOdd => (Run::Backward(0..len), Run::Forward(0..0)),
            ShiftClass::FirstEven => (Run::Forward(center..len), Run::Backward(0..center)),
            ShiftClass::SecondEven => (Run::Backward(0..center), Run::Forward(center..len)),
        };

        Self { class, first, second }
    }

    #[inline]
    pub fn class(&self) -> ShiftClass {
        self.class
    }
}

impl Iterator for Sequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.first.next().or_else(|| self.second.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.first.len() + self.second.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sequence {}

impl FusedIterator for Sequence {}
