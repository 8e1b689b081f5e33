//! Scheme initializer and the per-call session.
//!
//! A [`Session`] is created at the start of every encode or decode call and
//! dropped when it returns. It is never shared between calls.

use crate::cipher::plugboard::Plugboard;
use crate::cipher::rotor::Rotor;
use crate::config::{NARROW_OFFSET, SHIFT_MODULUS, WIDE_OFFSET};
use crate::types::Direction;

/// All mutable state for one conversion.
#[derive(Debug)]
pub(crate) struct Session {
    direction: Direction,
    rotor: Rotor,
    count: usize,
    plugboard: Option<Plugboard>,
}

impl Session {
    /// Derives the starting shift state from the message length.
    ///
    /// Odd lengths start with the wide offset as `base_shift` and add when
    /// encoding; even lengths swap the offsets and subtract when encoding.
    pub(crate) fn new(len: usize, direction: Direction, plugboard: Option<Plugboard>) -> Self {
        let shift0 = len % SHIFT_MODULUS;
        let encoding = direction.is_encode();

        let rotor = if len % 2 == 1 {
            Rotor::new(direction, shift0 + WIDE_OFFSET, shift0 + NARROW_OFFSET, encoding)
        } else {
            Rotor::new(direction, shift0 + NARROW_OFFSET, shift0 + WIDE_OFFSET, !encoding)
        };

        Self { direction, rotor, count: 1, plugboard }
    }

    /// Runs one character through plugboard and rotor, advancing the counter.
    pub(crate) fn convert(&mut self, byte: u8) -> u8 {
        let byte = match (self.direction, &self.plugboard) {
            (Direction::Encode, Some(plugboard)) => plugboard.substitute(byte),
            _ => byte,
        };

        let byte = self.rotor.step(byte, self.count);
        self.count += 1;

        match (self.direction, &self.plugboard) {
            (Direction::Decode, Some(plugboard)) => plugboard.substitute(byte),
            _ => byte,
        }
    }
}
