//! Rotor: the per-character shift-and-wrap step.
//!
//! Each step moves a symbol forwards or backwards around the 94-symbol
//! alphabet by the current shift, then re-seeds the shift from the
//! ciphertext symbol at that position. Encoding sees the ciphertext as its
//! output, decoding sees it as its input, so both directions rebuild the
//! same shift sequence.

use tracing::trace;

use crate::config::{FIRST_SYMBOL, SHIFT_MODULUS, STEP_INCREMENT, SYMBOL_COUNT};
use crate::types::Direction;

/// Mutable shift state carried from one step to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rotor {
    direction: Direction,
    base_shift: usize,
    shift: usize,
    should_add: bool,
}

impl Rotor {
    pub(crate) fn new(direction: Direction, base_shift: usize, shift: usize, should_add: bool) -> Self {
        Self { direction, base_shift, shift, should_add }
    }

    /// Transforms one character code.
    ///
    /// `code` must be inside the alphabet, which the facade checks before a
    /// session is built. `count` is the 1-based position of this step in
    /// processing order. Every `base_shift`-th step resets the
    /// shift to `base_shift`; every other step grows it and flips between
    /// adding and subtracting.
    pub(crate) fn step(&mut self, code: u8, count: usize) -> u8 {
        let symbol = usize::from(code - FIRST_SYMBOL);
        let modulus = usize::from(SYMBOL_COUNT);

        if count % self.base_shift == 0 {
            self.shift = self.base_shift;
        } else {
            self.shift += STEP_INCREMENT;
            self.should_add = !self.should_add;
        }

        let shift = self.shift % modulus;
        let moved = if self.should_add { (symbol + shift) % modulus } else { (symbol + modulus - shift) % modulus };

        self.shift = match self.direction {
            Direction::Encode => moved,
            Direction::Decode => symbol,
        } % SHIFT_MODULUS;

        trace!(count, code, moved, next_shift = self.shift, "rotor step");

        // moved < SYMBOL_COUNT, so the sum stays inside the alphabet
        FIRST_SYMBOL + moved as u8
    }

    #[cfg(test)]
    pub(crate) fn base_shift(&self) -> usize {
        self.base_shift
    }

    #[cfg(test)]
    pub(crate) fn shift(&self) -> usize {
        self.shift
    }

    #[cfg(test)]
    pub(crate) fn should_add(&self) -> bool {
        self.should_add
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_encode_step() {
        // length 1: base_shift 6, shift 4, adding
        let mut rotor = Rotor::new(Direction::Encode, 6, 4, true);
        assert_eq!(rotor.step(b'a', 1), b'Z');
        assert!(!rotor.should_add());
        // 'Z' is zero-based 58
        assert_eq!(rotor.shift(), 58 % 7);
    }

    #[test]
    fn test_single_decode_step_reverses_encode() {
        let mut rotor = Rotor::new(Direction::Decode, 6, 4, false);
        assert_eq!(rotor.step(b'Z', 1), b'a');
        assert_eq!(rotor.shift(), 58 % 7);
    }

    #[test]
    fn test_periodic_reset_keeps_direction_of_travel() {
        let mut rotor = Rotor::new(Direction::Encode, 3, 1, true);
        rotor.step(b'a', 3);
        assert_eq!(rotor.base_shift(), 3);
        assert!(rotor.should_add());
    }

    #[test]
    fn test_wraps_above_alphabet() {
        // '}' is the last symbol; adding moves past the end and wraps to the start
        let mut rotor = Rotor::new(Direction::Encode, 8, 0, false);
        assert_eq!(rotor.step(b'}', 1), b'"');
    }

    #[test]
    fn test_wraps_below_alphabet() {
        let mut rotor = Rotor::new(Direction::Encode, 8, 0, true);
        assert_eq!(rotor.step(b' ', 1), b'{');
    }

    #[test]
    fn test_every_symbol_round_trips_for_every_start_state() {
        for base_shift in 3..=11 {
            for shift in 0..=11 {
                for should_add in [true, false] {
                    for count in 1..=12 {
                        for code in FIRST_SYMBOL..=crate::config::LAST_SYMBOL {
                            let mut encoder = Rotor::new(Direction::Encode, base_shift, shift, should_add);
                            let mut decoder = Rotor::new(Direction::Decode, base_shift, shift, !should_add);
                            let encoded = encoder.step(code, count);
                            assert_eq!(decoder.step(encoded, count), code);
                            assert_eq!(encoder.shift(), decoder.shift());
                        }
                    }
                }
            }
        }
    }
}
