//! # Rotor Cipher
//!
//! A reversible substitution over the 94 printable ASCII characters from
//! `' '` to `'}'`, loosely modeled on a rotor machine with a plugboard.
//!
//! ## Architecture
//!
//! - **Plugboard** ([`Plugboard`]): symmetric character swaps, applied before
//!   the rotor when encoding and after it when decoding
//! - **Rotor**: per-character shift whose next value is fed back from the
//!   ciphertext symbol it just handled
//! - **Scheme**: derives the starting shift state from the message length and
//!   owns all state for one call
//! - **Sequencer** ([`Sequence`]): the order positions are fed to the rotor,
//!   chosen by message length
//!
//! Every call builds its own session after validating its input, so
//! concurrent calls never share state and the rotor only ever sees alphabet
//! symbols. This is an educational transform, not a secure cipher.

use tracing::debug;

mod plugboard;
mod rotor;
mod scheme;
mod sequencer;
pub(crate) mod symbol;

pub use plugboard::Plugboard;
pub(crate) use scheme::Session;
pub use sequencer::{Sequence, ShiftClass};

use crate::error::Result;
use crate::types::Direction;

/// Encodes `text`, optionally through a plugboard built from `plug_a` and `plug_b`.
///
/// # Errors
///
/// - [`CipherError::OutOfRangeInput`](crate::CipherError::OutOfRangeInput) if
///   any character is outside `' '..='}'`.
/// - [`CipherError::OutOfRangePlug`](crate::CipherError::OutOfRangePlug) or
///   [`CipherError::NonInvolutivePlugboard`](crate::CipherError::NonInvolutivePlugboard)
///   for an unusable plug pair. A pair with one side missing or empty just
///   disables the plugboard.
///
/// # Examples
///
/// ```
/// let ciphertext = rotorcrypt::encode("attack at dawn", None, None).unwrap();
/// assert_eq!(rotorcrypt::decode(&ciphertext, None, None).unwrap(), "attack at dawn");
/// ```
pub fn encode(text: &str, plug_a: Option<&str>, plug_b: Option<&str>) -> Result<String> {
    convert(text, Direction::Encode, plug_a, plug_b)
}

/// Decodes `text` produced by [`encode`] with the same plug pair.
///
/// # Errors
///
/// Same as [`encode`].
pub fn decode(text: &str, plug_a: Option<&str>, plug_b: Option<&str>) -> Result<String> {
    convert(text, Direction::Decode, plug_a, plug_b)
}

/// Runs `text` through the machine in the given direction.
///
/// # Errors
///
/// Same as [`encode`].
pub fn convert(text: &str, direction: Direction, plug_a: Option<&str>, plug_b: Option<&str>) -> Result<String> {
    convert_in_order(text, direction, plug_a, plug_b, Sequence::new(text.len()))
}

/// Drives a fresh session over `text`, visiting positions in `order`.
///
/// Each converted character is written straight into its own slot, so the
/// output keeps the input's left-to-right layout whatever the order.
/// `order` must visit every position exactly once.
pub(crate) fn convert_in_order(text: &str, direction: Direction, plug_a: Option<&str>, plug_b: Option<&str>, order: impl IntoIterator<Item = usize>) -> Result<String> {
    let input = symbol::message(text)?;
    let plugboard = Plugboard::build(plug_a, plug_b)?;
    debug!(len = input.len(), %direction, class = %ShiftClass::of(input.len()), plugged = plugboard.is_some(), "converting message");

    let mut session = Session::new(input.len(), direction, plugboard);

    let mut output = vec![0u8; input.len()];
    for index in order {
        output[index] = session.convert(input[index]);
    }

    // every byte came out of the rotor or the plugboard, both of which only
    // emit alphabet characters
    Ok(output.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::CipherError;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under a debug-level subscriber and returns what it logged.
    fn logged(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).with_ansi(false).with_writer(move || writer.clone()).finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    const SENTENCE: &str = "The quick brown fox jumps over the lazy dog.";

    #[test]
    fn test_empty_passes_through() {
        assert_eq!(encode("", None, None).unwrap(), "");
        assert_eq!(decode("", Some("abc"), Some("xyz")).unwrap(), "");
    }

    #[test]
    fn test_golden_single_character() {
        assert_eq!(encode("a", None, None).unwrap(), "Z");
        assert_eq!(decode("Z", None, None).unwrap(), "a");
    }

    #[test]
    fn test_golden_two_characters() {
        assert_eq!(encode("ab", None, None).unwrap(), "Xl");
        assert_eq!(decode("Xl", None, None).unwrap(), "ab");
    }

    #[test]
    fn test_golden_length_classes() {
        assert_eq!(encode("abc", None, None).unwrap(), "XeZ");
        assert_eq!(encode("abcd", None, None).unwrap(), "Xeo_");
        assert_eq!(encode("abcde", None, None).unwrap(), "Zj]iZ");
        assert_eq!(encode("abcdef", None, None).unwrap(), "g[q`i`");
        assert_eq!(encode("abcdefg", None, None).unwrap(), "[h^mj_j");
        assert_eq!(encode("abcdefgh", None, None).unwrap(), "]\\i[nbml");
    }

    #[test]
    fn test_golden_sentence() {
        let encoded = encode(SENTENCE, None, None).unwrap();
        assert_eq!(encoded, "Kl`)lqnZsyZyj}i{mj\"yg{wjzuj}`vyomb&c\\#s)_jn*");
        assert_eq!(decode(&encoded, None, None).unwrap(), SENTENCE);
    }

    #[test]
    fn test_golden_sentence_with_plugboard() {
        let encoded = encode(SENTENCE, Some("abcijk"), Some("xyzlmn")).unwrap();
        assert_eq!(encoded, "Kl`)lopuvyuufzfuliiyj{tmvyj}`vyomb&`slY$]jn*");
        assert_ne!(encoded, encode(SENTENCE, None, None).unwrap());
        assert_eq!(decode(&encoded, Some("abcijk"), Some("xyzlmn")).unwrap(), SENTENCE);
    }

    #[test]
    fn test_one_sided_plug_matches_no_plug() {
        let bare = encode(SENTENCE, None, None).unwrap();
        assert_eq!(encode(SENTENCE, Some("abcijk"), None).unwrap(), bare);
        assert_eq!(encode(SENTENCE, Some(""), Some("xyzlmn")).unwrap(), bare);
    }

    #[test]
    fn test_log_reports_active_plugboard() {
        let output = logged(|| {
            encode("abc", Some("ab"), Some("xy")).unwrap();
        });
        assert!(output.contains("plugged=true"), "{output}");
    }

    #[test]
    fn test_log_reports_disabled_plugboard_for_empty_plug() {
        let output = logged(|| {
            encode("abc", Some(""), Some("xyz")).unwrap();
            encode("abc", Some("abc"), Some("")).unwrap();
        });
        assert!(output.contains("plugged=false"), "{output}");
        assert!(!output.contains("plugged=true"), "{output}");
    }

    #[test]
    fn test_out_of_range_input_rejects_whole_call() {
        assert_eq!(encode("abc~", None, None), Err(CipherError::OutOfRangeInput { position: 3, found: '~' }));
        assert_eq!(decode("line\n", None, None), Err(CipherError::OutOfRangeInput { position: 4, found: '\n' }));
    }

    #[test]
    fn test_processing_order_changes_ciphertext() {
        // the real order against a plain forward walk (or backward for the
        // class that already walks forward), rotor held fixed
        for text in ["ab", "abcd", "abcde", "abcdef", "abcdefg", "abcdefgh", "abcdefghi", "abcdefghij", "abcdefghijk"] {
            let len = text.len();
            let alternative: Vec<usize> = match ShiftClass::of(len) {
                ShiftClass::SecondOdd => (0..len).rev().collect(),
                _ => (0..len).collect(),
            };
            let reordered = convert_in_order(text, Direction::Encode, None, None, alternative).unwrap();
            assert_ne!(encode(text, None, None).unwrap(), reordered, "{text}");
        }
    }

    #[test]
    fn test_reordered_pipeline_still_round_trips() {
        let order: Vec<usize> = (0..SENTENCE.len()).collect();
        let encoded = convert_in_order(SENTENCE, Direction::Encode, None, None, order.clone()).unwrap();
        let decoded = convert_in_order(&encoded, Direction::Decode, None, None, order).unwrap();
        assert_eq!(decoded, SENTENCE);
    }
}
