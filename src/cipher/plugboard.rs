//! Plugboard: a symmetric single-character substitution.
//!
//! Built from two plug strings `A` and `B`; `A[i]` and `B[i]` are swapped in
//! both directions. The pairing covers the shorter of the two strings. The
//! table is filled A→B first, then B→A, and later writes win, so duplicate
//! characters keep whichever mapping was written last.
//!
//! The plugboard runs before the rotor when encoding and after it when
//! decoding. Because the table is its own inverse, those mirrored placements
//! cancel on a round trip. Tables that are not their own inverse are rejected.

use hashbrown::HashMap;

use crate::cipher::symbol;
use crate::error::{CipherError, PlugSide, Result};

/// A validated, involutive substitution table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: HashMap<u8, u8>,
}

impl Plugboard {
    /// Builds the plugboard for one call.
    ///
    /// Returns `Ok(None)` when either side is missing or empty: a one-sided
    /// plug disables the plugboard rather than failing.
    ///
    /// # Errors
    ///
    /// - [`CipherError::OutOfRangePlug`] if a plug character is outside the alphabet.
    /// - [`CipherError::NonInvolutivePlugboard`] if the resulting table is not
    ///   its own inverse.
    pub fn build(plug_a: Option<&str>, plug_b: Option<&str>) -> Result<Option<Self>> {
        let (Some(a), Some(b)) = (plug_a, plug_b) else {
            return Ok(None);
        };
        if a.is_empty() || b.is_empty() {
            return Ok(None);
        }

        let a = symbol::plug(a, PlugSide::A)?;
        let b = symbol::plug(b, PlugSide::B)?;
        let len = a.len().min(b.len());

        let mut table = HashMap::with_capacity(len * 2);
        for (&from, &to) in a[..len].iter().zip(&b[..len]) {
            table.insert(from, to);
        }
        for (&from, &to) in b[..len].iter().zip(&a[..len]) {
            table.insert(from, to);
        }

        let plugboard = Self { table };
        plugboard.check_involution()?;
        Ok(Some(plugboard))
    }

    /// Returns the paired character, or `byte` unchanged if it is not plugged.
    #[inline]
    pub fn substitute(&self, byte: u8) -> u8 {
        self.table.get(&byte).copied().unwrap_or(byte)
    }

    /// Number of characters with an entry in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn check_involution(&self) -> Result<()> {
        for (&symbol, &mapped) in &self.table {
            let returned = self.substitute(mapped);
            if returned != symbol {
                return Err(CipherError::NonInvolutivePlugboard { symbol: symbol as char, mapped: mapped as char, returned: returned as char });
            }
        }
        Ok(())
    }
}
