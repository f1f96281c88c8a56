//! Byte alphabets and the terminal-expanded text view.
//!
//! An [`Alphabet`] is a fixed, ordered set of bytes admissible in indexed
//! text, with O(1) byte-to-symbol lookup through a 256-entry table. Symbol
//! index 0 is reserved for the terminal that ends the expanded text; the
//! terminal is not a byte, so any byte value (including NUL) may be an
//! alphabet letter and arbitrary binary input stays searchable.

use super::types::Sym;
use anyhow::{bail, Result};

/// Symbol index reserved for the end-of-text terminal.
pub const TERMINAL: Sym = 0;

/// Fixed ordered byte alphabet with O(1) byte-to-symbol lookup.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// byte -> symbol index (`>= 1`), or -1 if the byte is not a letter
    table: [i16; 256],
    letters: Vec<u8>,
}

impl Alphabet {
    /// Create an alphabet from an ordered list of letters.
    ///
    /// Fails on repeated letters; the byte-to-symbol mapping must be
    /// unambiguous.
    pub fn new(letters: &[u8]) -> Result<Self> {
        let mut table = [-1i16; 256];
        for (i, &b) in letters.iter().enumerate() {
            if table[b as usize] != -1 {
                bail!("duplicate alphabet letter 0x{b:02x} at position {i}");
            }
            table[b as usize] = (i + 1) as i16; // 0 is the terminal
        }
        Ok(Self {
            table,
            letters: letters.to_vec(),
        })
    }

    fn from_unique(letters: Vec<u8>) -> Self {
        let mut table = [-1i16; 256];
        for (i, &b) in letters.iter().enumerate() {
            debug_assert_eq!(table[b as usize], -1);
            table[b as usize] = (i + 1) as i16;
        }
        Self { table, letters }
    }

    /// Printable ASCII: space through tilde (0x20..=0x7E).
    pub fn ascii_printable() -> Self {
        Self::from_unique((0x20u8..=0x7e).collect())
    }

    /// Lowercase English letters.
    pub fn lowercase() -> Self {
        Self::from_unique((b'a'..=b'z').collect())
    }

    /// Nucleotide bases.
    pub fn dna() -> Self {
        Self::from_unique(b"ACGT".to_vec())
    }

    /// Number of symbols, counting the terminal.
    pub fn size(&self) -> usize {
        self.letters.len() + 1
    }

    /// Symbol index of a byte, or `None` if the byte is not a letter.
    /// Never returns [`TERMINAL`]: the terminal has no byte form.
    #[inline]
    pub fn index_of(&self, byte: u8) -> Option<Sym> {
        let i = self.table[byte as usize];
        if i < 0 {
            None
        } else {
            Some(i as Sym)
        }
    }

    /// Whether every byte of `bytes` is a letter of this alphabet.
    pub fn contains_only(&self, bytes: &[u8]) -> bool {
        bytes.iter().all(|&b| self.table[b as usize] >= 0)
    }

    /// The letters in symbol order.
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }
}

/// The indexed text together with its terminal: source bytes plus one
/// out-of-band terminal symbol at position `expanded_len() - 1`.
///
/// All tree positions refer to this expanded view. Construction validates
/// every source byte against the alphabet once, so symbol lookups never
/// fail afterwards.
#[derive(Debug, Clone)]
pub struct ExpandedText {
    bytes: Vec<u8>,
    alphabet: Alphabet,
}

impl ExpandedText {
    pub fn new(bytes: Vec<u8>, alphabet: Alphabet) -> Result<Self> {
        if let Some(pos) = bytes.iter().position(|&b| alphabet.index_of(b).is_none()) {
            bail!(
                "byte 0x{:02x} at position {pos} is not in the alphabet",
                bytes[pos]
            );
        }
        // positions must fit the 32-bit reference space, terminal included
        if bytes.len() >= i32::MAX as usize {
            bail!("text of {} bytes exceeds 32-bit positions", bytes.len());
        }
        Ok(Self { bytes, alphabet })
    }

    /// Expanded length: source length plus one for the terminal.
    #[inline]
    pub fn expanded_len(&self) -> usize {
        self.bytes.len() + 1
    }

    /// The source bytes, without the terminal.
    #[inline]
    pub fn source(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Symbol at `pos` of the expanded text. The last position is the
    /// terminal; every earlier position is a validated source byte.
    #[inline]
    pub fn sym_at(&self, pos: usize) -> Sym {
        if pos == self.bytes.len() {
            TERMINAL
        } else {
            self.alphabet.table[self.bytes[pos] as usize] as Sym
        }
    }
}
