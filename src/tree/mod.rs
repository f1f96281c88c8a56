//! Suffix tree index over a single text.
//!
//! The tree is built once in O(n) time and space by Ukkonen's online
//! construction, then sealed; [`SuffixTree::index_of`] answers substring
//! queries in time proportional to the pattern alone.
//!
//! ## Architecture
//!
//! - [`alphabet`] - byte alphabets and the terminal-expanded text view
//! - [`arena`] - append-only node/edge storage with a flat child table
//! - [`cursor`] - the active point and its two moves
//! - [`builder`] - the Ukkonen engine (the three extension rules)
//! - [`search`] - pattern walks over the sealed tree
//! - [`stats`] - structural counters and invariant audit
//! - [`types`] - 32-bit reference conventions (leaves are negative refs)
//!
//! ## Usage
//!
//! ```ignore
//! use suft::tree::{Alphabet, SuffixTree};
//!
//! let tree = SuffixTree::build("mississipi", Alphabet::lowercase()).unwrap();
//! assert_eq!(tree.index_of(b"issip"), Some(4));
//! assert!(tree.contains(b"ssi"));
//! assert_eq!(tree.index_of(b"xyz"), None);
//! ```

pub mod alphabet;
pub mod arena;
pub mod builder;
pub mod cursor;
pub mod search;
pub mod stats;
pub mod types;

// Re-exports for public API
pub use self::alphabet::Alphabet;
pub use self::builder::TreeBuilder;
pub use self::stats::TreeStats;

use self::alphabet::ExpandedText;
use self::arena::Arena;
use self::types::NodeRef;

use anyhow::Result;

/// An immutable suffix tree index over one text.
///
/// Build once with [`SuffixTree::build`]; afterwards the structure is
/// read-only and freely shareable across threads.
pub struct SuffixTree {
    pub(crate) text: ExpandedText,
    pub(crate) arena: Arena,
    pub(crate) root: NodeRef,
    pub(crate) leaf_count: usize,
}

impl SuffixTree {
    /// Build the index for `source`. Every byte of `source` must belong to
    /// `alphabet`.
    pub fn build(source: impl Into<Vec<u8>>, alphabet: Alphabet) -> Result<Self> {
        Ok(TreeBuilder::new(source, alphabet)?.build())
    }

    pub(crate) fn from_parts(
        text: ExpandedText,
        arena: Arena,
        root: NodeRef,
        leaf_count: usize,
    ) -> Self {
        Self {
            text,
            arena,
            root,
            leaf_count,
        }
    }

    /// The indexed source text, without the terminal.
    pub fn source(&self) -> &[u8] {
        self.text.source()
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.text.alphabet()
    }
}
