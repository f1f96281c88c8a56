//! # SUFT - Suffix Tree Text Index
//!
//! SUFT builds a suffix tree over a text in linear time using Ukkonen's
//! online construction and answers "where does this pattern first occur"
//! in time proportional to the pattern alone, independent of text size.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - the index itself: alphabets, arenas, the Ukkonen builder,
//!   and the pattern searcher
//! - [`output`] - result formatting for the CLI
//!
//! ## Quick Start
//!
//! ```ignore
//! use suft::tree::{Alphabet, SuffixTree};
//!
//! let tree = SuffixTree::build("mississipi", Alphabet::lowercase()).unwrap();
//!
//! assert_eq!(tree.index_of(b"issip"), Some(4));
//! assert!(tree.contains(b"ssi"));
//! assert_eq!(tree.index_of(b"xyz"), None);
//! ```
//!
//! ## Performance
//!
//! Construction is a single O(n) pass: nodes and edges live in append-only
//! arenas addressed by 32-bit indices, leaves are encoded as negative
//! references and never allocated, and child lookup is one indexed load
//! into a flat per-symbol table. The sealed tree is immutable, so any
//! number of threads may query it concurrently without synchronization
//! (see [`tree::SuffixTree::index_of_batch`]).

pub mod output;
pub mod tree;
