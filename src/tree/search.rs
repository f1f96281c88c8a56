//! Pattern walks over a sealed tree.
//!
//! A query consumes the pattern symbol by symbol from the root, in O(|P|)
//! regardless of text size. Finishing an edge records it as the last
//! completed edge; when the pattern ends exactly on a node boundary, that
//! edge supplies the text position of the match.

use super::cursor::Cursor;
use super::types::NO_EDGE;
use super::SuffixTree;
use rayon::prelude::*;

impl SuffixTree {
    /// Leftmost starting offset of `pattern` in the source text, or `None`
    /// if it does not occur.
    ///
    /// The empty pattern matches at offset 0. Patterns containing bytes
    /// outside the alphabet cannot occur and report no match.
    pub fn index_of(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() {
            return Some(0);
        }

        let text_len = self.text.expanded_len();
        let mut cur = Cursor::at(self.root);
        let mut last_completed = NO_EDGE;

        for &byte in pattern {
            let sym = self.text.alphabet().index_of(byte)?;

            if cur.at_node() {
                cur.edge = self.arena.child(cur.node, sym);
                if cur.edge == NO_EDGE {
                    return None;
                }
            }

            let edge = self.arena.edge(cur.edge);
            if self.text.sym_at((edge.start + cur.depth) as usize) != sym {
                return None;
            }

            cur.depth += 1;
            if cur.depth == edge.label_len(text_len) {
                // pattern bytes can never match the terminal, so a finished
                // edge always ends at an inner node
                debug_assert!(edge.target >= 0);
                last_completed = cur.edge;
                cur.node = edge.target;
                cur.edge = NO_EDGE;
                cur.depth = 0;
            }
        }

        // Recover the match position from the deepest edge the walk touched.
        let (edge, offset) = if cur.edge != NO_EDGE {
            (self.arena.edge(cur.edge), cur.depth)
        } else {
            debug_assert_ne!(last_completed, NO_EDGE);
            let edge = self.arena.edge(last_completed);
            (edge, edge.label_len(text_len))
        };
        Some((edge.start + offset) as usize - pattern.len())
    }

    /// Whether `pattern` occurs in the source text.
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.index_of(pattern).is_some()
    }

    /// Answer many queries against the same tree in parallel.
    ///
    /// The tree is immutable after build, so concurrent readers share it
    /// without synchronization.
    pub fn index_of_batch<P>(&self, patterns: &[P]) -> Vec<Option<usize>>
    where
        P: AsRef<[u8]> + Sync,
    {
        patterns
            .par_iter()
            .map(|pattern| self.index_of(pattern.as_ref()))
            .collect()
    }
}
