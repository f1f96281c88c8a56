//! Online Ukkonen construction.
//!
//! The builder consumes the expanded text one position at a time, applying
//! the three extension rules per position:
//!
//! 1. Every leaf edge grows by the new symbol. Leaf labels run to the end
//!    of the text by convention (see [`super::arena::Edge::label_len`]), so
//!    this step costs nothing.
//! 2. While the new symbol cannot be read from the active point, branch:
//!    split the edge under the point if it sits mid-edge, hang a fresh leaf
//!    edge, wire the suffix link of the previously created node, and jump
//!    to the insertion point of the next shorter suffix.
//! 3. Once the symbol is readable, advance the point one symbol and end
//!    the round.
//!
//! Each rule is amortized O(1) per input symbol, so a full build is O(n)
//! time and space.

use super::alphabet::{Alphabet, ExpandedText};
use super::arena::{Arena, Edge};
use super::cursor::{follow_suffix_link, walk_down_one, Cursor};
use super::types::{NodeRef, NO_EDGE};
use super::SuffixTree;
use anyhow::Result;

/// Incremental construction state; consumed by [`TreeBuilder::build`].
pub struct TreeBuilder {
    text: ExpandedText,
    arena: Arena,
    root: NodeRef,
    dummy: NodeRef,
    cursor: Cursor,
    /// Per-instance leaf allocator, pre-decremented: the first leaf is -1.
    next_leaf: NodeRef,
}

impl TreeBuilder {
    /// Validate the source against the alphabet and set up root and dummy.
    ///
    /// Fails if the source contains a byte outside the alphabet or is too
    /// long for 32-bit positions.
    pub fn new(source: impl Into<Vec<u8>>, alphabet: Alphabet) -> Result<Self> {
        let text = ExpandedText::new(source.into(), alphabet)?;
        let mut arena = Arena::new(text.alphabet().size());

        let root = arena.new_node();
        let dummy = arena.new_node();

        // The dummy superroot absorbs the "drop the first character" step
        // uniformly: one edge per symbol, each of length 1 and each
        // targeting root. The start position is never read as text.
        for sym in 0..arena.sigma() {
            let edge = arena.new_edge(Edge {
                start: -1,
                len: 1,
                target: root,
            });
            arena.set_child(dummy, sym, edge);
        }
        arena.set_suffix_link(root, dummy);
        // never followed; also serves as scratch for the link chain below
        arena.set_suffix_link(dummy, dummy);

        Ok(Self {
            text,
            arena,
            root,
            dummy,
            cursor: Cursor::at(root),
            next_leaf: 0,
        })
    }

    /// Run the construction over every text position and seal the tree.
    pub fn build(mut self) -> SuffixTree {
        for pos in 0..self.text.expanded_len() {
            // rule 1 is implicit: leaf labels already run to the end
            self.branch_extensions(pos);
            self.advance_one(pos);
        }
        SuffixTree::from_parts(self.text, self.arena, self.root, (-self.next_leaf) as usize)
    }

    /// Rule 2: create branches until the symbol at `pos` can be read from
    /// the active point.
    fn branch_extensions(&mut self, pos: usize) {
        // Seed the link chain with the dummy: its link slot is scratch, so
        // the first write below needs no special case.
        let mut last_created = self.dummy;

        while self.mid_edge_mismatch(pos) {
            let node = self.split_at_cursor();
            self.arena.set_suffix_link(last_created, node);
            last_created = node;
            self.add_leaf_edge(pos, node);
            follow_suffix_link(&self.arena, &self.text, &mut self.cursor);
        }

        // A split's link target must spell the split string minus its first
        // symbol. When the loop ends after at least one split, that string
        // has two distinct continuations, so it is an explicit node and the
        // cursor has settled exactly on it.
        debug_assert!(last_created == self.dummy || self.cursor.at_node());
        self.arena.set_suffix_link(last_created, self.cursor.node);

        while self.at_node_mismatch(pos) {
            // no nodes are created here, so no further links to wire
            self.add_leaf_edge(pos, self.cursor.node);
            follow_suffix_link(&self.arena, &self.text, &mut self.cursor);
        }
    }

    /// Rule 3: the symbol at `pos` is readable from the point; take it.
    fn advance_one(&mut self, pos: usize) {
        let sym = self.text.sym_at(pos);
        walk_down_one(&self.arena, &self.text, &mut self.cursor, sym);
    }

    /// Whether the point sits mid-edge with the edge's next symbol
    /// differing from the symbol at `pos`.
    fn mid_edge_mismatch(&self, pos: usize) -> bool {
        if self.cursor.at_node() {
            return false;
        }
        let edge = self.arena.edge(self.cursor.edge);
        debug_assert!(edge.start >= 0);
        debug_assert!(self.cursor.depth < edge.label_len(self.text.expanded_len()));
        self.text.sym_at((edge.start + self.cursor.depth) as usize) != self.text.sym_at(pos)
    }

    /// Whether the point sits in a node lacking an outgoing edge for the
    /// symbol at `pos`.
    fn at_node_mismatch(&self, pos: usize) -> bool {
        self.cursor.at_node()
            && self.arena.child(self.cursor.node, self.text.sym_at(pos)) == NO_EDGE
    }

    /// Split the edge under the point, inserting a new inner node exactly
    /// there. The existing edge keeps the upper part of its label; a fresh
    /// edge carries the rest down to the old target.
    fn split_at_cursor(&mut self) -> NodeRef {
        let cur = self.cursor;
        let edge = *self.arena.edge(cur.edge);
        debug_assert!(cur.depth > 0);
        debug_assert!(cur.depth < edge.label_len(self.text.expanded_len()));

        let cut = edge.start + cur.depth;
        let node = self.arena.new_node();
        let lower = self.arena.new_edge(Edge {
            start: cut,
            len: edge.label_len(self.text.expanded_len()) - cur.depth,
            target: edge.target,
        });
        self.arena.set_child(node, self.text.sym_at(cut as usize), lower);

        let upper = self.arena.edge_mut(cur.edge);
        upper.len = cur.depth;
        upper.target = node;
        node
    }

    /// Hang a fresh leaf edge for the symbol at `pos` off `node`.
    fn add_leaf_edge(&mut self, pos: usize, node: NodeRef) {
        self.next_leaf -= 1;
        let sym = self.text.sym_at(pos);
        debug_assert_eq!(self.arena.child(node, sym), NO_EDGE);
        let edge = self.arena.new_edge(Edge {
            start: pos as i32,
            len: 0, // leaf labels run to the end; see Edge::label_len
            target: self.next_leaf,
        });
        self.arena.set_child(node, sym, edge);
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::{Alphabet, SuffixTree};

    #[test]
    fn test_empty_source_builds_one_leaf() {
        let tree = SuffixTree::build("", Alphabet::lowercase()).unwrap();
        let stats = tree.stats();
        // root + dummy only; the terminal suffix hangs off root
        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.leaf_count, 1);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_two_letter_text_splits_once() {
        // "aa" over {a, b}: one split produces the inner node for "a"
        let tree = SuffixTree::build("aa", Alphabet::new(b"ab").unwrap()).unwrap();
        let stats = tree.stats();
        assert_eq!(stats.node_count, 3); // root, dummy, "a"
        assert_eq!(stats.leaf_count, 3);
        // 3 dummy edges + root's "a" and terminal edges + the split's two
        assert_eq!(stats.edge_count, 7);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_repeated_letter_chains_splits() {
        // maximal edge-splitting pressure: every round splits once
        let tree = SuffixTree::build("aaaaa", Alphabet::lowercase()).unwrap();
        let stats = tree.stats();
        assert_eq!(stats.leaf_count, 6);
        assert_eq!(stats.node_count, 2 + 4); // "a", "aa", "aaa", "aaaa"
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_builder_rejects_foreign_bytes() {
        assert!(SuffixTree::build("acgt", Alphabet::dna()).is_err());
        assert!(SuffixTree::build("ACGT", Alphabet::dna()).is_ok());
    }

    #[test]
    fn test_leaf_counters_are_per_instance() {
        // two builds in a row must both number their leaves from zero
        let first = SuffixTree::build("abab", Alphabet::lowercase()).unwrap();
        let second = SuffixTree::build("abab", Alphabet::lowercase()).unwrap();
        assert_eq!(first.leaf_count(), 5);
        assert_eq!(second.leaf_count(), 5);
        first.check_invariants().unwrap();
        second.check_invariants().unwrap();
    }
}
