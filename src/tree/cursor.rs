//! The active point: a position inside the tree, either at a node boundary
//! (`depth == 0`) or `depth` symbols down a selected outgoing edge.
//!
//! Two moves are central. [`walk_down_one`] advances by a single symbol
//! known to continue the position. [`follow_suffix_link`] jumps to the
//! insertion point of the next shorter suffix and rescans with the
//! skip/count trick: edges whose lengths fit the remaining depth are
//! consumed whole without comparing their labels, which keeps the walk
//! amortized O(1) per input symbol across a whole build.

use super::alphabet::ExpandedText;
use super::arena::Arena;
use super::types::{EdgeRef, NodeRef, Sym, NO_EDGE, NO_NODE};

/// Position inside the tree: `depth` symbols down `edge` out of `node`.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub node: NodeRef,
    pub edge: EdgeRef,
    /// In `[0, label_len)` of `edge`; 0 means no edge is selected.
    pub depth: i32,
}

impl Cursor {
    pub fn at(node: NodeRef) -> Self {
        Self {
            node,
            edge: NO_EDGE,
            depth: 0,
        }
    }

    /// Whether the position is exactly on a node boundary.
    #[inline]
    pub fn at_node(&self) -> bool {
        self.depth == 0
    }
}

/// Advance the cursor by one symbol that is known to continue its position,
/// normalizing at edge end: landing exactly on the far node clears the edge
/// selection and resets the depth.
pub(crate) fn walk_down_one(arena: &Arena, text: &ExpandedText, cur: &mut Cursor, sym: Sym) {
    if cur.at_node() {
        cur.edge = arena.child(cur.node, sym);
        debug_assert_ne!(cur.edge, NO_EDGE, "no edge to walk down");
    }
    cur.depth += 1;

    let edge = *arena.edge(cur.edge);
    let len = edge.label_len(text.expanded_len());
    debug_assert!(cur.depth <= len);
    if cur.depth == len {
        cur.node = edge.target;
        cur.edge = NO_EDGE;
        cur.depth = 0;
    }
}

/// Jump to the insertion point of the next shorter suffix.
///
/// Replaces the node with its suffix link target, then rescans the cursor's
/// `depth` symbols below it. The symbols to rescan are read from the edge
/// the cursor sat on before the jump, so the pre-jump edge must be captured
/// before any slot changes.
pub(crate) fn follow_suffix_link(arena: &Arena, text: &ExpandedText, cur: &mut Cursor) {
    let link = arena.suffix_link(cur.node);
    debug_assert_ne!(link, NO_NODE, "suffix link followed before being installed");
    cur.node = link;

    if cur.at_node() {
        cur.edge = NO_EDGE;
        return;
    }

    // depth > 0 implies an edge was selected; its label spells the string
    // the rescan must retrace below the link target
    let source = *arena.edge(cur.edge);
    debug_assert!(source.start >= 0);

    let mut rescanned: i32 = 0;
    loop {
        let sym = text.sym_at((source.start + rescanned) as usize);
        cur.edge = arena.child(cur.node, sym);
        debug_assert_ne!(cur.edge, NO_EDGE, "rescanned path must already exist");

        let edge = *arena.edge(cur.edge);
        let len = edge.label_len(text.expanded_len());
        if cur.depth < len {
            break;
        }

        // skip the whole edge without reading its label
        debug_assert!(edge.target >= 0, "rescan cannot pass through a leaf");
        cur.node = edge.target;
        cur.depth -= len;
        rescanned += len;
        if cur.at_node() {
            cur.edge = NO_EDGE;
            break;
        }
    }
}
