//! Reference conventions for the tree arenas.
//!
//! Entities address each other with 32-bit indices, never with pointers.
//! The graph formed by suffix links is cyclic (chains end at root, whose
//! link targets the dummy superroot, which self-loops), so integer indices
//! into append-only arenas sidestep ownership entirely.

/// Reference to an inner node or a leaf.
///
/// `ref >= 0` indexes the node arena. `ref < 0` denotes the leaf numbered
/// `-ref - 1`; leaf `k` terminates the suffix starting at position `k` of
/// the expanded text. Leaves carry no data and are never materialized.
pub type NodeRef = i32;

/// Reference into the edge arena.
pub type EdgeRef = i32;

/// Reserved edge reference marking an empty child slot.
pub const NO_EDGE: EdgeRef = -1;

/// Reserved node reference for a suffix link that has not been installed
/// yet. Distinct from every valid node index and every leaf encoding.
pub const NO_NODE: NodeRef = i32::MIN;

/// Symbol index into a node's child slots. The terminal symbol is 0;
/// alphabet letters map to `1..sigma`.
pub type Sym = usize;

/// Whether a node reference denotes a leaf.
#[inline]
pub fn is_leaf(r: NodeRef) -> bool {
    r < 0
}

/// Leaf number of a leaf reference: the starting position of the suffix it
/// terminates.
#[inline]
pub fn leaf_number(r: NodeRef) -> i32 {
    debug_assert!(is_leaf(r));
    -r - 1
}
