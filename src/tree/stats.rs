//! Structural counters and a full-tree invariant audit.

use super::types::{leaf_number, NodeRef, NO_EDGE};
use super::SuffixTree;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Structural counters for a sealed tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeStats {
    /// Expanded text length (source plus terminal).
    pub text_len: usize,
    pub source_len: usize,
    /// Symbols, counting the terminal.
    pub alphabet_size: usize,
    /// Inner nodes, including root and the dummy superroot.
    pub node_count: usize,
    /// Edges, including the dummy fan-out.
    pub edge_count: usize,
    /// Always `source_len + 1` after a build.
    pub leaf_count: usize,
    /// Approximate heap footprint.
    pub memory_bytes: usize,
}

impl SuffixTree {
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            text_len: self.text.expanded_len(),
            source_len: self.text.source().len(),
            alphabet_size: self.text.alphabet().size(),
            node_count: self.arena.node_count(),
            edge_count: self.arena.edge_count(),
            leaf_count: self.leaf_count,
            memory_bytes: self.arena.memory_bytes() + self.text.source().len(),
        }
    }

    /// Number of leaves; equals source length + 1 after a build.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Audit the sealed tree against its structural invariants: every
    /// inner node below root branches at least twice, every reachable
    /// inner node has its suffix link installed, edge labels stay inside
    /// the text and are filed under their first symbol, and the leaves
    /// cover the suffix numbers exactly once each.
    pub fn check_invariants(&self) -> Result<()> {
        let text_len = self.text.expanded_len();
        let node_count = self.arena.node_count() as NodeRef;
        let mut seen_leaf = vec![false; text_len];
        let mut stack: Vec<NodeRef> = vec![self.root];

        while let Some(node) = stack.pop() {
            let mut fanout = 0usize;
            for sym in 0..self.arena.sigma() {
                let eref = self.arena.child(node, sym);
                if eref == NO_EDGE {
                    continue;
                }
                fanout += 1;

                let edge = self.arena.edge(eref);
                if edge.start < 0 || edge.start as usize >= text_len {
                    bail!("edge {eref} starts outside the text");
                }
                let len = edge.label_len(text_len);
                if len < 1 {
                    bail!("edge {eref} has an empty label");
                }
                if edge.start as usize + len as usize > text_len {
                    bail!("edge {eref} label overruns the text");
                }
                if self.text.sym_at(edge.start as usize) != sym {
                    bail!("edge {eref} filed under the wrong first symbol");
                }

                if edge.target < 0 {
                    let leaf = leaf_number(edge.target) as usize;
                    if leaf >= text_len {
                        bail!("leaf number {leaf} out of range");
                    }
                    if seen_leaf[leaf] {
                        bail!("leaf {leaf} reached twice");
                    }
                    seen_leaf[leaf] = true;
                } else {
                    stack.push(edge.target);
                }
            }

            if node != self.root {
                if fanout < 2 {
                    bail!("inner node {node} has fewer than two children");
                }
                let link = self.arena.suffix_link(node);
                if !(0..node_count).contains(&link) {
                    bail!("inner node {node} has an unset or dangling suffix link");
                }
            }
        }

        let reached = seen_leaf.iter().filter(|&&seen| seen).count();
        if reached != text_len {
            bail!("reached {reached} leaves, expected {text_len}");
        }
        if self.leaf_count != text_len {
            bail!(
                "allocated {} leaves, expected {text_len}",
                self.leaf_count
            );
        }
        Ok(())
    }
}
