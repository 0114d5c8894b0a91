//! Huffman tree construction.
//!
//! Builds a strict binary tree by repeatedly merging the two lightest nodes.
//!
//! # Historical Context
//!
//! Huffman published the bottom-up merge in 1952, replacing Fano's top-down
//! splitting, which could miss the optimum by a fraction of a bit per symbol.
//!
//! # Tie-breaking
//!
//! Nodes of equal frequency are ordered by a sequence number: leaves take
//! theirs from the table's first-seen order, and every merged node takes the
//! next unused one. The first node extracted becomes the left child.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node. Children are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A single symbol and its count.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Occurrence count.
        freq: u64,
    },
    /// A merge of two subtrees; `freq` is the sum of theirs.
    Internal {
        /// Combined frequency.
        freq: u64,
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Frequency of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Self, right: Self) -> Result<Self> {
        let freq = left
            .freq()
            .checked_add(right.freq())
            .ok_or(Error::Overflow("node frequency"))?;
        Ok(Node::Internal {
            freq,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Priority queue entry: a node plus its tie-break sequence number.
struct Entry<S> {
    seq: usize,
    node: Node<S>,
}

impl<S> Entry<S> {
    fn key(&self) -> (u64, usize) {
        (self.node.freq(), self.seq)
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman tree with a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Clone> HuffmanTree<S> {
    /// Build the Huffman tree for a frequency table.
    ///
    /// A single-symbol table yields a lone leaf; no merges happen.
    ///
    /// # Errors
    /// Returns `Error::EmptyAlphabet` if the table has no symbols.
    /// `Error::Overflow` cannot occur for a table built by this crate, since
    /// no subtree outweighs the table total.
    pub fn build(table: &FrequencyTable<S>) -> Result<Self> {
        let mut pq: BinaryHeap<Entry<S>> = table
            .iter()
            .enumerate()
            .map(|(seq, (symbol, freq))| Entry {
                seq,
                node: Node::Leaf {
                    symbol: symbol.clone(),
                    freq,
                },
            })
            .collect();
        let mut next_seq = pq.len();

        let root = loop {
            let left = pq.pop().ok_or(Error::EmptyAlphabet)?;
            let Some(right) = pq.pop() else {
                break left.node;
            };
            log::trace!(
                "merge #{} (freq {}) + #{} (freq {}) -> #{}",
                left.seq,
                left.node.freq(),
                right.seq,
                right.node.freq(),
                next_seq
            );
            pq.push(Entry {
                seq: next_seq,
                node: Node::merge(left.node, right.node)?,
            });
            next_seq += 1;
        };

        log::debug!(
            "built Huffman tree: {} symbols, weight {}",
            table.len(),
            root.freq()
        );
        Ok(Self { root })
    }
}

impl<S> HuffmanTree<S> {
    /// Borrow the root node.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Take ownership of the root node.
    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// Root frequency, equal to the table total.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }

    /// Depth of the deepest leaf; 0 when the root is a leaf.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max = max.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        max
    }
}
