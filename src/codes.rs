//! Code generation from a Huffman tree.
//!
//! Walks the tree depth-first, appending `0` for a left edge and `1` for a
//! right edge. Each leaf's path is its code, so no code can be a prefix of
//! another.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// A non-empty sequence of bits, each 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<u8>);

impl Code {
    /// The bits, most significant (closest to the root) first.
    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for codes produced by [`generate`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

impl Serialize for Code {
    fn serialize<T: Serializer>(&self, serializer: T) -> std::result::Result<T::Ok, T::Error> {
        serializer.collect_str(self)
    }
}

/// Mapping from symbol to its Huffman code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMap<S: Eq + Hash> {
    codes: HashMap<S, Code>,
}

impl<S: Eq + Hash + Clone> CodeMap<S> {
    /// Generate the code for every leaf of `tree`.
    pub fn generate(tree: &HuffmanTree<S>) -> Self {
        Self::from_root(tree.root())
    }

    fn from_root(root: &Node<S>) -> Self {
        let mut codes = HashMap::new();

        // A lone leaf contributes no bits on its own path, so it gets "0".
        if let Node::Leaf { symbol, .. } = root {
            codes.insert(symbol.clone(), Code(vec![0]));
            return Self { codes };
        }

        let mut stack = vec![(root, Vec::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol.clone(), Code(prefix));
                }
                Node::Internal { left, right, .. } => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push(1);
                    stack.push((right.as_ref(), right_prefix));

                    let mut left_prefix = prefix;
                    left_prefix.push(0);
                    stack.push((left.as_ref(), left_prefix));
                }
            }
        }

        log::debug!("generated {} codes", codes.len());
        Self { codes }
    }
}

impl<S: Eq + Hash> CodeMap<S> {
    /// Code for `symbol`, if present.
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the map holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> + '_ {
        self.codes.iter()
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Kraft sum Σ 2^-len. Exactly 1.0 for a full tree, 0.5 for the
    /// single-symbol code.
    pub fn kraft_sum(&self) -> f64 {
        self.codes
            .values()
            .map(|c| 2f64.powi(-(c.len() as i32)))
            .sum()
    }

    /// Check that no code is a prefix of another. Quadratic; for tests and
    /// diagnostics only.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                if a.is_prefix_of(b) || b.is_prefix_of(a) {
                    return false;
                }
            }
        }
        true
    }
}

/// Generate codes from an optional root.
///
/// # Errors
/// Returns `Error::EmptyAlphabet` if `root` is `None`.
pub fn generate<S: Eq + Hash + Clone>(root: Option<&Node<S>>) -> Result<CodeMap<S>> {
    root.map(CodeMap::from_root).ok_or(Error::EmptyAlphabet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn codes_for(counts: Vec<(char, u64)>) -> CodeMap<char> {
        let table = FrequencyTable::from_counts(counts).unwrap();
        CodeMap::generate(&HuffmanTree::build(&table).unwrap())
    }

    #[test]
    fn test_single_symbol_gets_zero() {
        let codes = codes_for(vec![('a', 5)]);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(&'a').unwrap().to_string(), "0");
        assert_eq!(codes.kraft_sum(), 0.5);
    }

    #[test]
    fn test_two_symbols_one_bit_each() {
        let codes = codes_for(vec![('a', 3), ('b', 1)]);
        assert_eq!(codes.get(&'b').unwrap().to_string(), "0");
        assert_eq!(codes.get(&'a').unwrap().to_string(), "1");
    }

    #[test]
    fn test_code_len_matches_depth() {
        let table =
            FrequencyTable::from_counts(vec![('a', 1), ('b', 1), ('c', 2), ('d', 3), ('e', 5)])
                .unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        let codes = CodeMap::generate(&tree);
        assert_eq!(codes.max_code_len(), tree.depth());
        assert_eq!(codes.get(&'e').unwrap().len(), 1);
        assert_eq!(codes.get(&'a').unwrap().len(), 4);
        assert!(codes.is_prefix_free());
        assert_eq!(codes.kraft_sum(), 1.0);
    }

    #[test]
    fn test_generate_without_root_fails() {
        let err = generate::<char>(None).unwrap_err();
        assert!(matches!(err, Error::EmptyAlphabet));
    }

    #[test]
    fn test_generate_with_root() {
        let table = FrequencyTable::from_counts(vec![('a', 2), ('b', 2), ('c', 4)]).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        let codes = generate(Some(tree.root())).unwrap();
        assert_eq!(codes, CodeMap::generate(&tree));
        assert_eq!(codes.get(&'c').unwrap().len(), 1);
    }

    #[test]
    fn test_prefix_detection() {
        let a = Code(vec![0, 1]);
        let b = Code(vec![0, 1, 1]);
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
    }
}
