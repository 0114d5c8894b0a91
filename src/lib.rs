//! # huffstat
//!
//! *Optimal prefix codes, and how close they come to the entropy bound.*
//!
//! ## Intuition First
//!
//! A fixed-width encoding spends the same number of bits on every symbol, no
//! matter how often it appears. If `e` turns up a hundred times more often than
//! `z`, it is wasteful to give both eight bits. Huffman coding hands out short
//! codes to frequent symbols and long codes to rare ones, while making sure no
//! code is the start of another, so a bit stream can be split back into symbols
//! without separators.
//!
//! ## The Problem
//!
//! Given symbol counts, find the prefix-free binary code with the smallest
//! total encoded length, then measure it:
//! - how far it sits above the **entropy** lower bound, and
//! - how much it saves against a **fixed-width baseline** (8 bits by default).
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up greedy merging: optimal prefix codes
//! 1976  Rissanen    Arithmetic coding beats the one-bit-per-symbol floor
//! ```
//!
//! ## Mathematical Formulation
//!
//! With counts $c_s$, total $N$ and $p_s = c_s / N$:
//!
//! ```text
//! H          = -Σ p_s log2 p_s
//! L_weighted =  Σ c_s |code(s)|
//! L_avg      =  L_weighted / N          with  H <= L_avg < H + 1
//! saved      = (N·w - L_weighted) / (N·w) × 100
//! ```
//!
//! where `w` is the fixed baseline width in bits.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ for $n$ distinct symbols (binary heap merges).
//! - **Space**: $O(n)$ tree nodes; code generation is iterative, so a skewed
//!   tree of depth $n$ does not grow the call stack.
//!
//! ## Failure Modes
//!
//! 1. **Empty alphabet**: there is no tree; [`Error::EmptyAlphabet`] is returned
//!    and no statistics are computed.
//! 2. **Single symbol**: the tree is one leaf with no edges; its code is `0`.
//!
//! ## Implementation Notes
//!
//! Equal frequencies are broken by first-seen order, so the same table always
//! yields the same codes.
//!
//! ```rust
//! use huffstat::{Analysis, FrequencyTable};
//!
//! let table = FrequencyTable::from_counts(vec![('a', 3), ('b', 1)])?;
//! let analysis = Analysis::run(table, 8)?;
//! assert_eq!(analysis.stats().weighted_length, 4);
//! assert_eq!(analysis.stats().compression_percent, 87.5);
//! # Ok::<(), huffstat::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Shannon, C. E. (1948). "A Mathematical Theory of Communication."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codes;
pub mod config;
pub mod error;
pub mod frequency;
pub mod report;
pub mod stats;
pub mod tree;

pub use codes::{Code, CodeMap};
pub use config::Config;
pub use error::Error;
pub use frequency::FrequencyTable;
pub use report::Analysis;
pub use stats::Stats;
pub use tree::{HuffmanTree, Node};
