//! Entropy and compression statistics.
//!
//! Shannon entropy gives the lower bound on average bits per symbol for any
//! prefix code. A Huffman code lands within one bit of it:
//!
//! ```text
//! H(X) <= L_avg < H(X) + 1
//! ```
//!
//! Every division here checks its denominator first, so these functions never
//! return NaN or infinity.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::codes::CodeMap;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Shannon entropy in bits per symbol: `-Σ p log2 p`.
///
/// # Errors
/// Returns `Error::EmptyTotal` if the table is empty.
pub fn entropy<S>(table: &FrequencyTable<S>) -> Result<f64> {
    if table.total() == 0 {
        return Err(Error::EmptyTotal);
    }
    let total = table.total() as f64;
    Ok(table.iter().fold(0.0, |h, (_, count)| {
        let p = count as f64 / total;
        h - p * p.log2()
    }))
}

/// Total encoded size in bits: `Σ count × |code|`.
///
/// # Errors
/// Returns `Error::MissingCode` if a table symbol has no code and
/// `Error::Overflow` if the bit count exceeds `u64::MAX`.
pub fn weighted_length<S>(table: &FrequencyTable<S>, codes: &CodeMap<S>) -> Result<u64>
where
    S: Eq + Hash + Debug,
{
    table.iter().try_fold(0u64, |acc, (symbol, count)| {
        let code = codes
            .get(symbol)
            .ok_or_else(|| Error::MissingCode(format!("{:?}", symbol)))?;
        count
            .checked_mul(code.len() as u64)
            .and_then(|bits| acc.checked_add(bits))
            .ok_or(Error::Overflow("weighted length"))
    })
}

/// Size of the fixed-width encoding in bits.
///
/// # Errors
/// Returns `Error::Overflow` if `total × fixed_width` exceeds `u64::MAX`.
pub fn baseline_length(total: u64, fixed_width: u32) -> Result<u64> {
    total
        .checked_mul(u64::from(fixed_width))
        .ok_or(Error::Overflow("baseline length"))
}

/// Average bits per symbol.
///
/// # Errors
/// Returns `Error::EmptyTotal` if `total` is 0.
pub fn average_bits(weighted_length: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(Error::EmptyTotal);
    }
    Ok(weighted_length as f64 / total as f64)
}

/// Space saved relative to the baseline, in percent. Negative when the code
/// is longer than the baseline.
///
/// # Errors
/// Returns `Error::ZeroBaseline` if `baseline_length` is 0.
pub fn compression_percent(baseline_length: u64, weighted_length: u64) -> Result<f64> {
    if baseline_length == 0 {
        return Err(Error::ZeroBaseline);
    }
    let baseline = baseline_length as f64;
    Ok((baseline - weighted_length as f64) / baseline * 100.0)
}

/// Summary statistics for one code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    /// Total number of symbols in the input.
    pub total: u64,
    /// Number of distinct symbols.
    pub distinct: usize,
    /// Shannon entropy, bits per symbol.
    pub entropy: f64,
    /// Fixed-width encoding size in bits.
    pub baseline_length: u64,
    /// Huffman encoding size in bits.
    pub weighted_length: u64,
    /// Huffman bits per symbol.
    pub average_bits: f64,
    /// Space saved against the baseline, percent.
    pub compression_percent: f64,
    /// `entropy / average_bits`, in `[0, 1]`.
    pub efficiency: f64,
}

impl Stats {
    /// Compute every statistic for `table` under `codes`.
    pub fn compute<S>(
        table: &FrequencyTable<S>,
        codes: &CodeMap<S>,
        fixed_width: u32,
    ) -> Result<Self>
    where
        S: Eq + Hash + Debug,
    {
        let entropy = entropy(table)?;
        let weighted_length = weighted_length(table, codes)?;
        let baseline_length = baseline_length(table.total(), fixed_width)?;
        let average_bits = average_bits(weighted_length, table.total())?;
        let compression_percent = compression_percent(baseline_length, weighted_length)?;

        let stats = Self {
            total: table.total(),
            distinct: table.len(),
            entropy,
            baseline_length,
            weighted_length,
            average_bits,
            compression_percent,
            efficiency: entropy / average_bits,
        };
        log::debug!(
            "entropy {:.4} bits, average {:.4} bits, saved {:.2}%",
            stats.entropy,
            stats.average_bits,
            stats.compression_percent
        );
        Ok(stats)
    }
}
