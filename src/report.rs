//! End-to-end analysis and its textual report.
//!
//! [`Analysis::run`] drives the pipeline: table, tree, codes, statistics.
//! Rendering is a `Display` impl; [`Analysis::to_json`] gives the same data
//! as JSON.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::codes::{Code, CodeMap};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::stats::Stats;
use crate::tree::HuffmanTree;

/// Frequency table, code map and statistics for one input.
#[derive(Debug, Clone)]
pub struct Analysis<S: Eq + Hash> {
    table: FrequencyTable<S>,
    codes: CodeMap<S>,
    stats: Stats,
}

/// One line of the per-symbol table.
#[derive(Debug, Serialize)]
pub struct Row<'a, S> {
    /// The symbol.
    pub symbol: &'a S,
    /// Occurrence count.
    pub count: u64,
    /// `count / total`.
    pub probability: f64,
    /// Assigned code.
    pub code: &'a Code,
    /// Code length in bits.
    pub length: usize,
}

#[derive(Serialize)]
struct JsonReport<'a, S> {
    stats: &'a Stats,
    symbols: Vec<Row<'a, S>>,
}

impl<S: Eq + Hash + Clone + fmt::Debug> Analysis<S> {
    /// Build the tree and codes for `table` and compute statistics against a
    /// `fixed_width`-bit baseline.
    ///
    /// # Errors
    /// Returns `Error::EmptyAlphabet` for an empty table; nothing is computed.
    pub fn run(table: FrequencyTable<S>, fixed_width: u32) -> Result<Self> {
        let tree = HuffmanTree::build(&table)?;
        let codes = CodeMap::generate(&tree);
        let stats = Stats::compute(&table, &codes, fixed_width)?;
        Ok(Self {
            table,
            codes,
            stats,
        })
    }
}

impl<S: Eq + Hash> Analysis<S> {
    /// The input frequencies.
    pub fn table(&self) -> &FrequencyTable<S> {
        &self.table
    }

    /// The generated codes.
    pub fn codes(&self) -> &CodeMap<S> {
        &self.codes
    }

    /// The computed statistics.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Per-symbol rows in first-seen order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, S>> + '_ {
        let total = self.table.total() as f64;
        self.table.iter().filter_map(move |(symbol, count)| {
            self.codes.get(symbol).map(|code| Row {
                symbol,
                count,
                probability: count as f64 / total,
                code,
                length: code.len(),
            })
        })
    }

    /// Serialize the statistics and per-symbol rows as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String>
    where
        S: Serialize,
    {
        serde_json::to_string_pretty(&JsonReport {
            stats: &self.stats,
            symbols: self.rows().collect(),
        })
    }
}

impl<S: Eq + Hash + fmt::Debug> fmt::Display for Analysis<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        writeln!(f, "Total Symbols: {}", s.total)?;
        writeln!(f, "Distinct Symbols: {}", s.distinct)?;

        writeln!(f)?;
        writeln!(f, "Symbol Frequency Count:")?;
        for (symbol, count) in self.table.iter() {
            writeln!(f, "{:?}: {}", symbol, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Results:")?;
        writeln!(f, "Entropy (bits per symbol): {}", s.entropy)?;
        writeln!(f, "Baseline Encoding Length (bits): {}", s.baseline_length)?;
        writeln!(f, "Huffman Encoding Length (bits): {}", s.weighted_length)?;
        writeln!(f, "Average Bits per Symbol (Huffman): {}", s.average_bits)?;
        writeln!(f, "Compression Percentage: {}", s.compression_percent)?;
        writeln!(f, "Coding Efficiency: {:.6}", s.efficiency)?;

        writeln!(f)?;
        writeln!(f, "Symbol Frequencies and Codes:")?;
        writeln!(
            f,
            "{:<8} | {:>9} | {:>11} | {:<16} | {:>11}",
            "Symbol", "Frequency", "Probability", "Huffman Code", "Code Length"
        )?;
        for row in self.rows() {
            writeln!(
                f,
                "{:<8} | {:>9} | {:>11.6} | {:<16} | {:>11}",
                format!("{:?}", row.symbol),
                row.count,
                row.probability,
                row.code.to_string(),
                row.length
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_run_empty_fails() {
        let table = FrequencyTable::from_text("\n\n", true, true);
        assert!(matches!(
            Analysis::run(table, 8),
            Err(Error::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_rows_follow_table_order() {
        let table = FrequencyTable::from_text("hello", true, true);
        let analysis = Analysis::run(table, 8).unwrap();
        let symbols: Vec<char> = analysis.rows().map(|r| *r.symbol).collect();
        assert_eq!(symbols, vec!['h', 'e', 'l', 'o']);
        assert_eq!(analysis.stats().total, 5);
    }

    #[test]
    fn test_display_contains_results() {
        let table = FrequencyTable::from_counts(vec![('a', 3), ('b', 1)]).unwrap();
        let text = Analysis::run(table, 8).unwrap().to_string();
        assert!(text.contains("Baseline Encoding Length (bits): 32"));
        assert!(text.contains("Huffman Encoding Length (bits): 4"));
        assert!(text.contains("Compression Percentage: 87.5"));
        assert!(text.contains("Symbol Frequency Count:\n'a': 3\n'b': 1\n"));
        assert!(text.contains("0.750000"));
    }

    #[test]
    fn test_json_report() {
        let table = FrequencyTable::from_counts(vec![('a', 5)]).unwrap();
        let json = Analysis::run(table, 8).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["baseline_length"], 40);
        assert_eq!(value["symbols"][0]["symbol"], "a");
        assert_eq!(value["symbols"][0]["code"], "0");
    }
}
