//! Symbol frequency tables.
//!
//! A [`FrequencyTable`] records how often each symbol occurs, in the order
//! symbols were first seen. That order is the tie-break for tree construction,
//! so two tables with the same pairs in the same order always produce the same
//! code.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Immutable mapping from symbol to a positive occurrence count.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
    total: u64,
}

impl<S: Eq + Hash + Clone + Debug> FrequencyTable<S> {
    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// # Errors
    /// Returns `Error::ZeroCount` if any count is 0,
    /// `Error::DuplicateSymbol` if a symbol appears twice and
    /// `Error::Overflow` if the counts sum past `u64::MAX`.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        let mut total = 0u64;

        for (symbol, count) in counts {
            if count == 0 {
                return Err(Error::ZeroCount(format!("{:?}", symbol)));
            }
            if index.contains_key(&symbol) {
                return Err(Error::DuplicateSymbol(format!("{:?}", symbol)));
            }
            index.insert(symbol.clone(), entries.len());
            entries.push((symbol, count));
            total = total
                .checked_add(count)
                .ok_or(Error::Overflow("frequency total"))?;
        }

        Ok(Self {
            entries,
            index,
            total,
        })
    }

    /// Count occurrences of each symbol in a sequence.
    pub fn tally<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut entries: Vec<(S, u64)> = Vec::new();
        let mut index: HashMap<S, usize> = HashMap::new();
        let mut total = 0u64;

        for symbol in symbols {
            match index.get(&symbol) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(symbol.clone(), entries.len());
                    entries.push((symbol, 1));
                }
            }
            total += 1;
        }

        Self {
            entries,
            index,
            total,
        }
    }
}

impl<S: Eq + Hash> FrequencyTable<S> {
    /// Count for `symbol`, if present.
    pub fn count(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Probability of `symbol` (count / total), if present.
    pub fn probability(&self, symbol: &S) -> Option<f64> {
        self.count(symbol).map(|count| count as f64 / self.total as f64)
    }
}

impl<S> FrequencyTable<S> {
    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(symbol, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, c)| (s, *c))
    }
}

impl FrequencyTable<char> {
    /// Tabulate the characters of `text`, optionally lower-casing it and
    /// dropping `\n` first. A `\r` from CRLF input is kept and counted.
    pub fn from_text(text: &str, lowercase: bool, strip_newlines: bool) -> Self {
        let keep = |c: &char| !(strip_newlines && *c == '\n');
        if lowercase {
            Self::tally(text.chars().flat_map(char::to_lowercase).filter(keep))
        } else {
            Self::tally(text.chars().filter(keep))
        }
    }
}
