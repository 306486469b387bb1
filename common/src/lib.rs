mod error;

use std::collections::HashMap;
use std::iter::FromIterator;

use log::*;

pub use error::HuffError;

/// One unit of input. Symbols are unicode scalar values, so multi-byte characters count once.
pub type Symbol = char;

/// Occurrence count per symbol.
///
/// Entries are kept in order of first appearance in the input. That order is the secondary key
/// used to break ties between equal counts when the tree is built, so it has to be stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(Symbol, usize)>,
    /// symbol to position in `entries`
    positions: HashMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn add(&mut self, symbol: Symbol, count: usize) {
        if count == 0 {
            return;
        }
        match self.positions.get(&symbol) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.positions.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    /// returns the count of `symbol`, `None` if it never appeared
    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.positions.get(&symbol).map(|&pos| self.entries[pos].1)
    }

    /// position of the first appearance of `symbol` among the distinct symbols
    pub fn position(&self, symbol: Symbol) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// sum of all counts, equal to the length of the counted input
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// iterates `(symbol, count)` in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.entries.iter().copied()
    }
}

/// Builds a table from `(symbol, count)` pairs. Repeated symbols are summed, zero counts dropped.
impl FromIterator<(Symbol, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, usize)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (symbol, count) in iter {
            table.add(symbol, count);
        }
        table
    }
}

/// creates a table with the counts of each symbol
#[inline]
pub fn count(input: &str) -> FrequencyTable {
    count_symbols(input.chars())
}

/// creates a table with the counts of each symbol of an arbitrary symbol sequence
pub fn count_symbols<I: IntoIterator<Item = Symbol>>(input: I) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for symbol in input {
        table.add(symbol, 1);
    }
    debug!(
        "counted {} symbols, {} distinct",
        table.total(),
        table.len()
    );
    table
}
