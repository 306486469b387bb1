use std::collections::BTreeMap;

use common::{FrequencyTable, HuffError, Symbol};
use log::*;

use crate::tree::Tree;
use crate::Bits;

/// fixed width of an uncoded symbol, used as the baseline of the statistics
pub const BITS_PER_SYMBOL: u32 = 8;

/// code of the symbol of a single leaf tree, which has no path to derive a code from
pub const SINGLE_SYMBOL_CODE: &[bool] = &[false];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    /// width of one symbol in the uncompressed representation
    pub bits_per_symbol: u32,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        EncodeConfig {
            bits_per_symbol: BITS_PER_SYMBOL,
        }
    }
}

/// Prefix free code per symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Bits>,
}

/// One line of the code table report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub symbol: Symbol,
    pub count: usize,
    pub code: Bits,
}

impl CodeTable {
    pub fn get(&self, symbol: Symbol) -> Option<&Bits> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// iterates `(symbol, code)` ordered by symbol
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Bits)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Rows for display, most frequent symbol first. Equal counts keep the order of first
    /// appearance. Symbols of `counts` without a code are skipped.
    pub fn rows(&self, counts: &FrequencyTable) -> Vec<CodeRow> {
        let mut rows: Vec<CodeRow> = counts
            .iter()
            .filter_map(|(symbol, count)| {
                self.get(symbol).map(|code| CodeRow {
                    symbol,
                    count,
                    code: code.clone(),
                })
            })
            .collect();
        // stable sort
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    /// sum over symbols of count * code length
    pub fn compressed_bits(&self, counts: &FrequencyTable) -> usize {
        counts
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len()))
            .sum()
    }
}

/// converts the tree into a table with prefixes for each symbol
///
/// left transitions append a 0, right transitions a 1. A single leaf tree gets
/// `SINGLE_SYMBOL_CODE`.
pub fn derive_codes(tree: &Tree) -> CodeTable {
    let mut codes = BTreeMap::new();
    tree.walk_tree(&mut |_, node, path| {
        if let Some(symbol) = node.symbol() {
            let code = if path.is_empty() {
                Bits::from(SINGLE_SYMBOL_CODE)
            } else {
                path.clone()
            };
            codes.insert(symbol, code);
        }
    });
    CodeTable { codes }
}

/// Size statistics of one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// number of encoded symbols
    pub num_symbols: usize,
    pub bits_per_symbol: u32,
    /// num_symbols * bits_per_symbol
    pub original_bits: u64,
    /// length of the encoded bit sequence
    pub compressed_bits: u64,
}

impl Statistics {
    /// original - compressed, negative if the encoding is larger than the fixed width input
    pub fn saved_bits(&self) -> i64 {
        self.original_bits as i64 - self.compressed_bits as i64
    }

    /// space saving in percent, 0 for empty input
    pub fn space_saving(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_bits as f64 / self.original_bits as f64) * 100.0
    }

    /// average number of bits per encoded symbol, 0 for empty input
    pub fn average_code_length(&self) -> f64 {
        if self.num_symbols == 0 {
            return 0.0;
        }
        self.compressed_bits as f64 / self.num_symbols as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodingResult {
    pub bits: Bits,
    pub stats: Statistics,
}

/// encodes `input` with `table`, statistics against `BITS_PER_SYMBOL`
pub fn encode(input: &str, table: &CodeTable) -> Result<EncodingResult, HuffError> {
    encode_with_config(input, table, &EncodeConfig::default())
}

/// Encodes `input` symbol by symbol.
///
/// Fails with `InvalidSymbol` on the first symbol without a code.
pub fn encode_with_config(
    input: &str,
    table: &CodeTable,
    config: &EncodeConfig,
) -> Result<EncodingResult, HuffError> {
    let mut bits = Bits::new();
    let mut num_symbols = 0;
    for symbol in input.chars() {
        let code = table.get(symbol).ok_or(HuffError::InvalidSymbol(symbol))?;
        bits.extend_from(code);
        num_symbols += 1;
    }

    let stats = Statistics {
        num_symbols,
        bits_per_symbol: config.bits_per_symbol,
        original_bits: num_symbols as u64 * config.bits_per_symbol as u64,
        compressed_bits: bits.len() as u64,
    };
    debug!(
        "encoded {} symbols: {} bits -> {} bits ({:.2}% saved)",
        num_symbols,
        stats.original_bits,
        stats.compressed_bits,
        stats.space_saving()
    );
    Ok(EncodingResult { bits, stats })
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// This validation is rather slow and should be used in tests and fuzzing only.
pub fn assert_prefix_free(table: &CodeTable) {
    let codes: Vec<(Symbol, &Bits)> = table.iter().collect();
    for (pos, (symbol, code)) in codes.iter().enumerate() {
        assert!(!code.is_empty(), "empty code for {:?}", symbol);
        for (comp_symbol, comp_code) in &codes[pos + 1..] {
            if code.is_prefix_of(comp_code) || comp_code.is_prefix_of(code) {
                panic!(
                    "invalid prefix detected between {:?} ({}) and {:?} ({})",
                    symbol, code, comp_symbol, comp_code
                );
            }
        }
    }
}
