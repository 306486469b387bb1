/*!

Huffman coding of character sequences.

The pipeline runs strictly forward: the input is counted into a [`FrequencyTable`], the table is
merged into a [`Tree`], the tree yields a [`CodeTable`] and the table encodes the input into an
[`EncodingResult`] carrying the bits and size statistics.

```
let compressed = huffcode::compress("aabb").unwrap();
assert_eq!(compressed.result.bits.to_string(), "0011");
assert_eq!(compressed.result.stats.original_bits, 32);
assert_eq!(compressed.result.stats.space_saving(), 87.5);
```

Every stage is a pure function over its input, so independent calls share no state.

*/

mod bits;
pub mod decode;
pub mod encode;
pub mod tree;

pub use bits::Bits;
pub use common::{count, count_symbols, FrequencyTable, HuffError, Symbol};
pub use decode::decode;
pub use encode::{
    derive_codes, encode, encode_with_config, CodeRow, CodeTable, EncodeConfig, EncodingResult,
    Statistics, BITS_PER_SYMBOL,
};
pub use tree::{build_tree, Node, NodeId, Tree};

/// All artefacts of one run of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    pub counts: FrequencyTable,
    /// `None` for empty input
    pub tree: Option<Tree>,
    pub codes: CodeTable,
    pub result: EncodingResult,
}

impl Compressed {
    /// decodes the encoded bits again with the tree of this run
    pub fn decode(&self) -> Result<String, HuffError> {
        decode(self.tree.as_ref(), &self.result.bits)
    }
}

/// counts, builds the tree, derives the codes and encodes `input`
pub fn compress(input: &str) -> Result<Compressed, HuffError> {
    compress_with_config(input, &EncodeConfig::default())
}

pub fn compress_with_config(input: &str, config: &EncodeConfig) -> Result<Compressed, HuffError> {
    let counts = count(input);
    let tree = build_tree(&counts);
    let codes = tree.as_ref().map(derive_codes).unwrap_or_default();
    let result = encode_with_config(input, &codes, config)?;
    Ok(Compressed {
        counts,
        tree,
        codes,
        result,
    })
}
