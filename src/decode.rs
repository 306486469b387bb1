use common::HuffError;

use crate::tree::{Node, Tree};
use crate::Bits;

/// Decodes `bits` by walking the tree from the root, 0 = left, 1 = right.
///
/// A single leaf tree decodes every 0 bit to its symbol. An absent tree only accepts an empty
/// bit sequence.
pub fn decode(tree: Option<&Tree>, bits: &Bits) -> Result<String, HuffError> {
    let tree = match tree {
        Some(tree) => tree,
        None if bits.is_empty() => return Ok(String::new()),
        None => return Err(HuffError::EmptyTree),
    };

    let mut out = String::with_capacity(bits.len());
    if let Node::Leaf { symbol, .. } = *tree.get_root_node() {
        for (position, bit) in bits.iter().enumerate() {
            if bit {
                return Err(HuffError::UnknownCode { position });
            }
            out.push(symbol);
        }
        return Ok(out);
    }

    let mut node_pos = tree.root();
    let mut consumed = 0;
    for bit in bits.iter() {
        let (left, right) = match tree.get_node(node_pos).children() {
            Some(children) => children,
            None => unreachable!("the walk restarts at the root after every leaf"),
        };
        node_pos = if bit { right } else { left };
        consumed += 1;
        if let Node::Leaf { symbol, .. } = *tree.get_node(node_pos) {
            out.push(symbol);
            node_pos = tree.root();
            consumed = 0;
        }
    }
    if consumed != 0 {
        return Err(HuffError::IncompleteCode { consumed });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{derive_codes, encode};
    use crate::tree::build_tree;
    use common::count;

    fn round_trip(input: &str) {
        let tree = build_tree(&count(input));
        let table = tree.as_ref().map(derive_codes).unwrap_or_default();
        let encoded = encode(input, &table).unwrap();
        assert_eq!(decode(tree.as_ref(), &encoded.bits).unwrap(), input);
    }

    #[test]
    fn round_trips() {
        round_trip("");
        round_trip("a");
        round_trip("aaaa");
        round_trip("aabb");
        round_trip("hello world");
        round_trip("this is a test of the huffman coding algorithm");
        round_trip("AAAAABBBCC");
        round_trip("grüße, 世界! \n\t");
    }

    #[test]
    fn incomplete_code() {
        // a:0 c:10 b:11
        let tree = build_tree(&count("aaaaabbbcc")).unwrap();
        let bits: Bits = "0101".parse().unwrap();
        assert_eq!(
            decode(Some(&tree), &bits),
            Err(HuffError::IncompleteCode { consumed: 1 })
        );
        let bits: Bits = "01011".parse().unwrap();
        assert_eq!(decode(Some(&tree), &bits).unwrap(), "acb");
    }

    #[test]
    fn single_leaf_rejects_one_bits() {
        let tree = build_tree(&count("zz")).unwrap();
        let bits: Bits = "0010".parse().unwrap();
        assert_eq!(
            decode(Some(&tree), &bits),
            Err(HuffError::UnknownCode { position: 2 })
        );
    }

    #[test]
    fn absent_tree() {
        assert_eq!(decode(None, &Bits::new()).unwrap(), "");
        let bits: Bits = "0".parse().unwrap();
        assert_eq!(decode(None, &bits), Err(HuffError::EmptyTree));
    }
}
