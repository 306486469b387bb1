use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    #[error("symbol {0:?} has no entry in the code table")]
    InvalidSymbol(char),
    #[error("bit sequence ends inside a code after {consumed} bits")]
    IncompleteCode { consumed: usize },
    #[error("bit at position {position} does not lead to any symbol")]
    UnknownCode { position: usize },
    #[error("cannot decode bits without a tree")]
    EmptyTree,
    #[error("invalid bit character {0:?}, expected '0' or '1'")]
    InvalidBit(char),
}
