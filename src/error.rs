use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a huffman tree from an empty dataset")]
    EmptyDataset,
    #[error("invalid arity {0}, a huffman tree needs at least 2 children per node")]
    InvalidArity(usize),
    #[error("extract_min called on an empty merge queue")]
    EmptyQueue,
    #[error("internal node needs exactly {expected} children, got {found}")]
    Arity { expected: usize, found: usize },
    #[error("negative weights are not supported")]
    NegativeWeight,
    #[error("sum of weights overflows the weight type")]
    WeightOverflow,
}
