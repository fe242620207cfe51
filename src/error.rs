use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerkleLinesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Leaf sequence is empty. Cannot compute Merkle root.")]
    EmptyInput,

    #[error("Cannot duplicate the last element of an empty sequence")]
    EmptyContainer,

    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MerkleLinesError>;
