//! # Merkle Lines
//!
//! Merkle root computation over the lines of text files: every line becomes
//! a leaf, leaves are SHA-256 hashed, and hash pairs are combined level by
//! level until a single root remains.
//!
//! ## Features
//!
//! - **Line-oriented leaves**: one leaf per input line, file order preserved
//! - **Odd-level duplication**: any level with an odd count duplicates its
//!   last hash before pairing, at the leaf level and every level above it
//! - **Uppercase hex hashes**: SHA-256 digests rendered as 64 uppercase hex
//!   characters; parents hash the concatenated hex strings of their children
//! - **No proofs**: the crate computes only the root, not inclusion paths
//!
//! ## Quick Start
//!
//! ```no_run
//! use merkle_lines::{compute_root, read_lines};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut leaves = read_lines("data.txt")?;
//! let root = compute_root(&mut leaves)?;
//! println!("Merkle root: {root}");
//! # Ok(())
//! # }
//! ```
//!
//! Note that `compute_root` duplicates the last leaf in place when the
//! sequence has an odd count, so the caller's sequence may grow by one.

pub mod error;
pub mod hash;
pub mod leaf;
pub mod lines;
pub mod merkle;

// Re-export commonly used items
pub use error::{MerkleLinesError, Result};
pub use hash::sha256_hex;
pub use leaf::LeafSequence;
pub use lines::{read_lines, root_for_file};
pub use merkle::compute_root;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_end_to_end() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("input.txt");
        fs::write(&file, "Line 1\nLine 2\nLine 3\nLine 4\n")?;

        let root = root_for_file(&file)?;

        assert_eq!(root.len(), 64);
        assert!(root.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));

        // Same file, same root.
        assert_eq!(root_for_file(&file)?, root);

        Ok(())
    }

    #[test]
    fn test_different_files_different_roots() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");
        fs::write(&first, "alpha\nbeta\n")?;
        fs::write(&second, "beta\nalpha\n")?;

        assert_ne!(root_for_file(&first)?, root_for_file(&second)?);

        Ok(())
    }

    #[test]
    fn test_empty_file_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("empty.txt");
        fs::write(&file, "")?;

        assert!(matches!(
            root_for_file(&file).unwrap_err(),
            MerkleLinesError::EmptyInput
        ));

        Ok(())
    }
}
