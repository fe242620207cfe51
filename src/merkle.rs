use crate::error::{MerkleLinesError, Result};
use crate::hash::sha256_hex;
use crate::leaf::LeafSequence;

/// Compute the Merkle root of `leaves`.
///
/// Each leaf string is hashed individually, then hash pairs are combined
/// level by level until a single root remains. Pairing is positional: at
/// every level, adjacent hashes `(h[0], h[1]), (h[2], h[3]), ...` are joined
/// by hashing the concatenation of their hex strings, left then right, so
/// both leaf order and within-pair order are part of the root's identity.
///
/// Any level with an odd element count has its last hash duplicated before
/// pairing. This applies to the input leaves as well: when `leaves.count()`
/// is odd, the caller's sequence grows by one element. Callers must expect
/// the sequence to grow by at most one.
///
/// A single-leaf input still passes through two hashing levels, so the root
/// is `H(H(x) ++ H(x))`, never the bare leaf hash.
///
/// Fails with [`MerkleLinesError::EmptyInput`] when the sequence is empty.
pub fn compute_root(leaves: &mut LeafSequence) -> Result<String> {
    if leaves.is_empty() {
        return Err(MerkleLinesError::EmptyInput);
    }

    if leaves.count() % 2 != 0 {
        leaves.duplicate_last()?;
    }

    let mut current_level: Vec<String> =
        leaves.all().iter().map(|leaf| sha256_hex(leaf)).collect();

    while current_level.len() > 1 {
        // Parity normalization happens at every level, not just the leaves.
        if current_level.len() % 2 != 0 {
            let last = current_level
                .last()
                .cloned()
                .ok_or(MerkleLinesError::EmptyContainer)?;
            current_level.push(last);
        }

        current_level = current_level
            .chunks_exact(2)
            .map(|pair| sha256_hex(&format!("{}{}", pair[0], pair[1])))
            .collect();
    }

    // Loop invariant leaves exactly one element.
    current_level.pop().ok_or(MerkleLinesError::EmptyInput)
}
