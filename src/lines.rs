use crate::error::Result;
use crate::leaf::LeafSequence;
use crate::merkle::compute_root;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a file into a [`LeafSequence`], one element per line.
///
/// File order is preserved and line terminators are stripped. An empty file
/// yields an empty sequence; deciding what to do with that is the caller's
/// problem (the reducer rejects it). IO failures propagate unchanged.
pub fn read_lines(path: impl AsRef<Path>) -> Result<LeafSequence> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut leaves = LeafSequence::new();
    for line in reader.lines() {
        leaves.append(line?);
    }
    Ok(leaves)
}

/// Read `path` and compute the Merkle root of its lines in one call.
pub fn root_for_file(path: impl AsRef<Path>) -> Result<String> {
    let mut leaves = read_lines(path)?;
    compute_root(&mut leaves)
}
