//! Shared helpers for checkpoint-governance integration tests.

use ember_checkpoint::CheckpointTable;
use ember_core::index::testing::{linear_chain, test_hash};
use ember_core::index::{BlockIndex, NodeId};
use ember_core::types::CheckpointEntry;

/// Build a linear chain of `len` blocks plus a checkpoint table anchored
/// at the given heights of that chain.
///
/// `anchor_heights` must be ascending and below `len`.
pub fn anchored_chain(len: u64, anchor_heights: &[u64]) -> (BlockIndex, NodeId, CheckpointTable) {
    let (index, tip) = linear_chain(len);
    let entries: Vec<CheckpointEntry> = anchor_heights
        .iter()
        .map(|&h| {
            assert!(h < len, "anchor height {h} beyond chain length {len}");
            CheckpointEntry::new(h, test_hash(0, h))
        })
        .collect();
    let table = CheckpointTable::new(entries).expect("anchor heights ascending");
    (index, tip, table)
}

/// Handle of the main-chain block at `height`.
pub fn node_at(index: &BlockIndex, height: u64) -> NodeId {
    index
        .lookup(&test_hash(0, height))
        .expect("height on main chain")
}
