//! Hardcoded checkpoint table queries.
//!
//! A [`CheckpointTable`] is an immutable, network-scoped view over the
//! (height, hash) anchors compiled into `ember-core::constants`. It
//! answers the policy questions the chain-management layer asks while
//! accepting blocks and tracking initial sync. Checkpoints are sparse
//! trusted anchors, not a full chain of hashes: heights without an entry
//! impose no constraint.

use std::borrow::Cow;

use ember_core::constants::Network;
use ember_core::error::CheckpointTableError;
use ember_core::index::{BlockIndex, NodeId};
use ember_core::types::{CheckpointEntry, Hash256};
use tracing::warn;

/// Immutable ordered set of checkpoint entries for one network.
///
/// Constructed once at startup from the active network's compiled-in
/// table and never mutated. The testnet table is empty by design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointTable {
    /// Entries in strictly ascending height order.
    entries: Cow<'static, [CheckpointEntry]>,
}

impl CheckpointTable {
    /// The compiled-in table for `network`.
    ///
    /// The static tables are maintained in ascending height order
    /// (enforced by unit tests in ember-core), so no revalidation happens
    /// here.
    pub fn for_network(network: Network) -> Self {
        Self {
            entries: Cow::Borrowed(network.checkpoints()),
        }
    }

    /// Build a table from explicit entries, validating the ordering
    /// invariant. Used by tests and private networks.
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointTableError`] if heights repeat or are not in
    /// ascending order.
    pub fn new(entries: Vec<CheckpointEntry>) -> Result<Self, CheckpointTableError> {
        for pair in entries.windows(2) {
            if pair[0].height == pair[1].height {
                return Err(CheckpointTableError::DuplicateHeight(pair[0].height));
            }
            if pair[0].height > pair[1].height {
                return Err(CheckpointTableError::UnsortedHeights {
                    prev: pair[0].height,
                    next: pair[1].height,
                });
            }
        }
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// The expected hash at `height`, if `height` is a checkpoint height.
    pub fn lookup(&self, height: u64) -> Option<Hash256> {
        self.entries
            .binary_search_by_key(&height, |e| e.height)
            .ok()
            .map(|i| self.entries[i].hash)
    }

    /// Whether `hash` is permitted at `height`.
    ///
    /// True when `height` carries no checkpoint, or when the checkpoint
    /// hash matches exactly. Pure predicate: the caller rejects the block
    /// or branch on `false`.
    pub fn check_hardened(&self, height: u64, hash: &Hash256) -> bool {
        match self.lookup(height) {
            None => true,
            Some(expected) if expected == *hash => true,
            Some(expected) => {
                warn!(
                    height,
                    got = %hash,
                    expected = %expected,
                    "block hash mismatches hardcoded checkpoint"
                );
                false
            }
        }
    }

    /// Coarse estimate of total blocks expected, for sync-progress
    /// display: the highest checkpoint height, or 0 for an empty table.
    ///
    /// An estimate only — never a validation input.
    pub fn total_blocks_estimate(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.height)
    }

    /// The deepest checkpoint whose block the node actually has.
    ///
    /// Probes the block index from the highest table entry downward and
    /// returns the first hit, for use as an initial-download trust
    /// anchor. Highest-first because the shallowest match would
    /// understate sync progress. `None` when no checkpoint block is
    /// known locally (e.g. a fresh node).
    pub fn last_known_checkpoint(&self, index: &BlockIndex) -> Option<NodeId> {
        self.entries
            .iter()
            .rev()
            .find_map(|entry| index.lookup(&entry.hash))
    }

    /// The highest entry in the table, if any.
    pub fn highest(&self) -> Option<&CheckpointEntry> {
        self.entries.last()
    }

    /// Entries in ascending height order.
    pub fn entries(&self) -> &[CheckpointEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
