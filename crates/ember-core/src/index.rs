//! In-memory view of the block index tree.
//!
//! The block index is the node's map of every block it has ever seen:
//! keyed by hash, with parent linkage and height, rooted at genesis. It is
//! represented as an arena of entries addressed by [`NodeId`], so parent
//! traversal is bounded index-chasing with no ownership ambiguity.
//!
//! The chain-management layer owns and mutates this structure; the
//! checkpoint layer (ember-checkpoint) only reads it. Callers must keep
//! the index stable for the duration of a query.

use std::collections::HashMap;

use crate::types::Hash256;

/// Stable handle to an entry in a [`BlockIndex`] arena.
///
/// Valid only for the index that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One known block: hash, height, and parent link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Block header hash, unique within the index.
    pub hash: Hash256,
    /// Distance from genesis (genesis is height 0).
    pub height: u64,
    /// Parent entry, `None` only for genesis.
    pub parent: Option<NodeId>,
}

/// Arena of known blocks with O(1) hash lookup.
///
/// Entries form a tree rooted at genesis: side branches share ancestors
/// with the active chain. Entries are never removed.
#[derive(Clone, Debug, Default)]
pub struct BlockIndex {
    entries: Vec<IndexEntry>,
    by_hash: HashMap<Hash256, NodeId>,
}

impl BlockIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block and return its handle.
    ///
    /// The caller supplies the height; `parent` must refer to an entry
    /// already in this index. Inserting a hash that is already present
    /// returns the existing handle unchanged.
    pub fn insert(&mut self, hash: Hash256, height: u64, parent: Option<NodeId>) -> NodeId {
        if let Some(&existing) = self.by_hash.get(&hash) {
            return existing;
        }
        debug_assert!(parent.is_none_or(|p| p.0 < self.entries.len()));
        let id = NodeId(self.entries.len());
        self.entries.push(IndexEntry {
            hash,
            height,
            parent,
        });
        self.by_hash.insert(hash, id);
        id
    }

    /// Look up a block by hash.
    pub fn lookup(&self, hash: &Hash256) -> Option<NodeId> {
        self.by_hash.get(hash).copied()
    }

    /// Entry for a handle issued by this index.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different index.
    pub fn entry(&self, id: NodeId) -> &IndexEntry {
        &self.entries[id.0]
    }

    /// Height of the given entry.
    pub fn height(&self, id: NodeId) -> u64 {
        self.entry(id).height
    }

    /// Hash of the given entry.
    pub fn hash(&self, id: NodeId) -> Hash256 {
        self.entry(id).hash
    }

    /// Parent of the given entry, `None` for genesis.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entry(id).parent
    }

    /// Number of known blocks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no blocks are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Chain builders for tests, also exported under the `testing` feature so
/// downstream crates can use them in their own test suites.
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use super::{BlockIndex, NodeId};
    use crate::types::Hash256;

    /// Synthetic hash for the test block at `height` on branch `branch`.
    pub fn test_hash(branch: u8, height: u64) -> Hash256 {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&height.to_le_bytes());
        bytes[8] = branch;
        bytes[31] = 0xEB;
        Hash256(bytes)
    }

    /// Build a linear chain of `len` blocks (heights `0..len`) and return
    /// the index together with the tip handle.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn linear_chain(len: u64) -> (BlockIndex, NodeId) {
        assert!(len > 0, "chain needs at least a genesis block");
        let mut index = BlockIndex::new();
        let mut tip = index.insert(test_hash(0, 0), 0, None);
        for height in 1..len {
            tip = index.insert(test_hash(0, height), height, Some(tip));
        }
        (index, tip)
    }

    /// Extend the chain from `from` by `len` blocks on branch `branch`,
    /// returning the new tip.
    pub fn extend_chain(index: &mut BlockIndex, from: NodeId, branch: u8, len: u64) -> NodeId {
        let base_height = index.height(from);
        let mut tip = from;
        for offset in 1..=len {
            let height = base_height + offset;
            tip = index.insert(test_hash(branch, height), height, Some(tip));
        }
        tip
    }
}
