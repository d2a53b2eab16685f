//! # ember-checkpoint — Checkpoint governance for the Ember chain.
//!
//! Anchors locally accepted history against deep reorganization. Two
//! mechanisms work together:
//!
//! - **Hardcoded checkpoints** ([`CheckpointTable`]): trusted
//!   (height, hash) pairs compiled into the binary. A block claiming a
//!   checkpoint height with a different hash is rejected by policy.
//!
//! - **Floating sync checkpoint** ([`sync`]): a block re-derived on every
//!   query at a fixed depth behind the current best tip. Branch points at
//!   or below it are rejected regardless of cumulative work, bounding how
//!   deep a competing fork may reach.
//!
//! # Attack vectors
//!
//! - **Long-range rewrite:** Without checkpoints an attacker with enough
//!   stake or hash power could rewrite arbitrarily deep history. The
//!   hardcoded table pins known-good blocks; the floating checkpoint
//!   bounds rewrites of recent history between table entries.
//!
//! - **Checkpoint spoofing:** The table is compiled into the binary. An
//!   attacker would need to distribute a modified binary to exploit this,
//!   which is outside our threat model.
//!
//! # Usage
//!
//! The chain-management layer calls [`CheckpointTable::check_hardened`]
//! when accepting a block at a known height, and [`sync::check_sync`]
//! before allowing a branch to compete for best-chain status. During
//! initial sync it uses [`CheckpointTable::last_known_checkpoint`] and
//! [`CheckpointTable::total_blocks_estimate`] for bookkeeping.
//!
//! Every operation here is a pure read over state owned elsewhere: this
//! crate never validates blocks, executes reorgs, or talks to peers.

pub mod sync;
pub mod table;

pub use sync::{auto_select_sync_checkpoint, check_sync};
pub use table::CheckpointTable;
