//! Adversarial test suite for Ember checkpoint governance.
//!
//! This crate contains integration tests that attack the reorg-depth and
//! checkpoint policies from an attacker's perspective: deep forks, spoofed
//! checkpoint blocks, and rewrite attempts across the sync-checkpoint
//! boundary.

pub mod helpers;
