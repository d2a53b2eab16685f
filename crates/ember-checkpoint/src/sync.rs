//! Floating sync checkpoint and reorg depth guard.
//!
//! The floating checkpoint is a block a fixed span behind the current
//! best tip, re-derived from the live tip on every query — nothing is
//! cached or persisted, so it always reflects the chain the node
//! currently considers canonical. Branch points at or below it are
//! treated as settled history and rejected.

use ember_core::constants::CHECKPOINT_SPAN;
use ember_core::index::{BlockIndex, NodeId};
use tracing::debug;

/// Select the sync checkpoint for the given best tip.
///
/// Returns the ancestor exactly [`CHECKPOINT_SPAN`] blocks behind `tip`,
/// or genesis if the chain is shorter than the span. A genesis tip
/// returns itself.
pub fn auto_select_sync_checkpoint(index: &BlockIndex, tip: NodeId) -> NodeId {
    auto_select_sync_checkpoint_with(index, tip, CHECKPOINT_SPAN)
}

/// Like [`auto_select_sync_checkpoint`] but with an explicit span.
///
/// This is the testable core: production code passes
/// [`CHECKPOINT_SPAN`], while tests can supply their own depth.
pub fn auto_select_sync_checkpoint_with(index: &BlockIndex, tip: NodeId, span: u64) -> NodeId {
    let tip_height = index.height(tip);
    let mut candidate = tip;
    // Search backward for the first block outside the span window.
    while let Some(parent) = index.parent(candidate) {
        if index.height(candidate) + span <= tip_height {
            break;
        }
        candidate = parent;
    }
    candidate
}

/// Whether a branch point at `height` may still compete for best-chain
/// status under the best tip `tip`.
///
/// True iff `height` is strictly above the floating sync checkpoint.
/// A branch at or below it would imply reorganizing past a depth the
/// node treats as settled, so it is rejected regardless of cumulative
/// work. Pure predicate: the caller drops the branch on `false`.
pub fn check_sync(height: u64, index: &BlockIndex, tip: NodeId) -> bool {
    check_sync_with(height, index, tip, CHECKPOINT_SPAN)
}

/// Like [`check_sync`] but with an explicit span.
pub fn check_sync_with(height: u64, index: &BlockIndex, tip: NodeId, span: u64) -> bool {
    let sync_node = auto_select_sync_checkpoint_with(index, tip, span);
    let sync_height = index.height(sync_node);
    if height <= sync_height {
        debug!(
            height,
            sync_height, "branch point at or below sync checkpoint rejected"
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::index::testing::linear_chain;
    use proptest::prelude::*;

    // --- auto_select_sync_checkpoint ---

    #[test]
    fn selects_ancestor_span_behind_tip() {
        // Chain 0..=1000, span 500: the sync checkpoint sits at height 500.
        let (index, tip) = linear_chain(1001);
        let sync = auto_select_sync_checkpoint(&index, tip);
        assert_eq!(index.height(sync), 500);
    }

    #[test]
    fn short_chain_selects_genesis() {
        // Chain of 100 blocks is shorter than the span.
        let (index, tip) = linear_chain(100);
        let sync = auto_select_sync_checkpoint(&index, tip);
        assert_eq!(index.height(sync), 0);
        assert_eq!(index.parent(sync), None);
    }

    #[test]
    fn genesis_tip_selects_itself() {
        let (index, tip) = linear_chain(1);
        assert_eq!(auto_select_sync_checkpoint(&index, tip), tip);
    }

    #[test]
    fn chain_exactly_span_long_selects_genesis() {
        // Tip at height 500 with span 500: genesis is the first block
        // outside the window.
        let (index, tip) = linear_chain(501);
        let sync = auto_select_sync_checkpoint(&index, tip);
        assert_eq!(index.height(sync), 0);
    }

    #[test]
    fn selection_is_an_ancestor_of_tip() {
        let (index, tip) = linear_chain(750);
        let sync = auto_select_sync_checkpoint(&index, tip);

        let mut node = tip;
        let mut found = node == sync;
        while let Some(parent) = index.parent(node) {
            node = parent;
            if node == sync {
                found = true;
            }
        }
        assert!(found, "sync checkpoint must lie on the tip's ancestry");
    }

    #[test]
    fn recomputed_fresh_as_tip_advances() {
        let (mut index, mut tip) = linear_chain(1001);
        assert_eq!(index.height(auto_select_sync_checkpoint(&index, tip)), 500);

        // Extend the chain; the floating checkpoint follows the new tip
        // with no stale state.
        tip = ember_core::index::testing::extend_chain(&mut index, tip, 0, 250);
        assert_eq!(index.height(auto_select_sync_checkpoint(&index, tip)), 750);
    }

    // --- check_sync ---

    #[test]
    fn rejects_at_and_below_sync_height() {
        let (index, tip) = linear_chain(1001); // sync checkpoint at 500
        assert!(!check_sync(500, &index, tip));
        assert!(!check_sync(499, &index, tip));
        assert!(!check_sync(0, &index, tip));
    }

    #[test]
    fn accepts_above_sync_height() {
        let (index, tip) = linear_chain(1001);
        assert!(check_sync(501, &index, tip));
        assert!(check_sync(1000, &index, tip));
        assert!(check_sync(1001, &index, tip));
    }

    #[test]
    fn short_chain_only_rejects_genesis_height() {
        // Sync checkpoint is genesis, so only height 0 is settled.
        let (index, tip) = linear_chain(100);
        assert!(!check_sync(0, &index, tip));
        assert!(check_sync(1, &index, tip));
        assert!(check_sync(99, &index, tip));
    }

    // --- properties ---

    proptest! {
        /// The selected checkpoint is exactly `span` behind the tip,
        /// saturating at genesis.
        #[test]
        fn selected_height_is_span_behind_tip(
            len in 1u64..2_000,
            span in 0u64..1_000,
        ) {
            let (index, tip) = linear_chain(len);
            let sync = auto_select_sync_checkpoint_with(&index, tip, span);
            let tip_height = index.height(tip);
            prop_assert_eq!(index.height(sync), tip_height.saturating_sub(span));
        }

        /// `check_sync` agrees with a direct comparison against the
        /// selected checkpoint's height.
        #[test]
        fn check_sync_matches_selected_height(
            len in 1u64..2_000,
            span in 0u64..1_000,
            height in 0u64..3_000,
        ) {
            let (index, tip) = linear_chain(len);
            let sync_height =
                index.height(auto_select_sync_checkpoint_with(&index, tip, span));
            prop_assert_eq!(
                check_sync_with(height, &index, tip, span),
                height > sync_height
            );
        }
    }
}
