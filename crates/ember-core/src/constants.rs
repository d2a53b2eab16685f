//! Protocol constants: network selection and hardcoded checkpoint tables.
//!
//! Checkpoint tables are build-time literals, one per network. The mainnet
//! table pins known-good blocks at irregular intervals; testnet carries no
//! anchors by design so test chains can be rewound freely.

use serde::{Deserialize, Serialize};

use crate::types::{CheckpointEntry, Hash256};

/// Depth of the floating sync checkpoint behind the best tip, in blocks.
///
/// Branch points at or below `tip_height - CHECKPOINT_SPAN` are rejected
/// regardless of cumulative work.
pub const CHECKPOINT_SPAN: u64 = 500;

/// Network type: Mainnet or Testnet.
///
/// Selects which hardcoded checkpoint table is active. Passed explicitly
/// wherever it matters rather than read from ambient global state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Production network.
    #[default]
    Mainnet,
    /// Public test network.
    Testnet,
}

impl Network {
    /// The hardcoded checkpoint table for this network.
    ///
    /// # Examples
    ///
    /// ```
    /// use ember_core::constants::Network;
    /// assert!(!Network::Mainnet.checkpoints().is_empty());
    /// assert!(Network::Testnet.checkpoints().is_empty());
    /// ```
    pub fn checkpoints(&self) -> &'static [CheckpointEntry] {
        match self {
            Self::Mainnet => MAINNET_CHECKPOINTS,
            Self::Testnet => TESTNET_CHECKPOINTS,
        }
    }
}

const fn entry(height: u64, hash: [u8; 32]) -> CheckpointEntry {
    CheckpointEntry::new(height, Hash256::from_bytes(hash))
}

/// Hardcoded mainnet checkpoints, strictly ascending by height.
///
/// What makes a good checkpoint block: it is surrounded by blocks with
/// reasonable timestamps (no block before it with a later timestamp, none
/// after it with an earlier one) and contains no unusual transactions.
pub const MAINNET_CHECKPOINTS: &[CheckpointEntry] = &[
    // 00000393a7de08ce23b3882ae7b5c1567e83bda4849ed24b52610a9b2541c6c9
    entry(
        0,
        [
            0x00, 0x00, 0x03, 0x93, 0xa7, 0xde, 0x08, 0xce, 0x23, 0xb3, 0x88, 0x2a, 0xe7, 0xb5, 0xc1, 0x56,
            0x7e, 0x83, 0xbd, 0xa4, 0x84, 0x9e, 0xd2, 0x4b, 0x52, 0x61, 0x0a, 0x9b, 0x25, 0x41, 0xc6, 0xc9,
        ],
    ),
    // 0000000000063417ad195c561ec8b6b894211c6d3fe122e797dc77e6d0ade650
    entry(
        10_000,
        [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x34, 0x17, 0xad, 0x19, 0x5c, 0x56, 0x1e, 0xc8, 0xb6, 0xb8,
            0x94, 0x21, 0x1c, 0x6d, 0x3f, 0xe1, 0x22, 0xe7, 0x97, 0xdc, 0x77, 0xe6, 0xd0, 0xad, 0xe6, 0x50,
        ],
    ),
    // 062b8908da998ae7df5b7b805fcc8967a9697ec720ac3afcf2e6d20ab90914cc
    entry(
        300_000,
        [
            0x06, 0x2b, 0x89, 0x08, 0xda, 0x99, 0x8a, 0xe7, 0xdf, 0x5b, 0x7b, 0x80, 0x5f, 0xcc, 0x89, 0x67,
            0xa9, 0x69, 0x7e, 0xc7, 0x20, 0xac, 0x3a, 0xfc, 0xf2, 0xe6, 0xd2, 0x0a, 0xb9, 0x09, 0x14, 0xcc,
        ],
    ),
    // c00ba4a72b66085cb573c7b1d1a34732eb2a10d1a5d2df9db5629c2d50593d84
    entry(
        400_000,
        [
            0xc0, 0x0b, 0xa4, 0xa7, 0x2b, 0x66, 0x08, 0x5c, 0xb5, 0x73, 0xc7, 0xb1, 0xd1, 0xa3, 0x47, 0x32,
            0xeb, 0x2a, 0x10, 0xd1, 0xa5, 0xd2, 0xdf, 0x9d, 0xb5, 0x62, 0x9c, 0x2d, 0x50, 0x59, 0x3d, 0x84,
        ],
    ),
    // 1a7fca1992590ac712252afa566df72560b2802a5661e5f37fe8ff661a8107a6
    entry(
        500_000,
        [
            0x1a, 0x7f, 0xca, 0x19, 0x92, 0x59, 0x0a, 0xc7, 0x12, 0x25, 0x2a, 0xfa, 0x56, 0x6d, 0xf7, 0x25,
            0x60, 0xb2, 0x80, 0x2a, 0x56, 0x61, 0xe5, 0xf3, 0x7f, 0xe8, 0xff, 0x66, 0x1a, 0x81, 0x07, 0xa6,
        ],
    ),
    // a4ce3f7c12eccd78c797d29be6e5ac0ceed6685854970db7845a144461be5aab
    entry(
        1_000_000,
        [
            0xa4, 0xce, 0x3f, 0x7c, 0x12, 0xec, 0xcd, 0x78, 0xc7, 0x97, 0xd2, 0x9b, 0xe6, 0xe5, 0xac, 0x0c,
            0xee, 0xd6, 0x68, 0x58, 0x54, 0x97, 0x0d, 0xb7, 0x84, 0x5a, 0x14, 0x44, 0x61, 0xbe, 0x5a, 0xab,
        ],
    ),
    // d7e5029ca9befa88d59b185701818219ec3ec0a1ef73188d39edaef287c044b5
    entry(
        1_500_000,
        [
            0xd7, 0xe5, 0x02, 0x9c, 0xa9, 0xbe, 0xfa, 0x88, 0xd5, 0x9b, 0x18, 0x57, 0x01, 0x81, 0x82, 0x19,
            0xec, 0x3e, 0xc0, 0xa1, 0xef, 0x73, 0x18, 0x8d, 0x39, 0xed, 0xae, 0xf2, 0x87, 0xc0, 0x44, 0xb5,
        ],
    ),
    // d815ae37bce7e01407fd31b7e56ea53a83241a0b243793246491133e8af7ccf5
    entry(
        1_800_000,
        [
            0xd8, 0x15, 0xae, 0x37, 0xbc, 0xe7, 0xe0, 0x14, 0x07, 0xfd, 0x31, 0xb7, 0xe5, 0x6e, 0xa5, 0x3a,
            0x83, 0x24, 0x1a, 0x0b, 0x24, 0x37, 0x93, 0x24, 0x64, 0x91, 0x13, 0x3e, 0x8a, 0xf7, 0xcc, 0xf5,
        ],
    ),
    // 1bdb357438611a9b0c38270977294a5b597645e85a1d8e744f08afdd0244558f
    entry(
        2_000_000,
        [
            0x1b, 0xdb, 0x35, 0x74, 0x38, 0x61, 0x1a, 0x9b, 0x0c, 0x38, 0x27, 0x09, 0x77, 0x29, 0x4a, 0x5b,
            0x59, 0x76, 0x45, 0xe8, 0x5a, 0x1d, 0x8e, 0x74, 0x4f, 0x08, 0xaf, 0xdd, 0x02, 0x44, 0x55, 0x8f,
        ],
    ),
    // 65ebd05b0f53743c82447e1451d3168c5e06df81396afa95dc296cbd78eebc9e
    entry(
        2_153_782,
        [
            0x65, 0xeb, 0xd0, 0x5b, 0x0f, 0x53, 0x74, 0x3c, 0x82, 0x44, 0x7e, 0x14, 0x51, 0xd3, 0x16, 0x8c,
            0x5e, 0x06, 0xdf, 0x81, 0x39, 0x6a, 0xfa, 0x95, 0xdc, 0x29, 0x6c, 0xbd, 0x78, 0xee, 0xbc, 0x9e,
        ],
    ),
    // f7e7e290f5d1ca707630b78f8f33cb89f58a427ddc48f3ba99584a4f35cd8aa6
    entry(
        2_217_538,
        [
            0xf7, 0xe7, 0xe2, 0x90, 0xf5, 0xd1, 0xca, 0x70, 0x76, 0x30, 0xb7, 0x8f, 0x8f, 0x33, 0xcb, 0x89,
            0xf5, 0x8a, 0x42, 0x7d, 0xdc, 0x48, 0xf3, 0xba, 0x99, 0x58, 0x4a, 0x4f, 0x35, 0xcd, 0x8a, 0xa6,
        ],
    ),
    // 650bac3288e6aa452a12bc8f874ffce6b1fc44ed0e80d20aca9df4b0bacff97d
    entry(
        2_261_540,
        [
            0x65, 0x0b, 0xac, 0x32, 0x88, 0xe6, 0xaa, 0x45, 0x2a, 0x12, 0xbc, 0x8f, 0x87, 0x4f, 0xfc, 0xe6,
            0xb1, 0xfc, 0x44, 0xed, 0x0e, 0x80, 0xd2, 0x0a, 0xca, 0x9d, 0xf4, 0xb0, 0xba, 0xcf, 0xf9, 0x7d,
        ],
    ),
    // 96cd4d12a00c26139ba7be246f23f7a8ec3b72ff6901600d5662d5a7bc104faa
    entry(
        2_351_393,
        [
            0x96, 0xcd, 0x4d, 0x12, 0xa0, 0x0c, 0x26, 0x13, 0x9b, 0xa7, 0xbe, 0x24, 0x6f, 0x23, 0xf7, 0xa8,
            0xec, 0x3b, 0x72, 0xff, 0x69, 0x01, 0x60, 0x0d, 0x56, 0x62, 0xd5, 0xa7, 0xbc, 0x10, 0x4f, 0xaa,
        ],
    ),
    // 040304917804bf41efd36b9a3a7b3588005fb04903176dbff58ebc970095c7bf
    entry(
        2_401_111,
        [
            0x04, 0x03, 0x04, 0x91, 0x78, 0x04, 0xbf, 0x41, 0xef, 0xd3, 0x6b, 0x9a, 0x3a, 0x7b, 0x35, 0x88,
            0x00, 0x5f, 0xb0, 0x49, 0x03, 0x17, 0x6d, 0xbf, 0xf5, 0x8e, 0xbc, 0x97, 0x00, 0x95, 0xc7, 0xbf,
        ],
    ),
    // f60b1f44a71b023035fcc1065314c6c30a50a100816c4cf358c651fbd6214f9a
    entry(
        2_523_564,
        [
            0xf6, 0x0b, 0x1f, 0x44, 0xa7, 0x1b, 0x02, 0x30, 0x35, 0xfc, 0xc1, 0x06, 0x53, 0x14, 0xc6, 0xc3,
            0x0a, 0x50, 0xa1, 0x00, 0x81, 0x6c, 0x4c, 0xf3, 0x58, 0xc6, 0x51, 0xfb, 0xd6, 0x21, 0x4f, 0x9a,
        ],
    ),
    // 6d1b60719fcc44374b1f3eee81bc0fb3638bc45b66e800916e891b3868d2ddf9
    entry(
        2_583_614,
        [
            0x6d, 0x1b, 0x60, 0x71, 0x9f, 0xcc, 0x44, 0x37, 0x4b, 0x1f, 0x3e, 0xee, 0x81, 0xbc, 0x0f, 0xb3,
            0x63, 0x8b, 0xc4, 0x5b, 0x66, 0xe8, 0x00, 0x91, 0x6e, 0x89, 0x1b, 0x38, 0x68, 0xd2, 0xdd, 0xf9,
        ],
    ),
    // 3af3493c1af4a3468da1a134e9ebb99c2e48c7c09d4c2be528f67f8298a52350
    entry(
        2_751_396,
        [
            0x3a, 0xf3, 0x49, 0x3c, 0x1a, 0xf4, 0xa3, 0x46, 0x8d, 0xa1, 0xa1, 0x34, 0xe9, 0xeb, 0xb9, 0x9c,
            0x2e, 0x48, 0xc7, 0xc0, 0x9d, 0x4c, 0x2b, 0xe5, 0x28, 0xf6, 0x7f, 0x82, 0x98, 0xa5, 0x23, 0x50,
        ],
    ),];

/// Testnet has no checkpoints.
pub const TESTNET_CHECKPOINTS: &[CheckpointEntry] = &[];
