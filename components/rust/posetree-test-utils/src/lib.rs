//! Supporting utilities for testing frame trees: fixed sample poses and seeded random trees.

pub mod samples;
pub mod trees;

pub use samples::{get_test_motions, get_test_rotations, get_test_translations};
pub use trees::{random_rotation, random_translation, RandomTree, MIXED_UNITS};
