//! Copyright 2024 Gareth Cross
//!
//! Seeded random frame trees for property tests.
use posetree::{DualQuaternion, Frame, LengthUnit, Quaternion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Units a mixed-unit tree draws from.
pub const MIXED_UNITS: [LengthUnit; 4] = [
    LengthUnit::Meter,
    LengthUnit::Kilometer,
    LengthUnit::Centimeter,
    LengthUnit::Foot,
];

/// Uniform over the unit sphere in R^4, by rejection.
pub fn random_rotation<R: Rng>(rng: &mut R) -> Quaternion {
    loop {
        let q = Quaternion::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let norm = q.norm();
        if norm > 0.1 && norm <= 1.0 {
            return q / norm;
        }
    }
}

pub fn random_translation<R: Rng>(rng: &mut R, extent: f64) -> Quaternion {
    Quaternion::pure(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

/// A tree of frames hung below the root. Each new frame picks a random earlier frame (or the root)
/// as its parent, a random pose, and a length unit drawn from `units`.
pub struct RandomTree {
    pub frames: Vec<Frame>,
}

impl RandomTree {
    pub fn new(seed: u64, size: usize, units: &[LengthUnit]) -> Self {
        assert!(!units.is_empty());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut frames: Vec<Frame> = Vec::with_capacity(size);
        for _ in 0..size {
            let parent_index = rng.gen_range(0..=frames.len());
            let parent = frames
                .get(parent_index)
                .cloned()
                .unwrap_or_else(Frame::root);
            let unit = units[rng.gen_range(0..units.len())];
            let offset = DualQuaternion::new(
                random_rotation(&mut rng),
                random_translation(&mut rng, 10.0),
            );
            frames.push(Frame::from_offset(&parent, unit, offset));
        }
        Self { frames }
    }

    /// Every frame plus the root.
    pub fn all_frames(&self) -> Vec<Frame> {
        std::iter::once(Frame::root())
            .chain(self.frames.iter().cloned())
            .collect()
    }
}
