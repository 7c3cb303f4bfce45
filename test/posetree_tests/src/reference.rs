//! Copyright 2024 Gareth Cross
//!
//! Independent reference for frame-tree composition, written against nalgebra isometries.
use nalgebra as na;
use posetree::{DualQuaternion, Frame, LengthUnit};

/// The offset of a single frame as an isometry, with translation in meters.
pub fn offset_isometry(offset: &DualQuaternion, unit: LengthUnit) -> na::Isometry3<f64> {
    let meters = offset.rescaled(LengthUnit::conversion(unit, LengthUnit::Meter));
    na::Isometry3::from(meters)
}

/// Pose of `frame` relative to the root, by multiplying isometries from the root down.
pub fn world_isometry(frame: &Frame) -> na::Isometry3<f64> {
    let mut chain: Vec<Frame> = vec![frame.clone()];
    chain.extend(frame.ancestors());
    chain
        .iter()
        .rev()
        .filter(|f| !f.is_root())
        .fold(na::Isometry3::identity(), |world, f| {
            world * offset_isometry(&f.offset(), f.unit())
        })
}

/// Pose of `frame` relative to `target`.
pub fn relative_isometry(frame: &Frame, target: &Frame) -> na::Isometry3<f64> {
    world_isometry(target).inverse() * world_isometry(frame)
}
