//! Copyright 2024 Gareth Cross
//!
//! Hand-picked rotations and translations, including the awkward ones (identity, half turns,
//! tiny angles).
use posetree::{Axis, DualQuaternion, Quaternion};

pub fn get_test_rotations() -> Vec<Quaternion> {
    vec![
        Quaternion::identity(),
        Quaternion::about(Axis::Z, std::f64::consts::FRAC_PI_2),
        Quaternion::about(Axis::X, std::f64::consts::PI),
        Quaternion::about(Axis::Y, 1.0e-9),
        Quaternion::from_yaw_pitch_roll(0.04, -0.02, 0.03),
        Quaternion::from_yaw_pitch_roll(1.2, -0.821, 0.321),
        Quaternion::from_yaw_pitch_roll(-0.331, 0.8521, -0.011),
    ]
}

pub fn get_test_translations() -> Vec<Quaternion> {
    vec![
        Quaternion::zero(),
        Quaternion::pure(1.0, 0.0, 0.0),
        Quaternion::pure(-0.73, -4.3, 0.33),
        Quaternion::pure(5.1, -3.3, 0.55),
    ]
}

/// Every pairing of [`get_test_rotations`] with [`get_test_translations`].
pub fn get_test_motions() -> Vec<DualQuaternion> {
    get_test_rotations()
        .into_iter()
        .flat_map(|r| {
            get_test_translations()
                .into_iter()
                .map(move |t| DualQuaternion::new(r, t))
        })
        .collect()
}
