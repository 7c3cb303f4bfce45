//! Copyright 2024 Gareth Cross
//!
//! Dual quaternions encode a rigid motion (rotation followed by translation) as a pair
//! `(real, dual)` where `real` is the unit rotation and `dual = 0.5 * translation * real`.
use std::fmt;
use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use crate::quaternion::{Quaternion, DEFAULT_EPSILON};

/// Which of the three dual quaternion conjugates to take.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Conjugate {
    /// `(real^*, dual^*)`. Equal to the inverse of a normalized dual quaternion.
    Quaternion,
    /// `(real, -dual)`.
    Dual,
    /// `(real^*, -dual^*)`. Used to sandwich points through a rigid motion.
    DualAndQuaternion,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DualQuaternion {
    pub real: Quaternion,
    pub dual: Quaternion,
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl DualQuaternion {
    /// Construct directly from the two parts. `real` must already be normalized.
    pub const fn from_parts(real: Quaternion, dual: Quaternion) -> Self {
        Self { real, dual }
    }

    pub const fn identity() -> Self {
        Self::from_parts(Quaternion::identity(), Quaternion::zero())
    }

    /// Rotate by the unit quaternion `rotation`, then translate by the pure quaternion
    /// `translation`.
    pub fn new(rotation: Quaternion, translation: Quaternion) -> Self {
        Self::from_parts(rotation, translation * rotation * 0.5)
    }

    pub fn from_rotation(rotation: Quaternion) -> Self {
        Self::from_parts(rotation, Quaternion::zero())
    }

    pub fn from_translation(translation: Quaternion) -> Self {
        Self::new(Quaternion::identity(), translation)
    }

    /// The `(1, p)` embedding of a pure quaternion point used by the sandwich product.
    fn from_point(point: Quaternion) -> Self {
        Self::from_parts(Quaternion::identity(), point)
    }

    pub fn norm(&self) -> f64 {
        self.real.norm()
    }

    /// Scale both parts by `1 / |real|`. `None` when `real` is (near) zero.
    pub fn normalize(&self) -> Option<Self> {
        let norm = self.norm();
        if norm < DEFAULT_EPSILON {
            None
        } else {
            Some(Self::from_parts(self.real / norm, self.dual / norm))
        }
    }

    pub fn is_unit(&self, epsilon: f64) -> bool {
        self.real.is_unit(epsilon)
    }

    pub fn conjugate(&self, mode: Conjugate) -> Self {
        match mode {
            Conjugate::Quaternion => {
                Self::from_parts(self.real.conjugate(), self.dual.conjugate())
            }
            Conjugate::Dual => Self::from_parts(self.real, -self.dual),
            Conjugate::DualAndQuaternion => {
                Self::from_parts(self.real.conjugate(), -self.dual.conjugate())
            }
        }
    }

    /// The opposite rigid motion. Only valid when `real` is normalized, which is not checked.
    pub fn inverse(&self) -> Self {
        self.conjugate(Conjugate::Quaternion)
    }

    pub fn as_rotation(&self) -> Quaternion {
        self.real
    }

    /// The translation, as a pure quaternion.
    pub fn as_translation(&self) -> Quaternion {
        (self.dual * self.real.conjugate()) * 2.0
    }

    /// Scale the translation by `factor` and keep the rotation. Used to change length units.
    pub fn rescaled(&self, factor: f64) -> Self {
        Self::from_parts(self.real, self.dual * factor)
    }

    /// Push the pure quaternion `point` through this motion: `(self * (1, p) * self^#).dual`,
    /// where `^#` is the dual-and-quaternion conjugate.
    pub fn transform_translation(&self, point: &Quaternion) -> Quaternion {
        (*self * Self::from_point(*point) * self.conjugate(Conjugate::DualAndQuaternion)).dual
    }

    /// Push the unit quaternion `rotation` through this motion. Translation does not act on a
    /// rotation, so only the real part of the product survives.
    pub fn transform_rotation(&self, rotation: &Quaternion) -> Quaternion {
        (*self * Self::from_rotation(*rotation)).real
    }
}

impl Mul for DualQuaternion {
    type Output = DualQuaternion;

    /// `p * q` applies the motion `q` first, then `p`.
    #[inline]
    fn mul(self, q: DualQuaternion) -> DualQuaternion {
        DualQuaternion::from_parts(
            self.real * q.real,
            self.real * q.dual + self.dual * q.real,
        )
    }
}

impl fmt::Display for DualQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[real: {}, dual: {}]", self.real, self.dual)
    }
}

impl AbsDiffEq for DualQuaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.real.abs_diff_eq(&other.real, epsilon) && self.dual.abs_diff_eq(&other.dual, epsilon)
    }
}

impl RelativeEq for DualQuaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.real.relative_eq(&other.real, epsilon, max_relative)
            && self.dual.relative_eq(&other.dual, epsilon, max_relative)
    }
}

#[cfg(feature = "nalgebra")]
impl From<DualQuaternion> for nalgebra::Isometry3<f64> {
    fn from(dq: DualQuaternion) -> Self {
        let [x, y, z] = dq.as_translation().vector();
        nalgebra::Isometry3::from_parts(
            nalgebra::Translation3::new(x, y, z),
            nalgebra::UnitQuaternion::new_unchecked(dq.as_rotation().into()),
        )
    }
}
