//! Copyright 2024 Gareth Cross
//!
//! Hamilton quaternions. A unit quaternion represents a rotation; a pure quaternion (zero scalar
//! part) represents a point or vector.
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::axis::Axis;

/// Tolerance used by every epsilon-bounded predicate unless the caller supplies one.
pub const DEFAULT_EPSILON: f64 = 1.0e-10;

/// `q0 + q1*i + q2*j + q3*k`
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Quaternion {
    pub q0: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quaternion {
    #[inline(always)]
    pub const fn new(q0: f64, q1: f64, q2: f64, q3: f64) -> Self {
        Self { q0, q1, q2, q3 }
    }

    /// The rotation that does nothing.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Embed the vector `[x, y, z]` as a pure quaternion.
    #[inline(always)]
    pub const fn pure(x: f64, y: f64, z: f64) -> Self {
        Self::new(0.0, x, y, z)
    }

    pub fn from_vector(v: [f64; 3]) -> Self {
        Self::pure(v[0], v[1], v[2])
    }

    /// The scalar part.
    pub fn scalar(&self) -> f64 {
        self.q0
    }

    /// The vector part `[q1, q2, q3]`.
    pub fn vector(&self) -> [f64; 3] {
        [self.q1, self.q2, self.q3]
    }

    /// Component of the vector part along `axis`.
    pub fn component(&self, axis: Axis) -> f64 {
        self.vector()[axis.index()]
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.q0 * other.q0 + self.q1 * other.q1 + self.q2 * other.q2 + self.q3 * other.q3
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Norm of the vector part only.
    pub fn vector_norm(&self) -> f64 {
        (self.q1 * self.q1 + self.q2 * self.q2 + self.q3 * self.q3).sqrt()
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.q0, -self.q1, -self.q2, -self.q3)
    }

    /// Multiplicative inverse `conjugate / dot`. `None` when `dot` is (near) zero.
    pub fn inverse(&self) -> Option<Self> {
        let dot = self.dot(self);
        if dot < DEFAULT_EPSILON {
            return None;
        }
        Some(self.conjugate() / dot)
    }

    /// Scale to unit norm. `None` when the norm is (near) zero.
    pub fn normalize(&self) -> Option<Self> {
        let norm = self.norm();
        if norm < DEFAULT_EPSILON {
            None
        } else {
            Some(*self / norm)
        }
    }

    pub fn is_unit(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    pub fn is_zero(&self, epsilon: f64) -> bool {
        self.norm() < epsilon
    }

    pub fn is_pure(&self, epsilon: f64) -> bool {
        self.q0.abs() < epsilon
    }

    /// Cross product of the vector parts, as a pure quaternion.
    pub fn cross(&self, other: &Self) -> Self {
        Self::pure(
            self.q2 * other.q3 - self.q3 * other.q2,
            self.q3 * other.q1 - self.q1 * other.q3,
            self.q1 * other.q2 - self.q2 * other.q1,
        )
    }

    /// Rotate the pure quaternion `self` by the unit quaternion `rotation`: `r * v * r^*`.
    ///
    /// Neither precondition is checked. A non-pure `self` or non-unit `rotation` produces a
    /// numerically meaningless result.
    pub fn rotate_by(&self, rotation: &Self) -> Self {
        *rotation * *self * rotation.conjugate()
    }

    /// Translate the pure quaternion `self` by the pure quaternion `translation`.
    pub fn translate_by(&self, translation: &Self) -> Self {
        *self + *translation
    }

    /// Rotation of `angle` radians about the unit vector held in the pure quaternion `direction`.
    pub fn from_angle_direction(angle: f64, direction: &Self) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(c, s * direction.q1, s * direction.q2, s * direction.q3)
    }

    /// Rotation of `angle` radians about a frame axis.
    pub fn about(axis: Axis, angle: f64) -> Self {
        let [x, y, z] = axis.unit_vector();
        Self::from_angle_direction(angle, &Self::pure(x, y, z))
    }

    /// Decompose a unit quaternion into `(angle, direction)`. When the rotation angle is (near)
    /// zero the axis is undefined and the zero quaternion is returned in its place.
    pub fn as_angle_direction(&self) -> (f64, Self) {
        let s = self.vector_norm();
        let angle = 2.0 * s.atan2(self.q0);
        if s < DEFAULT_EPSILON {
            (angle, Self::zero())
        } else {
            (angle, Self::pure(self.q1 / s, self.q2 / s, self.q3 / s))
        }
    }

    /// Rotation built from intrinsic Z-Y-X Euler angles in radians.
    pub fn from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();
        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Inverse of [`Quaternion::from_yaw_pitch_roll`]: `(yaw, pitch, roll)` in radians.
    /// Pitch is clamped to `[-pi/2, pi/2]`.
    pub fn as_yaw_pitch_roll(&self) -> (f64, f64, f64) {
        let Self { q0, q1, q2, q3 } = *self;
        let roll = (2.0 * (q0 * q1 + q2 * q3)).atan2(1.0 - 2.0 * (q1 * q1 + q2 * q2));
        let pitch = (2.0 * (q0 * q2 - q3 * q1)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (q0 * q3 + q1 * q2)).atan2(1.0 - 2.0 * (q2 * q2 + q3 * q3));
        (yaw, pitch, roll)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    /// Hamilton product.
    #[inline]
    fn mul(self, b: Quaternion) -> Quaternion {
        let a = self;
        Quaternion::new(
            a.q0 * b.q0 - a.q1 * b.q1 - a.q2 * b.q2 - a.q3 * b.q3,
            a.q0 * b.q1 + a.q1 * b.q0 + a.q2 * b.q3 - a.q3 * b.q2,
            a.q0 * b.q2 - a.q1 * b.q3 + a.q2 * b.q0 + a.q3 * b.q1,
            a.q0 * b.q3 + a.q1 * b.q2 - a.q2 * b.q1 + a.q3 * b.q0,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, s: f64) -> Quaternion {
        Quaternion::new(self.q0 * s, self.q1 * s, self.q2 * s, self.q3 * s)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    #[inline]
    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

impl Div<f64> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn div(self, s: f64) -> Quaternion {
        Quaternion::new(self.q0 / s, self.q1 / s, self.q2 / s, self.q3 / s)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn add(self, b: Quaternion) -> Quaternion {
        Quaternion::new(self.q0 + b.q0, self.q1 + b.q1, self.q2 + b.q2, self.q3 + b.q3)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn sub(self, b: Quaternion) -> Quaternion {
        Quaternion::new(self.q0 - b.q0, self.q1 - b.q1, self.q2 - b.q2, self.q3 - b.q3)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.q0, -self.q1, -self.q2, -self.q3)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} + {}i + {}j + {}k)",
            self.q0, self.q1, self.q2, self.q3
        )
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.q0.abs_diff_eq(&other.q0, epsilon)
            && self.q1.abs_diff_eq(&other.q1, epsilon)
            && self.q2.abs_diff_eq(&other.q2, epsilon)
            && self.q3.abs_diff_eq(&other.q3, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.q0.relative_eq(&other.q0, epsilon, max_relative)
            && self.q1.relative_eq(&other.q1, epsilon, max_relative)
            && self.q2.relative_eq(&other.q2, epsilon, max_relative)
            && self.q3.relative_eq(&other.q3, epsilon, max_relative)
    }
}

#[cfg(feature = "nalgebra")]
mod interop {
    use super::Quaternion;
    use nalgebra as na;

    impl From<na::Quaternion<f64>> for Quaternion {
        fn from(q: na::Quaternion<f64>) -> Self {
            Quaternion::new(q.w, q.i, q.j, q.k)
        }
    }

    impl From<na::UnitQuaternion<f64>> for Quaternion {
        fn from(q: na::UnitQuaternion<f64>) -> Self {
            q.into_inner().into()
        }
    }

    impl From<Quaternion> for na::Quaternion<f64> {
        fn from(q: Quaternion) -> Self {
            na::Quaternion::new(q.q0, q.q1, q.q2, q.q3)
        }
    }

    /// Vectors embed as pure quaternions.
    impl From<na::Vector3<f64>> for Quaternion {
        fn from(v: na::Vector3<f64>) -> Self {
            Quaternion::pure(v.x, v.y, v.z)
        }
    }
}
