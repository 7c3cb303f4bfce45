//! Copyright 2024 Gareth Cross
use uom::si::f64::Angle;

use crate::axis::Axis;
use crate::error::FrameError;
use crate::frame::Frame;
use crate::orientation::Orientation;
use crate::quaternion::{Quaternion, DEFAULT_EPSILON};
use crate::traits::{Framed, Invertible, Rotatable, Transformable};
use crate::units;

/// A unit vector expressed in a frame. Directions only rotate; frame translations do not act on
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Direction {
    frame: Frame,
    quat: Quaternion,
}

impl Direction {
    /// Normalizes `[x, y, z]`. Fails for the zero vector.
    pub fn new(frame: &Frame, x: f64, y: f64, z: f64) -> Result<Self, FrameError> {
        Self::from_quaternion(frame, Quaternion::pure(x, y, z))
    }

    /// Normalizes the vector part of `quat`.
    pub fn from_quaternion(frame: &Frame, quat: Quaternion) -> Result<Self, FrameError> {
        let quat = Quaternion::pure(quat.q1, quat.q2, quat.q3)
            .normalize()
            .ok_or(FrameError::ZeroVector)?;
        Ok(Self::from_unit_quaternion(frame, quat))
    }

    fn from_unit_quaternion(frame: &Frame, quat: Quaternion) -> Self {
        Self {
            frame: frame.clone(),
            quat,
        }
    }

    pub fn axis(frame: &Frame, axis: Axis) -> Self {
        Self::from_unit_quaternion(frame, Quaternion::from_vector(axis.unit_vector()))
    }

    /// `polar` is measured from +z, `azimuth` from +x towards +y.
    pub fn spherical(frame: &Frame, polar: Angle, azimuth: Angle) -> Self {
        let (st, ct) = units::radians(polar).sin_cos();
        let (sp, cp) = units::radians(azimuth).sin_cos();
        Self::from_unit_quaternion(frame, Quaternion::pure(st * cp, st * sp, ct))
    }

    /// Direction towards the cylindrical point `(radius, azimuth, z)`. A zero radius leaves the
    /// azimuth meaningless and is rejected.
    pub fn cylindrical(
        frame: &Frame,
        radius: f64,
        azimuth: Angle,
        z: f64,
    ) -> Result<Self, FrameError> {
        if radius.abs() < DEFAULT_EPSILON {
            return Err(FrameError::ZeroRadius);
        }
        let (sp, cp) = units::radians(azimuth).sin_cos();
        Self::new(frame, radius * cp, radius * sp, z)
    }

    /// Unit normal to the plane spanned by `a` and `b`, in the frame of `a`.
    pub fn perpendicular(a: &Direction, b: &Direction) -> Result<Self, FrameError> {
        let b = b.transform_to(&a.frame);
        Self::from_quaternion(&a.frame, a.quat.cross(&b.quat))
            .map_err(|_| FrameError::ParallelDirections)
    }

    pub fn quaternion(&self) -> Quaternion {
        self.quat
    }

    pub fn vector(&self) -> [f64; 3] {
        self.quat.vector()
    }

    pub fn x(&self) -> f64 {
        self.quat.q1
    }

    pub fn y(&self) -> f64 {
        self.quat.q2
    }

    pub fn z(&self) -> f64 {
        self.quat.q3
    }

    /// Projection onto one of the frame axes.
    pub fn component(&self, axis: Axis) -> f64 {
        self.quat.component(axis)
    }

    /// Cosine of the angle to `other`.
    pub fn dot(&self, other: &Direction) -> f64 {
        self.quat.dot(&other.transform_to(&self.frame).quat)
    }

    pub fn angle_between(&self, other: &Direction) -> Angle {
        let other = other.transform_to(&self.frame);
        let cross = self.quat.cross(&other.quat).norm();
        units::angle(cross.atan2(self.quat.dot(&other.quat)))
    }

    /// Rotate by the orientation of `pose` relative to this direction's frame.
    fn rotated_through(&self, frame: &Frame, pose: &Frame) -> Self {
        let rotation = pose.orientation().quaternion();
        Self::from_unit_quaternion(frame, self.quat.rotate_by(&rotation))
    }

    #[cfg(feature = "nalgebra")]
    pub fn to_unit_vector(&self) -> nalgebra::Unit<nalgebra::Vector3<f64>> {
        nalgebra::Unit::new_normalize(nalgebra::Vector3::from(self.vector()))
    }
}

impl Framed for Direction {
    fn frame(&self) -> Frame {
        self.frame.clone()
    }
}

impl Invertible for Direction {
    fn inverse(&self) -> Self {
        Self::from_unit_quaternion(&self.frame, -self.quat)
    }
}

impl Rotatable for Direction {
    fn rotate(&self, rotation: &Orientation) -> Self {
        self.rotated_through(&self.frame, &Frame::at(&self.frame).rotate(rotation))
    }
}

impl Transformable for Direction {
    fn transform_to(&self, frame: &Frame) -> Self {
        self.rotated_through(frame, &Frame::at(&self.frame).transform_to(frame))
    }

    fn transform_by(&self, frame: &Frame) -> Self {
        self.rotated_through(&self.frame, &Frame::at(&self.frame).transform_by(frame))
    }
}
