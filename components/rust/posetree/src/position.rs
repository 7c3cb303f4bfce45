//! Copyright 2024 Gareth Cross
use uom::si::f64::{Angle, Length};

use crate::axis::Axis;
use crate::direction::Direction;
use crate::dual_quaternion::DualQuaternion;
use crate::error::FrameError;
use crate::frame::Frame;
use crate::orientation::Orientation;
use crate::quaternion::{Quaternion, DEFAULT_EPSILON};
use crate::traits::{Composable, Framed, Invertible, Rotatable, Transformable, Translatable};
use crate::units::{self, LengthUnit};

/// A point expressed in a frame, with raw coordinates stored in `unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    frame: Frame,
    unit: LengthUnit,
    quat: Quaternion,
}

impl Position {
    pub fn new(frame: &Frame, unit: LengthUnit, x: f64, y: f64, z: f64) -> Self {
        Self::from_quaternion(frame, unit, Quaternion::pure(x, y, z))
    }

    pub fn origin(frame: &Frame, unit: LengthUnit) -> Self {
        Self::new(frame, unit, 0.0, 0.0, 0.0)
    }

    pub fn from_vector(frame: &Frame, unit: LengthUnit, v: [f64; 3]) -> Self {
        Self::from_quaternion(frame, unit, Quaternion::from_vector(v))
    }

    /// Build from `uom` lengths, stored in `unit`.
    pub fn from_lengths(frame: &Frame, unit: LengthUnit, x: Length, y: Length, z: Length) -> Self {
        Self::new(frame, unit, unit.value(x), unit.value(y), unit.value(z))
    }

    /// Only the vector part of `quat` is kept.
    pub fn from_quaternion(frame: &Frame, unit: LengthUnit, quat: Quaternion) -> Self {
        Self {
            frame: frame.clone(),
            unit,
            quat: Quaternion::pure(quat.q1, quat.q2, quat.q3),
        }
    }

    /// `polar` is measured from +z, `azimuth` from +x towards +y.
    pub fn spherical(
        frame: &Frame,
        unit: LengthUnit,
        radius: f64,
        polar: Angle,
        azimuth: Angle,
    ) -> Result<Self, FrameError> {
        if radius.abs() < DEFAULT_EPSILON {
            return Err(FrameError::ZeroRadius);
        }
        let (st, ct) = units::radians(polar).sin_cos();
        let (sp, cp) = units::radians(azimuth).sin_cos();
        Ok(Self::new(
            frame,
            unit,
            radius * st * cp,
            radius * st * sp,
            radius * ct,
        ))
    }

    pub fn cylindrical(
        frame: &Frame,
        unit: LengthUnit,
        radius: f64,
        azimuth: Angle,
        z: f64,
    ) -> Result<Self, FrameError> {
        if radius.abs() < DEFAULT_EPSILON {
            return Err(FrameError::ZeroRadius);
        }
        let (sp, cp) = units::radians(azimuth).sin_cos();
        Ok(Self::new(frame, unit, radius * cp, radius * sp, z))
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The coordinates as a pure quaternion, in [`Position::unit`].
    pub fn quaternion(&self) -> Quaternion {
        self.quat
    }

    /// Raw coordinates in [`Position::unit`].
    pub fn coordinates(&self) -> [f64; 3] {
        self.quat.vector()
    }

    pub fn x(&self) -> Length {
        self.component(Axis::X)
    }

    pub fn y(&self) -> Length {
        self.component(Axis::Y)
    }

    pub fn z(&self) -> Length {
        self.component(Axis::Z)
    }

    pub fn component(&self, axis: Axis) -> Length {
        self.unit.length(self.quat.component(axis))
    }

    /// Distance from the origin of [`Framed::frame`].
    pub fn norm(&self) -> Length {
        self.unit.length(self.quat.norm())
    }

    /// The same point with coordinates stored in `unit`.
    pub fn converted(&self, unit: LengthUnit) -> Self {
        let factor = LengthUnit::conversion(self.unit, unit);
        Self::from_quaternion(&self.frame, unit, self.quat * factor)
    }

    /// Direction from the frame origin towards this point. Undefined at the origin.
    pub fn direction(&self) -> Result<Direction, FrameError> {
        Direction::from_quaternion(&self.frame, self.quat)
    }

    /// Angle between the position vectors of `self` and `other`, measured in this frame.
    pub fn angle_between(&self, other: &Position) -> Result<Angle, FrameError> {
        let other = other.transform_to(&self.frame);
        if self.quat.is_zero(DEFAULT_EPSILON) || other.quat.is_zero(DEFAULT_EPSILON) {
            return Err(FrameError::ZeroVector);
        }
        let cross = self.quat.cross(&other.quat).norm();
        let dot = self.quat.dot(&other.quat);
        Ok(units::angle(cross.atan2(dot)))
    }

    /// Straight-line distance to `other`.
    pub fn distance(&self, other: &Position) -> Length {
        let other = other.transform_to(&self.frame).converted(self.unit);
        self.unit.length((self.quat - other.quat).norm())
    }

    /// Take a position produced in some other unit back into ours.
    fn rescaled_from(frame: &Frame, from: LengthUnit, to: LengthUnit, quat: Quaternion) -> Self {
        Self::from_quaternion(frame, to, quat * LengthUnit::conversion(from, to))
    }

    #[cfg(feature = "nalgebra")]
    pub fn to_vector(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::from(self.coordinates())
    }
}

impl Framed for Position {
    fn frame(&self) -> Frame {
        self.frame.clone()
    }
}

impl Invertible for Position {
    /// Reflect through the frame origin.
    fn inverse(&self) -> Self {
        Self::from_quaternion(&self.frame, self.unit, -self.quat)
    }
}

impl Rotatable for Position {
    fn rotate(&self, rotation: &Orientation) -> Self {
        let position = Frame::from_position(self).rotate(rotation).position();
        Self::rescaled_from(&self.frame, position.unit, self.unit, position.quat)
    }
}

impl Translatable for Position {
    /// `offset` is converted into this frame and unit before it is added.
    fn translate(&self, offset: &Position) -> Self {
        let offset = offset.transform_to(&self.frame).converted(self.unit);
        Self::from_quaternion(&self.frame, self.unit, self.quat.translate_by(&offset.quat))
    }
}

impl Transformable for Position {
    fn transform_to(&self, frame: &Frame) -> Self {
        let pose = Frame::from_position(self).transform_to(frame);
        Self::rescaled_from(
            frame,
            pose.unit(),
            self.unit,
            pose.offset().as_translation(),
        )
    }

    fn transform_by(&self, frame: &Frame) -> Self {
        let position = Frame::from_position(self).transform_by(frame).position();
        Self::rescaled_from(&self.frame, position.unit, self.unit, position.quat)
    }
}

impl Composable for Position {
    fn compose(&self, motion: &DualQuaternion) -> Self {
        Self::from_quaternion(
            &self.frame,
            self.unit,
            motion.transform_translation(&self.quat),
        )
    }
}
