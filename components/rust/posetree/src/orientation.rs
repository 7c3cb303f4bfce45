//! Copyright 2024 Gareth Cross
use uom::si::f64::Angle;

use crate::axis::Axis;
use crate::direction::Direction;
use crate::dual_quaternion::DualQuaternion;
use crate::error::FrameError;
use crate::frame::Frame;
use crate::quaternion::Quaternion;
use crate::traits::{Composable, Framed, Invertible, Rotatable, Transformable};
use crate::units;

/// A rotation expressed in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Orientation {
    frame: Frame,
    quat: Quaternion,
}

impl Orientation {
    pub fn identity(frame: &Frame) -> Self {
        Self::from_unit_quaternion(frame, Quaternion::identity())
    }

    /// Normalizes `quat`. Fails for a zero quaternion.
    pub fn from_quaternion(frame: &Frame, quat: Quaternion) -> Result<Self, FrameError> {
        let quat = quat.normalize().ok_or(FrameError::ZeroNorm)?;
        Ok(Self::from_unit_quaternion(frame, quat))
    }

    /// `quat` must already have unit norm. Not checked.
    pub fn from_unit_quaternion(frame: &Frame, quat: Quaternion) -> Self {
        Self {
            frame: frame.clone(),
            quat,
        }
    }

    pub fn about(frame: &Frame, axis: Axis, angle: Angle) -> Self {
        Self::from_unit_quaternion(frame, Quaternion::about(axis, units::radians(angle)))
    }

    /// Rotation by `angle` about `direction`, in the frame of `direction`.
    pub fn from_angle_direction(angle: Angle, direction: &Direction) -> Self {
        Self::from_unit_quaternion(
            &direction.frame(),
            Quaternion::from_angle_direction(units::radians(angle), &direction.quaternion()),
        )
    }

    pub fn from_yaw_pitch_roll(frame: &Frame, yaw: Angle, pitch: Angle, roll: Angle) -> Self {
        Self::from_unit_quaternion(
            frame,
            Quaternion::from_yaw_pitch_roll(
                units::radians(yaw),
                units::radians(pitch),
                units::radians(roll),
            ),
        )
    }

    pub fn quaternion(&self) -> Quaternion {
        self.quat
    }

    pub fn yaw_pitch_roll(&self) -> (Angle, Angle, Angle) {
        let (yaw, pitch, roll) = self.quat.as_yaw_pitch_roll();
        (units::angle(yaw), units::angle(pitch), units::angle(roll))
    }

    /// Rotation angle in `[0, 2 pi]`.
    pub fn angle(&self) -> Angle {
        units::angle(self.quat.as_angle_direction().0)
    }

    /// Rotation axis. Undefined for a null rotation.
    pub fn axis(&self) -> Result<Direction, FrameError> {
        let (_, direction) = self.quat.as_angle_direction();
        Direction::from_quaternion(&self.frame, direction)
    }

    /// Smallest angle of the rotation taking `self` onto `other`.
    pub fn angle_to(&self, other: &Orientation) -> Angle {
        let other = other.transform_to(&self.frame);
        let delta = self.quat.conjugate() * other.quat;
        units::angle(2.0 * delta.vector_norm().atan2(delta.q0.abs()))
    }

    #[cfg(feature = "nalgebra")]
    pub fn to_unit_quaternion(&self) -> nalgebra::UnitQuaternion<f64> {
        nalgebra::UnitQuaternion::new_normalize(self.quat.into())
    }
}

impl Framed for Orientation {
    fn frame(&self) -> Frame {
        self.frame.clone()
    }
}

impl Invertible for Orientation {
    fn inverse(&self) -> Self {
        Self::from_unit_quaternion(&self.frame, self.quat.conjugate())
    }
}

impl Rotatable for Orientation {
    fn rotate(&self, rotation: &Orientation) -> Self {
        Frame::from_orientation(self).rotate(rotation).orientation()
    }
}

impl Transformable for Orientation {
    fn transform_to(&self, frame: &Frame) -> Self {
        let pose = Frame::from_orientation(self).transform_to(frame);
        Self::from_unit_quaternion(frame, pose.offset().as_rotation())
    }

    fn transform_by(&self, frame: &Frame) -> Self {
        Frame::from_orientation(self).transform_by(frame).orientation()
    }
}

impl Composable for Orientation {
    fn compose(&self, motion: &DualQuaternion) -> Self {
        Self::from_unit_quaternion(&self.frame, motion.transform_rotation(&self.quat))
    }
}
