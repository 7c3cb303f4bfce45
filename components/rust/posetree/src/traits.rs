//! Capabilities shared by frames and the frame-tagged value types.
//!
//! Every mutating method is "compute the new value, then overwrite the binding". `Frame` is a
//! shared node and mutates in place instead, so it only implements [`Framed`].
use crate::dual_quaternion::DualQuaternion;
use crate::frame::Frame;
use crate::orientation::Orientation;
use crate::position::Position;

/// Something that lives in a frame of the tree.
pub trait Framed {
    /// The frame this value is expressed in. For a `Frame`, its parent.
    fn frame(&self) -> Frame;

    /// Root of the tree.
    fn base(&self) -> Frame {
        Frame::root()
    }

    fn has_frame(&self, frame: &Frame) -> bool {
        self.frame() == *frame
    }

    /// True if `frame` is reachable by walking up from [`Framed::frame`], inclusive.
    fn has_ancestor(&self, frame: &Frame) -> bool {
        let mut current = self.frame();
        loop {
            if current == *frame {
                return true;
            }
            if current.is_root() {
                return false;
            }
            current = current.parent();
        }
    }

    /// Nearest frame that is an ancestor of both `self` and `other`.
    fn common<F: Framed + ?Sized>(&self, other: &F) -> Frame {
        let mut current = self.frame();
        while !current.is_root() {
            if other.has_ancestor(&current) {
                return current;
            }
            current = current.parent();
        }
        current
    }
}

pub trait Invertible: Sized {
    fn inverse(&self) -> Self;

    fn invert(&mut self) {
        *self = self.inverse();
    }
}

pub trait Rotatable: Sized {
    /// Rotate about the origin of the frame this value is expressed in.
    fn rotate(&self, rotation: &Orientation) -> Self;

    fn rotated(&mut self, rotation: &Orientation) {
        *self = self.rotate(rotation);
    }
}

pub trait Translatable: Sized {
    fn translate(&self, offset: &Position) -> Self;

    fn translated(&mut self, offset: &Position) {
        *self = self.translate(offset);
    }
}

pub trait Transformable: Sized {
    /// Re-express the same physical quantity in `frame`.
    fn transform_to(&self, frame: &Frame) -> Self;

    /// Move the quantity by the rigid offset `frame` describes. The result stays in the same frame.
    fn transform_by(&self, frame: &Frame) -> Self;

    fn transformed_to(&mut self, frame: &Frame) {
        *self = self.transform_to(frame);
    }

    fn transformed_by(&mut self, frame: &Frame) {
        *self = self.transform_by(frame);
    }
}

pub trait Composable: Sized {
    /// Apply `motion`, expressed in this value's own frame and length unit.
    fn compose(&self, motion: &DualQuaternion) -> Self;

    fn composed(&mut self, motion: &DualQuaternion) {
        *self = self.compose(motion);
    }
}
