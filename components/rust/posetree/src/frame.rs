//! Copyright 2024 Gareth Cross
//!
//! The frame tree. A [`Frame`] is a shared handle to a node holding `(parent, unit, offset)`:
//! its pose relative to its parent. Poses relative to any other frame are computed on demand by
//! walking the live tree, so moving a frame is immediately visible to every descendant.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace, warn};

use crate::axis::Axis;
use crate::direction::Direction;
use crate::dual_quaternion::DualQuaternion;
use crate::error::FrameError;
use crate::orientation::Orientation;
use crate::position::Position;
use crate::traits::{Framed, Transformable};
use crate::units::LengthUnit;

#[derive(Clone)]
struct Node {
    /// `None` only for the root, which is its own parent.
    parent: Option<Frame>,
    unit: LengthUnit,
    offset: DualQuaternion,
}

/// Unlinks long parent chains one node at a time so dropping a deep tree does not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(frame) = next {
            match Arc::try_unwrap(frame.node) {
                Ok(lock) => {
                    let mut node = lock.into_inner().unwrap_or_else(PoisonError::into_inner);
                    next = node.parent.take();
                }
                Err(_) => break,
            }
        }
    }
}

#[derive(Clone)]
pub struct Frame {
    node: Arc<RwLock<Node>>,
}

static ROOT: OnceLock<Frame> = OnceLock::new();

/// Compose `outer * inner`, first rescaling the translation of `inner` into the unit of `outer`.
fn compose_offsets(
    (outer, outer_unit): (DualQuaternion, LengthUnit),
    (inner, inner_unit): (DualQuaternion, LengthUnit),
) -> (DualQuaternion, LengthUnit) {
    let inner = inner.rescaled(LengthUnit::conversion(inner_unit, outer_unit));
    (outer * inner, outer_unit)
}

impl Frame {
    /// The single root of every frame tree.
    pub fn root() -> Frame {
        ROOT.get_or_init(|| {
            Frame::from_node(Node {
                parent: None,
                unit: LengthUnit::default(),
                offset: DualQuaternion::identity(),
            })
        })
        .clone()
    }

    fn from_node(node: Node) -> Frame {
        Frame {
            node: Arc::new(RwLock::new(node)),
        }
    }

    /// A new frame at pose `offset` (translation in `unit`) relative to `parent`.
    pub fn from_offset(parent: &Frame, unit: LengthUnit, offset: DualQuaternion) -> Frame {
        Frame::from_node(Node {
            parent: Some(parent.clone()),
            unit,
            offset,
        })
    }

    /// A new frame coincident with `parent`.
    pub fn at(parent: &Frame) -> Frame {
        Frame::from_offset(parent, LengthUnit::default(), DualQuaternion::identity())
    }

    /// A frame translated to `position`, parented on the frame `position` is expressed in.
    pub fn from_position(position: &Position) -> Frame {
        Frame::from_offset(
            &position.frame(),
            position.unit(),
            DualQuaternion::from_translation(position.quaternion()),
        )
    }

    /// A frame rotated to `orientation`, parented on the frame `orientation` is expressed in.
    pub fn from_orientation(orientation: &Orientation) -> Frame {
        Frame::from_offset(
            &orientation.frame(),
            LengthUnit::default(),
            DualQuaternion::from_rotation(orientation.quaternion()),
        )
    }

    /// A frame at `position` with `orientation`, parented on the frame of `position`.
    /// The orientation is first re-expressed in that frame.
    pub fn from_pose(position: &Position, orientation: &Orientation) -> Frame {
        let parent = position.frame();
        let rotation = orientation.transform_to(&parent).quaternion();
        Frame::from_offset(
            &parent,
            position.unit(),
            DualQuaternion::new(rotation, position.quaternion()),
        )
    }

    /// As [`Frame::from_pose`], then re-parented on `parent` keeping the same physical pose.
    pub fn from_pose_in(position: &Position, orientation: &Orientation, parent: &Frame) -> Frame {
        let pose = Frame::from_pose(position, orientation).transform_to(parent);
        let (offset, unit) = pose.pose();
        Frame::from_offset(
            parent,
            position.unit(),
            offset.rescaled(LengthUnit::conversion(unit, position.unit())),
        )
    }

    fn read(&self) -> RwLockReadGuard<'_, Node> {
        self.node.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Node> {
        self.node.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The parent frame. The root returns itself.
    pub fn parent(&self) -> Frame {
        match &self.read().parent {
            Some(parent) => parent.clone(),
            None => self.clone(),
        }
    }

    pub fn unit(&self) -> LengthUnit {
        self.read().unit
    }

    /// Pose relative to [`Frame::parent`].
    pub fn offset(&self) -> DualQuaternion {
        self.read().offset
    }

    fn pose(&self) -> (DualQuaternion, LengthUnit) {
        let node = self.read();
        (node.offset, node.unit)
    }

    pub fn is_root(&self) -> bool {
        self.read().parent.is_none()
    }

    /// Number of hops to the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Parent, grandparent, and so on up to and including the root.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: (!self.is_root()).then(|| self.parent()),
        }
    }

    /// Origin of this frame, expressed in its parent.
    pub fn position(&self) -> Position {
        let (offset, unit) = self.pose();
        Position::from_quaternion(&self.parent(), unit, offset.as_translation())
    }

    /// Rotation of this frame, expressed in its parent.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_unit_quaternion(&self.parent(), self.offset().as_rotation())
    }

    /// One of this frame's axes, expressed in its parent.
    pub fn axis(&self, axis: Axis) -> Direction {
        Direction::axis(self, axis).transform_to(&self.parent())
    }

    /// Re-express this frame's pose relative to `target`. The result is a new frame parented on
    /// `target`; the tree is not modified.
    pub fn transform_to(&self, target: &Frame) -> Frame {
        if self == target {
            trace!("transform_to: frame is its own target");
            return Frame::at(target);
        }

        let (offset, unit) = self.pose();
        let parent = self.parent();

        if parent == *target {
            trace!("transform_to: target is the parent");
            Frame::from_offset(target, unit, offset)
        } else if parent.has_frame(target) {
            trace!("transform_to: target is the grandparent");
            let (offset, unit) = compose_offsets(parent.pose(), (offset, unit));
            Frame::from_offset(target, unit, offset)
        } else if parent.has_ancestor(target) {
            trace!("transform_to: target is a distant ancestor");
            let (offset, unit) = self.pose_in_ancestor(target);
            Frame::from_offset(target, unit, offset)
        } else if target.has_frame(self) {
            trace!("transform_to: target is a child");
            let (offset, unit) = target.pose();
            Frame::from_offset(target, unit, offset.inverse())
        } else if target.has_ancestor(self) {
            trace!("transform_to: target is a distant descendant");
            let (offset, unit) = target.pose_in_ancestor(self);
            Frame::from_offset(target, unit, offset.inverse())
        } else {
            let common = self.common(target);
            trace!("transform_to: unrelated frames, going through a common ancestor");
            let to_common = self.transform_to(&common);
            let from_common = common.transform_to(target);
            let (offset, unit) = compose_offsets(from_common.pose(), to_common.pose());
            Frame::from_offset(target, unit, offset)
        }
    }

    /// Pose relative to `ancestor`, folding offsets up the parent chain. Stops at the root if
    /// `ancestor` is not above this frame.
    fn pose_in_ancestor(&self, ancestor: &Frame) -> (DualQuaternion, LengthUnit) {
        let mut pose = self.pose();
        let mut current = self.parent();
        while current != *ancestor && !current.is_root() {
            pose = compose_offsets(current.pose(), pose);
            current = current.parent();
        }
        pose
    }

    /// Move this frame by the rigid offset `other` describes: `other` is re-expressed in this
    /// frame's parent and applied after the current offset. The result keeps the same parent.
    pub fn transform_by(&self, other: &Frame) -> Frame {
        let parent = self.parent();
        let (motion, motion_unit) = other.transform_to(&parent).pose();
        let (offset, unit) = self.pose();
        let (offset, _) = compose_offsets(
            (
                motion.rescaled(LengthUnit::conversion(motion_unit, unit)),
                unit,
            ),
            (offset, unit),
        );
        Frame::from_offset(&parent, unit, offset)
    }

    /// Apply `motion` (expressed in the parent frame, translation in [`Frame::unit`]) after the
    /// current offset.
    pub fn compose(&self, motion: &DualQuaternion) -> Frame {
        let (offset, unit) = self.pose();
        Frame::from_offset(&self.parent(), unit, *motion * offset)
    }

    /// Rotate about the parent's origin.
    pub fn rotate(&self, rotation: &Orientation) -> Frame {
        let rotation = rotation.transform_to(&self.parent());
        self.transform_by(&Frame::from_orientation(&rotation))
    }

    pub fn translate(&self, offset: &Position) -> Frame {
        self.transform_by(&Frame::from_position(offset))
    }

    /// A new frame with the opposite offset and the same parent.
    pub fn inverse(&self) -> Frame {
        let (offset, unit) = self.pose();
        Frame::from_offset(&self.parent(), unit, offset.inverse())
    }

    /// Overwrite this node with the state of `pose`. Every handle to this frame, and every frame
    /// below it, observes the change.
    fn replace(&self, pose: &Frame) {
        if self.is_root() {
            warn!("ignoring attempt to move the root frame");
            return;
        }
        let node = pose.read().clone();
        debug!(
            "moving frame {:p} to offset {} ({})",
            Arc::as_ptr(&self.node),
            node.offset,
            node.unit
        );
        *self.write() = node;
    }

    /// Translate this frame in place by `offset`. The root never moves: on the root this logs a
    /// warning and does nothing.
    pub fn translated(&self, offset: &Position) {
        self.replace(&self.translate(offset));
    }

    /// Rotate this frame in place about its parent's origin. A no-op (with a warning) on the root.
    pub fn rotated(&self, rotation: &Orientation) {
        self.replace(&self.rotate(rotation));
    }

    /// In-place [`Frame::compose`]. A no-op (with a warning) on the root.
    pub fn composed(&self, motion: &DualQuaternion) {
        self.replace(&self.compose(motion));
    }

    /// In-place [`Frame::transform_by`]. A no-op (with a warning) on the root.
    pub fn transformed_by(&self, other: &Frame) {
        self.replace(&self.transform_by(other));
    }

    /// Re-parent this frame on `target` without moving it physically. Fails with
    /// [`FrameError::Cycle`] if `target` is this frame or lies below it, which always holds for
    /// the root.
    pub fn transformed_to(&self, target: &Frame) -> Result<(), FrameError> {
        if target == self || target.has_ancestor(self) {
            return Err(FrameError::Cycle);
        }
        self.replace(&self.transform_to(target));
        Ok(())
    }
}

impl Framed for Frame {
    fn frame(&self) -> Frame {
        self.parent()
    }
}

/// Handles compare by identity.
impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Frame {}

impl Hash for Frame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.node).hash(state);
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.read();
        f.debug_struct("Frame")
            .field("id", &Arc::as_ptr(&self.node))
            .field("root", &node.parent.is_none())
            .field("unit", &node.unit)
            .field("offset", &node.offset)
            .finish()
    }
}

/// Iterator returned by [`Frame::ancestors`].
pub struct Ancestors {
    next: Option<Frame>,
}

impl Iterator for Ancestors {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let current = self.next.take()?;
        if !current.is_root() {
            self.next = Some(current.parent());
        }
        Some(current)
    }
}
