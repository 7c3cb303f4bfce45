//! Copyright 2024 Gareth Cross
//!
//! Trees of rigid coordinate frames. Each [`Frame`] stores its pose relative to a parent as a
//! [`DualQuaternion`]; poses relative to any other frame are composed on demand by walking the
//! tree. [`Position`], [`Orientation`] and [`Direction`] are values tagged with the frame they
//! are expressed in, and convert between frames through the same machinery.
//!
//! ```
//! use posetree::{Frame, LengthUnit, Position, Transformable};
//!
//! let root = Frame::root();
//! let arm = Frame::from_position(&Position::new(&root, LengthUnit::Meter, 1.0, 0.0, 0.0));
//! let tip = Position::new(&arm, LengthUnit::Meter, 0.0, 2.0, 0.0);
//!
//! arm.translated(&Position::new(&root, LengthUnit::Meter, -2.0, 0.0, 0.0));
//! assert_eq!([-1.0, 2.0, 0.0], tip.transform_to(&root).coordinates());
//! ```
pub mod axis;
pub mod direction;
pub mod dual_quaternion;
pub mod error;
pub mod frame;
pub mod orientation;
pub mod position;
pub mod quaternion;
pub mod traits;
pub mod units;

pub use axis::Axis;
pub use direction::Direction;
pub use dual_quaternion::{Conjugate, DualQuaternion};
pub use error::FrameError;
pub use frame::Frame;
pub use orientation::Orientation;
pub use position::Position;
pub use quaternion::{Quaternion, DEFAULT_EPSILON};
pub use traits::{Composable, Framed, Invertible, Rotatable, Transformable, Translatable};
pub use units::LengthUnit;
