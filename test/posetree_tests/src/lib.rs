//! Property tests on the public API: frame-tree composition is checked against nalgebra and
//! against itself (round trips, inverses, live mutation).
pub mod reference;

#[cfg(test)]
use approx::{assert_abs_diff_eq, assert_relative_eq};
#[cfg(test)]
use nalgebra as na;
#[cfg(test)]
use posetree::*;
#[cfg(test)]
use posetree_test_utils::{get_test_motions, get_test_rotations, RandomTree, MIXED_UNITS};
#[cfg(test)]
use std::f64::consts::{FRAC_PI_2, PI};
#[cfg(test)]
use uom::si::{angle::radian, f64::Angle, length::meter};

#[cfg(test)]
fn radians(value: f64) -> Angle {
    Angle::new::<radian>(value)
}

#[cfg(test)]
fn meters(frame: &Frame, x: f64, y: f64, z: f64) -> Position {
    Position::new(frame, LengthUnit::Meter, x, y, z)
}

#[test]
fn test_hamilton_product_matches_nalgebra() {
    for a in get_test_rotations() {
        for b in get_test_rotations() {
            let expected: na::Quaternion<f64> =
                na::Quaternion::<f64>::from(a) * na::Quaternion::<f64>::from(b);
            assert_abs_diff_eq!(Quaternion::from(expected), a * b, epsilon = 1.0e-15);
        }
    }
}

#[test]
fn test_rotate_matches_nalgebra() {
    let v = na::Vector3::new(0.813, -0.556, 0.77);
    for r in get_test_rotations() {
        let unit = na::UnitQuaternion::new_normalize(na::Quaternion::from(r));
        assert_abs_diff_eq!(
            Quaternion::from(unit * v),
            Quaternion::from(v).rotate_by(&r),
            epsilon = 1.0e-14
        );
    }
}

#[test]
fn test_yaw_pitch_roll_matches_nalgebra() {
    let (yaw, pitch, roll) = (0.7, -0.3, 2.2);
    let expected = na::UnitQuaternion::from_euler_angles(roll, pitch, yaw);
    let q = Quaternion::from_yaw_pitch_roll(yaw, pitch, roll);
    assert_abs_diff_eq!(Quaternion::from(expected), q, epsilon = 1.0e-15);
    let (y, p, r) = q.as_yaw_pitch_roll();
    let (r_na, p_na, y_na) = expected.euler_angles();
    assert_abs_diff_eq!(y_na, y, epsilon = 1.0e-12);
    assert_abs_diff_eq!(p_na, p, epsilon = 1.0e-12);
    assert_abs_diff_eq!(r_na, r, epsilon = 1.0e-12);
}

#[test]
fn test_dual_quaternion_composition_matches_isometries() {
    for p in get_test_motions() {
        for q in get_test_motions() {
            let expected = na::Isometry3::from(p) * na::Isometry3::from(q);
            let actual = na::Isometry3::from(p * q);
            assert_abs_diff_eq!(
                expected.translation.vector,
                actual.translation.vector,
                epsilon = 1.0e-12
            );
            assert_abs_diff_eq!(
                expected.rotation.to_rotation_matrix(),
                actual.rotation.to_rotation_matrix(),
                epsilon = 1.0e-12
            );
        }
    }
}

#[test]
fn test_dual_quaternion_associativity() {
    let motions = get_test_motions();
    for p in motions.iter().step_by(3) {
        for q in motions.iter().step_by(2) {
            for r in &motions {
                assert_abs_diff_eq!((*p * *q) * *r, *p * (*q * *r), epsilon = 1.0e-10);
            }
        }
    }
}

#[test]
fn test_dual_quaternion_inverse_law() {
    for d in get_test_motions() {
        let product = d * d.inverse();
        assert!(product.real.is_unit(DEFAULT_EPSILON));
        assert_abs_diff_eq!(Quaternion::identity(), product.real, epsilon = 1.0e-10);
        assert!(product.dual.is_zero(DEFAULT_EPSILON));
    }
}

#[test]
fn test_rotation_composition() {
    let root = Frame::root();
    let quarter = Quaternion::about(Axis::Z, FRAC_PI_2);
    let half = Quaternion::about(Axis::Z, PI);
    assert_abs_diff_eq!(half, quarter * quarter, epsilon = 1.0e-10);

    let quarter_dq = DualQuaternion::from_rotation(quarter);
    assert_abs_diff_eq!(
        DualQuaternion::from_rotation(half),
        quarter_dq * quarter_dq,
        epsilon = 1.0e-10
    );

    let mut o = Orientation::about(&root, Axis::Z, radians(FRAC_PI_2));
    o.rotated(&Orientation::about(&root, Axis::Z, radians(FRAC_PI_2)));
    assert_abs_diff_eq!(half, o.quaternion(), epsilon = 1.0e-10);
}

#[test]
fn test_frame_tree_matches_nalgebra() {
    let tree = RandomTree::new(11, 30, &[LengthUnit::Meter]);
    let frames = tree.all_frames();
    for a in &frames {
        for b in frames.iter().step_by(4) {
            let expected = reference::relative_isometry(a, b);
            let pose = a.transform_to(b);
            assert_eq!(*b, pose.parent());
            let actual = reference::offset_isometry(&pose.offset(), pose.unit());
            assert_abs_diff_eq!(
                expected.translation.vector,
                actual.translation.vector,
                epsilon = 1.0e-9
            );
            assert_abs_diff_eq!(
                expected.rotation.to_rotation_matrix(),
                actual.rotation.to_rotation_matrix(),
                epsilon = 1.0e-10
            );
        }
    }
}

#[test]
fn test_transform_by_other_frame_matches_nalgebra() {
    let root = Frame::root();
    let mid = Frame::from_pose(
        &meters(&root, 2.0, -1.0, 0.5),
        &Orientation::from_yaw_pitch_roll(&root, radians(0.7), radians(-0.3), radians(0.2)),
    );
    let f = Frame::from_pose(
        &meters(&mid, 0.4, 1.1, -0.6),
        &Orientation::about(&mid, Axis::Y, radians(-0.9)),
    );
    // The motion is described by a frame on another branch, neither `mid` nor the root.
    let side = Frame::from_pose(
        &meters(&root, -3.0, 0.0, 1.0),
        &Orientation::about(&root, Axis::X, radians(1.2)),
    );
    let other = Frame::from_pose(
        &Position::new(&side, LengthUnit::Centimeter, 30.0, -50.0, 10.0),
        &Orientation::about(&side, Axis::Z, radians(0.4)),
    );

    let moved = f.transform_by(&other);
    assert_eq!(mid, moved.parent());

    let motion = reference::relative_isometry(&other, &mid);
    let expected = motion * reference::offset_isometry(&f.offset(), f.unit());
    let actual = reference::offset_isometry(&moved.offset(), moved.unit());
    assert_abs_diff_eq!(
        expected.translation.vector,
        actual.translation.vector,
        epsilon = 1.0e-10
    );
    assert_abs_diff_eq!(
        expected.rotation.to_rotation_matrix(),
        actual.rotation.to_rotation_matrix(),
        epsilon = 1.0e-10
    );

    // In-place, with a child hanging off `f`.
    let child = Frame::from_position(&meters(&f, 0.0, 0.0, 1.0));
    let child_offset = reference::offset_isometry(&child.offset(), child.unit());
    f.transformed_by(&other);
    let expected_child = reference::world_isometry(&mid) * expected * child_offset;
    let actual_child = reference::world_isometry(&child);
    assert_abs_diff_eq!(
        expected_child.translation.vector,
        actual_child.translation.vector,
        epsilon = 1.0e-10
    );
}

#[test]
fn test_round_trip_between_frames() {
    let tree = RandomTree::new(5, 20, &[LengthUnit::Meter]);
    let frames = tree.all_frames();
    for a in &frames {
        let x = meters(a, 0.3, -1.2, 2.5);
        let o = Orientation::from_yaw_pitch_roll(a, radians(0.2), radians(0.1), radians(-1.4));
        for b in &frames {
            let back = x.transform_to(b).transform_to(a);
            assert_eq!(*a, back.frame());
            assert_abs_diff_eq!(x.quaternion(), back.quaternion(), epsilon = 1.0e-10);

            let back = o.transform_to(b).transform_to(a);
            assert_abs_diff_eq!(o.quaternion(), back.quaternion(), epsilon = 1.0e-10);
        }
    }
}

#[test]
fn test_round_trip_with_mixed_units() {
    let tree = RandomTree::new(9, 20, &MIXED_UNITS);
    let frames = tree.all_frames();
    for a in &frames {
        let x = Position::new(a, LengthUnit::Foot, 3.0, 1.0, -2.0);
        for b in &frames {
            let there = x.transform_to(b);
            assert_eq!(LengthUnit::Foot, there.unit());
            let back = there.transform_to(a);
            assert_relative_eq!(
                x.quaternion(),
                back.quaternion(),
                epsilon = 1.0e-6,
                max_relative = 1.0e-9
            );
            // Distances are frame independent.
            let origin = Position::origin(a, LengthUnit::Meter);
            assert_relative_eq!(
                x.distance(&origin).get::<meter>(),
                there.distance(&origin).get::<meter>(),
                epsilon = 1.0e-6,
                max_relative = 1.0e-9
            );
        }
    }
}

#[test]
fn test_mutation_propagation() {
    let root = Frame::root();
    let f1 = Frame::from_position(&meters(&root, 1.0, 0.0, 0.0));
    let f2 = Frame::from_pose_in(
        &meters(&root, 0.0, 3.0, 0.0),
        &Orientation::identity(&root),
        &f1,
    );
    assert_eq!(f1, f2.parent());
    let f2_before = f2.position().transform_to(&root).quaternion();

    f1.translated(&meters(&root, -2.0, 0.0, 0.0));

    assert_abs_diff_eq!(
        Quaternion::pure(-1.0, 0.0, 0.0),
        f1.position().transform_to(&root).quaternion(),
        epsilon = 1.0e-10
    );
    let f2_after = f2.position().transform_to(&root).quaternion();
    assert_abs_diff_eq!(
        Quaternion::pure(-2.0, 0.0, 0.0),
        f2_after - f2_before,
        epsilon = 1.0e-10
    );
}

#[test]
fn test_shared_reference_aliasing() {
    let root = Frame::root();
    let f1 = Frame::from_position(&meters(&root, 1.0, 0.0, 0.0));
    let f2 = f1.clone();
    f2.rotated(&Orientation::about(&root, Axis::Z, radians(FRAC_PI_2)));
    f2.translated(&meters(&root, 0.0, 0.0, 1.0));
    assert_eq!(f1.offset(), f2.offset());
    assert_abs_diff_eq!(
        Quaternion::pure(0.0, 1.0, 1.0),
        f1.position().quaternion(),
        epsilon = 1.0e-10
    );
}

#[test]
fn test_degenerate_constructions() {
    let root = Frame::root();
    assert_eq!(
        Err(FrameError::ZeroVector),
        Direction::new(&root, 0.0, 0.0, 0.0)
    );
    let a = Direction::new(&root, 1.0, 2.0, 3.0).unwrap();
    let b = Direction::new(&root, 2.0, 4.0, 6.0).unwrap();
    assert_eq!(
        Err(FrameError::ParallelDirections),
        Direction::perpendicular(&a, &b)
    );
    assert_eq!(
        Err(FrameError::ZeroVector),
        Position::origin(&root, LengthUnit::Meter).direction()
    );
    // Absence propagates to dependent constructions.
    let axis = Position::origin(&root, LengthUnit::Meter)
        .direction()
        .map(|d| Orientation::from_angle_direction(radians(1.0), &d));
    assert!(axis.is_err());
}

#[test]
fn test_common_ancestor() {
    let root = Frame::root();
    let f1 = Frame::from_position(&meters(&root, 1.0, 0.0, 0.0));
    let f2 = Frame::from_position(&meters(&f1, 0.0, 1.0, 0.0));
    let f3 = Frame::from_position(&meters(&f1, 0.0, 0.0, 1.0));
    assert_eq!(f1, f2.common(&f3));
    assert_eq!(f1, f3.common(&f2));
    let p = meters(&f2, 1.0, 1.0, 1.0);
    let q = meters(&f3, 1.0, 1.0, 1.0);
    assert_eq!(f1, p.common(&q));
    assert_eq!(root, p.base());
}

#[test]
fn test_transformed_to_reparents_subtree() {
    let tree = RandomTree::new(21, 12, &[LengthUnit::Meter]);
    let root = Frame::root();
    let frames = tree.all_frames();
    let world_before: Vec<_> = frames.iter().map(reference::world_isometry).collect();

    let mover = &tree.frames[6];
    let target = tree
        .frames
        .iter()
        .find(|f| *f != mover && !f.has_ancestor(mover))
        .cloned()
        .unwrap_or_else(|| root.clone());
    mover.transformed_to(&target).unwrap();
    assert_eq!(target, mover.parent());

    // Re-parenting does not move anything physically.
    for (frame, before) in frames.iter().zip(world_before) {
        let after = reference::world_isometry(frame);
        assert_abs_diff_eq!(
            before.translation.vector,
            after.translation.vector,
            epsilon = 1.0e-9
        );
    }
}

#[test]
fn test_nalgebra_accessors() {
    let root = Frame::root();
    let frame = Frame::from_pose(
        &meters(&root, 1.0, 2.0, 3.0),
        &Orientation::about(&root, Axis::Y, radians(0.4)),
    );
    let p = meters(&frame, 0.5, 0.0, 0.0);
    let expected = na::Isometry3::from(frame.offset()) * na::Point3::new(0.5, 0.0, 0.0);
    assert_abs_diff_eq!(
        expected.coords,
        p.transform_to(&root).to_vector(),
        epsilon = 1.0e-12
    );
    let d = Direction::axis(&frame, Axis::Z).transform_to(&root);
    assert_abs_diff_eq!(
        na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), 0.4) * na::Vector3::z(),
        d.to_unit_vector().into_inner(),
        epsilon = 1.0e-12
    );
    assert_abs_diff_eq!(
        0.4,
        frame.orientation().to_unit_quaternion().angle(),
        epsilon = 1.0e-12
    );
}
