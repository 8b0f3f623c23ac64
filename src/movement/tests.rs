//! Movement domain: tests for facing, locomotion defaults and walking speed.

use bevy::prelude::*;

use super::systems::movement::approach;
use super::{Facing, Locomotion};

#[test]
fn test_facing_direction() {
    assert_eq!(Facing::default(), Facing::Right);
    assert_eq!(Facing::Right.direction(), Dir2::X);
    assert_eq!(Facing::Left.direction(), Dir2::NEG_X);
}

#[test]
fn test_locomotion_enabled_by_default() {
    assert!(Locomotion::default().enabled);
}

#[test]
fn test_approach_accelerates_without_overshoot() {
    assert_eq!(approach(0.0, 3.0, 1.0), 1.0);
    assert_eq!(approach(2.5, 3.0, 1.0), 3.0);
    assert_eq!(approach(0.0, -3.0, 1.0), -1.0);
}

#[test]
fn test_approach_brakes_to_rest() {
    assert_eq!(approach(0.5, 0.0, 1.0), 0.0);
    assert_eq!(approach(-2.0, 0.0, 1.0), -1.0);
    assert_eq!(approach(0.0, 0.0, 1.0), 0.0);
}
