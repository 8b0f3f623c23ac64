//! Limbs domain: tests for limb polling, pinning and control capture.

use bevy::prelude::*;
use std::collections::HashSet;

use super::{BindingSession, LIMB_COUNT, Limb, LimbName};
use crate::input::{ControlFrame, ControlId, START_BINDING_KEY};

const Z: ControlId = ControlId::Key(KeyCode::KeyZ);
const X: ControlId = ControlId::Key(KeyCode::KeyX);

fn frame_with(pressed: &[ControlId]) -> ControlFrame {
    let mut frame = ControlFrame::default();
    for control in pressed {
        frame.record(*control, false);
    }
    frame
}

fn bound_limb(control: ControlId) -> Limb {
    let mut limb = Limb::new(LimbName::LeftFoot, Vec2::ZERO);
    limb.bind_control(control);
    limb
}

// -----------------------------------------------------------------------------
// LimbName tests
// -----------------------------------------------------------------------------

#[test]
fn test_binding_order() {
    assert_eq!(LimbName::ALL.len(), LIMB_COUNT);
    assert_eq!(
        LimbName::ALL,
        [
            LimbName::LeftFoot,
            LimbName::RightFoot,
            LimbName::LeftHand,
            LimbName::RightHand,
        ]
    );
}

#[test]
fn test_prompt_texts_are_distinct() {
    let texts: HashSet<_> = LimbName::ALL.iter().map(|n| n.prompt_text()).collect();
    assert_eq!(texts.len(), LIMB_COUNT);
    assert_eq!(LimbName::LeftFoot.prompt_text(), "hold z w/ ur left pinky");
}

// -----------------------------------------------------------------------------
// Limb polling tests
// -----------------------------------------------------------------------------

#[test]
fn test_unbound_limb_never_reports_presses() {
    let mut limb = Limb::new(LimbName::RightHand, Vec2::ZERO);
    limb.poll(&frame_with(&[Z]));

    assert!(!limb.is_pressed());
    assert!(!limb.is_just_pressed());
    assert!(!limb.is_just_released());
    assert!(limb.current_control().is_none());
}

#[test]
fn test_press_and_release_edges() {
    let mut limb = bound_limb(Z);

    limb.poll(&frame_with(&[Z]));
    assert!(limb.is_just_pressed());
    assert!(limb.is_pressed());

    limb.poll(&frame_with(&[Z]));
    assert!(!limb.is_just_pressed());
    assert!(limb.is_pressed());

    limb.poll(&frame_with(&[]));
    assert!(limb.is_just_released());
    assert!(!limb.is_pressed());

    limb.poll(&frame_with(&[]));
    assert!(!limb.is_just_released());
}

#[test]
fn test_other_controls_are_ignored() {
    let mut limb = bound_limb(Z);
    limb.poll(&frame_with(&[X]));
    assert!(!limb.is_pressed());
}

#[test]
fn test_current_control_only_while_held() {
    let mut limb = bound_limb(Z);
    assert_eq!(limb.bound_control(), Some(Z));
    assert_eq!(limb.current_control(), None);

    limb.poll(&frame_with(&[Z]));
    assert_eq!(limb.current_control(), Some(Z));

    limb.poll(&frame_with(&[]));
    assert_eq!(limb.current_control(), None);
}

// -----------------------------------------------------------------------------
// Pinned invariant tests
// -----------------------------------------------------------------------------

#[test]
fn test_limb_pinned_until_first_grab() {
    let mut limb = bound_limb(Z);
    limb.poll(&frame_with(&[]));
    limb.update_pinned();
    assert!(!limb.has_ever_grabbed());
    assert!(limb.is_pinned());
}

#[test]
fn test_pinned_follows_press_after_first_grab() {
    let mut limb = bound_limb(Z);

    let frames = [vec![Z], vec![Z], vec![], vec![Z], vec![]];
    for pressed in frames {
        limb.poll(&frame_with(&pressed));
        limb.update_pinned();
        assert_eq!(
            limb.is_pinned(),
            !limb.has_ever_grabbed() || limb.is_pressed()
        );
    }
    assert!(limb.has_ever_grabbed());
    assert!(!limb.is_pinned());
}

// -----------------------------------------------------------------------------
// Position tests
// -----------------------------------------------------------------------------

#[test]
fn test_move_to_eases_towards_target() {
    let mut limb = Limb::new(LimbName::LeftHand, Vec2::ZERO);
    limb.move_to(Vec2::new(1.0, 0.0));
    assert_eq!(limb.position(), Vec2::ZERO);

    limb.step_towards_target(12.0, 1.0 / 60.0);
    let first = limb.position().x;
    assert!(first > 0.0 && first < 1.0);

    for _ in 0..120 {
        limb.step_towards_target(12.0, 1.0 / 60.0);
    }
    assert!((limb.position().x - 1.0).abs() < 1e-3);
}

#[test]
fn test_snap_to_writes_position_immediately() {
    let mut limb = Limb::new(LimbName::LeftHand, Vec2::ZERO);
    limb.snap_to(Vec2::new(2.0, 3.0));
    assert_eq!(limb.position(), Vec2::new(2.0, 3.0));
    assert_eq!(limb.target(), Vec2::new(2.0, 3.0));
}

#[test]
fn test_release_drops_anchor() {
    let mut limb = bound_limb(Z);
    limb.poll(&frame_with(&[Z]));
    limb.anchor(Vec2::new(1.0, 1.0));
    assert!(limb.is_anchored());
    assert!(limb.is_attached(true));

    limb.poll(&frame_with(&[]));
    assert!(!limb.is_anchored());
    assert!(!limb.is_attached(true));
    assert!(!limb.is_attached(false));
}

#[test]
fn test_attached_without_anchor_under_press_rule() {
    let mut limb = bound_limb(Z);
    limb.poll(&frame_with(&[Z]));
    assert!(limb.is_attached(false));
    assert!(!limb.is_attached(true));
}

#[test]
fn test_physics_sync_ignored_while_pinned() {
    let mut limb = bound_limb(Z);
    limb.update_pinned();
    limb.sync_from_physics(Vec2::new(5.0, 5.0));
    assert_eq!(limb.position(), Vec2::ZERO);

    limb.poll(&frame_with(&[Z]));
    limb.poll(&frame_with(&[]));
    limb.update_pinned();
    limb.sync_from_physics(Vec2::new(5.0, 5.0));
    assert_eq!(limb.position(), Vec2::new(5.0, 5.0));
}

// -----------------------------------------------------------------------------
// BindingSession tests
// -----------------------------------------------------------------------------

#[test]
fn test_capture_requires_minimum_hold() {
    let mut session = BindingSession::new(LimbName::LeftFoot, 0, HashSet::new(), 0.1);
    let frame = frame_with(&[Z]);

    assert_eq!(session.advance(&frame, 0.06), None);
    assert_eq!(session.candidate(), Some(Z));
    assert_eq!(session.advance(&frame, 0.06), None);
    assert_eq!(session.advance(&frame, 0.06), Some(Z));
}

#[test]
fn test_capture_restarts_when_released() {
    let mut session = BindingSession::new(LimbName::LeftFoot, 0, HashSet::new(), 0.1);

    session.advance(&frame_with(&[Z]), 0.06);
    session.advance(&frame_with(&[Z]), 0.06);
    assert_eq!(session.advance(&frame_with(&[]), 0.06), None);
    assert_eq!(session.candidate(), None);

    assert_eq!(session.advance(&frame_with(&[Z]), 0.06), None);
    assert_eq!(session.advance(&frame_with(&[Z]), 0.06), None);
}

#[test]
fn test_capture_skips_excluded_controls() {
    let excluded: HashSet<_> = [Z].into_iter().collect();
    let mut session = BindingSession::new(LimbName::RightFoot, 1, excluded, 0.1);
    let frame = frame_with(&[Z, X]);

    session.advance(&frame, 0.06);
    assert_eq!(session.candidate(), Some(X));
    session.advance(&frame, 0.06);
    assert_eq!(session.advance(&frame, 0.06), Some(X));
}

#[test]
fn test_capture_ignores_pointer_and_reserved_controls() {
    let mut session = BindingSession::new(LimbName::LeftFoot, 0, HashSet::new(), 0.1);
    let frame = frame_with(&[
        ControlId::Mouse(MouseButton::Left),
        ControlId::Key(START_BINDING_KEY),
    ]);

    for _ in 0..10 {
        assert_eq!(session.advance(&frame, 0.06), None);
    }
    assert_eq!(session.candidate(), None);
}

#[test]
fn test_capture_prefers_fresh_press() {
    let mut session = BindingSession::new(LimbName::LeftFoot, 0, HashSet::new(), 0.1);
    let mut frame = ControlFrame::default();
    frame.record(Z, false);
    frame.record(X, true);

    session.advance(&frame, 0.06);
    assert_eq!(session.candidate(), Some(X));
}
