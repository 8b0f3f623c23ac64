//! Limbs domain: a single extremity, its bound control and its anchor.

use bevy::prelude::*;

use crate::input::{ControlFrame, ControlId};

/// Number of limbs on a climber.
pub const LIMB_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimbName {
    LeftFoot,
    RightFoot,
    LeftHand,
    RightHand,
}

impl LimbName {
    /// All limbs in binding order.
    pub const ALL: [LimbName; LIMB_COUNT] = [
        LimbName::LeftFoot,
        LimbName::RightFoot,
        LimbName::LeftHand,
        LimbName::RightHand,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LimbName::LeftFoot => "left foot",
            LimbName::RightFoot => "right foot",
            LimbName::LeftHand => "left hand",
            LimbName::RightHand => "right hand",
        }
    }

    /// Instruction shown while this limb waits for a control.
    pub fn prompt_text(self) -> &'static str {
        match self {
            LimbName::LeftFoot => "hold z w/ ur left pinky",
            LimbName::RightFoot => "hold the farthest key u can w/ ur thumb",
            LimbName::LeftHand => "hold the farthest key u can w/ ur ring finger",
            LimbName::RightHand => "hold the farthest key u can w/ ur index finger",
        }
    }

    /// Where the limb sits relative to the body centre when not holding anything.
    pub fn rest_offset(self) -> Vec2 {
        match self {
            LimbName::LeftFoot => Vec2::new(0.15, -0.85),
            LimbName::RightFoot => Vec2::new(0.3, -0.7),
            LimbName::LeftHand => Vec2::new(0.2, 0.55),
            LimbName::RightHand => Vec2::new(0.35, 0.7),
        }
    }

    pub fn color(self) -> Color {
        match self {
            LimbName::LeftFoot => Color::srgb(0.35, 0.55, 0.95),
            LimbName::RightFoot => Color::srgb(0.35, 0.85, 0.95),
            LimbName::LeftHand => Color::srgb(0.95, 0.55, 0.35),
            LimbName::RightHand => Color::srgb(0.95, 0.8, 0.35),
        }
    }
}

/// Logical state of one limb. The physical body mirrors this every frame.
#[derive(Debug, Clone)]
pub struct Limb {
    name: LimbName,
    bound_control: Option<ControlId>,
    /// Authoritative while pinned; mirrors the physics body otherwise.
    position: Vec2,
    /// Where `position` eases towards.
    target: Vec2,
    is_pinned: bool,
    has_ever_grabbed: bool,
    anchored: bool,
    pressed: bool,
    was_pressed: bool,
}

impl Limb {
    pub fn new(name: LimbName, position: Vec2) -> Self {
        Self {
            name,
            bound_control: None,
            position,
            target: position,
            is_pinned: true,
            has_ever_grabbed: false,
            anchored: false,
            pressed: false,
            was_pressed: false,
        }
    }

    pub fn name(&self) -> LimbName {
        self.name
    }

    pub fn bound_control(&self) -> Option<ControlId> {
        self.bound_control
    }

    pub fn is_bound(&self) -> bool {
        self.bound_control.is_some()
    }

    /// Assign a captured control. Polling starts with the next `poll`.
    pub fn bind_control(&mut self, control: ControlId) {
        self.bound_control = Some(control);
        self.pressed = false;
        self.was_pressed = false;
    }

    /// Sample the bound control. Edges are relative to this limb's own last
    /// sample, so a control already held when polling starts reads as a press.
    pub fn poll(&mut self, frame: &ControlFrame) {
        self.was_pressed = self.pressed;
        self.pressed = self
            .bound_control
            .is_some_and(|control| frame.is_pressed(control));

        if self.is_just_pressed() {
            self.has_ever_grabbed = true;
        }
        if self.is_just_released() {
            self.anchored = false;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_just_pressed(&self) -> bool {
        self.pressed && !self.was_pressed
    }

    pub fn is_just_released(&self) -> bool {
        !self.pressed && self.was_pressed
    }

    /// The control driving this limb, only while it is actually held.
    pub fn current_control(&self) -> Option<ControlId> {
        self.bound_control.filter(|_| self.pressed)
    }

    pub fn has_ever_grabbed(&self) -> bool {
        self.has_ever_grabbed
    }

    /// Recompute the pinned flag from the grab history and the current press.
    pub fn update_pinned(&mut self) {
        self.is_pinned = !self.has_ever_grabbed || self.pressed;
    }

    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Set the animated target; `position` follows over later frames.
    pub fn move_to(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Set the target and jump there immediately.
    pub fn snap_to(&mut self, target: Vec2) {
        self.target = target;
        self.position = target;
    }

    /// Ease `position` towards `target` with exponential smoothing.
    pub fn step_towards_target(&mut self, rate: f32, dt: f32) {
        let t = 1.0 - (-rate * dt).exp();
        self.position = self.position.lerp(self.target, t);
    }

    /// Hold a wall point.
    pub fn anchor(&mut self, point: Vec2) {
        self.move_to(point);
        self.anchored = true;
    }

    pub fn release_anchor(&mut self) {
        self.anchored = false;
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Whether this limb counts towards the contact total this frame.
    pub fn is_attached(&self, requires_anchor: bool) -> bool {
        self.pressed && (!requires_anchor || self.anchored)
    }

    /// Adopt the position reported by physics. Ignored while pinned.
    pub fn sync_from_physics(&mut self, position: Vec2) {
        if !self.is_pinned {
            self.position = position;
            self.target = position;
        }
    }
}
