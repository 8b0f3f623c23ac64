//! Limbs domain: interactive capture of a control for one limb.

use std::collections::HashSet;

use crate::input::{ControlFrame, ControlId, qualifies};
use crate::limbs::LimbName;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    control: ControlId,
    held_secs: f32,
}

/// An open rebind for one limb. Dropping it cancels the capture; the limb is
/// only touched once a control has been confirmed.
#[derive(Debug, Clone)]
pub struct BindingSession {
    target: LimbName,
    index: usize,
    excluded: HashSet<ControlId>,
    min_hold_secs: f32,
    candidate: Option<Candidate>,
}

impl BindingSession {
    pub fn new(
        target: LimbName,
        index: usize,
        excluded: HashSet<ControlId>,
        min_hold_secs: f32,
    ) -> Self {
        Self {
            target,
            index,
            excluded,
            min_hold_secs,
            candidate: None,
        }
    }

    pub fn target(&self) -> LimbName {
        self.target
    }

    /// Position of the target limb in binding order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn excluded(&self) -> &HashSet<ControlId> {
        &self.excluded
    }

    /// The control currently being held towards confirmation, if any.
    pub fn candidate(&self) -> Option<ControlId> {
        self.candidate.map(|c| c.control)
    }

    pub fn accepts(&self, control: ControlId) -> bool {
        qualifies(control) && !self.excluded.contains(&control)
    }

    /// Advance by one frame. Returns the control once it has been held for the
    /// minimum time; letting go restarts the wait.
    pub fn advance(&mut self, frame: &ControlFrame, dt: f32) -> Option<ControlId> {
        let still_held = self
            .candidate
            .is_some_and(|c| frame.is_pressed(c.control));
        match &mut self.candidate {
            Some(candidate) if still_held => candidate.held_secs += dt,
            _ => self.candidate = None,
        }

        if self.candidate.is_none() {
            // Prefer a fresh press over something that was already down
            let fresh = frame.just_pressed_controls().find(|c| self.accepts(*c));
            let next = fresh.or_else(|| frame.pressed().find(|c| self.accepts(*c)));
            self.candidate = next.map(|control| Candidate {
                control,
                held_secs: 0.0,
            });
        }

        self.candidate
            .filter(|c| c.held_secs >= self.min_hold_secs)
            .map(|c| c.control)
    }
}
