//! Climb domain: one-at-a-time limb binding sequence.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::climb::ClimbState;
use crate::content::AdvanceGate;
use crate::input::{ControlFrame, ControlId};
use crate::limbs::{BindingSession, Limb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingPhase {
    /// Waiting for the start input while facing a wall.
    #[default]
    Idle,
    /// Admitted; the first limb is about to be bound.
    Requested,
    /// Binding the limb at this index.
    Binding(usize),
    /// Every limb has been bound. Never left.
    Done,
}

/// Outcome of a successful advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Capture opened for the limb at this index.
    Next(usize),
    /// The last limb was confirmed.
    Finished,
}

/// Controls already claimed by the limbs before `index`.
pub fn claimed_controls(limbs: &[Limb], index: usize) -> HashSet<ControlId> {
    limbs[..index.min(limbs.len())]
        .iter()
        .filter_map(Limb::bound_control)
        .collect()
}

/// Walks the limbs through binding in order. Owns the open capture session,
/// if any, and hands confirmed controls over one tick after they are captured.
#[derive(Debug)]
pub struct BindingSequencer {
    phase: BindingPhase,
    start_enabled: bool,
    session: Option<BindingSession>,
    /// Captured during the previous tick, not yet applied to its limb.
    completed: Option<(usize, ControlId)>,
    /// The current limb has its control and waits for its first press.
    awaiting_press: bool,
}

impl Default for BindingSequencer {
    fn default() -> Self {
        Self {
            phase: BindingPhase::Idle,
            start_enabled: true,
            session: None,
            completed: None,
            awaiting_press: false,
        }
    }
}

impl BindingSequencer {
    pub fn phase(&self) -> BindingPhase {
        self.phase
    }

    /// Index of the limb being bound, if any.
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            BindingPhase::Binding(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_start_enabled(&self) -> bool {
        self.start_enabled
    }

    pub fn session(&self) -> Option<&BindingSession> {
        self.session.as_ref()
    }

    /// Idle -> Requested when grounded and the wall is in reach. The wall probe
    /// only runs once every other condition holds.
    pub fn try_request(&mut self, state: ClimbState, wall_in_reach: impl FnOnce() -> bool) -> bool {
        if self.phase != BindingPhase::Idle
            || !self.start_enabled
            || state != ClimbState::Grounded
        {
            return false;
        }
        if !wall_in_reach() {
            debug!("Binding start ignored: no wall in reach");
            return false;
        }

        self.phase = BindingPhase::Requested;
        true
    }

    /// Requested -> Binding(0). Disables the start input for good and opens
    /// the first capture. Returns the index of the limb now being bound.
    pub fn begin(&mut self, limbs: &[Limb], min_hold_secs: f32) -> Option<usize> {
        if self.phase != BindingPhase::Requested || limbs.is_empty() {
            return None;
        }

        self.start_enabled = false;
        self.open_session(limbs, 0, min_hold_secs);
        Some(0)
    }

    /// Feed one frame of input to the open capture.
    pub fn capture(&mut self, frame: &ControlFrame, dt: f32) {
        let Some(session) = &mut self.session else {
            return;
        };
        if let Some(control) = session.advance(frame, dt) {
            let index = session.index();
            debug!("Captured {} for limb #{}", control, index);
            self.completed = Some((index, control));
            self.session = None;
        }
    }

    /// Take the capture confirmed on the previous tick.
    pub fn take_completed(&mut self) -> Option<(usize, ControlId)> {
        let completed = self.completed.take()?;
        self.awaiting_press = true;
        Some(completed)
    }

    /// Binding(i) -> Binding(i + 1) or Done once limb `i` has been pressed
    /// (and, under the grab gate, landed on the wall).
    pub fn try_advance(
        &mut self,
        limbs: &[Limb],
        gate: AdvanceGate,
        min_hold_secs: f32,
    ) -> Option<Advance> {
        let index = self.current_index()?;
        if !self.awaiting_press {
            return None;
        }

        let limb = limbs.get(index)?;
        if !limb.is_just_pressed() {
            return None;
        }
        if gate.requires_anchor() && !limb.is_anchored() {
            debug!("{} pressed without a hold; waiting for a retry", limb.name().label());
            return None;
        }

        self.awaiting_press = false;
        let next = index + 1;
        if next < limbs.len() {
            self.open_session(limbs, next, min_hold_secs);
            Some(Advance::Next(next))
        } else {
            self.phase = BindingPhase::Done;
            Some(Advance::Finished)
        }
    }

    /// Dispose of any open capture without touching the limbs.
    pub fn cancel(&mut self) {
        let had_session = self.session.take().is_some();
        let had_completed = self.completed.take().is_some();
        if had_session || had_completed {
            info!("Binding cancelled");
        }
        self.awaiting_press = false;
        self.start_enabled = false;
        self.phase = BindingPhase::Done;
    }

    fn open_session(&mut self, limbs: &[Limb], index: usize, min_hold_secs: f32) {
        let excluded = claimed_controls(limbs, index);
        let name = limbs[index].name();
        info!(
            "Binding {} (limb #{}, {} control(s) excluded)",
            name.label(),
            index,
            excluded.len()
        );
        self.session = Some(BindingSession::new(name, index, excluded, min_hold_secs));
        self.phase = BindingPhase::Binding(index);
    }
}
