//! Climb domain: the climber component and its per-frame tick.

use bevy::prelude::*;

use crate::climb::fsm::{ClimbState, ClimbStateMachine, ClimbTransition};
use crate::climb::probe::WallProbe;
use crate::climb::sequencer::{Advance, BindingPhase, BindingSequencer};
use crate::content::ClimbConfig;
use crate::input::{ControlFrame, ControlId, START_BINDING_KEY};
use crate::limbs::{LIMB_COUNT, Limb, LimbName};
use crate::movement::GameLayer;
use crate::ui::{Prompt, Score};

/// Where the body is this frame and which way it faces.
#[derive(Debug, Clone, Copy)]
pub struct BodyPose {
    pub root: Vec2,
    pub view: Vec2,
    pub forward: Dir2,
}

/// Everything one tick reads from or reports to outside the climber.
pub struct ClimbContext<'a> {
    pub frame: &'a ControlFrame,
    pub probe: &'a dyn WallProbe,
    pub config: &'a ClimbConfig,
    pub prompt: &'a mut Prompt,
    pub score: &'a mut Score,
    pub pose: BodyPose,
    pub dt: f32,
}

/// A limb landing on a wall point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub limb: LimbName,
    pub point: Vec2,
    /// Reached from the wall rather than from the ground.
    pub climbing_higher: bool,
}

/// What happened during one tick.
#[derive(Debug, Default)]
pub struct TickReport {
    pub transitions: Vec<ClimbTransition>,
    pub bound: Option<(LimbName, ControlId)>,
    pub grabs: Vec<Grab>,
    pub binding_started: bool,
    pub binding_finished: bool,
}

/// The four-limbed climber: limbs in binding order, the binding sequencer and
/// the climb state machine.
#[derive(Component, Debug)]
pub struct Climber {
    limbs: [Limb; LIMB_COUNT],
    sequencer: BindingSequencer,
    fsm: ClimbStateMachine,
}

impl Climber {
    pub fn new(root: Vec2, fall_tolerance: usize) -> Self {
        Self {
            limbs: LimbName::ALL.map(|name| Limb::new(name, root + name.rest_offset())),
            sequencer: BindingSequencer::default(),
            fsm: ClimbStateMachine::new(LIMB_COUNT, fall_tolerance),
        }
    }

    pub fn limbs(&self) -> &[Limb; LIMB_COUNT] {
        &self.limbs
    }

    pub fn limb(&self, index: usize) -> Option<&Limb> {
        self.limbs.get(index)
    }

    pub fn state(&self) -> ClimbState {
        self.fsm.state()
    }

    pub fn contact_count(&self) -> usize {
        self.fsm.contact_count()
    }

    pub fn binding_phase(&self) -> BindingPhase {
        self.sequencer.phase()
    }

    pub fn sequencer(&self) -> &BindingSequencer {
        &self.sequencer
    }

    /// Feed back the simulated position of a dangling limb.
    pub fn sync_limb_from_physics(&mut self, index: usize, position: Vec2) {
        if let Some(limb) = self.limbs.get_mut(index) {
            limb.sync_from_physics(position);
        }
    }

    /// Body position implied by the anchored limbs, if any hold the wall.
    pub fn anchor_root(&self) -> Option<Vec2> {
        let (sum, count) = self
            .limbs
            .iter()
            .filter(|limb| limb.is_anchored())
            .fold((Vec2::ZERO, 0), |(sum, count), limb| {
                (sum + limb.position() - limb.name().rest_offset(), count + 1)
            });
        (count > 0).then(|| sum / count as f32)
    }

    /// Dispose of any capture in flight, e.g. before the scene is torn down.
    pub fn cancel_binding(&mut self) {
        self.sequencer.cancel();
    }

    /// Run one frame of binding and climbing.
    pub fn tick(&mut self, ctx: &mut ClimbContext) -> TickReport {
        let mut report = TickReport::default();
        let config = ctx.config;
        let root = ctx.pose.root;

        // A capture confirmed last tick takes effect now
        if let Some((index, control)) = self.sequencer.take_completed() {
            let limb = &mut self.limbs[index];
            limb.bind_control(control);
            limb.snap_to(root + limb.name().rest_offset());
            report.bound = Some((limb.name(), control));
        }

        for limb in &mut self.limbs {
            limb.poll(ctx.frame);
        }

        // 1. pinning and contacts
        let requires_anchor = config.advance_gate.requires_anchor();
        let contacts = if self.fsm.is_falling() {
            0
        } else {
            for limb in &mut self.limbs {
                limb.update_pinned();
            }
            self.limbs
                .iter()
                .filter(|limb| limb.is_attached(requires_anchor))
                .count()
        };
        self.fsm.record_contacts(contacts);
        ctx.score.record_contacts(self.fsm.contact_count());

        // 2. every limb attached
        if let Some(transition) = self.fsm.check_attach() {
            info!("All {} limbs attached; climbing", LIMB_COUNT);
            ctx.prompt.hide();
            report.transitions.push(transition);
        }

        // 3. too many limbs let go
        if let Some(transition) = self.fsm.check_detach() {
            info!(
                "Lost grip with {} of {} limbs attached; falling",
                self.fsm.contact_count(),
                LIMB_COUNT
            );
            for limb in &mut self.limbs {
                limb.release_anchor();
            }
            report.transitions.push(transition);
        }

        // 4. landing
        if self.fsm.is_falling() {
            let floor_hit = ctx
                .probe
                .cast(root, Dir2::NEG_Y, config.floor_probe_range, GameLayer::Ground)
                .is_some();
            if let Some(transition) = self.fsm.check_landing(floor_hit) {
                info!("Landed");
                report.transitions.push(transition);
            }
        }

        // 5. fresh presses grab, or reach higher once off the ground
        let grounded = self.fsm.state() == ClimbState::Grounded;
        for limb in &mut self.limbs {
            if !limb.is_just_pressed() {
                continue;
            }
            let Some(hit) = ctx.probe.cast(
                limb.position(),
                ctx.pose.forward,
                config.limb_probe_range,
                GameLayer::Wall,
            ) else {
                debug!("{} grabbed at air", limb.name().label());
                continue;
            };

            let point = if grounded {
                hit
            } else {
                hit + Vec2::Y * config.climb_step
            };
            limb.anchor(point);
            ctx.score.record_height(point.y.max(0.0));
            report.grabs.push(Grab {
                limb: limb.name(),
                point,
                climbing_higher: !grounded,
            });
        }

        // A grounded body walking off lets go of holds beyond a leashed limb's reach
        let reach = config.limb_probe_range + config.limb_leash;
        for limb in &mut self.limbs {
            let rest = root + limb.name().rest_offset();
            if grounded && limb.is_anchored() && limb.target().distance(rest) > reach {
                debug!("{} let go of an out-of-reach hold", limb.name().label());
                limb.release_anchor();
            }
        }

        // Pinned limbs without a hold ride along with the body
        for limb in &mut self.limbs {
            if !limb.is_pinned() {
                continue;
            }
            if !limb.is_anchored() {
                limb.move_to(root + limb.name().rest_offset());
            }
            limb.step_towards_target(config.limb_follow_rate, ctx.dt);
        }

        match self
            .sequencer
            .try_advance(&self.limbs, config.advance_gate, config.capture_hold_secs)
        {
            Some(Advance::Next(index)) => {
                ctx.prompt.show(self.limbs[index].name().prompt_text());
            }
            Some(Advance::Finished) => {
                report.binding_finished = true;
            }
            None => {}
        }

        let start_pressed = ctx.frame.just_pressed(ControlId::Key(START_BINDING_KEY));
        if start_pressed {
            let probe = ctx.probe;
            let pose = ctx.pose;
            let admitted = self.sequencer.try_request(self.fsm.state(), || {
                probe
                    .cast(pose.view, pose.forward, config.bind_start_range, GameLayer::Wall)
                    .is_some()
            });
            if admitted {
                if let Some(index) = self
                    .sequencer
                    .begin(&self.limbs, config.capture_hold_secs)
                {
                    ctx.prompt.show(self.limbs[index].name().prompt_text());
                    report.binding_started = true;
                }
            }
        }

        self.sequencer.capture(ctx.frame, ctx.dt);

        report
    }
}
