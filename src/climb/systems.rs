//! Climb domain: systems that drive the climber and mirror it into physics.

use std::f32::consts::FRAC_PI_2;

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::climb::events::ClimbStateChanged;
use crate::climb::fsm::ClimbState;
use crate::climb::player::{BodyPose, ClimbContext, Climber};
use crate::content::ClimbConfig;
use crate::input::ControlFrame;
use crate::movement::{Facing, LimbBody, Locomotion, Player, player_collision_layers};
use crate::ui::{Prompt, Score, edit_prompt};

/// Eye height above the body centre; the binding probe starts here.
const VIEW_OFFSET: Vec2 = Vec2::new(0.0, 0.6);

/// Pull dangling limb positions back from their physics bodies.
pub(crate) fn read_back_limb_bodies(
    mut climbers: Query<&mut Climber>,
    bodies: Query<(&LimbBody, &Transform)>,
) {
    let Ok(mut climber) = climbers.single_mut() else {
        return;
    };
    for (limb_body, transform) in &bodies {
        climber.sync_limb_from_physics(limb_body.index, transform.translation.truncate());
    }
}

pub(crate) fn run_climb_tick(
    time: Res<Time>,
    spatial: SpatialQuery,
    frame: Res<ControlFrame>,
    config: Res<ClimbConfig>,
    mut prompt: ResMut<Prompt>,
    mut score: ResMut<Score>,
    mut player_query: Query<(Entity, &mut Climber, &Transform, &Facing), With<Player>>,
    mut state_events: MessageWriter<ClimbStateChanged>,
) {
    let Ok((entity, mut climber, transform, facing)) = player_query.single_mut() else {
        return;
    };

    let root = transform.translation.truncate();
    let pose = BodyPose {
        root,
        view: root + VIEW_OFFSET,
        forward: facing.direction(),
    };
    let report = edit_prompt(&mut prompt, |prompt| {
        climber.tick(&mut ClimbContext {
            frame: &frame,
            probe: &spatial,
            config: &config,
            prompt,
            score: &mut score,
            pose,
            dt: time.delta_secs(),
        })
    });

    if let Some((limb, control)) = report.bound {
        info!("Bound {} to {}", limb.label(), control);
    }
    if report.binding_started {
        info!("Binding started at ({:.2}, {:.2})", root.x, root.y);
    }
    for grab in &report.grabs {
        debug!(
            "{} grabbed ({:.2}, {:.2}){}",
            grab.limb.label(),
            grab.point.x,
            grab.point.y,
            if grab.climbing_higher { " higher" } else { "" }
        );
    }
    if report.binding_finished {
        info!("All limbs bound");
    }
    for transition in report.transitions {
        state_events.write(ClimbStateChanged {
            entity,
            from: transition.from,
            to: transition.to,
        });
    }
}

/// Switch the body between walking, wall-held and falling physics.
pub(crate) fn apply_climb_transitions(
    mut commands: Commands,
    mut transitions: MessageReader<ClimbStateChanged>,
    mut bodies: Query<
        (
            &RigidBody,
            &mut CollisionLayers,
            &mut LinearVelocity,
            &mut Transform,
            &mut Locomotion,
        ),
        With<Player>,
    >,
) {
    for change in transitions.read() {
        let Ok((body, mut layers, mut velocity, mut transform, mut locomotion)) =
            bodies.get_mut(change.entity)
        else {
            continue;
        };

        info!("Climb state {:?} -> {:?}", change.from, change.to);
        match change.to {
            ClimbState::Climbing => {
                if *body != RigidBody::Kinematic {
                    commands.entity(change.entity).insert(RigidBody::Kinematic);
                }
                *layers = CollisionLayers::NONE;
                velocity.0 = Vec2::ZERO;
                locomotion.enabled = false;
            }
            ClimbState::Falling => {
                if *body != RigidBody::Dynamic {
                    commands.entity(change.entity).insert(RigidBody::Dynamic);
                }
                *layers = player_collision_layers();
                // Topple away from the wall
                transform.rotation = Quat::from_rotation_z(-FRAC_PI_2);
            }
            ClimbState::Grounded => {
                transform.rotation = Quat::IDENTITY;
                locomotion.enabled = true;
            }
        }
    }
}

/// While climbing, the body hangs where its anchored limbs put it.
pub(crate) fn follow_anchored_limbs(mut query: Query<(&Climber, &mut Transform), With<Player>>) {
    for (climber, mut transform) in &mut query {
        if climber.state() != ClimbState::Climbing {
            continue;
        }
        let Some(root) = climber.anchor_root() else {
            continue;
        };
        transform.translation = root.extend(transform.translation.z);
    }
}

/// Pinned limbs drive their bodies; free limbs are simulated but kept on a leash.
pub(crate) fn sync_limb_bodies(
    mut commands: Commands,
    config: Res<ClimbConfig>,
    climbers: Query<(&Climber, &Transform), Without<LimbBody>>,
    mut bodies: Query<
        (
            Entity,
            &LimbBody,
            &RigidBody,
            &mut Transform,
            &mut LinearVelocity,
        ),
        Without<Climber>,
    >,
) {
    let Ok((climber, body_transform)) = climbers.single() else {
        return;
    };
    let root = body_transform.translation.truncate();

    for (entity, limb_body, rigid_body, mut transform, mut velocity) in &mut bodies {
        let Some(limb) = climber.limb(limb_body.index) else {
            continue;
        };
        let z = transform.translation.z;

        if limb.is_pinned() {
            if *rigid_body != RigidBody::Kinematic {
                commands.entity(entity).insert(RigidBody::Kinematic);
            }
            velocity.0 = Vec2::ZERO;
            transform.translation = limb.position().extend(z);
            continue;
        }

        if *rigid_body != RigidBody::Dynamic {
            commands.entity(entity).insert(RigidBody::Dynamic);
        }
        let rest = root + limb.name().rest_offset();
        let offset = transform.translation.truncate() - rest;
        if offset.length() > config.limb_leash {
            transform.translation = (rest + offset.clamp_length_max(config.limb_leash)).extend(z);
            velocity.0 = Vec2::ZERO;
        }
    }
}
