//! Movement domain: ground walking and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::climb::{ClimbState, Climber};
use crate::content::ClimbConfig;
use crate::movement::{Facing, Locomotion, Player, WalkInput};

pub(crate) fn apply_walking(
    time: Res<Time>,
    input: Res<WalkInput>,
    config: Res<ClimbConfig>,
    mut query: Query<(&Locomotion, &Climber, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (locomotion, climber, mut velocity) in &mut query {
        if !locomotion.enabled || climber.state() != ClimbState::Grounded {
            continue;
        }

        // Target is zero when no key is held, so this also brakes
        let target_vx = input.axis * config.walk_speed;
        velocity.x = approach(velocity.x, target_vx, config.walk_accel * dt);
    }
}

/// Move `current` towards `target` by at most `step`.
pub(crate) fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

pub(crate) fn update_facing(
    input: Res<WalkInput>,
    mut query: Query<(&Locomotion, &mut Facing), With<Player>>,
) {
    for (locomotion, mut facing) in &mut query {
        if !locomotion.enabled {
            continue;
        }

        if input.axis > 0.1 {
            *facing = Facing::Right;
        } else if input.axis < -0.1 {
            *facing = Facing::Left;
        }
    }
}
