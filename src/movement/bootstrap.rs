//! Movement domain: player body and limb body spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::climb::Climber;
use crate::content::ClimbConfig;
use crate::limbs::LimbName;
use crate::movement::{Facing, GameLayer, LimbBody, Locomotion, Player, player_collision_layers};

pub(crate) const BODY_RADIUS: f32 = 0.25;
/// Capsule segment length; the body is this plus two radii tall.
pub(crate) const BODY_LENGTH: f32 = 1.4;
pub(crate) const LIMB_RADIUS: f32 = 0.1;

/// Spawn the climber body at `position` with one physics body per limb.
pub(crate) fn spawn_player_rig(commands: &mut Commands, config: &ClimbConfig, position: Vec2) {
    let climber = Climber::new(position, config.fall_tolerance);
    let limb_positions: Vec<(LimbName, Vec2)> = climber
        .limbs()
        .iter()
        .map(|limb| (limb.name(), limb.position()))
        .collect();

    info!(
        "Spawning climber at ({:.2}, {:.2}) with {} limbs",
        position.x,
        position.y,
        limb_positions.len()
    );

    commands.spawn((
        // Identity & climbing
        (Player, climber, Facing::default(), Locomotion::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(BODY_RADIUS * 2.0, BODY_LENGTH + BODY_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(BODY_RADIUS, BODY_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            player_collision_layers(),
        ),
    ));

    for (index, (name, limb_position)) in limb_positions.into_iter().enumerate() {
        commands.spawn((
            LimbBody { index },
            Name::new(name.label()),
            Sprite {
                color: name.color(),
                custom_size: Some(Vec2::splat(LIMB_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(limb_position.extend(1.0)),
            // Limbs start pinned
            RigidBody::Kinematic,
            Collider::circle(LIMB_RADIUS),
            LinearVelocity::default(),
            CollisionLayers::new(GameLayer::Limb, [GameLayer::Ground, GameLayer::Wall]),
        ));
    }
}
