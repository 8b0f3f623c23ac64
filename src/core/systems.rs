//! Core domain: camera, static scene and scene reset.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::render::view::screenshot::{Screenshot, save_to_disk};

use crate::climb::Climber;
use crate::content::ClimbConfig;
use crate::core::events::ResetSceneEvent;
use crate::input::{ControlFrame, ControlId, InputActivation, RESET_KEY, SCREENSHOT_KEY};
use crate::movement::{GameLayer, Ground, LimbBody, Player, Wall, spawn_player_rig};
use crate::ui::{Prompt, Score};

/// Where the body centre starts: on the floor, an arm's length from the wall.
pub(crate) const PLAYER_START: Vec2 = Vec2::new(1.5, 0.95);

/// Capture file, named after the game and overwritten on each shot.
pub(crate) const SCREENSHOT_PATH: &str = "hole.png";

const PIXELS_PER_METRE: f32 = 48.0;
const CAMERA_MIN_Y: f32 = 4.0;

const FLOOR_WIDTH: f32 = 40.0;
const FLOOR_DEPTH: f32 = 1.0;
const WALL_FACE_X: f32 = 2.5;
const WALL_THICKNESS: f32 = 1.0;
const WALL_HEIGHT: f32 = 40.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METRE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(PLAYER_START.x, CAMERA_MIN_Y, 0.0),
    ));
}

/// Floor with its top at y = 0 and a wall rising from it on the right.
pub(crate) fn spawn_scene(mut commands: Commands) {
    commands.spawn((
        Ground,
        Name::new("floor"),
        Sprite {
            color: Color::srgb(0.25, 0.22, 0.2),
            custom_size: Some(Vec2::new(FLOOR_WIDTH, FLOOR_DEPTH)),
            ..default()
        },
        Transform::from_xyz(0.0, -FLOOR_DEPTH / 2.0, -1.0),
        RigidBody::Static,
        Collider::rectangle(FLOOR_WIDTH, FLOOR_DEPTH),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Limb]),
    ));

    commands.spawn((
        Wall,
        Name::new("wall"),
        Sprite {
            color: Color::srgb(0.45, 0.42, 0.4),
            custom_size: Some(Vec2::new(WALL_THICKNESS, WALL_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(
            WALL_FACE_X + WALL_THICKNESS / 2.0,
            WALL_HEIGHT / 2.0,
            -1.0,
        ),
        RigidBody::Static,
        Collider::rectangle(WALL_THICKNESS, WALL_HEIGHT),
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Limb]),
    ));
}

pub(crate) fn spawn_player(mut commands: Commands, config: Res<ClimbConfig>) {
    spawn_player_rig(&mut commands, &config, PLAYER_START);
}

pub(crate) fn request_reset(
    frame: Res<ControlFrame>,
    mut reset_events: MessageWriter<ResetSceneEvent>,
) {
    if frame.just_pressed(ControlId::Key(RESET_KEY)) {
        reset_events.write(ResetSceneEvent);
    }
}

pub(crate) fn take_screenshot(mut commands: Commands, frame: Res<ControlFrame>) {
    if !frame.just_pressed(ControlId::Key(SCREENSHOT_KEY)) {
        return;
    }
    info!("Saving screenshot to {}", SCREENSHOT_PATH);
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(SCREENSHOT_PATH));
}

/// Recreate the climber, prompt, score and input delay from scratch.
pub(crate) fn handle_reset(
    mut commands: Commands,
    mut reset_events: MessageReader<ResetSceneEvent>,
    config: Res<ClimbConfig>,
    mut players: Query<(Entity, &mut Climber), With<Player>>,
    limb_bodies: Query<Entity, With<LimbBody>>,
    mut prompt: ResMut<Prompt>,
    mut score: ResMut<Score>,
    mut activation: ResMut<InputActivation>,
) {
    if reset_events.is_empty() {
        return;
    }
    reset_events.clear();

    info!("Resetting scene");
    for (entity, mut climber) in &mut players {
        // Never leave a capture running against a despawned climber
        climber.cancel_binding();
        commands.entity(entity).despawn();
    }
    for entity in &limb_bodies {
        commands.entity(entity).despawn();
    }

    *prompt = Prompt::default();
    *score = Score::default();
    activation.rearm(config.input_activation_secs);

    spawn_player_rig(&mut commands, &config, PLAYER_START);
}

/// Keep the climber in view as it goes up the wall.
pub(crate) fn track_player_camera(
    players: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    for mut camera in &mut cameras {
        camera.translation.y = player.translation.y.max(CAMERA_MIN_Y);
    }
}
