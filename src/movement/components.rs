//! Movement domain: components and physics layers for the body and limbs.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floor surfaces
    Ground,
    /// Climbable surfaces
    Wall,
    /// Player body
    Player,
    /// Limb bodies
    Limb,
}

/// Layers the player body collides with while walking or falling.
pub fn player_collision_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall])
}

#[derive(Component, Debug)]
pub struct Player;

/// Physics body standing in for the limb at `index` in binding order.
#[derive(Component, Debug, Clone, Copy)]
pub struct LimbBody {
    pub index: usize,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }
}

/// Whether ground walking is allowed. Off from the moment the climb starts
/// until the body lands again.
#[derive(Component, Debug, Clone, Copy)]
pub struct Locomotion {
    pub enabled: bool,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
