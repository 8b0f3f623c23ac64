//! Climb domain: directional wall and floor probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Casts a ray against one collision layer and reports the nearest point hit
/// within range. Farther hits are never considered.
pub trait WallProbe {
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32, layer: GameLayer)
    -> Option<Vec2>;
}

impl WallProbe for SpatialQuery<'_, '_> {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        layer: GameLayer,
    ) -> Option<Vec2> {
        let filter = SpatialQueryFilter::from_mask(layer);
        self.cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| origin + *direction * hit.distance)
    }
}
