//! Content domain: data-driven climbing tuning loaded at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{AdvanceGate, ClimbConfig};
pub use loader::load_climb_config;
pub use validation::validate_config;

use bevy::prelude::*;
use std::path::Path;

/// Location of the tuning file relative to the working directory.
pub const CLIMB_CONFIG_PATH: &str = "assets/data/climb.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClimbConfig>()
            .add_systems(PreStartup, load_climb_config_system);
    }
}

/// Load the config file, keeping defaults when it is missing or invalid.
fn load_climb_config_system(mut config: ResMut<ClimbConfig>) {
    let loaded = match load_climb_config(Path::new(CLIMB_CONFIG_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default climb tuning", e);
            return;
        }
    };

    let errors = validate_config(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!(
            "{} config error(s) in {}; using default climb tuning",
            errors.len(),
            CLIMB_CONFIG_PATH
        );
        return;
    }

    info!(
        "Loaded climb config: gate={:?}, fall_tolerance={}, limb_probe_range={}",
        loaded.advance_gate, loaded.fall_tolerance, loaded.limb_probe_range
    );
    *config = loaded;
}
