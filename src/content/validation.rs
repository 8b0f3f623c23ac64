//! Validation for semantic constraints on the climbing config.

use super::data::ClimbConfig;
use crate::limbs::LIMB_COUNT;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ConfigValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Config field '{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a strictly positive distance or duration
macro_rules! check_positive {
    ($errors:expr, $config:expr, $field:ident) => {
        if !($config.$field > 0.0) {
            $errors.push(ConfigValidationError {
                field: stringify!($field),
                message: format!("must be positive, got {}", $config.$field),
            });
        }
    };
}

/// Validate the config. Returns an empty list if everything is usable.
pub fn validate_config(config: &ClimbConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, config, bind_start_range);
    check_positive!(errors, config, limb_probe_range);
    check_positive!(errors, config, climb_step);
    check_positive!(errors, config, floor_probe_range);
    check_positive!(errors, config, capture_hold_secs);
    check_positive!(errors, config, limb_follow_rate);
    check_positive!(errors, config, limb_leash);
    check_positive!(errors, config, walk_speed);
    check_positive!(errors, config, walk_accel);

    if config.input_activation_secs < 0.0 {
        errors.push(ConfigValidationError {
            field: "input_activation_secs",
            message: format!("must not be negative, got {}", config.input_activation_secs),
        });
    }

    // At LIMB_COUNT or above the contact count can never drop low enough to fall
    if config.fall_tolerance >= LIMB_COUNT {
        errors.push(ConfigValidationError {
            field: "fall_tolerance",
            message: format!(
                "must be below {} so losing contact can still cause a fall, got {}",
                LIMB_COUNT,
                config.fall_tolerance
            ),
        });
    }

    errors
}
