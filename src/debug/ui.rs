//! Debug domain: overlay node and its text.

use std::fmt::Write;

use bevy::prelude::*;

use crate::climb::Climber;

/// Marker for the debug info overlay
#[derive(Component)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// One line for the body, then one per limb in binding order.
pub(crate) fn describe_climber(climber: &Climber, root: Vec2) -> String {
    let mut text = format!(
        "Pos: ({:.2}, {:.2})\nState: {:?}  Contacts: {}\nBinding: {:?}",
        root.x,
        root.y,
        climber.state(),
        climber.contact_count(),
        climber.binding_phase()
    );

    for limb in climber.limbs() {
        let control = limb
            .bound_control()
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        let grip = if limb.is_anchored() {
            "anchored"
        } else if limb.is_pinned() {
            "pinned"
        } else {
            "loose"
        };
        // Writing into a String cannot fail
        let _ = write!(text, "\n{:<10} {:<12} {}", limb.name().label(), control, grip);
    }
    text
}
