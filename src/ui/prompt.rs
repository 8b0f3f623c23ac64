//! UI domain: the instruction prompt shown while binding limbs.

use bevy::prelude::*;

/// Instruction text for the player. Hidden when `None`.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct Prompt {
    text: Option<String>,
}

impl Prompt {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Hide the prompt. Hiding twice is a no-op.
    pub fn hide(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }
}

/// Marker for the prompt text node
#[derive(Component)]
pub struct PromptText;

/// Edit the prompt without tripping change detection unless the text moves.
pub fn edit_prompt<R>(prompt: &mut ResMut<Prompt>, edit: impl FnOnce(&mut Prompt) -> R) -> R {
    let before = prompt.text.clone();
    let result = edit(prompt.bypass_change_detection());
    if prompt.text != before {
        prompt.set_changed();
    }
    result
}

pub(crate) fn spawn_prompt_ui(mut commands: Commands) {
    // Centered banner near the top of the screen
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(48.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                PromptText,
                Text::new(""),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.9)),
                Visibility::Hidden,
            ));
        });
}

pub(crate) fn update_prompt_ui(
    prompt: Res<Prompt>,
    mut query: Query<(&mut Text, &mut Visibility), With<PromptText>>,
) {
    if !prompt.is_changed() {
        return;
    }

    for (mut text, mut visibility) in &mut query {
        match prompt.text() {
            Some(wanted) => {
                if text.as_str() != wanted {
                    **text = wanted.to_string();
                }
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}
