//! UI domain: height and hang-time score.

use bevy::prelude::*;

use crate::limbs::LIMB_COUNT;

/// Score = whole seconds spent with every limb in contact + tenths of the
/// best height. The shown value only refreshes on a new best height or when
/// the hang time crosses a whole second.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct Score {
    max_height: f32,
    contact_secs: f32,
    full_contact: bool,
    displayed: u32,
}

impl Score {
    /// Keep the running maximum height. Returns true on a new maximum.
    pub fn record_height(&mut self, height: f32) -> bool {
        if height <= self.max_height {
            return false;
        }
        self.max_height = height;
        self.refresh();
        true
    }

    /// Note this frame's contact count; hang time only accrues with every limb on.
    pub fn record_contacts(&mut self, count: usize) {
        self.full_contact = count >= LIMB_COUNT;
    }

    /// Advance hang time. Returns true when the shown value was refreshed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.full_contact {
            return false;
        }
        let before = self.contact_secs.floor();
        self.contact_secs += dt;
        if self.contact_secs.floor() > before {
            self.refresh();
            return true;
        }
        false
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    pub fn contact_secs(&self) -> f32 {
        self.contact_secs
    }

    /// Current score, whether or not it has been shown yet.
    pub fn value(&self) -> u32 {
        self.contact_secs.floor() as u32 + (self.max_height * 10.0).floor() as u32
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    fn refresh(&mut self) {
        self.displayed = self.value();
    }
}

/// Marker for the score text
#[derive(Component)]
pub struct ScoreText;

pub(crate) fn spawn_score_ui(mut commands: Commands) {
    commands.spawn((
        ScoreText,
        Text::new("0"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.85, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
    ));
}

pub(crate) fn tick_score(time: Res<Time>, mut score: ResMut<Score>) {
    let dt = time.delta_secs();
    if score.tick(dt) {
        debug!("Hang time {:.0}s, score {}", score.contact_secs(), score.displayed());
    }
}

pub(crate) fn update_score_ui(score: Res<Score>, mut query: Query<&mut Text, With<ScoreText>>) {
    let wanted = score.displayed().to_string();
    for mut text in &mut query {
        if text.as_str() != wanted {
            **text = wanted.clone();
        }
    }
}
