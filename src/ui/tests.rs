//! UI domain: tests for prompt and score bookkeeping.

use bevy::prelude::*;

use super::{Prompt, Score, edit_prompt};

// -----------------------------------------------------------------------------
// Prompt tests
// -----------------------------------------------------------------------------

#[test]
fn test_prompt_starts_hidden() {
    let prompt = Prompt::default();
    assert!(!prompt.is_visible());
    assert_eq!(prompt.text(), None);
}

#[test]
fn test_prompt_show_replaces_text() {
    let mut prompt = Prompt::default();
    prompt.show("first");
    prompt.show("second");
    assert_eq!(prompt.text(), Some("second"));
}

#[test]
fn test_prompt_hide_is_idempotent() {
    let mut prompt = Prompt::default();
    prompt.show("hold z");
    prompt.hide();
    let once = prompt.clone();
    prompt.hide();

    assert_eq!(prompt, once);
    assert!(!prompt.is_visible());
}

/// Text to show on the next frame; `None` leaves the prompt alone.
#[derive(Resource, Default)]
struct NextText(Option<&'static str>);

/// Whether the prompt read as changed on each frame.
#[derive(Resource, Default)]
struct ChangeLog(Vec<bool>);

fn drive_prompt(next: Res<NextText>, mut prompt: ResMut<Prompt>) {
    edit_prompt(&mut prompt, |prompt| {
        if let Some(text) = next.0 {
            prompt.show(text);
        }
    });
}

fn log_prompt_change(prompt: Res<Prompt>, mut log: ResMut<ChangeLog>) {
    log.0.push(prompt.is_changed());
}

fn run_frame(app: &mut App, next: Option<&'static str>) -> bool {
    app.insert_resource(NextText(next));
    app.update();
    app.world()
        .resource::<ChangeLog>()
        .0
        .last()
        .copied()
        .unwrap_or_default()
}

#[test]
fn test_edit_prompt_flags_only_real_changes() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<Prompt>()
        .init_resource::<NextText>()
        .init_resource::<ChangeLog>()
        .add_systems(Update, (drive_prompt, log_prompt_change).chain());

    // First frame sees the freshly inserted resource
    app.update();

    assert!(!run_frame(&mut app, None));
    assert!(run_frame(&mut app, Some("first")));
    // Showing the same text again is not a change
    assert!(!run_frame(&mut app, Some("first")));
    assert!(!run_frame(&mut app, None));
    assert!(run_frame(&mut app, Some("second")));
}

// -----------------------------------------------------------------------------
// Score tests
// -----------------------------------------------------------------------------

#[test]
fn test_new_height_maximum_refreshes_display() {
    let mut score = Score::default();
    assert!(score.record_height(1.25));
    assert_eq!(score.max_height(), 1.25);
    assert_eq!(score.displayed(), 12);
}

#[test]
fn test_lower_height_is_ignored() {
    let mut score = Score::default();
    score.record_height(2.0);
    let before = score.clone();

    assert!(!score.record_height(1.0));
    assert!(!score.record_height(2.0));
    assert_eq!(score, before);
}

#[test]
fn test_hang_time_needs_every_limb() {
    let mut score = Score::default();
    score.record_contacts(3);
    assert!(!score.tick(2.0));
    assert_eq!(score.contact_secs(), 0.0);

    score.record_contacts(4);
    score.tick(0.5);
    assert_eq!(score.contact_secs(), 0.5);
}

#[test]
fn test_hang_time_refreshes_on_whole_seconds() {
    let mut score = Score::default();
    score.record_contacts(4);

    assert!(!score.tick(0.75));
    assert_eq!(score.displayed(), 0);
    assert_eq!(score.value(), 0);

    assert!(score.tick(0.5));
    assert_eq!(score.displayed(), 1);

    assert!(!score.tick(0.5));
    assert_eq!(score.displayed(), 1);
}

#[test]
fn test_value_combines_height_and_hang_time() {
    let mut score = Score::default();
    score.record_contacts(4);
    score.tick(2.5);
    score.record_height(3.07);

    assert_eq!(score.value(), 2 + 30);
    assert_eq!(score.displayed(), 32);
}
