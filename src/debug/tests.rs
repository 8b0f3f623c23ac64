//! Debug domain: tests for the overlay text.

use bevy::prelude::*;

use super::ui::describe_climber;
use crate::climb::Climber;

#[test]
fn test_describe_fresh_climber() {
    let climber = Climber::new(Vec2::new(1.5, 0.95), 1);
    let text = describe_climber(&climber, Vec2::new(1.5, 0.95));

    assert!(text.starts_with("Pos: (1.50, 0.95)"));
    assert!(text.contains("State: Grounded  Contacts: 0"));
    assert!(text.contains("Binding: Idle"));
    assert_eq!(text.lines().count(), 3 + 4);
    assert!(text.lines().skip(3).all(|line| line.ends_with("pinned")));
}
