//! Climb domain: grounded / climbing / falling state machine.

/// Overall climber state. Transitions only ever go
/// Grounded -> Climbing -> Falling -> Grounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClimbState {
    #[default]
    Grounded,
    Climbing,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimbTransition {
    pub from: ClimbState,
    pub to: ClimbState,
}

/// Tracks the climber state and this frame's contact count.
#[derive(Debug, Clone)]
pub struct ClimbStateMachine {
    state: ClimbState,
    contact_count: usize,
    limb_count: usize,
    fall_tolerance: usize,
}

impl ClimbStateMachine {
    /// `fall_tolerance` is how many limbs may let go at once without falling.
    pub fn new(limb_count: usize, fall_tolerance: usize) -> Self {
        Self {
            state: ClimbState::Grounded,
            contact_count: 0,
            limb_count,
            fall_tolerance,
        }
    }

    pub fn state(&self) -> ClimbState {
        self.state
    }

    pub fn is_falling(&self) -> bool {
        self.state == ClimbState::Falling
    }

    pub fn contact_count(&self) -> usize {
        self.contact_count
    }

    pub fn limb_count(&self) -> usize {
        self.limb_count
    }

    /// Store this frame's contacts. Contacts are not counted while falling.
    pub fn record_contacts(&mut self, count: usize) {
        self.contact_count = if self.is_falling() {
            0
        } else {
            count.min(self.limb_count)
        };
    }

    /// Grounded -> Climbing once every limb is attached.
    pub fn check_attach(&mut self) -> Option<ClimbTransition> {
        (self.state == ClimbState::Grounded && self.contact_count == self.limb_count)
            .then(|| self.transition(ClimbState::Climbing))
    }

    /// Climbing -> Falling once more limbs than the tolerance have let go.
    pub fn check_detach(&mut self) -> Option<ClimbTransition> {
        let lost = self.limb_count - self.contact_count;
        (self.state == ClimbState::Climbing && lost > self.fall_tolerance)
            .then(|| self.transition(ClimbState::Falling))
    }

    /// Falling -> Grounded once the floor probe hits.
    pub fn check_landing(&mut self, floor_hit: bool) -> Option<ClimbTransition> {
        (self.state == ClimbState::Falling && floor_hit)
            .then(|| self.transition(ClimbState::Grounded))
    }

    fn transition(&mut self, to: ClimbState) -> ClimbTransition {
        let from = self.state;
        self.state = to;
        ClimbTransition { from, to }
    }
}
