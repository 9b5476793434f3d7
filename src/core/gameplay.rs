//=========================================================================
// Gameplay
//=========================================================================
//
// Match state carried by the Solo and TwoPlayer scenes.
//
// Rackets only record movement intent (hold up / hold down); nothing
// integrates positions yet. The per-frame entry point for that work is
// `GameplayUpdate::update`, called once per frame by the owning scene.
//
//=========================================================================

use std::time::Duration;

//=== GameplayUpdate ======================================================

/// Per-frame simulation hook for match scenes.
pub trait GameplayUpdate {
    /// Advances the simulation by `delta` of wall-clock time.
    fn update(&mut self, delta: Duration);
}

//=== Racket ==============================================================

/// Who drives a racket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacketControl {
    /// Keyboard-driven.
    Player,
    /// Computer-driven.
    Ai,
}

/// A paddle and the movement intent currently applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Racket {
    control: RacketControl,
    pub hold_up: bool,
    pub hold_down: bool,
}

impl Racket {
    pub fn player() -> Self {
        Self::with_control(RacketControl::Player)
    }

    pub fn ai() -> Self {
        Self::with_control(RacketControl::Ai)
    }

    fn with_control(control: RacketControl) -> Self {
        Self {
            control,
            hold_up: false,
            hold_down: false,
        }
    }

    pub fn control(&self) -> RacketControl {
        self.control
    }

    /// Whether any movement key is held for this racket.
    pub fn is_moving(&self) -> bool {
        self.hold_up || self.hold_down
    }
}

//=== Ball / Score ========================================================

/// The ball. Carries no state until physics exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ball;

/// Points scored by the first and second racket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub first: u32,
    pub second: u32,
}

//=== MatchState ==========================================================

/// Everything a match scene owns: two rackets, a ball, the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub first_racket: Racket,
    pub second_racket: Racket,
    pub ball: Ball,
    pub score: Score,
}

impl MatchState {
    /// Two keyboard rackets, score 0:0.
    pub fn two_player() -> Self {
        Self::new(Racket::player(), Racket::player())
    }

    /// Keyboard racket against a computer racket, score 0:0.
    pub fn solo() -> Self {
        Self::new(Racket::player(), Racket::ai())
    }

    fn new(first_racket: Racket, second_racket: Racket) -> Self {
        Self {
            first_racket,
            second_racket,
            ball: Ball,
            score: Score::default(),
        }
    }
}

impl GameplayUpdate for MatchState {
    fn update(&mut self, _delta: Duration) {
        // TODO: move rackets from their hold flags and integrate the ball.
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
