//! Core game state for Circle Clicker.
//! The state is a small value type; every transition returns a new value and
//! the Yew reducer wraps them in `GameAction`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Target position after reset/initialization, as a play-area percentage.
pub const CENTER_PERCENT: f64 = 50.0;

/// Horizontal placement band after a hit: `[10, 90]`.
pub const X_SPAN: f64 = 80.0;
pub const X_MIN: f64 = 10.0;
/// Vertical placement band after a hit: `[15, 85]`.
pub const Y_SPAN: f64 = 70.0;
pub const Y_MIN: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayStatus {
    Playing,
    Paused,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub score: u64,
    /// Target x as a percentage of the play-area width.
    pub player_x: f64,
    /// Target y as a percentage of the play-area height.
    pub player_y: f64,
    /// Are clicks accepted (and is the paused styling off)?
    pub is_playing: bool,
}

/// Partial initial state; any field left out takes the default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStateOverrides {
    pub score: Option<u64>,
    pub player_x: Option<f64>,
    pub player_y: Option<f64>,
    pub is_playing: Option<bool>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            player_x: CENTER_PERCENT,
            player_y: CENTER_PERCENT,
            is_playing: true,
        }
    }
}

impl GameState {
    pub fn initialize(overrides: Option<&GameStateOverrides>) -> Self {
        let base = Self::default();
        let Some(o) = overrides else { return base };
        Self {
            score: o.score.unwrap_or(base.score),
            player_x: o.player_x.unwrap_or(base.player_x),
            player_y: o.player_y.unwrap_or(base.player_y),
            is_playing: o.is_playing.unwrap_or(base.is_playing),
        }
    }

    /// Count a hit and move the target somewhere new.
    ///
    /// Does not look at `is_playing`; callers gate on it (see
    /// [`GameAction::TargetClicked`]).
    pub fn increment_score<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            score: self.score.saturating_add(1),
            player_x: rng.random::<f64>() * X_SPAN + X_MIN,
            player_y: rng.random::<f64>() * Y_SPAN + Y_MIN,
            ..self.clone()
        }
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }

    pub fn toggle_pause(&self) -> Self {
        Self {
            is_playing: !self.is_playing,
            ..self.clone()
        }
    }

    pub fn status(&self) -> PlayStatus {
        if self.is_playing {
            PlayStatus::Playing
        } else {
            PlayStatus::Paused
        }
    }
}

impl PlayStatus {
    pub fn header_label(self) -> &'static str {
        match self {
            PlayStatus::Playing => "🎯 Active",
            PlayStatus::Paused => "⏸️ Paused",
        }
    }

    pub fn footer_label(self) -> &'static str {
        match self {
            PlayStatus::Playing => "🟢 Active",
            PlayStatus::Paused => "🟡 Paused",
        }
    }

    pub fn pause_button_label(self) -> &'static str {
        match self {
            PlayStatus::Playing => "Pause",
            PlayStatus::Paused => "Resume",
        }
    }

    /// CSS class picking the pause button's colors (see `index.html`).
    pub fn button_class(self) -> &'static str {
        match self {
            PlayStatus::Playing => "playing",
            PlayStatus::Paused => "paused",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            PlayStatus::Playing => "🎯 Click the target to score points!",
            PlayStatus::Paused => "⏸️ Game paused - Resume to continue",
        }
    }

    /// Accent color for status text.
    pub fn color(self) -> &'static str {
        match self {
            PlayStatus::Playing => "#00ff88",
            PlayStatus::Paused => "#ffa500",
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    /// The rendered target was clicked. Ignored while paused.
    TargetClicked,
    TogglePause,
    Reset,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            GameAction::TargetClicked => {
                if !self.is_playing {
                    log::debug!("target click ignored while paused");
                    return self;
                }
                self.increment_score(&mut rand::rng())
            }
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
        };
        log::debug!(
            "{:?}: score={} pos=({:.1}, {:.1}) playing={}",
            action,
            next.score,
            next.player_x,
            next.player_y,
            next.is_playing
        );
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn paused() -> GameState {
        GameState {
            is_playing: false,
            ..GameState::default()
        }
    }

    #[test]
    fn test_initialize_defaults() {
        let s = GameState::initialize(None);
        assert_eq!(s.score, 0);
        assert_eq!(s.player_x, 50.0);
        assert_eq!(s.player_y, 50.0);
        assert!(s.is_playing);
        assert_eq!(s, GameState::initialize(Some(&GameStateOverrides::default())));
    }

    #[test]
    fn test_initialize_with_overrides() {
        let o = GameStateOverrides {
            score: Some(7),
            is_playing: Some(false),
            ..Default::default()
        };
        let s = GameState::initialize(Some(&o));
        assert_eq!(s.score, 7);
        assert_eq!(s.player_x, 50.0);
        assert!(!s.is_playing);
        assert_eq!(s.status(), PlayStatus::Paused);
    }

    #[test]
    fn test_increment_score_does_not_gate() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = paused().increment_score(&mut rng);
        assert_eq!(s.score, 1);
        assert!(!s.is_playing);
    }

    #[test]
    fn test_click_while_paused_keeps_score() {
        let s = Rc::new(GameState {
            score: 4,
            ..paused()
        });
        let after = s.clone().reduce(GameAction::TargetClicked);
        assert_eq!(after.score, 4);
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn test_pause_button_flips_status() {
        let s = Rc::new(GameState::default());
        let s = s.reduce(GameAction::TogglePause);
        assert_eq!(s.status(), PlayStatus::Paused);
        assert_eq!(s.status().pause_button_label(), "Resume");
        assert_eq!(s.status().button_class(), "paused");
        let s = s.reduce(GameAction::TogglePause);
        assert_eq!(s.status().pause_button_label(), "Pause");
        assert_eq!(s.status().button_class(), "playing");
    }

    #[test]
    fn test_full_session() {
        let mut s = Rc::new(GameState::initialize(None));
        for expected in 1..=3 {
            let before = (s.player_x, s.player_y);
            s = s.reduce(GameAction::TargetClicked);
            assert_eq!(s.score, expected);
            assert_ne!((s.player_x, s.player_y), before);
        }

        s = s.reduce(GameAction::TogglePause);
        assert!(!s.is_playing);
        s = s.reduce(GameAction::TargetClicked);
        assert_eq!(s.score, 3);

        s = s.reduce(GameAction::TogglePause);
        assert!(s.is_playing);
        s = s.reduce(GameAction::Reset);
        assert_eq!(*s, GameState::default());
    }

    fn any_state() -> impl Strategy<Value = GameState> {
        (0..u64::MAX, 0.0..=100.0f64, 0.0..=100.0f64, any::<bool>()).prop_map(
            |(score, player_x, player_y, is_playing)| GameState {
                score,
                player_x,
                player_y,
                is_playing,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_increment_adds_one_and_stays_in_band(s in any_state(), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let next = s.increment_score(&mut rng);
            prop_assert_eq!(next.score, s.score + 1);
            prop_assert!((X_MIN..=X_MIN + X_SPAN).contains(&next.player_x));
            prop_assert!((Y_MIN..=Y_MIN + Y_SPAN).contains(&next.player_y));
            prop_assert_eq!(next.is_playing, s.is_playing);
        }

        #[test]
        fn prop_reset_ignores_prior_state(s in any_state()) {
            prop_assert_eq!(s.reset(), GameState::default());
        }

        #[test]
        fn prop_toggle_pause_is_an_involution(s in any_state()) {
            let once = s.toggle_pause();
            prop_assert_ne!(once.is_playing, s.is_playing);
            prop_assert_eq!(once.score, s.score);
            prop_assert_eq!(once.toggle_pause(), s);
        }
    }
}
