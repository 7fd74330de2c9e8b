//! Round state machine for Metro Guesser.
//!
//! A round picks one station from the catalog and gives the player a limited
//! number of wrong guesses. Each wrong guess zooms the map out a step so more
//! of the surroundings become visible. `Game` owns the current round plus the
//! random source and is driven through `GameAction`s by the root component.

use crate::catalog::{Catalog, Station};
use crate::config::GameConfig;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    /// Out of attempts; the answer is shown.
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// No round has started yet.
    Idle,
    Active,
    Finished(Outcome),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    /// Identity of this round, bumped by every start.
    pub round: u64,
    pub current_station: Option<Station>,
    /// Wrong guesses so far.
    pub attempts: u32,
    pub max_attempts: u32,
    pub is_correct: bool,
    pub game_over: bool,
    pub zoom_level: f64,
}

/// What a single accepted guess did to the round.
#[derive(Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    Correct,
    Wrong { attempts_left: u32, zoomed_out: bool },
    Revealed { answer: String },
}

impl GuessOutcome {
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Correct => "Congratulations! You found it!".to_string(),
            GuessOutcome::Wrong {
                attempts_left,
                zoomed_out,
            } => {
                let plural = if *attempts_left == 1 { "" } else { "s" };
                if *zoomed_out {
                    format!("Not quite. {attempts_left} attempt{plural} left, zooming out.")
                } else {
                    format!("Not quite. {attempts_left} attempt{plural} left.")
                }
            }
            GuessOutcome::Revealed { answer } => format!("The correct station was {answer}"),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            GuessOutcome::Correct => Tone::Success,
            GuessOutcome::Wrong { .. } => Tone::Hint,
            GuessOutcome::Revealed { .. } => Tone::Failure,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Hint,
    Failure,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub tone: Tone,
    pub text: String,
}

/// Case-insensitive comparison of trimmed names.
pub fn names_match(candidate: &str, answer: &str) -> bool {
    candidate.trim().to_lowercase() == answer.trim().to_lowercase()
}

impl RoundState {
    pub fn idle(cfg: &GameConfig) -> Self {
        Self {
            round: 0,
            current_station: None,
            attempts: 0,
            max_attempts: cfg.max_attempts,
            is_correct: false,
            game_over: false,
            zoom_level: cfg.initial_zoom,
        }
    }

    pub fn begin(round: u64, station: Station, cfg: &GameConfig) -> Self {
        Self {
            round,
            current_station: Some(station),
            attempts: 0,
            max_attempts: cfg.max_attempts,
            is_correct: false,
            game_over: false,
            zoom_level: cfg.initial_zoom,
        }
    }

    pub fn status(&self) -> RoundStatus {
        match (&self.current_station, self.game_over, self.is_correct) {
            (None, _, _) => RoundStatus::Idle,
            (Some(_), false, _) => RoundStatus::Active,
            (Some(_), true, true) => RoundStatus::Finished(Outcome::Correct),
            (Some(_), true, false) => RoundStatus::Finished(Outcome::Revealed),
        }
    }

    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Applies a guess. Returns `None` when the round does not accept guesses
    /// (not started or already over); the state is untouched in that case.
    pub fn guess(&mut self, candidate: &str, cfg: &GameConfig) -> Option<GuessOutcome> {
        if self.game_over {
            return None;
        }
        let answer = self.current_station.as_ref()?.name.clone();

        if names_match(candidate, &answer) {
            self.is_correct = true;
            self.game_over = true;
            return Some(GuessOutcome::Correct);
        }

        self.attempts += 1;
        if self.attempts >= self.max_attempts {
            self.attempts = self.max_attempts;
            self.game_over = true;
            return Some(GuessOutcome::Revealed { answer });
        }

        let zoomed = (self.zoom_level - cfg.zoom_step).max(cfg.min_zoom);
        let zoomed_out = zoomed < self.zoom_level;
        self.zoom_level = zoomed;
        Some(GuessOutcome::Wrong {
            attempts_left: self.attempts_left(),
            zoomed_out,
        })
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Start,
    Guess(String),
}

/// Single owner of the round plus everything needed to start the next one.
#[derive(Clone, Debug)]
pub struct Game<R = ChaCha8Rng> {
    catalog: Rc<Catalog>,
    config: Rc<GameConfig>,
    rng: R,
    pub round: RoundState,
    /// Message for the last accepted guess, cleared on start.
    pub feedback: Option<Feedback>,
}

impl<R: RngCore> Game<R> {
    /// Creates an idle game. Call [`Game::start`] (or dispatch `Start`) to pick a station.
    pub fn new(catalog: Rc<Catalog>, config: Rc<GameConfig>, rng: R) -> Self {
        let round = RoundState::idle(&config);
        Self {
            catalog,
            config,
            rng,
            round,
            feedback: None,
        }
    }

    pub fn start(&mut self) {
        let station = self.catalog.choose(&mut self.rng).clone();
        log::info!("round {} started", self.round.round + 1);
        log::debug!("answer: {} ({})", station.name, station.id);
        self.round = RoundState::begin(self.round.round + 1, station, &self.config);
        self.feedback = None;
    }

    /// Returns whether the guess was accepted.
    pub fn guess(&mut self, candidate: &str) -> bool {
        let Some(outcome) = self.round.guess(candidate, &self.config) else {
            log::debug!("guess {candidate:?} ignored, round is {:?}", self.round.status());
            return false;
        };
        log::info!(
            "round {} guess {:?}: {:?} (attempts {}/{})",
            self.round.round,
            candidate.trim(),
            outcome,
            self.round.attempts,
            self.round.max_attempts
        );
        self.feedback = Some(Feedback {
            tone: outcome.tone(),
            text: outcome.message(),
        });
        true
    }
}

impl<R: RngCore + Clone> Reducible for Game<R> {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GameAction::Start => new.start(),
            GameAction::Guess(candidate) => {
                if !new.guess(&candidate) {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Coordinates;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn station(name: &str) -> Station {
        Station {
            id: name.to_lowercase(),
            name: name.to_string(),
            coordinates: Coordinates::new(4.907678, 52.362907),
        }
    }

    fn assert_invariants(r: &RoundState, cfg: &GameConfig) {
        assert!(r.attempts <= r.max_attempts);
        assert_eq!(r.game_over, r.is_correct || r.attempts == r.max_attempts);
        assert!(r.zoom_level >= cfg.min_zoom);
    }

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn seeded_game(seed: u64) -> Game {
        Game::new(
            Rc::new(catalog()),
            Rc::new(cfg()),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    #[test]
    fn names_match_ignores_case_and_surrounding_whitespace() {
        assert!(names_match("  amsterdam CENTRAAL ", "Amsterdam Centraal"));
        assert!(!names_match("Amsterdam", "Amsterdam Centraal"));
        assert!(!names_match("AmsterdamCentraal", "Amsterdam Centraal"));
    }

    #[test]
    fn wrong_then_right_guess() {
        let cfg = cfg();
        let mut r = RoundState::begin(1, station("Weesperplein"), &cfg);

        let out = r.guess("Nieuwmarkt", &cfg);
        assert_eq!(
            out,
            Some(GuessOutcome::Wrong {
                attempts_left: 2,
                zoomed_out: true
            })
        );
        assert_eq!(r.attempts, 1);
        assert_eq!(r.zoom_level, 15.0);
        assert!(!r.game_over);
        assert_eq!(r.status(), RoundStatus::Active);

        assert_eq!(r.guess("Weesperplein", &cfg), Some(GuessOutcome::Correct));
        assert!(r.is_correct);
        assert!(r.game_over);
        assert_eq!(r.status(), RoundStatus::Finished(Outcome::Correct));
        assert_invariants(&r, &cfg);
    }

    #[test]
    fn three_wrong_guesses_reveal_the_answer() {
        let cfg = cfg();
        let mut r = RoundState::begin(1, station("Waterlooplein"), &cfg);
        r.guess("a", &cfg);
        r.guess("b", &cfg);
        assert!(!r.game_over);
        let out = r.guess("c", &cfg);
        assert_eq!(
            out,
            Some(GuessOutcome::Revealed {
                answer: "Waterlooplein".to_string()
            })
        );
        assert_eq!(r.attempts, 3);
        assert!(r.game_over);
        assert!(!r.is_correct);
        assert_eq!(r.status(), RoundStatus::Finished(Outcome::Revealed));
        assert_invariants(&r, &cfg);
    }

    #[test]
    fn zoom_steps_down_to_the_floor() {
        let cfg = GameConfig {
            max_attempts: 10,
            ..GameConfig::default()
        };
        let mut r = RoundState::begin(1, station("Nieuwmarkt"), &cfg);
        let mut seen = vec![r.zoom_level];
        for _ in 0..6 {
            r.guess("nope", &cfg);
            seen.push(r.zoom_level);
        }
        assert_eq!(seen, vec![16.0, 15.0, 14.0, 13.0, 13.0, 13.0, 13.0]);
        assert!(seen.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn zoom_note_is_dropped_at_the_floor() {
        let cfg = GameConfig {
            max_attempts: 10,
            initial_zoom: 13.0,
            ..GameConfig::default()
        };
        let mut r = RoundState::begin(1, station("Nieuwmarkt"), &cfg);
        let out = r.guess("nope", &cfg).unwrap();
        assert_eq!(
            out,
            GuessOutcome::Wrong {
                attempts_left: 9,
                zoomed_out: false
            }
        );
        assert_eq!(out.message(), "Not quite. 9 attempts left.");
    }

    #[test]
    fn empty_guess_counts_as_wrong() {
        let cfg = cfg();
        let mut r = RoundState::begin(1, station("Nieuwmarkt"), &cfg);
        assert!(matches!(r.guess("", &cfg), Some(GuessOutcome::Wrong { .. })));
        assert_eq!(r.attempts, 1);
    }

    #[test]
    fn guesses_after_game_over_change_nothing() {
        let cfg = cfg();
        let mut r = RoundState::begin(1, station("Nieuwmarkt"), &cfg);
        r.guess("nieuwmarkt", &cfg);
        let frozen = r.clone();
        assert_eq!(r.guess("other", &cfg), None);
        assert_eq!(r.guess("Nieuwmarkt", &cfg), None);
        assert_eq!(r, frozen);
    }

    #[test]
    fn guess_without_station_is_ignored() {
        let cfg = cfg();
        let mut r = RoundState::idle(&cfg);
        assert_eq!(r.status(), RoundStatus::Idle);
        assert_eq!(r.guess("Nieuwmarkt", &cfg), None);
        assert_eq!(r, RoundState::idle(&cfg));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            GuessOutcome::Correct.message(),
            "Congratulations! You found it!"
        );
        assert_eq!(
            GuessOutcome::Wrong {
                attempts_left: 1,
                zoomed_out: true
            }
            .message(),
            "Not quite. 1 attempt left, zooming out."
        );
        assert_eq!(
            GuessOutcome::Revealed {
                answer: "Amsterdam Zuid".to_string()
            }
            .message(),
            "The correct station was Amsterdam Zuid"
        );
    }

    #[test]
    fn restart_after_finished_round_resets_everything() {
        let mut game = seeded_game(3);
        game.start();
        let first_round = game.round.round;
        for _ in 0..3 {
            game.guess("definitely not a station");
        }
        assert!(game.round.game_over);
        assert!(game.feedback.is_some());

        game.start();
        let r = &game.round;
        assert_eq!(r.round, first_round + 1);
        assert_eq!(r.attempts, 0);
        assert!(!r.game_over);
        assert!(!r.is_correct);
        assert_eq!(r.zoom_level, 16.0);
        assert!(game.feedback.is_none());
        let picked = r.current_station.as_ref().unwrap();
        assert!(catalog().stations().contains(picked));
    }

    #[test]
    fn equal_seeds_pick_equal_stations() {
        let mut a = seeded_game(42);
        let mut b = seeded_game(42);
        for _ in 0..10 {
            a.start();
            b.start();
            assert_eq!(a.round.current_station, b.round.current_station);
        }
    }

    #[test]
    fn injected_source_controls_selection() {
        let mut game = Game::new(Rc::new(catalog()), Rc::new(cfg()), StepRng::new(0, 0));
        game.start();
        assert_eq!(
            game.round.current_station.as_ref().map(|s| s.name.as_str()),
            Some("Amsterdam Centraal")
        );
        assert!(game.guess(" AMSTERDAM centraal"));
        assert!(game.round.is_correct);
        assert_eq!(game.feedback.as_ref().map(|f| f.tone), Some(Tone::Success));
    }

    #[test]
    fn invariants_hold_over_random_play() {
        let cfg = cfg();
        let mut game = seeded_game(9);
        let names: Vec<String> = catalog()
            .stations()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        for round in 0..50 {
            game.start();
            for i in 0..5 {
                game.guess(&names[(round * 3 + i) % names.len()]);
                assert_invariants(&game.round, &cfg);
            }
        }
    }

    #[test]
    fn reducer_ignores_guess_before_start() {
        let game = Rc::new(seeded_game(1));
        let after = game.clone().reduce(GameAction::Guess("Nieuwmarkt".to_string()));
        assert!(Rc::ptr_eq(&game, &after));
    }

    #[test]
    fn reducer_start_then_guess() {
        let game = Rc::new(seeded_game(5));
        let started = game.reduce(GameAction::Start);
        assert_eq!(started.round.status(), RoundStatus::Active);
        let answer = started.round.current_station.clone().unwrap().name;
        let won = started.reduce(GameAction::Guess(answer.to_uppercase()));
        assert_eq!(won.round.status(), RoundStatus::Finished(Outcome::Correct));
        let again = won.clone().reduce(GameAction::Guess("x".to_string()));
        assert!(Rc::ptr_eq(&won, &again));
    }
}
