//! Snake game module - the simulation's state machine
//!
//! The snake is not stored as a list of segments. Each occupied grid cell
//! holds a freshness counter: the head is stamped with the snake's potential
//! length and every tick decrements all segments by one, so the tail vacates
//! on its own. Eating an apple raises the potential length, which delays the
//! tail for one tick per apple.
//!
//! Time is read from a [`Clock`]. The game time starts with the first
//! direction key, excludes paused intervals, and is what records are kept in.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::game::Game;
use crate::grid::{Grid, APPLE, EMPTY};
use crate::keymap::{self, KeyBinding, SnakeAction, SNAKE_BINDINGS};
use crate::records::{RecordStore, Records};
use crate::scene::{build_scene, SnakeView};
use crate::types::{
    Direction, Scene, DEFAULT_SPEED, GAME_TIME_EPSILON, HEADER_ROWS, INITIAL_APPLES, MAX_SPEED,
    MIN_SPEED,
};

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The head ran into the body
    Crashed,
    /// The player pressed quit
    Quit,
    /// No empty cell and no apple left
    BoardCleared,
}

/// Complete snake game state
pub struct SnakeGame<C: Clock = MonotonicClock> {
    clock: C,
    rng: SmallRng,
    store: Box<dyn RecordStore>,
    records: Records,
    grid: Grid,
    head: (usize, usize),
    direction: Direction,
    /// Buffered input, applied at the start of the next tick.
    next_direction: Direction,
    /// Ticks per second.
    speed: u32,
    initial_apples: usize,
    apples: usize,
    potential_len: u32,
    realized_len: u32,
    score: u32,
    paused: bool,
    help_shown: bool,
    end_shown: bool,
    /// Time the last processed tick was due.
    previous_frame: Duration,
    /// Game clock origin in seconds, set by the first direction key.
    start: Option<f64>,
    paused_at: f64,
    outcome: Option<Outcome>,
    ticks: u64,
}

impl<C: Clock> SnakeGame<C> {
    /// Create a game reading time from `clock` and records from `store`.
    ///
    /// The field stays empty until [`Game::init`] is called.
    pub fn new(clock: C, store: Box<dyn RecordStore>) -> Self {
        Self {
            clock,
            rng: SmallRng::from_entropy(),
            store,
            records: Records::new(),
            grid: Grid::default(),
            head: (0, 0),
            direction: Direction::NONE,
            next_direction: Direction::NONE,
            speed: DEFAULT_SPEED,
            initial_apples: INITIAL_APPLES,
            apples: 0,
            potential_len: 1,
            realized_len: 1,
            score: 0,
            paused: false,
            help_shown: false,
            end_shown: false,
            previous_frame: Duration::ZERO,
            start: None,
            paused_at: 0.0,
            outcome: None,
            ticks: 0,
        }
    }

    /// Use a deterministic apple sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Initial ticks per second, clamped to [`MIN_SPEED`]..=[`MAX_SPEED`].
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Number of apples placed by `init`.
    pub fn with_initial_apples(mut self, apples: usize) -> Self {
        self.initial_apples = apples;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn head(&self) -> (usize, usize) {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Target length including growth not yet visible at the tail.
    pub fn potential_len(&self) -> u32 {
        self.potential_len
    }

    /// Cells the body currently occupies.
    pub fn realized_len(&self) -> u32 {
        self.realized_len
    }

    pub fn apples(&self) -> usize {
        self.apples
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn bindings(&self) -> &'static [KeyBinding] {
        SNAKE_BINDINGS
    }

    /// Wall time between two ticks at the current speed.
    pub fn tick_interval(&self) -> Duration {
        let speed = u64::from(self.speed.clamp(MIN_SPEED, MAX_SPEED));
        Duration::from_nanos((1_000_000_000 / speed).max(1))
    }

    /// Seconds played so far, paused intervals excluded.
    pub fn game_time(&self) -> f64 {
        let Some(start) = self.start else {
            return GAME_TIME_EPSILON;
        };
        let end = if self.paused {
            self.paused_at
        } else {
            self.clock.now_secs()
        };
        GAME_TIME_EPSILON + (end - start).max(0.0)
    }

    /// Signed seconds left before the record for the next score is lost.
    pub fn time_to_beat(&self) -> Option<f64> {
        self.view().time_to_beat()
    }

    /// Borrowed state for the scene builder.
    pub fn view(&self) -> SnakeView<'_> {
        SnakeView {
            grid: &self.grid,
            score: self.score,
            potential_len: self.potential_len,
            realized_len: self.realized_len,
            speed: self.speed,
            game_time: self.game_time(),
            records: &self.records,
            paused: self.paused,
            outcome: self.outcome,
            bindings: SNAKE_BINDINGS,
        }
    }

    /// The scene for the current state, regardless of frame timing.
    pub fn scene(&self) -> Scene {
        build_scene(&self.view())
    }

    /// Advance the simulation by one step.
    ///
    /// Normally driven by [`Game::next_frame`], once per elapsed tick interval.
    pub fn tick(&mut self) {
        if self.outcome.is_some() || self.grid.is_empty() {
            return;
        }
        self.ticks += 1;
        self.direction = self.next_direction;

        let next = self
            .direction
            .wrap_step(self.head, self.grid.rows(), self.grid.cols());

        if !self.grid.age_segments() {
            self.realized_len += 1;
        }

        let target = self.grid.get(next.0, next.1).unwrap_or(EMPTY);
        if target > 0 {
            self.finish(Outcome::Crashed);
            return;
        }

        let ate = target == APPLE;
        if ate {
            self.apples = self.apples.saturating_sub(1);
            self.potential_len += 1;
            self.score += 1;
        }

        self.head = next;
        self.grid.set(next.0, next.1, self.potential_len as i32);

        if ate {
            self.apple_eaten();
        }
    }

    fn apple_eaten(&mut self) {
        let time = self.game_time();
        debug!(score = self.score, time, "apple eaten");

        if self.records.submit(self.score, time) {
            info!(score = self.score, time, "new record");
            if let Err(e) = self.store.save(&self.records) {
                warn!(error = %e, "failed to save records");
            }
        }

        if !self.place_apple() && self.apples == 0 {
            self.finish(Outcome::BoardCleared);
        }
    }

    /// Put an apple on a uniformly chosen empty cell.
    ///
    /// Returns false when the field has no empty cell.
    fn place_apple(&mut self) -> bool {
        let empty = self.grid.count_empty();
        if empty == 0 {
            return false;
        }
        let n = self.rng.gen_range(1..=empty);
        match self.grid.nth_empty(n) {
            Some((row, col)) => {
                self.grid.set(row, col, APPLE);
                self.apples += 1;
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_some() {
            return;
        }
        info!(
            ?outcome,
            score = self.score,
            length = self.realized_len,
            ticks = self.ticks,
            "game over"
        );
        self.outcome = Some(outcome);
    }

    /// Steering is checked against the direction of the last tick, so two
    /// quick turns cannot fold the head back onto the neck.
    fn can_steer(&self, to: Direction) -> bool {
        !to.is_reverse_of(self.direction)
    }

    fn pause(&mut self) {
        self.paused = true;
        self.help_shown = false;
        self.paused_at = self.clock.now_secs();
    }

    fn resume(&mut self) {
        self.paused = false;
        let now = self.clock.now();
        self.previous_frame = now.saturating_sub(self.tick_interval());
        if let Some(start) = self.start.as_mut() {
            *start += now.as_secs_f64() - self.paused_at;
        }
    }

    fn apply(&mut self, action: SnakeAction) {
        match action {
            SnakeAction::Steer(to) => {
                if self.can_steer(to) {
                    self.next_direction = to;
                }
                if self.start.is_none() {
                    self.start = Some(self.clock.now_secs());
                }
            }
            SnakeAction::SpeedUp => self.speed = (self.speed + 1).min(MAX_SPEED),
            SnakeAction::SpeedDown => self.speed = self.speed.saturating_sub(1).max(MIN_SPEED),
            SnakeAction::TogglePause => {
                if self.paused {
                    self.resume();
                } else {
                    self.pause();
                }
            }
            SnakeAction::Quit => self.finish(Outcome::Quit),
        }
    }

    fn load_records(&mut self) {
        self.records = match self.store.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "could not read records, starting with none");
                Records::new()
            }
        };
    }
}

impl<C: Clock> Game for SnakeGame<C> {
    fn title(&self) -> &str {
        "Snake"
    }

    fn description(&self) -> &str {
        "Classic snake game. Terminal font should be square-sized."
    }

    fn init(&mut self, width: u16, height: u16, _fps: u32) {
        let rows = height.saturating_sub(HEADER_ROWS) as usize;
        let cols = width as usize;

        self.grid = Grid::new(rows, cols);
        self.head = (0, 0);
        self.direction = Direction::NONE;
        self.next_direction = Direction::NONE;
        self.apples = 0;
        self.potential_len = 1;
        self.realized_len = 1;
        self.score = 0;
        self.paused = false;
        self.help_shown = false;
        self.end_shown = false;
        self.start = None;
        self.paused_at = 0.0;
        self.outcome = None;
        self.ticks = 0;

        self.grid.set(0, 0, self.potential_len as i32);
        self.load_records();
        self.previous_frame = self.clock.now().saturating_sub(self.tick_interval());

        for _ in 0..self.initial_apples {
            self.place_apple();
        }

        debug!(rows, cols, apples = self.apples, records = self.records.len(), "snake initialised");
    }

    fn next_frame(&mut self) -> Option<Scene> {
        if self.outcome.is_some() {
            if self.end_shown {
                return None;
            }
            self.end_shown = true;
            return Some(self.scene());
        }

        if self.paused {
            if self.help_shown {
                return None;
            }
            self.help_shown = true;
            return Some(self.scene());
        }

        let now = self.clock.now();
        let interval = self.tick_interval();
        if now.saturating_sub(self.previous_frame) < interval {
            return None;
        }

        // Catch up one tick per elapsed interval, in order.
        while now.saturating_sub(self.previous_frame) >= interval {
            self.tick();
            self.previous_frame += interval;
            if self.outcome.is_some() {
                self.end_shown = true;
                break;
            }
        }

        Some(self.scene())
    }

    fn handle_key(&mut self, key: &[u8]) {
        if self.outcome.is_some() {
            return;
        }
        let Some(action) = keymap::lookup(key) else {
            return;
        };
        if self.paused && !matches!(action, SnakeAction::TogglePause | SnakeAction::Quit) {
            return;
        }
        self.apply(action);
    }

    fn is_stopped(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::clock::ManualClock;
    use crate::records::MemoryStore;
    use crate::types::keys::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, ESC};

    fn game(width: u16, height: u16) -> (SnakeGame<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut g = SnakeGame::new(clock.clone(), Box::new(MemoryStore::new()))
            .with_seed(7)
            .with_initial_apples(0);
        g.init(width, height, 60);
        (g, clock)
    }

    /// Lay a straight body along row `row` from `cols[0]` (head) onwards.
    fn lay_body(g: &mut SnakeGame<ManualClock>, row: usize, cols: &[usize]) {
        g.grid = Grid::new(g.grid.rows(), g.grid.cols());
        let len = cols.len() as u32;
        for (i, &c) in cols.iter().enumerate() {
            g.grid.set(row, c, (len - i as u32) as i32);
        }
        g.head = (row, cols[0]);
        g.potential_len = len;
        g.realized_len = len;
    }

    #[test]
    fn test_init_reserves_header_rows() {
        let (g, _) = game(10, 8);
        assert_eq!(g.grid().rows(), 6);
        assert_eq!(g.grid().cols(), 10);
        assert_eq!(g.grid().get(0, 0), Some(1));
        assert_eq!(g.head(), (0, 0));
        assert_eq!(g.direction(), Direction::NONE);
    }

    #[test]
    fn test_init_places_four_apples_by_default() {
        let clock = ManualClock::new();
        let mut g = SnakeGame::new(clock, Box::new(MemoryStore::new())).with_seed(1);
        g.init(10, 8, 60);
        assert_eq!(g.apples(), INITIAL_APPLES);
        assert_eq!(g.grid().count_apples(), INITIAL_APPLES);
        assert_eq!(g.grid().get(0, 0), Some(1));
    }

    #[test]
    fn test_first_down_press_moves_head_one_row() {
        let (mut g, clock) = game(10, 8);
        clock.advance_secs(1.0);
        g.handle_key(ARROW_DOWN);
        assert_eq!(g.next_direction(), Direction::DOWN);
        assert!(g.start.is_some());

        g.tick();
        assert_eq!(g.head(), (1, 0));
        assert_eq!(g.grid().get(0, 0), Some(0));
        assert_eq!(g.grid().get(1, 0), Some(1));
    }

    #[test]
    fn test_collision_stops_and_freezes_grid() {
        let (mut g, _) = game(10, 8);
        // Head at column 3 moving left, body to its right.
        lay_body(&mut g, 2, &[3, 4, 5]);
        g.direction = Direction::LEFT;
        // Force a reversal the key handler would refuse.
        g.next_direction = Direction::RIGHT;

        g.tick();
        assert!(g.is_stopped());
        assert_eq!(g.outcome(), Some(Outcome::Crashed));

        let frozen = g.grid().clone();
        g.tick();
        g.tick();
        assert_eq!(g.grid(), &frozen);
    }

    #[test]
    fn test_wraparound_left_edge() {
        let (mut g, _) = game(10, 8);
        g.handle_key(ARROW_LEFT);
        g.tick();
        assert_eq!(g.head(), (0, 9));
        g.handle_key(ARROW_UP);
        g.tick();
        assert_eq!(g.head(), (5, 9));
    }

    #[test]
    fn test_reverse_is_rejected() {
        let (mut g, _) = game(10, 8);
        g.handle_key(ARROW_DOWN);
        g.tick();
        g.handle_key(ARROW_UP);
        assert_eq!(g.next_direction(), Direction::DOWN);
        g.handle_key(ARROW_RIGHT);
        assert_eq!(g.next_direction(), Direction::RIGHT);
    }

    #[test]
    fn test_eating_grows_on_following_tick() {
        let (mut g, _) = game(10, 8);
        g.grid.set(0, 1, APPLE);
        g.apples = 1;
        g.handle_key(ARROW_RIGHT);

        g.tick();
        assert_eq!(g.score(), 1);
        assert_eq!(g.potential_len(), 2);
        assert_eq!(g.realized_len(), 1);
        assert_eq!(g.grid().get(0, 1), Some(2));
        // A replacement apple was placed.
        assert_eq!(g.apples(), 1);
        assert_eq!(g.grid().count_apples(), 1);

        // Drop the replacement apple so the next step is predictable.
        let cols = g.grid.cols();
        let apple = (0..g.grid.len())
            .map(|i| (i / cols, i % cols))
            .find(|&(r, c)| g.grid.get(r, c) == Some(APPLE));
        if let Some((r, c)) = apple {
            g.grid.set(r, c, EMPTY);
            g.apples = 0;
        }

        g.tick();
        assert_eq!(g.realized_len(), 2);
        assert_eq!(g.grid().get(0, 1), Some(1));
        assert_eq!(g.grid().get(0, 2), Some(2));
    }

    #[test]
    fn test_full_board_is_cleared() {
        // A 1x3 field: a still-growing snake on two cells and one apple.
        let (mut g, _) = game(3, 3);
        g.grid.set(0, 0, 2);
        g.grid.set(0, 1, 3);
        g.grid.set(0, 2, APPLE);
        g.head = (0, 1);
        g.potential_len = 3;
        g.realized_len = 2;
        g.apples = 1;
        g.direction = Direction::RIGHT;
        g.next_direction = Direction::RIGHT;

        g.tick();
        assert_eq!(g.realized_len(), 3);
        assert_eq!(g.grid().count_empty(), 0);
        assert_eq!(g.outcome(), Some(Outcome::BoardCleared));
    }

    #[test]
    fn test_record_saved_on_improvement() {
        let (mut g, clock) = game(10, 8);
        g.grid.set(0, 2, APPLE);
        g.apples = 1;
        g.handle_key(ARROW_RIGHT);
        clock.advance_secs(0.5);
        g.tick();
        g.tick();
        assert_eq!(g.score(), 1);
        let best = g.records().best(1).unwrap();
        assert!((best - (0.5 + GAME_TIME_EPSILON)).abs() < 1e-9);
    }

    /// Store sharing its save counter with the test.
    struct SharedStore {
        records: Records,
        saves: Rc<Cell<usize>>,
    }

    impl RecordStore for SharedStore {
        fn load(&mut self) -> Result<Records, crate::records::RecordsError> {
            Ok(self.records.clone())
        }

        fn save(&mut self, records: &Records) -> Result<(), crate::records::RecordsError> {
            self.records = records.clone();
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_record_written_only_when_it_improves() {
        let clock = ManualClock::new();
        let saves = Rc::new(Cell::new(0));
        let store = SharedStore {
            records: [(1, 0.001), (2, 100.0)].into_iter().collect(),
            saves: Rc::clone(&saves),
        };
        let mut g = SnakeGame::new(clock.clone(), Box::new(store))
            .with_seed(7)
            .with_initial_apples(0);
        g.init(10, 8, 60);
        g.grid.set(0, 1, APPLE);
        g.grid.set(0, 2, APPLE);
        g.apples = 2;
        g.handle_key(ARROW_RIGHT);
        clock.advance_secs(0.5);

        g.tick();
        assert_eq!(g.score(), 1);
        assert_eq!(saves.get(), 0);
        assert_eq!(g.records().best(1), Some(0.001));

        g.tick();
        assert_eq!(g.score(), 2);
        assert_eq!(saves.get(), 1);
        assert!(g.records().best(2).unwrap() < 100.0);
    }

    #[test]
    fn test_paused_ignores_steering() {
        let (mut g, _) = game(10, 8);
        g.handle_key(ESC);
        assert!(g.paused());
        g.handle_key(ARROW_DOWN);
        assert_eq!(g.next_direction(), Direction::NONE);
        assert!(g.start.is_none());
        g.handle_key(ESC);
        assert!(!g.paused());
    }

    #[test]
    fn test_help_scene_is_returned_once() {
        let (mut g, _) = game(20, 10);
        g.handle_key(ESC);
        assert!(g.next_frame().is_some());
        assert!(g.next_frame().is_none());
        assert!(g.next_frame().is_none());
        g.handle_key(ESC);
        g.handle_key(ESC);
        assert!(g.next_frame().is_some());
    }

    #[test]
    fn test_speed_is_clamped() {
        let (mut g, _) = game(10, 8);
        for _ in 0..20 {
            g.handle_key(b"s");
        }
        assert_eq!(g.speed(), MIN_SPEED);
        g.handle_key(b"w");
        assert_eq!(g.speed(), 2);
        assert_eq!(g.tick_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_quit_stops_and_shows_end_once() {
        let (mut g, _) = game(10, 8);
        g.handle_key(b"q");
        assert_eq!(g.outcome(), Some(Outcome::Quit));
        let end = g.next_frame().unwrap();
        assert!(end.contains_text("#"));
        assert!(g.next_frame().is_none());
    }

    #[test]
    fn test_zero_sized_field_is_inert() {
        let (mut g, clock) = game(0, 1);
        g.handle_key(ARROW_DOWN);
        clock.advance_secs(1.0);
        assert!(g.next_frame().is_some());
        assert_eq!(g.ticks(), 0);
        assert!(!g.is_stopped());
    }
}
