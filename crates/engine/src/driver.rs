//! Game loop driver.
//!
//! Single-threaded and cooperative: each iteration either draws a frame (when
//! one is due) or waits, bounded by the frame clock, for input. Input is
//! applied in arrival order and followed by an immediate redraw. The loop
//! ends once the game reports stopped or the player interrupts.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{Clock, Game};
use crate::frame_clock::FrameClock;
use crate::input::{InputEvent, InputSource};
use crate::term::RenderSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The game reported itself stopped (game over or quit key).
    GameOver,
    /// Interrupt key (Ctrl+C).
    Interrupted,
}

/// Dimensions and rate handed to [`Game::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Field width in cells.
    pub width: u16,
    /// Terminal rows.
    pub height: u16,
    pub fps: u32,
}

pub struct GameLoop<C: Clock> {
    clock: C,
    config: LoopConfig,
    frame: FrameClock,
    state: LoopState,
    frames_drawn: u64,
}

impl<C: Clock> GameLoop<C> {
    pub fn new(clock: C, config: LoopConfig) -> Self {
        Self {
            clock,
            config,
            frame: FrameClock::new(config.fps),
            state: LoopState::Running,
            frames_drawn: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Scenes handed to the sink so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Initialize `game` and drive it until it stops.
    pub fn run<G, I, S>(&mut self, game: &mut G, input: &mut I, sink: &mut S) -> Result<StopReason>
    where
        G: Game + ?Sized,
        I: InputSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        let LoopConfig { width, height, fps } = self.config;
        game.init(width, height, fps);
        self.state = LoopState::Running;
        info!(game = game.title(), width, height, fps, "game loop started");

        let reason = loop {
            if game.is_stopped() {
                break StopReason::GameOver;
            }

            let now = self.clock.now();
            if self.frame.is_due(now) {
                self.frame.mark(now);
                self.draw(game, sink)?;
                continue;
            }

            let events = input.poll(self.frame.poll_timeout(now))?;
            if events.is_empty() {
                continue;
            }
            debug!(count = events.len(), "input batch");

            let mut interrupted = false;
            for event in events {
                match event {
                    InputEvent::Key(key) => game.handle_key(&key),
                    InputEvent::Interrupt => {
                        interrupted = true;
                        break;
                    }
                }
            }
            if interrupted {
                break StopReason::Interrupted;
            }
            self.draw(game, sink)?;
        };

        self.state = LoopState::Stopped;
        // Final frame so the end screen stays visible.
        self.draw(game, sink)?;
        info!(?reason, frames = self.frames_drawn, "game loop stopped");
        Ok(reason)
    }

    fn draw<G, S>(&mut self, game: &mut G, sink: &mut S) -> Result<()>
    where
        G: Game + ?Sized,
        S: RenderSink + ?Sized,
    {
        if let Some(scene) = game.next_frame() {
            sink.draw(&scene)?;
            self.frames_drawn += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    use crate::core::ManualClock;
    use crate::term::RecordingSink;
    use crate::types::keys::key_bytes;
    use crate::types::{Color, Scene};

    /// Input that lets time pass by the full timeout on every poll.
    struct TimedInput {
        clock: ManualClock,
        batches: VecDeque<Vec<InputEvent>>,
    }

    impl InputSource for TimedInput {
        fn poll(&mut self, timeout: Duration) -> Result<Vec<InputEvent>> {
            let batch = self.batches.pop_front().unwrap_or_default();
            if batch.is_empty() {
                self.clock.advance(timeout);
            }
            Ok(batch)
        }
    }

    /// Draws a counter each frame, stops on `x` or after `limit` frames.
    #[derive(Default)]
    struct CountingGame {
        frames: u32,
        limit: u32,
        keys: Vec<Vec<u8>>,
        stopped: bool,
        inits: u32,
    }

    impl Game for CountingGame {
        fn title(&self) -> &str {
            "Counter"
        }

        fn description(&self) -> &str {
            "counts frames"
        }

        fn init(&mut self, _width: u16, _height: u16, _fps: u32) {
            self.inits += 1;
        }

        fn next_frame(&mut self) -> Option<Scene> {
            self.frames += 1;
            if self.frames >= self.limit {
                self.stopped = true;
            }
            let mut scene = Scene::new();
            scene.push_text(&self.frames.to_string(), Color::Default);
            Some(scene)
        }

        fn handle_key(&mut self, key: &[u8]) {
            self.keys.push(key.to_vec());
            if key == b"x" {
                self.stopped = true;
            }
        }

        fn is_stopped(&self) -> bool {
            self.stopped
        }
    }

    fn config() -> LoopConfig {
        LoopConfig {
            width: 10,
            height: 8,
            fps: 10,
        }
    }

    fn key(s: &[u8]) -> InputEvent {
        InputEvent::Key(key_bytes(s))
    }

    #[test]
    fn stops_when_game_stops_and_draws_final_frame() {
        let clock = ManualClock::new();
        let mut input = TimedInput {
            clock: clock.clone(),
            batches: VecDeque::new(),
        };
        let mut game = CountingGame {
            limit: 3,
            ..Default::default()
        };
        let mut sink = RecordingSink::new();
        let mut driver = GameLoop::new(clock.clone(), config());

        let reason = driver.run(&mut game, &mut input, &mut sink).unwrap();

        assert_eq!(reason, StopReason::GameOver);
        assert_eq!(driver.state(), LoopState::Stopped);
        assert_eq!(game.inits, 1);
        // Three paced frames plus the final one.
        assert_eq!(sink.len(), 4);
        assert_eq!(driver.frames_drawn(), 4);
        // Frames were paced: two full intervals between the first and third.
        assert_eq!(clock.now(), Duration::from_millis(200));
    }

    #[test]
    fn input_is_applied_in_order_and_redrawn_at_once() {
        let clock = ManualClock::new();
        let mut input = TimedInput {
            clock: clock.clone(),
            batches: VecDeque::from([vec![key(b"a"), key(b"b"), key(b"x")]]),
        };
        let mut game = CountingGame {
            limit: u32::MAX,
            ..Default::default()
        };
        let mut sink = RecordingSink::new();
        let mut driver = GameLoop::new(clock.clone(), config());

        let reason = driver.run(&mut game, &mut input, &mut sink).unwrap();

        assert_eq!(reason, StopReason::GameOver);
        assert_eq!(game.keys, vec![b"a".to_vec(), b"b".to_vec(), b"x".to_vec()]);
        // First paced frame, the redraw after input, the final frame.
        assert_eq!(sink.len(), 3);
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn interrupt_stops_without_applying_later_keys() {
        let clock = ManualClock::new();
        let mut input = TimedInput {
            clock: clock.clone(),
            batches: VecDeque::from([vec![key(b"a"), InputEvent::Interrupt, key(b"b")]]),
        };
        let mut game = CountingGame {
            limit: u32::MAX,
            ..Default::default()
        };
        let mut sink = RecordingSink::new();
        let mut driver = GameLoop::new(clock, config());

        let reason = driver.run(&mut game, &mut input, &mut sink).unwrap();

        assert_eq!(reason, StopReason::Interrupted);
        assert_eq!(game.keys, vec![b"a".to_vec()]);
        assert!(!game.is_stopped());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn huge_fps_still_reads_input() {
        let clock = ManualClock::new();
        let mut input = TimedInput {
            clock: clock.clone(),
            batches: VecDeque::from([vec![], vec![key(b"x")]]),
        };
        let mut game = CountingGame {
            limit: u32::MAX,
            ..Default::default()
        };
        let mut sink = RecordingSink::new();
        let fast = LoopConfig {
            fps: u32::MAX,
            ..config()
        };
        let mut driver = GameLoop::new(clock.clone(), fast);

        let reason = driver.run(&mut game, &mut input, &mut sink).unwrap();

        assert_eq!(reason, StopReason::GameOver);
        assert_eq!(game.keys, vec![b"x".to_vec()]);
        assert_eq!(clock.now(), Duration::from_millis(1));
    }
}
