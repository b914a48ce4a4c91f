//! Game selector: a menu that wraps several games behind one [`Game`].
//!
//! Until a game is started the selector handles keys itself; afterwards every
//! call goes to the chosen game.

use crate::game::Game;
use crate::types::keys::{ARROW_DOWN, ARROW_UP, ENTER};
use crate::types::{Color, Scene};

pub struct Selector {
    games: Vec<Box<dyn Game>>,
    selected: usize,
    started: bool,
    stopped: bool,
    /// The menu changed since it was last returned.
    dirty: bool,
}

impl Selector {
    pub fn new(games: Vec<Box<dyn Game>>) -> Self {
        Self {
            games,
            selected: 0,
            started: false,
            stopped: false,
            dirty: true,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn started(&self) -> bool {
        self.started
    }

    fn active(&mut self) -> Option<&mut Box<dyn Game>> {
        if self.started {
            self.games.get_mut(self.selected)
        } else {
            None
        }
    }

    fn select_next(&mut self) {
        if !self.games.is_empty() {
            self.selected = (self.selected + 1) % self.games.len();
            self.dirty = true;
        }
    }

    fn select_prev(&mut self) {
        if !self.games.is_empty() {
            self.selected = (self.selected + self.games.len() - 1) % self.games.len();
            self.dirty = true;
        }
    }

    fn menu(&self) -> Scene {
        let mut scene = Scene::new();
        scene.push_text("Select game:", Color::Default);
        scene.push_blank();
        for (i, game) in self.games.iter().enumerate() {
            let marker = if i == self.selected { "->" } else { "  " };
            let fg = if i == self.selected {
                Color::Green
            } else {
                Color::Default
            };
            scene.push_text(
                &format!("{marker}{i}: {} ({})", game.title(), game.description()),
                fg,
            );
        }
        scene.push_blank();
        scene.push_text("[arrows] choose    [p] play    [q] quit", Color::Default);
        scene
    }
}

impl Game for Selector {
    fn title(&self) -> &str {
        "Selector"
    }

    fn description(&self) -> &str {
        "Choose the game you like"
    }

    fn init(&mut self, width: u16, height: u16, fps: u32) {
        for game in &mut self.games {
            game.init(width, height, fps);
        }
        self.dirty = true;
    }

    fn next_frame(&mut self) -> Option<Scene> {
        if let Some(game) = self.active() {
            return game.next_frame();
        }
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.menu())
    }

    fn handle_key(&mut self, key: &[u8]) {
        if let Some(game) = self.active() {
            game.handle_key(key);
            return;
        }
        match key {
            ARROW_DOWN => self.select_next(),
            ARROW_UP => self.select_prev(),
            b"p" | ENTER if !self.games.is_empty() => self.started = true,
            b"q" => self.stopped = true,
            _ => {}
        }
    }

    fn is_stopped(&self) -> bool {
        if self.stopped {
            return true;
        }
        self.started
            && self
                .games
                .get(self.selected)
                .map_or(true, |g| g.is_stopped())
    }
}
