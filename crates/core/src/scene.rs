//! Scene builder: maps snake state into an abstract pixel grid.
//!
//! This module is pure (no I/O). One of three screens is produced:
//! - the end screen once the game stopped
//! - the help screen while paused
//! - the play field otherwise

use crate::grid::{Grid, APPLE};
use crate::keymap::KeyBinding;
use crate::records::Records;
use crate::snake::Outcome;
use crate::timefmt::format_game_time;
use crate::types::{text_pixels, Color, Pixel, Scene, Symbol, RECORDS_AHEAD};

const TAB: &str = "        ";

const END_BANNER: &[&str] = &[
    "    ####    ###   #   #  #####",
    "   #       #   #  ## ##  #    ",
    "   #  ##   #####  # # #  #### ",
    "   #   #   #   #  #   #  #    ",
    "    ###    #   #  #   #  #####",
    "",
    "    ###   #   #  #####  #### ",
    "   #   #  #   #  #      #   #",
    "   #   #  #   #  ####   #### ",
    "   #   #   # #   #      #  # ",
    "    ###     #    #####  #   #",
];

/// Everything the scene builder reads.
#[derive(Debug, Clone, Copy)]
pub struct SnakeView<'a> {
    pub grid: &'a Grid,
    pub score: u32,
    pub potential_len: u32,
    pub realized_len: u32,
    pub speed: u32,
    pub game_time: f64,
    pub records: &'a Records,
    pub paused: bool,
    pub outcome: Option<Outcome>,
    pub bindings: &'a [KeyBinding],
}

impl SnakeView<'_> {
    /// Best time for the next score minus the current game time.
    pub fn time_to_beat(&self) -> Option<f64> {
        self.records
            .best(self.score.saturating_add(1))
            .map(|best| best - self.game_time)
    }
}

/// Build the scene matching the view's state.
pub fn build_scene(view: &SnakeView) -> Scene {
    if view.outcome.is_some() {
        end_screen(view)
    } else if view.paused {
        help_screen(view)
    } else {
        play_screen(view)
    }
}

/// Green when ahead of the record, red otherwise.
fn delta_color(delta: f64) -> Color {
    if delta < 0.0 {
        Color::Green
    } else {
        Color::Red
    }
}

fn end_screen(view: &SnakeView) -> Scene {
    let mut scene = Scene::new();
    for line in END_BANNER {
        scene.push_text(line, Color::Default);
    }
    scene.push_blank();
    scene.push_text(
        &format!(
            "{TAB}Score: {}    Time: {}",
            view.score,
            format_game_time(view.game_time, 2)
        ),
        Color::Default,
    );
    if view.outcome == Some(Outcome::BoardCleared) {
        scene.push_text(&format!("{TAB}BOARD CLEARED"), Color::Green);
    }
    scene
}

fn help_screen(view: &SnakeView) -> Scene {
    let mut scene = Scene::new();
    for _ in 0..8 {
        scene.push_blank();
    }

    for binding in view.bindings {
        scene.push_text(&format!("{TAB}{}", binding.help), Color::Default);
    }

    let rule = format!("{TAB}{}", "=".repeat(view.grid.cols().saturating_sub(16)));
    scene.push_text(&rule, Color::Default);
    scene.push_text(&format!("{TAB}Score: {}", view.score), Color::Default);
    scene.push_text(
        &format!(
            "{TAB}Snake future/real length: {} / {}",
            view.potential_len, view.realized_len
        ),
        Color::Default,
    );
    scene.push_text(
        &format!("{TAB}Time spent: {}", format_game_time(view.game_time, 2)),
        Color::Default,
    );
    scene.push_text(&rule, Color::Default);

    scene.push_text(&format!("{TAB}Time to next record:"), Color::Default);
    for (score, best) in view.records.upcoming(view.score, RECORDS_AHEAD) {
        let delta = best - view.game_time;
        scene.push_text(
            &format!("{TAB}{TAB}[{score}] {}", format_game_time(delta, 3)),
            delta_color(delta),
        );
    }

    scene
}

fn play_screen(view: &SnakeView) -> Scene {
    let mut scene = Scene::new();
    scene.push_row(header_row(view));
    scene.push_row(vec![
        Pixel::new(Symbol::Square, Color::Default);
        view.grid.cols()
    ]);

    for row in view.grid.iter_rows() {
        scene.push_row(row.iter().map(|&v| field_pixel(v, view)).collect());
    }
    scene
}

fn header_row(view: &SnakeView) -> Vec<Pixel> {
    let mut row = text_pixels(&format!("SCORE: {} x ", view.score), Color::Default);
    row.push(Pixel::new(Symbol::Apple, Color::Yellow));
    row.extend(text_pixels(
        &format!("    SNAKE LENGTH: {} x ", view.realized_len),
        Color::Default,
    ));
    row.push(Pixel::new(Symbol::Circle, Color::Green));
    row.extend(text_pixels(
        &format!(
            "    SPEED: {}    TIME: {}    beat: ",
            view.speed,
            format_game_time(view.game_time, 2)
        ),
        Color::Default,
    ));
    match view.time_to_beat() {
        Some(delta) => row.extend(text_pixels(
            &format_game_time(delta, 2),
            delta_color(delta),
        )),
        None => row.push(Pixel::text('*', Color::Default)),
    }
    row
}

fn field_pixel(value: i32, view: &SnakeView) -> Pixel {
    if value > 0 {
        if value == view.potential_len as i32 {
            Pixel::new(Symbol::Head, Color::Green)
        } else {
            Pixel::new(Symbol::Circle, Color::Green)
        }
    } else if value == APPLE {
        Pixel::new(Symbol::Apple, Color::Red)
    } else {
        Pixel::new(Symbol::Space, Color::Black)
    }
}
