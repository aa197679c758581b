//! # Display Management
//!
//! Plain-text frame rendering. The frame is built from the read-only view the
//! map exposes ([`GameMap::tile_appearance`] and
//! [`GameMap::renderable_entities`]), so rendering never changes game state.

use crate::rendering::StatusPanel;
use crate::{GameMap, GameState, Position, Rgb, TileAppearance};
use std::fmt::Write;

/// Text display for the game.
///
/// Draws a viewport of the current floor that follows the player, with the
/// status panel and recent messages underneath.
#[derive(Debug, Clone)]
pub struct TextDisplay {
    /// Viewport width in cells
    pub viewport_width: i32,
    /// Viewport height in cells
    pub viewport_height: i32,
    /// Map coordinate of the viewport's left column
    pub viewport_x: i32,
    /// Map coordinate of the viewport's top row
    pub viewport_y: i32,
    /// Emit 24-bit ANSI colour escapes
    pub use_color: bool,
    /// Messages shown under the map
    pub message_lines: usize,
    pub panel: StatusPanel,
}

impl TextDisplay {
    /// Creates a display with the given viewport size.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{GameConfig, GameState, TextDisplay};
    ///
    /// let game = GameState::new(&GameConfig::default(), 5).unwrap();
    /// let mut display = TextDisplay::new(40, 15);
    /// let frame = display.render_game(&game);
    /// assert!(frame.contains('@'));
    /// ```
    pub fn new(viewport_width: i32, viewport_height: i32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            viewport_x: 0,
            viewport_y: 0,
            use_color: false,
            message_lines: 5,
            panel: StatusPanel::default(),
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn center_viewport_on_position(&mut self, position: Position) {
        self.viewport_x = position.x - (self.viewport_width / 2);
        self.viewport_y = position.y - (self.viewport_height / 2);
    }

    /// Renders the complete frame: map, status panel and messages.
    pub fn render_game(&mut self, game_state: &GameState) -> String {
        if let Some(pos) = game_state.player_position() {
            self.center_viewport_on_position(pos);
        }

        let mut frame = String::new();
        for line in self.render_map(&game_state.game_map) {
            frame.push_str(&line);
            frame.push('\n');
        }
        for line in self.panel.render(game_state) {
            frame.push_str(&line);
            frame.push('\n');
        }
        for line in self.panel.message_lines(&game_state.message_log, self.message_lines) {
            frame.push_str(&line);
            frame.push('\n');
        }
        frame
    }

    /// One string per viewport row. Unseen cells are blank.
    pub fn render_map(&self, map: &GameMap) -> Vec<String> {
        let width = self.viewport_width.max(0) as usize;
        let height = self.viewport_height.max(0) as usize;
        let mut cells = vec![vec![Cell::BLANK; width]; height];

        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                let pos = Position::new(self.viewport_x + col as i32, self.viewport_y + row as i32);
                *cell = match map.tile_appearance(pos) {
                    TileAppearance::Light(glyph) | TileAppearance::Dark(glyph) => Cell {
                        ch: glyph.ch,
                        fg: Some(glyph.fg),
                        bg: Some(glyph.bg),
                    },
                    TileAppearance::Unseen => Cell::BLANK,
                };
            }
        }

        // Later entities draw over earlier ones, so actors end up on top.
        // The tile background stays underneath.
        for entity in map.renderable_entities() {
            if let Some((col, row)) = self.to_screen(entity.position) {
                let cell = &mut cells[row][col];
                cell.ch = entity.glyph;
                cell.fg = Some(entity.color);
            }
        }

        cells
            .into_iter()
            .map(|line| self.paint_line(&line))
            .collect()
    }

    fn to_screen(&self, pos: Position) -> Option<(usize, usize)> {
        let col = pos.x - self.viewport_x;
        let row = pos.y - self.viewport_y;
        (col >= 0 && row >= 0 && col < self.viewport_width && row < self.viewport_height)
            .then_some((col as usize, row as usize))
    }

    fn paint_line(&self, line: &[Cell]) -> String {
        if !self.use_color {
            let text: String = line.iter().map(|cell| cell.ch).collect();
            return text.trim_end().to_string();
        }
        let mut out = String::new();
        for cell in line {
            match (cell.fg, cell.bg) {
                (Some(Rgb(r, g, b)), Some(Rgb(br, bg, bb))) => {
                    let _ = write!(out, "\x1b[38;2;{r};{g};{b};48;2;{br};{bg};{bb}m{}", cell.ch);
                }
                (Some(Rgb(r, g, b)), None) => {
                    let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{}", cell.ch);
                }
                _ => {
                    out.push_str("\x1b[0m");
                    out.push(cell.ch);
                }
            }
        }
        out.push_str("\x1b[0m");
        out
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: None,
        bg: None,
    };
}
