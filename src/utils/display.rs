//! Terminal rendering and output formatting utilities

use crate::automaton::Grid;
use anyhow::Result;
use std::io::Write;

/// Passive collaborator that receives each generation as it is produced.
///
/// The simulation loop owns iteration and timing; a renderer only draws the
/// grid it is handed.
pub trait Renderer {
    fn frame(&mut self, grid: &Grid, generation: usize) -> Result<()>;
}

/// Draws the grid in the terminal, redrawing in place between frames
pub struct TerminalRenderer {
    color: bool,
    frames_drawn: usize,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            color: color && ColorOutput::supports_color(),
            frames_drawn: 0,
        }
    }

    fn cell_symbols(&self) -> (&'static str, &'static str) {
        if self.color {
            ("\x1b[32m██\x1b[0m", "\x1b[90m··\x1b[0m")
        } else {
            ("██", "··")
        }
    }
}

impl Renderer for TerminalRenderer {
    fn frame(&mut self, grid: &Grid, generation: usize) -> Result<()> {
        let (alive, dead) = self.cell_symbols();
        let mut out = String::with_capacity(grid.height * (grid.width * 2 + 1) + 64);

        // Move the cursor back over the previous frame instead of clearing
        // the whole screen
        if self.frames_drawn > 0 {
            out.push_str(&format!("\x1b[{}A", grid.height + 1));
        }

        for row in 0..grid.height {
            for col in 0..grid.width {
                out.push_str(if grid.get(row, col) { alive } else { dead });
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "Generation {:>4} | living {:>5} ({:>5.1}%)\n",
            generation,
            grid.living_count(),
            grid.density() * 100.0
        ));

        let mut stdout = std::io::stdout();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;

        self.frames_drawn += 1;
        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
