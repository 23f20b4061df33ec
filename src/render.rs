//! Terminal rendering: panels, rules and box-drawn tables. Pure sink, holds
//! no state that affects the session's decisions.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::CardexError;

const RULE_WIDTH: usize = 72;

pub struct Printer<W: Write> {
    out: W,
    color: bool,
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Printer::new(io::stdout(), true)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Printer { out, color }
    }

    /// Uncolored output, used by tests and dumb terminals.
    pub fn plain(out: W) -> Self {
        Printer::new(out, false)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn line(&mut self, text: &str) -> Result<(), CardexError> {
        writeln!(self.out, "{text}").map_err(CardexError::Presentation)
    }

    /// Write `text` without a trailing newline and flush, so the cursor sits
    /// after the prompt while the session blocks on input.
    pub fn prompt(&mut self, text: &str) -> Result<(), CardexError> {
        write!(self.out, "{text}").map_err(CardexError::Presentation)?;
        self.out.flush().map_err(CardexError::Presentation)
    }

    /// User-facing warning, red when color is on.
    pub fn notice(&mut self, text: &str) -> Result<(), CardexError> {
        if self.color {
            writeln!(self.out, "{}", text.red()).map_err(CardexError::Presentation)
        } else {
            self.line(text)
        }
    }

    pub fn rule(&mut self, title: &str) -> Result<(), CardexError> {
        let label = format!("── {title} ");
        let fill = "─".repeat(RULE_WIDTH.saturating_sub(label.chars().count()));
        let text = format!("{label}{fill}");
        if self.color {
            writeln!(self.out, "{}", text.cyan()).map_err(CardexError::Presentation)
        } else {
            self.line(&text)
        }
    }

    /// Titled block of text with a rounded border.
    pub fn panel(&mut self, title: &str, body: &str) -> Result<(), CardexError> {
        let lines: Vec<&str> = body.lines().collect();
        let inner = lines
            .iter()
            .map(|l| l.chars().count())
            .chain([title.chars().count() + 2])
            .max()
            .unwrap_or(0);

        let top_fill = "─".repeat(inner.saturating_sub(title.chars().count() + 1));
        self.line(&format!("╭─ {} {top_fill}╮", self.painted_title(title)))?;
        for line in lines {
            let pad = " ".repeat(inner.saturating_sub(line.chars().count()));
            self.line(&format!("│ {line}{pad} │"))?;
        }
        self.line(&format!("╰{}╯", "─".repeat(inner + 2)))
    }

    /// Box-drawn table with a title rule above it.
    pub fn table(
        &mut self,
        title: &str,
        headers: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), CardexError> {
        self.rule(title)?;
        if headers.is_empty() {
            return Ok(());
        }

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (idx, cell) in row.iter().enumerate().take(widths.len()) {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }

        self.table_border(&widths, "┌", "┬", "┐")?;
        let header_cells: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| self.painted_header(h, *w))
            .collect();
        self.line(&format!("│ {} │", header_cells.join(" │ ")))?;
        self.table_border(&widths, "├", "┼", "┤")?;
        for row in rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:<width$}", width = *w))
                .collect();
            self.line(&format!("│ {} │", cells.join(" │ ")))?;
        }
        self.table_border(&widths, "└", "┴", "┘")
    }

    /// Wipe the terminal and move the cursor home. No data side effect.
    pub fn clear(&mut self) -> Result<(), CardexError> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)).map_err(CardexError::Presentation)
    }

    pub fn flush(&mut self) -> Result<(), CardexError> {
        self.out.flush().map_err(CardexError::Presentation)
    }

    fn table_border(
        &mut self,
        widths: &[usize],
        left: &str,
        mid: &str,
        right: &str,
    ) -> Result<(), CardexError> {
        let spans: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        self.line(&format!("{left}{}{right}", spans.join(mid)))
    }

    fn painted_title(&self, title: &str) -> String {
        if self.color {
            format!("{}", title.bold().cyan())
        } else {
            title.to_string()
        }
    }

    fn painted_header(&self, header: &str, width: usize) -> String {
        let padded = format!("{header:<width$}");
        if self.color {
            format!("{}", padded.green())
        } else {
            padded
        }
    }
}
