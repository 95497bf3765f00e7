//! Testable terminal output for the browser.
//!
//! `BrowserRenderer<W: Write>` centralizes all result formatting for both
//! the interactive session and one-shot mode. Callers hand it projections
//! from the view-model and never write to the terminal themselves.

use std::io::{self, Write};

use crate::browser::CountryBrowser;
use crate::detail::CountryDetail;
use crate::style::{truncate_to_width, visible_width, Style};

/// Widest label in the detail panel, used to align values.
const LABEL_WIDTH: usize = 13;

pub struct BrowserRenderer<W: Write> {
    pub writer: W,
    style: Style,
    term_width: u16,
}

impl<W: Write> BrowserRenderer<W> {
    pub fn new(writer: W, style: Style) -> Self {
        let term_width = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(80);
        Self {
            writer,
            style,
            term_width,
        }
    }

    pub fn new_with_width(writer: W, style: Style, width: u16) -> Self {
        Self {
            writer,
            style,
            term_width: width,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Shown while the one dataset fetch is in flight.
    pub fn emit_loading(&mut self) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}loading countries...{}",
            self.style.dim_start(),
            self.style.reset()
        )?;
        self.writer.flush()
    }

    /// Render the current result list: sections or a flat numbered list.
    pub fn emit_results(&mut self, browser: &CountryBrowser) -> io::Result<()> {
        let s = self.style;
        let results = browser.results();

        if browser.query().is_empty() {
            writeln!(
                self.writer,
                "{}Countries{} {}({}){}",
                s.bold_start(),
                s.reset(),
                s.dim_start(),
                results.len(),
                s.reset()
            )?;
        } else {
            writeln!(
                self.writer,
                "{}Countries{} {}matching \"{}\" ({}){}",
                s.bold_start(),
                s.reset(),
                s.dim_start(),
                browser.query(),
                results.len(),
                s.reset()
            )?;
        }

        if browser.is_empty() {
            writeln!(
                self.writer,
                "{}No countries loaded.{}",
                s.dim_start(),
                s.reset()
            )?;
            return self.writer.flush();
        }

        if results.is_empty() {
            writeln!(self.writer, "{}No matches.{}", s.dim_start(), s.reset())?;
            return self.writer.flush();
        }

        let number_width = results.len().to_string().len();
        let mut number = 0;

        if browser.options().group_by_letter {
            for section in browser.sections() {
                writeln!(self.writer)?;
                writeln!(self.writer, "{}{}{}", s.bold_start(), section.letter, s.reset())?;
                for name in section.names {
                    number += 1;
                    self.write_entry(number, number_width, name)?;
                }
            }
        } else {
            writeln!(self.writer)?;
            for name in results {
                number += 1;
                self.write_entry(number, number_width, name)?;
            }
        }

        self.writer.flush()
    }

    fn write_entry(&mut self, number: usize, width: usize, name: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "  {}{number:>width$}.{} {name}",
            self.style.cyan_start(),
            self.style.reset()
        )
    }

    /// Render a boxed detail panel.
    pub fn emit_detail(&mut self, detail: &CountryDetail) -> io::Result<()> {
        let s = self.style;
        // "│ " + label + " " + value + " │"
        let max_value = (self.term_width as usize).saturating_sub(LABEL_WIDTH + 5);

        let rows: Vec<(&str, String)> = detail
            .rows()
            .iter()
            .map(|(label, value)| (*label, truncate_to_width(value, max_value)))
            .collect();
        let title = truncate_to_width(&detail.title, max_value + LABEL_WIDTH + 1);

        let inner = rows
            .iter()
            .map(|(_, value)| LABEL_WIDTH + 1 + visible_width(value))
            .chain(std::iter::once(visible_width(&title)))
            .max()
            .unwrap_or(0);
        let rule = "─".repeat(inner + 2);

        writeln!(self.writer, "╭{rule}╮")?;
        writeln!(
            self.writer,
            "│ {}{}{}{} │",
            s.bold_start(),
            title,
            s.reset(),
            pad(inner - visible_width(&title))
        )?;
        writeln!(self.writer, "├{rule}┤")?;
        for (label, value) in &rows {
            let used = LABEL_WIDTH + 1 + visible_width(value);
            writeln!(
                self.writer,
                "│ {}{label:<LABEL_WIDTH$}{} {value}{} │",
                s.dim_start(),
                s.reset(),
                pad(inner - used)
            )?;
        }
        writeln!(self.writer, "╰{rule}╯")?;

        if !detail.found {
            writeln!(
                self.writer,
                "{}no record named \"{}\"{}",
                s.yellow_start(),
                detail.title,
                s.reset()
            )?;
        }
        self.writer.flush()
    }

    pub fn emit_prompt(&mut self, query: &str) -> io::Result<()> {
        if query.is_empty() {
            write!(self.writer, "{}search>{} ", self.style.cyan_start(), self.style.reset())?;
        } else {
            write!(
                self.writer,
                "{}search [{query}]>{} ",
                self.style.cyan_start(),
                self.style.reset()
            )?;
        }
        self.writer.flush()
    }

    pub fn emit_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}error:{} {message}",
            self.style.red_start(),
            self.style.reset()
        )?;
        self.writer.flush()
    }

    pub fn emit_help(&mut self) -> io::Result<()> {
        let s = self.style;
        writeln!(self.writer, "{}Commands{}", s.bold_start(), s.reset())?;
        for (cmd, what) in [
            ("<text>", "filter countries by name"),
            (":open <n>", "show details for result number n"),
            (":open <name>", "show details for an exact name"),
            (":clear", "clear the search"),
            (":help", "show this help"),
            (":quit", "exit"),
        ] {
            writeln!(self.writer, "  {cmd:<14}{}{what}{}", s.dim_start(), s.reset())?;
        }
        self.writer.flush()
    }
}

fn pad(n: usize) -> String {
    " ".repeat(n)
}
