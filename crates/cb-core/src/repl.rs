//! Interactive line-oriented session.
//!
//! Each input line is one intent: plain text searches, `:`-prefixed lines
//! are commands. The dataset is loaded before the first prompt.

use std::io::{self, BufRead, Write};

use tokio::runtime::Handle;
use tracing::debug;

use cb_backend::DatasetSource;

use crate::browser::{BrowserOptions, CountryBrowser};
use crate::renderer::BrowserRenderer;

/// Which entry `:open` refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 1-based position in the displayed list.
    Number(usize),
    /// Exact common name.
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Search(String),
    Open(Selection),
    Clear,
    Help,
    Quit,
    /// Empty line: show the current results again.
    Refresh,
    Unknown(String),
}

/// Parse one input line.
pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Refresh;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return ReplCommand::Search(line.to_string());
    };

    let (cmd, arg) = match rest.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (rest, ""),
    };

    match (cmd, arg) {
        ("q" | "quit" | "exit", "") => ReplCommand::Quit,
        ("clear" | "c", "") => ReplCommand::Clear,
        ("help" | "h" | "?", "") => ReplCommand::Help,
        ("open" | "o", arg) if !arg.is_empty() => match arg.parse::<usize>() {
            Ok(n) => ReplCommand::Open(Selection::Number(n)),
            Err(_) => ReplCommand::Open(Selection::Name(arg.to_string())),
        },
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

/// Drive the session over `input` until EOF or `:quit`.
pub fn run_session<R: BufRead, W: Write>(
    browser: &mut CountryBrowser,
    input: R,
    renderer: &mut BrowserRenderer<W>,
) -> io::Result<()> {
    renderer.emit_results(browser)?;
    renderer.emit_prompt(browser.query())?;

    for line in input.lines() {
        let command = parse_command(&line?);
        debug!(?command, "repl command");

        match command {
            ReplCommand::Quit => return Ok(()),
            ReplCommand::Search(text) => {
                browser.submit_query(&text);
                renderer.emit_results(browser)?;
            }
            ReplCommand::Clear => {
                browser.clear_query();
                renderer.emit_results(browser)?;
            }
            ReplCommand::Refresh => renderer.emit_results(browser)?,
            ReplCommand::Help => renderer.emit_help()?,
            ReplCommand::Open(Selection::Number(n)) => match browser.entry(n) {
                Some(name) => {
                    let detail = browser.select(name);
                    renderer.emit_detail(&detail)?;
                }
                None => renderer.emit_error(&format!("no result #{n}"))?,
            },
            ReplCommand::Open(Selection::Name(name)) => {
                let detail = browser.select(&name);
                renderer.emit_detail(&detail)?;
            }
            ReplCommand::Unknown(text) => {
                renderer.emit_error(&format!("unknown command: {text} (try :help)"))?;
            }
        }

        renderer.emit_prompt(browser.query())?;
    }

    Ok(())
}

/// Load the dataset on `rt_handle`, then run the session on stdin/stdout.
pub fn run_repl<S: DatasetSource>(
    source: &S,
    options: BrowserOptions,
    rt_handle: &Handle,
    renderer: &mut BrowserRenderer<impl Write>,
) -> io::Result<()> {
    renderer.emit_loading()?;
    let mut browser = rt_handle.block_on(CountryBrowser::load(source, options));

    let stdin = io::stdin();
    run_session(&mut browser, stdin.lock(), renderer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_search() {
        assert_eq!(parse_command("ger\n"), ReplCommand::Search("ger".to_string()));
        assert_eq!(
            parse_command("  new zealand "),
            ReplCommand::Search("new zealand".to_string())
        );
    }

    #[test]
    fn empty_line_is_refresh() {
        assert_eq!(parse_command(""), ReplCommand::Refresh);
        assert_eq!(parse_command("   \n"), ReplCommand::Refresh);
    }

    #[test]
    fn quit_aliases() {
        assert_eq!(parse_command(":q"), ReplCommand::Quit);
        assert_eq!(parse_command(":quit"), ReplCommand::Quit);
        assert_eq!(parse_command(":exit"), ReplCommand::Quit);
    }

    #[test]
    fn open_by_number() {
        assert_eq!(
            parse_command(":open 3"),
            ReplCommand::Open(Selection::Number(3))
        );
        assert_eq!(parse_command(":o 12"), ReplCommand::Open(Selection::Number(12)));
    }

    #[test]
    fn open_by_name_keeps_spaces_and_case() {
        assert_eq!(
            parse_command(":open United Kingdom"),
            ReplCommand::Open(Selection::Name("United Kingdom".to_string()))
        );
        assert_eq!(
            parse_command(":open  canada "),
            ReplCommand::Open(Selection::Name("canada".to_string()))
        );
    }

    #[test]
    fn open_without_argument_is_unknown() {
        assert_eq!(parse_command(":open"), ReplCommand::Unknown(":open".to_string()));
    }

    #[test]
    fn clear_and_help() {
        assert_eq!(parse_command(":clear"), ReplCommand::Clear);
        assert_eq!(parse_command(":help"), ReplCommand::Help);
        assert_eq!(parse_command(":?"), ReplCommand::Help);
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_command(":frobnicate"),
            ReplCommand::Unknown(":frobnicate".to_string())
        );
        assert_eq!(
            parse_command(":quit now"),
            ReplCommand::Unknown(":quit now".to_string())
        );
    }
}
