//! Command-line argument handling.

use thiserror::Error;

use crate::batch::BatchRequest;
use crate::config::Config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub help: bool,
    pub version: bool,
    pub endpoint: Option<String>,
    pub show: Option<String>,
    pub flat: bool,
    pub unsorted: bool,
    /// Positional words joined with single spaces.
    pub query: Option<String>,
}

impl CliArgs {
    /// Apply flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.dataset.endpoint = endpoint.clone();
        }
        if self.flat {
            config.browser.group_by_letter = false;
        }
        if self.unsorted {
            config.browser.sort_names = false;
        }
    }

    /// A one-shot request if the arguments ask for one.
    pub fn batch_request(&self) -> Option<BatchRequest> {
        if self.query.is_none() && self.show.is_none() {
            return None;
        }
        Some(BatchRequest {
            query: self.query.clone(),
            show: self.show.clone(),
        })
    }
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut words: Vec<String> = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--version" | "-V" => parsed.version = true,
            "--flat" => parsed.flat = true,
            "--unsorted" => parsed.unsorted = true,
            "--endpoint" => {
                parsed.endpoint = Some(args.next().ok_or(CliError::MissingValue("--endpoint"))?);
            }
            "--show" => {
                parsed.show = Some(args.next().ok_or(CliError::MissingValue("--show"))?);
            }
            "--" => words.extend(args.by_ref()),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(CliError::UnknownOption(other.to_string()));
            }
            _ => words.push(arg),
        }
    }

    if !words.is_empty() {
        parsed.query = Some(words.join(" "));
    }
    Ok(parsed)
}

pub fn help_text() -> String {
    [
        "countrybrowser: search and inspect the restcountries dataset",
        "",
        "Usage:",
        "  countrybrowser                      Interactive mode",
        "  countrybrowser QUERY...             Print countries matching QUERY",
        "  countrybrowser --show NAME          Print details for NAME",
        "  echo QUERY | countrybrowser         One-shot mode via stdin pipe",
        "",
        "Options:",
        "  --endpoint URL   Fetch the dataset from URL",
        "  --flat           List names without letter sections",
        "  --unsorted       Keep dataset order instead of sorting names",
        "  --version        Print version",
        "  --help           Print this help",
        "",
        "Environment:",
        "  COUNTRYBROWSER_LOG   tracing filter for diagnostics (e.g. debug)",
        "  NO_COLOR             disable colored output",
    ]
    .join("\n")
}
