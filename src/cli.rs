//! Command-line parsing.

use std::path::PathBuf;

use ayat::kernel::services::ports::ExportFormat;
use ayat::MatchMode;

pub const USAGE: &str = "\
usage: ayat [--corpus DIR] [--settings FILE] [--no-color] <command>

commands:
  search [--mode any|count|exact] [--chapter N] [--export json|tsv] <query...>
  verse <chapter> <number>
  chapter <id>
  stats
  help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search {
        mode: Option<MatchMode>,
        query: String,
        chapter: Option<u32>,
        export: Option<ExportFormat>,
    },
    Verse {
        chapter: u32,
        number: u32,
    },
    Chapter {
        id: u32,
    },
    Stats,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub corpus: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub no_color: bool,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

fn usage(msg: impl Into<String>) -> UsageError {
    UsageError(msg.into())
}

fn take_value<'a, I>(flag: &str, rest: &mut I) -> Result<&'a str, UsageError>
where
    I: Iterator<Item = &'a String>,
{
    rest.next()
        .map(String::as_str)
        .ok_or_else(|| usage(format!("{} needs a value", flag)))
}

fn parse_number(what: &str, raw: &str) -> Result<u32, UsageError> {
    raw.parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| usage(format!("{} must be a positive number, got {:?}", what, raw)))
}

/// `args` excludes the program name.
pub fn parse_args(args: &[String]) -> Result<Cli, UsageError> {
    let mut corpus = None;
    let mut settings = None;
    let mut no_color = false;

    let mut iter = args.iter();
    let command_name = loop {
        let Some(arg) = iter.next() else {
            return Ok(Cli {
                corpus,
                settings,
                no_color,
                command: Command::Help,
            });
        };
        match arg.as_str() {
            "--corpus" => corpus = Some(PathBuf::from(take_value("--corpus", &mut iter)?)),
            "--settings" => settings = Some(PathBuf::from(take_value("--settings", &mut iter)?)),
            "--no-color" => no_color = true,
            "-h" | "--help" => break "help",
            other if other.starts_with("--") => {
                return Err(usage(format!("unknown option {}", other)))
            }
            other => break other,
        }
    };

    let command = match command_name {
        "search" => parse_search(&mut iter)?,
        "verse" => {
            let chapter = iter.next().ok_or_else(|| usage("verse needs <chapter> <number>"))?;
            let number = iter.next().ok_or_else(|| usage("verse needs <chapter> <number>"))?;
            Command::Verse {
                chapter: parse_number("chapter", chapter)?,
                number: parse_number("verse number", number)?,
            }
        }
        "chapter" => {
            let id = iter.next().ok_or_else(|| usage("chapter needs <id>"))?;
            Command::Chapter {
                id: parse_number("chapter", id)?,
            }
        }
        "stats" => Command::Stats,
        "help" => Command::Help,
        other => return Err(usage(format!("unknown command {}", other))),
    };

    if let Some(extra) = iter.next() {
        return Err(usage(format!("unexpected argument {}", extra)));
    }

    Ok(Cli {
        corpus,
        settings,
        no_color,
        command,
    })
}

fn parse_search<'a, I>(iter: &mut I) -> Result<Command, UsageError>
where
    I: Iterator<Item = &'a String>,
{
    let mut mode = None;
    let mut chapter = None;
    let mut export = None;
    let mut words: Vec<&str> = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--mode" => {
                let raw = take_value("--mode", iter)?;
                mode = Some(
                    MatchMode::from_name(raw)
                        .ok_or_else(|| usage(format!("unknown mode {}", raw)))?,
                );
            }
            "--chapter" => chapter = Some(parse_number("chapter", take_value("--chapter", iter)?)?),
            "--export" => {
                let raw = take_value("--export", iter)?;
                export = Some(
                    ExportFormat::from_name(raw)
                        .ok_or_else(|| usage(format!("unknown export format {}", raw)))?,
                );
            }
            other if other.starts_with("--") => {
                return Err(usage(format!("unknown search option {}", other)))
            }
            word => words.push(word),
        }
    }

    Ok(Command::Search {
        mode,
        query: words.join(" "),
        chapter,
        export,
    })
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
