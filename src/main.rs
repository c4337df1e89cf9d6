use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use ayat::kernel::services::adapters::{
    ensure_settings_file, exporter_for, get_settings_path, load_settings, CorpusCache,
    DirChapterSource, SettingsError,
};
use ayat::kernel::services::ports::{CorpusLoadError, EmptyCorpusError, ExportError, Settings};
use ayat::{search, stats, Corpus, CorpusScope};

mod cli;
mod logging;
mod render;

use cli::{parse_args, Cli, Command, USAGE};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no corpus directory: pass --corpus DIR or set corpus_dir in settings")]
    NoCorpusDir,
    #[error("verse {number} is out of range for chapter {chapter} (1..={max})")]
    VerseOutOfRange { chapter: u32, number: u32, max: u32 },
    #[error(transparent)]
    Load(#[from] CorpusLoadError),
    #[error(transparent)]
    Empty(#[from] EmptyCorpusError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An explicit `--settings` file is read as-is; the default location gets a
/// defaults file on first run.
fn resolve_settings(cli: &Cli) -> Result<Settings, SettingsError> {
    let path = match &cli.settings {
        Some(path) => path.clone(),
        None => {
            let Some(path) = get_settings_path() else {
                return Ok(Settings::default());
            };
            if let Err(e) = ensure_settings_file(&path) {
                tracing::warn!(error = %e, "could not write default settings");
            }
            path
        }
    };
    Ok(load_settings(&path)?.unwrap_or_default())
}

fn report_warnings(corpus: &Corpus) {
    for warning in corpus.warnings() {
        eprintln!("warning: {}", warning);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let settings = resolve_settings(&cli)?;
    let color = settings.color && !cli.no_color;
    let corpus_dir: PathBuf = cli
        .corpus
        .clone()
        .or_else(|| settings.corpus_dir.clone())
        .ok_or(CliError::NoCorpusDir)?;
    let mut cache = CorpusCache::new(DirChapterSource::new(corpus_dir));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Search {
            mode,
            query,
            chapter,
            export,
        } => {
            let mode = mode.unwrap_or(settings.default_mode);
            let scope = chapter.map_or(CorpusScope::Whole, CorpusScope::Chapter);
            let corpus = cache.get_or_load(scope)?;
            report_warnings(&corpus);

            let hits = search(&corpus, &query, mode);
            tracing::info!(mode = %mode, scope = %scope, hits = hits.len(), "search");

            if let Some(format) = export {
                exporter_for(format).export(&hits, &mut out)?;
            } else {
                writeln!(out, "{} result(s)", hits.len())?;
                for hit in &hits {
                    writeln!(out, "{}", render::hit(hit, mode, color))?;
                }
            }
        }
        Command::Verse { chapter, number } => {
            let corpus = cache.get_or_load(CorpusScope::Chapter(chapter))?;
            report_warnings(&corpus);
            let max = corpus.max_verse_number()?;
            let verse = corpus
                .verse(chapter, number)
                .filter(|_| number <= max)
                .ok_or(CliError::VerseOutOfRange {
                    chapter,
                    number,
                    max,
                })?;
            writeln!(out, "{}", render::plain_verse(verse))?;
        }
        Command::Chapter { id } => {
            let corpus = cache.get_or_load(CorpusScope::Chapter(id))?;
            report_warnings(&corpus);
            for verse in corpus.chapter_verses(id) {
                writeln!(out, "{}", render::plain_verse(verse))?;
            }
        }
        Command::Stats => {
            let corpus = cache.get_or_load(CorpusScope::Whole)?;
            report_warnings(&corpus);
            writeln!(out, "{}", render::stats_table(&stats(&corpus)))?;
        }
        Command::Help => writeln!(out, "{}", USAGE)?,
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let _logging = logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
