use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use nameday_core::config::{DATA_ENV, DEFAULT_LOG_DIRECTIVE, DEFAULT_SEARCH_LIMIT, LOG_ENV};
use nameday_core::{transliterate, NameDayRecord, NameDays, NameMatch};
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nameday", about = "Bulgarian name days, looked up in Cyrillic or Latin")]
struct Cli {
    /// JSON dataset to use instead of the built-in calendar
    #[arg(long, env = DATA_ENV, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text between Cyrillic and Latin
    Translit {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// When does a name celebrate
    Name { name: String },
    /// Who celebrates on a date (MM-DD)
    Date { key: String },
    /// Who celebrates today
    Today,
    /// Names starting with a prefix, in either script
    Search {
        query: String,
        /// Maximum number of hits (0 = unlimited)
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// The whole calendar
    All,
    /// Search as you type, one query per line
    Interactive {
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dataset(path: Option<&PathBuf>) -> nameday_core::Result<Cow<'static, NameDays>> {
    match path {
        Some(path) => {
            tracing::info!("loading name days from {}", path.display());
            Ok(Cow::Owned(NameDays::from_path(path)?))
        }
        None => Ok(Cow::Borrowed(NameDays::builtin())),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("nameday: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether anything was found.
fn run(cli: &Cli) -> Result<bool, Box<dyn Error>> {
    let load = || load_dataset(cli.data.as_ref());
    let found = match &cli.command {
        Command::Translit { text } => {
            let converted = transliterate(&text.join(" "));
            emit(cli.json, &converted, |out| writeln!(out, "{converted}"))?;
            true
        }
        Command::Name { name } => {
            print_record(cli.json, load()?.name_day(name), "no name day found")?
        }
        Command::Date { key } => {
            print_record(cli.json, load()?.names_by_date(key), "nobody celebrates on that date")?
        }
        Command::Today => print_record(cli.json, load()?.today(), "nobody celebrates today")?,
        Command::Search { query, limit } => {
            let hits = limited(load()?.search(query), *limit);
            emit(cli.json, &hits, |out| print_matches(out, &hits))?;
            !hits.is_empty()
        }
        Command::All => {
            let all = load()?.all();
            emit(cli.json, &all, |out| {
                for (date, entry) in &all {
                    writeln!(
                        out,
                        "{}  {} {}",
                        date.as_str().bold(),
                        entry.holiday,
                        format!("({} names)", entry.names.len()).dim()
                    )?;
                }
                Ok(())
            })?;
            !all.is_empty()
        }
        Command::Interactive { limit } => {
            let days = load()?;
            interactive(&days, *limit)?;
            true
        }
    };
    Ok(found)
}

fn limited(mut hits: Vec<NameMatch>, limit: usize) -> Vec<NameMatch> {
    if limit > 0 {
        hits.truncate(limit);
    }
    hits
}

/// Writes `value` as JSON, or runs `text` against stdout.
fn emit<T, F>(json: bool, value: &T, text: F) -> io::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>,
{
    let mut out = io::stdout().lock();
    if json {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(out, "{rendered}")?;
    } else {
        text(&mut out)?;
    }
    out.flush()
}

fn print_record(json: bool, record: Option<NameDayRecord>, missing: &str) -> io::Result<bool> {
    let found = record.is_some();
    emit(json, &record, |out| match &record {
        Some(record) => {
            writeln!(out, "{}  {}", record.date.as_str().bold(), record.holiday.as_str().dim())?;
            for name in &record.names {
                writeln!(out, "  {} ({})", name.as_str().bold(), transliterate(name))?;
            }
            Ok(())
        }
        None => writeln!(out, "{missing}"),
    })?;
    Ok(found)
}

fn print_matches(out: &mut impl Write, hits: &[NameMatch]) -> io::Result<()> {
    if hits.is_empty() {
        return writeln!(out, "no matching names");
    }
    for hit in hits {
        writeln!(
            out,
            "  {} ({})  {} {}",
            hit.name.as_str().bold(),
            transliterate(&hit.name),
            hit.date,
            hit.holiday.as_str().dim()
        )?;
    }
    Ok(())
}

fn interactive(days: &NameDays, limit: usize) -> io::Result<()> {
    println!("Bulgarian name days. Type a name in Cyrillic or Latin, 'exit' to quit.");
    println!("---------------------------------------------------------------");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let input = line?;
        let query = input.trim();
        match query {
            "exit" => break,
            "" => {}
            q => {
                println!("Transliteration -> {}", transliterate(q));
                let hits = limited(days.search(q), limit);
                print_matches(&mut io::stdout().lock(), &hits)?;
            }
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("\n> ");
    io::stdout().flush()
}
