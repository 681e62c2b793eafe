use std::fmt;

use chrono::{Duration, Local, NaiveDate};
use storage::repository::Storage;
use tracker_core::LESSON_CAPACITY;
use tracker_core::model::{LessonColor, LessonDraft, parse_lesson_date};

#[derive(Debug, Clone)]
struct Args {
    data_path: String,
    count: usize,
    start: Option<NaiveDate>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidStart { raw: String },
    InvalidDataPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => {
                write!(f, "invalid --count value (expected 0..={LESSON_CAPACITY}): {raw}")
            }
            ArgsError::InvalidStart { raw } => {
                write!(f, "invalid --start value (expected YYYY-MM-DD): {raw}")
            }
            ArgsError::InvalidDataPath { raw } => write!(f, "invalid --data value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut data_path =
            std::env::var("LEARN_LESSONS_FILE").unwrap_or_else(|_| "lessons.csv".into());
        let mut count = 12;
        let mut start = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = require_value(&mut args, "--data")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataPath { raw: value });
                    }
                    data_path = value;
                }
                "--count" => {
                    let value = require_value(&mut args, "--count")?;
                    count = value
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n <= LESSON_CAPACITY)
                        .ok_or_else(|| ArgsError::InvalidCount { raw: value.clone() })?;
                }
                "--start" => {
                    let value = require_value(&mut args, "--start")?;
                    let parsed = parse_lesson_date(&value)
                        .map_err(|_| ArgsError::InvalidStart { raw: value.clone() })?;
                    start = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            data_path,
            count,
            start,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data <path>             Lessons CSV file (default: lessons.csv)");
    eprintln!("  --count <n>               Lessons to append, at most {LESSON_CAPACITY} (default: 12)");
    eprintln!("  --start <YYYY-MM-DD>      Date of the first seeded lesson (default: today)");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  LEARN_LESSONS_FILE");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::csv(&args.data_path);
    let start = args.start.unwrap_or_else(|| Local::now().date_naive());
    let existing = storage.lessons.load_lessons().await?.len();
    let to_add = args.count.min(LESSON_CAPACITY.saturating_sub(existing));

    let samples = [
        ("Marie", "#FFB3C8", "Pronunciation drills"),
        ("Lucas", "#B3E5FF", "Passé composé vs imparfait"),
        ("Marie", "#C8FFB3", ""),
        ("", "#FFE0B3", "Listening: radio news"),
        ("Camille", "#E0B3FF", "Subjonctif, first pass"),
    ];
    for i in 0..to_add {
        let (teacher, color, note) = samples[i % samples.len()];
        let date = start + Duration::days(i as i64 * 3);
        let draft = LessonDraft::new(date, teacher, Some(LessonColor::parse(color)?), note);
        storage.lessons.append_lesson(draft).await?;
    }

    println!(
        "Seeded {} lessons into {} ({} already present)",
        to_add, args.data_path, existing
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
