use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, LessonService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DATA_FILE: &str = "lessons.csv";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDataPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
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

struct DesktopApp {
    lessons: Arc<LessonService>,
}

impl UiApp for DesktopApp {
    fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    data_path: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data {DEFAULT_DATA_FILE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEARN_LESSONS_FILE   lessons CSV path");
    eprintln!("  RUST_LOG             log filter (default: info)");
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env_data_path: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut data_path = env_data_path
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = require_value(&mut args, "--data")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataPath { raw: value });
                    }
                    data_path = PathBuf::from(value);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { data_path }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(
        std::env::args().skip(1),
        std::env::var("LEARN_LESSONS_FILE").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();
    tracing::info!(data = %args.data_path.display(), "starting lesson tracker");

    let services = AppServices::new_csv(&args.data_path, Clock::default_clock()).await?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        lessons: services.lessons(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("100 Lessons")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
