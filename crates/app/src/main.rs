use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CatalogService, Clock, ExamLoopService, HistoryService};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://exam-sim.sqlite3";
const DB_URL_ENV: &str = "EXAM_DB_URL";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--in-memory]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StorageChoice {
    Sqlite(String),
    InMemory,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(StorageChoice),
    Help,
}

fn parse_args(
    args: impl IntoIterator<Item = String>,
    env_db_url: Option<String>,
) -> Result<Parsed, ArgsError> {
    let mut db_url = env_db_url
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
    let mut in_memory = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => {
                let value = require_value(&mut args, "--db")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidDbUrl { raw: value });
                }
                db_url = normalize_sqlite_url(value);
            }
            "--in-memory" => in_memory = true,
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    if in_memory {
        return Ok(Parsed::Run(StorageChoice::InMemory));
    }
    Ok(Parsed::Run(StorageChoice::Sqlite(with_create_mode(db_url))))
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
fn normalize_sqlite_url(raw: String) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Ask `SQLite` to create the file when missing.
fn with_create_mode(db_url: String) -> String {
    if db_url == "sqlite::memory:" || db_url.contains("mode=") {
        return db_url;
    }
    let separator = if db_url.contains('?') { '&' } else { '?' };
    format!("{db_url}{separator}mode=rwc")
}

fn prepare_sqlite_dir(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn exam_loop(&self) -> Arc<ExamLoopService> {
        self.services.exam_loop()
    }

    fn history(&self) -> Arc<HistoryService> {
        self.services.history()
    }
}

async fn build_services(choice: &StorageChoice) -> Result<AppServices, Box<dyn std::error::Error>> {
    let clock = Clock::default_clock();
    let services = match choice {
        StorageChoice::InMemory => {
            log::warn!("using in-memory storage; history is lost on exit");
            AppServices::in_memory(clock)?
        }
        StorageChoice::Sqlite(db_url) => {
            prepare_sqlite_dir(db_url)?;
            AppServices::new_sqlite(db_url, clock).await?
        }
    };
    Ok(services)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_args(std::env::args().skip(1), std::env::var(DB_URL_ENV).ok())
        .inspect_err(|e| {
            eprintln!("{e}");
            print_usage();
        })?;
    let choice = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(choice) => choice,
    };

    // Storage tasks live on this runtime; the desktop launcher drives its own.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let services = runtime.block_on(build_services(&choice))?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Mock Exams")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    drop(runtime);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(2);
    }
}
