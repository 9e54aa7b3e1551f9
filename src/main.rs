use std::path::PathBuf;
use std::str::FromStr;

use tracing::error;
use tracing_subscriber::EnvFilter;

use hs_meta::report::{deck_url, TableRow};
use hs_meta::{MetaClient, MetaError, MetaReport, Result, TierFloors, WidgetSize};

const USAGE: &str = "usage: hs-meta [table | widget [small|medium|large|extralarge] | announce]";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Table,
    Widget(WidgetSize),
    Announce,
}

impl Mode {
    fn from_args(args: &[String]) -> Result<Self> {
        match args.first().map(String::as_str) {
            None | Some("table") => Ok(Mode::Table),
            Some("announce") => Ok(Mode::Announce),
            Some("widget") => {
                let size = match args.get(1) {
                    Some(s) => WidgetSize::from_str(s)?,
                    None => WidgetSize::Medium,
                };
                Ok(Mode::Widget(size))
            }
            Some(other) => Err(MetaError::InvalidArgument(format!(
                "unknown mode '{other}'\n{USAGE}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
struct Config {
    log_level: String,
    cache_dir: Option<PathBuf>,
    offline: bool,
    tier_floors: TierFloors,
}

impl Config {
    fn from_env() -> Result<Self> {
        let defaults = TierFloors::default();
        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            cache_dir: std::env::var("HS_META_CACHE_DIR").ok().map(PathBuf::from),
            offline: std::env::var("HS_META_OFFLINE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            tier_floors: TierFloors {
                t1: floor_from_env("HS_META_T1", defaults.t1)?,
                t2: floor_from_env("HS_META_T2", defaults.t2)?,
                t3: floor_from_env("HS_META_T3", defaults.t3)?,
                t4: defaults.t4,
            },
        })
    }
}

fn floor_from_env(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(v) => TierFloors::parse_floor(key, &v),
        Err(_) => Ok(default),
    }
}

fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = match Mode::from_args(&args) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(cfg, mode) {
        if e.is_fetch_failure() {
            eprintln!("Failed to fetch data, try again later");
        }
        error!("run failed: {e}");
        std::process::exit(1);
    }
}

fn run(cfg: Config, mode: Mode) -> Result<()> {
    let mut builder = MetaClient::builder()
        .offline(cfg.offline)
        .tier_floors(cfg.tier_floors);
    if let Some(dir) = cfg.cache_dir {
        builder = builder.cache_dir(dir);
    }
    let mut client = builder.build()?;
    let report = client.report()?;

    match mode {
        Mode::Table => print_table(&report),
        Mode::Widget(size) => print_widget(&report, size),
        Mode::Announce => {
            print_table(&report);
            match report.announcement() {
                Some(line) => println!("\n{line}"),
                None => println!("\nNo decks reported"),
            }
        }
    }
    Ok(())
}

fn print_widget(report: &MetaReport, size: WidgetSize) {
    if size == WidgetSize::Small {
        println!("HSReplay meta ({})", report.as_of);
        return;
    }
    for row in report.widget_rows(size) {
        println!("{row}");
    }
}

fn print_table(report: &MetaReport) {
    println!("Meta as of {}", report.as_of);
    for row in report.table_rows() {
        match row {
            TableRow::Header(tier) => println!("\n{}", tier.heading()),
            TableRow::Deck(deck) => println!("  {deck}  {}", deck_url(deck.deck)),
        }
    }
}
