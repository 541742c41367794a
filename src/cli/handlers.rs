use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::prayer_times::{BoardView, PrayerBoard, FIXED_LOCATION};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::format::pad_to_width;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn system_clock() -> Result<SystemClock> {
    Ok(SystemClock::new(FIXED_LOCATION.offset()?))
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, date: Option<&str>, json: bool) -> Result<()> {
    let now = system_clock()?.now();
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))?,
        None => now.date(),
    };

    let mut board = PrayerBoard::from_config(config)?;
    if date == now.date() {
        board.tick(now);
    } else {
        board.refresh_day(date);
    }
    let view = board.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_header(&view);
    if board.schedule().is_none() {
        println_colored!(DIM, "  No prayer times for {}", date);
        println!();
        return Ok(());
    }

    for row in &view.rows {
        let label = pad_to_width(&row.label, 10);
        if row.highlighted {
            println_colored!(GOLD, "▸ {}  {}", label, row.time);
        } else if row.passed {
            println_colored!(DIM, "  {}  {}", label, row.time);
        } else {
            println_colored!(BOLD, "  {}  {}", label, row.time);
        }
    }

    if let Some(next) = &view.next {
        println!();
        println_colored!(
            AMBER,
            "  {}: {} {} {}",
            view.locale.next_prayer_title(),
            next.label,
            view.locale.remaining_label(),
            next.remaining
        );
    }
    println!();
    Ok(())
}

fn print_header(view: &BoardView) {
    println!();
    println_colored!(GOLD, "  {} — {}", view.locale.prayers_title(), view.location);
    if view.hijri.is_empty() {
        println_colored!(DIM, "  {}", view.gregorian);
    } else {
        println_colored!(DIM, "  {}  ·  {}", view.hijri, view.gregorian);
    }
    println!();
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(config: &AppConfig, json: bool) -> Result<()> {
    let mut board = PrayerBoard::from_config(config)?;
    board.tick(system_clock()?.now());
    let view = board.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view.next)?);
        return Ok(());
    }

    match view.next {
        Some(next) => println!("{} {} {}", next.label, next.at, next.remaining),
        None => return Err(anyhow!("No prayer schedule available")),
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if init {
        config.save()?;
        println_colored!(GOLD, "  Wrote {}", path.display());
    } else {
        println_colored!(DIM, "  {}", path.display());
    }
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
