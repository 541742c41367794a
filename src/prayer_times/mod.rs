pub mod board;
pub mod calculator;
pub mod selector;
pub mod tracker;

pub use board::{BoardView, PrayerBoard};
pub use calculator::{PrayerCalculator, FIXED_LOCATION};
