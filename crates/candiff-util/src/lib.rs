//! # Candiff Util
//!
//! Small utilities that keep callers of the canonical crates honest about
//! time and booleans:
//! - [`interval`] parses human-readable interval strings into durations
//! - [`now`], [`since`] and [`sleep`] wrap wall-clock and timer access
//! - [`xor`] reduces any number of booleans by exclusive-or

pub mod interval;
pub mod logic;
pub mod time;

pub use interval::*;
pub use logic::*;
pub use time::*;
