//! `Kairos` Core - time span arithmetic and the pattern lexicon
//!
//! A [`Duration`] is a signed count of milliseconds, detached from any
//! calendar. The [`Lexicon`] turns it into text and back through patterns
//! such as `#hh:mm:ss.SSS`, and [`Kairos`] ties both together behind a
//! calculator-style API.
//!
//! ```
//! use kairos_core::Kairos;
//!
//! let kairos = Kairos::default();
//! let total = kairos.plus("01:00:00.000", "01:30:35.100", None).unwrap();
//! assert_eq!(kairos.format(&total, None, false), "+02:30:35.100");
//! ```
//!
//! The library is synchronous and keeps no global state. Configuration lives
//! in the [`Kairos`] and [`Lexicon`] values themselves; callers in
//! multi-threaded hosts must serialize configuration changes externally.

pub mod duration;
pub mod error;
pub mod kairos;
pub mod lexicon;
pub mod settings;
pub mod value;

pub use duration::{Duration, Field, HOUR, MINUTE, SECOND};
pub use error::{KairosError, Result};
pub use kairos::Kairos;
pub use lexicon::{DEFAULT_PATTERN, Element, Lexicon, Syntax, Validator};
pub use settings::Settings;
pub use value::TimeValue;
