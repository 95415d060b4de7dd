//! Parser, matcher and occurrences generator for six-field calendar cron expressions.
#![deny(unsafe_code, warnings, missing_docs)]

//! This crate is intended to:
//! - parse cron expressions in AWS EventBridge style, with `L`, `W` and `#` extensions and month or day of week names;
//! - check if some point in time matches the expression;
//! - generate series of timestamps according to the expression.
//!
//! _This is not a cron jobs scheduler or runner._
//!
//! ## Cron expression format
//!
//! Expression consists of exactly six fields separated by whitespace:
//! minutes, hours, day of month, month, day of week and year.
//!
//! The table below describes patterns allowed in each field:
//!
//! | Field        | Values              | Allowed special characters |
//! |--------------|---------------------|----------------------------|
//! | Minutes      | 0-59                | * , - /                    |
//! | Hours        | 0-23                | * , - /                    |
//! | Day of Month | 1-31                | * , - / ? L W              |
//! | Month        | 1-12 or JAN-DEC     | * , - /                    |
//! | Day of Week  | 1-7 or MON-SUN      | * , - / ? L #              |
//! | Year         | up to 2199          | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of patterns, i.e. `1,7,12`, `SUN,FRI`, `1-5,L`;
//! - `-` - inclusive range, i.e. `0-15`, `JAN-MAR`; ranges never wrap around;
//! - `/` - repeating values, i.e. `*/12` (from zero), `10/5` (from 10);
//! - `?` - no specific value, allowed in day of month and day of week fields only;
//! - `L` - the last day of the month in day of month field, Saturday in day of week field;
//! - `W` - the weekday (Monday to Friday) nearest to the specified day of month, i.e. `15W`;
//! - `#` - n-th day of the week in the month, i.e. `6#3` (the third Saturday), `0#1` or `7#1` (the first Sunday).
//!
//! Numeric day of week values are ISO ones: 1 is Monday, 7 is Sunday.
//! Names are case-insensitive, and keep their spelling when the expression is printed.
//!
//! ### Day fields
//!
//! [`Expression::matches`] requires both day fields to match, and `?` matches any day.
//!
//! Occurrences search ([`Expression::next`], [`Expression::next_n`], [`Expression::iter`])
//! requires exactly one of the day fields to be `?` (or to contain `?`): the other field selects days.
//! If both or none of them are `?`, there are no occurrences.
//!
//! ## How to use
//!
//! The central entity of the crate is an [`Expression`] structure:
//! - [parse()](Expression::parse): parses provided expression;
//! - [matches()](Expression::matches): checks if the time matches the expression;
//! - [next()](Expression::next) and [next_n()](Expression::next_n): return the nearest occurrences starting from the provided timestamp;
//! - [iter()](Expression::iter): returns an `Iterator` which produces a series of occurrences.
//!
//! Occurrences are minute-aligned and calculated in the timezone of the provided timestamp, up to the end of [`MAX_YEAR`].
//!
//! ### Example with `next_n`
//! ```rust
//! use calendar_cron::{Expression, Result};
//! use chrono::DateTime;
//!
//! fn next_n() -> Result<()> {
//!     let expression = Expression::parse("0 10 * * ? *")?;
//!     let from = DateTime::parse_from_rfc3339("2022-11-03T09:00:00Z").unwrap();
//!
//!     let next = expression.next_n(&from, 3)?;
//!     assert_eq!(next.len(), 3);
//!     assert_eq!(next[0].to_rfc3339(), "2022-11-03T10:00:00+00:00");
//!
//!     Ok(())
//! }
//! # next_n().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use calendar_cron::{Expression, Result};
//! use chrono::DateTime;
//!
//! fn iterator() -> Result<()> {
//!     let expression = Expression::parse("15 10 ? * 6#3 *")?;
//!     let from = DateTime::parse_from_rfc3339("2022-11-01T00:00:00Z").unwrap();
//!
//!     // The third Saturday of the next 12 months
//!     expression.iter(&from)?.take(12).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Expression`].

/// Crate specific Error implementation.
pub mod error;
/// List of patterns of a single field.
pub mod field;
mod lexer;
mod parser;
/// Patterns allowed in each field and their matching rules.
pub mod pattern;
/// Cron expression and occurrences generator.
pub mod schedule;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use field::Field;
pub use schedule::{Expression, Occurrences, MAX_YEAR};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
