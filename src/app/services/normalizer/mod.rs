//! Field-normalization engine for athletics result rows.
//!
//! The engine is a set of pure parsers that convert each raw textual
//! sub-field of a result row into a well-defined structured value. Every
//! parser is total over its input grammar: empty and malformed strings
//! yield either the documented all-null value or an explicit error, never
//! a crash and never an unset field.
//!
//! ## Architecture
//!
//! - [`mark`] - performance mark classification (points/times/distances)
//! - [`position`] - finishing position and heat/phase group decoding
//! - [`venue`] - stadium/city/country/extra splitting
//! - [`age`] - partial-date resolution and competition-day age
//! - [`assembler`] - composition into one immutable document per row
//! - [`stats`] - per-file normalization statistics
//!
//! The parsers share no state and may run in parallel across rows and
//! files without synchronization.
//!
//! ## Usage
//!
//! ```rust
//! use athletics_normalizer::app::models::RawRow;
//! use athletics_normalizer::app::services::normalizer::assembler::{self, RowContext};
//!
//! let record = csv::StringRecord::from(vec![
//!     "10.49", "Florence Griffith-Joyner", "21 DEC 1959", "USA", "1q1",
//!     "Indianapolis (USA)", "16 JUL 1988", "0.0",
//! ]);
//! let row = RawRow::from_record(&record);
//! let ctx = RowContext {
//!     file_name: "100m.csv".to_string(),
//!     gender_folder: "women".to_string(),
//!     row_ordinal: 1,
//! };
//!
//! let assembled = assembler::assemble(&row, &ctx);
//! assert!(assembled.is_clean());
//! assert_eq!(assembled.document.world_rank, 1);
//! ```

pub mod age;
pub mod assembler;
pub mod mark;
pub mod position;
pub mod stats;
pub mod venue;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use assembler::{AssembledRecord, RowContext};
pub use stats::FileStats;
