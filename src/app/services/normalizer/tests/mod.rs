//! Tests for the field-normalization engine

mod mark_tests;
mod position_tests;
mod stats_tests;
mod venue_tests;
