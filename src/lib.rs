//! Timeclock export pivoting.
//!
//! This crate reads a timeclock export (one row per clock-in/clock-out event
//! with a job code), computes the minutes of each event, totals them per
//! employee and job code, and writes a pivoted summary: one row per job code,
//! one column per employee, with row and column totals.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
