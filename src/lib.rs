//! Monthly shift sheet engine.
//!
//! This crate merges a committed shift schedule with its simulation overlay,
//! lays the roster out into divider-delimited sections and renders the month
//! as a styled spreadsheet. Holidays come from an external source that is
//! fetched once per process and cached.

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod holidays;
pub mod layout;
pub mod merge;
pub mod models;
pub mod repository;
pub mod sheet;
