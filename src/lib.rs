// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod scrape;
pub mod store;
