//! bingolab - headless bingo-card editor engine
//!
//! Module map:
//! - models: data model (Document, Cell, Style, Background, Stamp)
//! - kernel: state/action/effect core (history, store, change extraction)
//! - logging: tracing setup for hosts

pub mod kernel;
pub mod logging;
pub mod models;
