//! Periodically recomputed shortest path routing trees over a graph whose
//! edge weights drift over time.

pub mod config;
pub mod dynamics;
pub mod error;
pub mod graphs;
pub mod history;
pub mod render;
pub mod search;
pub mod simulation;
pub mod tree;
pub mod utility;

pub use error::{Error, Result};
