//! Storage layer for welcome configuration.
//!
//! `WelcomeStore` owns the in-memory table and the write-through discipline;
//! `WelcomeBackend` implementations own the bytes on disk (or in memory).

pub mod backend;
pub mod welcome;

#[cfg(test)]
mod test;
