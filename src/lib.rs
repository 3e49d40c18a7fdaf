//! Discord welcome bot.
//!
//! Guild administrators configure a welcome message template, a destination (direct
//! message or a guild channel) and an enabled flag. When a member joins, the template is
//! rendered for them and delivered once, best-effort.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
