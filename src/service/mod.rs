//! Business logic for welcome messages.
//!
//! - `template` renders placeholder templates
//! - `delivery` routes a rendered message on member join
//! - `welcome` implements the admin operations behind the `/welcome*` commands

pub mod delivery;
pub mod template;
pub mod welcome;

#[cfg(test)]
mod test;
