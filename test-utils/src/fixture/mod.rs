//! Test fixtures providing reusable welcome documents.
//!
//! Fixtures return raw document bytes or JSON values; they never touch the filesystem.
//! Seed them into a test context with `TestBuilder::with_store_document`.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let document = fixture::welcome::document(&[
//!     fixture::welcome::entry(1).channel_id(42).message("Hi {user}"),
//! ]);
//! ```

pub mod welcome;
