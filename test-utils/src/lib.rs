//! Greeter Test Utils
//!
//! Provides shared testing utilities for the welcome store and its file backend. This
//! crate offers a builder pattern for creating test contexts backed by a temporary
//! directory, optionally seeded with a welcome document.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary directory and store path
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: Ready-made welcome documents, valid and invalid
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_store_load() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_store_document(fixture::welcome::single_guild_document())
//!         .build()
//!         .await?;
//!
//!     let path = test.store_path();
//!     // Open a FileBackend on `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
