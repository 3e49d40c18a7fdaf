//! Domain models shared by the store, services and the Discord layer.
//!
//! Models here carry plain IDs and strings rather than Serenity types so that services
//! can be exercised in tests without a gateway connection. Conversion from Serenity
//! types happens in the `bot` module.

pub mod channel;
pub mod member;
pub mod welcome;
