//! Guards applied to admin commands before they reach the service layer.

pub mod capability;
