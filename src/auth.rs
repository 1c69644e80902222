//! API keys, host credential sets, and HTTP Basic credentials.

pub mod basic;
pub mod credentials;
pub mod secret;

pub use basic::*;
pub use credentials::*;
pub use secret::*;
