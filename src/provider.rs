//! Provider-facing descriptors (data) and the host contract (behavior).
//!
//! `descriptor` holds the static metadata a host reads once at load time: service type,
//! description, and the credential parameter schema. `service` defines
//! [`MailServiceProvider`], the object-safe contract every mail provider exposes, and the
//! [`SmtpCredential`] it yields.

pub mod descriptor;
pub mod service;

pub use descriptor::*;
pub use service::*;
