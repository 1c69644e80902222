//! HTTP Basic credentials for the Mailgun API.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::ApiKey};

/// Username Mailgun expects for key-authenticated API calls.
pub const MAILGUN_API_USER: &str = "api";

/// Username/password pair rendered into an `Authorization: Basic` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
	username: String,
	password: ApiKey,
}
impl BasicCredentials {
	/// Pairs an arbitrary username with a key.
	pub fn new(username: impl Into<String>, password: ApiKey) -> Self {
		Self { username: username.into(), password }
	}

	/// Mailgun's `api:<key>` pair.
	pub fn mailgun(api_key: &ApiKey) -> Self {
		Self::new(MAILGUN_API_USER, api_key.clone())
	}

	/// Basic-auth username.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// Basic-auth password. Callers must avoid logging this value.
	pub fn password(&self) -> &ApiKey {
		&self.password
	}

	/// Renders the `Authorization` header value (`Basic base64(user:pass)`).
	pub fn header_value(&self) -> String {
		let raw = format!("{}:{}", self.username, self.password.expose());

		format!("Basic {}", STANDARD.encode(raw))
	}
}
impl Debug for BasicCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BasicCredentials")
			.field("username", &self.username)
			.field("password", &self.password)
			.finish()
	}
}
