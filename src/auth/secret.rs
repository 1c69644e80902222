//! Redacted API key wrapper.

// self
use crate::{_prelude::*, error::CredentialError};

/// Parameter name under which hosts supply the Mailgun API key.
pub const API_KEY_PARAMETER: &str = "apiKey";

/// Mailgun account API key. Never empty; formatters redact the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiKey(String);
impl ApiKey {
	/// Wraps a new key, rejecting empty values.
	pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
		let value = value.into();

		if value.is_empty() {
			return Err(CredentialError::Empty { name: API_KEY_PARAMETER.into() });
		}

		Ok(Self(value))
	}

	/// Returns the inner key. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl TryFrom<String> for ApiKey {
	type Error = CredentialError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ApiKey> for String {
	fn from(value: ApiKey) -> Self {
		value.0
	}
}
impl FromStr for ApiKey {
	type Err = CredentialError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiKey").field(&"<redacted>").finish()
	}
}
impl Display for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
