//! Host-facing credential sets and the typed Mailgun credentials derived from them.

// self
use crate::{
	_prelude::*,
	auth::{API_KEY_PARAMETER, ApiKey},
	error::CredentialError,
};

/// Untyped credential values keyed by parameter name, as handed over by the plugin host.
///
/// Values are secrets, so [`Debug`] only lists parameter names.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialSet(BTreeMap<String, String>);
impl CredentialSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a parameter value.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);

		self
	}

	/// Adds or replaces a parameter value in place.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}

	/// Returns the raw value supplied for `name`, if any.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Returns true when no parameters were supplied.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for CredentialSet
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl Debug for CredentialSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_set().entries(self.0.keys()).finish()
	}
}

/// Credentials accepted by the Mailgun provisioner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailgunCredentials {
	/// Account API key, sent as the Basic-auth password.
	#[serde(rename = "apiKey")]
	pub api_key: ApiKey,
}
impl MailgunCredentials {
	/// Wraps an already validated key.
	pub fn new(api_key: ApiKey) -> Self {
		Self { api_key }
	}
}
impl TryFrom<&CredentialSet> for MailgunCredentials {
	type Error = CredentialError;

	fn try_from(set: &CredentialSet) -> Result<Self, Self::Error> {
		let raw = set
			.get(API_KEY_PARAMETER)
			.ok_or_else(|| CredentialError::Missing { name: API_KEY_PARAMETER.into() })?;

		Ok(Self::new(ApiKey::new(raw)?))
	}
}
