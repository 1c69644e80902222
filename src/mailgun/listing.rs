//! Wire model of Mailgun's `GET /v2/domains` response.

// self
use crate::{_prelude::*, provider::SmtpCredential};

/// Parse failure with the JSON path that could not be read.
pub type ListingParseError = serde_path_to_error::Error<serde_json::Error>;

/// Domain listing page returned by Mailgun.
///
/// Only the first entry is ever typed; the rest of `items` is kept as raw JSON so a malformed
/// later entry cannot hide a usable first one.
#[derive(Clone, Default, Deserialize)]
pub struct DomainListing {
	#[serde(default)]
	total_count: Option<u64>,
	// Missing or `null` reads as empty.
	#[serde(default)]
	items: Option<Vec<serde_json::Value>>,
}
impl DomainListing {
	/// Parses a response body.
	pub fn parse(body: &[u8]) -> Result<Self, ListingParseError> {
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de)
	}

	/// Consumes the listing and types the first entry, which is authoritative.
	///
	/// Returns `Ok(None)` for an empty listing. The error path is relative to the entry.
	pub fn into_first(self) -> Result<Option<DomainEntry>, ListingParseError> {
		match self.items.and_then(|items| items.into_iter().next()) {
			Some(first) => serde_path_to_error::deserialize(first).map(Some),
			None => Ok(None),
		}
	}
}
impl Debug for DomainListing {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DomainListing")
			.field("total_count", &self.total_count)
			.field("items", &self.items.as_ref().map_or(0, Vec::len))
			.finish()
	}
}

/// One sending domain with its SMTP credentials.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DomainEntry {
	/// Domain name.
	pub name: String,
	/// SMTP login for the domain.
	pub smtp_login: String,
	/// SMTP password for the domain.
	pub smtp_password: String,
}
impl Debug for DomainEntry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DomainEntry")
			.field("name", &self.name)
			.field("smtp_login", &self.smtp_login)
			.field("smtp_password", &"<redacted>")
			.finish()
	}
}
impl From<DomainEntry> for SmtpCredential {
	fn from(entry: DomainEntry) -> Self {
		Self { login: entry.smtp_login, password: entry.smtp_password, domain: entry.name }
	}
}
