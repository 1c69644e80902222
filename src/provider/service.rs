//! Host contract shared by every mail service provider.
//!
//! Hosts hold providers as `Arc<dyn MailServiceProvider>` (or a plain reference), read the
//! descriptor once, and call `provision` with the credentials their caller supplied. The
//! contract carries no shared mutable state, so one provider value serves any number of
//! concurrent provisioning calls.

// self
use crate::{_prelude::*, auth::CredentialSet, provider::ServiceDescriptor};

/// Boxed future returned by [`MailServiceProvider::provision`].
pub type ProvisionFuture<'a> = Pin<Box<dyn Future<Output = Result<SmtpCredential>> + 'a + Send>>;

/// Object-safe provisioning contract implemented by mail providers.
pub trait MailServiceProvider
where
	Self: Send + Sync,
{
	/// Static metadata declared at construction time.
	fn descriptor(&self) -> &ServiceDescriptor;

	/// Exchanges a credential set for SMTP credentials.
	///
	/// Implementations validate `credentials` against
	/// [`descriptor().parameters`](ServiceDescriptor::parameters) before any network call and
	/// report violations as [`Error::Credentials`].
	fn provision<'a>(&'a self, credentials: &'a CredentialSet) -> ProvisionFuture<'a>;
}

/// SMTP login, password, and domain ready for an outbound mail connection.
///
/// Values are copied verbatim from the provider. [`Debug`] redacts the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpCredential {
	/// SMTP login (usually `postmaster@<domain>`).
	pub login: String,
	/// SMTP password. Callers must avoid logging this value.
	pub password: String,
	/// Sending domain name.
	pub domain: String,
}
impl Debug for SmtpCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SmtpCredential")
			.field("login", &self.login)
			.field("password", &"<redacted>")
			.field("domain", &self.domain)
			.finish()
	}
}
