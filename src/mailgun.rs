//! Mailgun SMTP credential provisioning.
//!
//! [`MailgunProvisioner::provision`] sends one `GET https://api.mailgun.net/v2/domains`
//! authenticated as `api:<key>` and classifies the answer:
//!
//! | Status | Result |
//! |---|---|
//! | 200, at least one domain | [`SmtpCredential`] built from the first entry |
//! | 200, no usable domain | [`Error::NoDomainsAvailable`] |
//! | 407 | [`Error::Unauthorized`] |
//! | anything else | [`Error::UnexpectedApi`] |
//!
//! Mailgun documents 401 for a bad key but answers 407 in practice, so 407 is the
//! authentication failure and 401 falls through to [`Error::UnexpectedApi`].
//! Failures below HTTP surface as [`Error::Transport`]. Nothing is retried or cached.

pub mod listing;

pub use listing::*;

// self
use crate::{
	_prelude::*,
	auth::{API_KEY_PARAMETER, BasicCredentials, CredentialSet, MailgunCredentials},
	error::ConfigError,
	http::{DomainsHttpClient, DomainsRequest, RawResponse},
	obs::{self, ProvisionOutcome, ProvisionSpan},
	provider::{
		MailServiceProvider, ParameterSpec, ProvisionFuture, ServiceDescriptor, ServiceType,
		SmtpCredential,
	},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Mailgun API base shared by every v2 endpoint.
pub const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v2/";
/// Domain listing path, relative to [`MAILGUN_API_BASE`].
pub const DOMAINS_PATH: &str = "domains";
/// Identifier the provider is registered under.
pub const PROVIDER_NAME: &str = "mailgun";
/// Status Mailgun answers with when the API key is rejected.
pub const STATUS_UNAUTHORIZED: u16 = 407;

const STATUS_OK: u16 = 200;

#[cfg(feature = "reqwest")]
/// Provisioner specialized for the crate's default reqwest transport.
pub type ReqwestMailgunProvisioner = MailgunProvisioner<ReqwestHttpClient>;

/// Resolves the fixed domain listing endpoint.
pub fn domains_endpoint() -> Result<Url, ConfigError> {
	Url::parse(MAILGUN_API_BASE)
		.and_then(|base| base.join(DOMAINS_PATH))
		.map_err(|source| ConfigError::InvalidEndpoint { source })
}

/// Validated descriptor for the Mailgun provider.
pub fn mailgun_descriptor() -> Result<ServiceDescriptor, ConfigError> {
	let descriptor = ServiceDescriptor::builder(PROVIDER_NAME, ServiceType::Mail)
		.description(env!("CARGO_PKG_DESCRIPTION"))
		.credential(ParameterSpec::required(API_KEY_PARAMETER))
		.build()?;

	Ok(descriptor)
}

/// Maps a completed domain listing exchange onto the provisioning result.
pub fn classify_response(response: RawResponse) -> Result<SmtpCredential> {
	match response.status {
		STATUS_OK => {
			let first = DomainListing::parse(&response.body)
				.and_then(DomainListing::into_first)
				.map_err(|e| {
					obs::note_listing_parse_failure(&e.path().to_string());

					Error::NoDomainsAvailable
				})?;

			first.map(SmtpCredential::from).ok_or(Error::NoDomainsAvailable)
		},
		STATUS_UNAUTHORIZED => Err(Error::Unauthorized),
		status => Err(Error::UnexpectedApi { status }),
	}
}

/// Mailgun implementation of [`MailServiceProvider`].
///
/// Holds only read-only state: the descriptor, the endpoint, and a shared transport handle.
/// Calls through `&self` are independent of each other.
pub struct MailgunProvisioner<C>
where
	C: DomainsHttpClient,
{
	http_client: Arc<C>,
	endpoint: Url,
	descriptor: ServiceDescriptor,
}
impl<C> MailgunProvisioner<C>
where
	C: DomainsHttpClient,
{
	/// Creates a provisioner that reuses the caller-provided transport.
	pub fn with_http_client(http_client: impl Into<Arc<C>>) -> Result<Self> {
		Ok(Self {
			http_client: http_client.into(),
			endpoint: domains_endpoint()?,
			descriptor: mailgun_descriptor()?,
		})
	}

	/// Points the provisioner at another domain listing URL, such as a mock server.
	pub fn with_endpoint(mut self, endpoint: Url) -> Self {
		self.endpoint = endpoint;

		self
	}

	/// Domain listing URL in use.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Static provider metadata.
	pub fn descriptor(&self) -> &ServiceDescriptor {
		&self.descriptor
	}

	/// Exchanges an API key for the SMTP credentials of the account's first domain.
	pub async fn provision(&self, credentials: &MailgunCredentials) -> Result<SmtpCredential> {
		let span = ProvisionSpan::new(PROVIDER_NAME, "provision");

		obs::record_provision_outcome(PROVIDER_NAME, ProvisionOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = DomainsRequest::new(
					self.endpoint.clone(),
					BasicCredentials::mailgun(&credentials.api_key),
				);
				let response = self
					.http_client
					.get(request)
					.await
					.map_err(|e| self.http_client.map_transport_error(e))?;

				classify_response(response)
			})
			.await;

		obs::record_provision_outcome(PROVIDER_NAME, ProvisionOutcome::of(&result));

		result
	}
}
#[cfg(feature = "reqwest")]
impl MailgunProvisioner<ReqwestHttpClient> {
	/// Creates a provisioner backed by a default reqwest client.
	///
	/// Use [`MailgunProvisioner::with_http_client`] to supply a client with a timeout, proxy,
	/// or custom TLS settings.
	pub fn new() -> Result<Self> {
		Self::with_http_client(ReqwestHttpClient::default())
	}
}
impl<C> MailServiceProvider for MailgunProvisioner<C>
where
	C: DomainsHttpClient,
{
	fn descriptor(&self) -> &ServiceDescriptor {
		&self.descriptor
	}

	fn provision<'a>(&'a self, credentials: &'a CredentialSet) -> ProvisionFuture<'a> {
		Box::pin(async move {
			self.descriptor.parameters.validate(credentials)?;

			let credentials = MailgunCredentials::try_from(credentials)?;

			MailgunProvisioner::provision(self, &credentials).await
		})
	}
}
impl<C> Clone for MailgunProvisioner<C>
where
	C: DomainsHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			endpoint: self.endpoint.clone(),
			descriptor: self.descriptor.clone(),
		}
	}
}
impl<C> Debug for MailgunProvisioner<C>
where
	C: DomainsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MailgunProvisioner")
			.field("endpoint", &self.endpoint.as_str())
			.field("descriptor", &self.descriptor)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use parking_lot::Mutex;
	// self
	use super::*;
	use crate::{
		auth::ApiKey,
		error::{FailureKind, TransportError},
	};

	const LISTING: &str = r#"{
		"total_count": 1,
		"items": [{
			"smtp_login": "tester@example.mailgun.org",
			"name": "example.mailgun.org",
			"smtp_password": "testy"
		}]
	}"#;

	#[derive(Debug)]
	struct Refused;
	impl Display for Refused {
		fn fmt(&self, f: &mut Formatter) -> FmtResult {
			f.write_str("Connection refused.")
		}
	}
	impl StdError for Refused {}

	#[derive(Default)]
	struct ScriptedClient {
		response: Option<RawResponse>,
		seen: Mutex<Vec<DomainsRequest>>,
	}
	impl ScriptedClient {
		fn answering(status: u16, body: &str) -> Self {
			Self { response: Some(RawResponse::new(status, body)), ..Default::default() }
		}
	}
	impl DomainsHttpClient for ScriptedClient {
		type TransportError = Refused;

		fn get(&self, request: DomainsRequest) -> crate::http::HttpFuture<'_, Refused> {
			self.seen.lock().push(request);

			let response = self.response.clone();

			Box::pin(async move { response.ok_or(Refused) })
		}
	}

	fn credentials() -> MailgunCredentials {
		let key = ApiKey::new("NOT_A_VALID_KEY").expect("Fixture key should be valid.");

		MailgunCredentials::new(key)
	}

	#[test]
	fn endpoint_resolves_under_the_v2_base() {
		assert_eq!(
			domains_endpoint().expect("Fixed endpoint should parse.").as_str(),
			"https://api.mailgun.net/v2/domains"
		);
	}

	#[test]
	fn descriptor_declares_mail_and_api_key() {
		let descriptor = mailgun_descriptor().expect("Built-in descriptor should validate.");

		assert_eq!(descriptor.name, "mailgun");
		assert!(descriptor.provides(ServiceType::Mail));
		assert_eq!(descriptor.description, env!("CARGO_PKG_DESCRIPTION"));
		assert_eq!(descriptor.parameters.credentials, vec![ParameterSpec::required("apiKey")]);
	}

	#[test]
	fn classification_follows_status_policy() {
		let ok = classify_response(RawResponse::new(200, LISTING)).expect("200 should succeed.");

		assert_eq!(ok.login, "tester@example.mailgun.org");
		assert_eq!(ok.password, "testy");
		assert_eq!(ok.domain, "example.mailgun.org");
		assert!(matches!(
			classify_response(RawResponse::new(200, r#"{"items":[]}"#)),
			Err(Error::NoDomainsAvailable)
		));
		assert!(matches!(classify_response(RawResponse::new(407, "")), Err(Error::Unauthorized)));

		for status in [201, 400, 401, 403, 404, 500, 503] {
			let err = classify_response(RawResponse::new(status, LISTING))
				.expect_err("Non-200 statuses should fail.");

			assert_eq!(err.kind(), FailureKind::UnexpectedApiError, "status {status}");
		}
	}

	#[test]
	fn unreadable_success_bodies_mean_no_domains() {
		for body in ["", "not json", "{}", r#"{"items":null}"#, r#"{"items":[{"name":"x"}]}"#] {
			let result = classify_response(RawResponse::new(200, body));

			assert!(matches!(result, Err(Error::NoDomainsAvailable)), "body {body:?}");
		}
	}

	#[test]
	fn malformed_later_entries_still_yield_the_first_domain() {
		let body = r#"{"items":[
			{"smtp_login":"postmaster@one.example","name":"one.example","smtp_password":"p1"},
			{"smtp_login":"postmaster@two.example","name":"two.example","smtp_password":null}
		]}"#;
		let credential = classify_response(RawResponse::new(200, body))
			.expect("A complete first entry should be enough.");

		assert_eq!(credential.domain, "one.example");
		assert_eq!(credential.password, "p1");
	}

	#[test]
	fn non_success_statuses_ignore_the_body() {
		assert!(matches!(
			classify_response(RawResponse::new(407, "<html>truncated")),
			Err(Error::Unauthorized)
		));
		assert!(matches!(
			classify_response(RawResponse::new(500, Vec::new())),
			Err(Error::UnexpectedApi { status: 500 })
		));
	}

	#[tokio::test]
	async fn provision_sends_one_request_as_api_user() {
		let client = Arc::new(ScriptedClient::answering(200, LISTING));
		let provisioner = MailgunProvisioner::<ScriptedClient>::with_http_client(client.clone())
			.expect("Provisioner should build.");
		let credential =
			provisioner.provision(&credentials()).await.expect("Provision should succeed.");

		assert_eq!(credential.domain, "example.mailgun.org");

		let seen = client.seen.lock();

		assert_eq!(seen.len(), 1);
		assert_eq!(seen[0].url.as_str(), "https://api.mailgun.net/v2/domains");
		assert_eq!(seen[0].auth.username(), "api");
		assert_eq!(seen[0].auth.password().expose(), "NOT_A_VALID_KEY");
	}

	#[tokio::test]
	async fn transport_failures_are_not_classified_as_api_errors() {
		let provisioner =
			MailgunProvisioner::<ScriptedClient>::with_http_client(ScriptedClient::default())
				.expect("Provisioner should build.");
		let err = provisioner
			.provision(&credentials())
			.await
			.expect_err("Refused connections should fail.");

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	}

	#[tokio::test]
	async fn host_contract_rejects_invalid_sets_without_a_request() {
		let client = Arc::new(ScriptedClient::answering(200, LISTING));
		let provisioner = MailgunProvisioner::<ScriptedClient>::with_http_client(client.clone())
			.expect("Provisioner should build.");
		let err = <dyn MailServiceProvider>::provision(&provisioner, &CredentialSet::new())
			.await
			.expect_err("Missing apiKey should be rejected.");

		assert_eq!(err.kind(), FailureKind::InvalidCredentials);
		assert!(client.seen.lock().is_empty());
	}
}
