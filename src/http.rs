//! Transport primitives for the domain listing lookup.
//!
//! The module exposes [`DomainsHttpClient`] alongside [`DomainsRequest`] and [`RawResponse`] so
//! hosts can plug in their own HTTP stack. The provisioner only needs a status code and the
//! body bytes; TLS, pooling, proxies, and deadlines stay with the client.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::{StatusCode, header::AUTHORIZATION};
// self
use crate::{_prelude::*, auth::BasicCredentials, error::TransportError};

/// Future returned by [`DomainsHttpClient::get`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<RawResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports able to run an authenticated `GET`.
///
/// Implementations must be `Send + Sync + 'static` so a single provisioner can be shared across
/// tasks, and the returned future must be `Send` so it can hop executors. One call to
/// [`get`](DomainsHttpClient::get) must issue exactly one request: no retries, no caching.
///
/// Only a `200` body is ever read by the provisioner; every other status is classified by its
/// code alone. Failing to obtain a status line, or a complete `200` body, is a transport error.
/// A body that cannot be read on any other status must not fail the call: return the status
/// with an empty body instead.
pub trait DomainsHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Issues `request` and resolves once the full response body has been read.
	fn get(&self, request: DomainsRequest) -> HttpFuture<'_, Self::TransportError>;

	/// Wraps a transport failure into the crate taxonomy.
	///
	/// The default reports every failure as [`TransportError::Network`]; override it when the
	/// transport can tell deadlines or IO failures apart.
	fn map_transport_error(&self, error: Self::TransportError) -> TransportError {
		TransportError::network(error)
	}
}

/// Authenticated `GET` issued against the domain listing endpoint.
#[derive(Clone, Debug)]
pub struct DomainsRequest {
	/// Fully resolved endpoint URL.
	pub url: Url,
	/// Basic credentials to send in the `Authorization` header.
	pub auth: BasicCredentials,
}
impl DomainsRequest {
	/// Pairs an endpoint with its credentials.
	pub fn new(url: Url, auth: BasicCredentials) -> Self {
		Self { url, auth }
	}
}

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body bytes; may be empty.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Builds a response from parts.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}
}
impl Debug for RawResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RawResponse")
			.field("status", &self.status)
			.field("body_len", &self.body.len())
			.finish()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Deadlines configured on the wrapped client surface as
/// [`TransportError::Timeout`](crate::error::TransportError::Timeout).
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl DomainsHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn get(&self, request: DomainsRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client
				.get(request.url)
				.header(AUTHORIZATION, request.auth.header_value())
				.send()
				.await?;
			let status = response.status();
			let body = if status == StatusCode::OK {
				response.bytes().await?.to_vec()
			} else {
				Vec::new()
			};

			Ok(RawResponse { status: status.as_u16(), body })
		})
	}

	fn map_transport_error(&self, error: Self::TransportError) -> TransportError {
		TransportError::from(error)
	}
}
