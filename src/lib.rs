//! Mailgun mail service provider: exchange an account API key for ready-to-use SMTP credentials
//! of the account's first sending domain.
//!
//! The crate exposes two pieces to a plugin host:
//!
//! - a static [`ServiceDescriptor`](provider::ServiceDescriptor) declaring the `mail` capability
//!   and the credential schema (`apiKey`, required);
//! - the [`MailgunProvisioner`](mailgun::MailgunProvisioner), which performs exactly one
//!   authenticated `GET` against Mailgun's domain listing and maps the outcome onto
//!   [`Error`](error::Error).
//!
//! Hosts that juggle several mail providers talk to them through
//! [`MailServiceProvider`](provider::MailServiceProvider).

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod mailgun;
pub mod obs;
pub mod provider;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::time::Duration;
	// crates.io
	use base64::{Engine, engine::general_purpose::STANDARD};
	// self
	use crate::{
		auth::{ApiKey, MailgunCredentials},
		http::ReqwestHttpClient,
		mailgun::ReqwestMailgunProvisioner,
	};

	/// Fixture API key; never valid against the real provider.
	pub const API_KEY: &str = "NOT_A_VALID_KEY";
	/// Absolute domain listing path served by mock servers.
	pub const MOCK_DOMAINS_PATH: &str = "/v2/domains";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests, with an optional whole-request deadline.
	pub fn test_reqwest_http_client(timeout: Option<Duration>) -> ReqwestHttpClient {
		let mut builder = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true);

		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		ReqwestHttpClient::with_client(
			builder.build().expect("Failed to build insecure Reqwest client for tests."),
		)
	}

	/// Constructs a provisioner whose domain listing endpoint is `endpoint`.
	pub fn build_reqwest_test_provisioner(
		endpoint: &str,
		timeout: Option<Duration>,
	) -> ReqwestMailgunProvisioner {
		let endpoint = Url::parse(endpoint).expect("Test domains endpoint should parse.");

		ReqwestMailgunProvisioner::with_http_client(test_reqwest_http_client(timeout))
			.expect("Provisioner should build for tests.")
			.with_endpoint(endpoint)
	}

	/// `Authorization` header Mailgun expects for `key`.
	pub fn basic_header(key: &str) -> String {
		format!("Basic {}", STANDARD.encode(format!("api:{key}")))
	}

	/// Typed credentials for `key`.
	pub fn credentials(key: &str) -> MailgunCredentials {
		MailgunCredentials::new(ApiKey::new(key).expect("Fixture API key should be valid."))
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
