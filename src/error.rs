//! Provisioning error taxonomy shared by the provider, transport, and host contract layers.

// self
use crate::{_prelude::*, provider::DescriptorError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical provisioning error exposed by public APIs.
///
/// The first three variants are the provider's answers; [`Error::Transport`] means no answer was
/// obtained at all. Messages are stable and callers may match on them.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Provider rejected the API key (observed as HTTP 407).
	#[error("Unauthorized.")]
	Unauthorized,
	/// Provider answered 200 but returned no usable sending domain.
	#[error("No domains available.")]
	NoDomainsAvailable,
	/// Provider answered with any other status code.
	#[error("Unexpected API error.")]
	UnexpectedApi {
		/// HTTP status code returned by the provider.
		status: u16,
	},
	/// The request could not be completed (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Host supplied credentials that violate the declared parameter schema.
	#[error(transparent)]
	Credentials(#[from] CredentialError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
impl Error {
	/// Returns the stable classification of this failure.
	pub fn kind(&self) -> FailureKind {
		match self {
			Self::Unauthorized => FailureKind::Unauthorized,
			Self::NoDomainsAvailable => FailureKind::NoDomainsAvailable,
			Self::UnexpectedApi { .. } => FailureKind::UnexpectedApiError,
			Self::Transport(_) => FailureKind::Transport,
			Self::Credentials(_) => FailureKind::InvalidCredentials,
			Self::Config(_) => FailureKind::Config,
		}
	}
}

/// Stable, copyable failure classes reported by [`Error::kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
	/// Authentication failure.
	Unauthorized,
	/// Account has no sending domain.
	NoDomainsAvailable,
	/// Any non-classified provider response.
	UnexpectedApiError,
	/// Provider could not be reached.
	Transport,
	/// Host contract violation on the credential set.
	InvalidCredentials,
	/// Local configuration problem.
	Config,
}
impl FailureKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailureKind::Unauthorized => "unauthorized",
			FailureKind::NoDomainsAvailable => "no_domains_available",
			FailureKind::UnexpectedApiError => "unexpected_api_error",
			FailureKind::Transport => "transport",
			FailureKind::InvalidCredentials => "invalid_credentials",
			FailureKind::Config => "config",
		}
	}
}
impl Display for FailureKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Credential-set violations detected against a parameter schema.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialError {
	/// A required parameter was not supplied.
	#[error("Required credential `{name}` is missing.")]
	Missing {
		/// Parameter name from the schema.
		name: String,
	},
	/// A parameter was supplied with an empty value.
	#[error("Credential `{name}` cannot be empty.")]
	Empty {
		/// Parameter name from the schema.
		name: String,
	},
}

/// Configuration failures raised while wiring the provisioner.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Domain listing endpoint cannot be parsed.
	#[error("Domain listing endpoint is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Built-in provider descriptor failed validation.
	#[error(transparent)]
	InvalidDescriptor(#[from] DescriptorError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, deadlines).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Transport error occurred while calling the domain listing endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Caller-configured deadline elapsed before the provider answered.
	#[error("Timed out while calling the domain listing endpoint.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the domain listing endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}
