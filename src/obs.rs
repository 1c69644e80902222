//! Optional observability helpers for provisioning calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every provisioning call inside a span named
//!   `mailgun_provisioner.provision` with the `provider` and `stage` fields.
//! - Enable `metrics` to increment the `mailgun_provisioner_provision_total` counter for every
//!   attempt and outcome, labeled by `provider` + `outcome`.
//!
//! With both features disabled nothing is recorded. Secrets and response bodies are never
//! attached to spans or metrics.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::{_prelude::*, error::FailureKind};

/// Outcome labels recorded for each provisioning call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProvisionOutcome {
	/// Entry to `provision`.
	Attempt,
	/// Credentials were returned.
	Success,
	/// Failure propagated back to the caller.
	Failure(FailureKind),
}
impl ProvisionOutcome {
	/// Builds the outcome label for a finished call.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Self::Success,
			Err(e) => Self::Failure(e.kind()),
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProvisionOutcome::Attempt => "attempt",
			ProvisionOutcome::Success => "success",
			ProvisionOutcome::Failure(kind) => kind.as_str(),
		}
	}
}
impl Display for ProvisionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcome_labels_follow_failure_kind() {
		let failed: Result<()> = Err(Error::NoDomainsAvailable);

		assert_eq!(ProvisionOutcome::of(&failed).as_str(), "no_domains_available");
		assert_eq!(ProvisionOutcome::of(&Ok::<_, Error>(())).as_str(), "success");
		assert_eq!(ProvisionOutcome::Attempt.to_string(), "attempt");
	}
}
