// self
use crate::obs::ProvisionOutcome;

/// Records a provisioning outcome via the global metrics recorder (when enabled).
pub fn record_provision_outcome(provider: &'static str, outcome: ProvisionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"mailgun_provisioner_provision_total",
			"provider" => provider,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::FailureKind;

	#[test]
	fn record_provision_outcome_noop_without_metrics() {
		record_provision_outcome("mailgun", ProvisionOutcome::Failure(FailureKind::Unauthorized));
	}
}
