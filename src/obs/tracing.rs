// self
use crate::_prelude::*;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedProvision<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedProvision<F> = F;

/// A span builder used around provisioning calls.
#[derive(Clone, Debug)]
pub struct ProvisionSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ProvisionSpan {
	/// Creates a new span tagged with the provider name + stage.
	pub fn new(provider: &'static str, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("mailgun_provisioner.provision", provider, stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (provider, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedProvision<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Notes that a 200 body could not be read as a domain listing.
///
/// Only the serde path is recorded; the body carries SMTP passwords.
pub fn note_listing_parse_failure(path: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(path, "domain listing body could not be parsed");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = path;
	}
}
