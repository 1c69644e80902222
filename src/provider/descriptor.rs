//! Service descriptor data structures shared with the plugin host.
//!
//! A descriptor is pure data: it names the provider, declares which capability it offers,
//! and lists the credential parameters the host must collect before calling `provision`.

/// Builder API for assembling service descriptors.
pub mod builder;
/// Credential parameter declarations and schema validation.
pub mod parameter;

pub use builder::*;
pub use parameter::*;

// self
use crate::_prelude::*;

/// Capability category a provider offers to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
	/// Outbound mail delivery.
	Mail,
}
impl ServiceType {
	/// Returns the identifier hosts use for this service type.
	pub const fn as_str(self) -> &'static str {
		match self {
			ServiceType::Mail => "mail",
		}
	}
}
impl Display for ServiceType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Immutable provider metadata exposed to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
	/// Identifier the host registers the provider under.
	pub name: String,
	/// Capability category.
	#[serde(rename = "type")]
	pub service_type: ServiceType,
	/// Human-readable description.
	pub description: String,
	/// Parameters the host must collect before provisioning.
	pub parameters: ParameterSchema,
}
impl ServiceDescriptor {
	/// Creates a new builder for the provided name and service type.
	pub fn builder(name: impl Into<String>, service_type: ServiceType) -> ServiceDescriptorBuilder {
		ServiceDescriptorBuilder::new(name, service_type)
	}

	/// Returns true when the provider offers `service_type`.
	pub fn provides(&self, service_type: ServiceType) -> bool {
		self.service_type == service_type
	}
}
