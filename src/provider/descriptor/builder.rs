// std
use std::{collections::BTreeSet, iter::IntoIterator};
// self
use crate::{
	_prelude::*,
	provider::{ParameterSchema, ParameterSpec, ServiceDescriptor, ServiceType},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum DescriptorError {
	/// Provider name is empty or contains whitespace.
	#[error("Provider name `{name}` must be non-empty and free of whitespace.")]
	InvalidName {
		/// Name that failed validation.
		name: String,
	},
	/// Parameter name is empty or contains whitespace.
	#[error("Parameter name `{name}` must be non-empty and free of whitespace.")]
	InvalidParameterName {
		/// Name that failed validation.
		name: String,
	},
	/// Parameter declared twice.
	#[error("Parameter `{name}` is declared more than once.")]
	DuplicateParameter {
		/// Repeated parameter name.
		name: String,
	},
}

/// Builder for [`ServiceDescriptor`] values.
#[derive(Debug)]
pub struct ServiceDescriptorBuilder {
	/// Identifier the host registers the provider under.
	pub name: String,
	/// Capability category.
	pub service_type: ServiceType,
	/// Human-readable description; empty unless set.
	pub description: String,
	/// Credential parameters in declaration order.
	pub credentials: Vec<ParameterSpec>,
}
impl ServiceDescriptorBuilder {
	/// Creates a new builder seeded with the provided name and type.
	pub fn new(name: impl Into<String>, service_type: ServiceType) -> Self {
		Self { name: name.into(), service_type, description: String::new(), credentials: Vec::new() }
	}

	/// Sets the description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();

		self
	}

	/// Declares a single credential parameter.
	pub fn credential(mut self, spec: ParameterSpec) -> Self {
		self.credentials.push(spec);

		self
	}

	/// Declares multiple credential parameters.
	pub fn credentials<I>(mut self, specs: I) -> Self
	where
		I: IntoIterator<Item = ParameterSpec>,
	{
		self.credentials.extend(specs);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ServiceDescriptor, DescriptorError> {
		let descriptor = ServiceDescriptor {
			name: self.name,
			service_type: self.service_type,
			description: self.description,
			parameters: ParameterSchema { credentials: self.credentials },
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ServiceDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), DescriptorError> {
		if !is_valid_name(&self.name) {
			return Err(DescriptorError::InvalidName { name: self.name.clone() });
		}

		let mut seen = BTreeSet::new();

		for spec in &self.parameters.credentials {
			if !is_valid_name(&spec.name) {
				return Err(DescriptorError::InvalidParameterName { name: spec.name.clone() });
			}
			if !seen.insert(spec.name.as_str()) {
				return Err(DescriptorError::DuplicateParameter { name: spec.name.clone() });
			}
		}

		Ok(())
	}
}

fn is_valid_name(name: &str) -> bool {
	!name.is_empty() && !name.chars().any(char::is_whitespace)
}
