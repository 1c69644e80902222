// self
use crate::{_prelude::*, auth::CredentialSet, error::CredentialError};

/// Declaration of a single credential parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSpec {
	/// Parameter name as it appears in the host's credential set.
	pub name: String,
	/// Whether the host must supply a value.
	pub required: bool,
}
impl ParameterSpec {
	/// Declares a required parameter.
	pub fn required(name: impl Into<String>) -> Self {
		Self { name: name.into(), required: true }
	}

	/// Declares an optional parameter.
	pub fn optional(name: impl Into<String>) -> Self {
		Self { name: name.into(), required: false }
	}
}

/// Parameter groups a provider declares. Only credentials exist today.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
	/// Credential parameters, in declaration order.
	pub credentials: Vec<ParameterSpec>,
}
impl ParameterSchema {
	/// Checks `set` against the declared credentials.
	///
	/// Required parameters must be present; any declared parameter that is present must be
	/// non-empty. Undeclared entries are ignored.
	pub fn validate(&self, set: &CredentialSet) -> Result<(), CredentialError> {
		for spec in &self.credentials {
			match set.get(&spec.name) {
				None if spec.required =>
					return Err(CredentialError::Missing { name: spec.name.clone() }),
				Some("") => return Err(CredentialError::Empty { name: spec.name.clone() }),
				_ => {},
			}
		}

		Ok(())
	}
}
