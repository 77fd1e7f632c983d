//! Provider endpoint configuration used to seed outgoing messages.
//!
//! [`ProviderEndpoints`] holds validated endpoint URLs. It can be assembled through
//! [`ProviderEndpointsBuilder`] or read straight from an OpenID discovery document, whose
//! `authorization_endpoint`, `token_endpoint`, and `end_session_endpoint` members map onto
//! the builder.

/// Builder API for assembling endpoint sets.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	error::{ConfigError, DecodeError},
};

/// Endpoint set exposed by an OpenID provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProviderEndpointsBuilder")]
pub struct ProviderEndpoints {
	/// Authorization endpoint receiving authentication requests.
	#[serde(rename = "authorization_endpoint")]
	pub authorization: Url,
	/// Optional token endpoint receiving token requests.
	#[serde(rename = "token_endpoint", skip_serializing_if = "Option::is_none")]
	pub token: Option<Url>,
	/// Optional end-session endpoint receiving logout requests.
	#[serde(rename = "end_session_endpoint", skip_serializing_if = "Option::is_none")]
	pub end_session: Option<Url>,
}
impl ProviderEndpoints {
	/// Creates a new builder.
	pub fn builder() -> ProviderEndpointsBuilder {
		ProviderEndpointsBuilder::new()
	}

	/// Reads the endpoint members of a discovery document and validates them.
	///
	/// Members other than the endpoint URLs and `require_https` are ignored.
	pub fn from_discovery_document(json: &str) -> Result<Self> {
		let mut deserializer = serde_json::Deserializer::from_str(json);
		let builder: ProviderEndpointsBuilder =
			serde_path_to_error::deserialize(&mut deserializer).map_err(DecodeError::from)?;

		deserializer.end().map_err(|source| DecodeError::Syntax { source })?;

		Ok(builder.build()?)
	}
}
impl TryFrom<ProviderEndpointsBuilder> for ProviderEndpoints {
	type Error = ConfigError;

	fn try_from(builder: ProviderEndpointsBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}
