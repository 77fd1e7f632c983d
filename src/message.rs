//! OpenID Connect message model.
//!
//! An [`OpenIdConnectMessage`] carries an issuer address plus two disjoint parameter
//! groups: the named parameters catalogued by [`ParameterName`], each stored in its own
//! slot, and an insertion-ordered map of custom parameters for everything else. Every
//! by-name write whose name matches a catalogued wire name lands in the named slot, so a
//! parameter is never stored twice and the builders can enumerate both groups blindly.

mod decode;
mod encode;
mod form_post;

pub use encode::form_urlencode;

// std
use std::array;
// crates.io
use serde::{Deserializer, Serializer, ser::SerializeMap};
// self
use crate::{
	_prelude::*,
	endpoint::ProviderEndpoints,
	error::ConfigError,
	parameter::{ParameterName, Property},
};

/// Kind of request a message represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
	/// Authentication request sent to the authorization endpoint.
	#[default]
	Authentication,
	/// Logout request sent to the end-session endpoint.
	Logout,
	/// Token request posted to the token endpoint.
	Token,
}
impl RequestType {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestType::Authentication => "authentication",
			RequestType::Logout => "logout",
			RequestType::Token => "token",
		}
	}
}
impl Display for RequestType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// OpenID Connect protocol message.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenIdConnectMessage {
	/// Kind of request this message represents.
	pub request_type: RequestType,
	issuer_address: String,
	named: [Option<String>; ParameterName::COUNT],
	custom: IndexMap<String, String>,
}
impl OpenIdConnectMessage {
	/// Creates an empty message whose issuer address is the empty string.
	pub fn new() -> Self {
		Self {
			request_type: RequestType::default(),
			issuer_address: String::new(),
			named: array::from_fn(|_| None),
			custom: IndexMap::new(),
		}
	}

	/// Creates an empty message directed at `issuer_address`.
	///
	/// Fails with [`Error::ArgumentNull`] when the address is absent.
	pub fn from_issuer_address(issuer_address: Option<&str>) -> Result<Self> {
		let issuer_address = issuer_address.ok_or(Error::argument_null("issuer_address"))?;
		let mut message = Self::new();

		message.issuer_address = issuer_address.to_owned();

		Ok(message)
	}

	/// Seeds an authentication request directed at the authorization endpoint.
	pub fn authentication_request(endpoints: &ProviderEndpoints) -> Self {
		Self::seeded(RequestType::Authentication, &endpoints.authorization)
	}

	/// Seeds a logout request directed at the end-session endpoint.
	pub fn logout_request(endpoints: &ProviderEndpoints) -> Result<Self> {
		let endpoint = endpoints
			.end_session
			.as_ref()
			.ok_or(ConfigError::MissingEndpoint { endpoint: "end_session" })?;

		Ok(Self::seeded(RequestType::Logout, endpoint))
	}

	/// Seeds a token request directed at the token endpoint.
	pub fn token_request(endpoints: &ProviderEndpoints) -> Result<Self> {
		let endpoint =
			endpoints.token.as_ref().ok_or(ConfigError::MissingEndpoint { endpoint: "token" })?;

		Ok(Self::seeded(RequestType::Token, endpoint))
	}

	fn seeded(request_type: RequestType, endpoint: &Url) -> Self {
		let mut message = Self::new();

		message.request_type = request_type;
		message.issuer_address = endpoint.as_str().to_owned();

		message
	}

	/// Base address the message is directed to.
	pub fn issuer_address(&self) -> &str {
		&self.issuer_address
	}

	/// Replaces the issuer address.
	pub fn set_issuer_address(&mut self, issuer_address: impl Into<String>) -> &mut Self {
		self.issuer_address = issuer_address.into();

		self
	}

	/// Returns the value stored for a named parameter.
	pub fn field(&self, name: ParameterName) -> Option<&str> {
		self.named[name.index()].as_deref()
	}

	/// Stores or clears a named parameter, returning the previous value.
	pub fn set_field(&mut self, name: ParameterName, value: Option<String>) -> Option<String> {
		std::mem::replace(&mut self.named[name.index()], value)
	}

	/// Reads a property by its typed address.
	pub fn get(&self, property: Property) -> Option<&str> {
		match property {
			Property::IssuerAddress => Some(self.issuer_address.as_str()),
			Property::Parameter(name) => self.field(name),
		}
	}

	/// Writes a property by its typed address.
	///
	/// Clearing a named parameter is allowed; clearing the issuer address fails with
	/// [`Error::ArgumentNull`].
	pub fn set(&mut self, property: Property, value: Option<String>) -> Result<()> {
		match property {
			Property::IssuerAddress => {
				self.issuer_address = value.ok_or(Error::argument_null("issuer_address"))?;
			},
			Property::Parameter(name) => {
				self.set_field(name, value);
			},
		}

		Ok(())
	}

	/// Reads any parameter by wire name, named or custom.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		match ParameterName::from_wire(name) {
			Some(named) => self.field(named),
			None => self.custom.get(name).map(String::as_str),
		}
	}

	/// Stores (`Some`) or removes (`None`) a parameter by wire name, returning the previous
	/// value.
	///
	/// Catalogued names are routed to their named slot; anything else goes to the custom
	/// map, where a new name is appended and an existing name keeps its position.
	pub fn set_parameter(
		&mut self,
		name: impl Into<String>,
		value: Option<String>,
	) -> Option<String> {
		let name = name.into();

		if let Some(named) = ParameterName::from_wire(&name) {
			return self.set_field(named, value);
		}

		match value {
			Some(value) => self.custom.insert(name, value),
			None => self.custom.shift_remove(&name),
		}
	}

	/// Adds a parameter by wire name.
	pub fn add_parameter(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> &mut Self {
		self.set_parameter(name, Some(value.into()));

		self
	}

	/// Removes a parameter by wire name, preserving the order of the remaining custom
	/// parameters.
	pub fn remove_parameter(&mut self, name: &str) -> Option<String> {
		self.set_parameter(name, None)
	}

	/// Custom parameters in insertion order.
	pub fn custom_parameters(&self) -> &IndexMap<String, String> {
		&self.custom
	}

	/// Emitted parameters in wire order: custom parameters in insertion order, then every
	/// non-empty named parameter in catalogue order.
	pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
		let custom = self.custom.iter().map(|(name, value)| (name.as_str(), value.as_str()));
		let named = ParameterName::ALL.iter().filter_map(|name| {
			self.field(*name).filter(|value| !value.is_empty()).map(|value| (name.as_str(), value))
		});

		custom.chain(named)
	}

	/// Returns true when no parameter would be emitted.
	pub fn has_parameters(&self) -> bool {
		self.parameters().next().is_some()
	}
}
impl Default for OpenIdConnectMessage {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for OpenIdConnectMessage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		struct Named<'a>(&'a OpenIdConnectMessage);
		impl Debug for Named<'_> {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				let mut map = f.debug_map();

				for name in ParameterName::ALL {
					if let Some(value) = self.0.field(*name) {
						if name.is_sensitive() {
							map.entry(&name.as_str(), &"<redacted>");
						} else {
							map.entry(&name.as_str(), &value);
						}
					}
				}

				map.finish()
			}
		}

		f.debug_struct("OpenIdConnectMessage")
			.field("request_type", &self.request_type)
			.field("issuer_address", &self.issuer_address)
			.field("named", &Named(self))
			.field("custom", &self.custom)
			.finish()
	}
}
impl Serialize for OpenIdConnectMessage {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(None)?;

		for (name, value) in self.parameters() {
			map.serialize_entry(name, value)?;
		}

		map.end()
	}
}
impl<'de> Deserialize<'de> for OpenIdConnectMessage {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		decode::deserialize_parameters(deserializer)
	}
}
