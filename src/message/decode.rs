//! Message parsing from decoded pairs, query strings, redirect URLs, and JSON.

// crates.io
use serde::{
	Deserializer,
	de::{Error as _, MapAccess, Visitor},
};
use serde_json::value::RawValue;
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	error::DecodeError,
	message::OpenIdConnectMessage,
	obs::{self, MessageOp, MessageSpan},
};

/// JSON scalar accepted as a parameter value, reduced to its text.
///
/// Strings are unescaped; numbers and booleans keep their JSON text byte for byte so `1.0`
/// stays `1.0`; `null` is absent.
struct ParameterValue(Option<String>);
impl<'de> Deserialize<'de> for ParameterValue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = <Box<RawValue>>::deserialize(deserializer)?;
		let text = raw.get();

		match text.as_bytes().first() {
			Some(b'"') => serde_json::from_str(text).map(|s| Self(Some(s))).map_err(D::Error::custom),
			Some(b'{' | b'[') =>
				Err(D::Error::custom("expected a string, number, boolean, or null parameter value")),
			_ if text == "null" => Ok(Self(None)),
			_ => Ok(Self(Some(text.to_owned()))),
		}
	}
}

impl OpenIdConnectMessage {
	/// Builds a message from already-decoded key/value pairs.
	///
	/// Catalogued names fill their named slot and anything else becomes a custom parameter.
	/// When a key repeats, the first value wins and later values are dropped.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut message = Self::new();
		let _span = MessageSpan::new(MessageOp::Decode, message.request_type).entered();

		obs::record_message_op(MessageOp::Decode);

		for (name, value) in pairs {
			let name = name.as_ref();

			if message.parameter(name).is_some() {
				obs::trace_duplicate_parameter(name);

				continue;
			}

			message.set_parameter(name, Some(value.into()));
		}

		message
	}

	/// Parses an `application/x-www-form-urlencoded` query string or form body.
	///
	/// A single leading `?` is ignored.
	pub fn from_query(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);

		Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
	}

	/// Parses a redirect URL into issuer address and parameters.
	///
	/// Everything before the first `?` becomes the issuer address.
	pub fn from_redirect_url(url: &str) -> Self {
		let (issuer_address, query) = url.split_once('?').unwrap_or((url, ""));
		let mut message = Self::from_query(query);

		message.set_issuer_address(issuer_address);

		message
	}

	/// Parses a JSON object of parameters.
	///
	/// String values are kept verbatim, numbers and booleans are stored as their exact JSON
	/// text (`1.0` and `1e2` are not normalized), and `null` members are skipped. Arrays and
	/// nested objects are rejected.
	pub fn from_json(json: &str) -> Result<Self> {
		let mut deserializer = serde_json::Deserializer::from_str(json);
		let message: Self =
			serde_path_to_error::deserialize(&mut deserializer).map_err(DecodeError::from)?;

		deserializer.end().map_err(|source| DecodeError::Syntax { source })?;

		Ok(message)
	}
}

pub(super) fn deserialize_parameters<'de, D>(
	deserializer: D,
) -> Result<OpenIdConnectMessage, D::Error>
where
	D: Deserializer<'de>,
{
	deserializer.deserialize_map(MessageVisitor)
}

struct MessageVisitor;
impl<'de> Visitor<'de> for MessageVisitor {
	type Value = OpenIdConnectMessage;

	fn expecting(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("an object of message parameters")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut pairs: Vec<(String, String)> = Vec::with_capacity(map.size_hint().unwrap_or_default());

		while let Some((name, ParameterValue(value))) = map.next_entry()? {
			if let Some(value) = value {
				pairs.push((name, value));
			}
		}

		Ok(OpenIdConnectMessage::from_pairs(pairs))
	}
}
