//! Convenience re-exports and property exercisers for tests; enabled via `cfg(test)` or the
//! `test` crate feature.
//!
//! The exercisers address message properties by name (a parameter's wire name or
//! `issuer_address`) so table-driven tests can walk [`ParameterName::ALL`] instead of
//! repeating one test per field. Every helper panics on a mismatch.

pub use crate::_prelude::*;

// self
use crate::{
	message::OpenIdConnectMessage,
	parameter::{ParameterName, Property},
};

/// Failure a property write is expected to produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpectedError {
	/// The write must succeed.
	NoError,
	/// The write must fail with [`Error::ArgumentNull`] for `argument`.
	ArgumentNull {
		/// Expected argument name.
		argument: &'static str,
	},
	/// The write must fail with [`Error::UnknownProperty`] for `name`.
	UnknownProperty {
		/// Expected property name.
		name: String,
	},
}
impl ExpectedError {
	/// Expects [`Error::ArgumentNull`] for `argument`.
	pub fn argument_null(argument: &'static str) -> Self {
		Self::ArgumentNull { argument }
	}

	/// Expects [`Error::UnknownProperty`] for `name`.
	pub fn unknown_property(name: impl Into<String>) -> Self {
		Self::UnknownProperty { name: name.into() }
	}

	/// Panics unless no error was expected.
	pub fn process_no_error(&self) {
		assert_eq!(self, &Self::NoError, "Expected an error but the operation succeeded.");
	}

	/// Panics unless `err` is the expected error.
	pub fn process_error(&self, err: &Error) {
		let matched = match (self, err) {
			(Self::ArgumentNull { argument }, Error::ArgumentNull { argument: actual }) =>
				argument == actual,
			(Self::UnknownProperty { name }, Error::UnknownProperty { name: actual }) =>
				name == actual,
			_ => false,
		};

		assert!(matched, "Expected {self:?} but the operation failed with {err:?}.");
	}
}

/// Resolves a property by name, panicking when the message has no such property.
pub fn property(name: &str) -> Property {
	Property::from_str(name).unwrap_or_else(|err| {
		panic!("Property is not found: {name}, type: OpenIdConnectMessage ({err}).")
	})
}

/// Reads a property by name.
pub fn get_property(message: &OpenIdConnectMessage, name: &str) -> Option<String> {
	message.get(property(name)).map(ToOwned::to_owned)
}

/// Writes a property by name, panicking when the write fails.
pub fn set_property(message: &mut OpenIdConnectMessage, name: &str, value: Option<&str>) {
	if let Err(err) = message.set(property(name), value.map(ToOwned::to_owned)) {
		panic!("Setting {name} to {value:?} failed: {err}.");
	}
}

/// Checks a property's initial value, then writes each value in turn and verifies that it
/// reads back unchanged.
pub fn get_set(
	message: &mut OpenIdConnectMessage,
	name: &str,
	initial: Option<&str>,
	values: &[Option<&str>],
) {
	assert_eq!(get_property(message, name).as_deref(), initial, "Unexpected initial {name}.");

	for value in values {
		set_property(message, name, *value);

		assert_eq!(
			get_property(message, name).as_deref(),
			*value,
			"{name} did not round-trip while setting [{}].",
			comma_delimited(Some(values.iter().copied()))
		);
	}
}

/// Writes one value and checks the outcome against `expected`.
///
/// On success the value must read back unchanged before `expected` is consulted.
pub fn get_set_expecting(
	message: &mut OpenIdConnectMessage,
	name: &str,
	value: Option<&str>,
	expected: ExpectedError,
) {
	match message.set(property(name), value.map(ToOwned::to_owned)) {
		Ok(()) => {
			assert_eq!(get_property(message, name).as_deref(), value, "{name} did not round-trip.");

			expected.process_no_error();
		},
		Err(err) => expected.process_error(&err),
	}
}

/// Renders optional strings as `a, b, null`; `"null"` for no list and `"empty"` for an
/// empty one.
pub fn comma_delimited<'a, I>(strings: Option<I>) -> String
where
	I: IntoIterator<Item = Option<&'a str>>,
{
	let Some(strings) = strings else {
		return "null".into();
	};
	let rendered = strings.into_iter().map(|s| s.unwrap_or("null")).collect::<Vec<_>>();

	if rendered.is_empty() { "empty".into() } else { rendered.join(", ") }
}

/// Every named parameter's wire name, for table-driven tests.
pub fn parameter_names() -> impl Iterator<Item = &'static str> {
	ParameterName::ALL.iter().map(|name| name.as_str())
}
