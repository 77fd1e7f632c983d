//! Message-level error types shared by construction, by-name access, parsing, and endpoint
//! configuration.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required argument was absent.
	#[error("Value cannot be null: {argument}.")]
	ArgumentNull {
		/// Name of the absent argument.
		argument: &'static str,
	},
	/// By-name access referenced a property the message does not expose.
	#[error("Message has no property named `{name}`.")]
	UnknownProperty {
		/// Requested property name.
		name: String,
	},
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Incoming payload could not be decoded into a message.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
impl Error {
	/// Shorthand for [`Error::ArgumentNull`].
	pub const fn argument_null(argument: &'static str) -> Self {
		Self::ArgumentNull { argument }
	}
}

/// Endpoint configuration and validation failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// Authorization endpoint is required for every endpoint set.
	#[error("Missing authorization endpoint.")]
	MissingAuthorizationEndpoint,
	/// An optional endpoint is required by the requested message kind.
	#[error("The {endpoint} endpoint is not configured.")]
	MissingEndpoint {
		/// Which endpoint is missing.
		endpoint: &'static str,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Failures raised while decoding an incoming message.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// JSON body is malformed or does not describe a parameter object.
	#[error("Message JSON could not be decoded.")]
	Json {
		/// Structured parsing failure including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Input continues after the JSON object.
	#[error("Message JSON has trailing characters.")]
	Syntax {
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Json { source }
	}
}
