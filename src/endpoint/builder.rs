//! Builder that validates endpoint URLs before producing [`ProviderEndpoints`].

// self
use crate::{_prelude::*, endpoint::ProviderEndpoints, error::ConfigError};

/// Builder for [`ProviderEndpoints`] values.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderEndpointsBuilder {
	/// Authorization endpoint (required).
	#[serde(default)]
	pub authorization_endpoint: Option<Url>,
	/// Optional token endpoint.
	#[serde(default)]
	pub token_endpoint: Option<Url>,
	/// Optional end-session endpoint.
	#[serde(default)]
	pub end_session_endpoint: Option<Url>,
	/// Rejects non-HTTPS endpoints when true (the default).
	#[serde(default = "require_https_default")]
	pub require_https: bool,
}
impl ProviderEndpointsBuilder {
	/// Creates an empty builder that requires HTTPS endpoints.
	pub fn new() -> Self {
		Self {
			authorization_endpoint: None,
			token_endpoint: None,
			end_session_endpoint: None,
			require_https: require_https_default(),
		}
	}

	/// Sets the authorization endpoint.
	pub fn authorization_endpoint(mut self, url: Url) -> Self {
		self.authorization_endpoint = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the end-session endpoint.
	pub fn end_session_endpoint(mut self, url: Url) -> Self {
		self.end_session_endpoint = Some(url);

		self
	}

	/// Overrides the HTTPS requirement, e.g. for a local development provider.
	pub fn require_https(mut self, require: bool) -> Self {
		self.require_https = require;

		self
	}

	/// Consumes the builder and validates the resulting endpoint set.
	pub fn build(self) -> Result<ProviderEndpoints, ConfigError> {
		let authorization =
			self.authorization_endpoint.ok_or(ConfigError::MissingAuthorizationEndpoint)?;
		let endpoints = ProviderEndpoints {
			authorization,
			token: self.token_endpoint,
			end_session: self.end_session_endpoint,
		};

		if self.require_https {
			validate_endpoint("authorization", &endpoints.authorization)?;

			if let Some(token) = endpoints.token.as_ref() {
				validate_endpoint("token", token)?;
			}
			if let Some(end_session) = endpoints.end_session.as_ref() {
				validate_endpoint("end_session", end_session)?;
			}
		}

		Ok(endpoints)
	}
}
impl Default for ProviderEndpointsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn require_https_default() -> bool {
	true
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Endpoint fixture should parse successfully.")
	}

	#[test]
	fn build_requires_authorization_endpoint() {
		let err = ProviderEndpointsBuilder::new()
			.token_endpoint(url("https://idp.example.com/token"))
			.build()
			.expect_err("Authorization endpoint is mandatory.");

		assert_eq!(err, ConfigError::MissingAuthorizationEndpoint);
	}

	#[test]
	fn build_rejects_insecure_endpoints_unless_relaxed() {
		let err = ProviderEndpointsBuilder::new()
			.authorization_endpoint(url("https://idp.example.com/authorize"))
			.end_session_endpoint(url("http://idp.example.com/logout"))
			.build()
			.expect_err("Plain HTTP endpoints must be rejected by default.");

		assert!(matches!(err, ConfigError::InsecureEndpoint { endpoint: "end_session", .. }));

		let endpoints = ProviderEndpointsBuilder::new()
			.authorization_endpoint(url("http://localhost:8080/authorize"))
			.require_https(false)
			.build()
			.expect("Relaxed builder should accept local HTTP endpoints.");

		assert_eq!(endpoints.authorization.as_str(), "http://localhost:8080/authorize");
		assert_eq!(endpoints.token, None);
	}
}
