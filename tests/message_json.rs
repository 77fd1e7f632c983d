// crates.io
use color_eyre::Result;
// self
use openid_connect_message::{OpenIdConnectMessage, error::Error};

#[test]
fn serializes_parameters_in_wire_order() -> Result<()> {
	let mut message = OpenIdConnectMessage::from_issuer_address(Some("https://rp.example.com"))?;

	message.set_state("af0ifjsldkj").set_code("SplxlOBeZQQYbYS6WxSbIA").set_scope("");
	message.add_parameter("session_hint", "abc");

	let encoded = serde_json::to_string(&message)?;

	assert_eq!(
		encoded,
		r#"{"session_hint":"abc","code":"SplxlOBeZQQYbYS6WxSbIA","state":"af0ifjsldkj"}"#
	);

	let decoded: OpenIdConnectMessage = serde_json::from_str(&encoded)?;

	assert_eq!(decoded.issuer_address(), "");
	assert_eq!(decoded.code(), Some("SplxlOBeZQQYbYS6WxSbIA"));
	assert_eq!(decoded.parameter("session_hint"), Some("abc"));
	assert_eq!(serde_json::to_string(&decoded)?, encoded);

	Ok(())
}

#[test]
fn token_response_json_decodes() -> Result<()> {
	let message = OpenIdConnectMessage::from_json(
		r#"{
			"access_token": "SlAV32hkKG",
			"token_type": "Bearer",
			"refresh_token": "8xLOxBtZp8",
			"expires_in": 3600,
			"id_token": "eyJhbGciOiJSUzI1NiIsImtpZCI6IjFlOWdkazcifQ"
		}"#,
	)?;

	assert_eq!(message.access_token(), Some("SlAV32hkKG"));
	assert_eq!(message.token_type(), Some("Bearer"));
	assert_eq!(message.expires_in(), Some("3600"));
	assert_eq!(message.parameter("refresh_token"), Some("8xLOxBtZp8"));
	assert!(message.id_token().is_some());
	assert!(!format!("{message:?}").contains("SlAV32hkKG"));

	Ok(())
}

#[test]
fn error_response_query_decodes() {
	let message = OpenIdConnectMessage::from_redirect_url(
		"https://client.example.org/cb?error=invalid_request\
		 &error_description=Unsupported+response_type+value&state=af0ifjsldkj",
	);

	assert_eq!(message.issuer_address(), "https://client.example.org/cb");
	assert_eq!(message.error(), Some("invalid_request"));
	assert_eq!(message.error_description(), Some("Unsupported response_type value"));
	assert_eq!(message.state(), Some("af0ifjsldkj"));
}

#[test]
fn malformed_json_is_a_decode_error() {
	let err = OpenIdConnectMessage::from_json(r#"{"state": ["a", "b"]}"#)
		.expect_err("Array values must be rejected.");

	assert!(matches!(err, Error::Decode(_)));
	assert!(err.to_string().contains("could not be decoded"));
}
