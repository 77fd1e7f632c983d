// self
use openid_connect_message::{OpenIdConnectMessage, ParameterName};

const ISSUER_ADDRESS: &str = "http://gotJwt.onmicrosoft.com";
const REDIRECT_URI: &str = "http://gotJwt.onmicrosoft.com/signedIn";
const RESOURCE: &str = "location data";
const CUSTOM_PARAMETER_NAME: &str = "Custom Parameter Name";
const CUSTOM_PARAMETER_VALUE: &str = "Custom Parameter Value";

fn message(issuer_address: Option<&str>) -> OpenIdConnectMessage {
	match issuer_address {
		Some(issuer_address) => OpenIdConnectMessage::from_issuer_address(Some(issuer_address))
			.expect("Issuer address fixture should be accepted."),
		None => OpenIdConnectMessage::new(),
	}
}

#[test]
fn empty_message_builds_empty_string() {
	assert_eq!(message(None).build_redirect_url(), "");
}

#[test]
fn issuer_address_only_builds_issuer_address() {
	assert_eq!(message(Some(ISSUER_ADDRESS)).build_redirect_url(), ISSUER_ADDRESS);
}

#[test]
fn issuer_address_and_redirect_uri() {
	let mut message = message(Some(ISSUER_ADDRESS));

	message.set_redirect_uri(REDIRECT_URI);

	assert_eq!(
		message.build_redirect_url(),
		"http://gotJwt.onmicrosoft.com?redirect_uri=http%3a%2f%2fgotJwt.onmicrosoft.com%2fsignedIn"
	);
}

#[test]
fn empty_issuer_address_starts_with_query() {
	let mut message = message(None);

	message.set_redirect_uri(REDIRECT_URI);

	assert_eq!(
		message.build_redirect_url(),
		"?redirect_uri=http%3a%2f%2fgotJwt.onmicrosoft.com%2fsignedIn"
	);
}

#[test]
fn named_parameters_follow_catalogue_order() {
	let mut message = message(Some(ISSUER_ADDRESS));

	message.set_resource(RESOURCE).set_redirect_uri(REDIRECT_URI);

	assert_eq!(
		message.build_redirect_url(),
		"http://gotJwt.onmicrosoft.com?redirect_uri=http%3a%2f%2fgotJwt.onmicrosoft.com%2fsignedIn\
		 &resource=location+data"
	);
}

#[test]
fn custom_parameters_precede_named_parameters() {
	let mut message = message(Some(ISSUER_ADDRESS));

	message.set_redirect_uri(REDIRECT_URI).set_resource(RESOURCE);
	message.add_parameter(CUSTOM_PARAMETER_NAME, CUSTOM_PARAMETER_VALUE);

	assert_eq!(
		message.build_redirect_url(),
		"http://gotJwt.onmicrosoft.com?Custom+Parameter+Name=Custom+Parameter+Value\
		 &redirect_uri=http%3a%2f%2fgotJwt.onmicrosoft.com%2fsignedIn&resource=location+data"
	);
}

#[test]
fn cleared_and_empty_named_parameters_are_skipped() {
	let mut message = message(Some(ISSUER_ADDRESS));

	message.set_nonce("").set_state("abc");
	message.set_field(ParameterName::State, None);

	assert_eq!(message.build_redirect_url(), ISSUER_ADDRESS);
}

#[test]
fn reserved_characters_are_escaped_in_names_and_values() {
	let mut message = message(Some(ISSUER_ADDRESS));

	message.add_parameter("a&b=c", "x+y;z#?");
	message.set_state("a!b(c)*d-e_f.g~h");
	message.set_scope("openid profile");

	assert_eq!(
		message.build_redirect_url(),
		"http://gotJwt.onmicrosoft.com?a%26b%3dc=x%2by%3bz%23%3f\
		 &scope=openid+profile&state=a!b(c)*d-e_f.g%7eh"
	);
}

#[test]
fn non_ascii_text_is_escaped_as_lower_case_utf8() {
	let mut message = message(Some(ISSUER_ADDRESS));

	message.add_parameter("región", "Zürich 東京");
	message.set_ui_locales("fr-CA fr");

	assert_eq!(
		message.build_redirect_url(),
		"http://gotJwt.onmicrosoft.com?regi%c3%b3n=Z%c3%bcrich+%e6%9d%b1%e4%ba%ac\
		 &ui_locales=fr-CA+fr"
	);
}

#[test]
fn every_named_parameter_is_emitted_once_in_order() {
	let mut message = message(None);

	for name in ParameterName::ALL.iter().rev() {
		message.set_field(*name, Some(format!("{name} value")));
	}

	let expected = ParameterName::ALL
		.iter()
		.map(|name| format!("{name}={name}+value"))
		.collect::<Vec<_>>()
		.join("&");

	assert_eq!(message.build_redirect_url(), format!("?{expected}"));
	assert!(expected.starts_with("access_token=access_token+value&acr_values=acr_values+value&"));
	assert!(expected.ends_with("&ui_locales=ui_locales+value"));
}
