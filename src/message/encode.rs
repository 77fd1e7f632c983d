//! Redirect-URL and form-body assembly.

// crates.io
use url::form_urlencoded::{self, Serializer as FormSerializer};
// self
use crate::{
	message::OpenIdConnectMessage,
	obs::{self, MessageOp, MessageSpan},
};

/// Percent-encodes a single key or value the way ASP.NET's `HttpUtility.UrlEncode` does.
///
/// Spaces become `+`; alphanumerics and `!()*-._` pass through; every other byte of the UTF-8
/// encoding becomes `%xx` with lower-case hex digits.
pub fn form_urlencode(value: &str) -> String {
	relax_escapes(form_urlencoded::byte_serialize(value.as_bytes()).collect())
}

// Rewrites serializer output: `%21`, `%28`, `%29` go back to `!()` and hex is lower-cased.
// Input must come from the form serializer, where every `%` starts a three-byte escape.
fn relax_escapes(serialized: String) -> String {
	if !serialized.contains('%') {
		return serialized;
	}

	let mut relaxed = String::with_capacity(serialized.len());
	let mut rest = serialized.as_str();

	while let Some(at) = rest.find('%') {
		relaxed.push_str(&rest[..at]);

		let (escape, tail) = rest[at..].split_at(3.min(rest.len() - at));

		match escape {
			"%21" => relaxed.push('!'),
			"%28" => relaxed.push('('),
			"%29" => relaxed.push(')'),
			_ => relaxed.push_str(&escape.to_ascii_lowercase()),
		}

		rest = tail;
	}

	relaxed.push_str(rest);

	relaxed
}

impl OpenIdConnectMessage {
	/// Builds the redirect URL for this message.
	///
	/// The result is the issuer address, followed by `?` and the encoded parameters when at
	/// least one parameter is emitted. Custom parameters come first in insertion order, then
	/// the non-empty named parameters in catalogue order.
	pub fn build_redirect_url(&self) -> String {
		let _span = MessageSpan::new(MessageOp::RedirectUrl, self.request_type).entered();

		obs::record_message_op(MessageOp::RedirectUrl);

		let query = self.encode_parameters();

		if query.is_empty() {
			return self.issuer_address().to_owned();
		}

		let mut url = String::with_capacity(self.issuer_address().len() + 1 + query.len());

		url.push_str(self.issuer_address());
		url.push('?');
		url.push_str(&query);

		url
	}

	/// Builds an `application/x-www-form-urlencoded` body holding the emitted parameters.
	pub fn build_form_body(&self) -> String {
		let _span = MessageSpan::new(MessageOp::FormBody, self.request_type).entered();

		obs::record_message_op(MessageOp::FormBody);

		self.encode_parameters()
	}

	fn encode_parameters(&self) -> String {
		let mut serializer = FormSerializer::new(String::new());

		serializer.extend_pairs(self.parameters());

		relax_escapes(serializer.finish())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn form_urlencode_matches_http_utility() {
		assert_eq!(form_urlencode("location data"), "location+data");
		assert_eq!(
			form_urlencode("http://gotJwt.onmicrosoft.com/signedIn"),
			"http%3a%2f%2fgotJwt.onmicrosoft.com%2fsignedIn"
		);
		assert_eq!(form_urlencode("a*b-c._d~e"), "a*b-c._d%7ee");
		assert_eq!(form_urlencode("a!b(c)"), "a!b(c)");
		assert_eq!(form_urlencode("é"), "%c3%a9");
		assert_eq!(form_urlencode("100%21"), "100%2521");
		assert_eq!(form_urlencode("a&b=c+d"), "a%26b%3dc%2bd");
	}

	#[test]
	fn redirect_url_keeps_http_utility_safe_characters() {
		let mut message =
			OpenIdConnectMessage::from_issuer_address(Some("http://gotJwt.onmicrosoft.com"))
				.expect("Issuer fixture should be accepted.");

		message.set_redirect_uri("http://gotJwt.onmicrosoft.com/signedIn").set_state("a!b(c)");

		assert_eq!(
			message.build_redirect_url(),
			"http://gotJwt.onmicrosoft.com?redirect_uri=http%3a%2f%2fgotJwt.onmicrosoft.com%2fsignedIn&state=a!b(c)"
		);
	}

	#[test]
	fn issuer_with_existing_query_is_left_untouched() {
		let mut message =
			OpenIdConnectMessage::from_issuer_address(Some("https://idp.example.com/auth?p=1"))
				.expect("Issuer fixture should be accepted.");

		message.set_state("xyz");

		assert_eq!(message.build_redirect_url(), "https://idp.example.com/auth?p=1?state=xyz");
	}

	#[test]
	fn form_body_omits_issuer_address() {
		let mut message =
			OpenIdConnectMessage::from_issuer_address(Some("https://idp.example.com/token"))
				.expect("Issuer fixture should be accepted.");

		message
			.set_grant_type("authorization_code")
			.set_code("SplxlOBeZQQYbYS6WxSbIA")
			.set_redirect_uri("https://client.example.org/cb");

		assert_eq!(
			message.build_form_body(),
			"code=SplxlOBeZQQYbYS6WxSbIA&grant_type=authorization_code&redirect_uri=https%3a%2f%2fclient.example.org%2fcb"
		);
		assert_eq!(OpenIdConnectMessage::new().build_form_body(), "");
	}
}
