//! Auto-submitting HTML form post rendering.

// self
use crate::{
	_prelude::*,
	message::OpenIdConnectMessage,
	obs::{self, MessageOp, MessageSpan},
};

const FORM_POST_TITLE: &str = "Working...";
const FORM_POST_NOSCRIPT: &str = "Script is disabled. Click Submit to continue.";

impl OpenIdConnectMessage {
	/// Renders an HTML page that posts the emitted parameters to the issuer address.
	///
	/// The form submits itself once loaded; a `<noscript>` button covers clients without
	/// scripting. Every interpolated value is HTML-escaped.
	pub fn build_form_post(&self) -> String {
		let _span = MessageSpan::new(MessageOp::FormPost, self.request_type).entered();

		obs::record_message_op(MessageOp::FormPost);

		let mut html = String::with_capacity(512);

		html.push_str("<html><head><title>");
		html.push_str(FORM_POST_TITLE);
		html.push_str("</title></head><body>");
		html.push_str("<form method=\"POST\" name=\"hiddenform\" action=\"");
		html.push_str(&html_escape(self.issuer_address()));
		html.push_str("\">");

		for (name, value) in self.parameters() {
			html.push_str("<input type=\"hidden\" name=\"");
			html.push_str(&html_escape(name));
			html.push_str("\" value=\"");
			html.push_str(&html_escape(value));
			html.push_str("\" />");
		}

		html.push_str("<noscript><p>");
		html.push_str(FORM_POST_NOSCRIPT);
		html.push_str("</p><input type=\"submit\" value=\"Submit\" /></noscript>");
		html.push_str("</form>");
		html.push_str("<script>");
		html.push_str("window.setTimeout(function () { document.forms[0].submit(); }, 0);");
		html.push_str("</script>");
		html.push_str("</body></html>");

		html
	}
}

fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);

	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}

	Cow::Owned(escaped)
}
