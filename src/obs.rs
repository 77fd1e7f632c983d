//! Optional observability helpers for message operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `openid_connect_message.op` with the `op`
//!   and `request_type` fields, plus a `warn` event whenever decoding drops a duplicate
//!   parameter.
//! - Enable `metrics` to increment the `openid_connect_message_op_total` counter for every
//!   build or decode, labeled by `op`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Message operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageOp {
	/// Redirect URL assembly.
	RedirectUrl,
	/// Form body assembly.
	FormBody,
	/// Auto-submitting HTML form rendering.
	FormPost,
	/// Parsing pairs, query strings, redirect URLs, or JSON.
	Decode,
}
impl MessageOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			MessageOp::RedirectUrl => "redirect_url",
			MessageOp::FormBody => "form_body",
			MessageOp::FormPost => "form_post",
			MessageOp::Decode => "decode",
		}
	}
}
impl Display for MessageOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
