// self
use crate::{_prelude::*, message::RequestType, obs::MessageOp};

/// A span builder used by message operations.
#[derive(Clone, Debug)]
pub struct MessageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl MessageSpan {
	/// Creates a new span tagged with the provided operation + request type.
	pub fn new(op: MessageOp, request_type: RequestType) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!(
				"openid_connect_message.op",
				op = op.as_str(),
				request_type = request_type.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (op, request_type);

			Self {}
		}
	}

	/// Enters the span for the rest of the operation.
	pub fn entered(self) -> MessageSpanGuard {
		#[cfg(feature = "tracing")]
		{
			MessageSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			MessageSpanGuard {}
		}
	}
}

/// RAII guard returned by [`MessageSpan::entered`].
pub struct MessageSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for MessageSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("MessageSpanGuard(..)")
	}
}

/// Reports a repeated parameter that decoding dropped; only the name is logged.
pub fn trace_duplicate_parameter(name: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(parameter = name, "Dropped duplicate parameter; the first value wins.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = name;
	}
}
