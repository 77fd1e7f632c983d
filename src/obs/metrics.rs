// self
use crate::obs::MessageOp;

/// Records a message operation via the global metrics recorder (when enabled).
pub fn record_message_op(op: MessageOp) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("openid_connect_message_op_total", "op" => op.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = op;
	}
}
