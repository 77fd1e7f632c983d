//! OpenID Connect protocol messages for Rust: typed parameters, redirect URLs, form posts, and
//! request parsing with optional observability.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod endpoint;
pub mod error;
pub mod message;
pub mod obs;
pub mod parameter;
#[cfg(any(test, feature = "test"))] pub mod _preludet;

mod _prelude {
	pub use std::{
		borrow::Cow,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use indexmap::IndexMap;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use endpoint::{ProviderEndpoints, ProviderEndpointsBuilder};
pub use message::{OpenIdConnectMessage, RequestType};
pub use parameter::{ParameterName, Property};
pub use url;
#[cfg(test)] use color_eyre as _;
