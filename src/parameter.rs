//! Catalogue of named OpenID Connect parameters and the by-name property view.
//!
//! [`ParameterName`] enumerates every parameter the message stores in a dedicated field.
//! Declaration order is ascending by wire name, and that order is the order in which the
//! redirect-URL builder emits named parameters. Typed accessors on
//! [`OpenIdConnectMessage`] are generated from the same table so the two never drift apart.

// self
use crate::{_prelude::*, message::OpenIdConnectMessage};

macro_rules! def_parameters {
	($(($variant:ident, $wire:literal, $getter:ident, $setter:ident, $doc:literal)),+ $(,)?) => {
		/// Named protocol parameters stored in dedicated message fields.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(rename_all = "snake_case")]
		pub enum ParameterName {
			$(
				#[doc = $doc]
				$variant,
			)+
		}
		impl ParameterName {
			/// Every named parameter in emission order.
			pub const ALL: &'static [ParameterName] = &[$(ParameterName::$variant),+];
			/// Number of named parameters.
			pub const COUNT: usize = Self::ALL.len();

			/// Returns the wire name used in query strings, form bodies, and JSON.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(ParameterName::$variant => $wire,)+
				}
			}

			/// Looks up a named parameter by wire name.
			pub fn from_wire(name: &str) -> Option<Self> {
				match name {
					$($wire => Some(ParameterName::$variant),)+
					_ => None,
				}
			}
		}

		impl OpenIdConnectMessage {
			$(
				#[doc = concat!("Returns the `", $wire, "` parameter, if present.")]
				pub fn $getter(&self) -> Option<&str> {
					self.field(ParameterName::$variant)
				}

				#[doc = concat!("Sets the `", $wire, "` parameter.")]
				pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
					self.set_field(ParameterName::$variant, Some(value.into()));

					self
				}
			)+
		}
	};
}

def_parameters! {
	(AccessToken, "access_token", access_token, set_access_token, "Access token issued by the token endpoint."),
	(AcrValues, "acr_values", acr_values, set_acr_values, "Requested authentication context class references."),
	(ClaimsLocales, "claims_locales", claims_locales, set_claims_locales, "Preferred languages for returned claims."),
	(ClientAssertion, "client_assertion", client_assertion, set_client_assertion, "Signed assertion authenticating the client."),
	(ClientAssertionType, "client_assertion_type", client_assertion_type, set_client_assertion_type, "Format of the client assertion."),
	(ClientId, "client_id", client_id, set_client_id, "Client identifier registered with the provider."),
	(ClientSecret, "client_secret", client_secret, set_client_secret, "Client secret for confidential clients."),
	(Code, "code", code, set_code, "Authorization code returned by the authorization endpoint."),
	(Display, "display", display, set_display, "How the provider should display authentication UI."),
	(DomainHint, "domain_hint", domain_hint, set_domain_hint, "Hint about the user's home realm."),
	(Error, "error", error, set_error, "Error code returned by the provider."),
	(ErrorDescription, "error_description", error_description, set_error_description, "Human-readable error description."),
	(ErrorUri, "error_uri", error_uri, set_error_uri, "URI of a page describing the error."),
	(ExpiresIn, "expires_in", expires_in, set_expires_in, "Lifetime of the issued access token in seconds."),
	(GrantType, "grant_type", grant_type, set_grant_type, "Grant type presented to the token endpoint."),
	(IdToken, "id_token", id_token, set_id_token, "Identity token issued by the provider."),
	(IdTokenHint, "id_token_hint", id_token_hint, set_id_token_hint, "Previously issued identity token used as a hint."),
	(LoginHint, "login_hint", login_hint, set_login_hint, "Hint about the login identifier."),
	(MaxAge, "max_age", max_age, set_max_age, "Maximum authentication age in seconds."),
	(Nonce, "nonce", nonce, set_nonce, "Value binding the client session to the identity token."),
	(PostLogoutRedirectUri, "post_logout_redirect_uri", post_logout_redirect_uri, set_post_logout_redirect_uri, "Where to send the user after logout."),
	(Prompt, "prompt", prompt, set_prompt, "Whether the provider prompts for reauthentication or consent."),
	(RedirectUri, "redirect_uri", redirect_uri, set_redirect_uri, "Where the provider sends the response."),
	(RequestUri, "request_uri", request_uri, set_request_uri, "Reference to a request object."),
	(Resource, "resource", resource, set_resource, "Target resource the token is requested for."),
	(ResponseMode, "response_mode", response_mode, set_response_mode, "How the response parameters are returned."),
	(ResponseType, "response_type", response_type, set_response_type, "Requested response type."),
	(Scope, "scope", scope, set_scope, "Space-delimited requested scopes."),
	(SessionState, "session_state", session_state, set_session_state, "Session management state."),
	(State, "state", state, set_state, "Opaque value round-tripped through the redirect."),
	(TokenType, "token_type", token_type, set_token_type, "Type of the issued access token."),
	(UiLocales, "ui_locales", ui_locales, set_ui_locales, "Preferred languages for the user interface."),
}

impl ParameterName {
	/// Returns true for parameters whose values must stay out of logs.
	pub const fn is_sensitive(self) -> bool {
		matches!(
			self,
			ParameterName::AccessToken
				| ParameterName::ClientAssertion
				| ParameterName::ClientSecret
				| ParameterName::Code
				| ParameterName::IdToken
				| ParameterName::IdTokenHint
		)
	}

	pub(crate) const fn index(self) -> usize {
		self as usize
	}
}
impl Display for ParameterName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ParameterName {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_wire(s).ok_or_else(|| Error::UnknownProperty { name: s.to_owned() })
	}
}

/// Addressable message property used by by-name access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
	/// The message's issuer address.
	IssuerAddress,
	/// One of the named protocol parameters.
	Parameter(ParameterName),
}
impl Property {
	/// Wire-style name of the issuer address property.
	pub const ISSUER_ADDRESS: &'static str = "issuer_address";

	/// Returns the property name accepted by [`FromStr`].
	pub const fn as_str(self) -> &'static str {
		match self {
			Property::IssuerAddress => Self::ISSUER_ADDRESS,
			Property::Parameter(name) => name.as_str(),
		}
	}
}
impl From<ParameterName> for Property {
	fn from(name: ParameterName) -> Self {
		Self::Parameter(name)
	}
}
impl Display for Property {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Property {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == Self::ISSUER_ADDRESS {
			return Ok(Self::IssuerAddress);
		}

		ParameterName::from_str(s).map(Self::Parameter)
	}
}
