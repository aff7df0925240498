//! Credential, session and auth endpoint payload types

use serde::{Deserialize, Serialize};

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// The bearer credential held by the client.
///
/// Invariant: `access_token` and `token_type` form a pair: the
/// `Authorization` header value can only be produced when the access token
/// is present, and `token_type` always carries a usable scheme (defaulting
/// to `Bearer`). The refresh token may outlive an expired access token but
/// never a logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Short-lived access token, if logged in.
    pub access_token: Option<String>,
    /// Long-lived token used to obtain a new access token.
    pub refresh_token: Option<String>,
    /// Authorization scheme, usually "Bearer".
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl Default for Credential {
    fn default() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            token_type: default_token_type(),
        }
    }
}

impl Credential {
    /// Creates an empty (logged-out) credential.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if an access token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Formats the `Authorization` header value, `"<type> <token>"`.
    ///
    /// Returns `None` when no access token is held, so an orphaned token
    /// type can never leak into a request.
    #[must_use]
    pub fn authorization_value(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("{} {}", self.token_type, token))
    }

    /// Merges a token payload into this credential.
    ///
    /// Fields absent from the payload keep their current value; the server
    /// may rotate only the access token and omit the rest.
    pub fn apply(&mut self, payload: &TokenPayload) {
        if let Some(access) = &payload.access_token {
            self.access_token = Some(access.clone());
        }
        if let Some(refresh) = &payload.refresh_token {
            self.refresh_token = Some(refresh.clone());
        }
        if let Some(token_type) = &payload.token_type {
            if !token_type.is_empty() {
                self.token_type = token_type.clone();
            }
        }
    }
}

/// Which storage tier receives the session's tokens.
///
/// Chosen once at login ("remember me") and carried with the session, so
/// later writes never re-derive the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persistence {
    /// Survives process restarts.
    Durable,
    /// Cleared when the process ends.
    #[default]
    Ephemeral,
}

/// The authenticated user, as returned by `/me` and the login endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Server-assigned id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role, e.g. "admin" or "teacher".
    #[serde(default)]
    pub role: Option<String>,
}

/// The complete client session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Current bearer credential.
    pub credential: Credential,
    /// Authenticated user, once known.
    pub user: Option<UserIdentity>,
    /// Storage tier chosen at login.
    pub persistence: Persistence,
}

impl Session {
    /// Returns true if the session holds an access token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credential.is_authenticated()
    }
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Must match `password`; the server enforces it.
    pub password_confirmation: String,
}

/// Token fields returned by `/auth/login`, `/auth/register` and
/// `/auth/refresh`.
///
/// Every field is optional on the wire; callers decide which absences are
/// fatal (a refresh without an access token forces logout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TokenPayload {
    /// New access token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// New refresh token, if rotated.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Authorization scheme.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the access token expires.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl TokenPayload {
    /// Builds the credential this payload describes, starting empty.
    #[must_use]
    pub fn to_credential(&self) -> Credential {
        let mut credential = Credential::empty();
        credential.apply(self);
        credential
    }
}

/// Login/register response: token fields plus the authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    /// Token fields.
    #[serde(flatten)]
    pub token: TokenPayload,
    /// The user that just authenticated.
    pub user: UserIdentity,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_credential_has_no_authorization_value() {
        let credential = Credential::empty();
        assert_eq!(credential.authorization_value(), None);
        assert!(!credential.is_authenticated());
    }

    #[test]
    fn authorization_value_pairs_type_and_token() {
        let mut credential = Credential::empty();
        credential.apply(&TokenPayload {
            access_token: Some("abc".to_string()),
            token_type: Some("Bearer".to_string()),
            ..TokenPayload::default()
        });
        assert_eq!(
            credential.authorization_value().unwrap(),
            "Bearer abc".to_string()
        );
    }

    #[test]
    fn apply_keeps_fields_absent_from_payload() {
        let mut credential = Credential {
            access_token: Some("old-access".to_string()),
            refresh_token: Some("old-refresh".to_string()),
            token_type: "Bearer".to_string(),
        };
        credential.apply(&TokenPayload {
            access_token: Some("new-access".to_string()),
            ..TokenPayload::default()
        });
        assert_eq!(credential.access_token.as_deref(), Some("new-access"));
        assert_eq!(credential.refresh_token.as_deref(), Some("old-refresh"));
        assert_eq!(credential.token_type, "Bearer");
    }

    #[test]
    fn apply_ignores_empty_token_type() {
        let mut credential = Credential::empty();
        credential.apply(&TokenPayload {
            token_type: Some(String::new()),
            ..TokenPayload::default()
        });
        assert_eq!(credential.token_type, "Bearer");
    }

    #[test]
    fn auth_payload_flattens_token_fields() {
        let payload: AuthPayload = serde_json::from_value(serde_json::json!({
            "access_token": "a1",
            "refresh_token": "r1",
            "token_type": "Bearer",
            "expires_in": 3600,
            "user": { "id": 7, "name": "Admin", "email": "admin@example.com", "role": "admin" }
        }))
        .unwrap();
        assert_eq!(payload.token.access_token.as_deref(), Some("a1"));
        assert_eq!(payload.user.id, 7);
        assert_eq!(payload.user.role.as_deref(), Some("admin"));
    }
}
