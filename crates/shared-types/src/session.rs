use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser local-storage key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "user_session";

/// The two roles a session can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Role {
    Admin,
    Client,
}

impl Role {
    /// Parse a wire/storage role string. Anything other than the two known
    /// roles yields `None`, which callers treat as "unauthenticated".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "client" => Some(Role::Client),
            _ => None,
        }
    }

    /// Lowercase string used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
        }
    }

    /// Path of the dashboard this role lands on after login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Client => "/client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only persisted fact: who is logged in, reduced to a role.
///
/// There is no token, expiry or identity here. Possessing a `Session` grants
/// nothing server-side; the dashboards use it purely to decide what to render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// Decode a stored session record.
    ///
    /// Malformed JSON, a missing `role`, or an unknown role all read as no
    /// session at all.
    pub fn from_storage(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Encode for storage as `{"role":"..."}`.
    pub fn to_storage(&self) -> String {
        format!(r#"{{"role":"{}"}}"#, self.role.as_str())
    }

    /// Whether this session may view a dashboard that requires `required`.
    pub fn grants(&self, required: Role) -> bool {
        self.role == required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_format_matches_browser_record() {
        assert_eq!(Session::new(Role::Admin).to_storage(), r#"{"role":"admin"}"#);
        assert_eq!(Session::new(Role::Client).to_storage(), r#"{"role":"client"}"#);
    }

    #[test]
    fn reads_back_what_it_writes() {
        let session = Session::new(Role::Client);
        assert_eq!(Session::from_storage(&session.to_storage()), Some(session));
    }

    #[test]
    fn ignores_extra_fields() {
        let parsed = Session::from_storage(r#"{"role":"admin","name":"x"}"#);
        assert_eq!(parsed, Some(Session::new(Role::Admin)));
    }

    #[test]
    fn unknown_role_is_no_session() {
        assert_eq!(Session::from_storage(r#"{"role":"superuser"}"#), None);
        assert_eq!(Session::from_storage(r#"{"role":"Admin"}"#), None);
    }

    #[test]
    fn malformed_records_are_no_session() {
        assert_eq!(Session::from_storage(""), None);
        assert_eq!(Session::from_storage("null"), None);
        assert_eq!(Session::from_storage("{}"), None);
        assert_eq!(Session::from_storage(r#"{"role":null}"#), None);
        assert_eq!(Session::from_storage("not json"), None);
    }

    #[test]
    fn grants_only_matching_role() {
        let admin = Session::new(Role::Admin);
        assert!(admin.grants(Role::Admin));
        assert!(!admin.grants(Role::Client));
    }

    #[test]
    fn role_parse_and_paths() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::Admin.dashboard_path(), "/admin");
        assert_eq!(Role::Client.dashboard_path(), "/client");
        assert_eq!(Role::Client.to_string(), "client");
    }
}
