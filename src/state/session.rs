//! Session Context
//!
//! Process-wide authentication state: token, current user, and role.
//! Initialized at login/signup, cleared at logout, read-only everywhere else.
//! The session is mirrored to local storage so a page reload keeps the user
//! signed in; no other code touches storage for auth state.

use leptos::*;

const TOKEN_KEY: &str = "mentormatch_token";
const USER_KEY: &str = "mentormatch_user";
const ROLE_KEY: &str = "mentormatch_role";

/// Account role, immutable after signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Mentor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
            Role::Admin => "admin",
        }
    }
}

/// The signed-in user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub experience: String,
}

/// Session state provided to all components
#[derive(Clone)]
pub struct Session {
    /// Bearer token for authorized calls
    pub token: RwSignal<Option<String>>,
    /// Current user identity
    pub user: RwSignal<Option<SessionUser>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide the session to the component tree, hydrated from local storage.
pub fn provide_session() {
    let session = Session {
        token: create_rw_signal(stored_item(TOKEN_KEY)),
        user: create_rw_signal(stored_user()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(session);
}

impl Session {
    pub fn signed_in(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.get().map(|u| u.role)
    }

    /// Initialize the session after a successful login or signup.
    pub fn sign_in(&self, token: String, user: SessionUser) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &token);
            let _ = storage.set_item(ROLE_KEY, user.role.as_str());
            if let Ok(serialized) = serde_json::to_string(&user) {
                let _ = storage.set_item(USER_KEY, &serialized);
            }
        }
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    /// Tear down the session and wipe stored credentials.
    pub fn sign_out(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
            let _ = storage.remove_item(ROLE_KEY);
        }
        self.token.set(None);
        self.user.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.try_set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.try_set(None);
        })
        .forget();
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn stored_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn stored_user() -> Option<SessionUser> {
    stored_item(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_deserializes_from_lowercase() {
        let role: Role = serde_json::from_str(r#""mentor""#).unwrap();
        assert_eq!(role, Role::Mentor);
    }

    #[test]
    fn role_defaults_to_student() {
        let user: SessionUser =
            serde_json::from_str(r#"{"_id": "u1", "name": "Asha"}"#).unwrap();
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn session_user_round_trips_through_storage_format() {
        let user: SessionUser = serde_json::from_str(
            r#"{"_id": "u1", "name": "Asha", "role": "admin", "domain": "AI", "city": "Pune"}"#,
        )
        .unwrap();
        let serialized = serde_json::to_string(&user).unwrap();
        let restored: SessionUser = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored, user);
        assert_eq!(restored.role.as_str(), "admin");
    }
}
