//! Login Session
//!
//! Token, role and username of the signed-in user, mirrored to local
//! storage so a page reload reconstructs the authenticated view.

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const USERNAME_KEY: &str = "username";

/// Session returned by the login endpoint
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Session {
    pub token: String,
    pub role: String,
    pub username: String,
}

impl Session {
    /// Creation forms are shown only to admins and planners
    pub fn can_edit(&self) -> bool {
        matches!(self.role.as_str(), "admin" | "planner")
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the session across page reloads
pub fn save(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(ROLE_KEY, &session.role);
        let _ = storage.set_item(USERNAME_KEY, &session.username);
    }
}

/// Restore a previously persisted session, if any
pub fn load() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let role = storage.get_item(ROLE_KEY).ok()??;
    let username = storage.get_item(USERNAME_KEY).ok()??;
    if token.is_empty() {
        return None;
    }
    Some(Session {
        token,
        role,
        username,
    })
}

/// Purge the persisted credentials
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}

/// Bearer token for outbound requests
pub fn stored_token() -> Option<String> {
    let token = local_storage()?.get_item(TOKEN_KEY).ok()??;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: &str) -> Session {
        Session {
            token: "t-1".to_string(),
            role: role.to_string(),
            username: "user".to_string(),
        }
    }

    #[test]
    fn admin_and_planner_can_edit() {
        assert!(session("admin").can_edit());
        assert!(session("planner").can_edit());
    }

    #[test]
    fn other_roles_are_read_only() {
        assert!(!session("viewer").can_edit());
        assert!(!session("").can_edit());
        assert!(!session("Admin").can_edit());
    }

    #[test]
    fn session_deserializes_from_login_payload() {
        let session: Session =
            serde_json::from_str(r#"{"token":"abc","role":"planner","username":"planner"}"#)
                .unwrap();
        assert_eq!(session.token, "abc");
        assert!(session.can_edit());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn storage_round_trip() {
        clear();
        assert_eq!(load(), None);

        let session = Session {
            token: "t-42".to_string(),
            role: "planner".to_string(),
            username: "Петренко".to_string(),
        };
        save(&session);
        assert_eq!(load(), Some(session));
        assert_eq!(stored_token().as_deref(), Some("t-42"));

        clear();
        assert_eq!(load(), None);
        assert_eq!(stored_token(), None);
    }

    #[wasm_bindgen_test]
    fn empty_token_does_not_restore_a_session() {
        save(&Session {
            token: String::new(),
            role: "viewer".to_string(),
            username: "viewer".to_string(),
        });
        assert_eq!(load(), None);
        assert_eq!(stored_token(), None);
        clear();
    }
}
