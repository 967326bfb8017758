//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::{self, DutyType, Equipment, Person};
use crate::state::session::{self, Session};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current session, `None` when anonymous
    pub session: RwSignal<Option<Session>>,
    /// Roster cache, refreshed wholesale on login
    pub personnel: RwSignal<Vec<Person>>,
    /// Duty type cache
    pub duty_types: RwSignal<Vec<DutyType>>,
    /// Equipment cache
    pub equipment: RwSignal<Vec<Equipment>>,
    /// Base-data refresh in flight; the nav shows a spinner while set
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(session::load()),
        personnel: create_rw_signal(Vec::new()),
        duty_types: create_rw_signal(Vec::new()),
        equipment: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Whether the current role may use the creation forms
    pub fn can_edit(&self) -> bool {
        self.session
            .get()
            .map(|s| s.can_edit())
            .unwrap_or(false)
    }

    /// Enter the authenticated state and persist the credentials
    pub fn sign_in(&self, session: Session) {
        session::save(&session);
        self.session.set(Some(session));
    }

    /// Leave the authenticated state, purging storage and the caches
    pub fn sign_out(&self) {
        session::clear();
        self.session.set(None);
        self.personnel.set(Vec::new());
        self.duty_types.set(Vec::new());
        self.equipment.set(Vec::new());
    }

    /// Refresh the reference caches wholesale. The three reads are issued
    /// concurrently and joined. A failure is treated as an invalid or
    /// expired token: the session is dropped and the UI reverts to the
    /// anonymous view.
    pub async fn load_base_data(&self) -> Result<(), String> {
        self.loading.set(true);
        let (personnel, duty_types, equipment) = futures::join!(
            api::fetch_personnel(),
            api::fetch_duty_types(),
            api::fetch_equipment(),
        );
        self.loading.set(false);

        match (personnel, duty_types, equipment) {
            (Ok(personnel), Ok(duty_types), Ok(equipment)) => {
                self.personnel.set(personnel);
                self.duty_types.set(duty_types);
                self.equipment.set(equipment);
                Ok(())
            }
            (personnel, duty_types, equipment) => {
                let message = [personnel.err(), duty_types.err(), equipment.err()]
                    .into_iter()
                    .flatten()
                    .next()
                    .unwrap_or_else(|| "Не вдалося завантажити дані".to_string());
                self.sign_out();
                Err(message)
            }
        }
    }

    /// Append a just-created person to the roster cache
    pub fn add_person(&self, person: Person) {
        self.personnel.update(|list| list.push(person));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh_state() -> GlobalState {
        GlobalState {
            session: create_rw_signal(None),
            personnel: create_rw_signal(Vec::new()),
            duty_types: create_rw_signal(Vec::new()),
            equipment: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    #[wasm_bindgen_test]
    async fn failed_base_load_clears_loading_and_session() {
        let runtime = create_runtime();
        let state = fresh_state();
        state.sign_in(Session {
            token: "t-bad".to_string(),
            role: "admin".to_string(),
            username: "admin".to_string(),
        });

        // No API behind the test page, so every read fails
        let result = state.load_base_data().await;

        assert!(result.is_err());
        assert!(!state.loading.get_untracked());
        assert_eq!(state.session.get_untracked(), None);
        assert!(state.personnel.get_untracked().is_empty());
        runtime.dispose();
    }
}
