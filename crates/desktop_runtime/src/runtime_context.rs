//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the reducer container and the side-effect queue. UI
//! composition stays in [`crate::components`].

use leptos::*;

use crate::{
    accounts::{self, UserAccount},
    model::{InteractionState, SessionState},
    reducer::{reduce_session, RuntimeEffect, SessionAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading session state and dispatching [`SessionAction`] values.
pub struct SessionRuntimeContext {
    /// Reactive window-session state signal.
    pub state: RwSignal<SessionState>,
    /// Reactive pointer gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Currently signed-in user, `None` before login and after logout.
    pub active_user: RwSignal<Option<UserAccount>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SessionAction>,
}

impl SessionRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: SessionAction) {
        self.dispatch.call(action);
    }

    /// Records a successful login and persists it for the next boot.
    pub fn sign_in(&self, user: UserAccount) {
        accounts::persist_active_user(Some(&user));
        self.active_user.set(Some(user));
    }

    /// Clears the stored user and resets the window session.
    pub fn sign_out(&self) {
        accounts::persist_active_user(None);
        self.active_user.set(None);
        self.dispatch_action(SessionAction::ResetSession);
    }
}

#[component]
/// Provides [`SessionRuntimeContext`] to descendant components.
pub fn SessionProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(SessionState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let active_user = create_rw_signal(accounts::load_active_user());

    let dispatch = Callback::new(move |action: SessionAction| {
        let mut session = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_session = session.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_session(&mut session, &mut ui, action);
        if session != previous_session {
            state.set(session);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = SessionRuntimeContext {
        state,
        interaction,
        effects,
        active_user,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`SessionRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`SessionProvider`].
pub fn use_session_runtime() -> SessionRuntimeContext {
    use_context::<SessionRuntimeContext>().expect("SessionRuntimeContext not provided")
}
