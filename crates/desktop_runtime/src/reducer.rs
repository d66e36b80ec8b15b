//! Reducer actions, side-effect intents, and transition logic for the window session.

use desktop_app_contract::{AppDescriptor, AppId};

use crate::model::{
    cascade_origin, DragSession, InteractionState, PointerPosition, ResizeSession, SessionState,
    WindowId, WindowRecord, WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Launch parameters derived from a registered app descriptor.
pub struct LaunchRequest {
    /// App identity, also the open-window dedup key.
    pub app_id: AppId,
    /// Titlebar and dock label.
    pub title: String,
    /// Icon token rendered in chrome and dock.
    pub icon_id: String,
}

impl LaunchRequest {
    /// Builds a launch request from a registry descriptor.
    pub fn from_descriptor(descriptor: &AppDescriptor) -> Self {
        Self {
            app_id: descriptor.app_id(),
            title: descriptor.name.to_string(),
            icon_id: descriptor.icon_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_session`] to mutate [`SessionState`].
///
/// Every action that names a window id is a silent no-op when the id is no
/// longer present; stale ids from UI callbacks must never surface an error.
pub enum SessionAction {
    /// Open a window for an app, or focus (restoring if minimized) the existing one.
    OpenOrFocus(LaunchRequest),
    /// Close a window by id. No other window is activated in its place.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window. Other windows are untouched.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Restore a minimized window: visible, active, raised.
    Restore {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Activate and raise a window. No-op if the window is minimized.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Replace a window's rectangle. The rect is clamped, never rejected.
    UpdateGeometry {
        /// Window to reposition.
        window_id: WindowId,
        /// Requested rectangle.
        rect: WindowRect,
    },
    /// Begin dragging a window. Focuses the target immediately.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Begin resizing a window from its bottom-right handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-flight drag. Only the gesture's live rect changes.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Update an in-flight resize. Only the gesture's live rect changes.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active gesture and commit its live rect. Pointer-up and
    /// pointer-leave both map here; there is no mid-flight cancel.
    EndInteraction,
    /// Maximize stub: emits a notice and changes nothing.
    RequestMaximize {
        /// Window the request targeted.
        window_id: WindowId,
    },
    /// Clear all windows (logout). Id and z counters are not rewound.
    ResetSession,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_session`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Show a transient toast notification.
    Notify {
        /// Message text.
        message: String,
    },
}

/// Applies a [`SessionAction`] to the window session and collects resulting side effects.
///
/// This function is the authoritative state transition engine for window
/// management. It never errors: actions referencing missing windows are no-ops.
pub fn reduce_session(
    state: &mut SessionState,
    interaction: &mut InteractionState,
    action: SessionAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        SessionAction::OpenOrFocus(req) => {
            if let Some(existing) = state.window_for_app(&req.app_id) {
                let window_id = existing.id;
                if existing.minimized {
                    effects.extend(reduce_session(
                        state,
                        interaction,
                        SessionAction::Restore { window_id },
                    ));
                } else {
                    effects.extend(reduce_session(
                        state,
                        interaction,
                        SessionAction::Focus { window_id },
                    ));
                }
                return effects;
            }
            let window_id = next_window_id(state);
            let (x, y) = cascade_origin(state.windows.len());
            let record = WindowRecord {
                id: window_id,
                app_id: req.app_id,
                title: req.title,
                icon_id: req.icon_id,
                rect: WindowRect {
                    x,
                    y,
                    w: DEFAULT_WINDOW_WIDTH,
                    h: DEFAULT_WINDOW_HEIGHT,
                }
                .clamped(),
                z_index: 0,
                is_active: false,
                minimized: false,
            };
            state.windows.push(record);
            raise_window(state, window_id);
        }
        SessionAction::Close { window_id } => {
            // The closed window may have been the active one; zero active
            // windows is a legal state and nothing is promoted in its place.
            state.windows.retain(|w| w.id != window_id);
        }
        SessionAction::Minimize { window_id } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.minimized = true;
                window.is_active = false;
            }
        }
        SessionAction::Restore { window_id } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.minimized = false;
                raise_window(state, window_id);
            }
        }
        SessionAction::Focus { window_id } => {
            let minimized = state.window(window_id).map(|w| w.minimized);
            // Restore is a distinct operation; focusing a minimized window
            // stays a no-op.
            if minimized == Some(false) {
                raise_window(state, window_id);
            }
        }
        SessionAction::UpdateGeometry { window_id, rect } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.rect = rect.clamped();
            }
        }
        SessionAction::BeginMove { window_id, pointer } => {
            if !interaction.is_idle() {
                return effects;
            }
            let Some(rect_start) = state.window(window_id).map(|w| w.rect) else {
                return effects;
            };
            raise_window(state, window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
                live_rect: rect_start,
            });
        }
        SessionAction::BeginResize { window_id, pointer } => {
            if !interaction.is_idle() {
                return effects;
            }
            let Some(rect_start) = state.window(window_id).map(|w| w.rect) else {
                return effects;
            };
            raise_window(state, window_id);
            interaction.resizing = Some(ResizeSession {
                window_id,
                pointer_start: pointer,
                rect_start,
                live_rect: rect_start,
            });
        }
        SessionAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.live_rect = session.rect_start.offset(dx, dy).clamped();
            }
        }
        SessionAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.live_rect = session.rect_start.resized_by(dx, dy).clamped();
            }
        }
        SessionAction::EndInteraction => {
            let committed = interaction
                .dragging
                .take()
                .map(|s| (s.window_id, s.live_rect))
                .or_else(|| interaction.resizing.take().map(|s| (s.window_id, s.live_rect)));
            if let Some((window_id, rect)) = committed {
                effects.extend(reduce_session(
                    state,
                    interaction,
                    SessionAction::UpdateGeometry { window_id, rect },
                ));
            }
        }
        SessionAction::RequestMaximize { window_id } => {
            if state.window(window_id).is_some() {
                effects.push(RuntimeEffect::Notify {
                    message: "Maximize feature coming soon".to_string(),
                });
            }
        }
        SessionAction::ResetSession => {
            state.windows.clear();
            *interaction = InteractionState::default();
        }
    }
    effects
}

fn next_window_id(state: &mut SessionState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(state: &mut SessionState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Makes `window_id` the single active window and assigns it a fresh z-index
/// from the session counter. The counter only moves forward, so raised windows
/// always paint above everything assigned before them.
fn raise_window(state: &mut SessionState, window_id: WindowId) {
    let next_z = state.next_z.saturating_add(1);
    for window in &mut state.windows {
        if window.id == window_id {
            window.is_active = true;
            window.z_index = next_z;
        } else {
            window.is_active = false;
        }
    }
    state.next_z = next_z;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    fn launch(app: &str) -> LaunchRequest {
        LaunchRequest {
            app_id: AppId::from(app),
            title: app.to_string(),
            icon_id: app.to_string(),
        }
    }

    fn open(state: &mut SessionState, interaction: &mut InteractionState, app: &str) -> WindowId {
        let _ = reduce_session(state, interaction, SessionAction::OpenOrFocus(launch(app)));
        state.windows.last().expect("window").id
    }

    fn record(state: &SessionState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window present")
    }

    fn assert_single_active(state: &SessionState) {
        assert!(state.windows.iter().filter(|w| w.is_active).count() <= 1);
    }

    #[test]
    fn open_assigns_defaults_cascade_and_focus() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "notes");
        let second = open(&mut state, &mut interaction, "terminal");

        let a = record(&state, first);
        let b = record(&state, second);
        assert_eq!((a.rect.x, a.rect.y), (100, 100));
        assert_eq!((b.rect.x, b.rect.y), (120, 120));
        assert_eq!((b.rect.w, b.rect.h), (800, 500));
        assert!(!a.is_active);
        assert!(b.is_active);
        assert!(b.z_index > a.z_index);
        assert_single_active(&state);
    }

    #[test]
    fn cascade_offset_wraps_after_span() {
        assert_eq!(cascade_origin(0), (100, 100));
        assert_eq!(cascade_origin(5), (200, 200));
        assert_eq!(cascade_origin(10), (100, 100));
    }

    #[test]
    fn open_is_idempotent_per_app() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::OpenOrFocus(launch("notes")),
        );

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.active_window_id(), Some(win));
    }

    #[test]
    fn open_or_focus_restores_minimized_window() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Minimize { window_id: win },
        );
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::OpenOrFocus(launch("notes")),
        );

        let rec = record(&state, win);
        assert_eq!(state.windows.len(), 1);
        assert!(!rec.minimized);
        assert!(rec.is_active);
    }

    #[test]
    fn z_indices_are_unique_and_strictly_increasing() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "notes");
        let second = open(&mut state, &mut interaction, "files");
        let third = open(&mut state, &mut interaction, "terminal");

        let z_before = record(&state, first).z_index;
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Focus { window_id: first },
        );
        let z_after = record(&state, first).z_index;

        assert!(z_after > z_before);
        assert!(z_after > record(&state, second).z_index);
        assert!(z_after > record(&state, third).z_index);

        let mut seen: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), state.windows.len());
    }

    #[test]
    fn z_index_is_not_reused_after_close() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "notes");
        let top_z = record(&state, first).z_index;
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Close { window_id: first },
        );
        let second = open(&mut state, &mut interaction, "files");

        assert!(record(&state, second).z_index > top_z);
    }

    #[test]
    fn focus_raises_and_deactivates_others() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let notes = open(&mut state, &mut interaction, "notes");
        let calc = open(&mut state, &mut interaction, "calculator");

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Focus { window_id: notes },
        );

        assert!(record(&state, notes).is_active);
        assert!(!record(&state, calc).is_active);
        assert!(record(&state, notes).z_index > record(&state, calc).z_index);
        assert_single_active(&state);
    }

    #[test]
    fn focus_on_minimized_window_is_a_noop() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Minimize { window_id: win },
        );
        let before = state.clone();

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Focus { window_id: win },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn minimize_then_restore_returns_active_with_higher_z() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "terminal");
        let z_before = record(&state, win).z_index;

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Minimize { window_id: win },
        );
        let rec = record(&state, win);
        assert!(rec.minimized);
        assert!(!rec.is_active);
        assert_eq!(state.active_window_id(), None);

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Restore { window_id: win },
        );
        let rec = record(&state, win);
        assert!(!rec.minimized);
        assert!(rec.is_active);
        assert!(rec.z_index > z_before);
    }

    #[test]
    fn close_active_window_leaves_no_active_window() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let notes = open(&mut state, &mut interaction, "notes");
        let files = open(&mut state, &mut interaction, "files");

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Close { window_id: files },
        );

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.active_window_id(), None);
        assert!(!record(&state, notes).is_active);
    }

    #[test]
    fn actions_on_missing_windows_are_silent_noops() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::Close { window_id: win },
        );
        let before = state.clone();

        for action in [
            SessionAction::Close { window_id: win },
            SessionAction::Minimize { window_id: win },
            SessionAction::Restore { window_id: win },
            SessionAction::Focus { window_id: win },
            SessionAction::UpdateGeometry {
                window_id: win,
                rect: WindowRect::default(),
            },
            SessionAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 0, y: 0 },
            },
            SessionAction::RequestMaximize { window_id: win },
        ] {
            let effects = reduce_session(&mut state, &mut interaction, action);
            assert_eq!(state, before);
            assert!(effects.is_empty());
            assert!(interaction.is_idle());
        }
    }

    #[test]
    fn update_geometry_clamps_origin_and_size() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::UpdateGeometry {
                window_id: win,
                rect: WindowRect {
                    x: -50,
                    y: -50,
                    w: 10,
                    h: 10,
                },
            },
        );

        let rect = record(&state, win).rect;
        assert_eq!((rect.x, rect.y), (0, 0));
        assert_eq!((rect.w, rect.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn drag_updates_live_rect_only_and_commits_on_end() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::UpdateGeometry {
                window_id: win,
                rect: WindowRect {
                    x: 100,
                    y: 100,
                    w: 800,
                    h: 500,
                },
            },
        );

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 400, y: 120 },
            },
        );
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove {
                pointer: PointerPosition { x: 450, y: 90 },
            },
        );

        // Store geometry is untouched while the drag is in flight.
        assert_eq!(record(&state, win).rect.x, 100);
        assert_eq!(record(&state, win).rect.y, 100);
        assert_eq!(
            interaction.live_rect_for(win).map(|r| (r.x, r.y)),
            Some((150, 70))
        );

        let _ = reduce_session(&mut state, &mut interaction, SessionAction::EndInteraction);
        let rect = record(&state, win).rect;
        assert_eq!((rect.x, rect.y), (150, 70));
        assert!(interaction.is_idle());
    }

    #[test]
    fn drag_live_rect_clamps_at_viewport_origin() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove {
                pointer: PointerPosition { x: -500, y: -500 },
            },
        );
        let _ = reduce_session(&mut state, &mut interaction, SessionAction::EndInteraction);

        let rect = record(&state, win).rect;
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn resize_commits_with_size_floor() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::BeginResize {
                window_id: win,
                pointer: PointerPosition { x: 900, y: 600 },
            },
        );
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::UpdateResize {
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        let _ = reduce_session(&mut state, &mut interaction, SessionAction::EndInteraction);

        let rect = record(&state, win).rect;
        assert_eq!((rect.w, rect.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert!(interaction.is_idle());
    }

    #[test]
    fn begin_gesture_focuses_target_immediately() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let notes = open(&mut state, &mut interaction, "notes");
        let _files = open(&mut state, &mut interaction, "files");

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove {
                window_id: notes,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );

        assert_eq!(state.active_window_id(), Some(notes));
    }

    #[test]
    fn begin_gesture_while_another_is_active_is_rejected() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let notes = open(&mut state, &mut interaction, "notes");
        let files = open(&mut state, &mut interaction, "files");

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::BeginMove {
                window_id: notes,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::BeginResize {
                window_id: files,
                pointer: PointerPosition { x: 20, y: 20 },
            },
        );

        assert!(interaction.resizing.is_none());
        assert_eq!(
            interaction.dragging.as_ref().map(|s| s.window_id),
            Some(notes)
        );
    }

    #[test]
    fn update_without_active_gesture_is_a_noop() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let _win = open(&mut state, &mut interaction, "notes");
        let before = state.clone();

        let _ = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::UpdateMove {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        let _ = reduce_session(&mut state, &mut interaction, SessionAction::EndInteraction);

        assert_eq!(state, before);
        assert!(interaction.is_idle());
    }

    #[test]
    fn request_maximize_emits_notice_and_changes_nothing() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "notes");
        let before = state.clone();

        let effects = reduce_session(
            &mut state,
            &mut interaction,
            SessionAction::RequestMaximize { window_id: win },
        );

        assert_eq!(state, before);
        assert_eq!(
            effects,
            vec![RuntimeEffect::Notify {
                message: "Maximize feature coming soon".to_string(),
            }]
        );
    }

    #[test]
    fn reset_session_clears_windows_but_keeps_counters() {
        let mut state = SessionState::default();
        let mut interaction = InteractionState::default();

        let _ = open(&mut state, &mut interaction, "notes");
        let _ = open(&mut state, &mut interaction, "files");
        let next_z = state.next_z;
        let next_id = state.next_window_id;

        let _ = reduce_session(&mut state, &mut interaction, SessionAction::ResetSession);

        assert!(state.windows.is_empty());
        assert_eq!(state.next_z, next_z);
        assert_eq!(state.next_window_id, next_id);
    }
}
