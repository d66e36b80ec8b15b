use super::*;
use crate::reducer::LaunchRequest;
use system_ui::{Dock, DockButton, DockSection};

/// Bottom dock: one entry per registered app, with running / minimized /
/// active indicators driven by the session state.
#[component]
pub(super) fn AppDock() -> impl IntoView {
    let runtime = use_session_runtime();
    let state = runtime.state;

    view! {
        <Dock
            aria_label="Application dock".to_string()
            on_mousedown=Callback::new(|ev: web_sys::MouseEvent| {
                // Keep focus where it is; dock clicks must not blur windows.
                ev.prevent_default();
            })
        >
            <DockSection ui_slot="apps" aria_label="Applications".to_string()>
                <For each=move || apps::app_registry() key=|app| app.id let:app>
                    {{
                        let app_id = app.app_id();
                        let window = {
                            let app_id = app_id.clone();
                            Signal::derive(move || {
                                state.get().window_for_app(&app_id).cloned()
                            })
                        };
                        let running = Signal::derive(move || window.get().is_some());
                        let minimized = Signal::derive(move || {
                            window.get().map(|w| w.minimized).unwrap_or(false)
                        });
                        let active = Signal::derive(move || {
                            window.get().map(|w| w.is_active).unwrap_or(false)
                        });
                        let on_click = Callback::new(move |_| {
                            match window.get_untracked() {
                                None => runtime.dispatch_action(SessionAction::OpenOrFocus(
                                    LaunchRequest::from_descriptor(app),
                                )),
                                Some(win) if win.minimized => {
                                    runtime.dispatch_action(SessionAction::Restore {
                                        window_id: win.id,
                                    })
                                }
                                Some(win) => runtime.dispatch_action(SessionAction::Focus {
                                    window_id: win.id,
                                }),
                            }
                        });

                        view! {
                            <DockButton
                                aria_label=format!("Open {}", app.name)
                                title=app.name.to_string()
                                data_app=app.id.to_string()
                                running=running
                                minimized=minimized
                                active=active
                                on_click=on_click
                            >
                                <Icon icon=app_icon_name(app.icon_id) size=IconSize::Lg />
                            </DockButton>
                        }
                    }}
                </For>
            </DockSection>
        </Dock>
    }
}
