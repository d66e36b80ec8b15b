use super::*;
use crate::reducer::LaunchRequest;
use system_ui::{MenuItem, MenuSurface, TextField};

/// Searchable app-grid overlay toggled from the menu bar. Selecting an app
/// dispatches an open-or-focus and closes the overlay.
#[component]
pub(super) fn AppLauncher(launcher_open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_session_runtime();
    let query = create_rw_signal(String::new());

    let matching_apps = move || {
        let needle = query.get().trim().to_lowercase();
        apps::app_registry()
            .iter()
            .filter(|app| needle.is_empty() || app.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <MenuSurface
            id="app-launcher".to_string()
            aria_label="App launcher".to_string()
            on_mousedown=Callback::new(|ev: web_sys::MouseEvent| {
                // Clicks inside the surface must not reach the dismiss layer.
                ev.stop_propagation();
            })
        >
            <div data-ui-slot="launcher-search">
                <Icon icon=IconName::Search size=IconSize::Sm />
                <TextField
                    placeholder="Search apps".to_string()
                    aria_label="Search apps".to_string()
                    value=query
                    on_input=Callback::new(move |text| query.set(text))
                />
            </div>
            <div data-ui-slot="launcher-grid">
                <For each=matching_apps key=|app| app.id let:app>
                    <MenuItem
                        aria_label=format!("Open {}", app.name)
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(SessionAction::OpenOrFocus(
                                LaunchRequest::from_descriptor(app),
                            ));
                            launcher_open.set(false);
                        })
                    >
                        <Icon icon=app_icon_name(app.icon_id) size=IconSize::Lg />
                        <span>{app.name}</span>
                    </MenuItem>
                </For>
            </div>
            <div data-ui-slot="launcher-footer">
                <MenuItem
                    aria_label="Sign out".to_string()
                    on_click=Callback::new(move |_| {
                        launcher_open.set(false);
                        runtime.sign_out();
                    })
                >
                    <Icon icon=IconName::SignOut size=IconSize::Sm />
                    <span>"Sign out"</span>
                </MenuItem>
            </div>
        </MenuSurface>
    }
}
