//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod launcher;
mod login;
mod window;

use std::time::Duration;

use leptos::*;

use self::{dock::AppDock, launcher::AppLauncher, window::DesktopWindow};

use crate::{
    apps,
    model::PointerPosition,
    reducer::{RuntimeEffect, SessionAction},
    runtime_context::use_session_runtime,
};
use system_ui::{
    Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopWindowLayer, Icon, IconName, IconSize, MenuBar,
};

pub use self::login::LoginScreen;
pub use crate::runtime_context::{SessionProvider, SessionRuntimeContext};

const TOAST_DISMISS_MS: u64 = 4000;

fn app_icon_name(icon_id: &str) -> IconName {
    IconName::from_token(icon_id).unwrap_or(IconName::Launcher)
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Pointer-up, pointer-cancel, and pointer-leave all terminate the active
/// gesture the same way: commit the live rect and return to idle.
fn end_active_pointer_interaction(runtime: SessionRuntimeContext) {
    if !runtime.interaction.get_untracked().is_idle() {
        runtime.dispatch_action(SessionAction::EndInteraction);
    }
}

#[component]
/// Renders the full desktop shell UI and processes queued [`RuntimeEffect`] values.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_session_runtime();
    let state = runtime.state;
    let launcher_open = create_rw_signal(false);
    let toasts = create_rw_signal(Vec::<(u64, String)>::new());
    let toast_counter = store_value(0u64);

    // Drain reducer effects into transient toasts.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }
        runtime.effects.set(Vec::new());
        for effect in queued {
            match effect {
                RuntimeEffect::Notify { message } => {
                    let id = toast_counter.get_value();
                    toast_counter.set_value(id + 1);
                    toasts.update(|list| list.push((id, message)));
                    set_timeout(
                        move || toasts.update(|list| list.retain(|(tid, _)| *tid != id)),
                        Duration::from_millis(TOAST_DISMISS_MS),
                    );
                }
            }
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if launcher_open.get_untracked() {
            ev.prevent_default();
            launcher_open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(SessionAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(SessionAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:pointerleave=on_pointer_end
        >
            <ShellMenuBar launcher_open=launcher_open />
            <DesktopBackdrop>
                <div
                    data-ui-slot="dismiss-layer"
                    on:mousedown=move |_| launcher_open.set(false)
                />
                <DesktopIconGrid>
                    <For each=move || apps::app_registry() key=|app| app.id let:app>
                        <DesktopIconButton
                            title=app.name.to_string()
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(SessionAction::OpenOrFocus(
                                    crate::reducer::LaunchRequest::from_descriptor(app),
                                ));
                            })
                        >
                            <span>
                                <Icon icon=app_icon_name(app.icon_id) size=IconSize::Lg />
                            </span>
                            <span>{app.name}</span>
                        </DesktopIconButton>
                    </For>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.get().windows
                        key=|win| win.id.0
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </DesktopWindowLayer>

                <Show when=move || launcher_open.get() fallback=|| ()>
                    <AppLauncher launcher_open=launcher_open />
                </Show>
            </DesktopBackdrop>

            <AppDock />
            <ToastLayer toasts=toasts />
        </div>
    }
}

#[component]
fn ShellMenuBar(launcher_open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_session_runtime();
    let clock = create_rw_signal(MenuClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(MenuClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let username = move || {
        runtime
            .active_user
            .get()
            .map(|user| user.username)
            .unwrap_or_default()
    };

    view! {
        <MenuBar aria_label="Desktop menu bar".to_string()>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                ui_slot="launcher-toggle"
                aria_label="Toggle app launcher".to_string()
                aria_pressed=Signal::derive(move || launcher_open.get())
                on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    launcher_open.update(|open| *open = !*open);
                })
            >
                <Icon icon=IconName::Launcher size=IconSize::Sm />
                <span>"OrbitDesk"</span>
            </Button>
            <div data-ui-slot="menu-spacer"></div>
            <span data-ui-slot="menu-clock" aria-label="Current time">
                {move || clock.get().date_label()}
                " "
                {move || clock.get().time_label()}
            </span>
            <span data-ui-slot="menu-user">
                <Icon icon=IconName::User size=IconSize::Sm />
                {username}
            </span>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                ui_slot="sign-out"
                aria_label="Sign out".to_string()
                on_click=Callback::new(move |_| runtime.sign_out())
            >
                <Icon icon=IconName::SignOut size=IconSize::Sm />
            </Button>
        </MenuBar>
    }
}

#[component]
fn ToastLayer(toasts: RwSignal<Vec<(u64, String)>>) -> impl IntoView {
    view! {
        <div data-ui-slot="toast-layer" aria-live="polite">
            <For each=move || toasts.get() key=|(id, _)| *id let:toast>
                <div data-ui-kind="toast">{toast.1}</div>
            </For>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuClockSnapshot {
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl MenuClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    fn time_label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    fn date_label(self) -> String {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let month = MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("Jan");
        format!("{month} {}", self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_labels_are_zero_padded() {
        let snapshot = MenuClockSnapshot {
            month: 8,
            day: 9,
            hour: 7,
            minute: 5,
        };
        assert_eq!(snapshot.time_label(), "07:05");
        assert_eq!(snapshot.date_label(), "Aug 9");
    }

    #[test]
    fn unknown_icon_tokens_fall_back_to_the_launcher_glyph() {
        assert_eq!(app_icon_name("calculator"), IconName::Calculator);
        assert_eq!(app_icon_name("no-such-icon"), IconName::Launcher);
    }
}
