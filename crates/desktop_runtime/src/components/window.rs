use super::*;
use crate::model::WindowId;
use crate::reducer::SessionAction;
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_pointer_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_session_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });

    // While a gesture targets this window, paint from the interaction's live
    // rect instead of the committed one.
    let style = Signal::derive(move || {
        let Some(win) = window.get() else {
            return String::new();
        };
        let rect = runtime
            .interaction
            .get()
            .live_rect_for(window_id)
            .unwrap_or(win.rect);
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            rect.x, rect.y, rect.w, rect.h, win.z_index
        )
    });
    let title = Signal::derive(move || window.get().map(|w| w.title).unwrap_or_default());
    let icon = Signal::derive(move || {
        window
            .get()
            .map(|w| app_icon_name(&w.icon_id))
            .unwrap_or(IconName::Launcher)
    });
    let focused = Signal::derive(move || window.get().map(|w| w.is_active).unwrap_or(false));
    let visible = move || window.get().map(|w| !w.minimized).unwrap_or(false);

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        let should_focus = window
            .get_untracked()
            .map(|w| !w.is_active && !w.minimized)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(SessionAction::Focus { window_id });
        }
    });
    let minimize = move || runtime.dispatch_action(SessionAction::Minimize { window_id });
    let close = move || runtime.dispatch_action(SessionAction::Close { window_id });
    let request_maximize =
        move || runtime.dispatch_action(SessionAction::RequestMaximize { window_id });

    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(SessionAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let begin_resize = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        // A resize press must never fall through to the titlebar or frame and
        // start a competing move.
        ev.stop_propagation();
        runtime.dispatch_action(SessionAction::BeginResize {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SessionAction::Minimize { window_id });
    });
    let swallow_press = Callback::new(|ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    });
    let swallow_mouse = Callback::new(|ev: web_sys::MouseEvent| stop_mouse_event(&ev));

    view! {
        <Show when=visible fallback=|| ()>
            <WindowFrame
                style=style
                aria_label=title
                focused=focused
                on_pointerdown=focus
            >
                <WindowTitleBar
                    on_pointerdown=begin_move
                    on_dblclick=titlebar_double_click
                >
                    <WindowTitle>
                        <span aria-hidden="true">
                            {move || view! { <Icon icon=icon.get() size=IconSize::Sm /> }}
                        </span>
                        <span>{move || title.get()}</span>
                    </WindowTitle>
                    <WindowControls>
                        <WindowControlButton
                            icon=IconName::WindowMinimize
                            aria_label="Minimize window".to_string()
                            on_pointerdown=swallow_press
                            on_mousedown=swallow_mouse
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                minimize();
                            })
                        />
                        <WindowControlButton
                            icon=IconName::WindowMaximize
                            aria_label="Maximize window".to_string()
                            on_pointerdown=swallow_press
                            on_mousedown=swallow_mouse
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                request_maximize();
                            })
                        />
                        <WindowControlButton
                            icon=IconName::Dismiss
                            aria_label="Close window".to_string()
                            on_pointerdown=swallow_press
                            on_mousedown=swallow_mouse
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                close();
                            })
                        />
                    </WindowControls>
                </WindowTitleBar>
                <WindowBody>
                    <AppWindowContents window_id=window_id />
                </WindowBody>
                <ResizeHandle on_pointerdown=begin_resize />
            </WindowFrame>
        </Show>
    }
}

#[component]
fn AppWindowContents(window_id: WindowId) -> impl IntoView {
    let runtime = use_session_runtime();

    // The record stays plain data; the registry resolves the opaque mount
    // capability from the app id at render time.
    let contents = runtime
        .state
        .get_untracked()
        .windows
        .into_iter()
        .find(|w| w.id == window_id)
        .and_then(|w| apps::descriptor_for(&w.app_id))
        .map(|descriptor| descriptor.content.mount())
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <div data-ui-slot="app-contents">
            {contents}
        </div>
    }
}
