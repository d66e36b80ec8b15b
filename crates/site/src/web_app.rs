use desktop_runtime::{use_session_runtime, DesktopShell, LoginScreen, SessionProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="OrbitDesk" />
        <Meta name="description" content="A browser desktop environment with a login gate and windowed apps." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <SessionProvider>
            <SessionGate />
        </SessionProvider>
    }
}

/// Shows the desktop only once a user is signed in.
#[component]
fn SessionGate() -> impl IntoView {
    let runtime = use_session_runtime();
    let signed_in = move || runtime.active_user.get().is_some();

    view! {
        <Show when=signed_in fallback=|| view! { <LoginScreen /> }>
            <DesktopShell />
        </Show>
    }
}
