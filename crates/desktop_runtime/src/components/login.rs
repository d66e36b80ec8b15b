use super::*;
use crate::accounts;
use system_ui::{Card, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginMode {
    SignIn,
    CreateAccount,
}

/// Full-screen login gate shown while no user is signed in.
///
/// Auth is simulated: credentials are checked against the localStorage-backed
/// account directory seeded with the demo accounts.
#[component]
pub fn LoginScreen() -> impl IntoView {
    let runtime = use_session_runtime();
    let mode = create_rw_signal(LoginMode::SignIn);
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move || {
        let name = username.get_untracked();
        let pass = password.get_untracked();
        let mut directory = accounts::load_directory();

        let outcome = match mode.get_untracked() {
            LoginMode::SignIn => directory.login(name.trim(), &pass),
            LoginMode::CreateAccount => directory.register(name.trim(), &pass).and_then(
                |account| match accounts::persist_directory(&directory) {
                    Ok(()) => Ok(account),
                    Err(err) => Err(err),
                },
            ),
        };

        match outcome {
            Ok(account) => {
                error.set(None);
                runtime.sign_in(account);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let toggle_mode = move |_| {
        error.set(None);
        mode.update(|m| {
            *m = match m {
                LoginMode::SignIn => LoginMode::CreateAccount,
                LoginMode::CreateAccount => LoginMode::SignIn,
            }
        });
    };

    view! {
        <div class="login-screen" data-ui-kind="login-screen">
            <Card layout_class="login-card">
                <h1>"OrbitDesk"</h1>
                <form on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <TextField
                        id="login-username".to_string()
                        placeholder="Username".to_string()
                        aria_label="Username".to_string()
                        value=username
                        on_input=Callback::new(move |text| username.set(text))
                    />
                    <TextField
                        id="login-password".to_string()
                        input_type="password"
                        placeholder="Password".to_string()
                        aria_label="Password".to_string()
                        value=password
                        on_input=Callback::new(move |text| password.set(text))
                    />
                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <p data-ui-slot="login-error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <Button
                        variant=ButtonVariant::Primary
                        aria_label="Submit".to_string()
                        on_click=Callback::new(move |_| submit())
                    >
                        {move || match mode.get() {
                            LoginMode::SignIn => "Sign in",
                            LoginMode::CreateAccount => "Create account",
                        }}
                    </Button>
                </form>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Switch login mode".to_string()
                    on_click=Callback::new(toggle_mode)
                >
                    {move || match mode.get() {
                        LoginMode::SignIn => "New here? Create an account",
                        LoginMode::CreateAccount => "Have an account? Sign in",
                    }}
                </Button>
                <p data-ui-slot="login-hint">
                    "Demo accounts: admin / password, guest / guest"
                </p>
            </Card>
        </div>
    }
}
