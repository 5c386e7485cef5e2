//! Login page: credentials first, then a one-time code when the backend
//! demands a second factor.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Which step of the sign-in flow is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LoginStep {
    #[default]
    Credentials,
    Otp,
}

fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your email or hospital id and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn validate_otp_input(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit verification code.");
    }
    Ok(code.to_owned())
}

#[cfg(feature = "hydrate")]
fn complete_sign_in(
    session: RwSignal<SessionState>,
    user: crate::net::types::UserInfo,
    tokens: crate::net::types::TokenPair,
) {
    let active = crate::state::session::Session {
        access: tokens.access,
        refresh: tokens.refresh,
        user,
    };
    crate::util::auth::save_session(&active);
    session.set(SessionState {
        session: Some(active),
        loading: false,
    });
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

/// Login page component.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let step = RwSignal::new(LoginStep::default());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_credentials(&username.get(), &password.get())
        {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&user_value, &pass_value).await {
                Ok(resp) => match resp.outcome() {
                    crate::net::types::LoginOutcome::LoggedIn { user, tokens } => {
                        complete_sign_in(session, user, tokens);
                    }
                    crate::net::types::LoginOutcome::OtpRequired => {
                        step.set(LoginStep::Otp);
                        info.set("Enter the verification code sent to your device.".to_owned());
                        busy.set(false);
                    }
                    crate::net::types::LoginOutcome::Rejected(message) => {
                        info.set(message);
                        busy.set(false);
                    }
                },
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_value, pass_value, session);
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code_value = match validate_otp_input(&code.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let user_value = username.get().trim().to_owned();
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_otp(&user_value, &code_value).await {
                Ok(resp) => match resp.outcome() {
                    crate::net::types::LoginOutcome::LoggedIn { user, tokens } => {
                        complete_sign_in(session, user, tokens);
                    }
                    crate::net::types::LoginOutcome::OtpRequired => {
                        info.set("That code was not accepted. Try again.".to_owned());
                        busy.set(false);
                    }
                    crate::net::types::LoginOutcome::Rejected(message) => {
                        info.set(message);
                        busy.set(false);
                    }
                },
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_value, code_value, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WoundTrack"</h1>
                <p class="login-card__subtitle">"Sign in to access secure patient records"</p>

                <Show
                    when=move || step.get() == LoginStep::Credentials
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_verify>
                                <label class="login-label">
                                    "Verification Code"
                                    <input
                                        class="login-input login-input--code"
                                        type="text"
                                        inputmode="numeric"
                                        maxlength="6"
                                        placeholder="123456"
                                        prop:value=move || code.get()
                                        on:input=move |ev| code.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Verifying..." } else { "Verify Code" }}
                                </button>
                                <button
                                    class="login-button login-button--ghost"
                                    type="button"
                                    on:click=move |_| {
                                        step.set(LoginStep::Credentials);
                                        code.set(String::new());
                                        info.set(String::new());
                                    }
                                >
                                    "Back to sign in"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_sign_in>
                        <label class="login-label">
                            "Email or Hospital ID"
                            <input
                                class="login-input"
                                type="text"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="login-label">
                            "Password"
                            <input
                                class="login-input"
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
