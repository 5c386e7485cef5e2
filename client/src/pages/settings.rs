//! Settings screen: account summary and display preferences.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::dark_mode;

/// Settings screen component.
#[component]
pub fn SettingsScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dark = expect_context::<RwSignal<bool>>();

    view! {
        <div class="settings">
            <header class="settings__header">
                <h1>"Settings"</h1>
                <p>"Manage your account preferences and application settings."</p>
            </header>

            <section class="settings__card">
                <h2>"My Profile"</h2>
                {move || {
                    session
                        .get()
                        .user()
                        .map(|user| {
                            let name = user.display_name();
                            let email = user.email.clone().unwrap_or_else(|| "--".to_owned());
                            let username = user.username.clone();
                            view! {
                                <dl class="settings__profile">
                                    <dt>"Name"</dt>
                                    <dd>{name}</dd>
                                    <dt>"Username"</dt>
                                    <dd>{username}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{email}</dd>
                                </dl>
                            }
                                .into_any()
                        })
                        .unwrap_or_else(|| view! { <p>"Not signed in."</p> }.into_any())
                }}
            </section>

            <section class="settings__card">
                <h2>"Display & Accessibility"</h2>
                <div class="settings__toggle-row">
                    <div>
                        <h3>"Dark Mode"</h3>
                        <p>"Use a darker palette in low-light clinical settings."</p>
                    </div>
                    <button
                        class="btn"
                        on:click=move |_| dark.set(dark_mode::toggle(dark.get_untracked()))
                    >
                        {move || if dark.get() { "Switch to Light" } else { "Switch to Dark" }}
                    </button>
                </div>
            </section>
        </div>
    }
}
