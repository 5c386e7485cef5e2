//! Sidebar navigation: workspace tabs plus sign out.

use leptos::prelude::*;

use crate::state::nav::{NavState, Tab};
use crate::state::session::SessionState;
use crate::util::auth;

const TABS: [(Tab, &str); 3] = [
    (Tab::Dashboard, "Dashboard"),
    (Tab::Patients, "Patients"),
    (Tab::Assessments, "Assessments"),
];

fn item_class(active: bool) -> &'static str {
    if active {
        "sidebar__item sidebar__item--active"
    } else {
        "sidebar__item"
    }
}

/// Sidebar component. Selecting a tab clears any drill-down state; signing
/// out clears the session and the persisted navigation context.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let on_sign_out = move |_| {
        let token = session.get_untracked().bearer();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout(token.as_deref()).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
        auth::clear_session();
        nav.set(NavState::default());
        // The workspace's redirect effect sends us to /login.
        session.set(SessionState::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__header">
                <div class="sidebar__logo">"+"</div>
                <div class="sidebar__title">
                    <h2>"WoundTrack"</h2>
                    <p>"CLINICIAN PORTAL"</p>
                </div>
            </div>

            <nav class="sidebar__nav">
                {TABS
                    .into_iter()
                    .map(|(tab, label)| {
                        view! {
                            <button
                                class=move || item_class(nav.get().active_tab == tab)
                                on:click=move |_| nav.update(|n| n.select_tab(tab))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer">
                <button
                    class=move || item_class(nav.get().active_tab == Tab::Settings)
                    on:click=move |_| nav.update(|n| n.select_tab(Tab::Settings))
                >
                    "Settings"
                </button>
                <button class="sidebar__item" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
