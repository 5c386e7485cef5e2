//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, workspace::WorkspacePage};
use crate::state::draft::AssessmentDraft;
use crate::state::history::HistoryEpoch;
use crate::state::nav::NavState;
use crate::state::patients::PatientsEpoch;
use crate::state::session::SessionState;
use crate::state::uploads::UploadTracker;
use crate::util::{auth, dark_mode, persistence};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Session and navigation context are restored from `localStorage` so a page
/// reload does not lose the signed-in user or in-progress navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let restored = auth::load_session();
    let session = RwSignal::new(SessionState {
        loading: restored.is_some(),
        session: restored,
    });
    let nav = RwSignal::new(
        persistence::load_json::<NavState>(NavState::STORAGE_KEY).unwrap_or_default(),
    );
    let uploads = RwSignal::new(UploadTracker::default());
    let draft = RwSignal::new(AssessmentDraft::default());
    let history_epoch = RwSignal::new(HistoryEpoch::default());
    let patients_epoch = RwSignal::new(PatientsEpoch::default());
    let dark = RwSignal::new(dark_mode::read_preference());
    dark_mode::apply(dark.get_untracked());

    provide_context(session);
    provide_context(nav);
    provide_context(uploads);
    provide_context(draft);
    provide_context(history_epoch);
    provide_context(patients_epoch);
    provide_context(dark);

    // Revalidate a restored bearer token against the API. An expired or
    // revoked token clears the session, which sends the user back to login.
    Effect::new(move || {
        let state = session.get();
        if !state.loading {
            return;
        }
        let Some(restored) = state.session else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_me(Some(&restored.access)).await {
                Some(user) => session.update(|s| {
                    s.loading = false;
                    if let Some(active) = s.session.as_mut() {
                        active.user = user;
                    }
                }),
                None => {
                    log::warn!("stored session rejected by the API, signing out");
                    auth::clear_session();
                    session.set(SessionState::default());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = restored;
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/woundtrack.css"/>
        <Title text="WoundTrack"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
