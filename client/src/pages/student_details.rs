//! Student details page: resolves the signed-in user, then shows their card.

use leptos::prelude::*;

use crate::components::student_details::StudentDetails;
use crate::net::types::SessionUser;

/// Renders nothing until (and unless) a session resolves.
#[component]
pub fn StudentDetailsPage() -> impl IntoView {
    let user = RwSignal::new(None::<SessionUser>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Some(resolved) => user.set(Some(resolved)),
            None => log::info!("no active session; student details hidden"),
        }
    });

    move || user.get().map(|user| view! { <StudentDetails user=user/> })
}
