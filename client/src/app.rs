//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    faculty_attendance::FacultyAttendancePage, student_attendance::StudentAttendancePage,
    student_details::StudentDetailsPage,
};
use crate::state::{session::SessionState, toast::ToastState};

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
/// Provides the session and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Session storage only exists in the browser; effects never run during SSR.
    Effect::new(move || {
        session.set(SessionState::restore());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-attendance.css"/>
        <Title text="Attendance"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=(
                            ParamSegment("college"),
                            StaticSegment("attendance"),
                            ParamSegment("subject_id"),
                        )
                        view=StudentAttendancePage
                    />
                    <Route
                        path=(
                            ParamSegment("college"),
                            StaticSegment("faculty"),
                            StaticSegment("attendance"),
                        )
                        view=FacultyAttendancePage
                    />
                    <Route
                        path=(ParamSegment("college"), StaticSegment("student-details"))
                        view=StudentDetailsPage
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
