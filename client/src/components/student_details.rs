//! Profile card for the signed-in student.

use leptos::prelude::*;

use crate::net::types::SessionUser;

#[component]
pub fn StudentDetails(user: SessionUser) -> impl IntoView {
    let fields = [
        ("Name", user.name),
        ("PRN", user.prn),
        ("Username", user.username),
        ("Email", user.email),
        ("Department", user.department),
        ("Current Semester", user.current_semester),
    ];

    view! {
        <section class="student-details card">
            <h2 class="student-details__title">"Student Details"</h2>
            <dl class="student-details__fields">
                {fields
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}
