//! Profile card for the signed-in faculty member.

use leptos::prelude::*;

use crate::net::types::Faculty;

/// Every faculty account is shown with the same title.
const DESIGNATION: &str = "Professor";

#[component]
pub fn FacultyProfile(faculty: Faculty) -> impl IntoView {
    let mailto = faculty.mailto();
    let name = faculty.display_name();

    view! {
        <section class="faculty-profile card">
            <h2 class="faculty-profile__name">{name}</h2>
            <dl class="faculty-profile__fields">
                <dt>"Faculty ID"</dt>
                <dd>{faculty.faculty_id}</dd>
                <dt>"Designation"</dt>
                <dd>{DESIGNATION}</dd>
                <dt>"Email"</dt>
                <dd>
                    <a href=mailto>{faculty.email}</a>
                </dd>
                <dt>"Contact No"</dt>
                <dd>{faculty.contact_no.unwrap_or_default()}</dd>
            </dl>
        </section>
    }
}
