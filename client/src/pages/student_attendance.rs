//! Student's attendance for one subject.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/{college}/attendance/{subject_id}?name=...`. The page reads the
//! route and hands both values to [`SubjectWiseAttendance`], which re-fetches
//! whenever the subject id changes.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::table_skeleton::TableSkeleton;
use crate::state::session::SessionState;
use crate::state::student_attendance::{
    COLUMNS, EMPTY_MESSAGE, SKELETON_ROWS, StudentAttendanceState, StudentRecordRow,
    StudentTableBody, heading, presence_glyph,
};

#[component]
pub fn StudentAttendancePage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let subject_id = Signal::derive(move || params.read().get("subject_id").unwrap_or_default());
    let subject_name = Signal::derive(move || query.read().get("name").unwrap_or_default());

    view! { <SubjectWiseAttendance subject_id=subject_id subject_name=subject_name/> }
}

/// Attendance table for `subject_id`, titled with `subject_name`.
#[component]
pub fn SubjectWiseAttendance(
    #[prop(into)] subject_id: Signal<String>,
    #[prop(into)] subject_name: Signal<String>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let state = RwSignal::new(StudentAttendanceState::default());

    Effect::new(move || {
        let subject = subject_id.get();
        let session = session.get();
        if !session.restored {
            return;
        }
        let seq = state.try_update(|s| s.begin(&subject)).unwrap_or_default();
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let Some(student_id) = session.student_id().map(str::to_owned) else {
            log::warn!("student attendance opened without a student session");
            state.update(|s| s.finish(seq, Ok(Vec::new())));
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{AttendanceApi, BrowserApi};

            let result = BrowserApi.student_attendance(&student_id, &subject).await;
            state.update(|s| s.finish(seq, result));
        });
    });

    view! {
        <section class="subject-attendance card">
            <h2 class="subject-attendance__title">
                {move || subject_name.with(|name| heading(name))}
            </h2>
            <table class="attendance-table">
                <thead>
                    <tr>{COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
                </thead>
                {move || match state.with(StudentAttendanceState::body) {
                    StudentTableBody::Loading => {
                        view! { <TableSkeleton rows=SKELETON_ROWS columns=COLUMNS.len()/> }
                            .into_any()
                    }
                    StudentTableBody::Empty => {
                        view! {
                            <tbody>
                                <tr>
                                    <td
                                        class="attendance-table__empty"
                                        colspan=COLUMNS.len().to_string()
                                    >
                                        {EMPTY_MESSAGE}
                                    </td>
                                </tr>
                            </tbody>
                        }
                            .into_any()
                    }
                    StudentTableBody::Rows(rows) => {
                        view! {
                            <tbody>
                                <For
                                    each=move || rows.clone()
                                    key=|row| row.key.clone()
                                    children=|row: StudentRecordRow| {
                                        view! {
                                            <tr>
                                                <td>{row.subject_code}</td>
                                                <td>{row.kind}</td>
                                                <td>{row.date}</td>
                                                <td>{row.time}</td>
                                                <td class=status_class(row.present)>
                                                    {presence_glyph(row.present)}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        }
                            .into_any()
                    }
                }}
            </table>
        </section>
    }
}

fn status_class(present: bool) -> &'static str {
    if present {
        "attendance-table__status attendance-table__status--present"
    } else {
        "attendance-table__status"
    }
}
