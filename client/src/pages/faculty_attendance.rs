//! Faculty attendance: mark a lecture or review recorded attendance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/{college}/faculty/attendance`. The faculty identity comes from
//! the session context once storage has been restored. Every state transition
//! returns the commands it needs; `run_commands` spawns one task per command
//! and folds the resulting event back into the page's state signal.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::faculty_profile::FacultyProfile;
use crate::components::table_skeleton::TableSkeleton;
use crate::net::types::FilterType;
use crate::state::faculty_attendance::{
    FacultyAttendanceState, FacultyCommand, OverallRow, ROSTER_COLUMNS, RecordsTable, RosterRow,
    SessionRow, ViewMode,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::export;

const SKELETON_ROWS: usize = 5;

#[component]
pub fn FacultyAttendancePage() -> impl IntoView {
    let params = use_params_map();
    let college = Signal::derive(move || params.read().get("college").unwrap_or_default());
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(FacultyAttendanceState::default());

    let mounted = RwSignal::new(false);
    Effect::new(move || {
        let session = session.get();
        if !session.restored || mounted.get_untracked() {
            return;
        }
        mounted.set(true);
        let commands = state
            .try_update(|s| {
                *s = FacultyAttendanceState::new(session.faculty.clone());
                s.mount()
            })
            .unwrap_or_default();
        run_commands(state, toasts, college, commands);
    });

    let has_faculty = move || state.with(|s| s.faculty.is_some());
    let preloading = move || !mounted.get() || state.with(FacultyAttendanceState::is_preloading);
    let view_mode = move || state.with(|s| s.view_mode);

    let set_mode = move |mode: ViewMode| {
        let commands = state.try_update(|s| s.set_view_mode(mode)).unwrap_or_default();
        run_commands(state, toasts, college, commands);
    };

    view! {
        <section class="faculty-attendance card">
            <Show when=move || !preloading() fallback=|| view! { <AttendanceSkeleton/> }>
                <Show
                    when=has_faculty
                    fallback=|| {
                        view! {
                            <p class="faculty-attendance__notice">"Faculty session not found."</p>
                        }
                    }
                >
                    {move || {
                        state
                            .with(|s| s.faculty.clone())
                            .map(|faculty| view! { <FacultyProfile faculty=faculty/> })
                    }}
                    <header class="faculty-attendance__header">
                        <div class="faculty-attendance__modes" role="tablist">
                            <button
                                class="btn"
                                class:btn--active=move || view_mode() == ViewMode::Update
                                on:click=move |_| set_mode(ViewMode::Update)
                            >
                                "Update Attendance"
                            </button>
                            <button
                                class="btn"
                                class:btn--active=move || view_mode() == ViewMode::View
                                on:click=move |_| set_mode(ViewMode::View)
                            >
                                "View Attendance"
                            </button>
                        </div>
                        <SubjectPicker state=state toasts=toasts college=college/>
                    </header>
                    <Show
                        when=move || view_mode() == ViewMode::Update
                        fallback=move || {
                            view! { <ReviewPanel state=state toasts=toasts college=college/> }
                        }
                    >
                        <MarkingPanel state=state toasts=toasts college=college/>
                    </Show>
                </Show>
            </Show>
        </section>
    }
}

/// Execute `commands` in the background and apply their events.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn run_commands(
    state: RwSignal<FacultyAttendanceState>,
    toasts: RwSignal<ToastState>,
    college: Signal<String>,
    commands: Vec<FacultyCommand>,
) {
    for command in commands {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::BrowserApi;
            use crate::net::dispatch;
            use crate::state::faculty_attendance::{SUBMIT_PENDING_MESSAGE, SubmitOutcome};
            use crate::state::toast::ToastKind;

            let pending_toast = matches!(command, FacultyCommand::SubmitAttendance { .. })
                .then(|| toasts.try_update(|t| t.push(ToastKind::Loading, SUBMIT_PENDING_MESSAGE)))
                .flatten();

            leptos::task::spawn_local(async move {
                let event = dispatch::execute(&BrowserApi, command).await;
                let Some(outcome) = state.try_update(|s| s.apply(event)).flatten() else {
                    return;
                };
                let kind = if outcome == SubmitOutcome::Saved {
                    ToastKind::Success
                } else {
                    ToastKind::Error
                };
                toasts.update(|t| match pending_toast {
                    Some(id) => t.resolve(id, kind, outcome.message()),
                    None => {
                        t.push(kind, outcome.message());
                    }
                });
                if outcome == SubmitOutcome::Saved {
                    crate::util::navigation::redirect(&crate::util::navigation::faculty_home(
                        &college.get_untracked(),
                    ));
                }
            });
        }
    }
}

#[component]
fn AttendanceSkeleton() -> impl IntoView {
    view! {
        <div class="attendance-skeleton" aria-busy="true">
            <div class="attendance-skeleton__bar"></div>
            <div class="attendance-skeleton__bar"></div>
            <table class="attendance-table">
                <TableSkeleton rows=SKELETON_ROWS columns=ROSTER_COLUMNS.len()/>
            </table>
        </div>
    }
}

#[component]
fn SubjectPicker(
    state: RwSignal<FacultyAttendanceState>,
    toasts: RwSignal<ToastState>,
    college: Signal<String>,
) -> impl IntoView {
    let on_semester = move |ev: leptos::ev::Event| {
        let semester = event_target_value(&ev);
        state.update(|s| s.select_semester(&semester));
    };
    let on_subject = move |ev: leptos::ev::Event| {
        let subject_id = event_target_value(&ev);
        let commands = state.try_update(|s| s.select_subject(&subject_id)).unwrap_or_default();
        run_commands(state, toasts, college, commands);
    };

    view! {
        <div class="subject-picker">
            <label class="field">
                <span class="field__label">"Semester"</span>
                <select
                    prop:value=move || state.with(|s| s.selected_semester.clone())
                    on:change=on_semester
                >
                    <option value="">"Select semester"</option>
                    {move || {
                        state
                            .with(|s| {
                                s.semesters.iter().map(|g| g.semester.clone()).collect::<Vec<_>>()
                            })
                            .into_iter()
                            .map(|semester| {
                                let label = format!("Semester {semester}");
                                view! { <option value=semester>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <label class="field">
                <span class="field__label">"Subject"</span>
                <select
                    prop:value=move || state.with(|s| s.selected_subject_id.clone())
                    disabled=move || state.with(|s| s.selected_semester.is_empty())
                    on:change=on_subject
                >
                    <option value="">"Select subject"</option>
                    {move || {
                        state
                            .with(|s| s.subjects_for_selected_semester().to_vec())
                            .into_iter()
                            .map(|subject| {
                                view! {
                                    <option value=subject.subject_id>{subject.subject_name}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
        </div>
    }
}

// =============================================================================
// UPDATE MODE
// =============================================================================

#[component]
fn MarkingPanel(
    state: RwSignal<FacultyAttendanceState>,
    toasts: RwSignal<ToastState>,
    college: Signal<String>,
) -> impl IntoView {
    let no_subject = move || state.with(|s| s.selected_subject_id.is_empty());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(command) = state.try_update(FacultyAttendanceState::submit).flatten() else {
            log::warn!("attendance submit ignored: subject, date and times are required");
            return;
        };
        run_commands(state, toasts, college, vec![command]);
    };

    view! {
        <form class="marking-panel" on:submit=on_submit>
            <div class="marking-panel__slot">
                <label class="field">
                    <span class="field__label">"Date"</span>
                    <input
                        type="date"
                        disabled=no_subject
                        prop:value=move || state.with(|s| s.date.clone())
                        on:input=move |ev| state.update(|s| s.date = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Start Time"</span>
                    <input
                        type="time"
                        disabled=no_subject
                        prop:value=move || state.with(|s| s.start_time.clone())
                        on:input=move |ev| state.update(|s| s.start_time = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"End Time"</span>
                    <input
                        type="time"
                        disabled=no_subject
                        prop:value=move || state.with(|s| s.end_time.clone())
                        on:input=move |ev| state.update(|s| s.end_time = event_target_value(&ev))
                    />
                </label>
            </div>
            <table class="attendance-table">
                <thead>
                    <tr>{ROSTER_COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
                </thead>
                {move || {
                    if state.with(|s| s.in_flight.roster) {
                        return view! {
                            <TableSkeleton rows=SKELETON_ROWS columns=ROSTER_COLUMNS.len()/>
                        }
                            .into_any();
                    }
                    view! {
                        <tbody>
                            <For
                                each=move || state.with(FacultyAttendanceState::roster_rows)
                                key=|row| row.student_id.clone()
                                children=move |row: RosterRow| {
                                    view! { <RosterLine row=row state=state/> }
                                }
                            />
                        </tbody>
                    }
                        .into_any()
                }}
            </table>
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || !state.with(FacultyAttendanceState::can_submit)
            >
                "Submit Attendance"
            </button>
        </form>
    }
}

#[component]
fn RosterLine(row: RosterRow, state: RwSignal<FacultyAttendanceState>) -> impl IntoView {
    let id = row.student_id.clone();
    let checked_id = id.clone();

    view! {
        <tr>
            <td>{row.prn_no}</td>
            <td>{row.student_id}</td>
            <td>{row.name}</td>
            <td>
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.is_present(&checked_id))
                    on:change=move |ev| {
                        let present = event_target_checked(&ev);
                        state.update(|s| s.set_presence(&id, present));
                    }
                />
            </td>
        </tr>
    }
}

// =============================================================================
// VIEW MODE
// =============================================================================

#[component]
fn ReviewPanel(
    state: RwSignal<FacultyAttendanceState>,
    toasts: RwSignal<ToastState>,
    college: Signal<String>,
) -> impl IntoView {
    let no_subject = move || state.with(|s| s.selected_subject_id.is_empty());
    let filter = move || state.with(|s| s.filter_type);

    let on_filter = move |ev: leptos::ev::Event| {
        if let Some(filter_type) = FilterType::parse(&event_target_value(&ev)) {
            state.update(|s| s.set_filter_type(filter_type));
        }
    };
    let on_refresh = move |_| {
        let commands: Vec<_> =
            state.try_update(FacultyAttendanceState::refresh).flatten().into_iter().collect();
        run_commands(state, toasts, college, commands);
    };
    let on_download = move |_| {
        let (table, subject_id, filter_type) =
            state.with(|s| (s.records_table(), s.selected_subject_id.clone(), s.filter_type));
        log::info!("downloading {} attendance rows for {subject_id}", table.row_count());
        let file_name = export::export_file_name(&subject_id, filter_type);
        let exported =
            export::records_csv(&table).and_then(|csv| export::download_csv(&file_name, &csv));
        if let Err(e) = exported {
            log::error!("attendance export failed: {e}");
        }
    };

    view! {
        <div class="review-panel">
            <div class="review-panel__filters">
                <label class="field">
                    <span class="field__label">"Filter"</span>
                    <select prop:value=move || filter().as_str() on:change=on_filter>
                        {FilterType::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Show when=move || filter() == FilterType::SpecificDate>
                    <DateField
                        label="Date"
                        value=|s: &FacultyAttendanceState| s.specific_date.clone()
                        set=|s: &mut FacultyAttendanceState, v: String| s.specific_date = v
                        state=state
                    />
                </Show>
                <Show when=move || filter() == FilterType::DateRange>
                    <DateField
                        label="From"
                        value=|s: &FacultyAttendanceState| s.start_date_range.clone()
                        set=|s: &mut FacultyAttendanceState, v: String| s.start_date_range = v
                        state=state
                    />
                    <DateField
                        label="To"
                        value=|s: &FacultyAttendanceState| s.end_date_range.clone()
                        set=|s: &mut FacultyAttendanceState, v: String| s.end_date_range = v
                        state=state
                    />
                </Show>
                <button class="btn" disabled=no_subject on:click=on_refresh>
                    "Refresh"
                </button>
                <button class="btn" disabled=no_subject on:click=on_download>
                    "Download"
                </button>
            </div>
            {move || {
                let loading = state.with(|s| s.in_flight.records);
                let table = state.with(FacultyAttendanceState::records_table);
                let headers = table.headers();
                let body = if loading {
                    view! { <TableSkeleton rows=SKELETON_ROWS columns=headers.len()/> }.into_any()
                } else {
                    records_body(table)
                };
                view! {
                    <table class="attendance-table">
                        <thead>
                            <tr>
                                {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                            </tr>
                        </thead>
                        {body}
                    </table>
                }
            }}
        </div>
    }
}

#[component]
fn DateField(
    label: &'static str,
    value: fn(&FacultyAttendanceState) -> String,
    set: fn(&mut FacultyAttendanceState, String),
    state: RwSignal<FacultyAttendanceState>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                type="date"
                prop:value=move || state.with(value)
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    state.update(|s| set(s, raw));
                }
            />
        </label>
    }
}

fn records_body(table: RecordsTable) -> AnyView {
    match table {
        RecordsTable::Overall(rows) => view! {
            <tbody>
                <For
                    each=move || rows.clone()
                    key=|row| row.key.clone()
                    children=|row: OverallRow| {
                        view! {
                            <tr>
                                <td>{row.prn_no}</td>
                                <td>{row.name}</td>
                                <td>{row.total_lectures}</td>
                                <td>{row.attended_lectures}</td>
                                <td>{row.percentage}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        }
        .into_any(),
        RecordsTable::Sessions(rows) => view! {
            <tbody>
                <For
                    each=move || rows.clone()
                    key=|row| row.key.clone()
                    children=|row: SessionRow| {
                        let label = row.status_label();
                        view! {
                            <tr>
                                <td>{row.prn_no}</td>
                                <td>{row.name}</td>
                                <td>{row.date}</td>
                                <td>{row.start_time}</td>
                                <td>{row.end_time}</td>
                                <td>
                                    <span
                                        class="status-pill"
                                        class:status-pill--present=row.present
                                    >
                                        {label}
                                    </span>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        }
        .into_any(),
    }
}
