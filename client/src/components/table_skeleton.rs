//! Placeholder rows shown while a table's first response is pending.

use leptos::prelude::*;

/// `rows` x `columns` shimmering cells inside a `<tbody>`.
#[component]
pub fn TableSkeleton(rows: usize, columns: usize) -> impl IntoView {
    view! {
        <tbody class="table-skeleton" aria-busy="true">
            {(0..rows)
                .map(|_| {
                    view! {
                        <tr class="table-skeleton__row">
                            {(0..columns)
                                .map(|_| {
                                    view! {
                                        <td>
                                            <span class="table-skeleton__cell"></span>
                                        </td>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    }
                })
                .collect_view()}
        </tbody>
    }
}
