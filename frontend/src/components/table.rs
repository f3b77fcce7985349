//! Table of student records.

use growth::{TableRow, TABLE_HEADERS};
use leptos::*;

#[component]
pub fn DataTable(rows: Memo<Vec<TableRow>>) -> impl IntoView {
    view! {
        <div class="data-table">
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <p class="upload-hint">"No students yet"</p> }
            >
                <table>
                    <thead>
                        <tr>
                            {TABLE_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get().into_iter().enumerate()
                            key=|(i, row)| (*i, row.cells())
                            children=move |(_, row)| {
                                view! {
                                    <tr>
                                        {row.cells().into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
