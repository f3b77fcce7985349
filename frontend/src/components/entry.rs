//! Manual data entry form.

use growth::AppState;
use leptos::*;

use crate::components::add_log;
use crate::{AppError, LogEntry, LogLevel};

#[component]
pub fn DataEntryForm(
    set_state: WriteSignal<AppState>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (hours, set_hours) = create_signal(String::new());
    let (fall_score, set_fall_score) = create_signal(String::new());
    let (winter_score, set_winter_score) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut outcome = None;
        set_state.update(|s| {
            outcome = Some(s.add_entry(
                &hours.get_untracked(),
                &fall_score.get_untracked(),
                &winter_score.get_untracked(),
            ))
        });

        match outcome {
            Some(Ok(record)) => {
                add_log(
                    set_logs,
                    LogLevel::Success,
                    &format!(
                        "Added student: {} hours, growth {}",
                        growth::format_value(record.hours),
                        growth::format_value(record.growth())
                    ),
                );
                set_error.set(None);
                set_hours.set(String::new());
                set_fall_score.set(String::new());
                set_winter_score.set(String::new());
            }
            Some(Err(e)) => {
                let err = AppError::from(e);
                add_log(set_logs, LogLevel::Error, &err.to_string());
                set_error.set(Some(err.to_string()));
            }
            None => {}
        }
    };

    view! {
        <form class="entry-form" on:submit=on_submit>
            <h2>"Add Student"</h2>
            <label>
                "Hours Spent"
                <input
                    type="number"
                    min="0"
                    step="0.1"
                    required=true
                    prop:value=hours
                    on:input=move |ev| set_hours.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Fall Score"
                <input
                    type="number"
                    min="0"
                    step="0.1"
                    required=true
                    prop:value=fall_score
                    on:input=move |ev| set_fall_score.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Winter Score"
                <input
                    type="number"
                    min="0"
                    step="0.1"
                    required=true
                    prop:value=winter_score
                    on:input=move |ev| set_winter_score.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="upload-button">"Add"</button>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </form>
    }
}
