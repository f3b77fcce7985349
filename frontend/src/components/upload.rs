//! CSV upload component.
//!
//! Handles format selection, file reading and handing the bytes to the
//! ingestion pipeline. A successful upload replaces the whole dataset.

use growth::{ingest_upload, AppState, CsvFormat, IngestOptions, IngestResult, Ingested, UploadError};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::add_log;
use crate::services::read_file;
use crate::{AppError, LogEntry, LogLevel, ACCEPTED_FILE_TYPES, MAX_FILE_SIZE};

/// Map the `<select>` value onto a format.
fn selected_format(value: &str) -> Option<CsvFormat> {
    value.parse::<CsvFormat>().ok()
}

#[component]
pub fn UploadSection(
    state: ReadSignal<AppState>,
    set_state: WriteSignal<AppState>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (format, set_format) = create_signal(CsvFormat::default());
    let (error, set_error) = create_signal(None::<String>);
    let is_uploading = move || state.with(AppState::is_uploading);

    let on_format_change = move |ev: Event| match selected_format(&event_target_value(&ev)) {
        Some(selected) => set_format.set(selected),
        None => log::warn!("Ignoring unknown format selection"),
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let mut gate = Ok(());
        set_state.update(|s| gate = s.begin_upload());
        if let Err(e) = gate {
            add_log(set_logs, LogLevel::Warning, &e.to_string());
            set_error.set(Some(e.to_string()));
            return;
        }

        set_error.set(None);
        let options = IngestOptions::default()
            .with_format(format.get_untracked())
            .with_max_file_size(MAX_FILE_SIZE);
        add_log(
            set_logs,
            LogLevel::Info,
            &format!("Uploading '{}' as {} format", file.name(), options.format),
        );

        spawn_local(async move {
            let result: IngestResult<Ingested> = match read_file(&file).await {
                Ok(upload) => ingest_upload(&upload, &options),
                Err(AppError::Read(msg)) => Err(UploadError::Unreadable(msg).into()),
                Err(e) => Err(UploadError::Unreadable(e.to_string()).into()),
            };

            let mut outcome = None;
            set_state.update(|s| outcome = Some(s.finish_upload(result)));

            match outcome {
                Some(Ok(ingested)) => {
                    add_log(
                        set_logs,
                        LogLevel::Success,
                        &format!("Uploaded {} student records", ingested.records.len()),
                    );
                    if ingested.dropped_groups > 0 {
                        add_log(
                            set_logs,
                            LogLevel::Warning,
                            &format!(
                                "{} students were skipped: a fall or winter score is missing",
                                ingested.dropped_groups
                            ),
                        );
                    }
                    input.set_value("");
                }
                Some(Err(e)) => {
                    let err = AppError::from(e);
                    add_log(set_logs, LogLevel::Error, &err.to_string());
                    set_error.set(Some(err.to_string()));
                }
                None => log::error!("Upload finished without a result"),
            }
        });
    };

    view! {
        <div class="upload-section">
            <h2>"Upload CSV"</h2>

            <label for="formatSelect">"CSV format"</label>
            <select
                id="formatSelect"
                on:change=on_format_change
                prop:disabled=is_uploading
            >
                <option value="wide" selected=true>"Wide"</option>
                <option value="long">"Long"</option>
            </select>

            <div class="upload-hint">
                "Columns: "
                {move || format.get().columns().join(", ")}
                <br/>
                {move || format.get().description()}
            </div>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_FILE_TYPES
                on:change=on_file_change
                prop:disabled=is_uploading
            />

            <Show when=is_uploading fallback=|| view! { }>
                <div class="upload-text">"Reading file..."</div>
            </Show>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_format() {
        assert_eq!(selected_format("wide"), Some(CsvFormat::Wide));
        assert_eq!(selected_format("long"), Some(CsvFormat::Long));
        assert_eq!(selected_format("tall"), None);
        assert_eq!(selected_format(""), None);
    }
}
