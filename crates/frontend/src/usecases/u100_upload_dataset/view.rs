use super::api;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

/// File types the upload gate accepts, matched by extension.
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".xlsx", ".xls", ".csv", ".txt"];

/// Case-insensitive extension check against [`ALLOWED_EXTENSIONS`].
pub fn is_valid_file_type(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Dataset upload widget: drag-and-drop zone plus a browse button.
///
/// Validates the extension locally, posts the file to the backend and
/// fires `on_upload_complete` once the server has processed it.
#[component]
pub fn FileUpload(on_upload_complete: Callback<()>) -> impl IntoView {
    let (is_dragging, set_is_dragging) = signal(false);
    let (is_uploading, set_is_uploading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (progress, set_progress) = signal(None::<String>);

    let process_file = move |file: web_sys::File| {
        set_is_uploading.set(true);
        set_progress.set(Some("Uploading file...".to_string()));
        set_error.set(None);

        spawn_local(async move {
            match api::process_data_file(file).await {
                Ok(response) => {
                    log::info!("Dataset processed: {}", response.message);
                    set_progress.set(Some("Data processed successfully!".to_string()));
                    on_upload_complete.run(());

                    // Keep the success status visible briefly
                    TimeoutFuture::new(2_000).await;
                    set_progress.set(None);
                    set_is_uploading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_progress.set(None);
                    set_is_uploading.set(false);
                }
            }
        });
    };

    let handle_file = move |file: Option<web_sys::File>| {
        set_error.set(None);
        let Some(file) = file else {
            return;
        };
        if is_valid_file_type(&file.name()) {
            process_file(file);
        } else {
            set_error.set(Some(
                "Invalid file type. Please upload an Excel, CSV, or TXT file.".to_string(),
            ));
        }
    };

    let handle_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let handle_drag_leave = move |_ev: web_sys::DragEvent| {
        set_is_dragging.set(false);
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if is_uploading.get_untracked() {
            return;
        }
        let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
        handle_file(file);
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let file = input.and_then(|input| input.files()).and_then(|files| files.get(0));
        handle_file(file);
    };

    let zone_class = move || {
        if is_dragging.get() {
            "file-upload__zone file-upload__zone--dragging"
        } else {
            "file-upload__zone"
        }
    };

    view! {
        <div class="file-upload">
            <div
                class=zone_class
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                {icon("upload")}
                <h3 class="file-upload__heading">"Upload your retail store dataset"</h3>
                <p class="file-upload__hint">"Supported formats: Excel (.xlsx, .xls), CSV, TXT"</p>

                <label class="button button--primary file-upload__browse" for="dataset-file-input">
                    "Browse Files"
                </label>
                <input
                    id="dataset-file-input"
                    type="file"
                    accept=".xlsx,.xls,.csv,.txt"
                    class="hidden"
                    on:change=handle_file_select
                    disabled=move || is_uploading.get()
                />

                <Show when=move || is_uploading.get()>
                    <Space gap=SpaceGap::Small>
                        {view! { <Spinner /> }.into_any()}
                    </Space>
                </Show>

                {move || progress.get().map(|p| {
                    view! { <div class="file-upload__progress">{p}</div> }
                })}

                {move || error.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error file-upload__error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_extensions() {
        assert!(is_valid_file_type("sales.xlsx"));
        assert!(is_valid_file_type("sales.xls"));
        assert!(is_valid_file_type("sales.csv"));
        assert!(is_valid_file_type("sales.txt"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(is_valid_file_type("SALES.XLSX"));
        assert!(is_valid_file_type("Report.Csv"));
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(!is_valid_file_type("sales.pdf"));
        assert!(!is_valid_file_type("sales.xlsx.exe"));
        assert!(!is_valid_file_type("no_extension"));
        assert!(!is_valid_file_type(""));
    }
}
