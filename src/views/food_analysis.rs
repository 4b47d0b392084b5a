//! Food Analysis View
//!
//! Upload a photo (picker or drag-and-drop) and list the food items the
//! recognition model finds in it.

use js_sys::Uint8Array;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File, HtmlInputElement, MouseEvent, Url};

use crate::api::FoodAnalysisApi;
use crate::components::LoadState;
use crate::context::use_app_context;
use crate::forms::{ImageUpload, PickGeneration, MAX_IMAGE_BYTES};
use crate::sync::ViewSync;

async fn read_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("Could not read image: {:?}", err))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn FoodAnalysisView() -> impl IntoView {
    let ctx = use_app_context();
    let sync = ViewSync::new(FoodAnalysisApi::new(ctx.client()), None);

    let (preview, set_preview) = signal::<Option<String>>(None);
    let (file_name, set_file_name) = signal::<Option<String>>(None);
    let (rejected, set_rejected) = signal::<Option<String>>(None);
    let (dragging, set_dragging) = signal(false);
    let picks = StoredValue::new(PickGeneration::default());

    let release_preview = move || {
        if let Some(url) = preview.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
        set_preview.set(None);
    };

    on_cleanup(move || {
        if let Some(Some(url)) = preview.try_get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let handle_file = move |file: File| {
        let mime = file.type_();
        if let Err(err) = ImageUpload::check(&mime, file.size() as usize) {
            log::info!("[food] rejected {}: {}", file.name(), err);
            set_rejected.set(Some(err.to_string()));
            return;
        }
        set_rejected.set(None);
        release_preview();
        set_preview.set(Url::create_object_url_with_blob(&file).ok());
        set_file_name.set(Some(file.name()));
        sync.reset(None);
        let Some(tag) = picks.try_update_value(PickGeneration::advance) else {
            return;
        };

        sync.spawn(async move {
            let upload = read_bytes(&file)
                .await
                .and_then(|bytes| ImageUpload::new(file.name(), mime, bytes).map_err(|err| err.to_string()));
            if !picks.try_with_value(|generation| generation.admits(tag)).unwrap_or(false) {
                log::debug!("[food] dropped superseded read of {}", file.name());
                return;
            }
            match upload {
                Ok(upload) => sync.refresh_with(Some(upload)),
                Err(err) => set_rejected.set(Some(err)),
            }
        });
    };

    let remove_image = move |_: MouseEvent| {
        release_preview();
        set_file_name.set(None);
        set_rejected.set(None);
        picks.update_value(|generation| {
            generation.advance();
        });
        sync.reset(None);
    };

    view! {
        <section class="view food-view">
            <div class="view-header">
                <h1 class="view-title">"Food Analysis"</h1>
            </div>

            <div
                class=move || if dragging.get() { "upload-zone active" } else { "upload-zone" }
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_: DragEvent| set_dragging.set(false)
                on:drop=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(false);
                    if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                        handle_file(file);
                    }
                }
            >
                {move || match preview.get() {
                    Some(url) => view! {
                        <img class="upload-preview" src=url alt="Uploaded food" />
                    }.into_any(),
                    None => view! {
                        <div class="upload-hint">
                            <span class="upload-icon">"📷"</span>
                            <p>"Drag and drop a food photo here"</p>
                            <p class="muted">{format!("PNG or JPG, up to {} MB", MAX_IMAGE_BYTES / (1024 * 1024))}</p>
                        </div>
                    }.into_any(),
                }}
                <input
                    type="file"
                    accept="image/*"
                    id="food-image-input"
                    class="hidden-input"
                    on:change=move |ev| {
                        let input: HtmlInputElement = event_target(&ev);
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            handle_file(file);
                        }
                        input.set_value("");
                    }
                />
                <label class="secondary-btn" for="food-image-input">"Choose Image"</label>
            </div>

            {move || rejected.get().map(|msg| view! { <div class="load-state error">"⚠ " {msg}</div> })}

            {move || file_name.get().map(|name| view! {
                <div class="upload-actions">
                    <span class="muted">{name}</span>
                    <button
                        class="secondary-btn"
                        disabled=move || sync.is_loading()
                        on:click=move |_| sync.refresh()
                    >
                        "Analyze Again"
                    </button>
                    <button class="delete-btn" on:click=remove_image>"Remove Image"</button>
                </div>
            })}

            <LoadState
                loading=Signal::derive(move || sync.is_loading())
                error=Signal::derive(move || sync.error())
                loading_text="Analyzing image..."
            />

            <Show when=move || !sync.is_empty()>
                <h2 class="section-title">"Detected Items"</h2>
                <table class="data-table">
                    <thead>
                        <tr><th>"Food Item"</th><th>"Quantity"</th></tr>
                    </thead>
                    <tbody>
                        {move || sync.items().into_iter().map(|food| view! {
                            <tr>
                                <td>{food.name}</td>
                                <td>{food.quantity.to_string()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
