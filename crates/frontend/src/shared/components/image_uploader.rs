//! Multi-image uploader
//!
//! Reads picked files in the browser and hands them upward as base64
//! `ImageUpload` values. Only images are accepted, at most `max_uploads`.

use base64::{engine::general_purpose, Engine as _};
use contracts::domain::a002_post::ImageUpload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::shared::icons::icon;

pub fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

pub fn encode_upload(file_name: &str, content_type: &str, bytes: &[u8]) -> ImageUpload {
    ImageUpload::new_upload(file_name, content_type, general_purpose::STANDARD.encode(bytes))
}

/// Append new uploads, dropping whatever exceeds the cap
pub fn merge_uploads(
    current: &[ImageUpload],
    incoming: Vec<ImageUpload>,
    max_uploads: usize,
) -> Vec<ImageUpload> {
    current
        .iter()
        .cloned()
        .chain(incoming)
        .take(max_uploads)
        .collect()
}

/// Merge into the uploader's list; `None` once the uploader has been
/// unmounted while a file was still being read.
fn append_uploads(
    uploads: RwSignal<Vec<ImageUpload>>,
    incoming: Vec<ImageUpload>,
    max_uploads: usize,
) -> Option<Vec<ImageUpload>> {
    uploads.try_with_untracked(|current| merge_uploads(current, incoming, max_uploads))
}

pub fn remove_upload(current: &[ImageUpload], index: usize) -> Vec<ImageUpload> {
    current
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, u)| u.clone())
        .collect()
}

/// `data:` URL for a thumbnail of a pending upload
pub fn preview_src(upload: &ImageUpload) -> Option<String> {
    upload
        .upload
        .as_ref()
        .map(|u| format!("data:{};base64,{}", u.content_type, u.content))
}

async fn read_file(file: web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(encode_upload(&file.name(), &file.type_(), &bytes))
}

#[component]
pub fn ImageUploader(
    /// Maximum number of images kept
    max_uploads: usize,
    /// Uploads already attached when the uploader mounts
    #[prop(optional)]
    initial: Vec<ImageUpload>,
    /// Called with the full list after every change
    on_change: Callback<Vec<ImageUpload>>,
) -> impl IntoView {
    let uploads = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);

    let publish = move |next: Vec<ImageUpload>| {
        uploads.set(next.clone());
        on_change.run(next);
    };

    let handle_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };
        let selected: Vec<web_sys::File> =
            (0..files.length()).filter_map(|i| files.get(i)).collect();
        // allow re-picking the same file
        input.set_value("");
        error.set(None);

        spawn_local(async move {
            let mut incoming = Vec::new();
            for file in selected {
                if !is_image(&file.type_()) {
                    error.try_set(Some(format!("{} is not an image", file.name())));
                    continue;
                }
                match read_file(file).await {
                    Ok(upload) => incoming.push(upload),
                    Err(e) => {
                        log::error!("{}", e);
                        error.try_set(Some(e));
                    }
                }
            }
            let Some(next) = append_uploads(uploads, incoming, max_uploads) else {
                leptos::logging::log!("uploader unmounted while reading files, dropping them");
                return;
            };
            publish(next);
        });
    };

    let handle_remove = move |index: usize| {
        let next = uploads.with_untracked(|current| remove_upload(current, index));
        publish(next);
    };

    view! {
        <div class="image-uploader">
            <div class="image-uploader__list">
                {move || {
                    uploads
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, upload)| {
                            let name = upload.file_name().unwrap_or_default().to_string();
                            view! {
                                <div class="image-uploader__item">
                                    <img class="image-uploader__preview" src={preview_src(&upload).unwrap_or_default()} alt={name.clone()} />
                                    <button
                                        type="button"
                                        class="button button--icon image-uploader__remove"
                                        title={format!("Remove {}", name)}
                                        on:click=move |_| handle_remove(index)
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || uploads.with(|u| u.len() < max_uploads)>
                    <label class="image-uploader__add" title="Add image">
                        {icon("image")}
                        <input
                            type="file"
                            accept="image/*"
                            multiple
                            class="image-uploader__input"
                            on:change=handle_select
                        />
                    </label>
                </Show>
            </div>
            {move || error.get().map(|e| view! { <div class="form__field-errors">{e}</div> })}
        </div>
    }
}
