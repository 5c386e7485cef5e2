//! Wound image upload zone: file picker, preview grid, and per-file status.
//!
//! CONCURRENCY
//! ===========
//! Every accepted file gets its own fire-and-forget upload task. Tasks
//! resolve in any order and report back through the shared
//! [`UploadTracker`] keyed by the file's `LocalKey`, so a completion always
//! lands on the right entry even after the user removed other files.
//! Nothing cancels an in-flight upload; a failed file stays visible until
//! the user removes it.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::uploads::{LocalKey, PendingImage, UploadStatus, UploadTracker};
use crate::util::files;

/// Upload zone component.
#[component]
pub fn UploadZone() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let uploads = expect_context::<RwSignal<UploadTracker>>();

    // Validation rejections for the last file selection.
    let notice = RwSignal::new(Vec::<String>::new());

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(list) = input.files() else {
                return;
            };
            let mut rejected = Vec::new();
            for index in 0..list.length() {
                let Some(file) = list.get(index) else {
                    continue;
                };
                if let Err(reason) =
                    files::validate_file(&file.name(), file.size(), &file.type_())
                {
                    rejected.push(reason);
                    continue;
                }

                let key = LocalKey::generate();
                let preview = files::create_preview_url(&file);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                uploads.update(|t| {
                    t.begin(key.clone(), file.name(), file.size() as u64, preview);
                });

                let token = session.get_untracked().bearer();
                let description = file.name();
                leptos::task::spawn_local(async move {
                    match crate::net::api::upload_image(token.as_deref(), &file, &description)
                        .await
                    {
                        Ok(stored) => {
                            uploads.update(|t| {
                                t.mark_ready(&key, stored.id);
                            });
                        }
                        Err(message) => {
                            log::warn!("upload of {description} failed: {message}");
                            uploads.update(|t| {
                                t.mark_failed(&key, message);
                            });
                        }
                    }
                });
            }
            notice.set(rejected);
            // Allow picking the same file again after a remove.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, session);
        }
    };

    let remove_entry = move |key: LocalKey| {
        let mut removed: Option<PendingImage> = None;
        uploads.update(|t| removed = t.remove(&key));
        if let Some(image) = removed {
            if let Some(url) = image.preview_url {
                files::revoke_preview_url(&url);
            }
        }
    };

    view! {
        <div class="upload-zone">
            <label class="upload-zone__drop">
                <input
                    class="upload-zone__input"
                    type="file"
                    multiple
                    accept="image/jpeg,image/png"
                    on:change=on_files
                />
                <p class="upload-zone__text">"Click to upload wound photos"</p>
                <p class="upload-zone__hint">"PNG, JPG up to 10MB"</p>
            </label>

            <Show when=move || !notice.get().is_empty()>
                <div class="upload-zone__notice">
                    {move || {
                        notice
                            .get()
                            .into_iter()
                            .map(|reason| view! { <p>{reason}</p> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || !uploads.get().is_empty()>
                <div class="upload-zone__previews">
                    {move || {
                        uploads
                            .get()
                            .images()
                            .iter()
                            .cloned()
                            .map(|image| {
                                let key = image.key.clone();
                                view! {
                                    <div class="upload-thumb">
                                        {match image.preview_url.clone() {
                                            Some(url) => {
                                                view! { <img class="upload-thumb__img" src=url/> }
                                                    .into_any()
                                            }
                                            None => {
                                                view! {
                                                    <div class="upload-thumb__placeholder">
                                                        {image.file_name.clone()}
                                                    </div>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                        <StatusChip image=image.clone()/>
                                        <button
                                            class="upload-thumb__remove"
                                            title="Remove image"
                                            on:click=move |_| remove_entry(key.clone())
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Per-file lifecycle chip under each preview.
#[component]
fn StatusChip(image: PendingImage) -> impl IntoView {
    match image.status {
        UploadStatus::Uploading => {
            view! { <span class="upload-thumb__status upload-thumb__status--pending">"Uploading..."</span> }
                .into_any()
        }
        UploadStatus::Ready => {
            view! { <span class="upload-thumb__status upload-thumb__status--ready">"Ready"</span> }
                .into_any()
        }
        UploadStatus::Failed => {
            let message = image.error.unwrap_or_else(|| "Upload failed".to_owned());
            view! {
                <span class="upload-thumb__status upload-thumb__status--failed" title=message>
                    "Failed"
                </span>
            }
            .into_any()
        }
    }
}
