//! Disease-image detection: upload a photo, submit it for analysis, and
//! show the predicted label.

use leptos::prelude::*;

use crate::net::types::DetectionResult;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Detection page for patients.
#[component]
pub fn DetectPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let busy = RwSignal::new(false);
    let result = RwSignal::new(Option::<DetectionResult>::None);

    let on_file_selected = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            busy.set(true);
            result.set(None);
            leptos::task::spawn_local(async move {
                let outcome = async {
                    let url = crate::util::media::upload_file(&file).await?;
                    crate::net::api::submit_detection(&url).await
                }
                .await;

                match outcome {
                    Ok(detection) => result.set(Some(detection)),
                    Err(e) => crate::state::actions::handle_api_error(session, notify, &e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &session, &notify, &busy, &result);
        }
    };

    view! {
        <div class="detect-page">
            <h1>"Disease detection"</h1>
            <p>
                "Upload a clear photo of the affected area. The image is analyzed
                 remotely; this is an aid, not a diagnosis."
            </p>

            <label class="form__label">
                {move || if busy.get() { "Analyzing..." } else { "Choose an image" }}
                <input type="file" accept="image/*" disabled=move || busy.get() on:change=on_file_selected/>
            </label>

            {move || {
                result.get().map(|r| {
                    view! {
                        <div class="detect-page__result">
                            <h2>{r.label.clone()}</h2>
                            <p class="detect-page__confidence">
                                {format!("Confidence: {:.0}%", r.confidence * 100.0)}
                            </p>
                            {r.advice.clone().map(|a| view! { <p class="detect-page__advice">{a}</p> })}
                        </div>
                    }
                })
            }}
        </div>
    }
}
