//! Signature-request form: template id, participant identities, submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page's only `RwSignal<FormState>`. Validation and payload shaping
//! live in `state::form`; this component wires inputs to that API and runs
//! `state::form::submit` on the browser task queue.

#[cfg(all(test, feature = "ssr"))]
#[path = "submission_form_test.rs"]
mod submission_form_test;

use leptos::prelude::*;

use crate::state::form::{FormState, ParticipantField};
use crate::util::mount::use_mounted;

/// Form that sends a template to its participants for signature.
///
/// Renders nothing until mounted in the browser so SSR and hydration agree.
#[component]
pub fn SubmissionForm() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let mounted = use_mounted();

    view! {
        <Show when=move || mounted.get()>
            <FormBody form/>
        </Show>
    }
}

/// Interactive form markup bound to `form`.
#[component]
fn FormBody(form: RwSignal<FormState>) -> impl IntoView {
    let rows = form.with_untracked(|f| f.participants.len());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::form::submit(&form, &crate::net::api::BrowserTransport).await;
        });
    };

    view! {
        <form class="submission-form" on:submit=on_submit>
            <h2 class="submission-form__title">"Send Template for Signature"</h2>

            <div class="submission-form__field">
                <label class="submission-form__label">"Template ID"</label>
                <input
                    class="submission-form__input"
                    type="text"
                    placeholder="Enter Template ID"
                    required
                    prop:value=move || form.with(|f| f.template_id.clone())
                    on:input=move |ev| form.update(|f| f.template_id = event_target_value(&ev))
                />
            </div>

            {(0..rows).map(|index| view! { <ParticipantFields form index/> }).collect_view()}

            <button
                type="submit"
                class=move || form.with(FormState::submit_class)
                disabled=move || form.with(FormState::submit_disabled)
            >
                {move || form.with(FormState::submit_label)}
            </button>

            <Show when=move || form.with(|f| !f.message.is_empty())>
                <p class="submission-form__message">{move || form.with(|f| f.message.clone())}</p>
            </Show>
        </form>
    }
}

/// Name and email inputs for the participant at `index`.
#[component]
fn ParticipantFields(form: RwSignal<FormState>, index: usize) -> impl IntoView {
    let label = move || form.with(|f| f.participants.get(index).map_or("Buyer", |p| p.role.label()));
    let edit = move |field: ParticipantField, value: String| {
        form.update(|f| {
            if let Err(e) = f.edit_participant(index, field, &value) {
                log::warn!("ignored participant edit: {e}");
            }
        });
    };

    view! {
        <div class="submission-form__participant">
            <input
                class="submission-form__input"
                type="text"
                placeholder=move || format!("{} Name", label())
                required
                prop:value=move || {
                    form.with(|f| f.participants.get(index).map(|p| p.name.clone()).unwrap_or_default())
                }
                on:input=move |ev| edit(ParticipantField::Name, event_target_value(&ev))
            />
            <input
                class="submission-form__input"
                type="email"
                placeholder=move || format!("{} Email", label())
                required
                prop:value=move || {
                    form.with(|f| f.participants.get(index).map(|p| p.email.clone()).unwrap_or_default())
                }
                on:input=move |ev| edit(ParticipantField::Email, event_target_value(&ev))
            />
        </div>
    }
}
