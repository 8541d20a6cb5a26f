//! Landing page hosting the signature-request form.

use leptos::prelude::*;

use crate::components::submission_form::SubmissionForm;

/// Single screen of the app: the form centered on the page.
#[component]
pub fn SendPage() -> impl IntoView {
    view! {
        <div class="send-page">
            <main class="send-page__main">
                <SubmissionForm/>
            </main>
        </div>
    }
}
