//! Question form: message, category selector, and submit control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission is split around the network await: `begin` runs synchronously
//! inside the signal update (rejecting blank input and overlapping submits),
//! the request runs on the local executor, and `complete` runs in a second
//! update that always returns the widget to idle.

#[cfg(test)]
#[path = "chat_form_test.rs"]
mod chat_form_test;

use leptos::prelude::*;

use advice::{AdviceApi, Category, ChatView, SubmitOutcome};

use crate::net::api::HttpAdviceApi;
use crate::state::widget::WidgetState;
use crate::util::notify;

/// What the form does once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    ClearInput,
    Notify(String),
    Nothing,
}

/// Map a settled submission to the form's follow-up.
pub fn form_action(outcome: &SubmitOutcome) -> FormAction {
    match outcome {
        SubmitOutcome::Success => FormAction::ClearInput,
        other => other.notice().map_or(FormAction::Nothing, |notice| FormAction::Notify(notice.to_owned())),
    }
}

#[component]
pub fn ChatForm() -> impl IntoView {
    let widget = expect_context::<RwSignal<WidgetState>>();
    let chat_view = expect_context::<Memo<ChatView>>();

    let message = RwSignal::new(String::new());
    let category = RwSignal::new(Category::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let text = message.get_untracked();
        let Some(request) = widget
            .try_update(|w| w.controller.begin(&text, category.get_untracked()).ok())
            .flatten()
        else {
            return;
        };

        let api = widget.with_untracked(|w| HttpAdviceApi::new(w.config.endpoint.clone()));
        leptos::task::spawn_local(async move {
            let result = api.ask(&request).await;
            let Some(outcome) = widget.try_update(|w| w.controller.complete(request, result)) else {
                return;
            };
            match form_action(&outcome) {
                FormAction::ClearInput => message.set(String::new()),
                FormAction::Notify(notice) => notify::alert(&notice),
                FormAction::Nothing => {}
            }
        });
    };

    let busy = move || chat_view.get().busy;

    view! {
        <form class="chat-form" on:submit=on_submit>
            <label class="chat-form__label" for="category">"Vehicle system"</label>
            <select
                id="category"
                class="chat-form__category"
                prop:value=move || category.get().as_str()
                on:change=move |ev| {
                    if let Some(selected) = Category::parse(&event_target_value(&ev)) {
                        category.set(selected);
                    }
                }
            >
                {Category::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.as_str()>{c.display_name()}</option> })
                    .collect::<Vec<_>>()}
            </select>

            <label class="chat-form__label" for="message">"Describe the problem"</label>
            <textarea
                id="message"
                class="chat-form__message"
                rows="4"
                placeholder="e.g. Grinding noise when braking at low speed"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>

            <button type="submit" class="btn btn--primary chat-form__submit" disabled=busy>
                {move || busy().then(|| view! { <span class="chat-form__spinner" aria-hidden="true"></span> })}
                <span class="chat-form__label-text">{move || chat_view.get().submit_label}</span>
            </button>
        </form>
    }
}
