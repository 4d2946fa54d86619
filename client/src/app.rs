//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use advice::{ChatView, WidgetConfig};

use crate::components::{chat_form::ChatForm, history_panel::HistoryPanel, response_panel::ResponsePanel};
use crate::state::widget::WidgetState;

/// Root application component.
///
/// Owns the single [`WidgetState`] signal and a memoized [`ChatView`]
/// derived from it; child components read both from context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let widget = RwSignal::new(WidgetState::new(WidgetConfig::default()));
    let chat_view = Memo::new(move |_| widget.with(WidgetState::view));

    provide_context(widget);
    provide_context(chat_view);

    view! {
        <Title text="Mechanic Advisor"/>

        <main class="mechanic-app">
            <section class="mechanic-app__main">
                <ChatForm/>
                <ResponsePanel/>
            </section>
            <aside class="mechanic-app__history">
                <HistoryPanel/>
            </aside>
        </main>
    }
}
