//! Advice display: placeholder, fresh advice, or a replayed history item.

use leptos::prelude::*;

use advice::ChatView;
use advice::view::ResponseView;

use crate::components::similar_cases::SimilarCases;
use crate::state::widget::WidgetState;
use crate::util::format::render_response_html;

#[component]
pub fn ResponsePanel() -> impl IntoView {
    let widget = expect_context::<RwSignal<WidgetState>>();
    let chat_view = expect_context::<Memo<ChatView>>();
    let format = widget.with_untracked(|w| w.config.format);

    view! {
        <section class="response-panel">
            {move || match chat_view.get().response {
                ResponseView::Placeholder(text) => {
                    view! { <div class="response-panel__placeholder">{text}</div> }.into_any()
                }
                ResponseView::Advice { text, cases } => {
                    let rendered = render_response_html(&text, format);
                    view! {
                        <div class="response-panel__body">
                            <h2 class="response-panel__title">"Mechanic's Advice"</h2>
                            <div class="response-panel__text" inner_html=rendered></div>
                            {(!cases.is_empty()).then(|| view! { <SimilarCases cases=cases/> })}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
