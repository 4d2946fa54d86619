//! Recent conversations with a "view full" replay action.

use leptos::prelude::*;

use advice::ChatView;
use advice::view::HistoryView;

use crate::state::widget::WidgetState;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let widget = expect_context::<RwSignal<WidgetState>>();
    let chat_view = expect_context::<Memo<ChatView>>();

    view! {
        <section class="history-panel">
            <h2 class="history-panel__title">"Recent Diagnostics"</h2>
            {move || match chat_view.get().history {
                HistoryView::Empty(text) => view! { <p class="history-panel__empty">{text}</p> }.into_any(),
                HistoryView::Entries(entries) => entries
                    .into_iter()
                    .map(|entry| {
                        let index = entry.index;
                        view! {
                            <div class="history-panel__item" class:history-panel__item--active=entry.active>
                                <div class="history-panel__meta">
                                    <span class="history-panel__category">{entry.category_label}</span>
                                    <small class="history-panel__timestamp">{entry.timestamp}</small>
                                </div>
                                <p class="history-panel__message">{entry.message_preview}</p>
                                <p class="history-panel__response">{entry.response_preview}</p>
                                <button
                                    type="button"
                                    class="btn btn--outline history-panel__view"
                                    on:click=move |_| {
                                        widget.update(|w| {
                                            w.controller.view_item(index);
                                        });
                                    }
                                >
                                    "View Full"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </section>
    }
}
