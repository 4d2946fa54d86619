//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `RwSignal<WidgetState>` and `Memo<ChatView>` from
//! context. Rendering is driven by the memoized view; only event handlers
//! touch the state signal.

pub mod chat_form;
pub mod history_panel;
pub mod response_panel;
pub mod similar_cases;
