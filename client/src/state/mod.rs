//! Client-side widget state.

pub mod widget;
