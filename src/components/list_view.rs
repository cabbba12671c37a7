//! List Phase Rendering
//!
//! Maps a list fetch to exactly one of loading / error / empty / items.

use leptos::prelude::*;
use portfolio_core::copy::PageCopy;
use portfolio_core::ListPhase;

use super::{ErrorMessage, Loading};

pub fn render_list<T, V>(
    phase: ListPhase<'_, T>,
    copy: &PageCopy,
    grid_class: &'static str,
    card: impl Fn(T) -> V,
) -> AnyView
where
    T: Clone,
    V: IntoView + 'static,
{
    match phase {
        ListPhase::Loading => view! { <Loading message=copy.loading /> }.into_any(),
        ListPhase::Errored(message) => view! { <ErrorMessage message=message.to_string() /> }.into_any(),
        ListPhase::Empty => view! { <p class="empty-state">{copy.empty}</p> }.into_any(),
        ListPhase::Items(items) => {
            let cards = items.iter().cloned().map(card).collect_view();
            view! { <div class=grid_class>{cards}</div> }.into_any()
        }
    }
}
