//! Query form that sends one `/chat` request per submission and renders the
//! answer or the error.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns a [`QueryState`] signal for its whole lifetime. Submit
//! is disabled while a request is outstanding, and `begin_submit` refuses to
//! start a second one, so at most one request is ever in flight. There is no
//! timeout, retry, or cancellation; the user recovers by resubmitting.

use leptos::prelude::*;

use crate::components::results::ResultsCard;
use crate::components::ui::{Button, ButtonSize, Card, TextInput};
use crate::net::api::post_chat;
use crate::state::query::QueryState;

#[cfg(test)]
#[path = "news_context_tool_test.rs"]
mod news_context_tool_test;

#[component]
pub fn NewsContextTool() -> impl IntoView {
    let state = RwSignal::new(QueryState::default());

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let results = Signal::derive(move || state.with(|s| s.results.clone()));
    let error = move || state.with(|s| s.error.clone());
    let phase = move || state.with(|s| s.phase().as_str());

    let on_input = Callback::new(move |text: String| state.update(|s| s.set_query(text)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = state.try_update(QueryState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = post_chat(wire::chat_endpoint(), &query).await;
            state.update(|s| s.finish(outcome));
        });
    };

    view! {
        <div class="query-tool" data-phase=phase>
            <header class="query-tool__header">
                <h1 class="query-tool__title">"News Context & Evolution Agent"</h1>
                <p class="query-tool__subtitle">
                    "Ask questions to understand news context, trends, and historical evolution"
                </p>
            </header>

            <Card class="query-tool__form-card">
                <form class="query-tool__form" on:submit=on_submit>
                    <div class="query-tool__field">
                        <span class="query-tool__search-icon" aria-hidden="true">"\u{2315}"</span>
                        <TextInput
                            value=query
                            on_input=on_input
                            placeholder="Ask about news context..."
                            class="query-tool__input"
                        />
                    </div>
                    <SendButton state=state/>
                </form>
            </Card>

            <Show when=move || error().is_some()>
                <div class="query-tool__error">
                    <p>{move || error().unwrap_or_default()}</p>
                </div>
            </Show>

            <Show when=move || !results.get().is_empty()>
                <ResultsCard results=results/>
            </Show>
        </div>
    }
}

/// Icon submit button: disabled unless the query can be sent, spinner while
/// a request is in flight.
#[component]
pub fn SendButton(state: RwSignal<QueryState>) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let disabled = Signal::derive(move || !state.with(QueryState::can_submit));

    view! {
        <Button submit=true size=ButtonSize::Icon class="query-tool__send" disabled=disabled>
            {move || {
                if loading.get() {
                    view! { <span class="spinner" role="status" aria-label="Loading"></span> }.into_any()
                } else {
                    view! { <span class="query-tool__send-icon">"\u{27A4}"</span> }.into_any()
                }
            }}
        </Button>
    }
}
