//! Home page: full-height container around the query tool.

use leptos::prelude::*;

use crate::components::news_context_tool::NewsContextTool;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <NewsContextTool/>
        </main>
    }
}
