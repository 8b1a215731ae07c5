//! Result card listing answer entries, each with a kind-specific icon.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use leptos::prelude::*;

use crate::components::ui::{Card, CardContent, CardHeader, CardTitle};
use crate::state::query::{ResultEntry, ResultKind};

/// Glyph and modifier class for a result kind.
pub fn icon_for(kind: ResultKind) -> (&'static str, &'static str) {
    match kind {
        ResultKind::Trend => ("\u{2197}", "result-icon result-icon--trend"),
        ResultKind::History => ("\u{25F7}", "result-icon result-icon--history"),
        ResultKind::Response => ("\u{2726}", "result-icon result-icon--response"),
    }
}

#[component]
pub fn ResultIcon(kind: ResultKind) -> impl IntoView {
    let (glyph, class) = icon_for(kind);
    view! { <span class=class aria-hidden="true">{glyph}</span> }
}

/// "Context Analysis" card. Callers render it only when `results` is non-empty.
#[component]
pub fn ResultsCard(#[prop(into)] results: Signal<Vec<ResultEntry>>) -> impl IntoView {
    view! {
        <Card class="results-card">
            <CardHeader>
                <CardTitle>
                    <ResultIcon kind=ResultKind::Response/>
                    "Context Analysis"
                </CardTitle>
            </CardHeader>
            <CardContent>
                <div class="results-card__list">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div class="results-card__entry">
                                        <ResultIcon kind=entry.kind/>
                                        <p class="results-card__text">{entry.text}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </CardContent>
        </Card>
    }
}
