//! Cards for past cases the server matched against the question.

use leptos::prelude::*;

use advice::view::CaseView;

#[component]
pub fn SimilarCases(cases: Vec<CaseView>) -> impl IntoView {
    view! {
        <div class="similar-cases">
            <h3 class="similar-cases__title">"Similar Cases"</h3>
            {cases
                .into_iter()
                .map(|case| {
                    view! {
                        <div class="similar-cases__card">
                            <div class="similar-cases__header">
                                <h6 class="similar-cases__number">{format!("Case {}", case.number)}</h6>
                                <span class="similar-cases__score">{case.match_label}</span>
                            </div>
                            <p class="similar-cases__problem">
                                <strong>"Problem: "</strong>
                                {case.problem}
                            </p>
                            <p class="similar-cases__solution">
                                <strong>"Solution: "</strong>
                                {case.solution_preview}
                            </p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
