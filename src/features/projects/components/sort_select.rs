use leptos::prelude::*;
use leptos::ev;
use crate::models::SortCriterion;

#[component]
pub fn SortSelect(
    #[prop(into)] selected: Signal<SortCriterion>,
    on_change: Callback<SortCriterion>,
) -> impl IntoView {
    let handle_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<SortCriterion>() {
            Ok(criterion) => on_change.run(criterion),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div class="sortContainer">
            <label>"Sort by:"</label>
            <select prop:value=move || selected.get().as_str() on:change=handle_change>
                {SortCriterion::all()
                    .into_iter()
                    .map(|criterion| view! { <option value={criterion.as_str()}>{criterion.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
