use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] term: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="searchContainer">
            <label>"Search by Project Name:"</label>
            <input
                type="text"
                prop:value=move || term.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
