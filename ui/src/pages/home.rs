use yew::prelude::*;

use crate::{
    components::EventSummary,
    hooks::{use_event, use_title},
};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Próximo evento");
    let events = use_event();

    if events.is_initial_loading() {
        return html! {
            <p class="text-gray-600 text-center py-12">{"Cargando..."}</p>
        };
    }

    match events.event.as_ref() {
        Some(Some(event)) => html! {
            <div class="max-w-2xl mx-auto">
                <EventSummary event={event.clone()} />
            </div>
        },
        _ => html! {
            <div class="text-center py-12">
                <h1 class="text-2xl font-bold">{"Próximamente"}</h1>
                <p class="text-gray-600">{"Todavía no hay eventos anunciados."}</p>
            </div>
        },
    }
}
