use yew::prelude::*;

use crate::{
    components::{Button, EventForm},
    hooks::{use_event, use_title},
};

/// Hosts the event form once the stored event is known, so the form seeds
/// its draft from the real record rather than from an empty placeholder.
#[function_component]
pub fn EditEventPage() -> Html {
    let events = use_event();
    use_title(match events.event.as_ref() {
        Some(Some(_)) => "Editar evento",
        _ => "Nuevo evento",
    });

    if events.event.is_fetched() {
        return html! { <EventForm events={events} /> };
    }

    match &events.error {
        Some(error) => {
            let refetch = events.refetch.clone();
            html! {
                <div class="max-w-2xl mx-auto p-4 rounded-md bg-red-50 border border-red-200 space-y-3">
                    <p class="text-sm text-red-700">
                        {format!("Error al cargar el evento: {error}")}
                    </p>
                    <Button
                        class="border border-gray-300 px-4 py-2 rounded-md"
                        onclick={Callback::from(move |_: MouseEvent| refetch.emit(()))}
                    >
                        {"Reintentar"}
                    </Button>
                </div>
            }
        }
        None => html! {
            <p class="text-gray-600 text-center py-12">{"Cargando evento..."}</p>
        },
    }
}
