use yew::prelude::*;

use crate::{
    Route,
    components::{Button, EventSummary},
    contexts::use_toast,
    hooks::{use_event, use_push_route, use_title},
};

/// Admin landing page: the stored event and the actions on it.
#[function_component]
pub fn AdminPage() -> Html {
    use_title("Administración");
    let events = use_event();
    let push_route = use_push_route();
    let toasts = use_toast();
    let is_removing = use_state(|| false);

    let on_edit = {
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| push_route.emit(Route::EditEvent))
    };

    let on_remove_flyer = {
        let events = events.clone();
        let is_removing = is_removing.clone();

        Callback::from(move |_: MouseEvent| {
            let events = events.clone();
            let toasts = toasts.clone();
            let is_removing = is_removing.clone();

            yew::platform::spawn_local(async move {
                is_removing.set(true);

                match events.remove_flyer().await {
                    Ok(()) => toasts.success("Flyer eliminado"),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to remove flyer");
                        toasts.error(e.to_string());
                    }
                }

                is_removing.set(false);
            });
        })
    };

    let on_retry = {
        let refetch = events.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let content = match events.event.as_ref() {
        None if events.error.is_some() => html! {
            <div class="p-4 rounded-md bg-red-50 border border-red-200 space-y-3">
                <p class="text-sm text-red-700">
                    {format!(
                        "Error al cargar el evento: {}",
                        events.error.clone().unwrap_or_default()
                    )}
                </p>
                <Button
                    class="border border-gray-300 px-4 py-2 rounded-md"
                    onclick={on_retry}
                >
                    {"Reintentar"}
                </Button>
            </div>
        },
        None => html! {
            <p class="text-gray-600 text-center py-12">{"Cargando evento..."}</p>
        },
        Some(None) => html! {
            <div class="text-center py-12 space-y-4">
                <p class="text-gray-600">{"Todavía no hay un evento publicado."}</p>
                <Button
                    class="bg-black text-white px-6 py-2 rounded-md"
                    onclick={on_edit}
                >
                    {"Crear evento"}
                </Button>
            </div>
        },
        Some(Some(event)) => html! {
            <div class="space-y-4">
                <EventSummary event={event.clone()} show_last_updated=true />
                <div class="flex justify-end space-x-4">
                    if event.has_flyer() {
                        <Button
                            class="border border-red-300 text-red-700 px-6 py-2 rounded-md"
                            onclick={on_remove_flyer}
                            disabled={*is_removing}
                        >
                            if *is_removing {
                                {"Quitando..."}
                            } else {
                                {"Quitar flyer"}
                            }
                        </Button>
                    }
                    <Button
                        class="bg-black text-white px-6 py-2 rounded-md"
                        onclick={on_edit}
                    >
                        {"Editar evento"}
                    </Button>
                </div>
            </div>
        },
    };

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold">{"Administración del evento"}</h1>
            {content}
        </div>
    }
}
