use jiff::Timestamp;
use payloads::EventField;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    Route,
    components::{Button, Input},
    contexts::use_toast,
    event_form::{
        EventFormState, EventStore, FormAction, SelectedFile, SubmitOutcome,
        submit,
    },
    file_data::read_as_data_url,
    hooks::{EventHandle, use_push_route},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The stored event, read once at mount, and where the update goes.
    pub events: EventHandle,
}

/// Create or edit form for the event.
///
/// The draft is seeded from `events` when the form mounts and is not
/// refreshed afterwards. Saving or cancelling returns to the admin page.
#[function_component]
pub fn EventForm(props: &Props) -> Html {
    let push_route = use_push_route();
    let toasts = use_toast();
    let file_input_ref = use_node_ref();

    let form = {
        let current = props.events.current_event();
        use_reducer(move || EventFormState::new(current.as_ref()))
    };

    // Async work checks this before touching the form after an await
    let mounted = use_mut_ref(|| true);
    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || *mounted.borrow_mut() = false
        });
    }
    let selections = use_mut_ref(|| 0u64);

    let on_field_change = {
        let form = form.clone();
        Callback::from(move |(name, value): (String, String)| {
            match EventField::from_name(&name) {
                Some(field) => {
                    form.dispatch(FormAction::FieldChanged(field, value))
                }
                None => {
                    tracing::warn!(name = %name, "Edit for unknown event field")
                }
            }
        })
    };

    let on_description_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::FieldChanged(
                EventField::Description,
                textarea.value(),
            ));
        })
    };

    let on_image_selected = {
        let form = form.clone();
        let mounted = mounted.clone();
        let selections = selections.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0))
            else {
                return;
            };

            let generation = {
                let mut selections = selections.borrow_mut();
                *selections += 1;
                *selections
            };
            let selected = SelectedFile::from_file(&file);
            tracing::debug!(
                name = %selected.name,
                mime_type = %selected.mime_type,
                size = selected.size,
                "Flyer selected"
            );
            form.dispatch(FormAction::ImageSelected {
                file: selected,
                generation,
            });

            let form = form.clone();
            let mounted = mounted.clone();
            yew::platform::spawn_local(async move {
                let result = read_as_data_url(file).await;
                if !*mounted.borrow() {
                    return;
                }
                match result {
                    Ok(data_url) => form.dispatch(FormAction::ImageDecoded {
                        generation,
                        data_url,
                    }),
                    Err(error) => {
                        tracing::warn!(%error, "Could not read selected flyer");
                        form.dispatch(FormAction::ImageDecodeFailed {
                            generation,
                        });
                    }
                }
            });
        })
    };

    let on_choose_image = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_image_cleared = {
        let form = form.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(FormAction::ImageCleared);
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let events = props.events.clone();
        let mounted = mounted.clone();
        let push_route = push_route.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let state = (*form).clone();
            let events = events.clone();
            let form = form.clone();
            let mounted = mounted.clone();
            let push_route = push_route.clone();
            let toasts = toasts.clone();

            yew::platform::spawn_local(async move {
                let dispatch = {
                    let mounted = mounted.clone();
                    move |action| {
                        if *mounted.borrow() {
                            form.dispatch(action);
                        }
                    }
                };

                let outcome =
                    submit(&state, &events, Timestamp::now(), dispatch).await;

                if outcome == SubmitOutcome::Saved && *mounted.borrow() {
                    toasts.success("Evento guardado");
                    push_route.emit(Route::Admin);
                }
            });
        })
    };

    let on_cancel = {
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| push_route.emit(Route::Admin))
    };

    let draft = &form.draft;
    let heading = if form.is_editing() {
        "Editar Evento"
    } else {
        "Crear Nuevo Evento"
    };

    html! {
        <div class="max-w-2xl mx-auto bg-white rounded-lg shadow-md p-6">
            <h1 class="text-2xl font-bold mb-6">{heading}</h1>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &form.error {
                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded">
                        {error}
                    </div>
                }

                <div class="space-y-4">
                    <Input
                        label="Título del evento *"
                        id="title"
                        name="title"
                        value={draft.title.clone()}
                        onchange={on_field_change.clone()}
                        required=true
                    />

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <Input
                            label="Fecha *"
                            id="date"
                            name="date"
                            kind="date"
                            value={draft.date.clone()}
                            onchange={on_field_change.clone()}
                            required=true
                        />
                        <Input
                            label="Hora *"
                            id="time"
                            name="time"
                            value={draft.time.clone()}
                            onchange={on_field_change.clone()}
                            placeholder="Ej: 19:00"
                            required=true
                        />
                    </div>

                    <Input
                        label="Ubicación"
                        id="location"
                        name="location"
                        value={draft.location.clone()}
                        onchange={on_field_change.clone()}
                    />

                    <Input
                        label="URL del mapa (Google Maps)"
                        id="map_url"
                        name="map_url"
                        value={draft.map_url.clone()}
                        onchange={on_field_change}
                        placeholder="https://maps.google.com/..."
                    />

                    <div>
                        <label for="description" class="block text-sm font-medium text-gray-700 mb-1">
                            {"Descripción del evento"}
                        </label>
                        <textarea
                            id="description"
                            name="description"
                            rows="4"
                            class="mt-1 block w-full px-3 py-2 bg-white border border-gray-300
                                   rounded-md shadow-sm
                                   focus:outline-none focus:ring-black focus:border-black"
                            value={draft.description.clone()}
                            oninput={on_description_input}
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">
                            {"Flyer del evento"}
                        </label>

                        <div class="mt-1 flex items-center">
                            <Button
                                class="bg-white border border-gray-300 px-4 py-2 rounded-md hover:bg-gray-50"
                                onclick={on_choose_image}
                            >
                                {"Cambiar imagen"}
                            </Button>
                            <input
                                ref={file_input_ref}
                                type="file"
                                class="hidden"
                                accept="image/*"
                                onchange={on_image_selected}
                            />
                        </div>

                        if !form.image.preview.is_empty() {
                            <div class="mt-4 relative">
                                <img
                                    src={form.image.preview.clone()}
                                    alt="Vista previa"
                                    class="max-w-full h-auto max-h-64 rounded-md"
                                />
                                <button
                                    type="button"
                                    title="Quitar imagen"
                                    class="absolute top-2 right-2 bg-red-500 text-white
                                           w-7 h-7 rounded-full leading-none"
                                    onclick={on_image_cleared}
                                >
                                    {"×"}
                                </button>
                            </div>
                        }
                    </div>
                </div>

                <div class="flex justify-end space-x-4 pt-4">
                    <Button
                        class="border border-gray-300 px-6 py-2 rounded-md"
                        onclick={on_cancel}
                    >
                        {"Cancelar"}
                    </Button>
                    <Button
                        kind="submit"
                        class="bg-black text-white px-6 py-2 rounded-md"
                        disabled={form.is_submitting}
                    >
                        if form.is_submitting {
                            {"Guardando..."}
                        } else {
                            {"Guardar evento"}
                        }
                    </Button>
                </div>
            </form>
        </div>
    }
}
