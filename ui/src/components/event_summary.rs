use payloads::Event;
use yew::prelude::*;

use crate::utils::time::{format_event_date, format_last_updated};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub event: Event,
    /// Show when the event was last edited.
    #[prop_or_default]
    pub show_last_updated: bool,
}

/// Read-only view of the event, shared by the public and admin pages.
#[function_component]
pub fn EventSummary(props: &Props) -> Html {
    let event = &props.event;

    html! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden">
            if event.has_flyer() {
                <img
                    src={event.image_url.clone()}
                    alt={format!("Flyer de {}", event.title)}
                    class="w-full max-h-96 object-contain bg-gray-100"
                />
            }
            <div class="p-6 space-y-2">
                <h2 class="text-2xl font-bold">{&event.title}</h2>
                <p class="text-gray-700">
                    {format!("{} · {}", format_event_date(&event.date), event.time)}
                </p>
                if !event.location.is_empty() {
                    <p class="text-gray-700">
                        if event.map_url.is_empty() {
                            {&event.location}
                        } else {
                            <a
                                href={event.map_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="underline hover:text-black"
                            >
                                {&event.location}
                            </a>
                        }
                    </p>
                }
                if !event.description.is_empty() {
                    <p class="text-gray-600 whitespace-pre-line">
                        {&event.description}
                    </p>
                }
                if props.show_last_updated {
                    if let Some(last_updated) = event.last_updated {
                        <p class="text-xs text-gray-500 pt-2">
                            {format!("Última actualización: {}", format_last_updated(last_updated))}
                        </p>
                    }
                }
            </div>
        </div>
    }
}
