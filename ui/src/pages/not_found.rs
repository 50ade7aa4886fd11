use yew::prelude::*;

use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Página no encontrada");

    html! {
        <div class="text-center">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-600">{"Página no encontrada"}</p>
        </div>
    }
}
