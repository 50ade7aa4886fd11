use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, utils::is_dev_mode};

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-3">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900">
                            {"Eventos"}
                        </Link<Route>>
                        if is_dev_mode() {
                            <span class="text-xs px-2 py-0.5 rounded bg-yellow-100 text-yellow-800">
                                {"dev"}
                            </span>
                        }
                    </div>
                    <nav class="flex items-center space-x-4 text-sm">
                        <Link<Route> to={Route::Home} classes="text-gray-600 hover:text-black">
                            {"Inicio"}
                        </Link<Route>>
                        <Link<Route> to={Route::Admin} classes="text-gray-600 hover:text-black">
                            {"Administración"}
                        </Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
