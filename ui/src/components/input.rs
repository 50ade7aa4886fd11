use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub id: AttrValue,
    pub name: AttrValue,
    /// The `type` attribute of the underlying input.
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Emits `(name, value)` on every edit.
    pub onchange: Callback<(String, String)>,
}

/// A labelled text-like input.
#[function_component]
pub fn Input(props: &Props) -> Html {
    let oninput = {
        let name = props.name.to_string();
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit((name.clone(), input.value()));
        })
    };

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-gray-700 mb-1">
                {props.label.clone()}
            </label>
            <input
                id={props.id.clone()}
                name={props.name.clone()}
                type={props.kind.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                disabled={props.disabled}
                {oninput}
                class="mt-1 block w-full px-3 py-2 bg-white border border-gray-300
                       rounded-md shadow-sm
                       focus:outline-none focus:ring-black focus:border-black
                       disabled:opacity-50"
            />
        </div>
    }
}
