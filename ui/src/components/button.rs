use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The `type` attribute: "button", "submit" or "reset".
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Button(props: &Props) -> Html {
    html! {
        <button
            type={props.kind.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            class={classes!(
                "text-sm", "font-medium", "transition-colors", "duration-200",
                "focus:outline-none", "focus:ring-2", "focus:ring-offset-2",
                "focus:ring-gray-500",
                "disabled:opacity-50", "disabled:cursor-not-allowed",
                props.class.clone()
            )}
        >
            {props.children.clone()}
        </button>
    }
}
