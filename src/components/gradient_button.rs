use yew::prelude::*;

use crate::dom::scroll::{scroll_to_anchor, site_header};

#[derive(Clone, Copy, PartialEq)]
pub enum Variant {
    Primary,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct GradientButtonProps {
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(Variant::Primary)]
    pub variant: Variant,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    pub children: Children,
}

#[function_component(GradientButton)]
pub fn gradient_button(props: &GradientButtonProps) -> Html {
    let class = classes!(
        "gradient-button",
        match props.variant {
            Variant::Primary => "primary",
            Variant::Outline => "outline",
        },
        props.disabled.then_some("disabled")
    );

    match &props.href {
        Some(href) => {
            let onclick = {
                let href = href.clone();
                Callback::from(move |e: MouseEvent| {
                    if scroll_to_anchor(&href, site_header().as_ref()) {
                        e.prevent_default();
                    }
                })
            };
            html! {
                <a href={href.clone()} {class} {onclick}>
                    { for props.children.iter() }
                </a>
            }
        }
        None => html! {
            <button
                type={props.kind.clone()}
                {class}
                disabled={props.disabled}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </button>
        },
    }
}
