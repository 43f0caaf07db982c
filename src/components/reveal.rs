use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

/// Wraps its children in a region that gains the `revealed` class the first
/// time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    let style = (props.delay > 0.0).then(|| format!("transition-delay: {}s;", props.delay));

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal-on-scroll", revealed.then_some("revealed"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
