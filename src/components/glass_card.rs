use stylist::yew::styled_component;
use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(true)]
    pub interactive: bool,
    /// Entrance delay in seconds once the card is revealed.
    #[prop_or_default]
    pub delay: f64,
    pub children: Children,
}

#[styled_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    let base = css!(
        r#"
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.08);
        backdrop-filter: blur(12px);
        border-radius: 0.75rem;
        padding: 1.5rem;
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.5s cubic-bezier(0.22, 1, 0.36, 1),
                    transform 0.5s cubic-bezier(0.22, 1, 0.36, 1),
                    box-shadow 0.3s ease;

        &.revealed {
            opacity: 1;
            transform: translateY(0);
        }
        &.interactive {
            cursor: pointer;
        }
        &.interactive.revealed:hover {
            transform: translateY(-10px);
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3), 0 0 20px rgba(255, 69, 0, 0.2);
        }
    "#
    );

    html! {
        <div
            ref={node}
            class={classes!(
                base,
                "glass-card",
                revealed.then_some("revealed"),
                props.interactive.then_some("interactive"),
                props.class.clone()
            )}
            style={format!("transition-delay: {}s;", props.delay)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
