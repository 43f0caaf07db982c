use yew::prelude::*;

use crate::hooks::use_counter;
use crate::motion::counter::CounterTarget;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Raw target as authored. Non-numeric targets are shown verbatim and
    /// never animated.
    pub target: AttrValue,
    #[prop_or_default]
    pub duration_ms: Option<f64>,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let target = CounterTarget::from_attrs(&props.target, props.duration_ms, &props.suffix);
    let initial = match &target {
        Some(_) => format!("0{}", props.suffix),
        None => props.target.to_string(),
    };
    let text = use_counter(node.clone(), target).unwrap_or(initial);

    html! {
        <div class="stat">
            <span ref={node} class="stat-counter">{ text }</span>
            {
                if let Some(label) = &props.label {
                    html! { <span class="stat-label">{ label }</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
