use log::info;
use web_sys::Element;
use yew::prelude::*;

use crate::config::MOTION;
use crate::dom::visibility::VisibilityObserver;
use crate::motion::lazy::LazyImage as LoadState;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An `<img>` that only receives its `src` shortly before it scrolls into
/// view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let state = use_state(|| LoadState::Pending);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let approach = {
                    let state = state.clone();
                    move || {
                        let mut next = *state;
                        if next.approach() {
                            state.set(next);
                        }
                    }
                };
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let on_near = approach.clone();
                        VisibilityObserver::observe(vec![Some(element)], MOTION.lazy_image, move |change| {
                            if change.intersecting {
                                on_near();
                            }
                            change.intersecting
                        })
                        .map_err(|e| info!("{}; loading image eagerly", e))
                        .ok()
                    }
                    None => None,
                };
                if observer.is_none() {
                    approach();
                }
                move || drop(observer)
            },
            node.clone(),
        );
    }

    let onload = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            let mut next = *state;
            next.loaded();
            state.set(next);
        })
    };

    let src = state.has_src().then(|| props.src.clone());

    html! {
        <img
            ref={node}
            {src}
            alt={props.alt.clone()}
            loading="lazy"
            class={classes!(state.class(), props.class.clone())}
            style={format!("opacity: {}; transition: opacity 0.5s ease;", state.opacity())}
            {onload}
        />
    }
}
