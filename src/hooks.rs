use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config::{Trigger, MOTION};
use crate::dom::frame::FrameLoop;
use crate::dom::listener::WindowListener;
use crate::dom::scroll::{scroll_y, viewport_height, viewport_width};
use crate::dom::visibility::{VisibilityChange, VisibilityObserver};
use crate::motion::counter::{CounterAnimator, CounterTarget};
use crate::motion::quote::{QuoteAnimation, Trigger as QuoteTrigger};
use crate::motion::reveal::{RevealAction, RevealSet};
use crate::motion::scroll::{header_scrolled, is_desktop, parallax_offset};

fn mounted(nodes: &[NodeRef]) -> Vec<Option<Element>> {
    nodes.iter().map(|node| node.cast::<Element>()).collect()
}

/// Reveal-on-scroll for a fixed list of regions. Regions are registered once
/// at mount; each one reveals the first time it crosses `trigger` and is then
/// dropped from observation. Without IntersectionObserver every region is
/// revealed immediately.
#[hook]
pub fn use_reveal_group(nodes: Vec<NodeRef>, trigger: Trigger) -> UseReducerHandle<RevealSet> {
    let set = use_reducer(|| RevealSet::new(nodes.len()));
    {
        let set = set.clone();
        use_effect_with_deps(
            move |nodes: &Vec<NodeRef>| {
                let on_change = {
                    let set = set.clone();
                    move |change: VisibilityChange| {
                        if change.intersecting {
                            set.dispatch(RevealAction::Visible(change.index));
                        }
                        change.intersecting
                    }
                };
                let observer = match VisibilityObserver::observe(mounted(nodes), trigger, on_change) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        info!("{}; revealing {} regions immediately", e, nodes.len());
                        set.dispatch(RevealAction::All);
                        None
                    }
                };
                move || drop(observer)
            },
            nodes,
        );
    }
    set
}

/// Single-region form of [`use_reveal_group`].
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let set = use_reveal_group(vec![node], MOTION.reveal);
    set.is_revealed(0)
}

/// `count` fresh node refs that stay stable across renders.
#[hook]
pub fn use_node_refs(count: usize) -> Rc<Vec<NodeRef>> {
    use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect(), count)
}

/// Count-up text for a stat figure. Returns `None` until the first frame,
/// and stays `None` for an invalid target so the static markup is kept.
#[hook]
pub fn use_counter(node: NodeRef, target: Option<CounterTarget>) -> Option<String> {
    let text = use_state(|| None::<String>);
    let frames = use_mut_ref(|| None::<FrameLoop>);
    {
        let text = text.clone();
        use_effect_with_deps(
            move |(node, target): &(NodeRef, Option<CounterTarget>)| {
                let mut observer = None;
                if let Some(target) = target.clone() {
                    let start: Rc<dyn Fn()> = {
                        let frames = frames.clone();
                        Rc::new(move || {
                            if frames.borrow().is_some() {
                                return;
                            }
                            let mut animator = CounterAnimator::new(target.clone());
                            let text = text.clone();
                            match FrameLoop::start(move |now| {
                                let frame = animator.frame(now);
                                text.set(Some(frame.text));
                                !frame.done
                            }) {
                                Ok(frame_loop) => *frames.borrow_mut() = Some(frame_loop),
                                Err(e) => warn!("counter animation not started: {}", e),
                            }
                        })
                    };
                    match node.cast::<Element>() {
                        None => warn!("counter region is not mounted, skipping"),
                        Some(element) => {
                            let on_visible = start.clone();
                            let result = VisibilityObserver::observe(vec![Some(element)], MOTION.counter, move |change| {
                                if change.intersecting {
                                    on_visible();
                                }
                                change.intersecting
                            });
                            match result {
                                Ok(o) => observer = Some(o),
                                Err(e) => {
                                    info!("{}; animating counter immediately", e);
                                    start();
                                }
                            }
                        }
                    }
                }
                let frames = frames.clone();
                move || {
                    drop(observer);
                    frames.borrow_mut().take();
                }
            },
            (node, target),
        );
    }
    (*text).clone()
}

/// Staged quote reveal. Tokens become available a short settle delay after
/// the container is mostly visible, or after a fixed fallback delay when
/// visibility cannot be observed.
#[hook]
pub fn use_quote(node: NodeRef, source: AttrValue) -> UseReducerHandle<QuoteAnimation> {
    let quote = {
        let source = source.clone();
        use_reducer(move || QuoteAnimation::new(source.to_string()))
    };
    let pending = use_mut_ref(|| None::<Timeout>);
    {
        let quote = quote.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let schedule: Rc<dyn Fn(u32)> = {
                    let pending = pending.clone();
                    Rc::new(move |delay_ms| {
                        let quote = quote.clone();
                        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || quote.dispatch(QuoteTrigger)));
                    })
                };
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let on_visible = schedule.clone();
                        VisibilityObserver::observe(vec![Some(element)], MOTION.quote, move |change| {
                            if change.intersecting {
                                on_visible(MOTION.quote_settle_ms);
                            }
                            change.intersecting
                        })
                        .map_err(|e| info!("{}; quote falls back to a timed reveal", e))
                        .ok()
                    }
                    None => {
                        warn!("quote container is not mounted, using timed reveal");
                        None
                    }
                };
                if observer.is_none() {
                    schedule(MOTION.quote_fallback_ms);
                }
                let pending = pending.clone();
                move || {
                    drop(observer);
                    pending.borrow_mut().take();
                }
            },
            node,
        );
    }
    quote
}

/// Shifts the background of a dark section while it is on screen. Only
/// applies on desktop widths.
#[hook]
pub fn use_parallax(node: NodeRef) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let node = node.clone();
            let listener = WindowListener::new("scroll", move || {
                if !is_desktop(viewport_width()) {
                    return;
                }
                let Some(section) = node.cast::<HtmlElement>() else {
                    return;
                };
                let offset = parallax_offset(
                    scroll_y(),
                    viewport_height(),
                    section.offset_top() as f64,
                    section.offset_height() as f64,
                );
                if let Some(offset) = offset {
                    let _ = section
                        .style()
                        .set_property("background-position-y", &format!("{}px", offset));
                }
            })
            .map_err(|e| warn!("parallax disabled: {}", e))
            .ok();
            move || drop(listener)
        },
        node,
    );
}

/// Whether the page has scrolled far enough for the compact header style.
#[hook]
pub fn use_header_scrolled() -> bool {
    let scrolled = use_state_eq(|| header_scrolled(scroll_y()));
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move || scrolled.set(header_scrolled(scroll_y())))
                    .map_err(|e| warn!("header scroll tracking disabled: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }
    *scrolled
}
