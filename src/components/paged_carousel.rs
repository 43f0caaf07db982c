use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::MOTION;
use crate::dom::listener::{Debounce, WindowListener};
use crate::motion::paged::PagedCarousel as Pager;

#[derive(Properties, PartialEq)]
pub struct PagedCarouselProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

pub enum Msg {
    Prev,
    Next,
    GoTo(usize),
    Measure,
}

/// Horizontal carousel that pages through as many whole items as fit in
/// its viewport, with prev/next controls and one dot per item.
pub struct PagedCarousel {
    pager: Pager,
    item_width: f64,
    viewport: NodeRef,
    debounce: Rc<RefCell<Debounce>>,
    resize: Option<WindowListener>,
}

impl PagedCarousel {
    fn measure(&self) -> Option<(f64, f64)> {
        let viewport = self.viewport.cast::<Element>()?;
        let item = viewport.first_element_child()?.first_element_child()?;
        Some((viewport.client_width() as f64, item.get_bounding_client_rect().width()))
    }
}

impl Component for PagedCarousel {
    type Message = Msg;
    type Properties = PagedCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let debounce = Rc::new(RefCell::new(Debounce::new(MOTION.resize_debounce_ms)));
        let resize = {
            let link = ctx.link().clone();
            let debounce = debounce.clone();
            WindowListener::new("resize", move || {
                let link = link.clone();
                debounce.borrow_mut().call(move || link.send_message(Msg::Measure));
            })
            .map_err(|e| warn!("carousel will not track resizes: {}", e))
            .ok()
        };

        Self {
            pager: Pager::new(ctx.props().children.len()),
            item_width: 0.0,
            viewport: NodeRef::default(),
            debounce,
            resize,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.pager.clone();
        match msg {
            Msg::Prev => self.pager.prev(),
            Msg::Next => self.pager.next(),
            Msg::GoTo(index) => self.pager.go_to(index),
            Msg::Measure => match self.measure() {
                Some((container, item)) => {
                    self.item_width = item;
                    self.pager.resize(container, item);
                    return true;
                }
                None => warn!("carousel viewport not measurable"),
            },
        }
        self.pager != before
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if ctx.props().children.len() != self.pager.total() {
            self.pager = Pager::new(ctx.props().children.len());
            ctx.link().send_message(Msg::Measure);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Measure);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.debounce.borrow_mut().cancel();
        self.resize = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let offset = self.pager.offset_px(self.item_width);

        html! {
            <div
                class={classes!("paged-carousel", ctx.props().class.clone())}
                aria-label={format!("Showing {} of {} items", self.pager.in_view().min(self.pager.total()), self.pager.total())}
            >
                <div class="paged-viewport" ref={self.viewport.clone()} style="overflow: hidden;">
                    <div
                        class="paged-track"
                        style={format!("display: flex; transform: translateX({}px); transition: transform 0.5s ease;", offset)}
                    >
                        { for ctx.props().children.iter().map(|child| html! { <div class="paged-item">{ child }</div> }) }
                    </div>
                </div>
                <div class="paged-controls">
                    <button
                        class="paged-prev"
                        aria-label="Previous"
                        disabled={!self.pager.can_prev()}
                        onclick={link.callback(|_| Msg::Prev)}
                    >
                        {"‹"}
                    </button>
                    <div class="paged-dots">
                        {
                            self.pager.dots().into_iter().map(|dot| html! {
                                <button
                                    key={dot.index}
                                    class={classes!("paged-dot", dot.active.then_some("active"))}
                                    aria-label={format!("Go to item {}", dot.index + 1)}
                                    onclick={link.callback(move |_| Msg::GoTo(dot.index))}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                    <button
                        class="paged-next"
                        aria-label="Next"
                        disabled={!self.pager.can_next()}
                        onclick={link.callback(|_| Msg::Next)}
                    >
                        {"›"}
                    </button>
                </div>
            </div>
        }
    }
}
