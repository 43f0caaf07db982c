use log::{info, Level};
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod hooks;
mod motion;
mod dom;
mod components {
    pub mod animated_quote;
    pub mod case_study_chart;
    pub mod footer;
    pub mod glass_card;
    pub mod gradient_button;
    pub mod lazy_image;
    pub mod paged_carousel;
    pub mod reveal;
    pub mod section_heading;
    pub mod sports_carousel;
    pub mod stat_counter;
}
mod sections {
    pub mod case_studies;
    pub mod contact;
    pub mod expertise;
    pub mod hero;
    pub mod partners;
    pub mod process;
    pub mod services;
    pub mod technology;
}
mod data {
    pub mod case_studies;
    pub mod expertise;
    pub mod process;
    pub mod properties;
    pub mod services;
    pub mod technologies;
}
mod pages {
    pub mod home;
}

use config::MOTION;
use dom::listener::Debounce;
use dom::scroll::{clicked_href, scroll_to_anchor, viewport_width, SITE_HEADER_ID};
use hooks::use_header_scrolled;
use motion::scroll::{MenuAction, MobileMenu};
use pages::home::{Home, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#expertise", "Expertise"),
    ("#case-studies", "Results"),
    ("#process", "Process"),
    ("#technology", "Technology"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MobileMenu::default);
    let is_scrolled = use_header_scrolled();
    let header = use_node_ref();
    let resize = use_mut_ref(|| Debounce::new(MOTION.resize_debounce_ms));

    {
        let menu = menu.clone();
        use_event_with_window("resize", move |_: Event| {
            let menu = menu.dispatcher();
            resize
                .borrow_mut()
                .call(move || menu.dispatch(MenuAction::Resized(viewport_width())));
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Anchor clicks anywhere in the header scroll smoothly and close the menu.
    let on_link = {
        let menu = menu.clone();
        let header = header.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(href) = clicked_href(e.target()) else {
                return;
            };
            if scroll_to_anchor(&href, header.cast::<HtmlElement>().as_ref()) {
                e.prevent_default();
            }
            menu.dispatch(MenuAction::Close);
        })
    };

    let menu_class = classes!("nav-right", menu.is_open().then_some("mobile-menu-open"));

    html! {
        <header id={SITE_HEADER_ID} ref={header} class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={on_link.clone()}>{"NOVASTRA"}</a>
                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu.aria_expanded()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class} onclick={on_link}>
                    {
                        NAV_LINKS.iter().map(|&(href, label)| html! {
                            <a {href} class="nav-link">{label}</a>
                        }).collect::<Html>()
                    }
                    <a href="#contact" class="nav-cta">{"Get in touch"}</a>
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
