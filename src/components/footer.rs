use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::dom::scroll::follow_in_page_link;

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#case-studies", "Results"),
    ("#contact", "Contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    let on_link = Callback::from(|e: MouseEvent| {
        follow_in_page_link(&e);
    });

    html! {
        <footer class="site-footer">
            <div class="footer-content" onclick={on_link}>
                <a href="#" class="footer-logo">{"NOVASTRA"}</a>
                <p>{"Sports innovation consultancy. Strategy, technology and fan engagement for the organizations shaping the future of sport."}</p>
                <nav class="footer-links">
                    {
                        FOOTER_LINKS.iter().map(|&(href, label)| html! {
                            <a {href}>{label}</a>
                        }).collect::<Html>()
                    }
                </nav>
            </div>
            <p class="footer-legal">{format!("© {} Novastra. All rights reserved.", year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll::is_in_page;

    #[test]
    fn footer_links_stay_on_the_page() {
        assert!(FOOTER_LINKS.iter().all(|&(href, _)| is_in_page(href)));
    }
}
