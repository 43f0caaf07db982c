use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::paged_carousel::PagedCarousel;
use crate::components::section_heading::SectionHeading;
use crate::data::technologies::{Technology, TECH_CATEGORIES};
use crate::hooks::use_parallax;

fn tech_card(tech: &Technology) -> Html {
    html! {
        <div class="tech-card">
            <LazyImage src={tech.icon_url} alt={tech.name} class="tech-icon" />
            <h4>{tech.name}</h4>
            <span class={classes!("tech-level", tech.level.label().to_lowercase().replace(' ', "-"))}>
                {tech.level.label()}
            </span>
            <p>{tech.description}</p>
            <ul>
                { for tech.use_cases.iter().map(|case| html! { <li>{*case}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(TechnologyStack)]
pub fn technology_stack() -> Html {
    let section = use_node_ref();
    use_parallax(section.clone());
    let active = use_state(|| 0usize);
    let category = TECH_CATEGORIES.get(*active).or(TECH_CATEGORIES.first());

    let tabs = TECH_CATEGORIES.iter().enumerate().map(|(i, c)| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(i))
        };
        html! {
            <button class={classes!("tech-tab", (*active == i).then_some("active"))} {onclick}>
                {c.name}
            </button>
        }
    });

    html! {
        <section id="technology" class="technology dark-section" ref={section}>
            <SectionHeading title="Technology" subtitle="The platforms we build with" />
            <div class="tech-tabs">{ for tabs }</div>
            if let Some(category) = category {
                <>
                    <p class="tech-category-description">{category.description}</p>
                    <PagedCarousel key={category.name} class="tech-carousel">
                        { for category.technologies.iter().map(tech_card) }
                    </PagedCarousel>
                </>
            }
        </section>
    }
}
