use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Clone, Copy, PartialEq)]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(Alignment::Center)]
    pub alignment: Alignment,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let align = match props.alignment {
        Alignment::Left => "text-left",
        Alignment::Center => "text-center mx-auto",
    };

    html! {
        <div class={classes!("section-heading", align)}>
            <Reveal>
                <h2 class="text-gradient">{ &props.title }</h2>
            </Reveal>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <Reveal delay={0.1}>
                            <p class="section-subtitle">{ subtitle }</p>
                        </Reveal>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
