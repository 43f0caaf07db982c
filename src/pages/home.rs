use yew::prelude::*;

use crate::components::footer::Footer;
use crate::sections::{
    case_studies::CaseStudies, contact::Contact, expertise::Expertise, hero::Hero, partners::Partners,
    process::Process, services::Services, technology::TechnologyStack,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <main>
                <Hero />
                <Partners />
                <Services />
                <Expertise />
                <CaseStudies />
                <Process />
                <TechnologyStack />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Page not found"}</h1>
            <a href="/">{"Back to the home page"}</a>
        </main>
    }
}
