use yew::prelude::*;

use crate::hooks::use_quote;
use crate::motion::quote::QuoteToken;

#[derive(Properties, PartialEq)]
pub struct AnimatedQuoteProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub author: Option<AttrValue>,
}

fn word(text: &str, delay_secs: f64) -> Html {
    let style = format!(
        "opacity: 0; display: inline-block; transform: translateY(10px); animation: fadeInWord 0.4s ease {:.2}s forwards;",
        delay_secs
    );
    html! { <span {style}>{ text.to_string() }</span> }
}

#[function_component(AnimatedQuote)]
pub fn animated_quote(props: &AnimatedQuoteProps) -> Html {
    let node = use_node_ref();
    let quote = use_quote(node.clone(), props.text.clone());

    let body = match quote.tokens() {
        Some(tokens) => tokens
            .iter()
            .map(|token| match token {
                QuoteToken::Word { text, delay_secs } => word(text, *delay_secs),
                QuoteToken::Space(space) => html! { { space.clone() } },
            })
            .collect::<Html>(),
        None => html! { { quote.source().to_string() } },
    };

    html! {
        <blockquote ref={node} class="quote-container">
            <p class={classes!("quote-text", quote.has_animated().then_some("quote-animated"))}>
                { body }
            </p>
            {
                if let Some(author) = &props.author {
                    html! { <footer class="quote-author">{ author }</footer> }
                } else {
                    html! {}
                }
            }
        </blockquote>
    }
}
