use std::rc::Rc;
use yew::Reducible;

pub const WORD_STAGGER_SECS: f64 = 0.12;

#[derive(Clone, Debug, PartialEq)]
pub enum QuoteToken {
    Word { text: String, delay_secs: f64 },
    Space(String),
}

/// Splits `source` into alternating runs of non-whitespace and whitespace.
/// Concatenating the token texts gives back the source unchanged.
pub fn tokenize(source: &str) -> Vec<(bool, &str)> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;
    for (pos, ch) in source.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push((prev, &source[start..pos]));
                start = pos;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(space) = in_space {
        tokens.push((space, &source[start..]));
    }
    tokens
}

pub fn stage(source: &str) -> Vec<QuoteToken> {
    let mut word_index = 0usize;
    tokenize(source)
        .into_iter()
        .map(|(space, text)| {
            if space {
                QuoteToken::Space(text.to_string())
            } else {
                let delay_secs = word_index as f64 * WORD_STAGGER_SECS;
                word_index += 1;
                QuoteToken::Word {
                    text: text.to_string(),
                    delay_secs,
                }
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuoteAnimation {
    source: String,
    staged: Option<Vec<QuoteToken>>,
}

impl QuoteAnimation {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            staged: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_animated(&self) -> bool {
        self.staged.is_some()
    }

    pub fn tokens(&self) -> Option<&[QuoteToken]> {
        self.staged.as_deref()
    }

    /// Stages the quote. Returns false, leaving state untouched, if it was
    /// already staged.
    pub fn trigger(&mut self) -> bool {
        if self.staged.is_some() {
            return false;
        }
        self.staged = Some(stage(&self.source));
        true
    }
}

pub struct Trigger;

impl Reducible for QuoteAnimation {
    type Action = Trigger;

    fn reduce(self: Rc<Self>, _: Trigger) -> Rc<Self> {
        if self.has_animated() {
            return self;
        }
        let mut next = (*self).clone();
        next.trigger();
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_whitespace_runs() {
        let tokens = tokenize("In sport,  margins\tmatter");
        assert_eq!(
            tokens,
            vec![
                (false, "In"),
                (true, " "),
                (false, "sport,"),
                (true, "  "),
                (false, "margins"),
                (true, "\t"),
                (false, "matter"),
            ]
        );
    }

    #[test]
    fn tokenize_round_trips_edges() {
        for source in ["", " ", "word", "  lead", "trail  ", " a b  c "] {
            let joined: String = tokenize(source).iter().map(|(_, t)| *t).collect();
            assert_eq!(joined, source);
        }
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn words_get_strictly_increasing_delays() {
        let staged = stage("Data wins championships today");
        let delays: Vec<f64> = staged
            .iter()
            .filter_map(|t| match t {
                QuoteToken::Word { delay_secs, .. } => Some(*delay_secs),
                QuoteToken::Space(_) => None,
            })
            .collect();
        assert_eq!(delays.len(), 4);
        for (i, d) in delays.iter().enumerate() {
            assert!((d - i as f64 * 0.12).abs() < 1e-9);
        }
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn leading_space_does_not_consume_a_delay_slot() {
        let staged = stage(" first second");
        assert_eq!(staged[0], QuoteToken::Space(" ".into()));
        assert_eq!(
            staged[1],
            QuoteToken::Word {
                text: "first".into(),
                delay_secs: 0.0
            }
        );
    }

    #[test]
    fn second_trigger_is_a_noop() {
        let mut quote = QuoteAnimation::new("Win the moment");
        assert!(!quote.has_animated());
        assert!(quote.trigger());
        let snapshot = quote.clone();
        assert!(!quote.trigger());
        assert_eq!(quote, snapshot);
        assert_eq!(quote.tokens().map(|t| t.len()), Some(5));
    }

    #[test]
    fn reducer_trigger_is_idempotent() {
        let quote = Rc::new(QuoteAnimation::new("Every second counts"));
        let animated = quote.reduce(Trigger);
        assert!(animated.has_animated());
        let again = animated.clone().reduce(Trigger);
        assert!(Rc::ptr_eq(&animated, &again));
    }
}
