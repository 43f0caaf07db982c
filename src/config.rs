
/// Form-processing endpoint the contact form posts to. Can be overridden at
/// build time with `NOVASTRA_FORM_ENDPOINT`.
#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    option_env!("NOVASTRA_FORM_ENDPOINT").unwrap_or("http://localhost:3001/contact")
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    option_env!("NOVASTRA_FORM_ENDPOINT").unwrap_or("https://formspree.io/f/novastra-contact")
}

/// Visibility trigger settings for one kind of animated region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub reveal: Trigger,
    pub counter: Trigger,
    pub quote: Trigger,
    pub lazy_image: Trigger,
    pub carousel_interval_ms: u32,
    pub quote_settle_ms: u32,
    pub quote_fallback_ms: u32,
    pub resize_debounce_ms: u32,
}

pub const MOTION: MotionConfig = MotionConfig {
    reveal: Trigger {
        threshold: 0.1,
        root_margin: "0px 0px -30px 0px",
    },
    counter: Trigger {
        threshold: 0.5,
        root_margin: "0px",
    },
    quote: Trigger {
        threshold: 0.6,
        root_margin: "0px",
    },
    lazy_image: Trigger {
        threshold: 0.0,
        root_margin: "0px 0px 200px 0px",
    },
    carousel_interval_ms: 2000,
    quote_settle_ms: 200,
    quote_fallback_ms: 1000,
    resize_debounce_ms: 250,
};
