#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyImage {
    Pending,
    Loading,
    Loaded,
}

impl LazyImage {
    pub fn approach(&mut self) -> bool {
        if *self == LazyImage::Pending {
            *self = LazyImage::Loading;
            true
        } else {
            false
        }
    }

    pub fn loaded(&mut self) {
        if *self != LazyImage::Pending {
            *self = LazyImage::Loaded;
        }
    }

    pub fn has_src(&self) -> bool {
        *self != LazyImage::Pending
    }

    pub fn class(&self) -> &'static str {
        match self {
            LazyImage::Loaded => "loaded-image",
            _ => "lazy-image",
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            LazyImage::Loaded => "1",
            _ => "0.1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approaches_once_then_loads() {
        let mut img = LazyImage::Pending;
        assert!(!img.has_src());
        assert_eq!(img.class(), "lazy-image");
        assert!(img.approach());
        assert!(!img.approach());
        assert!(img.has_src());
        img.loaded();
        assert_eq!(img, LazyImage::Loaded);
        assert_eq!(img.class(), "loaded-image");
        assert_eq!(img.opacity(), "1");
    }

    #[test]
    fn load_before_src_is_ignored() {
        let mut img = LazyImage::Pending;
        img.loaded();
        assert_eq!(img, LazyImage::Pending);
    }
}
