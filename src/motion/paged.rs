#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// How many whole items fit in the container. Never less than one so that a
/// collapsed or unmeasured container still pages item by item.
pub fn items_in_view(container_width: f64, item_width: f64) -> usize {
    if !container_width.is_finite() || !item_width.is_finite() || item_width <= 0.0 {
        return 1;
    }
    ((container_width / item_width).floor() as usize).max(1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedCarousel {
    total: usize,
    in_view: usize,
    index: usize,
}

impl PagedCarousel {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            in_view: 1,
            index: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn in_view(&self) -> usize {
        self.in_view
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.in_view)
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    /// Re-measures after a resize and pulls the index back into range.
    pub fn resize(&mut self, container_width: f64, item_width: f64) {
        self.in_view = items_in_view(container_width, item_width);
        self.index = self.index.min(self.max_index());
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.max_index());
    }

    pub fn dots(&self) -> Vec<Dot> {
        (0..self.total)
            .map(|index| Dot {
                index,
                active: index == self.index,
            })
            .collect()
    }

    pub fn offset_px(&self, item_width: f64) -> f64 {
        -(self.index as f64) * item_width.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_in_view_floors_and_floors_at_one() {
        assert_eq!(items_in_view(1000.0, 300.0), 3);
        assert_eq!(items_in_view(899.0, 300.0), 2);
        assert_eq!(items_in_view(100.0, 300.0), 1);
        assert_eq!(items_in_view(1000.0, 0.0), 1);
        assert_eq!(items_in_view(f64::NAN, 300.0), 1);
    }

    #[test]
    fn index_is_clamped_to_last_page() {
        let mut c = PagedCarousel::new(6);
        c.resize(900.0, 300.0);
        assert_eq!(c.max_index(), 3);
        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.index(), 3);
        assert!(!c.can_next());
        c.go_to(5);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn prev_stops_at_zero() {
        let mut c = PagedCarousel::new(4);
        c.prev();
        assert_eq!(c.index(), 0);
        c.next();
        c.prev();
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn resize_reclamps_index() {
        let mut c = PagedCarousel::new(5);
        c.resize(300.0, 300.0);
        c.go_to(4);
        assert_eq!(c.index(), 4);
        c.resize(1200.0, 300.0);
        assert_eq!(c.in_view(), 4);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn more_room_than_items() {
        let mut c = PagedCarousel::new(2);
        c.resize(2000.0, 300.0);
        assert_eq!(c.max_index(), 0);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn one_dot_per_item_with_single_active() {
        let mut c = PagedCarousel::new(5);
        c.go_to(2);
        let dots = c.dots();
        assert_eq!(dots.len(), 5);
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
        assert!(dots[2].active);
    }

    #[test]
    fn offset_follows_index() {
        let mut c = PagedCarousel::new(5);
        assert_eq!(c.offset_px(320.0), 0.0);
        c.next();
        c.next();
        assert_eq!(c.offset_px(320.0), -640.0);
    }
}
