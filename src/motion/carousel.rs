#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselMode {
    Idle(usize),
    UserOverride(usize),
}

#[derive(Debug)]
pub struct AutoCarousel<H> {
    len: usize,
    mode: CarouselMode,
    timer: Option<H>,
}

impl<H> AutoCarousel<H> {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then(|| Self {
            len,
            mode: CarouselMode::Idle(0),
            timer: None,
        })
    }

    #[cfg(test)]
    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn active_index(&self) -> usize {
        match self.mode {
            CarouselMode::Idle(i) | CarouselMode::UserOverride(i) => i,
        }
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self.mode, CarouselMode::UserOverride(_))
    }

    pub fn live_timers(&self) -> usize {
        usize::from(self.timer.is_some())
    }

    pub fn start(&mut self, start_timer: impl FnOnce() -> H) {
        if self.is_hovering() {
            return;
        }
        self.timer = None;
        self.timer = Some(start_timer());
    }

    // a tick already queued when hover began is ignored
    pub fn tick(&mut self) -> usize {
        if let CarouselMode::Idle(i) = self.mode {
            self.mode = CarouselMode::Idle((i + 1) % self.len);
        }
        self.active_index()
    }

    pub fn pointer_enter(&mut self, index: usize) {
        self.timer = None;
        self.mode = CarouselMode::UserOverride(index.min(self.len - 1));
    }

    pub fn pointer_leave(&mut self, start_timer: impl FnOnce() -> H) {
        self.timer = None;
        self.mode = CarouselMode::Idle(0);
        self.timer = Some(start_timer());
    }

    pub fn teardown(&mut self) {
        self.timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeTimer(Rc<Cell<i32>>);

    impl FakeTimer {
        fn start(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            FakeTimer(live.clone())
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn carousel(len: usize) -> (AutoCarousel<FakeTimer>, Rc<Cell<i32>>) {
        let live = Rc::new(Cell::new(0));
        let mut c = AutoCarousel::new(len).unwrap();
        c.start(|| FakeTimer::start(&live));
        (c, live)
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(AutoCarousel::<FakeTimer>::new(0).is_none());
    }

    #[test]
    fn three_ticks_over_five_items() {
        let (mut c, live) = carousel(5);
        assert_eq!(c.mode(), CarouselMode::Idle(0));
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.active_index(), 3);
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn ticks_wrap_modulo_length() {
        for len in 1..7 {
            let (mut c, _live) = carousel(len);
            for n in 0..20 {
                assert_eq!(c.active_index(), n % len);
                c.tick();
            }
        }
    }

    #[test]
    fn hover_cancels_timer_and_leave_restarts_one() {
        let (mut c, live) = carousel(4);
        c.tick();
        c.pointer_enter(2);
        assert_eq!(live.get(), 0);
        assert_eq!(c.live_timers(), 0);
        assert_eq!(c.mode(), CarouselMode::UserOverride(2));

        c.pointer_enter(3);
        assert_eq!(live.get(), 0);
        assert_eq!(c.active_index(), 3);

        c.pointer_leave(|| FakeTimer::start(&live));
        assert_eq!(live.get(), 1);
        assert_eq!(c.live_timers(), 1);
        assert_eq!(c.mode(), CarouselMode::Idle(0));
    }

    #[test]
    fn stale_tick_during_hover_is_ignored() {
        let (mut c, _live) = carousel(3);
        c.pointer_enter(1);
        assert_eq!(c.tick(), 1);
        assert!(c.is_hovering());
    }

    #[test]
    fn restarting_never_stacks_timers() {
        let (mut c, live) = carousel(3);
        c.start(|| FakeTimer::start(&live));
        c.start(|| FakeTimer::start(&live));
        assert_eq!(live.get(), 1);
        c.pointer_leave(|| FakeTimer::start(&live));
        c.pointer_leave(|| FakeTimer::start(&live));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn hover_index_is_clamped() {
        let (mut c, _live) = carousel(3);
        c.pointer_enter(99);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn teardown_releases_timer() {
        let (mut c, live) = carousel(2);
        c.teardown();
        assert_eq!(live.get(), 0);
        drop(c);
        assert_eq!(live.get(), 0);
    }
}
