use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

pub enum RevealAction {
    Visible(usize),
    All,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Marks `index` revealed. Returns true only for the first transition,
    /// which is when the caller should stop observing the region.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn reveal_all(&mut self) {
        self.revealed.iter_mut().for_each(|flag| *flag = true);
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|flag| *flag)
    }
}

impl Reducible for RevealSet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RevealAction::Visible(index) => next.reveal(index),
            RevealAction::All => {
                let before = next.all_revealed();
                next.reveal_all();
                !before
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_transitions_once() {
        let mut set = RevealSet::new(3);
        assert!(!set.is_revealed(1));
        assert!(set.reveal(1));
        assert!(set.is_revealed(1));
        assert!(!set.reveal(1));
        assert!(set.is_revealed(1));
    }

    #[test]
    fn revealed_never_reverts() {
        let mut set = RevealSet::new(2);
        set.reveal(0);
        for _ in 0..10 {
            set.reveal(0);
            set.reveal(1);
            assert!(set.is_revealed(0));
        }
        set.reveal_all();
        assert!(set.is_revealed(0) && set.is_revealed(1));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut set = RevealSet::new(1);
        assert!(!set.reveal(5));
        assert!(!set.is_revealed(5));
        assert!(!set.is_revealed(0));
    }

    #[test]
    fn reveal_all_is_fail_open() {
        let mut set = RevealSet::new(4);
        set.reveal(2);
        set.reveal_all();
        assert!(set.all_revealed());
    }

    #[test]
    fn reducer_keeps_identity_on_noop() {
        let set = Rc::new(RevealSet::new(2));
        let once = set.clone().reduce(RevealAction::Visible(0));
        assert!(!Rc::ptr_eq(&set, &once));
        let twice = once.clone().reduce(RevealAction::Visible(0));
        assert!(Rc::ptr_eq(&once, &twice));
        let all = twice.reduce(RevealAction::All);
        assert!(all.all_revealed());
        let again = all.clone().reduce(RevealAction::All);
        assert!(Rc::ptr_eq(&all, &again));
    }
}
