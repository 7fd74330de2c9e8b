//! Confetti visibility, scoped to the round that earned it.
//!
//! The shell schedules an `Expire` for the round that was won. If a new round
//! has started in the meantime the expiry names a stale round and is ignored.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Celebration {
    round: Option<u64>,
}

#[derive(Clone, Copy, Debug)]
pub enum CelebrationAction {
    Show { round: u64 },
    Expire { round: u64 },
    Clear,
}

impl Celebration {
    pub fn is_showing(&self) -> bool {
        self.round.is_some()
    }

    pub fn apply(self, action: CelebrationAction) -> Self {
        match action {
            CelebrationAction::Show { round } => Self { round: Some(round) },
            CelebrationAction::Expire { round } if self.round == Some(round) => Self::default(),
            CelebrationAction::Expire { .. } => self,
            CelebrationAction::Clear => Self::default(),
        }
    }
}

impl Reducible for Celebration {
    type Action = CelebrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_clears_its_own_round() {
        let c = Celebration::default().apply(CelebrationAction::Show { round: 4 });
        assert!(c.is_showing());
        let c = c.apply(CelebrationAction::Expire { round: 4 });
        assert!(!c.is_showing());
    }

    #[test]
    fn stale_expiry_leaves_newer_round_alone() {
        let c = Celebration::default()
            .apply(CelebrationAction::Show { round: 1 })
            .apply(CelebrationAction::Clear)
            .apply(CelebrationAction::Show { round: 2 })
            .apply(CelebrationAction::Expire { round: 1 });
        assert_eq!(c, Celebration::default().apply(CelebrationAction::Show { round: 2 }));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let c = Rc::new(Celebration::default());
        let after = c.clone().reduce(CelebrationAction::Expire { round: 3 });
        assert!(Rc::ptr_eq(&c, &after));
    }
}
