/// Result of measuring a subtree while checking balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Height {
    /// Every node in the subtree is balanced and the subtree has this many levels.
    Balanced(usize),
    /// Some node in the subtree has child heights differing by more than one. Once a subtree
    /// is unbalanced every ancestor is as well.
    Unbalanced,
}

impl Height {
    /// Combines the heights of two sibling subtrees into the height of their parent.
    pub(crate) fn join(left: Self, right: Self) -> Self {
        match (left, right) {
            (Self::Balanced(l), Self::Balanced(r)) if l.abs_diff(r) <= 1 => {
                Self::Balanced(l.max(r) + 1)
            }
            _ => Self::Unbalanced,
        }
    }
}
