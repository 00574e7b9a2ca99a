#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Collapsed,
    Expanded,
}

impl Visibility {
    pub fn initial(has_trigger: bool) -> Self {
        if has_trigger {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}
