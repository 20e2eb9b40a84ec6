/// Open/closed display state of the option list.
///
/// Two states, no terminal state. The list starts closed; the title click
/// toggles it, an outside click or a selection forces it closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn from_open(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// The opposite state, as produced by a title click.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Visibility;

    #[test]
    fn test_starts_closed() {
        assert_eq!(Visibility::default(), Visibility::Closed);
        assert!(!Visibility::default().is_open());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let state = Visibility::Closed;
        assert_eq!(state.toggled(), Visibility::Open);
        assert_eq!(state.toggled().toggled(), Visibility::Closed);
    }
}
