/// Whether the addon window is currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn show(&mut self) {
        *self = Visibility::Shown;
    }

    pub fn hide(&mut self) {
        *self = Visibility::Hidden;
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> Visibility {
        *self = match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        };
        *self
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!Visibility::default().is_shown());
    }

    #[test]
    fn show_and_hide_are_idempotent() {
        let mut visibility = Visibility::Hidden;
        visibility.show();
        visibility.show();
        assert_eq!(visibility, Visibility::Shown);

        visibility.hide();
        visibility.hide();
        assert_eq!(visibility, Visibility::Hidden);
    }

    #[test]
    fn toggle_flips_state() {
        let mut visibility = Visibility::Hidden;
        assert_eq!(visibility.toggle(), Visibility::Shown);
        assert_eq!(visibility.toggle(), Visibility::Hidden);
    }
}
