//! The single shared community selection.

/// The one "selected community" cell shared by every linked view.
///
/// Selection is exclusive across communities and toggle-style per
/// community: selecting the current value again clears it. All mutation
/// goes through [`SelectionState::select`] and [`SelectionState::clear`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    /// The currently selected community, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the named community is the current selection.
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }

    /// Toggles the selection: the current value clears, anything else
    /// replaces it.
    pub fn select(&mut self, name: &str) {
        if self.is_selected(name) {
            self.selected = None;
        } else {
            self.selected = Some(name.to_owned());
        }
    }

    /// Unconditionally clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
