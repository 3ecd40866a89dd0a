use crate::scene::Scene;

/// Tracks which shape, if any, is selected.
///
/// The selection is an index into the [`Scene`]. It is set when the pointer
/// goes down on a shape or one of its handles and cleared only when the
/// pointer goes down on empty space.
///
/// # Examples
///
/// ```
/// use scenekit_designer::selection_manager::SelectionManager;
///
/// let manager = SelectionManager::new();
/// assert_eq!(manager.selected_index(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionManager {
    /// The index of the selected shape, if any
    selected: Option<usize>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Selects the shape at `index`.
    ///
    /// Returns `true` when the selection changed. An index outside the scene
    /// is ignored.
    pub fn select(&mut self, index: usize, scene: &Scene) -> bool {
        if !scene.contains_index(index) {
            tracing::warn!("Ignoring selection of missing shape {}", index);
            return false;
        }
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        changed
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// The selected index, provided it still refers to a shape.
    pub fn resolve(&self, scene: &Scene) -> Option<usize> {
        match self.selected {
            Some(index) if scene.contains_index(index) => Some(index),
            Some(index) => {
                tracing::warn!("Selected index {} is out of range", index);
                None
            }
            None => None,
        }
    }
}
