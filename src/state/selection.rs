//! Selection and hover state shared between the track and the property
//! editor.
//!
//! Both views render from this single state and write into it tagged with
//! their own origin. Neither view dispatches events at the other, so a hover
//! that originated on one side cannot echo back and re-trigger itself.

use uuid::Uuid;

/// Which view produced the most recent hover change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOrigin {
    Track,
    Editor,
}

/// Selection and hover state for annotations, owned by the app shell.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusState {
    selected: Option<Uuid>,
    hovered: Option<Uuid>,
    hover_origin: FocusOrigin,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            selected: None,
            hovered: None,
            hover_origin: FocusOrigin::Track,
        }
    }
}

impl FocusState {
    /// Replace the selection with a single annotation.
    pub fn select(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected == Some(id)
    }

    /// Record a hover change coming from the given view.
    pub fn set_hovered(&mut self, id: Option<Uuid>, origin: FocusOrigin) {
        self.hovered = id;
        self.hover_origin = origin;
    }

    #[allow(dead_code)]
    pub fn hovered(&self) -> Option<Uuid> {
        self.hovered
    }

    pub fn is_hovered(&self, id: Uuid) -> bool {
        self.hovered == Some(id)
    }

    /// The hover a view should mirror: only changes that originated in the
    /// other view, never its own.
    pub fn mirrored_hover(&self, viewer: FocusOrigin) -> Option<Uuid> {
        if self.hover_origin == viewer {
            None
        } else {
            self.hovered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces() {
        let mut focus = FocusState::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        focus.select(a);
        assert!(focus.is_selected(a));
        focus.select(b);
        assert!(focus.is_selected(b));
        assert!(!focus.is_selected(a));
        focus.clear_selection();
        assert_eq!(focus.selected(), None);
    }

    #[test]
    fn test_hover_is_not_mirrored_to_its_origin() {
        let mut focus = FocusState::default();
        let id = Uuid::new_v4();
        focus.set_hovered(Some(id), FocusOrigin::Track);
        assert_eq!(focus.mirrored_hover(FocusOrigin::Track), None);
        assert_eq!(focus.mirrored_hover(FocusOrigin::Editor), Some(id));

        focus.set_hovered(Some(id), FocusOrigin::Editor);
        assert_eq!(focus.mirrored_hover(FocusOrigin::Editor), None);
        assert_eq!(focus.mirrored_hover(FocusOrigin::Track), Some(id));
    }

    #[test]
    fn test_hover_clear() {
        let mut focus = FocusState::default();
        let id = Uuid::new_v4();
        focus.set_hovered(Some(id), FocusOrigin::Track);
        assert!(focus.is_hovered(id));
        focus.set_hovered(None, FocusOrigin::Track);
        assert_eq!(focus.hovered(), None);
    }
}
