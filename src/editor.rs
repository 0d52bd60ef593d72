//! Edit-session logic of the dimension overlay editor.
//!
//! The editor never owns the dimension list. It reads the caller's list, keeps
//! the single transient edit session (which dimension is being edited and the
//! draft text), and reports outcomes through two callbacks:
//!
//! - a selection callback `(id)`, fired whenever an anchor becomes the edit target
//! - an update callback `(id, value)`, fired only when a non-empty draft is committed
//!
//! The caller merges updates into its own list, so data flows one way.

use crate::types::{Dimension, DimensionId, DimensionList};

/// Text shown on an anchor whose dimension has no value yet.
pub const PLACEHOLDER_TEXT: &str = "Click to edit";

/// The single-slot edit session plus the widget-facing focus flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayEditor {
    editing: Option<DimensionId>,
    draft: String,
    focus_pending: bool,
}

impl OverlayEditor {
    /// Creates an editor with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dimension currently being edited, if any.
    pub fn editing(&self) -> Option<DimensionId> {
        self.editing
    }

    /// Uncommitted draft text of the active session.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Begins editing `id`, seeding the draft from its current value.
    ///
    /// Ignored while a session for a *different* dimension is still open; that
    /// session must be committed (the input's lost-focus does this) first.
    /// Re-activating the dimension already being edited reseeds nothing.
    ///
    /// Returns whether `id` is now the edit target.
    pub fn activate(
        &mut self,
        id: DimensionId,
        dimensions: &DimensionList,
        on_select: impl FnOnce(DimensionId),
    ) -> bool {
        match self.editing {
            Some(current) if current != id => {
                log::debug!("Ignoring activation of {id} while {current} is being edited");
                false
            }
            Some(_) => true,
            None => {
                self.draft = dimensions.get(id).value.clone();
                self.editing = Some(id);
                self.focus_pending = true;
                on_select(id);
                true
            }
        }
    }

    /// Replaces the draft text. Nothing is committed.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Ends the active session, committing the draft if it is non-empty.
    ///
    /// A non-empty draft is reported once through `on_update`; an empty one is
    /// dropped, so a value that was set cannot be cleared back to empty here.
    /// The session is closed either way. Without a session this does nothing.
    ///
    /// Returns whether `on_update` was called.
    pub fn commit_if_non_empty(&mut self, on_update: impl FnOnce(DimensionId, &str)) -> bool {
        let Some(id) = self.editing.take() else {
            return false;
        };
        self.focus_pending = false;
        let draft = std::mem::take(&mut self.draft);
        if draft.is_empty() {
            log::debug!("Discarding empty edit of {id}");
            return false;
        }
        log::info!("Dimension {id} set to {draft} mm");
        on_update(id, &draft);
        true
    }

    /// Returns true once after each activation so the widget can focus its input.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }

    /// Derives how the anchor of `dimension` should be drawn right now.
    pub fn anchor_view(&self, dimension: &Dimension, active: Option<DimensionId>) -> AnchorView {
        let visual = if self.editing == Some(dimension.id) {
            AnchorVisual::Editing
        } else if let Some(text) = dimension.display_value() {
            AnchorVisual::Badge(text)
        } else {
            AnchorVisual::Placeholder
        };
        AnchorView {
            id: dimension.id,
            visual,
            highlighted: active == Some(dimension.id),
        }
    }
}

/// Which of the three renderings an anchor uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorVisual {
    /// Inline text field bound to the draft
    Editing,
    /// Compact badge with the value and unit, e.g. `"7 mm"`
    Badge(String),
    /// Prompt shown while the value is unset
    Placeholder,
}

impl AnchorVisual {
    /// Text drawn after the `"<id>:"` prefix; empty while editing.
    pub fn text(&self) -> &str {
        match self {
            AnchorVisual::Editing => "",
            AnchorVisual::Badge(text) => text,
            AnchorVisual::Placeholder => PLACEHOLDER_TEXT,
        }
    }
}

/// Derived view state of one anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorView {
    /// Dimension the anchor belongs to
    pub id: DimensionId,
    /// Rendering to use
    pub visual: AnchorVisual,
    /// Whether the caller marks this dimension as the active one
    pub highlighted: bool,
}

/// Restricts typed text to something that looks like a decimal number.
///
/// Keeps digits, a single leading minus and the first decimal separator
/// (`.` or `,`). The result is still stored as text; nothing is parsed.
pub fn filter_numeric(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_separator = false;
    for ch in input.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '-' if out.is_empty() => out.push(ch),
            '.' | ',' if !seen_separator => {
                seen_separator = true;
                out.push(ch);
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;

    #[test]
    fn test_activation_seeds_draft_and_notifies_selection() {
        let mut dims = DimensionList::new();
        dims.update(DimensionId::C, "4");
        let mut editor = OverlayEditor::new();
        let mut selected = Vec::new();

        assert!(editor.activate(DimensionId::C, &dims, |id| selected.push(id)));

        assert_eq!(editor.editing(), Some(DimensionId::C));
        assert_eq!(editor.draft(), "4");
        assert_eq!(selected, vec![DimensionId::C]);
        assert!(editor.take_focus_request());
        assert!(!editor.take_focus_request());
    }

    #[test]
    fn test_activating_other_anchor_mid_edit_keeps_both_values() {
        let mut dims = DimensionList::new();
        dims.update(DimensionId::A, "10");
        dims.update(DimensionId::B, "20");
        let mut editor = OverlayEditor::new();

        editor.activate(DimensionId::A, &dims, |_| {});
        editor.set_draft("99");
        let mut selected = Vec::new();
        let accepted = editor.activate(DimensionId::B, &dims, |id| selected.push(id));

        assert!(!accepted);
        assert!(selected.is_empty());
        assert_eq!(editor.editing(), Some(DimensionId::A));
        assert_eq!(editor.draft(), "99");
        assert_eq!(dims.get(DimensionId::A).value, "10");
        assert_eq!(dims.get(DimensionId::B).value, "20");
    }

    #[test]
    fn test_blur_then_activate_switches_session() {
        let mut dims = DimensionList::new();
        let mut editor = OverlayEditor::new();

        editor.activate(DimensionId::A, &dims, |_| {});
        editor.set_draft("5");
        editor.commit_if_non_empty(|id, value| dims.update(id, value));
        assert!(editor.activate(DimensionId::B, &dims, |_| {}));

        assert_eq!(editor.editing(), Some(DimensionId::B));
        assert_eq!(editor.draft(), "");
        assert_eq!(dims.get(DimensionId::A).value, "5");
    }

    #[test]
    fn test_commit_non_empty_calls_update_once_and_clears_session() {
        let dims = DimensionList::new();
        let mut editor = OverlayEditor::new();
        editor.activate(DimensionId::C, &dims, |_| {});
        editor.set_draft("12.5");

        let mut calls = Vec::new();
        let committed = editor.commit_if_non_empty(|id, value| calls.push((id, value.to_string())));

        assert!(committed);
        assert_eq!(calls, vec![(DimensionId::C, "12.5".to_string())]);
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn test_commit_empty_draft_is_discarded_and_clears_session() {
        let mut dims = DimensionList::new();
        dims.update(DimensionId::C, "3");
        let mut editor = OverlayEditor::new();
        editor.activate(DimensionId::C, &dims, |_| {});
        editor.set_draft("");

        let mut calls = 0;
        let committed = editor.commit_if_non_empty(|_, _| calls += 1);

        assert!(!committed);
        assert_eq!(calls, 0);
        assert_eq!(editor.editing(), None);
        // The previous value cannot be cleared through this path.
        assert_eq!(dims.get(DimensionId::C).value, "3");
    }

    #[test]
    fn test_commit_without_session_is_noop() {
        let mut editor = OverlayEditor::new();
        let mut calls = 0;
        assert!(!editor.commit_if_non_empty(|_, _| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_anchor_view_derives_three_renderings() {
        let mut dims = DimensionList::new();
        dims.update(DimensionId::B, "7");
        let mut editor = OverlayEditor::new();
        editor.activate(DimensionId::C, &dims, |_| {});

        let unset = editor.anchor_view(dims.get(DimensionId::A), None);
        assert_eq!(unset.visual, AnchorVisual::Placeholder);
        assert_eq!(unset.visual.text(), "Click to edit");

        let set = editor.anchor_view(dims.get(DimensionId::B), None);
        assert_eq!(set.visual, AnchorVisual::Badge("7 mm".into()));

        let editing = editor.anchor_view(dims.get(DimensionId::C), None);
        assert_eq!(editing.visual, AnchorVisual::Editing);
    }

    #[test]
    fn test_highlight_follows_active_id_independent_of_editing() {
        let dims = DimensionList::new();
        let mut editor = OverlayEditor::new();
        editor.activate(DimensionId::A, &dims, |_| {});

        let view = editor.anchor_view(dims.get(DimensionId::D), Some(DimensionId::D));
        assert!(view.highlighted);
        assert_eq!(view.visual, AnchorVisual::Placeholder);

        let view = editor.anchor_view(dims.get(DimensionId::A), Some(DimensionId::D));
        assert!(!view.highlighted);
        assert_eq!(view.visual, AnchorVisual::Editing);
    }

    #[test]
    fn test_filter_numeric_keeps_number_like_text() {
        assert_eq!(filter_numeric("12.5"), "12.5");
        assert_eq!(filter_numeric("-3,25"), "-3,25");
        assert_eq!(filter_numeric("1.2.3"), "1.23");
        assert_eq!(filter_numeric("4-5"), "45");
        assert_eq!(filter_numeric("abc10mm"), "10");
        assert_eq!(filter_numeric(""), "");
    }

    #[test]
    fn test_end_to_end_first_value_shows_in_summary() {
        let mut dims = DimensionList::new();
        let mut active = None;
        let mut editor = OverlayEditor::new();

        editor.activate(DimensionId::A, &dims, |id| active = Some(id));
        editor.set_draft(filter_numeric("10"));
        editor.commit_if_non_empty(|id, value| dims.update(id, value));

        assert_eq!(active, Some(DimensionId::A));
        let a = dims.get(DimensionId::A);
        assert_eq!(a.value, "10");
        assert_eq!(a.label, "A");
        assert_eq!(a.description, "Height");

        let summary = summarize(&dims);
        let not_set = summary.iter().filter(|e| e.display == "Not set").count();
        assert_eq!(not_set, 15);
        assert_eq!(summary[0].id, DimensionId::A);
        assert_eq!(summary[0].display, "10 mm");
    }
}
