//! The `@` suggestion state machine.
//!
//! Single-threaded and synchronous: every keystroke or caret move runs
//! `update` in full. There is no debouncing; the candidate scan is over
//! the in-memory collection and completes immediately.

use crate::cursor::{NodeCursor, RichCaret, TextCursor, TextNode};
use cookbook_model::Catalog;
use std::ops::Range;

/// Maximum number of suggestions shown at once.
const MAX_SUGGESTIONS: usize = 5;

/// Separator inserted after a completed reference in rich buffers.
const NBSP: char = '\u{00A0}';

/// One suggested recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Id of the suggested recipe.
    pub id: String,
    /// Its title, inserted on selection.
    pub title: String,
}

/// Controller state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AutocompleteState {
    /// No suggestion list open.
    #[default]
    Idle,
    /// A suggestion list is open.
    Suggesting {
        /// Text between the triggering `@` and the caret.
        query: String,
        /// Byte offset of the triggering `@` in the resolved text.
        trigger: usize,
        /// Up to five candidates, in collection order.
        candidates: Vec<Suggestion>,
        /// Keyboard focus within the list, if any.
        focus: Option<usize>,
    },
}

/// The edit produced by accepting a suggestion.
///
/// The controller never mutates a buffer; the owning input applies the
/// edit and moves its caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Byte range in the resolved text to replace (the `@` through the
    /// caret).
    pub range: Range<usize>,
    /// Replacement text: `@Title` plus one separating space.
    pub insert: String,
    /// Caret position after the edit, just past the separator.
    pub caret: usize,
    /// Id of the chosen recipe.
    pub recipe_id: String,
    /// Title of the chosen recipe.
    pub title: String,
}

impl Completion {
    /// Applies the edit to a plain linear buffer.
    pub fn apply_to(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + self.insert.len());
        out.push_str(&text[..self.range.start]);
        out.push_str(&self.insert);
        out.push_str(&text[self.range.end..]);
        out
    }
}

/// The autocomplete controller.
///
/// Owns nothing but its own state; the caller feeds it a cursor and the
/// current catalog snapshot on every input event.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    state: AutocompleteState,
}

impl Autocomplete {
    /// A fresh controller in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    /// True while a suggestion list is open.
    pub fn is_suggesting(&self) -> bool {
        matches!(self.state, AutocompleteState::Suggesting { .. })
    }

    /// The candidates of an open list, empty when idle.
    pub fn candidates(&self) -> &[Suggestion] {
        match &self.state {
            AutocompleteState::Suggesting { candidates, .. } => candidates,
            AutocompleteState::Idle => &[],
        }
    }

    /// Re-evaluates the state for the current cursor position.
    ///
    /// Called on every text input and caret movement. The trigger is
    /// the nearest `@` at or before the caret; it must start the buffer
    /// or follow whitespace (NBSP included), which keeps emails and
    /// compound words from opening the list. An unresolvable caret (on
    /// a marker node) leaves the state unchanged.
    pub fn update(&mut self, cursor: &impl TextCursor, catalog: &Catalog) {
        let Some((text, offset)) = cursor.resolve() else {
            return;
        };
        let before = &text[..offset];

        let Some(trigger) = before.rfind('@') else {
            self.dismiss();
            return;
        };
        if let Some(prev) = before[..trigger].chars().next_back() {
            // char::is_whitespace covers NBSP.
            if !prev.is_whitespace() {
                self.dismiss();
                return;
            }
        }

        let query = &before[trigger + 1..];
        let needle = query.to_lowercase();
        let candidates: Vec<Suggestion> = catalog
            .recipes()
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .map(|r| Suggestion {
                id: r.id.clone(),
                title: r.title.clone(),
            })
            .collect();

        if candidates.is_empty() {
            self.dismiss();
            return;
        }

        // Focus resets whenever the list is (re)computed.
        self.state = AutocompleteState::Suggesting {
            query: query.to_string(),
            trigger,
            candidates,
            focus: None,
        };
    }

    /// Moves keyboard focus down, wrapping to the top.
    pub fn focus_next(&mut self) {
        if let AutocompleteState::Suggesting { candidates, focus, .. } = &mut self.state {
            *focus = Some(match *focus {
                Some(i) if i + 1 < candidates.len() => i + 1,
                _ => 0,
            });
        }
    }

    /// Moves keyboard focus up, wrapping to the bottom.
    pub fn focus_prev(&mut self) {
        if let AutocompleteState::Suggesting { candidates, focus, .. } = &mut self.state {
            *focus = Some(match *focus {
                Some(i) if i > 0 => i - 1,
                _ => candidates.len() - 1,
            });
        }
    }

    /// The currently focused suggestion, if any.
    pub fn focused(&self) -> Option<&Suggestion> {
        match &self.state {
            AutocompleteState::Suggesting { candidates, focus, .. } => {
                focus.and_then(|i| candidates.get(i))
            }
            AutocompleteState::Idle => None,
        }
    }

    /// Accepts the suggestion at `index` (pointer selection).
    ///
    /// Returns the edit to apply and transitions to `Idle`. The replaced
    /// span runs from the triggering `@` through the current caret.
    pub fn select(&mut self, cursor: &impl TextCursor, index: usize) -> Option<Completion> {
        let completion = match &self.state {
            AutocompleteState::Suggesting {
                trigger, candidates, ..
            } => {
                let suggestion = candidates.get(index)?;
                let (_, offset) = cursor.resolve()?;
                Some(Completion {
                    range: *trigger..offset,
                    insert: format!("@{} ", suggestion.title),
                    caret: trigger + suggestion.title.len() + 2,
                    recipe_id: suggestion.id.clone(),
                    title: suggestion.title.clone(),
                })
            }
            AutocompleteState::Idle => None,
        }?;
        self.state = AutocompleteState::Idle;
        Some(completion)
    }

    /// Accepts the focused suggestion (Enter).
    pub fn select_focused(&mut self, cursor: &impl TextCursor) -> Option<Completion> {
        let index = match &self.state {
            AutocompleteState::Suggesting { focus, .. } => (*focus)?,
            AutocompleteState::Idle => return None,
        };
        self.select(cursor, index)
    }

    /// Closes the list without touching the text (Escape, click away).
    pub fn dismiss(&mut self) {
        self.state = AutocompleteState::Idle;
    }
}

/// Applies a completion to a rich buffer.
///
/// The resolved text node is split around the replaced span and a
/// marker badge plus a NBSP separator are spliced in; the returned
/// caret sits just after the separator. Mirrors the plain-text edit of
/// [`Completion::apply_to`] for structured inputs.
pub fn apply_to_nodes(
    cursor: &NodeCursor<'_>,
    completion: &Completion,
) -> Option<(Vec<TextNode>, RichCaret)> {
    let (node_index, _) = cursor.resolve_node()?;
    let TextNode::Text(text) = &cursor.nodes()[node_index] else {
        return None;
    };

    let before = &text[..completion.range.start];
    let after = &text[completion.range.end..];

    let mut out: Vec<TextNode> = cursor.nodes()[..node_index].to_vec();
    if !before.is_empty() {
        out.push(TextNode::Text(before.to_string()));
    }
    out.push(TextNode::Marker {
        id: completion.recipe_id.clone(),
        text: format!("@{}", completion.title),
    });
    out.push(TextNode::Text(NBSP.to_string()));
    let caret = RichCaret::BetweenNodes { index: out.len() };
    if !after.is_empty() {
        out.push(TextNode::Text(after.to_string()));
    }
    out.extend_from_slice(&cursor.nodes()[node_index + 1..]);

    Some((out, caret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::LinearCursor;
    use cookbook_model::Recipe;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Recipe::titled("1", "Tomato Soup"),
            Recipe::titled("2", "Tomato Salad"),
            Recipe::titled("3", "Pho"),
        ])
    }

    #[test]
    fn test_trigger_after_whitespace() {
        let mut ac = Autocomplete::new();
        let text = "Add @Tom";
        ac.update(&LinearCursor::at_end(text), &catalog());
        match ac.state() {
            AutocompleteState::Suggesting {
                query, candidates, focus, ..
            } => {
                assert_eq!(query, "Tom");
                assert_eq!(candidates.len(), 2);
                assert_eq!(*focus, None);
            }
            AutocompleteState::Idle => panic!("expected Suggesting"),
        }
    }

    #[test]
    fn test_email_does_not_trigger() {
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("user@example"), &catalog());
        assert!(!ac.is_suggesting());
    }

    #[test]
    fn test_at_start_of_buffer_triggers() {
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("@Pho"), &catalog());
        assert!(ac.is_suggesting());
    }

    #[test]
    fn test_no_at_closes_open_list() {
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("Add @Tom"), &catalog());
        assert!(ac.is_suggesting());
        ac.update(&LinearCursor::at_end("Add Tom"), &catalog());
        assert!(!ac.is_suggesting());
    }

    #[test]
    fn test_zero_candidates_goes_idle() {
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("Add @zzz"), &catalog());
        assert!(!ac.is_suggesting());
    }

    #[test]
    fn test_substring_not_prefix() {
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("Add @oup"), &catalog());
        assert_eq!(ac.candidates().len(), 1);
        assert_eq!(ac.candidates()[0].title, "Tomato Soup");
    }

    #[test]
    fn test_candidates_capped_at_five() {
        let many: Vec<Recipe> = (0..8)
            .map(|i| Recipe::titled(i.to_string(), format!("Soup {i}")))
            .collect();
        let catalog = Catalog::new(many);
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("try @Soup"), &catalog);
        assert_eq!(ac.candidates().len(), 5);
        // Collection order, not relevance order.
        assert_eq!(ac.candidates()[0].title, "Soup 0");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("Add @Tomato"), &catalog());
        assert_eq!(ac.focused(), None);
        ac.focus_next();
        assert_eq!(ac.focused().unwrap().title, "Tomato Soup");
        ac.focus_next();
        assert_eq!(ac.focused().unwrap().title, "Tomato Salad");
        ac.focus_next(); // wraps to top
        assert_eq!(ac.focused().unwrap().title, "Tomato Soup");
        ac.focus_prev(); // wraps to bottom
        assert_eq!(ac.focused().unwrap().title, "Tomato Salad");
    }

    #[test]
    fn test_select_builds_completion_and_goes_idle() {
        let mut ac = Autocomplete::new();
        let text = "Add @Tom and stir";
        let cursor = LinearCursor::new(text, 8); // caret right after "@Tom"
        ac.update(&cursor, &catalog());
        let completion = ac.select(&cursor, 0).unwrap();
        assert_eq!(completion.range, 4..8);
        assert_eq!(completion.insert, "@Tomato Soup ");
        assert_eq!(completion.apply_to(text), "Add @Tomato Soup  and stir");
        assert_eq!(completion.caret, 4 + "@Tomato Soup ".len());
        assert!(!ac.is_suggesting());
    }

    #[test]
    fn test_dismiss_leaves_text_alone() {
        let mut ac = Autocomplete::new();
        ac.update(&LinearCursor::at_end("Add @Tom"), &catalog());
        ac.focus_next();
        ac.dismiss();
        assert!(!ac.is_suggesting());
        assert_eq!(ac.focused(), None);
    }

    #[test]
    fn test_rich_buffer_completion_splices_marker() {
        let nodes = vec![TextNode::Text("Add @Tom and stir".into())];
        let caret = RichCaret::InText { node: 0, offset: 8 };
        let cursor = NodeCursor::new(&nodes, caret);

        let mut ac = Autocomplete::new();
        ac.update(&cursor, &catalog());
        assert!(ac.is_suggesting());

        let completion = ac.select(&cursor, 0).unwrap();
        let (out, new_caret) = apply_to_nodes(&cursor, &completion).unwrap();
        assert_eq!(
            out,
            vec![
                TextNode::Text("Add ".into()),
                TextNode::Marker {
                    id: "1".into(),
                    text: "@Tomato Soup".into(),
                },
                TextNode::Text("\u{00A0}".into()),
                TextNode::Text(" and stir".into()),
            ]
        );
        assert_eq!(new_caret, RichCaret::BetweenNodes { index: 3 });
    }

    #[test]
    fn test_rich_trigger_guard_respects_nbsp() {
        // NBSP before the @ still counts as whitespace.
        let nodes = vec![TextNode::Text("x\u{00A0}@Pho".into())];
        let caret = RichCaret::InText { node: 0, offset: 7 };
        let mut ac = Autocomplete::new();
        ac.update(&NodeCursor::new(&nodes, caret), &catalog());
        assert!(ac.is_suggesting());
    }

    #[test]
    fn test_caret_on_marker_keeps_state() {
        let nodes = vec![
            TextNode::Text("Add @Tom".into()),
            TextNode::Marker {
                id: "3".into(),
                text: "@Pho".into(),
            },
        ];
        let mut ac = Autocomplete::new();
        ac.update(
            &NodeCursor::new(&nodes, RichCaret::InText { node: 0, offset: 8 }),
            &catalog(),
        );
        assert!(ac.is_suggesting());
        // Unresolvable caret: state unchanged, list stays open.
        ac.update(
            &NodeCursor::new(&nodes, RichCaret::InText { node: 1, offset: 0 }),
            &catalog(),
        );
        assert!(ac.is_suggesting());
    }
}
