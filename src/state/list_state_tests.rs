//! Tests for ListState navigation, selection, ordering and rendering.

use super::*;
use crate::text::printable_width;

fn list(items: &[&str], width: u16, height: u16) -> ListState<String> {
    ListState::with_items(items.iter().map(|s| s.to_string()), width, height)
}

fn selected(state: &ListState<String>) -> Vec<&str> {
    state.get_selected().into_iter().map(String::as_str).collect()
}

fn order(state: &ListState<String>) -> Vec<&str> {
    state.entries().iter().map(|e| e.value().as_str()).collect()
}

// ===== Navigation =====

#[test]
fn move_by_clamps_at_both_ends() {
    let mut state = list(&["a", "b", "c"], 10, 10);
    state.move_by(10);
    assert_eq!(state.cursor(), ItemIndex::new(2));
    state.move_by(-10);
    assert_eq!(state.cursor(), ItemIndex::new(0));
}

#[test]
fn top_and_bottom() {
    let mut state = list(&["a", "b", "c", "d"], 10, 10);
    state.bottom();
    assert_eq!(state.cursor(), ItemIndex::new(3));
    state.top();
    assert_eq!(state.cursor(), ItemIndex::new(0));
}

#[test]
fn navigation_on_empty_list_is_noop() {
    let mut state: ListState<String> = ListState::new();
    state.move_by(3);
    state.bottom();
    state.toggle_select(2);
    state.move_item(1);
    state.sort();
    assert_eq!(state.cursor(), ItemIndex::new(0));
    assert!(state.current().is_none());
}

#[test]
fn in_bounds_checks_item_range() {
    let state = list(&["", "", "", ""], 10, 10);
    assert!(state.in_bounds(0));
    assert!(state.in_bounds(3));
    assert!(!state.in_bounds(-1));
    assert!(!state.in_bounds(4));
}

// ===== Selection =====

#[test]
fn toggle_select_flips_count_items_from_cursor() {
    let mut state = list(&["a", "b", "c", "d"], 10, 10);
    state.move_by(1);
    state.toggle_select(2);
    assert_eq!(selected(&state), vec!["b", "c"]);
    state.toggle_select(1);
    assert_eq!(selected(&state), vec!["c"]);
    assert_eq!(state.cursor(), ItemIndex::new(1));
}

#[test]
fn mark_selected_is_clamped_to_list_end() {
    let mut state = list(&["a", "b", "c"], 10, 10);
    state.move_by(1);
    state.mark_selected(100, true);
    assert_eq!(selected(&state), vec!["b", "c"]);
}

#[test]
fn mark_selected_is_idempotent() {
    let mut state = list(&["a", "b", "c"], 10, 10);
    state.mark_selected(2, true);
    let once = selected(&state).join(",");
    state.mark_selected(2, true);
    assert_eq!(selected(&state).join(","), once);
}

#[test]
fn unmark_clears_flags() {
    let mut state = list(&["a", "b", "c"], 10, 10);
    state.invert_selection();
    state.mark_selected(2, false);
    assert_eq!(selected(&state), vec!["c"]);
}

// ===== Ordering =====

#[test]
fn sort_orders_by_text_and_keeps_selection_on_items() {
    let mut state = list(&["pear", "apple", "fig"], 20, 10);
    state.toggle_select(1);
    state.sort();
    assert_eq!(order(&state), vec!["apple", "fig", "pear"]);
    assert_eq!(selected(&state), vec!["pear"]);
}

#[test]
fn sort_cursor_follows_item_through_permutation() {
    let mut state = list(&["pear", "apple", "fig"], 20, 10);
    state.sort();
    assert_eq!(state.current().map(String::as_str), Some("pear"));
    assert_eq!(state.cursor(), ItemIndex::new(2));
}

#[test]
fn sort_with_equality_refinds_first_equal_item() {
    let mut state = list(&["b", "a", "b"], 20, 10);
    state.set_equals(|x: &String, y: &String| x == y);
    state.move_by(2);
    state.sort();
    // Both "b" compare equal, so the first one wins.
    assert_eq!(state.cursor(), ItemIndex::new(1));
}

#[test]
fn custom_less_reverses_order() {
    let mut state = list(&["a", "c", "b"], 20, 10);
    state.set_less(|x: &String, y: &String| x > y);
    state.sort();
    assert_eq!(order(&state), vec!["c", "b", "a"]);
}

#[test]
fn move_item_carries_cursor_and_selection() {
    let mut state = list(&["a", "b", "c", "d"], 20, 10);
    state.toggle_select(1);
    state.move_item(2);
    assert_eq!(order(&state), vec!["b", "c", "a", "d"]);
    assert_eq!(state.cursor(), ItemIndex::new(2));
    assert_eq!(selected(&state), vec!["a"]);

    state.move_item(-10);
    assert_eq!(order(&state), vec!["a", "b", "c", "d"]);
    assert_eq!(state.cursor(), ItemIndex::new(0));
}

#[test]
fn index_of_requires_equality() {
    let mut state = list(&["x", "y"], 20, 10);
    assert_eq!(state.index_of(&"y".to_string()), None);

    state.set_equals(|a: &String, b: &String| a == b);
    assert_eq!(state.index_of(&"y".to_string()), Some(ItemIndex::new(1)));
    assert!(state.focus_item(&"y".to_string()));
    assert_eq!(state.cursor(), ItemIndex::new(1));
    assert!(!state.focus_item(&"z".to_string()));
    assert_eq!(state.cursor(), ItemIndex::new(1));
}

// ===== Rendering =====

#[test]
fn zero_width_or_height_is_an_error() {
    let mut state = list(&[""], 0, 1);
    assert_eq!(
        state.render(),
        Err(RenderError::ZeroViewport { width: 0, height: 1 })
    );
    state.set_viewport(ViewportDimensions::new(1, 0));
    assert!(state.render().is_err());
}

#[test]
fn empty_list_renders_nothing() {
    let mut state: ListState<String> = ListState::new();
    state.set_viewport(ViewportDimensions::new(10, 10));
    assert_eq!(state.render(), Ok(String::new()));
}

#[test]
fn render_wraps_and_marks_cursor_item() {
    let mut state = list(&["robert frost"], 10, 2);
    assert_eq!(
        state.render().unwrap(),
        "\x1b[7m0 ╭>robert\x1b[0m\n\x1b[7m  │ frost\x1b[0m"
    );
}

#[test]
fn selected_items_show_marker() {
    let mut state = list(&["a", "b"], 20, 5);
    state.move_by(1);
    state.toggle_select(1);
    assert_eq!(state.render().unwrap(), "0 ╭  a\n\x1b[7m1 ╭>*b\x1b[0m");
}

#[test]
fn relative_numbering_shows_signed_distances() {
    let mut state = list(&["a", "b", "c"], 20, 5);
    state.move_by(1);
    state.toggle_numbering();
    assert_eq!(state.render().unwrap(), "-1 ╭ a\n\x1b[7m 1 ╭>b\x1b[0m\n+1 ╭ c");
}

#[test]
fn tabs_render_as_spaces() {
    let mut state = list(&["a\tb"], 20, 1);
    assert_eq!(state.render().unwrap(), "\x1b[7m0 ╭>a    b\x1b[0m");
}

#[test]
fn indented_item_starts_with_text_on_its_head_row() {
    let mut state = list(&["      indented"], 10, 2);
    assert_eq!(
        state.render().unwrap(),
        "\x1b[7m0 ╭>indent\x1b[0m\n\x1b[7m  │ ed\x1b[0m"
    );
}

#[test]
fn render_keeps_offset_until_margin_is_reached() {
    let mut state = list(&[""; 30], 10, 10);
    state.move_by(5);
    state.render().unwrap();
    assert_eq!(state.scroll_offset(), LineOffset::new(0));

    state.move_by(1);
    state.render().unwrap();
    assert_eq!(state.scroll_offset(), LineOffset::new(1));

    state.move_by(-1);
    state.render().unwrap();
    assert_eq!(state.scroll_offset(), LineOffset::new(1));
}

#[test]
fn narrow_viewport_never_exceeds_width() {
    let mut state = list(&["a long item that wraps", "日本語テキスト"], 3, 20);
    state.toggle_select(1);
    for line in state.render().unwrap().lines() {
        assert!(printable_width(line) <= 3, "{line:?}");
    }
}

#[test]
fn add_item_after_render_extends_layout() {
    let mut state = list(&["a"], 20, 5);
    state.render().unwrap();
    state.add_item("robert frost".to_string());
    state.bottom();
    assert_eq!(
        state.render().unwrap(),
        "0 ╭ a\n\x1b[7m1 ╭>robert frost\x1b[0m"
    );
}

#[test]
fn glyph_change_relayouts() {
    let mut state = list(&["a", "b"], 20, 5);
    state.render().unwrap();
    state.set_glyphs(Glyphs::checkboxes());
    assert_eq!(state.render().unwrap(), "\x1b[7m0 >[ ]a\x1b[0m\n1  [ ]b");
}

#[test]
fn rows_expose_structure() {
    let mut state = list(&["robert frost", "x"], 10, 5);
    let rows = state.rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].is_continuation);
    assert!(!rows[2].is_cursor);
    assert_eq!(rows[2].text, "x");
}
