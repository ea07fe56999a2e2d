use super::*;
use crate::grid::{Edit, Field, FieldKind, PropertyGrid, Schema, Section};
use crate::ui::backend::test::{TestBackend, TestBuffer};
use crate::ui::backend::Backend;
use crate::ui::core::painter::Painter;
use crate::ui::core::tree::UiTree;
use serde_json::{json, Value};

fn ordered(committed: &Value, _obj: &Value) -> Option<String> {
    match (committed[0].as_f64(), committed[1].as_f64()) {
        (Some(lo), Some(hi)) if lo > hi => Some("Min must be ≤ Max".to_string()),
        _ => None,
    }
}

fn schema() -> Schema {
    Schema::from(vec![
        Section::new("Camera")
            .field("enabled", Field::boolean("Enabled"))
            .field("fov", Field::value_pair("FOV", 1.0, 170.0).validate(ordered))
            .field("tone", Field::single_choice("Tone", ["ACES", "Filmic"]))
            .field("lod", Field::slider_pair("LOD", 0.0, 10.0))
            .field("focal", Field::new(FieldKind::Unknown("numberSlider".into()), "Focal"))
            .child(
                Section::new("Exposure")
                    .collapsed(true)
                    .field("iso", Field::number("ISO")),
            ),
        Section::new("Locked")
            .disabled(true)
            .field("name", Field::text("Name")),
    ])
}

fn object() -> Value {
    json!({ "enabled": true, "fov": [20, 90], "tone": "Filmic", "lod": [2, 8], "name": "cam" })
}

struct Frame {
    buf: TestBuffer,
    tree: UiTree,
    cursor: Option<Pos>,
}

fn paint(view: &mut PropertyGridView<'_>, w: u16, h: u16) -> Frame {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let theme = Theme::default();
    let area = Rect::new(0, 0, w, h);
    {
        let mut ui = Ui::new(area, &mut painter, &mut tree, &theme);
        view.ui(&mut ui);
    }
    let mut backend = TestBackend::new(w, h);
    backend.draw(area, painter.cmds());
    Frame {
        buf: backend.buffer().clone(),
        tree,
        cursor: view.cursor,
    }
}

fn symbol(buf: &TestBuffer, x: u16, y: u16) -> &str {
    buf.cell(x, y).map(|c| c.symbol.as_str()).unwrap_or("")
}

#[test]
fn rows_render_headers_labels_and_controls() {
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());
    let frame = paint(&mut PropertyGridView::new(&rendered), 50, 12);
    let buf = &frame.buf;

    assert_eq!(buf.row_text(0), "▾ Camera");
    assert_eq!(buf.row_text(1), format!("{:<21}[x]", "  Enabled"));
    assert_eq!(symbol(buf, 21, 2), "2");
    assert_eq!(symbol(buf, 35, 2), "–");
    assert_eq!(symbol(buf, 37, 2), "9");
    assert_eq!(buf.row_text(3), format!("{:<21}Filmic ▾", "  Tone"));
    assert_eq!(buf.row_text(5), format!("{:<21}Unsupported", "  Focal"));
    assert_eq!(buf.row_text(6), "  ▸ Exposure");
    assert_eq!(buf.row_text(7), "▾ Locked");
    assert_eq!(buf.row_text(8), format!("{:<21}cam", "  Name"));
    assert_eq!(buf.row_text(9), "");
}

#[test]
fn slider_pairs_draw_a_track_with_two_handles() {
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());
    let frame = paint(&mut PropertyGridView::new(&rendered), 50, 12);

    let row = frame.buf.row_text(4);
    assert!(row.contains("2 ─"));
    assert!(row.ends_with("─ 8"));
    assert_eq!(row.matches('●').count(), 2);
    // Track is 25 columns; 2 and 8 of 0..10 land on columns 5 and 19.
    assert_eq!(symbol(&frame.buf, 28, 4), "●");
    assert_eq!(symbol(&frame.buf, 42, 4), "●");
    assert_eq!(symbol(&frame.buf, 30, 4), "━");
}

#[test]
fn disabled_and_unsupported_rows_are_muted() {
    let theme = Theme::default();
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());
    let frame = paint(&mut PropertyGridView::new(&rendered), 50, 12);

    let muted = Some(theme.muted_fg);
    assert_eq!(frame.buf.cell(2, 8).unwrap().style.fg, muted);
    assert_eq!(frame.buf.cell(21, 8).unwrap().style.fg, muted);
    assert_eq!(frame.buf.cell(0, 7).unwrap().style.fg, muted);
    assert_eq!(frame.buf.cell(21, 5).unwrap().style.fg, muted);
    assert_eq!(frame.buf.cell(0, 0).unwrap().style.fg, Some(theme.header_fg));
    assert_eq!(frame.buf.cell(2, 1).unwrap().style.fg, Some(theme.label_fg));
}

#[test]
fn validation_errors_take_a_second_line() {
    let mut grid = PropertyGrid::new(schema());
    let mut obj = object();
    let rendered = grid.render(&obj);
    let fov = rendered.find_field("Camera", "fov").unwrap().clone();
    grid.edit(
        &fov,
        Edit::PairComponent { index: 0, input: "200".into() },
        &mut obj,
        &mut |_| {},
    );

    let rendered = grid.render(&obj);
    let frame = paint(&mut PropertyGridView::new(&rendered), 50, 12);
    assert_eq!(frame.buf.row_text(3), format!("{:<21}Min must be ≤ Max", ""));
    assert_eq!(frame.buf.cell(21, 3).unwrap().style.fg, Some(Theme::default().error_fg));
    assert_eq!(frame.buf.find_row("Tone"), Some(4));
}

#[test]
fn focused_row_is_highlighted() {
    let theme = Theme::default();
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());
    let mut view = PropertyGridView::new(&rendered);
    view.focus = Some(3);
    let frame = paint(&mut view, 50, 12);

    for x in [0, 10, 49] {
        assert_eq!(frame.buf.cell(x, 3).unwrap().style.bg, Some(theme.focus_bg));
    }
    assert_ne!(frame.buf.cell(0, 2).unwrap().style.bg, Some(theme.focus_bg));
}

#[test]
fn typed_input_replaces_the_active_slot_and_places_the_cursor() {
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());
    let mut view = PropertyGridView::new(&rendered);
    view.focus = Some(2);
    view.slot = 1;
    view.input = Some("12");
    let frame = paint(&mut view, 50, 12);

    assert_eq!(symbol(&frame.buf, 21, 2), "2");
    assert_eq!(symbol(&frame.buf, 37, 2), "1");
    assert_eq!(symbol(&frame.buf, 38, 2), "2");
    assert_eq!(frame.cursor, Some(Pos::new(39, 2)));
}

#[test]
fn input_is_not_shown_on_unfocused_rows() {
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());
    let mut view = PropertyGridView::new(&rendered);
    view.focus = Some(1);
    view.input = Some("12");
    let frame = paint(&mut view, 50, 12);

    assert_eq!(frame.buf.row_text(8), format!("{:<21}cam", "  Name"));
    assert_eq!(frame.cursor, None);
}

#[test]
fn hit_nodes_cover_headers_toggles_and_slots() {
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());
    let frame = paint(&mut PropertyGridView::new(&rendered), 50, 12);

    let kind = |x, y| frame.tree.hit_test(Pos::new(x, y)).map(|n| n.kind.clone());
    assert_eq!(kind(5, 0), Some(NodeKind::SectionHeader { row: 0 }));
    assert_eq!(kind(22, 1), Some(NodeKind::Toggle { row: 1 }));
    assert_eq!(kind(30, 1), Some(NodeKind::FieldRow { row: 1 }));
    assert_eq!(kind(21, 2), Some(NodeKind::PairSlot { row: 2, slot: 0 }));
    assert_eq!(kind(40, 2), Some(NodeKind::PairSlot { row: 2, slot: 1 }));
    assert_eq!(kind(5, 6), Some(NodeKind::SectionHeader { row: 6 }));
    assert_eq!(kind(5, 10), None);
}

#[test]
fn scrolling_keeps_the_focused_row_visible() {
    let mut grid = PropertyGrid::new(schema());
    let rendered = grid.render(&object());

    assert_eq!(scroll_to_focus(&rendered, 8, 0, 3), 6);
    assert_eq!(scroll_to_focus(&rendered, 2, 6, 3), 2);
    assert_eq!(scroll_to_focus(&rendered, 4, 2, 3), 2);

    let mut view = PropertyGridView::new(&rendered);
    view.scroll = 6;
    let frame = paint(&mut view, 50, 3);
    assert_eq!(frame.buf.row_text(0), "  ▸ Exposure");
    assert_eq!(frame.buf.row_text(2), format!("{:<21}cam", "  Name"));
    assert!(frame
        .tree
        .nodes()
        .iter()
        .all(|n| !matches!(n.kind, NodeKind::SectionHeader { row: 0 })));
}

#[test]
fn error_lines_count_toward_scrolling() {
    let mut grid = PropertyGrid::new(schema());
    let mut obj = object();
    let rendered = grid.render(&obj);
    let fov = rendered.find_field("Camera", "fov").unwrap().clone();
    grid.edit(
        &fov,
        Edit::PairComponent { index: 1, input: "0".into() },
        &mut obj,
        &mut |_| {},
    );
    let rendered = grid.render(&obj);

    assert_eq!(row_height(&rendered.rows()[2]), 2);
    assert_eq!(scroll_to_focus(&rendered, 2, 0, 2), 2);
    assert_eq!(scroll_to_focus(&rendered, 3, 0, 4), 1);
}
