use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.style_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.hline(Pos::new(0, 0), 3, '─', Style::default());
    p.text(Pos::new(0, 0), "hi", Style::default());
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Plain);
    assert_eq!(p.cmds().len(), 5);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn text_in_anchors_at_the_clip_origin() {
    let mut p = Painter::new();
    let clip = Rect::new(4, 2, 6, 1);
    p.text_in(clip, "Width", Style::default());
    assert_eq!(
        p.cmds()[0],
        PaintCmd::Text {
            pos: Pos::new(4, 2),
            text: "Width".to_string(),
            style: Style::default(),
            clip: Some(clip),
        }
    );
}

#[test]
fn empty_text_is_not_recorded() {
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "", Style::default());
    p.text_in(Rect::new(0, 0, 4, 1), String::new(), Style::default());
    assert!(p.cmds().is_empty());
}
