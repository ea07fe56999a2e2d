use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2);
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));
    assert!(!r.contains(Pos::new(9, 20)));
}

#[test]
fn empty_rects_never_contain() {
    assert!(!Rect::new(0, 0, 0, 10).contains(Pos::new(0, 0)));
    assert!(!Rect::new(0, 0, 10, 0).contains(Pos::new(0, 0)));
}

#[test]
fn line_walks_rows_and_empties_past_the_bottom() {
    let r = Rect::new(2, 4, 10, 3);
    assert_eq!(r.line(0), Rect::new(2, 4, 10, 1));
    assert_eq!(r.line(2), Rect::new(2, 6, 10, 1));
    assert!(r.line(3).is_empty());
}

#[test]
fn inset_shrinks_and_saturates() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.inset(Insets::all(1)), Rect::new(1, 1, 8, 3));
    assert_eq!(r.inset(Insets::left(4)), Rect::new(4, 0, 6, 5));
    assert_eq!(Rect::new(0, 0, 2, 2).inset(Insets::all(3)), Rect::new(3, 3, 0, 0));
}

#[test]
fn intersect_returns_overlap_or_empty() {
    let a = Rect::new(0, 0, 5, 5);
    assert_eq!(a.intersect(Rect::new(3, 3, 5, 5)), Rect::new(3, 3, 2, 2));
    assert!(a.intersect(Rect::new(5, 5, 2, 2)).is_empty());
}

#[test]
fn label_control_split_is_forty_sixty() {
    let row = Rect::new(0, 0, 50, 1);
    let (label, control) = row.split_percent(40);
    assert_eq!(label, Rect::new(0, 0, 20, 1));
    assert_eq!(control, Rect::new(20, 0, 30, 1));
}

#[test]
fn split_bottom_reserves_status_line() {
    let (rest, bottom) = Rect::new(0, 0, 10, 5).split_bottom(1);
    assert_eq!(rest, Rect::new(0, 0, 10, 4));
    assert_eq!(bottom, Rect::new(0, 4, 10, 1));
}
