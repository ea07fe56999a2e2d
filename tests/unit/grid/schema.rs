use super::*;
use crate::grid::field::FieldKind;

#[test]
fn fields_keep_insertion_order() {
    let section = Section::new("Scene")
        .field("name", Field::text("Name"))
        .field("fullscreen", Field::boolean("Fullscreen"))
        .field("quality", Field::number("Quality"));
    let keys: Vec<&str> = section.fields().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["name", "fullscreen", "quality"]);
}

#[test]
fn re_adding_a_key_replaces_in_place() {
    let section = Section::new("Scene")
        .field("a", Field::text("A"))
        .field("b", Field::text("B"))
        .field("a", Field::boolean("A2"));
    assert_eq!(section.field_count(), 2);
    let (key, field) = section.fields().next().unwrap();
    assert_eq!(key, "a");
    assert_eq!(field.kind, FieldKind::Boolean);
}

#[test]
fn section_at_walks_index_paths() {
    let schema = Schema::from(vec![
        Section::new("Scene"),
        Section::new("Camera")
            .child(Section::new("Exposure"))
            .child(Section::new("Lens").child(Section::new("Advanced"))),
    ]);
    assert_eq!(schema.section_at(&[0]).unwrap().title, "Scene");
    assert_eq!(schema.section_at(&[1, 1]).unwrap().title, "Lens");
    assert_eq!(schema.section_at(&[1, 1, 0]).unwrap().title, "Advanced");
    assert!(schema.section_at(&[1, 2]).is_none());
    assert!(schema.section_at(&[]).is_none());
}

#[test]
fn single_root_is_a_one_element_sequence() {
    let schema = Schema::from(Section::new("Scene"));
    assert_eq!(schema.roots().len(), 1);
    assert!(!schema.is_empty());
    assert!(Schema::default().is_empty());
}
