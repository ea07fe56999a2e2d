use super::*;
use serde_json::json;

#[test]
fn toggle_uses_truthiness() {
    let field = Field::boolean("Fullscreen");
    assert_eq!(build_control(&field, &json!(true)), Control::Toggle { on: true });
    assert_eq!(build_control(&field, &Value::Null), Control::Toggle { on: false });
}

#[test]
fn number_box_shows_empty_for_missing_values() {
    let field = Field::number("Width");
    assert_eq!(
        build_control(&field, &Value::Null),
        Control::Number { text: String::new() }
    );
    assert_eq!(
        build_control(&field, &json!(1920)),
        Control::Number { text: "1920".to_string() }
    );
}

#[test]
fn number_edits_coerce_at_commit_time() {
    let field = Field::number("Width");
    let cur = json!(1);
    assert_eq!(ui_value_for(&field, &cur, Edit::Number("640".into())), Some(json!(640)));
    assert_eq!(ui_value_for(&field, &cur, Edit::Number(String::new())), Some(json!("")));
    assert_eq!(ui_value_for(&field, &cur, Edit::Number("-".into())), None);
}

#[test]
fn select_marks_the_matching_option() {
    let field = Field::single_choice(
        "Quality",
        [
            json!({ "value": 0, "label": "Low" }),
            json!({ "value": 1, "label": "Medium" }),
            json!({ "value": 2, "label": "High" }),
        ],
    );
    let control = build_control(&field, &json!(1));
    assert_eq!(control.summary(), "Medium");
    assert_eq!(control.cycled_choice(1), Some(2));
    assert_eq!(control.cycled_choice(2), Some(0));
    assert_eq!(ui_value_for(&field, &json!(1), Edit::Choose(2)), Some(json!(2)));
    assert_eq!(ui_value_for(&field, &json!(1), Edit::Choose(7)), None);
}

#[test]
fn select_without_match_cycles_from_the_ends() {
    let field = Field::single_choice("Op", ["ACES", "Reinhard", "Filmic"]);
    let control = build_control(&field, &Value::Null);
    assert_eq!(control, Control::Select { options: field.options.clone(), selected: None });
    assert_eq!(control.cycled_choice(1), Some(0));
    assert_eq!(control.cycled_choice(-1), Some(2));
}

#[test]
fn multi_select_defaults_to_empty_and_commits_full_sets() {
    let field = Field::multi_choice("Tags", ["a", "b", "c"]);
    let control = build_control(&field, &json!([]));
    assert_eq!(control.summary(), "");

    let next = control.toggled_selection(1).unwrap();
    assert_eq!(next, vec![json!("b")]);
    assert_eq!(
        ui_value_for(&field, &json!([]), Edit::ChooseMany(next)),
        Some(json!(["b"]))
    );

    let missing = build_control(&field, &Value::Null);
    assert_eq!(missing, Control::MultiSelect { options: field.options.clone(), selected: vec![] });
}

#[test]
fn multi_select_toggle_removes_and_dedupes() {
    let field = Field::multi_choice("Tags", ["a", "b", "c"]);
    let control = build_control(&field, &json!(["c", "a", "c"]));
    assert_eq!(control.toggled_selection(0).unwrap(), vec![json!("c")]);
    assert_eq!(
        control.toggled_selection(1).unwrap(),
        vec![json!("c"), json!("a"), json!("b")]
    );
    assert_eq!(
        ui_value_for(&field, &Value::Null, Edit::ChooseMany(vec![json!("a"), json!("a")])),
        Some(json!(["a"]))
    );
}

#[test]
fn value_pair_repairs_shapes() {
    let bounds = Bounds::new(1.0, 170.0);
    assert_eq!(normalize_value_pair(&Value::Null, &bounds), [json!(1), json!(170)]);
    assert_eq!(normalize_value_pair(&json!([45, 90]), &bounds), [json!(45), json!(90)]);
    assert_eq!(
        normalize_value_pair(&json!({ "min": 3, "max": 4 }), &bounds),
        [json!(3), json!(4)]
    );
    assert_eq!(normalize_value_pair(&json!([1, 2, 3]), &bounds), [json!(1), json!(170)]);
    assert_eq!(normalize_value_pair(&json!({ "min": 3 }), &bounds), [json!(1), json!(170)]);
}

#[test]
fn value_pair_component_rewrites_the_whole_pair() {
    let field = Field::value_pair("FOV", 1.0, 170.0);
    assert_eq!(
        ui_value_for(
            &field,
            &Value::Null,
            Edit::PairComponent { index: 0, input: "200".into() }
        ),
        Some(json!([200, 170]))
    );
    assert_eq!(
        ui_value_for(
            &field,
            &json!([45, 90]),
            Edit::PairComponent { index: 1, input: String::new() }
        ),
        Some(json!([45, ""]))
    );
    assert_eq!(
        ui_value_for(&field, &json!([45, 90]), Edit::PairComponent { index: 2, input: "1".into() }),
        None
    );
}

#[test]
fn slider_requires_two_numbers() {
    let bounds = Bounds::new(0.0, 5.0);
    assert_eq!(normalize_slider_pair(&json!([0, 3]), &bounds), [0.0, 3.0]);
    assert_eq!(normalize_slider_pair(&json!([0, "x"]), &bounds), [0.0, 5.0]);
    assert_eq!(normalize_slider_pair(&json!([1]), &bounds), [0.0, 5.0]);
    assert_eq!(normalize_slider_pair(&json!({ "min": 1, "max": 2 }), &bounds), [0.0, 5.0]);
}

#[test]
fn slider_nudges_stay_inside_bounds_and_ordered() {
    let bounds = Bounds::new(0.0, 5.0);
    assert_eq!(nudge_slider([0.0, 3.0], 1, 1, &bounds), [0.0, 4.0]);
    assert_eq!(nudge_slider([0.0, 5.0], 1, 1, &bounds), [0.0, 5.0]);
    assert_eq!(nudge_slider([2.0, 3.0], 0, 4, &bounds), [3.0, 3.0]);
    assert_eq!(nudge_slider([2.0, 3.0], 1, -4, &bounds), [2.0, 2.0]);

    let fine = Bounds::new(0.0, 1.0).with_step(0.01);
    assert_eq!(nudge_slider([0.2, 0.8], 0, 1, &fine), [0.21, 0.8]);
}

#[test]
fn slider_range_commits_both_ends() {
    let field = Field::slider_pair("LOD", 0.0, 5.0);
    assert_eq!(
        ui_value_for(&field, &Value::Null, Edit::SliderRange([1.0, 4.0])),
        Some(json!([1, 4]))
    );
}

#[test]
fn unknown_kind_is_a_placeholder_that_never_commits() {
    let field = Field::new(FieldKind::Unknown("numberSlider".into()), "Focal");
    let control = build_control(&field, &json!(35));
    assert_eq!(control, Control::Unsupported { tag: "numberSlider".into() });
    assert!(!control.is_supported());
    assert_eq!(ui_value_for(&field, &json!(35), Edit::Number("1".into())), None);
}

#[test]
fn mismatched_edits_are_ignored() {
    let field = Field::boolean("Fullscreen");
    assert_eq!(ui_value_for(&field, &json!(true), Edit::Text("x".into())), None);
}
