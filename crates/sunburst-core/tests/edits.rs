// File: crates/sunburst-core/tests/edits.rs
// Purpose: Edit controls end to end: dropdowns, value updates, new categories, config and data files.

use std::io::Write;

use sunburst_core::{ChartConfig, Node, Sunburst, SunburstError};

fn sample() -> Sunburst {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/hierarchy_data.json");
    Sunburst::load(path, ChartConfig::default()).expect("load sample")
}

fn assert_arcs_close(a: &[sunburst_core::ArcRect], b: &[sunburst_core::ArcRect]) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        let d = (p.x0 - q.x0).abs() + (p.x1 - q.x1).abs() + (p.y0 - q.y0).abs() + (p.y1 - q.y1).abs();
        assert!(d < 1e-9, "{p:?} != {q:?}");
    }
}

#[test]
fn update_changes_aggregates_and_zooms_to_root() {
    let mut chart = sample();
    let tech = chart.hierarchy().find_by_name("Technology").unwrap();
    chart.click(tech);
    chart.finish_animation();

    assert_eq!(chart.leaf_value("Copiers"), Some(150000.0));
    chart.update_leaf("Copiers", "1150000").expect("update");
    assert_eq!(chart.focus(), chart.hierarchy().root());
    chart.finish_animation();

    assert_eq!(chart.hierarchy().node(tech).value, 1_836_000.0);
    // Copiers is now the largest technology item.
    let first = chart.hierarchy().node(tech).children[0];
    assert_eq!(chart.hierarchy().node(first).name, "Copiers");
    assert_arcs_close(chart.zoom_state().current(), chart.layout());
}

#[test]
fn add_category_refreshes_dropdowns() {
    let mut chart = sample();
    let before = chart.leaf_options().len();
    chart.add_category("Services", "Consulting", "50000").expect("add");
    chart.finish_animation();
    assert_eq!(chart.leaf_options().len(), before + 1);
    assert_eq!(chart.focus(), chart.hierarchy().find_by_name("Services").unwrap());
    assert_eq!(chart.data().find("Consulting").and_then(|n| n.value), Some(50000.0));

    let err = chart.add_category("Services", "Consulting", "1").unwrap_err();
    assert_eq!(err.to_string(), "Category already exists");
    assert!(err.is_user_input());
    let err = chart.add_category("Nowhere", "X", "1").unwrap_err();
    assert_eq!(err.to_string(), "Parent category not found");
    let err = chart.add_category("Services", "", "").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a category name and value");
}

#[test]
fn adding_under_a_leaf_promotes_it() {
    let mut chart = sample();
    chart.add_category("Paper", "Recycled", "5").expect("add");
    let paper = chart.hierarchy().find_by_name("Paper").unwrap();
    assert_eq!(chart.hierarchy().node(paper).value, 5.0);
    assert!(chart.parent_options().contains(&"Paper".to_string()));
    assert!(!chart.leaf_options().contains(&"Paper".to_string()));
}

#[test]
fn loads_config_and_data_files() {
    let mut cfg_file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(cfg_file, "width = 400\ntitle = \"Revenue\"\n[tooltip]\ncurrency = \"$\"").unwrap();
    let cfg = ChartConfig::load(cfg_file.path()).expect("config");

    let mut data_file = tempfile::NamedTempFile::new().expect("tempfile");
    let data = Node::branch("Revenue", vec![Node::leaf("North", 10.0), Node::leaf("South", 30.0)]);
    write!(data_file, "{}", data.to_json_string().unwrap()).unwrap();

    let chart = Sunburst::load(data_file.path(), cfg).expect("chart");
    assert_eq!(chart.scene().radius, 200.0);
    assert!(chart.render_svg().contains("Revenue"));
    let south = chart.hierarchy().find_by_name("South").unwrap();
    assert!(chart.hover(south).unwrap().to_text(&chart.config().tooltip).contains("$30"));
}

#[test]
fn rejects_invalid_input_files() {
    assert!(matches!(Sunburst::from_json_str("{", ChartConfig::default()), Err(SunburstError::Json(_))));
    let bad = r#"{"name":"R","children":[{"name":"A","value":-1}]}"#;
    assert!(matches!(Sunburst::from_json_str(bad, ChartConfig::default()), Err(SunburstError::Validation { .. })));
    assert!(matches!(
        Sunburst::load("/definitely/missing.json", ChartConfig::default()),
        Err(SunburstError::Io(_))
    ));
}
