use super::*;
use serde_json::Value;

const CORPUS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/corpus.json"
));

fn corpus() -> GraphStore {
    GraphStore::from_json_str(CORPUS).unwrap()
}

fn chapter_start(layout: &ComposedLayout<'_>, chapter: u64) -> (i64, i64) {
    let root = &layout.chapter(chapter).unwrap().nodes[0];
    (root.x, root.y)
}

#[test]
fn test_compose_all_chapters_side_by_side() {
    let store = corpus();
    let composed = compose_all(&store, None, &LayoutConfig::default()).unwrap();
    assert_eq!(composed.chapters.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(chapter_start(&composed, 1), (0, 0));
    // Chapter 1 reaches x=100; the next starts one gap further right.
    assert_eq!(chapter_start(&composed, 2), (200, 0));
    assert_eq!(composed.chapter(2).unwrap().max_x, 300);
    assert_eq!(composed.max_x, 300);
}

#[test]
fn test_compose_chapters_never_overlap() {
    let store = corpus();
    let composed = compose_all(&store, None, &LayoutConfig::default()).unwrap();
    let one = composed.chapter(1).unwrap();
    let two = composed.chapter(2).unwrap();
    let two_min_x = two.nodes.iter().map(|n| n.x).min().unwrap();
    assert!(two_min_x > one.max_x);
}

#[test]
fn test_compose_respects_exclusions() {
    let store = corpus();
    let mut config = LayoutConfig::default();
    config.excluded_chapters.insert(1);
    let composed = compose_all(&store, None, &config).unwrap();
    assert!(composed.chapter(1).is_none());
    assert_eq!(chapter_start(&composed, 2), (0, 0));
}

#[test]
fn test_compose_explicit_subset() {
    let store = corpus();
    let composed = compose_all(&store, Some(&[2][..]), &LayoutConfig::default()).unwrap();
    assert_eq!(composed.chapters.len(), 1);
    assert_eq!(chapter_start(&composed, 2), (0, 0));
}

#[test]
fn test_compose_subset_is_laid_out_in_ascending_order() {
    let store = corpus();
    let config = LayoutConfig::default();
    let given = compose_all(&store, Some(&[2, 1, 2][..]), &config).unwrap();
    let all = compose_all(&store, None, &config).unwrap();
    assert_eq!(given, all);
}

#[test]
fn test_compose_custom_gap_and_origin() {
    let store = corpus();
    let config = LayoutConfig {
        gap: 30,
        start_x: 5,
        start_y: 7,
        ..LayoutConfig::default()
    };
    let composed = compose_all(&store, None, &config).unwrap();
    assert_eq!(chapter_start(&composed, 1), (5, 7));
    assert_eq!(chapter_start(&composed, 2), (135, 7));
}

#[test]
fn test_compose_empty_store() {
    let store = GraphStore::default();
    let composed = compose_all(&store, None, &LayoutConfig::default()).unwrap();
    assert!(composed.chapters.is_empty());
    assert_eq!(composed.bounds(), None);
}

#[test]
fn test_bounds_ignore_placeholders() {
    let store = corpus();
    let composed = compose_all(&store, None, &LayoutConfig::default()).unwrap();
    let bounds = composed.bounds().unwrap();
    assert_eq!(
        bounds,
        Bounds {
            min_x: 0,
            min_y: 0,
            max_x: 300,
            // 1.9 sits at y=550 but is a placeholder; 1.721 is the lowest real node.
            max_y: 450,
        }
    );
}

#[test]
fn test_composed_json_shape() {
    let store = corpus();
    let composed = compose_all(&store, None, &LayoutConfig::default()).unwrap();
    let value = serde_json::to_value(&composed).unwrap();

    let chapter_one = value["1"].as_array().unwrap();
    assert_eq!(chapter_one.len(), 14);
    assert_eq!(value["2"].as_array().unwrap().len(), 16);

    let root = &chapter_one[0];
    assert_eq!(root["id"], "1");
    assert_eq!(root["x"], 0);
    assert_eq!(root["y"], 0);
    assert_eq!(root["rootNode"], false);
    assert_eq!(root["properties"]["number"], "1");
    assert_eq!(root["properties"]["isPlaceholder"], false);
    assert_eq!(root["properties"]["type"], "Definition");

    let placeholder = &chapter_one[3];
    assert_eq!(placeholder["properties"]["number"], "1.2");
    assert_eq!(placeholder["properties"]["isPlaceholder"], true);
    assert_eq!(placeholder["rootNode"], true);
    assert_eq!(placeholder.get("id"), None::<&Value>);
    assert_eq!(placeholder.get("proves"), None::<&Value>);

    let proven = chapter_one
        .iter()
        .find(|n| n["properties"]["number"] == "1.71")
        .unwrap();
    assert_eq!(proven["proves"], serde_json::json!(["1.0"]));
    assert_eq!(proven["provenBy"], serde_json::json!(["1.72"]));
}

#[test]
fn test_compose_rejects_negative_gap() {
    let store = corpus();
    let config = LayoutConfig {
        gap: -10,
        ..LayoutConfig::default()
    };
    let err = compose_all(&store, None, &config).unwrap_err();
    assert!(matches!(err, ProofMapError::InvalidConfig { field: "gap", .. }));
}

#[test]
fn test_compose_gap_overflow_is_an_error() {
    let store = corpus();
    let config = LayoutConfig {
        gap: i64::MAX,
        ..LayoutConfig::default()
    };
    let err = compose_all(&store, None, &config).unwrap_err();
    assert!(matches!(err, ProofMapError::CoordinateOverflow { .. }));
}
