use super::*;
use crate::corpus::{Placeholder, ProofNode};

fn real(number: &str) -> ProofNode {
    ProofNode::new("n", Properties::new(Number::parse(number).unwrap()))
}

fn placeholder(number: &str) -> ChapterEntry<'static> {
    ChapterEntry::Placeholder(Placeholder::new(Number::parse(number).unwrap()))
}

#[test]
fn test_point_new() {
    let p = Point::new(3, 7);
    assert_eq!(p.x, 3);
    assert_eq!(p.y, 7);
    assert_eq!(Point::default(), Point::new(0, 0));
}

#[test]
fn test_point_serde() {
    let p: Point = serde_json::from_str(r#"{"x": 8350, "y": 150}"#).unwrap();
    assert_eq!(p, Point::new(8350, 150));
}

#[test]
fn test_placed_node_new() {
    let node = real("2.52");
    let placed = PlacedNode::new(ChapterEntry::Node(&node), Point::new(50, 300));
    assert_eq!(placed.position(), Point::new(50, 300));
    assert_eq!(placed.depth(), 2);
    assert!(!placed.root_node);
    assert!(!placed.is_placeholder());
}

#[test]
fn test_bounds_of_drawable_nodes() {
    let a = real("1.1");
    let b = real("1.11");
    let nodes = vec![
        PlacedNode::new(ChapterEntry::Node(&a), Point::new(0, 100)),
        PlacedNode::new(ChapterEntry::Node(&b), Point::new(50, 100)),
        PlacedNode::new(placeholder("1.9"), Point::new(-20, 900)),
    ];
    let bounds = Bounds::of(&nodes).unwrap();
    assert_eq!(
        bounds,
        Bounds {
            min_x: 0,
            min_y: 100,
            max_x: 50,
            max_y: 100
        }
    );
    assert_eq!(bounds.width(), 50);
    assert_eq!(bounds.height(), 0);
}

#[test]
fn test_bounds_of_placeholders_only() {
    let nodes = vec![PlacedNode::new(placeholder("1.0"), Point::new(0, 50))];
    assert_eq!(Bounds::of(&nodes), None);
}

#[test]
fn test_chapter_layout_lookup() {
    let a = real("1.1");
    let layout = ChapterLayout {
        nodes: vec![
            PlacedNode::new(ChapterEntry::Node(&a), Point::new(0, 100)),
            PlacedNode::new(placeholder("1.2"), Point::new(0, 150)),
        ],
        max_x: 0,
        max_y: 150,
    };
    assert_eq!(layout.get("1.2").unwrap().y, 150);
    assert!(layout.get("1.3").is_none());
    assert_eq!(layout.drawable().count(), 1);
}
