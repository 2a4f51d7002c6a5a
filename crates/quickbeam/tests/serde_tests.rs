#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use quickbeam::*;

fn example() -> Tree<String> {
    Tree::branch(
        "a".to_string(),
        Tree::branch("b".to_string(), Tree::leaf(), Tree::leaf()),
        Tree::leaf(),
    )
}

#[test]
fn test_tree_json_round_trip() {
    let tree = example();
    let json = serde_json::to_string(&tree).unwrap();
    let back: Tree<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_leaf_serializes_as_unit_variant() {
    let json = serde_json::to_string(&Tree::<u8>::leaf()).unwrap();
    assert_eq!(json, "\"Leaf\"");
}

#[test]
fn test_annotated_tree_round_trip() {
    let (annotated, _) = example().annotate(0);
    let json = serde_json::to_string(&annotated).unwrap();
    let back: Annotated<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, annotated);
}

#[test]
fn test_arena_round_trip() {
    let arena = ArenaTree::from(example());
    let json = serde_json::to_string(&arena).unwrap();
    let back: ArenaTree<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, arena);
    assert_eq!(back.to_tree().unwrap(), example());
}

#[test]
fn test_tree_path_round_trip() {
    let labelled = example().annotate_paths();
    let (_, path) = labelled.children().unwrap().0.value().unwrap();
    let json = serde_json::to_string(path).unwrap();
    let back: TreePath = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, path);
}
