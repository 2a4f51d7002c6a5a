use pretty_assertions::assert_eq;
use quickbeam::*;

// Helper building the worked example:
// Branch("a", Branch("b", Leaf, Leaf), Branch("c", Leaf, Branch("d", Leaf, Leaf)))
fn example() -> Tree<&'static str> {
    Tree::branch(
        "a",
        Tree::branch("b", Tree::leaf(), Tree::leaf()),
        Tree::branch(
            "c",
            Tree::leaf(),
            Tree::branch("d", Tree::leaf(), Tree::leaf()),
        ),
    )
}

// Helper collecting (value, id) pairs in post-order.
fn labels<T: Copy>(annotated: &Annotated<T>) -> Vec<(T, NodeId)> {
    annotated.iter_post().map(|(v, id)| (*v, *id)).collect()
}

// A full binary tree of the given depth.
fn full(depth: usize) -> Tree<usize> {
    if depth == 0 {
        Tree::leaf()
    } else {
        Tree::branch(depth, full(depth - 1), full(depth - 1))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// The Worked Example
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_example_ids() {
    let (annotated, next) = example().annotate(0);

    assert_eq!(next, 4);
    assert_eq!(
        labels(&annotated),
        vec![("b", 0), ("d", 1), ("c", 2), ("a", 3)]
    );
}

#[test]
fn test_lone_leaf_unchanged() {
    let (annotated, next) = Tree::<&str>::leaf().annotate(5);

    assert_eq!(annotated, Tree::Leaf);
    assert_eq!(next, 5);
}

// ═══════════════════════════════════════════════════════════════════════
// Invariants
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_ids_are_contiguous_from_start() {
    for start in [0u64, 1, 7, 100] {
        let (annotated, next) = full(4).annotate(start);
        let n = full(4).len() as u64;

        assert_eq!(next, start + n);
        let mut ids = annotated.ids();
        ids.sort_unstable();
        assert_eq!(ids, (start..start + n).collect::<Vec<_>>());
    }
}

#[test]
fn test_left_ids_below_right_ids_below_own() {
    fn check(tree: &Annotated<usize>) {
        if let Some((left, right)) = tree.children() {
            let own = tree.value().map(|(_, id)| *id).unwrap_or(0);
            let left_ids = left.ids();
            let right_ids = right.ids();
            for l in &left_ids {
                for r in &right_ids {
                    assert!(l < r);
                }
            }
            for id in left_ids.iter().chain(&right_ids) {
                assert!(*id < own);
            }
            check(left);
            check(right);
        }
    }

    let (annotated, _) = full(5).annotate(0);
    check(&annotated);
}

#[test]
fn test_shape_preserved() {
    let tree = example();
    let (annotated, _) = tree.annotate(0);
    assert!(tree.same_shape(&annotated));
}

#[test]
fn test_deterministic() {
    let (a, next_a) = example().annotate(2);
    let (b, next_b) = example().annotate(2);
    assert_eq!(a, b);
    assert_eq!(next_a, next_b);
}

#[test]
fn test_strip_recovers_original() {
    let tree = example();
    let (annotated, _) = tree.annotate(0);
    assert_eq!(annotated.strip(), tree);
}

#[test]
fn test_verify_fresh_annotations() {
    let (annotated, _) = full(6).annotate(9);
    assert!(annotated.verify(9).is_ok());
}

// ═══════════════════════════════════════════════════════════════════════
// Composability
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_threading_next_id_across_trees() {
    let first = Tree::branch(1, Tree::leaf(), Tree::leaf());
    let second = example();

    let (a, mid) = first.annotate(0);
    let (b, end) = second.annotate(mid);

    assert_eq!(mid, 1);
    assert_eq!(end, 5);

    let mut all: Vec<NodeId> = a.ids();
    all.extend(b.ids());
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_into_annotated_matches_borrowed() {
    let (by_ref, next_ref) = example().annotate(0);
    let (by_move, next_move) = example().into_annotated(0);
    assert_eq!(by_ref, by_move);
    assert_eq!(next_ref, next_move);
}

// ═══════════════════════════════════════════════════════════════════════
// Fallible Annotation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_try_annotate_matches_plain() {
    let ctx = AnnotateContext::new();
    let (fallible, next) = example().try_annotate(0, &ctx).unwrap();
    let (plain, plain_next) = example().annotate(0);
    assert_eq!(fallible, plain);
    assert_eq!(next, plain_next);
}

#[test]
fn test_try_annotate_depth_limit() {
    let ctx = AnnotateContext::with_max_depth(3);
    let result = full(10).try_annotate(0, &ctx);
    assert!(matches!(
        result,
        Err(AnnotateError::DepthLimitExceeded { max_depth: 3, .. })
    ));
}

#[test]
fn test_try_annotate_at_exact_depth() {
    let ctx = AnnotateContext::with_max_depth(4);
    assert!(full(4).try_annotate(0, &ctx).is_ok());
}

#[test]
fn test_try_annotate_interrupted() {
    let ctx = AnnotateContext::new();
    ctx.interrupt();
    assert_eq!(
        example().try_annotate(0, &ctx),
        Err(AnnotateError::Interrupted)
    );

    ctx.reset_interrupt();
    assert!(example().try_annotate(0, &ctx).is_ok());
}

// ═══════════════════════════════════════════════════════════════════════
// Path Labelling
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_paths_of_example() {
    let labelled = example().annotate_paths();
    let paths: Vec<(&str, String)> = labelled
        .iter_post()
        .map(|(v, p)| (*v, p.to_string()))
        .collect();

    assert_eq!(
        paths,
        vec![
            ("b", "l".to_string()),
            ("d", "rr".to_string()),
            ("c", "r".to_string()),
            ("a", String::new()),
        ]
    );
}

#[test]
fn test_path_depth_matches_turn_count() {
    let labelled = example().annotate_paths();
    for (_, path) in labelled.iter_post() {
        assert_eq!(path.depth(), path.turns().len());
        assert_eq!(path.depth(), path.to_string().len());
    }
}
