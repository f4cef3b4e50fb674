use othello6_core::perft::perft_root;

#[test]
fn test_perft_opening() {
    assert_eq!(perft_root(1), 4);
    assert_eq!(perft_root(2), 12);
    assert_eq!(perft_root(3), 56);
}

#[test]
fn test_perft() {
    let nodes = perft_root(7);
    assert_eq!(nodes, 47_740);
}
