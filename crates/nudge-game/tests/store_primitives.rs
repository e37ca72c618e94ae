use nudge_core::Player;
use nudge_game::{canonical_hash, Game};

fn diamond() -> Game {
    Game::from_edges(
        &[Player::Even, Player::Odd, Player::Even, Player::Odd],
        &[(0, 1), (1, 2), (2, 0), (2, 3)],
    )
    .unwrap()
}

#[test]
fn add_edge_inserts_both_directions_once() {
    let mut game = Game::with_nodes(3);
    assert!(game.add_edge(0, 2).unwrap());
    assert_eq!(game.successors(0).unwrap(), &[2]);
    assert_eq!(game.predecessors(2).unwrap(), &[0]);
    assert!(!game.add_edge(0, 2).unwrap());
    assert_eq!(game.edge_count(), 1);
    game.check_invariants().unwrap();
}

#[test]
fn duplicate_edge_leaves_store_unchanged() {
    let mut game = diamond();
    game.add_edge(1, 1).unwrap();
    let before = game.clone();
    let hash = canonical_hash(&game);
    assert!(!game.add_edge(1, 1).unwrap());
    assert!(!game.add_edge(2, 3).unwrap());
    assert_eq!(game, before);
    assert_eq!(canonical_hash(&game), hash);
}

#[test]
fn remove_edge_clears_both_lists() {
    let mut game = diamond();
    assert!(game.remove_edge(2, 0).unwrap());
    assert_eq!(game.successors(2).unwrap(), &[3]);
    assert!(game.predecessors(0).unwrap().is_empty());
    assert!(!game.remove_edge(2, 0).unwrap());
    game.check_invariants().unwrap();
}

#[test]
fn unknown_nodes_are_reported() {
    let mut game = diamond();
    let err = game.add_edge(0, 9).unwrap_err();
    assert_eq!(err.code(), "unknown-node");
    assert_eq!(err.info().context.get("node").map(String::as_str), Some("9"));
    assert!(game.successors(4).is_err());
}

#[test]
fn removing_node_three_compacts_the_store() {
    let game = diamond();
    let sub = game.without_node(3).unwrap();
    assert_eq!(sub.node_count(), 3);
    assert_eq!(sub.edges(), vec![(0, 1), (1, 2), (2, 0)]);
    assert_eq!(sub.owners(), &[Player::Even, Player::Odd, Player::Even]);
    sub.check_invariants().unwrap();
}

#[test]
fn removing_a_middle_node_shifts_identities_down() {
    let game = diamond();
    let sub = game.without_node(1).unwrap();
    // old 0,2,3 become 0,1,2; only 2->0 and 2->3 survive.
    assert_eq!(sub.edges(), vec![(1, 0), (1, 2)]);
    assert_eq!(sub.predecessors(0).unwrap(), &[1]);
    assert_eq!(sub.owners(), &[Player::Even, Player::Even, Player::Odd]);
    sub.check_invariants().unwrap();
}

#[test]
fn extraction_follows_the_keep_order() {
    let game = diamond();
    let sub = game.extract_subgame(&[2, 0]).unwrap();
    assert_eq!(sub.edges(), vec![(0, 1)]);
    assert_eq!(sub.owners(), &[Player::Even, Player::Even]);
    assert_eq!(sub.extract_subgame(&[]).unwrap().node_count(), 0);
}

#[test]
fn extraction_rejects_repeated_nodes() {
    let err = diamond().extract_subgame(&[0, 0]).unwrap_err();
    assert_eq!(err.code(), "duplicate-keep");
}

#[test]
fn permute_rejects_non_permutations() {
    let mut game = diamond();
    assert_eq!(game.permute(&[0, 1]).unwrap_err().code(), "invalid-permutation");
    assert_eq!(
        game.permute(&[0, 1, 1, 2]).unwrap_err().code(),
        "invalid-permutation"
    );
}

#[test]
fn permute_rewrites_adjacency() {
    let mut game = diamond();
    game.permute(&[3, 2, 1, 0]).unwrap();
    assert_eq!(game.successors(3).unwrap(), &[2]);
    assert_eq!(game.successors(1).unwrap(), &[3, 0]);
    assert_eq!(game.owner(0).unwrap(), Player::Odd);
    game.check_invariants().unwrap();
}

#[test]
fn flipping_twice_restores_owner() {
    let mut game = diamond();
    assert_eq!(game.flip_owner(1).unwrap(), Player::Even);
    assert_eq!(game.flip_owner(1).unwrap(), Player::Odd);
}
