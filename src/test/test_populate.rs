use crate::core::*;
use crate::solver::{get_all_adjacent_nodes, NodeIdentity, PopulateResult, SearchFrontier, SearchNode, SolverConfig};
use crate::test::test_util::{assert_level_set_matches, assert_symbols_match, LevelTestState};

fn start_node(game: &LevelTestState) -> SearchNode {
    SearchNode::from_level(&game.level).expect("fixture has a player")
}

fn as_levels(game: &LevelTestState, nodes: Vec<SearchNode>) -> Vec<Level> {
    nodes
        .into_iter()
        .map(|node| Level {
            player: Some(node.player),
            boxes: node.boxes,
            ..game.level.clone()
        })
        .collect()
}

#[test]
fn find_reachable_finds_all_reachable(){
    let level = r#"
#@ #
#  #
##$#
#  #
"#;
    let game = LevelTestState::new(level);
    let shared = game.shared();
    let reachable: Vec<usize> = shared
        .reachable_positions(&start_node(&game))
        .iter()
        .filter(|(_, reachable)| **reachable)
        .map(|(cell, _)| cell)
        .collect();

    let expected_symbols = r#"
_**_
_**_
____
____
"#;
    let actual_symbols = game.render_where_present(&reachable, '*', '_');
    assert_symbols_match(expected_symbols, actual_symbols.as_str());
    assert_eq!(shared.min_reachable_position(&start_node(&game)), 1);
}

#[test]
fn find_adjacent_nodes_finds_all_possible_actions(){
    let level = r#"
######
#@ $ #
# $  #
#  $ #
######
"#;
    let game = LevelTestState::new(level);
    let config = SolverConfig::default().with_node_identity(NodeIdentity::ReachableRegion);
    let adjacent = get_all_adjacent_nodes(&start_node(&game), &game.shared(), &config);

    let expected_moves = vec![r#"
######
#@  $#
# $  #
#  $ #
######
"#,r#"
######
#@ $ #
#    #
# $$ #
######
"#,r#"
######
#@ $ #
#  $ #
#  $ #
######
"#,r#"
######
#@$$ #
#    #
#  $ #
######
"#,r#"
######
#@ $ #
# $  #
#   $#
######
"#,
    ];

    assert_level_set_matches(&as_levels(&game, adjacent), expected_moves);
}

#[test]
fn find_adjacent_nodes_with_exact_player_stands_where_box_was(){
    let level = r#"
######
#@ $ #
# $  #
#  $ #
######
"#;
    let game = LevelTestState::new(level);
    let adjacent = get_all_adjacent_nodes(&start_node(&game), &game.shared(), &SolverConfig::default());

    let expected_moves = vec![r#"
######
#  @$#
# $  #
#  $ #
######
"#,r#"
######
#  $ #
# @$ #
#  $ #
######
"#,r#"
######
#  $ #
# @  #
# $$ #
######
"#,r#"
######
# $$ #
# @  #
#  $ #
######
"#,r#"
######
#  $ #
# $  #
#  @$#
######
"#,
    ];

    assert_level_set_matches(&as_levels(&game, adjacent), expected_moves);
}

#[test]
fn find_adjacent_nodes_skips_dead_corners_when_pruning(){
    let level = r#"
#####
#@$ #
#  .#
#####
"#;
    let game = LevelTestState::new(level);
    let node = start_node(&game);
    let shared = game.shared();

    let unpruned = get_all_adjacent_nodes(&node, &shared, &SolverConfig::default());
    let pruned = get_all_adjacent_nodes(&node, &shared, &SolverConfig::default().with_corner_pruning(true));
    assert_level_set_matches(&as_levels(&game, unpruned), vec![r#"
#####
# @$#
#  .#
#####
"#,r#"
#####
#$@ #
#  .#
#####
"#]);
    // both pushes strand the box in a corner off target
    assert!(pruned.is_empty());
}

#[test]
fn populate_step_reports_solved_and_all_visited(){
    let game = LevelTestState::new(r#"
#####
#@$.#
#####
"#);
    let shared = game.shared();
    let config = SolverConfig::default();
    let mut frontier = SearchFrontier::new(start_node(&game));

    assert!(matches!(frontier.populate_step(&shared, &config), PopulateResult::Populated));
    assert_eq!(frontier.visited.len(), 2);
    assert!(matches!(frontier.populate_step(&shared, &config), PopulateResult::Solved));

    let game = LevelTestState::new(r#"
####
#@ #
#.$#
####
"#);
    let shared = game.shared();
    let mut frontier = SearchFrontier::new(start_node(&game));
    assert!(matches!(frontier.populate_step(&shared, &config), PopulateResult::Populated));
    assert!(frontier.is_empty());
    assert!(matches!(frontier.populate_step(&shared, &config), PopulateResult::AllVisited));
}

#[test]
fn node_keys_ignore_box_order(){
    let a = SearchNode { player: 7, boxes: vec![9, 14, 21] };
    let b = SearchNode { player: 7, boxes: vec![21, 9, 14] };
    let c = SearchNode { player: 8, boxes: vec![21, 9, 14] };
    assert_eq!(a.key(), b.key());
    assert_ne!(a.key(), c.key());

    let mut frontier = SearchFrontier::new(a);
    assert!(frontier.contains(&b.key()));
    assert!(!frontier.contains(&c.key()));
    frontier.queue.clear();
    assert!(frontier.is_empty());
}
