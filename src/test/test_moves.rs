use Direction::*;
use crate::core::*;
use crate::test::test_util::LevelTestState;

fn sorted_boxes(level: &Level) -> Vec<usize> {
    let mut boxes = level.boxes.clone();
    boxes.sort_unstable();
    boxes
}

#[test]
fn when_move_right_observes_move_right(){
    let level = r#"
#@ #
"#;
    let mut game = LevelTestState::new(level);
    let update = game.assert_move(Right);

    let expected_level = r#"
# @#
"#;
    let GameUpdate::NextState(_, resolution) = update else { unreachable!() };
    assert!(!resolution.is_push());
    assert_eq!(resolution.player_destination(), 2);
    game.assert_matches(expected_level);
}

#[test]
fn when_push_pushes(){
    let level = r#"
#@$ #
"#;
    let mut game = LevelTestState::new(level);
    let update = game.assert_move(Right);

    let expected_level = r#"
# @$#
"#;
    game.assert_matches(expected_level);
    let GameUpdate::NextState(_, resolution) = update else { unreachable!() };
    assert_eq!(resolution, MoveResolution::Push { from: 2, to: 3 });
    assert!(resolution.is_push());
    assert_eq!(resolution.player_destination(), 2);
}

#[test]
fn when_block_pushed_into_block_remains_two_blocks(){
    let level = r#"
#@$$ #
"#;
    let game = LevelTestState::new(level);
    assert_eq!(game.assert_rejected(Right), MoveError::BoxBlocked);

    game.assert_matches(r#"
#@$$ #
"#);
}

#[test]
fn when_block_pushed_into_wall_is_rejected(){
    let game = LevelTestState::new(r#"
#@$#
"#);
    let err = game.assert_rejected(Right);
    assert_eq!(err, MoveError::BoxBlocked);
    assert_eq!(err.to_string(), "Cannot push block");
}

#[test]
fn when_walking_into_wall_is_rejected(){
    let game = LevelTestState::new(r#"
#@ #
"#);
    assert_eq!(game.assert_rejected(Left), MoveError::Wall);
}

#[test]
fn when_leaving_grid_is_rejected(){
    let game = LevelTestState::new(r#"
#@ #
"#);
    let err = game.assert_rejected(Up);
    assert_eq!(err, MoveError::OutOfBounds);
    assert_eq!(err.to_string(), "Cannot move out of bounds");

    let game = LevelTestState::new(r#"
$@ #
"#);
    assert_eq!(game.assert_rejected(Left), MoveError::BoxOutOfBounds);
}

#[test]
fn when_level_has_no_player_every_move_is_rejected(){
    let game = LevelTestState::new(r#"
# $.#
"#);
    for dir in Direction::ALL {
        assert_eq!(game.assert_rejected(dir), MoveError::NoPlayer);
    }
}

#[test]
fn when_box_pushed_onto_target_level_is_won(){
    let mut game = LevelTestState::new(r#"
#####
#@$.#
#####
"#);
    assert!(!game.level.is_won());
    game.assert_move(Right);

    game.assert_matches(r#"
#####
# @*#
#####
"#);
    assert!(game.level.is_won());
    assert_eq!(game.level.count_boxes_on_targets(), 1);
}

#[test]
fn when_player_walks_over_target_target_remains(){
    let mut game = LevelTestState::new(r#"
#@. #
"#);
    game.assert_move(Right);
    game.assert_matches(r#"
# + #
"#);
    game.assert_move(Right);
    game.assert_matches(r#"
# .@#
"#);
}

#[test]
fn when_block_moves_game_is_inequal(){
    let level = r#"
#@$ #
"#;
    let mut game = LevelTestState::new(level);
    let original_state = game.level.clone();
    game.assert_move(Right);
    let new_state = game.level.clone();

    let expected_level = r#"
# @$#
"#;
    game.assert_matches(expected_level);
    assert_ne!(original_state, new_state);
}

#[test]
fn when_player_moves_back_game_is_equal(){
    let level = r#"
#@ $#
"#;
    let mut game = LevelTestState::new(level);
    let original_state = game.level.clone();
    game.assert_move(Right);
    game.assert_move(Left);
    let new_state = game.level.clone();

    let expected_level = r#"
#@ $#
"#;
    game.assert_matches(expected_level);
    assert_eq!(original_state, new_state);
}

#[test]
fn when_blocks_swap_game_remains_equal(){
    let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
    let mut game = LevelTestState::new(level);
    let original_state = game.level.clone();
    game.assert_moves(&[
        Right, Left,
        Down, Down,
        Right, Up,
        Right, Right, Up, Up,
        Left, Down, Right, Down, Left,]);
    game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
"#);
    game.assert_moves(&[
        Down, Left, Left, Up, Up,]);
    let new_state = game.level.clone();

    let expected_level = r#"
#    #
#@$  #
# $  #
#    #
"#;
    game.assert_matches(expected_level);

    // the two boxes traded places, so only the set of box cells matches
    assert_eq!(original_state.player, new_state.player);
    assert_eq!(sorted_boxes(&original_state), sorted_boxes(&new_state));
}

#[test]
fn step_leaves_input_level_untouched(){
    let game = LevelTestState::new(r#"
#@$ #
"#);
    let before = game.level.clone();
    let GameUpdate::NextState(next, _) = step(&game.level, Right) else {
        panic!("expected push to succeed");
    };
    assert_eq!(game.level, before);
    assert_ne!(next, before);
}
