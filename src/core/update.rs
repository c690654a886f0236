use crate::core::{Direction, GameUpdate, Level, MoveResolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Cannot move out of bounds")]
    OutOfBounds,
    #[error("Cannot walk into a wall")]
    Wall,
    #[error("Cannot push block out of bounds")]
    BoxOutOfBounds,
    #[error("Cannot push block")]
    BoxBlocked,
    #[error("Level has no player")]
    NoPlayer,
    #[error("Puzzle is already solved")]
    GameOver,
}

/// Decide whether moving in `direction` is a step, a push, or illegal
pub fn resolve_move(level: &Level, direction: Direction) -> Result<MoveResolution, MoveError> {
    let player = level.player.ok_or(MoveError::NoPlayer)?;
    let bounds = level.bounds();

    let next = bounds.neighbor(player, direction).ok_or(MoveError::OutOfBounds)?;
    if level.is_wall(next) {
        return Err(MoveError::Wall);
    }
    if !level.has_box_at(next) {
        return Ok(MoveResolution::Step { to: next });
    }

    let beyond = bounds.neighbor(next, direction).ok_or(MoveError::BoxOutOfBounds)?;
    if level.is_wall(beyond) || level.has_box_at(beyond) {
        return Err(MoveError::BoxBlocked);
    }

    Ok(MoveResolution::Push { from: next, to: beyond })
}

pub fn step(level: &Level, direction: Direction) -> GameUpdate {
    match resolve_move(level, direction) {
        Ok(resolution) => {
            let mut next_level = level.clone();
            next_level.apply(resolution);
            GameUpdate::NextState(next_level, resolution)
        }
        Err(err) => GameUpdate::Error(err),
    }
}
