// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

use crate::core::{Difficulty, Level};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelParseError {
    #[error("Level text has no rows")]
    Empty,
    #[error("Unknown tile '{tile}' at row {row}, column {column}")]
    UnknownTile { tile: char, row: usize, column: usize },
    #[error("More than one player, second at row {row}, column {column}")]
    MultiplePlayers { row: usize, column: usize },
}

pub fn parse_level(s: &str) -> Result<Level, LevelParseError> {
    let rows: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();
    let width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    if rows.is_empty() || width == 0 {
        return Err(LevelParseError::Empty);
    }

    // short rows are padded with floor
    let mut level = Level::empty(width, rows.len(), Difficulty::default());
    for (row, line) in rows.iter().enumerate() {
        for (column, ch) in line.chars().enumerate() {
            let index = row * width + column;
            match ch {
                '#' => {
                    level.walls.insert(index);
                }
                ' ' | '-' | '_' => {}
                '.' => {
                    level.targets.insert(index);
                }
                '$' => level.boxes.push(index),
                '*' => {
                    level.boxes.push(index);
                    level.targets.insert(index);
                }
                '@' | '+' => {
                    if level.player.is_some() {
                        return Err(LevelParseError::MultiplePlayers { row, column });
                    }
                    level.player = Some(index);
                    if ch == '+' {
                        level.targets.insert(index);
                    }
                }
                tile => return Err(LevelParseError::UnknownTile { tile, row, column }),
            }
        }
    }
    Ok(level)
}

pub fn render_level_to_string(level: &Level) -> String {
    let mut result = String::with_capacity((level.width + 1) * level.height);
    for y in 0..level.height {
        for x in 0..level.width {
            let index = y * level.width + x;
            let has_player = level.player == Some(index);
            let has_box = level.has_box_at(index);
            let ch = if level.is_wall(index) {
                '#'
            } else if level.is_target(index) {
                if has_player { '+' } else if has_box { '*' } else { '.' }
            } else if has_player {
                '@'
            } else if has_box {
                '$'
            } else {
                ' '
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_reads_every_tile() {
        let level = parse_level("#@$.\n#*  \n").unwrap();
        assert_eq!(level.width, 4);
        assert_eq!(level.height, 2);
        assert_eq!(level.walls.iter().copied().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(level.targets.iter().copied().collect::<Vec<_>>(), vec![3, 5]);
        assert_eq!(level.boxes, vec![2, 5]);
        assert_eq!(level.player, Some(1));
    }

    #[test]
    fn parse_pads_short_rows() {
        let level = parse_level("\n####\n#@\n####\n").unwrap();
        assert_eq!(level.width, 4);
        assert_eq!(level.height, 3);
        assert_eq!(render_level_to_string(&level), "####\n#@  \n####\n");
    }

    #[test]
    fn parse_rejects_second_player() {
        assert_eq!(
            parse_level("#@$.\n#*+ \n"),
            Err(LevelParseError::MultiplePlayers { row: 1, column: 2 })
        );
    }

    #[test]
    fn parse_rejects_unknown_tiles() {
        assert_eq!(
            parse_level("#@x#"),
            Err(LevelParseError::UnknownTile { tile: 'x', row: 0, column: 2 })
        );
        assert_eq!(parse_level("\n\n"), Err(LevelParseError::Empty));
    }

    #[test]
    fn render_round_trips_text() {
        let text = "#######\n# $ . #\n# * + #\n#######\n";
        let level = parse_level(text).unwrap();
        assert_eq!(render_level_to_string(&level), text);
    }
}
