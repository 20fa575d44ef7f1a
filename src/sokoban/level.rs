//! Loading levels from the usual plain text format:
//!
//! | Character       | Cell                |
//! |-----------------|---------------------|
//! | `#`             | wall                |
//! | ` `, `-` or `_` | floor               |
//! | `.`             | goal                |
//! | `$`             | crate               |
//! | `*`             | crate on a goal     |
//! | `@`             | player              |
//! | `+`             | player on a goal    |
//!
//! Every cell that is not a wall is walkable. Lines may have different
//! lengths, the grid is as wide as the longest line.

use crate::sokoban::{Layout, Point, SokobanState};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the level is empty")]
    Empty,
    #[error("the level has no player")]
    NoPlayer,
    #[error("the level has a second player at {second}, the first one is at {first}")]
    MultiplePlayers { first: Point, second: Point },
    #[error("unknown character {character:?} at line {line}, column {column}")]
    UnknownCell {
        character: char,
        line: usize,
        column: usize,
    },
    #[error("the level has {crates} crates but only {goals} goals")]
    TooFewGoals { crates: usize, goals: usize },
    #[error("goal {goal} is not on a walkable cell")]
    GoalNotWalkable { goal: Point },
    #[error("walkable cell {cell} is outside the grid")]
    OutOfBounds { cell: Point },
}

/// A parsed level: its layout and the state the player starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub layout: Layout,
    pub initial_state: SokobanState,
}

impl Level {
    pub fn from_path(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .skip_while(|line| line.trim().is_empty())
            .collect();
        let num_lines = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(0, |last| last + 1);
        let lines = &lines[..num_lines];
        if lines.is_empty() {
            return Err(LevelError::Empty);
        }

        let mut walkable = BTreeSet::new();
        let mut goals = BTreeSet::new();
        let mut crates = BTreeSet::new();
        let mut player = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, character) in line.chars().enumerate() {
                let cell = Point::new(x as i32, y as i32);
                let (is_goal, has_crate, has_player) = match character {
                    '#' => continue,
                    ' ' | '-' | '_' => (false, false, false),
                    '.' => (true, false, false),
                    '$' => (false, true, false),
                    '*' => (true, true, false),
                    '@' => (false, false, true),
                    '+' => (true, false, true),
                    _ => {
                        return Err(LevelError::UnknownCell {
                            character,
                            line: y + 1,
                            column: x + 1,
                        })
                    }
                };
                walkable.insert(cell);
                if is_goal {
                    goals.insert(cell);
                }
                if has_crate {
                    crates.insert(cell);
                }
                if has_player {
                    if let Some(first) = player {
                        return Err(LevelError::MultiplePlayers {
                            first,
                            second: cell,
                        });
                    }
                    player = Some(cell);
                }
            }
        }

        let player = player.ok_or(LevelError::NoPlayer)?;
        if crates.len() > goals.len() {
            return Err(LevelError::TooFewGoals {
                crates: crates.len(),
                goals: goals.len(),
            });
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as i32;
        let height = lines.len() as i32;
        let layout = Layout::new(width, height, walkable, goals)?;

        Ok(Self {
            layout,
            initial_state: SokobanState::new(player, crates),
        })
    }
}
