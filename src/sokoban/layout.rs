use crate::sokoban::{LevelError, Point};
use std::collections::BTreeSet;

/// The static part of a level: which cells can be walked on and which of them
/// are goals. A layout never changes during a search and is shared by every
/// state of a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: i32,
    height: i32,
    walkable: BTreeSet<Point>,
    goals: BTreeSet<Point>,
}

impl Layout {
    pub fn new(
        width: i32,
        height: i32,
        walkable: BTreeSet<Point>,
        goals: BTreeSet<Point>,
    ) -> Result<Self, LevelError> {
        if let Some(&goal) = goals.iter().find(|goal| !walkable.contains(goal)) {
            return Err(LevelError::GoalNotWalkable { goal });
        }
        if let Some(&cell) = walkable
            .iter()
            .find(|cell| cell.x < 0 || cell.y < 0 || cell.x >= width || cell.y >= height)
        {
            return Err(LevelError::OutOfBounds { cell });
        }
        Ok(Self {
            width,
            height,
            walkable,
            goals,
        })
    }

    /// A layout where every cell of a `width` by `height` grid is walkable.
    pub fn open(width: i32, height: i32, goals: BTreeSet<Point>) -> Result<Self, LevelError> {
        let walkable = (0..height)
            .flat_map(|y| (0..width).map(move |x| Point::new(x, y)))
            .collect();
        Self::new(width, height, walkable, goals)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    pub fn is_walkable(&self, cell: &Point) -> bool {
        self.walkable.contains(cell)
    }

    #[inline(always)]
    pub fn is_goal(&self, cell: &Point) -> bool {
        self.goals.contains(cell)
    }

    pub fn walkable(&self) -> &BTreeSet<Point> {
        &self.walkable
    }

    pub fn goals(&self) -> &BTreeSet<Point> {
        &self.goals
    }
}
