use crate::sokoban::{Layout, Point};
use std::collections::{HashMap, HashSet};

/// Data derived from a [`Layout`] alone. It does not depend on any state, so
/// a problem builds it once and every heuristic evaluation reuses it.
#[derive(Debug, Clone)]
pub struct LayoutAnalysis {
    /// Cells a crate can never occupy: every non-walkable cell of the grid
    /// and of the one-cell ring around it.
    blocked: HashSet<Point>,
    /// Manhattan distance from each walkable cell to its nearest goal. Empty
    /// when the layout has no goals.
    goal_distances: HashMap<Point, u32>,
    width: i32,
    height: i32,
}

impl LayoutAnalysis {
    pub fn new(layout: &Layout) -> Self {
        let blocked = (-1..=layout.height())
            .flat_map(|y| (-1..=layout.width()).map(move |x| Point::new(x, y)))
            .filter(|cell| !layout.is_walkable(cell))
            .collect();

        let goal_distances = if layout.goals().is_empty() {
            HashMap::new()
        } else {
            layout
                .walkable()
                .iter()
                .filter_map(|cell| {
                    layout
                        .goals()
                        .iter()
                        .map(|goal| cell.manhattan_distance(goal))
                        .min()
                        .map(|distance| (*cell, distance))
                })
                .collect()
        };

        Self {
            blocked,
            goal_distances,
            width: layout.width(),
            height: layout.height(),
        }
    }

    /// Whether `cell` is a wall or lies outside the grid.
    #[inline(always)]
    pub fn is_blocked(&self, cell: &Point) -> bool {
        self.blocked.contains(cell)
            || cell.x < -1
            || cell.y < -1
            || cell.x > self.width
            || cell.y > self.height
    }

    /// Manhattan distance from `cell` to the nearest goal, `None` for cells
    /// that are not walkable or when there are no goals.
    pub fn nearest_goal_distance(&self, cell: &Point) -> Option<u32> {
        self.goal_distances.get(cell).copied()
    }
}
