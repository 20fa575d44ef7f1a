//! Static deadlock detection. Both rules only look at walls and goals, never
//! at other crates, so they only report crates that can provably never reach
//! a goal: walls never move, whereas a crate blocking another crate might.
//!
//! A crate with a wall on its left or right can never be pushed sideways:
//! pushing it left needs the target cell free, pushing it right needs the
//! player to stand on its left. The same holds vertically.

use crate::sokoban::{heuristics::LayoutAnalysis, Direction, Layout, Point, SokobanState};

/// Whether a crate at `cell` can never be pushed along the axis of
/// `direction`.
fn is_stuck_along(analysis: &LayoutAnalysis, cell: &Point, direction: Direction) -> bool {
    let offset = direction.offset();
    analysis.is_blocked(&(*cell + offset)) || analysis.is_blocked(&(*cell - offset))
}

/// A crate that can be pushed neither horizontally nor vertically.
pub fn is_corner_deadlock(analysis: &LayoutAnalysis, cell: &Point) -> bool {
    is_stuck_along(analysis, cell, Direction::Left) && is_stuck_along(analysis, cell, Direction::Up)
}

/// A crate that can never be pushed along one axis is confined to the
/// straight run of walkable cells through it along the other axis, unless
/// some cell of that run lets it be pushed off again. If none does and the
/// run contains no goal, the crate is lost.
pub fn is_corridor_deadlock(analysis: &LayoutAnalysis, layout: &Layout, cell: &Point) -> bool {
    [
        (Direction::Left, Direction::Up),
        (Direction::Up, Direction::Left),
    ]
    .into_iter()
    .any(|(stuck_axis, run_axis)| {
        is_stuck_along(analysis, cell, stuck_axis)
            && is_confined_run(analysis, layout, cell, stuck_axis, run_axis)
    })
}

fn is_confined_run(
    analysis: &LayoutAnalysis,
    layout: &Layout,
    cell: &Point,
    stuck_axis: Direction,
    run_axis: Direction,
) -> bool {
    let step = run_axis.offset();
    for sign in [1, -1] {
        let step = Point::new(step.x * sign, step.y * sign);
        let mut current = *cell;
        while !analysis.is_blocked(&current) {
            if layout.is_goal(&current) || !is_stuck_along(analysis, &current, stuck_axis) {
                return false;
            }
            current = current + step;
        }
    }
    true
}

/// Whether the crate at `cell` can never reach a goal. Crates already on a
/// goal are never deadlocked.
pub fn is_deadlocked_crate(
    analysis: &LayoutAnalysis,
    layout: &Layout,
    cell: &Point,
    corridor_deadlocks: bool,
) -> bool {
    if layout.is_goal(cell) {
        return false;
    }
    is_corner_deadlock(analysis, cell)
        || (corridor_deadlocks && is_corridor_deadlock(analysis, layout, cell))
}

/// The first deadlocked crate of `state`, if any.
pub fn find_deadlocked_crate(
    analysis: &LayoutAnalysis,
    layout: &Layout,
    state: &SokobanState,
    corridor_deadlocks: bool,
) -> Option<Point> {
    state
        .crates
        .iter()
        .find(|cell| is_deadlocked_crate(analysis, layout, cell, corridor_deadlocks))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sokoban::Level;
    use crate::test_utils::*;

    fn analyse(text: &str) -> (Level, LayoutAnalysis) {
        let level = Level::from_text(text).unwrap();
        let analysis = LayoutAnalysis::new(&level.layout);
        (level, analysis)
    }

    #[test]
    fn crate_in_corner_is_deadlocked() {
        let (level, analysis) = analyse(CORNER_DEADLOCK_LEVEL_TEXT);
        let crate_pos = Point::new(1, 1);
        assert!(is_corner_deadlock(&analysis, &crate_pos));
        assert!(is_deadlocked_crate(&analysis, &level.layout, &crate_pos, false));
        assert_eq!(
            find_deadlocked_crate(&analysis, &level.layout, &level.initial_state, false),
            Some(crate_pos)
        );
    }

    #[test]
    fn crate_on_goal_in_corner_is_fine() {
        let (level, analysis) = analyse(
            "#####\n\
             #*  #\n\
             # @ #\n\
             #####",
        );
        let crate_pos = Point::new(1, 1);
        assert!(is_corner_deadlock(&analysis, &crate_pos));
        assert!(!is_deadlocked_crate(&analysis, &level.layout, &crate_pos, true));
    }

    #[test]
    fn crate_along_wall_without_goal_is_deadlocked() {
        let (level, analysis) = analyse(WALL_DEADLOCK_LEVEL_TEXT);
        let crate_pos = Point::new(3, 1);
        assert!(!is_corner_deadlock(&analysis, &crate_pos));
        assert!(is_corridor_deadlock(&analysis, &level.layout, &crate_pos));
        assert!(!is_deadlocked_crate(&analysis, &level.layout, &crate_pos, false));
        assert!(is_deadlocked_crate(&analysis, &level.layout, &crate_pos, true));
    }

    #[test]
    fn crate_along_side_wall_without_goal_is_deadlocked() {
        // The crate can never leave the right column, which holds no goal.
        let (level, analysis) = analyse(
            "#######\n\
             #     #\n\
             #    $#\n\
             #  @  #\n\
             #.    #\n\
             #######",
        );
        let crate_pos = Point::new(5, 2);
        assert!(!is_corner_deadlock(&analysis, &crate_pos));
        assert!(is_stuck_along(&analysis, &crate_pos, Direction::Left));
        assert!(!is_stuck_along(&analysis, &crate_pos, Direction::Up));
        assert!(is_corridor_deadlock(&analysis, &level.layout, &crate_pos));
        assert_eq!(
            find_deadlocked_crate(&analysis, &level.layout, &level.initial_state, true),
            Some(crate_pos)
        );
    }

    #[test]
    fn crate_along_side_wall_with_goal_is_fine() {
        let (level, analysis) = analyse(
            "#######\n\
             #     #\n\
             #    $#\n\
             #  @  #\n\
             #    .#\n\
             #######",
        );
        assert!(!is_corridor_deadlock(
            &analysis,
            &level.layout,
            &Point::new(5, 2)
        ));
    }

    #[test]
    fn crate_along_wall_with_goal_is_fine() {
        let (level, analysis) = analyse(
            "#######\n\
             #. $  #\n\
             #   @ #\n\
             #######",
        );
        assert!(!is_corridor_deadlock(
            &analysis,
            &level.layout,
            &Point::new(3, 1)
        ));
    }

    #[test]
    fn gap_in_wall_releases_crate() {
        // The opening above (4, 1) breaks the wall, so the rule cannot prove
        // the crate stays in the top row.
        let (level, analysis) = analyse(
            "#### ##\n\
             #  $  #\n\
             #   @ #\n\
             #.    #\n\
             #######",
        );
        assert!(!is_corridor_deadlock(
            &analysis,
            &level.layout,
            &Point::new(3, 1)
        ));
    }

    #[test]
    fn crate_in_open_space_is_fine() {
        let (level, analysis) = analyse(OPEN_GRID_LEVEL_TEXT);
        let crate_pos = Point::new(2, 2);
        assert!(!is_deadlocked_crate(&analysis, &level.layout, &crate_pos, true));
        // The grid border acts as a wall: a crate in the top row can never
        // come back down and there is no goal up there.
        assert!(is_deadlocked_crate(
            &analysis,
            &level.layout,
            &Point::new(2, 0),
            true
        ));
        // The right column holds the goal.
        assert!(!is_deadlocked_crate(
            &analysis,
            &level.layout,
            &Point::new(4, 1),
            true
        ));
    }
}
