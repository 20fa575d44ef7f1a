use crate::sokoban::Point;
use std::collections::BTreeSet;

/// The dynamic part of a level. States are immutable values: applying an
/// action builds a new state. Crates are kept in a [`BTreeSet`] so that two
/// states with the same crates compare and hash equal regardless of the order
/// the crates were moved in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SokobanState {
    pub player: Point,
    pub crates: BTreeSet<Point>,
}

impl SokobanState {
    pub fn new(player: Point, crates: impl IntoIterator<Item = Point>) -> Self {
        Self {
            player,
            crates: crates.into_iter().collect(),
        }
    }

    #[inline(always)]
    pub fn has_crate(&self, cell: &Point) -> bool {
        self.crates.contains(cell)
    }

    /// The Manhattan distance from the player to the closest crate, `None`
    /// if there are no crates.
    pub fn player_to_nearest_crate(&self) -> Option<u32> {
        self.crates
            .iter()
            .map(|crate_pos| self.player.manhattan_distance(crate_pos))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn crate_order_does_not_matter() {
        let a = SokobanState::new(Point::new(0, 0), [Point::new(1, 1), Point::new(2, 2)]);
        let b = SokobanState::new(Point::new(0, 0), [Point::new(2, 2), Point::new(1, 1)]);
        assert_eq!(a, b);
        let set: HashSet<SokobanState> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn nearest_crate_distance() {
        let state = SokobanState::new(Point::new(0, 0), [Point::new(3, 1), Point::new(0, 2)]);
        assert_eq!(state.player_to_nearest_crate(), Some(2));
        let empty = SokobanState::new(Point::new(0, 0), []);
        assert_eq!(empty.player_to_nearest_crate(), None);
    }
}
