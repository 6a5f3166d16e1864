//! Reflow profile input grid.
//!
//! Ten numbered pairs of free-text inputs. Nothing reads the entered text back;
//! the grid only exists as form controls.

/// Number of set-point/time pairs in a profile.
pub const PROFILE_POINT_COUNT: usize = 10;

/// One row of the profile grid: a set point and a time, both free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePoint {
    /// 1-based position in the profile
    number: usize,
    pub set_point: String,
    pub time: String,
}

impl ProfilePoint {
    fn empty(number: usize) -> Self {
        Self {
            number,
            set_point: String::new(),
            time: String::new(),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn set_point_placeholder(&self) -> String {
        format!("Set Point {}", self.number)
    }

    pub fn time_placeholder(&self) -> String {
        format!("Time {}", self.number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileGrid {
    points: Vec<ProfilePoint>,
}

impl ProfileGrid {
    /// Creates an empty grid; rows appear on the first [`regenerate`](Self::regenerate).
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Throws away every row, including any typed text, and builds a fresh set
    /// of [`PROFILE_POINT_COUNT`] empty pairs.
    pub fn regenerate(&mut self) {
        self.points.clear();
        self.points
            .extend((1..=PROFILE_POINT_COUNT).map(ProfilePoint::empty));
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [ProfilePoint] {
        &mut self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of individual text inputs (two per row).
    pub fn input_count(&self) -> usize {
        self.points.len() * 2
    }

    /// Placeholders of every input in render order: set point then time, row by row.
    pub fn placeholders(&self) -> Vec<String> {
        self.points
            .iter()
            .flat_map(|p| [p.set_point_placeholder(), p.time_placeholder()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_has_no_inputs() {
        let grid = ProfileGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.input_count(), 0);
    }

    #[test]
    fn test_regenerate_builds_twenty_inputs() {
        let mut grid = ProfileGrid::new();
        grid.regenerate();
        assert_eq!(grid.input_count(), 20);

        let placeholders = grid.placeholders();
        assert_eq!(placeholders[0], "Set Point 1");
        assert_eq!(placeholders[1], "Time 1");
        assert_eq!(placeholders[18], "Set Point 10");
        assert_eq!(placeholders[19], "Time 10");
        assert!(grid.points().iter().all(|p| p.set_point.is_empty() && p.time.is_empty()));
    }

    #[test]
    fn test_regenerate_discards_typed_text() {
        let mut grid = ProfileGrid::new();
        grid.regenerate();
        grid.points_mut()[3].set_point = "217".to_string();
        grid.points_mut()[3].time = "90".to_string();

        grid.regenerate();
        assert_eq!(grid.input_count(), 20);
        assert_eq!(grid.points()[3].set_point, "");
        assert_eq!(grid.points()[3].time, "");
    }
}
