//! Session points counter.

/// Running points for the current session.
///
/// Independent of the weighted mastery score: points are immediate
/// answer feedback, mastery is the long-lived state machine. The
/// internal accumulator is signed so a losing streak is not forgotten,
/// but the displayed value never goes below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: i32,
}

impl Scoreboard {
    /// Fresh scoreboard at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a points delta.
    pub fn apply(&mut self, delta: i32) {
        self.points += delta;
    }

    /// The raw signed accumulator.
    pub fn raw(&self) -> i32 {
        self.points
    }

    /// The value shown to the user, floored at zero.
    pub fn display(&self) -> u32 {
        self.points.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_floors_at_zero_but_raw_keeps_the_deficit() {
        let mut board = Scoreboard::new();
        board.apply(-1);
        board.apply(-1);
        assert_eq!(board.display(), 0);
        assert_eq!(board.raw(), -2);

        // Climbing out of the deficit: display stays at 0 until the
        // raw value crosses it.
        board.apply(1);
        assert_eq!(board.display(), 0);
        board.apply(1);
        board.apply(1);
        assert_eq!(board.display(), 1);
        assert_eq!(board.raw(), 1);
    }
}
