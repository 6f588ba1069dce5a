//! Scoring rules — pure functions over plain data, no hidden state

/// Questions per session (fewer when the filtered pool runs short)
pub const GAME_LENGTH: usize = 10;

/// Base points for a correct answer, before the streak multiplier
pub const POINTS_CORRECT: i32 = 100;

/// Points deducted for a wrong answer or a timeout
pub const POINTS_INCORRECT: i32 = 25;

/// Seconds on the clock for each question
pub const TIMER_SECONDS: u32 = 30;

/// Streak length that activates [`MULTIPLIER_1`]
pub const STREAK_THRESHOLD_1: u32 = 3;

/// Streak length that activates [`MULTIPLIER_2`]
pub const STREAK_THRESHOLD_2: u32 = 5;

pub const MULTIPLIER_1: f64 = 1.5;
pub const MULTIPLIER_2: f64 = 2.0;

pub const COST_FIFTY_FIFTY: i32 = 50;
pub const COST_HINT: i32 = 25;
pub const COST_SWAP: i32 = 40;

/// The three lifelines and their fixed point costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifeline {
    FiftyFifty,
    Hint,
    Swap,
}

impl Lifeline {
    /// Point cost charged when the lifeline is invoked
    #[inline]
    pub fn cost(self) -> i32 {
        match self {
            Lifeline::FiftyFifty => COST_FIFTY_FIFTY,
            Lifeline::Hint => COST_HINT,
            Lifeline::Swap => COST_SWAP,
        }
    }

    /// Short label for logs
    pub fn label(self) -> &'static str {
        match self {
            Lifeline::FiftyFifty => "50/50",
            Lifeline::Hint => "hint",
            Lifeline::Swap => "swap",
        }
    }
}

/// Multiplier in effect at a given streak length
#[inline]
pub fn streak_multiplier(streak: u32) -> f64 {
    if streak >= STREAK_THRESHOLD_2 {
        MULTIPLIER_2
    } else if streak >= STREAK_THRESHOLD_1 {
        MULTIPLIER_1
    } else {
        1.0
    }
}

/// Points awarded for a correct answer
///
/// `streak_before` is the streak value before this answer; the multiplier is
/// read off the streak the answer produces. Rounding is half-up.
#[inline]
pub fn correct_points(streak_before: u32) -> i32 {
    let multiplier = streak_multiplier(streak_before + 1);
    (POINTS_CORRECT as f64 * multiplier).round() as i32
}

/// Points delta for a wrong answer or timeout, independent of streak
#[inline]
pub fn incorrect_points() -> i32 {
    -POINTS_INCORRECT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_multiplier_thresholds() {
        assert_eq!(streak_multiplier(0), 1.0);
        assert_eq!(streak_multiplier(1), 1.0);
        assert_eq!(streak_multiplier(2), 1.0);
        assert_eq!(streak_multiplier(3), 1.5);
        assert_eq!(streak_multiplier(4), 1.5);
        assert_eq!(streak_multiplier(5), 2.0);
        assert_eq!(streak_multiplier(12), 2.0);
    }

    #[test]
    fn test_correct_points_ladder() {
        // First two answers of a run pay base points, the 3rd and 4th pay
        // 1.5x, everything from the 5th on pays 2x.
        assert_eq!(correct_points(0), 100);
        assert_eq!(correct_points(1), 100);
        assert_eq!(correct_points(2), 150);
        assert_eq!(correct_points(3), 150);
        assert_eq!(correct_points(4), 200);
        assert_eq!(correct_points(9), 200);
    }

    #[test]
    fn test_incorrect_is_flat_penalty() {
        assert_eq!(incorrect_points(), -25);
    }

    #[test]
    fn test_lifeline_costs() {
        assert_eq!(Lifeline::FiftyFifty.cost(), 50);
        assert_eq!(Lifeline::Hint.cost(), 25);
        assert_eq!(Lifeline::Swap.cost(), 40);
    }
}
