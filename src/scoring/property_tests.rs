//! Property tests for the scoring policy

use proptest::prelude::*;

use crate::scoring::*;

proptest! {
    /// Correct points are always the base times a multiplier in {1, 1.5, 2}
    #[test]
    fn prop_correct_points_in_ladder(streak_before in 0u32..1000) {
        let points = correct_points(streak_before);
        prop_assert!(
            points == 100 || points == 150 || points == 200,
            "unexpected award {} for streak {}",
            points,
            streak_before
        );
    }

    /// The award never decreases as the streak grows
    #[test]
    fn prop_correct_points_monotone(streak_before in 0u32..1000) {
        prop_assert!(correct_points(streak_before + 1) >= correct_points(streak_before));
    }

    /// The penalty is flat regardless of streak
    #[test]
    fn prop_penalty_is_streak_independent(_streak in 0u32..1000) {
        prop_assert_eq!(incorrect_points(), -POINTS_INCORRECT);
    }

    /// The multiplier steps exactly at the two thresholds
    #[test]
    fn prop_multiplier_thresholds(streak in 0u32..1000) {
        let expected = if streak >= STREAK_THRESHOLD_2 {
            MULTIPLIER_2
        } else if streak >= STREAK_THRESHOLD_1 {
            MULTIPLIER_1
        } else {
            1.0
        };
        prop_assert_eq!(streak_multiplier(streak), expected);
    }
}
