//! Weighted scoring and the integration state machine.
//!
//! All functions here are pure: they mutate or read a single
//! [`UserSenseProgress`] record and never touch storage. The state
//! machine is one-directional (encoding -> consolidating -> integrated)
//! because the counters that drive it only ever increase.

use preclang_core::{IntegrationStatus, Time, UserSenseProgress};

/// Weight added per correct stage-1 (noticing) answer.
pub const STAGE1_WEIGHT: u32 = 1;
/// Weight added per successful stage-2 override.
pub const STAGE2_WEIGHT: u32 = 2;
/// Weight added per successful stage-3 production.
pub const STAGE3_WEIGHT: u32 = 3;

/// Stage-1 encounters needed to leave `Encoding`.
pub const CONSOLIDATING_MIN_ENCOUNTERS: u32 = 3;
/// Stage-2 overrides needed to leave `Consolidating`.
pub const INTEGRATED_MIN_OVERRIDES: u32 = 2;
/// Weighted score needed to leave `Consolidating`.
pub const INTEGRATED_MIN_SCORE: u32 = 6;
/// Stage-3 successes needed for full integration.
pub const FULL_INTEGRATION_MIN_SUCCESSES: u32 = 2;
/// Weighted score needed for full integration; also the denominator of
/// [`integration_percentage`].
pub const FULL_INTEGRATION_MIN_SCORE: u32 = 12;

/// Record a correct stage-1 answer.
///
/// Moves `Encoding` to `Consolidating` once enough encounters have
/// accumulated.
pub fn apply_stage1_success(progress: &mut UserSenseProgress, now: Time) {
    progress.stage1_encounters += 1;
    progress.total_weighted_score += STAGE1_WEIGHT;
    progress.last_encounter_at = now;

    if progress.integration_status == IntegrationStatus::Encoding
        && progress.stage1_encounters >= CONSOLIDATING_MIN_ENCOUNTERS
    {
        progress.integration_status = IntegrationStatus::Consolidating;
    }
}

/// Record a successful stage-2 override (the precision variant chosen
/// over the placeholder, not merely a correct answer).
///
/// Moves `Consolidating` to `Integrated` once both the override count
/// and the score threshold are met.
pub fn apply_stage2_override(progress: &mut UserSenseProgress, now: Time) {
    progress.stage2_overrides += 1;
    progress.total_weighted_score += STAGE2_WEIGHT;
    progress.last_encounter_at = now;

    if progress.integration_status == IntegrationStatus::Consolidating
        && progress.stage2_overrides >= INTEGRATED_MIN_OVERRIDES
        && progress.total_weighted_score >= INTEGRATED_MIN_SCORE
    {
        progress.integration_status = IntegrationStatus::Integrated;
    }
}

/// Record a successful stage-3 timed production.
///
/// Unlike the other transitions this one does not gate on the current
/// status: hitting the full-integration thresholds marks the record
/// `Integrated` even straight from `Encoding`.
pub fn apply_stage3_success(progress: &mut UserSenseProgress, now: Time) {
    progress.stage3_successes += 1;
    progress.total_weighted_score += STAGE3_WEIGHT;
    progress.last_encounter_at = now;

    if progress.total_weighted_score >= FULL_INTEGRATION_MIN_SCORE
        && progress.stage3_successes >= FULL_INTEGRATION_MIN_SUCCESSES
    {
        progress.integration_status = IntegrationStatus::Integrated;
    }
}

/// Percentage progress towards full integration, clamped to 100.
pub fn integration_percentage(progress: &UserSenseProgress) -> u32 {
    let pct =
        (progress.total_weighted_score as f64 / FULL_INTEGRATION_MIN_SCORE as f64 * 100.0).round();
    (pct as u32).min(100)
}

/// Whether the sense is available for stage-2 practice.
pub fn is_unlocked(progress: &UserSenseProgress) -> bool {
    progress.integration_status != IntegrationStatus::Encoding
}

/// Whether stage-2+ prompts should present the precision variant
/// rather than the placeholder form.
pub fn should_present_as_precision_variant(progress: &UserSenseProgress) -> bool {
    progress.integration_status != IntegrationStatus::Encoding
}

/// Human-readable one-line summary of a record.
pub fn summary(progress: &UserSenseProgress) -> String {
    format!(
        "Stage1({}) Stage2({}) Stage3({}) Score({}/{}) Status({})",
        progress.stage1_encounters,
        progress.stage2_overrides,
        progress.stage3_successes,
        progress.total_weighted_score,
        FULL_INTEGRATION_MIN_SCORE,
        match progress.integration_status {
            IntegrationStatus::Encoding => "ENCODING",
            IntegrationStatus::Consolidating => "CONSOLIDATING",
            IntegrationStatus::Integrated => "INTEGRATED",
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use preclang_core::{ClusterId, SenseId, UserId};

    fn fresh() -> UserSenseProgress {
        UserSenseProgress::new(
            UserId::new("user-1"),
            ClusterId::new("contact-cluster"),
            SenseId::new("reach-out"),
        )
    }

    #[test]
    fn third_stage1_success_moves_encoding_to_consolidating() {
        let mut p = fresh();
        let now = chrono::Utc::now();

        apply_stage1_success(&mut p, now);
        apply_stage1_success(&mut p, now);
        assert_eq!(p.integration_status, IntegrationStatus::Encoding);
        assert!(!is_unlocked(&p));

        apply_stage1_success(&mut p, now);
        assert_eq!(p.stage1_encounters, 3);
        assert_eq!(p.total_weighted_score, 3);
        assert_eq!(p.integration_status, IntegrationStatus::Consolidating);
        assert!(is_unlocked(&p));
        assert!(should_present_as_precision_variant(&p));
    }

    #[test]
    fn stage2_integration_needs_overrides_and_score_together() {
        // Reaches 2 overrides while the score is still below 6: the
        // count alone must not integrate.
        let mut p = fresh();
        let now = chrono::Utc::now();
        p.integration_status = IntegrationStatus::Consolidating;

        apply_stage2_override(&mut p, now);
        apply_stage2_override(&mut p, now);
        assert_eq!(p.stage2_overrides, 2);
        assert_eq!(p.total_weighted_score, 4);
        assert_eq!(p.integration_status, IntegrationStatus::Consolidating);

        apply_stage2_override(&mut p, now);
        assert_eq!(p.total_weighted_score, 6);
        assert_eq!(p.integration_status, IntegrationStatus::Integrated);
    }

    #[test]
    fn stage2_override_from_encoding_never_integrates() {
        let mut p = fresh();
        let now = chrono::Utc::now();

        for _ in 0..5 {
            apply_stage2_override(&mut p, now);
        }
        assert_eq!(p.total_weighted_score, 10);
        assert_eq!(p.integration_status, IntegrationStatus::Encoding);
    }

    #[test]
    fn stage3_integrates_regardless_of_prior_status() {
        // Four productions straight from Encoding: score 12, successes
        // 4, no consolidating step in between.
        let mut p = fresh();
        let now = chrono::Utc::now();

        for _ in 0..3 {
            apply_stage3_success(&mut p, now);
        }
        assert_eq!(p.total_weighted_score, 9);
        assert_eq!(p.integration_status, IntegrationStatus::Encoding);

        apply_stage3_success(&mut p, now);
        assert_eq!(p.total_weighted_score, 12);
        assert_eq!(p.integration_status, IntegrationStatus::Integrated);
    }

    #[test]
    fn stage3_needs_two_successes_even_at_score_twelve() {
        let mut p = fresh();
        let now = chrono::Utc::now();
        p.total_weighted_score = 11;

        apply_stage3_success(&mut p, now);
        assert_eq!(p.total_weighted_score, 14);
        assert_eq!(p.stage3_successes, 1);
        assert_eq!(p.integration_status, IntegrationStatus::Encoding);

        apply_stage3_success(&mut p, now);
        assert_eq!(p.integration_status, IntegrationStatus::Integrated);
    }

    #[test]
    fn status_never_regresses() {
        let mut p = fresh();
        let now = chrono::Utc::now();
        p.integration_status = IntegrationStatus::Integrated;

        apply_stage1_success(&mut p, now);
        apply_stage2_override(&mut p, now);
        apply_stage3_success(&mut p, now);
        assert_eq!(p.integration_status, IntegrationStatus::Integrated);
    }

    #[test]
    fn percentage_rounds_and_clamps() {
        let mut p = fresh();
        assert_eq!(integration_percentage(&p), 0);

        p.total_weighted_score = 7;
        assert_eq!(integration_percentage(&p), 58); // 58.33 rounds down

        p.total_weighted_score = 12;
        assert_eq!(integration_percentage(&p), 100);

        p.total_weighted_score = 30;
        assert_eq!(integration_percentage(&p), 100);
    }

    #[test]
    fn summary_reads_like_a_status_line() {
        let mut p = fresh();
        let now = chrono::Utc::now();
        apply_stage1_success(&mut p, now);

        assert_eq!(
            summary(&p),
            "Stage1(1) Stage2(0) Stage3(0) Score(1/12) Status(ENCODING)"
        );
    }
}
