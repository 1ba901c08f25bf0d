//! CONTACT cluster fixture.
//!
//! Hardcoded content for the CONTACT lexical field: four senses (the
//! `contact` placeholder plus the reach-out, chase-up and consult
//! precision variants) and a seven-exercise session across the three
//! stages.

use std::collections::HashMap;

use preclang_core::{
    Cluster, Exercise, ExerciseContext, ExerciseFeedback, FeedbackPath, FreeTextExercise,
    MultiChoiceExercise, Pill, Sense, Stage, TemperatureLevel, TemporalCondition,
};

use crate::catalog::{CatalogError, ExerciseCatalog, StageExercises};

const CLUSTER_ID: &str = "contact-cluster";

/// The CONTACT cluster reference data.
pub fn contact_cluster() -> Cluster {
    let senses = vec![
        Sense {
            id: "contact".into(),
            cluster_id: CLUSTER_ID.into(),
            base_word: "contact".to_string(),
            full_form_template: "contact {object}".to_string(),
            is_placeholder: true,
            requires_object: true,
            rhythmic_pattern: Some("CON-tact".to_string()),
            difficulty_level: 1,
            pill: None,
        },
        Sense {
            id: "reach-out".into(),
            cluster_id: CLUSTER_ID.into(),
            base_word: "reach out to".to_string(),
            full_form_template: "reach out to {object}".to_string(),
            is_placeholder: false,
            requires_object: true,
            rhythmic_pattern: Some("REACH out to".to_string()),
            difficulty_level: 2,
            pill: Some(reach_out_pill()),
        },
        Sense {
            id: "chase-up".into(),
            cluster_id: CLUSTER_ID.into(),
            base_word: "chase {object} up".to_string(),
            full_form_template: "chase {object} up".to_string(),
            is_placeholder: false,
            requires_object: true,
            rhythmic_pattern: Some("chase THEM up".to_string()),
            difficulty_level: 2,
            pill: Some(chase_up_pill()),
        },
        Sense {
            id: "consult".into(),
            cluster_id: CLUSTER_ID.into(),
            base_word: "consult".to_string(),
            full_form_template: "consult {object}".to_string(),
            is_placeholder: false,
            requires_object: true,
            rhythmic_pattern: Some("con-SULT".to_string()),
            difficulty_level: 3,
            pill: Some(consult_pill()),
        },
    ];

    let mut pills = HashMap::new();
    pills.insert("reach-out".into(), reach_out_pill());
    pills.insert("chase-up".into(), chase_up_pill());
    pills.insert("consult".into(), consult_pill());

    Cluster {
        id: CLUSTER_ID.into(),
        name: "CONTACT".to_string(),
        description: "Initiating or resuming communication with someone".to_string(),
        senses,
        pills,
        base_placeholder_sense_id: "contact".into(),
    }
}

fn reach_out_pill() -> Pill {
    Pill {
        id: "pill-reach-out".into(),
        sense_id: "reach-out".into(),
        role_hierarchy: "Peer or lower-status initiation".to_string(),
        speaker_goal: "Reopen communication without urgency".to_string(),
        interlocutor_goal: "Maintain autonomy".to_string(),
        participant_structure: "1-to-1 external consultation".to_string(),
        emotional_temperature: TemperatureLevel::Softened,
        temporal_condition: TemporalCondition::Neutral,
        communicative_effect: "Non-imposing, relationship-aware".to_string(),
        status_signal: "Low-Pressure Relational Initiation".to_string(),
    }
}

fn chase_up_pill() -> Pill {
    Pill {
        id: "pill-chase-up".into(),
        sense_id: "chase-up".into(),
        role_hierarchy: "Accountability pressure".to_string(),
        speaker_goal: "Secure urgent response after delays".to_string(),
        interlocutor_goal: "Acknowledge priority and respond".to_string(),
        participant_structure: "Internal team or close stakeholder".to_string(),
        emotional_temperature: TemperatureLevel::Urgent,
        temporal_condition: TemporalCondition::DelayedResponse,
        communicative_effect: "Direct, persistent, accountability-signaling".to_string(),
        status_signal: "Delayed Response Recovery - accountable follow-up".to_string(),
    }
}

fn consult_pill() -> Pill {
    Pill {
        id: "pill-consult".into(),
        sense_id: "consult".into(),
        role_hierarchy: "Expert validation hierarchy".to_string(),
        speaker_goal: "Acknowledge expertise before finalizing".to_string(),
        interlocutor_goal: "Provide authoritative input".to_string(),
        participant_structure: "Hierarchical technical consultation".to_string(),
        emotional_temperature: TemperatureLevel::Neutral,
        temporal_condition: TemporalCondition::Preemptive,
        communicative_effect: "Respectful of authority, defers to expertise".to_string(),
        status_signal: "Expertise Validation - expert consultation".to_string(),
    }
}

/// The CONTACT exercise session: 3 noticing, 2 retrieval, 2 automation.
pub fn contact_catalog() -> ExerciseCatalog {
    ExerciseCatalog::new(vec![
        StageExercises {
            stage: Stage::Noticing,
            exercises: vec![s1_e1(), s1_e2(), s1_e3()],
        },
        StageExercises {
            stage: Stage::Retrieval,
            exercises: vec![s2_e1(), s2_e2()],
        },
        StageExercises {
            stage: Stage::Automation,
            exercises: vec![s3_e1(), s3_e2()],
        },
    ])
}

fn context(
    user_role: &str,
    user_goal: &str,
    interlocutor: &str,
    interlocutor_goal: &str,
    background: &str,
) -> ExerciseContext {
    ExerciseContext {
        user_role: user_role.to_string(),
        user_goal: user_goal.to_string(),
        interlocutor: interlocutor.to_string(),
        interlocutor_goal: interlocutor_goal.to_string(),
        background: background.to_string(),
        initial_dialogue: None,
    }
}

fn feedback(
    correct: (&str, &str, &str),
    incorrect: (&str, &str, &str),
) -> ExerciseFeedback {
    ExerciseFeedback {
        correct: FeedbackPath {
            interlocutor_reaction: correct.0.to_string(),
            alignment: correct.1.to_string(),
            signal: correct.2.to_string(),
        },
        incorrect: FeedbackPath {
            interlocutor_reaction: incorrect.0.to_string(),
            alignment: incorrect.1.to_string(),
            signal: incorrect.2.to_string(),
        },
    }
}

fn s1_e1() -> Exercise {
    Exercise::MultiChoice(MultiChoiceExercise {
        id: "s1-e1".into(),
        stage: Stage::Noticing,
        scenario: "Email sent last month about a non-urgent proposal. You are drafting \
                   a follow-up message."
            .to_string(),
        prompt: "I'd like to ______ regarding the earlier proposal.".to_string(),
        placeholder: Some("contact you".to_string()),
        scenario_highlight: Some("non-urgent".to_string()),
        options: vec!["contact you".to_string(), "reach out to you".to_string()],
        correct: "reach out to you".to_string(),
        distractors: Vec::new(),
        pill: Some("Low-Pressure Relational Initiation".to_string()),
        sense_id: Some("reach-out".into()),
        context: context(
            "Project Manager",
            "Reopen communication without urgency",
            "External Consultant",
            "Maintain autonomy",
            "Email sent last month. Non-urgent matter. Re-establishing dialogue.",
        ),
        feedback: feedback(
            (
                "Thanks for reaching out — happy to revisit this.",
                "Goal alignment: ✅",
                "Status signal: Non-imposing, relationship-aware",
            ),
            (
                "Understood. Is this time-sensitive?",
                "Goal alignment: ?",
                "Status signal: Slight urgency projection",
            ),
        ),
    })
}

fn s1_e2() -> Exercise {
    Exercise::MultiChoice(MultiChoiceExercise {
        id: "s1-e2".into(),
        stage: Stage::Noticing,
        scenario: "Two emails sent. No reply. Deadline tomorrow. You need to follow up \
                   with urgency."
            .to_string(),
        prompt: "You now need to ______.".to_string(),
        placeholder: Some("contact them".to_string()),
        scenario_highlight: Some("Deadline tomorrow".to_string()),
        options: vec!["contact them".to_string(), "chase them up".to_string()],
        correct: "chase them up".to_string(),
        distractors: Vec::new(),
        pill: Some("Delayed Response Recovery".to_string()),
        sense_id: Some("chase-up".into()),
        context: context(
            "Project Lead",
            "Secure urgent response",
            "Team Member",
            "Acknowledge priority",
            "Two emails sent. No response. Deadline imminent. Accountability pressure.",
        ),
        feedback: feedback(
            (
                "Sorry — I'll get back to you by EOD.",
                "Goal alignment: ✅",
                "Status signal: Accountable follow-up, urgency registered",
            ),
            (
                "Noted.",
                "Goal alignment: ?",
                "Status signal: Neutral re-contact, urgency unclear",
            ),
        ),
    })
}

fn s1_e3() -> Exercise {
    Exercise::MultiChoice(MultiChoiceExercise {
        id: "s1-e3".into(),
        stage: Stage::Noticing,
        scenario: "You're introducing yourself to a potential collaborator in a polite, \
                   non-urgent way."
            .to_string(),
        prompt: "Hello, I'm ______ to enquire about collaboration.".to_string(),
        placeholder: Some("contacting you".to_string()),
        scenario_highlight: Some("polite, non-urgent".to_string()),
        options: vec![
            "contacting you".to_string(),
            "reaching out to you".to_string(),
        ],
        correct: "reaching out to you".to_string(),
        distractors: Vec::new(),
        pill: Some("Low-Pressure Relational Initiation".to_string()),
        sense_id: Some("reach-out".into()),
        context: context(
            "Researcher",
            "Politely open a collaboration",
            "Potential Partner",
            "Assess fit without pressure",
            "Initial outreach message. Low stakes: want to open dialogue while \
             signalling deference.",
        ),
        feedback: feedback(
            (
                "Thanks for reaching out — I'd be open to a chat.",
                "Goal alignment: ✅",
                "Status signal: Polite, non-imposing initiation",
            ),
            (
                "Okay — is this urgent?",
                "Goal alignment: ?",
                "Status signal: Slight pressure implied",
            ),
        ),
    })
}

fn s2_e1() -> Exercise {
    Exercise::MultiChoice(MultiChoiceExercise {
        id: "s2-e1".into(),
        stage: Stage::Retrieval,
        scenario: "Two emails sent. No response. Deadline imminent. You're scheduling \
                   follow-up with Operations lead."
            .to_string(),
        prompt: "You tell your manager: \"I'll ______ them again tomorrow.\"".to_string(),
        placeholder: None,
        scenario_highlight: None,
        options: vec![
            "contact them".to_string(),
            "chase them up".to_string(),
            "consult them".to_string(),
        ],
        correct: "chase them up".to_string(),
        distractors: vec!["consult them".to_string()],
        pill: None,
        sense_id: Some("chase-up".into()),
        context: context(
            "Operations Lead",
            "Signal persistent follow-up",
            "Finance Team",
            "Prioritize delayed response",
            "Two emails. No reply. Deadline imminent. Accountability pressure.",
        ),
        feedback: feedback(
            (
                "Apologies — we'll prioritise this.",
                "Goal alignment: ✅",
                "Status signal: Persistent follow-up registered",
            ),
            (
                "Understood.",
                "Goal alignment: ?",
                "Status signal: Indirect approach, pressure unclear",
            ),
        ),
    })
}

fn s2_e2() -> Exercise {
    let mut context = context(
        "Analyst",
        "Acknowledge expertise hierarchy",
        "Director",
        "Ensure validation by qualified team",
        "Director requesting technical validation. Authority acknowledgment required.",
    );
    context.initial_dialogue = Some(
        "Can you confirm the modelling assumptions before we finalize the proposals?"
            .to_string(),
    );

    Exercise::MultiChoice(MultiChoiceExercise {
        id: "s2-e2".into(),
        stage: Stage::Retrieval,
        scenario: "Director asks about modelling assumptions before finalising \
                   proposals. You need to validate with the data science team."
            .to_string(),
        prompt: "You respond: \"I'll ______ the data science team before finalising.\""
            .to_string(),
        placeholder: None,
        scenario_highlight: None,
        options: vec![
            "contact the data science team".to_string(),
            "consult the data science team".to_string(),
            "reach out to the data science team".to_string(),
        ],
        correct: "consult the data science team".to_string(),
        distractors: vec!["reach out to the data science team".to_string()],
        pill: None,
        sense_id: None,
        context,
        feedback: feedback(
            (
                "Good — I trust their methodology.",
                "Goal alignment: ✅",
                "Status signal: Expert consultation, expertise validated",
            ),
            (
                "That's not the issue.",
                "Goal alignment: ❌",
                "Status signal: Wrong variable activated",
            ),
        ),
    })
}

fn s3_e1() -> Exercise {
    Exercise::FreeText(FreeTextExercise {
        id: "s3-e1".into(),
        stage: Stage::Automation,
        prompt: "Investor waiting. Two weeks silence. Respond.".to_string(),
        time_seconds: 5,
        required_words: vec!["chase".to_string(), "up".to_string()],
        pattern: Some(r"chase\s+(it|them)\s+up".to_string()),
        sense_id: Some("chase-up".into()),
        context: Some(context(
            "Startup Founder",
            "Re-engage investor with urgency",
            "Investor",
            "See commitment and urgency",
            "Two weeks of silence from investor side. Time-sensitive pitch. Need to \
             recapture attention.",
        )),
    })
}

fn s3_e2() -> Exercise {
    Exercise::FreeText(FreeTextExercise {
        id: "s3-e2".into(),
        stage: Stage::Automation,
        prompt: "You're following up after a week to reopen discussion. Respond concisely."
            .to_string(),
        time_seconds: 6,
        required_words: vec!["reach".to_string(), "out".to_string()],
        pattern: None,
        sense_id: Some("reach-out".into()),
        context: Some(context(
            "Business Development Manager",
            "Reopen collaboration discussion",
            "Strategic Partner",
            "Resume partnership talks",
            "Week of silence after initial proposal. Non-urgent but needs warm \
             re-engagement.",
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_catalog_passes_validation() {
        contact_catalog().validate().unwrap();
    }

    #[test]
    fn contact_catalog_has_seven_exercises_in_three_stages() {
        let catalog = contact_catalog();
        assert_eq!(catalog.stage_count(), 3);
        assert_eq!(catalog.total_exercises(), 7);

        let per_stage: Vec<usize> = catalog
            .stages()
            .iter()
            .map(|s| s.exercises.len())
            .collect();
        assert_eq!(per_stage, vec![3, 2, 2]);
    }

    #[test]
    fn stage_fields_agree_with_stage_position() {
        let catalog = contact_catalog();
        for stage_set in catalog.stages() {
            for exercise in &stage_set.exercises {
                assert_eq!(exercise.stage(), stage_set.stage);
            }
        }
    }

    #[test]
    fn cluster_links_pills_to_precision_variants_only() {
        let cluster = contact_cluster();
        assert_eq!(cluster.senses.len(), 4);
        assert_eq!(cluster.pills.len(), 3);

        let placeholder = cluster.placeholder().unwrap();
        assert!(placeholder.is_placeholder);
        assert!(placeholder.pill.is_none());
        assert!(cluster.pill_for(&placeholder.id).is_none());

        for sense in cluster.senses.iter().filter(|s| !s.is_placeholder) {
            let pill = cluster.pill_for(&sense.id).unwrap();
            assert_eq!(pill.sense_id, sense.id);
        }
    }

    #[test]
    fn every_catalog_sense_exists_in_the_cluster() {
        let cluster = contact_cluster();
        let catalog = contact_catalog();
        for stage_set in catalog.stages() {
            for exercise in &stage_set.exercises {
                if let Some(sense_id) = exercise.sense_id() {
                    assert!(
                        cluster.sense(sense_id).is_some(),
                        "unknown sense {sense_id} in {}",
                        exercise.id()
                    );
                }
            }
        }
    }

    #[test]
    fn validation_rejects_correct_outside_options() {
        let mut catalog = contact_catalog();
        let bad = {
            let Exercise::MultiChoice(mut e) = s1_e1() else {
                unreachable!()
            };
            e.correct = "ping you".to_string();
            Exercise::MultiChoice(e)
        };
        let mut stages: Vec<StageExercises> = catalog.stages().to_vec();
        stages[0].exercises[0] = bad;
        catalog = ExerciseCatalog::new(stages);

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::CorrectNotInOptions { .. })
        ));
    }
}
