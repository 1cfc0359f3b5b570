//! Schema-validation rule tests for create and update payloads.

use crate::event::ValidationError;
use crate::event::domain::{ChallengePayload, PhasePayload, PrizePayload, PrizeSetPayload};
use crate::event::validation::{validate_create, validate_update};
use rstest::{fixture, rstest};
use uuid::Uuid;

#[fixture]
fn create_payload() -> ChallengePayload {
    ChallengePayload {
        id: Some(Uuid::from_u128(0x51C7)),
        type_id: Some(Uuid::from_u128(0xC0DE)),
        legacy_id: None,
        track: Some("Develop".to_owned()),
        name: Some("File Upload Widget".to_owned()),
        description: Some("Build the widget.".to_owned()),
        phases: Some(vec![
            PhasePayload {
                name: "Registration".to_owned(),
                duration: 86_400,
            },
            PhasePayload {
                name: "Submission".to_owned(),
                duration: 172_800,
            },
        ]),
        prize_sets: Some(vec![PrizeSetPayload {
            set_type: "Code".to_owned(),
            prizes: vec![PrizePayload { value: 1000.0 }, PrizePayload { value: 500.0 }],
        }]),
        review_type: Some("COMMUNITY".to_owned()),
        markdown: Some(false),
        tags: Some(vec!["Java".to_owned()]),
        project_id: Some(8913),
        forum_id: Some(45_662),
    }
}

#[rstest]
fn complete_create_payload_passes(create_payload: ChallengePayload) {
    assert_eq!(validate_create(&create_payload), Ok(()));
}

#[rstest]
fn create_rejects_missing_track(mut create_payload: ChallengePayload) {
    create_payload.track = None;
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::MissingField("track"))
    );
}

#[rstest]
fn create_rejects_missing_type_id(mut create_payload: ChallengePayload) {
    create_payload.type_id = None;
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::MissingField("typeId"))
    );
}

#[rstest]
fn create_rejects_missing_markdown_flag(mut create_payload: ChallengePayload) {
    create_payload.markdown = None;
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::MissingField("markdown"))
    );
}

#[rstest]
fn create_rejects_empty_phase_list(mut create_payload: ChallengePayload) {
    create_payload.phases = Some(Vec::new());
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::EmptyList("phases"))
    );
}

#[rstest]
fn create_rejects_zero_phase_duration(mut create_payload: ChallengePayload) {
    create_payload.phases = Some(vec![
        PhasePayload {
            name: "Registration".to_owned(),
            duration: 0,
        },
        PhasePayload {
            name: "Submission".to_owned(),
            duration: 172_800,
        },
    ]);
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::NonPositive("phases.duration"))
    );
}

#[rstest]
fn create_rejects_phase_list_without_submission(mut create_payload: ChallengePayload) {
    create_payload.phases = Some(vec![PhasePayload {
        name: "Registration".to_owned(),
        duration: 86_400,
    }]);
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::MissingPhase("Submission"))
    );
}

#[rstest]
fn create_rejects_empty_tag_list(mut create_payload: ChallengePayload) {
    create_payload.tags = Some(Vec::new());
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::EmptyList("tags"))
    );
}

#[rstest]
fn create_rejects_prize_set_without_prizes(mut create_payload: ChallengePayload) {
    create_payload.prize_sets = Some(vec![PrizeSetPayload {
        set_type: "Code".to_owned(),
        prizes: Vec::new(),
    }]);
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::EmptyList("prizeSets.prizes"))
    );
}

#[rstest]
fn create_rejects_non_positive_prize_value(mut create_payload: ChallengePayload) {
    create_payload.prize_sets = Some(vec![PrizeSetPayload {
        set_type: "Code".to_owned(),
        prizes: vec![PrizePayload { value: 0.0 }],
    }]);
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::NonPositive("prizeSets.prizes.value"))
    );
}

#[rstest]
#[case(0)]
#[case(-4)]
fn create_rejects_non_positive_project_id(
    mut create_payload: ChallengePayload,
    #[case] project_id: i64,
) {
    create_payload.project_id = Some(project_id);
    assert_eq!(
        validate_create(&create_payload),
        Err(ValidationError::NonPositive("projectId"))
    );
}

#[rstest]
fn minimal_update_payload_passes_and_yields_the_legacy_id() {
    let payload = ChallengePayload {
        legacy_id: Some(30_054_674),
        ..ChallengePayload::default()
    };
    assert_eq!(validate_update(&payload), Ok(30_054_674));
}

#[rstest]
fn update_rejects_missing_legacy_id() {
    let payload = ChallengePayload::default();
    assert_eq!(
        validate_update(&payload),
        Err(ValidationError::MissingField("legacyId"))
    );
}

#[rstest]
fn update_rejects_non_positive_legacy_id() {
    let payload = ChallengePayload {
        legacy_id: Some(0),
        ..ChallengePayload::default()
    };
    assert_eq!(
        validate_update(&payload),
        Err(ValidationError::NonPositive("legacyId"))
    );
}

#[rstest]
fn update_checks_shape_of_supplied_phases() {
    let payload = ChallengePayload {
        legacy_id: Some(30_054_674),
        phases: Some(vec![PhasePayload {
            name: "Submission".to_owned(),
            duration: 172_800,
        }]),
        ..ChallengePayload::default()
    };
    assert_eq!(
        validate_update(&payload),
        Err(ValidationError::MissingPhase("Registration"))
    );
}

#[rstest]
fn update_checks_shape_of_supplied_tags(create_payload: ChallengePayload) {
    let payload = ChallengePayload {
        legacy_id: Some(30_054_674),
        tags: Some(Vec::new()),
        ..create_payload
    };
    assert_eq!(
        validate_update(&payload),
        Err(ValidationError::EmptyList("tags"))
    );
}
