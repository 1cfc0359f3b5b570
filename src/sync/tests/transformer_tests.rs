//! Payload transformation tests with a pinned clock.

use super::support::{
    DEVELOP_TYPE_ID, FixedClock, anchor, catalogue_resolver, create_payload, java_technology,
    linux_platform, token,
};
use crate::event::ValidationError;
use crate::event::domain::PhasePayload;
use crate::sync::SyncError;
use crate::sync::adapters::markdown::CommonMarkRenderer;
use crate::sync::adapters::memory::InMemoryMetadataResolver;
use crate::sync::services::PayloadTransformer;
use chrono::Duration;
use rstest::{fixture, rstest};
use std::sync::Arc;

type TestTransformer = PayloadTransformer<InMemoryMetadataResolver, CommonMarkRenderer, FixedClock>;

fn transformer_with(resolver: InMemoryMetadataResolver) -> TestTransformer {
    PayloadTransformer::new(
        Arc::new(resolver),
        Arc::new(CommonMarkRenderer::new()),
        Arc::new(FixedClock(anchor())),
    )
}

#[fixture]
fn transformer() -> TestTransformer {
    transformer_with(catalogue_resolver())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn draft_carries_resolved_track_and_fixed_fields(transformer: TestTransformer) {
    let draft = transformer
        .draft_component(&create_payload(), &token())
        .await
        .expect("transformation should succeed");

    // The type-id lookup wins over the raw track string.
    assert_eq!(draft.track, "Development");
    assert!(!draft.is_studio);
    assert_eq!(draft.name, "File Upload Widget");
    assert_eq!(draft.review_type, "COMMUNITY");
    assert_eq!(draft.external_project_id, 8913);
    assert_eq!(draft.forum_id, 45_662);
    assert_eq!(draft.confidentiality, "public");
    assert_eq!(draft.milestone_id, 1);
    assert!(draft.submission_visible);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn schedule_is_anchored_at_the_clock_instant(transformer: TestTransformer) {
    let draft = transformer
        .draft_component(&create_payload(), &token())
        .await
        .expect("transformation should succeed");

    assert_eq!(draft.schedule.registration_starts_at, anchor());
    assert_eq!(
        draft.schedule.registration_ends_at,
        anchor() + Duration::seconds(86_400)
    );
    assert_eq!(
        draft.schedule.submission_ends_at,
        anchor() + Duration::seconds(172_800)
    );
    assert!(draft.schedule.checkpoint.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checkpoint_phase_opens_a_checkpoint_window(transformer: TestTransformer) {
    let mut payload = create_payload();
    payload
        .phases
        .as_mut()
        .expect("payload has phases")
        .push(PhasePayload {
            name: "Checkpoint Submission".to_owned(),
            duration: 43_200,
        });

    let draft = transformer
        .draft_component(&payload, &token())
        .await
        .expect("transformation should succeed");

    let window = draft.schedule.checkpoint.expect("checkpoint window");
    assert_eq!(window.starts_at, anchor());
    assert_eq!(window.ends_at, anchor() + Duration::seconds(43_200));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn markdown_descriptions_are_rendered_to_html(transformer: TestTransformer) {
    let mut payload = create_payload();
    payload.description = Some("# Requirements".to_owned());
    payload.markdown = Some(true);

    let draft = transformer
        .draft_component(&payload, &token())
        .await
        .expect("transformation should succeed");

    assert!(draft.detailed_requirements.contains("<h1>Requirements</h1>"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn plain_descriptions_pass_through_untouched(transformer: TestTransformer) {
    let mut payload = create_payload();
    payload.description = Some("# not markdown".to_owned());
    payload.markdown = Some(false);

    let draft = transformer
        .draft_component(&payload, &token())
        .await
        .expect("transformation should succeed");

    assert_eq!(draft.detailed_requirements, "# not markdown");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tags_match_catalogues_exactly_and_unknowns_drop(transformer: TestTransformer) {
    let draft = transformer
        .draft_component(&create_payload(), &token())
        .await
        .expect("transformation should succeed");

    // Tags were Java, Linux, Agile: one technology, one platform, one drop.
    assert_eq!(draft.technologies, vec![java_technology()]);
    assert_eq!(draft.platforms, vec![linux_platform()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn raw_track_is_used_when_no_type_id_is_present(transformer: TestTransformer) {
    let mut payload = create_payload();
    payload.type_id = None;
    payload.track = Some("Web Design".to_owned());

    let draft = transformer
        .draft_component(&payload, &token())
        .await
        .expect("transformation should succeed");

    assert_eq!(draft.track, "Web Design");
    assert!(draft.is_studio);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn upstream_rejection_surfaces_its_message() {
    let transformer = transformer_with(
        catalogue_resolver().with_failing_type_lookup("token rejected by type service"),
    );

    let result = transformer.draft_component(&create_payload(), &token()).await;

    let Err(SyncError::UpstreamLookup { message }) = result else {
        panic!("expected an upstream lookup failure");
    };
    assert_eq!(message, "token rejected by type service");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_track_and_type_id_is_a_validation_error(transformer: TestTransformer) {
    let mut payload = create_payload();
    payload.type_id = None;
    payload.track = None;

    let result = transformer.draft_component(&payload, &token()).await;

    assert!(matches!(
        result,
        Err(SyncError::Validation(ValidationError::MissingField("track")))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn amendment_reflects_only_the_supplied_aspects(transformer: TestTransformer) {
    let mut payload = create_payload();
    payload.type_id = None;
    payload.track = None;
    payload.description = None;
    payload.prize_sets = None;
    payload.tags = None;
    payload.name = Some("Renamed Widget".to_owned());

    let amendment = transformer
        .draft_amendment(&payload, &token())
        .await
        .expect("transformation should succeed");

    assert!(amendment.track.is_none());
    assert_eq!(amendment.name.as_deref(), Some("Renamed Widget"));
    assert!(amendment.detailed_requirements.is_none());
    assert!(amendment.prizes.is_none());
    assert!(amendment.technologies.is_empty());
    assert!(amendment.platforms.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn amendment_resolves_track_and_tags_when_present(transformer: TestTransformer) {
    let mut payload = create_payload();
    payload.type_id = Some(DEVELOP_TYPE_ID);
    payload.tags = Some(vec!["Rust".to_owned(), "Linux".to_owned()]);

    let amendment = transformer
        .draft_amendment(&payload, &token())
        .await
        .expect("transformation should succeed");

    assert_eq!(amendment.track.as_deref(), Some("Development"));
    assert_eq!(amendment.technologies.len(), 1);
    assert_eq!(amendment.platforms, vec![linux_platform()]);
    assert!(amendment.prizes.is_some());
}
