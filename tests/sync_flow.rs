//! End-to-end synchronization flows over the in-memory adapters.
//!
//! These tests drive [`ChallengeSyncService`] the way the event-consumer
//! boundary does: a raw envelope in, legacy rows (or a refusal) out.

use chrono::Utc;
use mockable::DefaultClock;
use std::sync::Arc;
use uuid::Uuid;
use viaduct::event::ValidationError;
use viaduct::event::domain::{
    CHALLENGE_CREATE_TOPIC, CHALLENGE_UPDATE_TOPIC, ChallengePayload, EventMessage, PhasePayload,
    PrizePayload, PrizeSetPayload,
};
use viaduct::sync::SyncError;
use viaduct::sync::adapters::markdown::CommonMarkRenderer;
use viaduct::sync::adapters::memory::{
    InMemoryIdentifierAllocator, InMemoryLegacyStore, InMemoryMetadataResolver,
};
use viaduct::sync::domain::{
    ComponentId, ComponentRow, ComponentVersionId, ComponentVersionRow, LegacyChallenge,
    LegacyChallengeId, SENTINEL_PHASE_TIME, Technology,
};
use viaduct::sync::ports::AuthToken;
use viaduct::sync::services::ChallengeSyncService;

type TestService = ChallengeSyncService<
    InMemoryMetadataResolver,
    CommonMarkRenderer,
    DefaultClock,
    InMemoryIdentifierAllocator,
    InMemoryLegacyStore,
>;

const DEVELOP_TYPE_ID: Uuid = Uuid::from_u128(0xC0DE);
const LEGACY_ID: i64 = 30_054_674;

fn service_over(
    resolver: InMemoryMetadataResolver,
    store: Arc<InMemoryLegacyStore>,
) -> TestService {
    ChallengeSyncService::new(
        Arc::new(resolver),
        Arc::new(CommonMarkRenderer::new()),
        Arc::new(DefaultClock),
        Arc::new(InMemoryIdentifierAllocator::starting_at(5000)),
        store,
    )
}

fn catalogue_resolver() -> InMemoryMetadataResolver {
    InMemoryMetadataResolver::new()
        .with_challenge_type(DEVELOP_TYPE_ID, "Development")
        .with_technologies([Technology {
            id: 101,
            name: "Java".to_owned(),
        }])
        .with_platforms(Vec::new())
}

fn create_event() -> EventMessage {
    EventMessage {
        topic: CHALLENGE_CREATE_TOPIC.to_owned(),
        originator: "challenge-api".to_owned(),
        timestamp: Utc::now(),
        mime_type: Some("application/json".to_owned()),
        payload: ChallengePayload {
            id: Some(Uuid::from_u128(0x51C7)),
            type_id: Some(DEVELOP_TYPE_ID),
            legacy_id: None,
            track: Some("Develop".to_owned()),
            name: Some("File Upload Widget".to_owned()),
            description: Some("# Requirements".to_owned()),
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
            markdown: Some(true),
            tags: Some(vec!["Java".to_owned()]),
            project_id: Some(8913),
            forum_id: Some(45_662),
        },
    }
}

fn update_event(payload: ChallengePayload) -> EventMessage {
    EventMessage {
        topic: CHALLENGE_UPDATE_TOPIC.to_owned(),
        originator: "challenge-api".to_owned(),
        timestamp: Utc::now(),
        mime_type: Some("application/json".to_owned()),
        payload,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_event_materializes_the_component_aggregate() -> eyre::Result<()> {
    let store = Arc::new(InMemoryLegacyStore::new());
    let service = service_over(catalogue_resolver(), Arc::clone(&store));

    let ids = service
        .handle_create(&create_event(), &AuthToken::new("m2m-token"))
        .await?;

    let component = store
        .component(ids.component_id)
        .ok_or_else(|| eyre::eyre!("component row missing"))?;
    assert_eq!(component.name, "File Upload Widget");
    assert_eq!(component.status_id, 102);
    assert_eq!(component.root_category_id, 34);

    let state = store.snapshot();
    assert_eq!(state.category_links.len(), 1);
    assert_eq!(state.versions.len(), 1);
    assert_eq!(state.version_dates.len(), 1);
    // The sole tag matched the sole technology on a Development track.
    assert_eq!(store.technology_links_for(ids.version_id).len(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_create_event_is_rejected_before_any_write() {
    let store = Arc::new(InMemoryLegacyStore::new());
    let service = service_over(catalogue_resolver(), Arc::clone(&store));
    let mut event = create_event();
    event.payload.name = None;

    let result = service
        .handle_create(&event, &AuthToken::new("m2m-token"))
        .await;

    assert!(matches!(
        result,
        Err(SyncError::Validation(ValidationError::MissingField("name")))
    ));
    assert_eq!(store.component_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_event_renames_the_stored_component() -> eyre::Result<()> {
    let store = Arc::new(InMemoryLegacyStore::new());
    let component_id = ComponentId::new(3003);
    let version_id = ComponentVersionId::new(7007);
    store.seed_component(
        ComponentRow {
            component_id,
            current_version: 1,
            short_description: "NA".to_owned(),
            long_description: "NA".to_owned(),
            function_description: "NA".to_owned(),
            status_id: 102,
            root_category_id: 34,
            name: "File Upload Widget".to_owned(),
        },
        ComponentVersionRow {
            version_id,
            component_id,
            version: 1,
            version_text: "1.0".to_owned(),
            phase_id: 112,
            phase_time: SENTINEL_PHASE_TIME,
            price: 0.0,
        },
    );
    let resolver = catalogue_resolver()
        .with_challenge(LegacyChallenge {
            legacy_id: LegacyChallengeId::new(LEGACY_ID),
            category_id: 34,
            category_name: "Not Set".to_owned(),
            studio: false,
        })
        .with_component_version(LegacyChallengeId::new(LEGACY_ID), version_id)
        .with_component(version_id, component_id);
    let service = service_over(resolver, Arc::clone(&store));
    let event = update_event(ChallengePayload {
        legacy_id: Some(LEGACY_ID),
        name: Some("File Upload Widget v2".to_owned()),
        ..ChallengePayload::default()
    });

    service
        .handle_update(&event, &AuthToken::new("m2m-token"))
        .await?;

    let component = store
        .component(component_id)
        .ok_or_else(|| eyre::eyre!("component row missing"))?;
    assert_eq!(component.name, "File Upload Widget v2");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_without_legacy_id_is_rejected() {
    let store = Arc::new(InMemoryLegacyStore::new());
    let service = service_over(catalogue_resolver(), Arc::clone(&store));
    let event = update_event(ChallengePayload::default());

    let result = service
        .handle_update(&event, &AuthToken::new("m2m-token"))
        .await;

    assert!(matches!(
        result,
        Err(SyncError::Validation(ValidationError::MissingField(
            "legacyId"
        )))
    ));
}
