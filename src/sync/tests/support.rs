//! Shared fixtures for the synchronization tests.

use crate::event::domain::{ChallengePayload, PhasePayload, PrizePayload, PrizeSetPayload};
use crate::sync::adapters::memory::InMemoryMetadataResolver;
use crate::sync::domain::{Platform, PrizeSummary, Technology, derive_prize_summary};
use crate::sync::ports::AuthToken;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use uuid::Uuid;

/// Challenge-type id the catalogue resolver maps to the Development track.
pub const DEVELOP_TYPE_ID: Uuid = Uuid::from_u128(0xC0DE);

/// Clock pinned to one instant, keeping schedule assertions exact.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid anchor instant")
}

pub fn token() -> AuthToken {
    AuthToken::new("m2m-token")
}

pub fn java_technology() -> Technology {
    Technology {
        id: 101,
        name: "Java".to_owned(),
    }
}

pub fn rust_technology() -> Technology {
    Technology {
        id: 109,
        name: "Rust".to_owned(),
    }
}

pub fn linux_platform() -> Platform {
    Platform {
        id: 201,
        name: "Linux".to_owned(),
    }
}

/// Resolver preloaded with the catalogue rows the happy paths need.
pub fn catalogue_resolver() -> InMemoryMetadataResolver {
    InMemoryMetadataResolver::new()
        .with_challenge_type(DEVELOP_TYPE_ID, "Development")
        .with_technologies([java_technology(), rust_technology()])
        .with_platforms([linux_platform()])
}

pub fn code_prize_set() -> PrizeSetPayload {
    PrizeSetPayload {
        set_type: "Code".to_owned(),
        prizes: vec![PrizePayload { value: 1000.0 }, PrizePayload { value: 500.0 }],
    }
}

pub fn checkpoint_prize_set() -> PrizeSetPayload {
    PrizeSetPayload {
        set_type: "CheckPoint".to_owned(),
        prizes: vec![PrizePayload { value: 200.0 }, PrizePayload { value: 150.0 }],
    }
}

/// Prize summary of a lone Code set, for drafts built by hand.
pub fn code_prizes() -> PrizeSummary {
    derive_prize_summary(&[code_prize_set()]).expect("single prize set")
}

/// Complete create-event payload aimed at the catalogue resolver.
pub fn create_payload() -> ChallengePayload {
    ChallengePayload {
        id: Some(Uuid::from_u128(0x51C7)),
        type_id: Some(DEVELOP_TYPE_ID),
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
        prize_sets: Some(vec![code_prize_set()]),
        review_type: Some("COMMUNITY".to_owned()),
        markdown: Some(false),
        tags: Some(vec!["Java".to_owned(), "Linux".to_owned(), "Agile".to_owned()]),
        project_id: Some(8913),
        forum_id: Some(45_662),
    }
}
