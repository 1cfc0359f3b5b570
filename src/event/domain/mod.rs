//! Domain model for inbound challenge-lifecycle events.
//!
//! The envelope and payload types mirror the JSON shape produced by the
//! challenge API's event stream. Field-level requirements differ between
//! create and update events, so every payload field beyond the envelope is
//! optional here; the [`validation`](super::validation) rules decide which
//! fields an event kind must carry.

mod message;
mod payload;

pub use message::{CHALLENGE_CREATE_TOPIC, CHALLENGE_UPDATE_TOPIC, EventMessage};
pub use payload::{
    CHECKPOINT_PRIZE_SET_TYPE, CHECKPOINT_SUBMISSION_PHASE, ChallengePayload, PhasePayload,
    PrizePayload, PrizeSetPayload, REGISTRATION_PHASE, SUBMISSION_PHASE,
};
