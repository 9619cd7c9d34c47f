//! # BandConnect - registration rules
//!
//! Everything the musician and band registration forms decide, without any
//! rendering or networking: field validation, tag selection, audio sample
//! staging, the three-step state machine and payload assembly.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  Event   ┌──────────────────┐  Effect::Send   ┌─────────────┐
//! │   View   │─────────▶│ RegistrationForm │────────────────▶│  Transport  │
//! │ (Leptos) │◀─────────│  step · draft ·  │◀────────────────│ (HTTP, log) │
//! └──────────┘  state   │ errors · notice  │ Event::Completed└─────────────┘
//!                       └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bandconnect::{dispatch, Event, Field, FormKind, LogTransport, RegistrationForm};
//!
//! let mut form: RegistrationForm<()> = RegistrationForm::new(FormKind::Band);
//! dispatch(&mut form, &LogTransport, Event::Edit(Field::BandName, "The Lees".into())).await;
//! dispatch(&mut form, &LogTransport, Event::Submit).await;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Upload, password, bio and year limits
//! - [`error`] - Error taxonomy (field, tag, upload, submission)
//! - [`models`] - Vocabularies, social links, notices
//! - [`tags`] - Multi-select tag sets
//! - [`upload`] - Audio sample staging policy
//! - [`validation`] - Field identifiers, rules and specs
//! - [`step`] - Step sequence and advance policy
//! - [`form`] - Form schema, draft and state machine
//! - [`payload`] - Multipart payload assembly
//! - [`submit`] - Transport seam and dispatch

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Draft building blocks
pub mod tags;
pub mod upload;
pub mod validation;

// State machine
pub mod step;
pub mod form;

// Submission
pub mod payload;
pub mod submit;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ErrorKind,
    FieldError,
    FileIssue,
    SubmitError,
    SubmitResult,
    TagError,
    UploadError,
    UploadResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Notice,
    NoticeLevel,
    SocialLinks,
    SocialNetwork,
    BAND_POSITIONS,
    EXPERIENCE_LEVELS,
    GENRES,
    INSTRUMENTS,
};

// =============================================================================
// Re-exports - Draft
// =============================================================================

pub use tags::{TagGroup, TagSet};
pub use upload::{is_audio_mime, StagedUpload, UploadStage};
pub use validation::{
    current_year,
    is_valid_email,
    Field,
    FieldSpec,
    InputKind,
    Rule,
    SelectOptions,
    ValidationErrors,
};

// =============================================================================
// Re-exports - Form
// =============================================================================

pub use step::{AdvancePolicy, Step};
pub use form::{Draft, Effect, Event, FormKind, PayloadEntry, RegistrationForm, SubmissionState};

// =============================================================================
// Re-exports - Submission
// =============================================================================

pub use payload::{PayloadPart, RegistrationPayload};
pub use submit::{dispatch, LogTransport, Transport};
