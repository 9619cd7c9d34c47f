//! Registration form state machine.
//!
//! A [`RegistrationForm`] owns everything one open form needs: the visible
//! [`Step`], the [`Draft`] being edited, inline field errors, the submission
//! state and the pending [`Notice`]. The view feeds it [`Event`]s through
//! [`RegistrationForm::update`] and renders whatever state results; when an
//! event requires network work, `update` hands back an [`Effect::Send`]
//! with the payload, and the outcome comes back as [`Event::Completed`].
//!
//! ```text
//!  Step 1 ──Next──▶ Step 2 ──Next──▶ Step 3 ──Submit──▶ (request in flight)
//!    ▲                │  ▲              │                    │
//!    └──────Back──────┘  └─────Back─────┘     ok: fresh form + success notice
//!                                             err: same draft + error notice
//! ```
//!
//! [`FormKind`] carries the schema that differs between the musician and
//! band forms (fields per step, tag groups, social links, payload layout).

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::{BAND_BIO_MAX_LEN, MIN_FORMATION_YEAR, MIN_PASSWORD_LEN, MUSICIAN_BIO_MAX_LEN};
use crate::error::SubmitResult;
use crate::models::{Notice, SocialLinks, SocialNetwork, EXPERIENCE_LEVELS, INSTRUMENTS};
use crate::payload::{self, RegistrationPayload};
use crate::step::{AdvancePolicy, Step};
use crate::tags::{TagGroup, TagSet};
use crate::upload::{StagedUpload, UploadStage};
use crate::validation::{Field, FieldSpec, InputKind, Rule, SelectOptions, ValidationErrors};

// =============================================================================
// Field Schemas
// =============================================================================

const EXPERIENCE_VALUES: &[&str] = &["0-2", "3-5", "5-10", "10+"];

const EMAIL: FieldSpec = FieldSpec {
    field: Field::Email,
    label: "Email",
    input: InputKind::Email,
    placeholder: "",
    rules: &[
        Rule::Required("Email is required"),
        Rule::Email("Invalid email address"),
    ],
};

const PASSWORD: FieldSpec = FieldSpec {
    field: Field::Password,
    label: "Password",
    input: InputKind::Password,
    placeholder: "",
    rules: &[
        Rule::Required("Password is required"),
        Rule::MinLen(MIN_PASSWORD_LEN, "Password must be at least 8 characters"),
    ],
};

const MUSICIAN_BASIC: &[FieldSpec] = &[
    FieldSpec {
        field: Field::FirstName,
        label: "First Name",
        input: InputKind::Text,
        placeholder: "",
        rules: &[Rule::Required("First name is required")],
    },
    FieldSpec {
        field: Field::LastName,
        label: "Last Name",
        input: InputKind::Text,
        placeholder: "",
        rules: &[Rule::Required("Last name is required")],
    },
    EMAIL,
    PASSWORD,
    FieldSpec {
        field: Field::Phone,
        label: "Phone (Optional)",
        input: InputKind::Tel,
        placeholder: "",
        rules: &[],
    },
];

const MUSICIAN_DETAILS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::Instrument,
        label: "Primary Instrument",
        input: InputKind::Select {
            prompt: "Select your instrument",
            options: SelectOptions::Plain(INSTRUMENTS),
        },
        placeholder: "",
        rules: &[
            Rule::Required("Please select an instrument"),
            Rule::OneOf(INSTRUMENTS, "Please select an instrument"),
        ],
    },
    FieldSpec {
        field: Field::Experience,
        label: "Years of Experience",
        input: InputKind::Select {
            prompt: "Select experience",
            options: SelectOptions::Labeled(EXPERIENCE_LEVELS),
        },
        placeholder: "",
        rules: &[
            Rule::Required("Please select experience level"),
            Rule::OneOf(EXPERIENCE_VALUES, "Please select experience level"),
        ],
    },
];

const MUSICIAN_MEDIA: &[FieldSpec] = &[FieldSpec {
    field: Field::Bio,
    label: "Bio",
    input: InputKind::TextArea { rows: 4 },
    placeholder: "Tell us about yourself and your musical journey...",
    rules: &[
        Rule::Required("Please write a short bio"),
        Rule::MaxLen(MUSICIAN_BIO_MAX_LEN, "Bio must be less than 500 characters"),
    ],
}];

const BAND_BASIC: &[FieldSpec] = &[
    FieldSpec {
        field: Field::BandName,
        label: "Band Name",
        input: InputKind::Text,
        placeholder: "",
        rules: &[Rule::Required("Band name is required")],
    },
    EMAIL,
    PASSWORD,
    FieldSpec {
        field: Field::LocationCity,
        label: "City",
        input: InputKind::Text,
        placeholder: "",
        rules: &[Rule::Required("City is required")],
    },
    FieldSpec {
        field: Field::LocationState,
        label: "State",
        input: InputKind::Text,
        placeholder: "",
        rules: &[Rule::Required("State is required")],
    },
];

const BAND_DETAILS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::FormationYear,
        label: "Formation Year",
        input: InputKind::Number,
        placeholder: "",
        rules: &[
            Rule::Required("Formation year is required"),
            Rule::Year {
                min: MIN_FORMATION_YEAR,
                invalid: "Please enter a valid year",
                future: "Year cannot be in the future",
            },
        ],
    },
    FieldSpec {
        field: Field::Influences,
        label: "Musical Influences",
        input: InputKind::TextArea { rows: 3 },
        placeholder: "Tell us about your musical influences...",
        rules: &[],
    },
];

const BAND_MEDIA: &[FieldSpec] = &[FieldSpec {
    field: Field::Bio,
    label: "Band Bio",
    input: InputKind::TextArea { rows: 4 },
    placeholder: "Tell potential members and fans about your band...",
    rules: &[
        Rule::Required("Please write a band bio"),
        Rule::MaxLen(BAND_BIO_MAX_LEN, "Bio must be less than 1000 characters"),
    ],
}];

/// One slot of a payload layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadEntry {
    Field(Field),
    Tags(TagGroup),
    SocialLinks,
}

const MUSICIAN_PAYLOAD: &[PayloadEntry] = &[
    PayloadEntry::Field(Field::FirstName),
    PayloadEntry::Field(Field::LastName),
    PayloadEntry::Field(Field::Email),
    PayloadEntry::Field(Field::Password),
    PayloadEntry::Field(Field::Phone),
    PayloadEntry::Field(Field::Instrument),
    PayloadEntry::Field(Field::Experience),
    PayloadEntry::Tags(TagGroup::Genres),
    PayloadEntry::Field(Field::Bio),
    PayloadEntry::SocialLinks,
];

const BAND_PAYLOAD: &[PayloadEntry] = &[
    PayloadEntry::Field(Field::BandName),
    PayloadEntry::Field(Field::Email),
    PayloadEntry::Field(Field::Password),
    PayloadEntry::Tags(TagGroup::Genres),
    PayloadEntry::Tags(TagGroup::Positions),
    PayloadEntry::Field(Field::LocationCity),
    PayloadEntry::Field(Field::LocationState),
    PayloadEntry::Field(Field::FormationYear),
    PayloadEntry::Field(Field::Bio),
    PayloadEntry::Field(Field::Influences),
    PayloadEntry::SocialLinks,
];

// =============================================================================
// Form Kind
// =============================================================================

/// Which registration form this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Musician,
    Band,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Musician => "Create Your Musician Profile",
            FormKind::Band => "Create Your Band Profile",
        }
    }

    pub fn step_title(&self, step: Step) -> &'static str {
        match (self, step) {
            (_, Step::BasicInfo) => "Basic Information",
            (FormKind::Musician, Step::Details) => "Musical Background",
            (FormKind::Musician, Step::MediaAndSubmit) => "Additional Information",
            (FormKind::Band, Step::Details) => "Band Details",
            (FormKind::Band, Step::MediaAndSubmit) => "Media & Links",
        }
    }

    /// Scalar fields shown on `step`.
    pub fn fields(&self, step: Step) -> &'static [FieldSpec] {
        match (self, step) {
            (FormKind::Musician, Step::BasicInfo) => MUSICIAN_BASIC,
            (FormKind::Musician, Step::Details) => MUSICIAN_DETAILS,
            (FormKind::Musician, Step::MediaAndSubmit) => MUSICIAN_MEDIA,
            (FormKind::Band, Step::BasicInfo) => BAND_BASIC,
            (FormKind::Band, Step::Details) => BAND_DETAILS,
            (FormKind::Band, Step::MediaAndSubmit) => BAND_MEDIA,
        }
    }

    /// Every scalar field with the step it lives on.
    pub fn all_fields(&self) -> impl Iterator<Item = (Step, &'static FieldSpec)> + '_ {
        Step::ALL
            .into_iter()
            .flat_map(move |step| self.fields(step).iter().map(move |spec| (step, spec)))
    }

    pub fn spec(&self, field: Field) -> Option<&'static FieldSpec> {
        self.all_fields().map(|(_, spec)| spec).find(|spec| spec.field == field)
    }

    pub fn step_of(&self, field: Field) -> Option<Step> {
        self.all_fields()
            .find(|(_, spec)| spec.field == field)
            .map(|(step, _)| step)
    }

    /// Tag groups shown on `step`.
    pub fn tag_groups(&self, step: Step) -> &'static [TagGroup] {
        match (self, step) {
            (FormKind::Musician, Step::Details) => &[TagGroup::Genres],
            (FormKind::Band, Step::Details) => &[TagGroup::Genres, TagGroup::Positions],
            _ => &[],
        }
    }

    pub fn social_networks(&self) -> &'static [SocialNetwork] {
        match self {
            FormKind::Musician => &[
                SocialNetwork::Instagram,
                SocialNetwork::Youtube,
                SocialNetwork::Spotify,
            ],
            FormKind::Band => &[
                SocialNetwork::Instagram,
                SocialNetwork::Youtube,
                SocialNetwork::Spotify,
                SocialNetwork::Website,
            ],
        }
    }

    pub fn social_label(&self) -> &'static str {
        match self {
            FormKind::Musician => "Social Media Links (Optional)",
            FormKind::Band => "Social Media & Web Presence",
        }
    }

    pub fn upload_label(&self) -> &'static str {
        match self {
            FormKind::Musician => "Performance Samples",
            FormKind::Band => "Music Samples",
        }
    }

    pub fn upload_prompt(&self) -> &'static str {
        match self {
            FormKind::Musician => "Upload audio samples (MP3, WAV)",
            FormKind::Band => "Upload band demos or recordings",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Musician => "Registration successful!",
            FormKind::Band => "Band registration successful!",
        }
    }

    pub fn payload_layout(&self) -> &'static [PayloadEntry] {
        match self {
            FormKind::Musician => MUSICIAN_PAYLOAD,
            FormKind::Band => BAND_PAYLOAD,
        }
    }
}

// =============================================================================
// Draft
// =============================================================================

/// Values entered so far. Lives only as long as the open form.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft<B> {
    values: BTreeMap<Field, String>,
    tags: Vec<TagSet>,
    social: SocialLinks,
    uploads: UploadStage<B>,
}

impl<B> Draft<B> {
    /// Empty draft with the tag groups and social slots of `kind`.
    pub fn new(kind: FormKind) -> Self {
        let tags = Step::ALL
            .iter()
            .flat_map(|step| kind.tag_groups(*step))
            .map(|group| TagSet::new(*group))
            .collect();
        let social = if kind.social_networks().contains(&SocialNetwork::Website) {
            SocialLinks::with_website()
        } else {
            SocialLinks::default()
        };

        Self {
            values: BTreeMap::new(),
            tags,
            social,
            uploads: UploadStage::new(),
        }
    }

    /// Current value of `field` (empty if never edited).
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.values.insert(field, value);
    }

    pub fn tags(&self, group: TagGroup) -> Option<&TagSet> {
        self.tags.iter().find(|set| set.group() == group)
    }

    pub fn tags_mut(&mut self, group: TagGroup) -> Option<&mut TagSet> {
        self.tags.iter_mut().find(|set| set.group() == group)
    }

    pub fn social(&self) -> &SocialLinks {
        &self.social
    }

    pub fn social_mut(&mut self) -> &mut SocialLinks {
        &mut self.social
    }

    pub fn uploads(&self) -> &UploadStage<B> {
        &self.uploads
    }

    pub fn uploads_mut(&mut self) -> &mut UploadStage<B> {
        &mut self.uploads
    }
}

// =============================================================================
// Events & Effects
// =============================================================================

/// A user interaction, or the outcome of a submission.
#[derive(Debug)]
pub enum Event<B> {
    /// A scalar field changed.
    Edit(Field, String),
    /// A social link changed.
    EditSocial(SocialNetwork, String),
    /// A tag button was clicked.
    ToggleTag(TagGroup, String),
    /// Files were picked.
    AddFiles(Vec<StagedUpload<B>>),
    /// "Remove" was clicked on a staged file.
    RemoveFile(usize),
    Next,
    Back,
    Submit,
    /// The submission request finished.
    Completed(SubmitResult<Value>),
    /// The notice was acknowledged.
    DismissNotice,
}

/// Work the caller has to perform after an update.
#[derive(Debug)]
#[must_use]
pub enum Effect<B> {
    None,
    /// Send this payload, then feed the outcome back as [`Event::Completed`].
    Send(RegistrationPayload<B>),
}

/// Where the form is in its submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is in flight; further submits are ignored.
    InFlight,
    /// The last attempt failed; the draft is kept for a retry.
    Failed,
}

// =============================================================================
// Registration Form
// =============================================================================

/// State of one open registration form.
#[derive(Clone, Debug)]
pub struct RegistrationForm<B> {
    kind: FormKind,
    policy: AdvancePolicy,
    step: Step,
    draft: Draft<B>,
    errors: ValidationErrors,
    submit_attempted: bool,
    submission: SubmissionState,
    notice: Option<Notice>,
}

impl<B: Clone> RegistrationForm<B> {
    /// Fresh form on step 1 with the default advance policy.
    pub fn new(kind: FormKind) -> Self {
        Self::with_policy(kind, AdvancePolicy::default())
    }

    pub fn with_policy(kind: FormKind, policy: AdvancePolicy) -> Self {
        Self {
            kind,
            policy,
            step: Step::default(),
            draft: Draft::new(kind),
            errors: ValidationErrors::new(),
            submit_attempted: false,
            submission: SubmissionState::Idle,
            notice: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &Draft<B> {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Inline message for `field`, if it failed validation.
    pub fn error_message(&self, field: Field) -> Option<&str> {
        self.errors.get(field).map(|e| e.message.as_str())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::InFlight
    }

    /// Apply one event.
    pub fn update(&mut self, event: Event<B>) -> Effect<B> {
        match event {
            Event::Edit(field, value) => self.edit(field, value),
            Event::EditSocial(network, value) => {
                if !self.draft.social.set(network, value) {
                    log::debug!("{:?} form has no {:?} link", self.kind, network);
                }
            }
            Event::ToggleTag(group, tag) => match self.draft.tags_mut(group) {
                Some(set) => {
                    if let Err(e) = set.toggle(&tag) {
                        log::warn!("Ignored tag toggle: {}", e);
                    }
                }
                None => log::debug!("{:?} form has no {:?} tags", self.kind, group),
            },
            Event::AddFiles(batch) => {
                if let Err(e) = self.draft.uploads.add_files(batch) {
                    self.notice = Some(Notice::error(e.to_string()));
                }
            }
            Event::RemoveFile(index) => {
                if let Err(e) = self.draft.uploads.remove_file(index) {
                    log::warn!("Ignored file removal: {}", e);
                }
            }
            Event::Next => self.advance(),
            Event::Back => self.step = self.step.back(),
            Event::Submit => return self.submit(),
            Event::Completed(outcome) => self.complete(outcome),
            Event::DismissNotice => self.notice = None,
        }
        Effect::None
    }

    /// Check every field of every step.
    pub fn validate_all(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (_, spec) in self.kind.all_fields() {
            if let Err(e) = spec.validate(self.draft.value(spec.field)) {
                errors.insert(e);
            }
        }
        errors
    }

    /// Check the fields shown on `step`.
    pub fn validate_step(&self, step: Step) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for spec in self.kind.fields(step) {
            if let Err(e) = spec.validate(self.draft.value(spec.field)) {
                errors.insert(e);
            }
        }
        errors
    }

    fn edit(&mut self, field: Field, value: String) {
        let Some(spec) = self.kind.spec(field) else {
            log::debug!("{:?} form has no {:?} field", self.kind, field);
            return;
        };

        self.draft.set_value(field, value);

        if self.submit_attempted || self.errors.contains(field) {
            match spec.validate(self.draft.value(field)) {
                Ok(()) => {
                    self.errors.remove(field);
                }
                Err(e) => self.errors.insert(e),
            }
        }
    }

    fn advance(&mut self) {
        if self.policy == AdvancePolicy::ValidateCurrentStep {
            let errors = self.validate_step(self.step);
            if !errors.is_empty() {
                log::debug!("Step {} has {} invalid field(s)", self.step.number(), errors.len());
                for e in errors.iter() {
                    self.errors.insert(e.clone());
                }
                return;
            }
            for spec in self.kind.fields(self.step) {
                self.errors.remove(spec.field);
            }
        }
        self.step = self.step.next();
    }

    fn submit(&mut self) -> Effect<B> {
        if self.is_submitting() {
            log::debug!("Submission already in flight, ignoring");
            return Effect::None;
        }

        self.submit_attempted = true;
        self.errors = self.validate_all();

        if !self.errors.is_empty() {
            let first_step = self
                .errors
                .iter()
                .filter_map(|e| self.kind.step_of(e.field))
                .min();
            if let Some(step) = first_step {
                self.step = step;
            }
            log::debug!("Submission blocked: {} invalid field(s)", self.errors.len());
            return Effect::None;
        }

        match payload::build(self.kind, &self.draft) {
            Ok(payload) => {
                log::debug!("Submitting {:?} registration: {}", self.kind, payload.summary());
                self.submission = SubmissionState::InFlight;
                self.notice = None;
                Effect::Send(payload)
            }
            Err(e) => {
                log::warn!("Could not assemble registration: {}", e);
                self.submission = SubmissionState::Failed;
                self.notice = Some(Notice::error(e.to_string()));
                Effect::None
            }
        }
    }

    fn complete(&mut self, outcome: SubmitResult<Value>) {
        if !self.is_submitting() {
            log::debug!("Dropping stale submission outcome");
            return;
        }

        match outcome {
            Ok(response) => {
                log::info!("{:?} registration accepted: {}", self.kind, response);
                *self = Self::with_policy(self.kind, self.policy);
                self.notice = Some(Notice::success(self.kind.success_message()));
            }
            Err(e) => {
                log::warn!("{:?} registration failed: {}", self.kind, e);
                self.submission = SubmissionState::Failed;
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }
}
