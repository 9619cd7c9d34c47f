//! UI Components for the BandConnect application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Landing Components
//! - [`Header`] - Top navigation with login / sign up
//! - [`Hero`] - Title, call to action and feature cards
//! - [`Footer`] - Page footer
//!
//! # Registration Components
//! - [`RegistrationNavbar`] - Logo and "Back to Home"
//! - [`RoleCards`] - Musician / Band / Venue choice
//! - [`RegistrationForm`] - Three-step registration form
//! - `StepIndicator`, `FieldInput`, `TagPicker`, `UploadZone`,
//!   `SocialLinksInputs` - Form building blocks
//! - [`NoticeBanner`] - Blocking success / error notice

mod header;
mod hero;
mod footer;
mod navbar;
mod role_cards;
mod registration_form;
mod form_fields;
mod notice;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use navbar::*;
pub use role_cards::*;
pub use registration_form::*;
pub use form_fields::*;
pub use notice::*;
