//! Browser-side services.
//!
//! # Services
//!
//! - [`register`] - Registration submission (multipart POST or log-only)
//! - [`files`] - `<input type="file">` selection to staged uploads

pub mod register;
pub mod files;

pub use register::*;
pub use files::*;
