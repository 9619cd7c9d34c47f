//! Registration policy configuration.
//!
//! Centralized limits shared by the musician and band forms.
//! These are compile-time constants, the same values are enforced
//! on every form instance.

/// Maximum number of audio samples staged at once.
pub const MAX_UPLOAD_FILES: usize = 3;

/// Maximum size of a single staged audio sample (in bytes).
///
/// 10 MB limit.
pub const MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types accepted for audio samples (MP3 and WAV).
pub const AUDIO_MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/x-wav",
    "audio/wave",
];

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum musician bio length, in characters.
pub const MUSICIAN_BIO_MAX_LEN: usize = 500;

/// Maximum band bio length, in characters.
pub const BAND_BIO_MAX_LEN: usize = 1000;

/// Earliest accepted band formation year.
pub const MIN_FORMATION_YEAR: i32 = 1900;

/// Musician registration path, relative to the API base URL.
pub const MUSICIAN_REGISTER_PATH: &str = "/register-musician";

/// Multipart key prefix for staged audio samples (`audioSample0`, `audioSample1`, ...).
pub const AUDIO_SAMPLE_KEY_PREFIX: &str = "audioSample";
