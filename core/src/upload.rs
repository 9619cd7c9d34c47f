//! Audio sample staging.
//!
//! Files picked by the user are held as [`StagedUpload`]s until the form is
//! submitted. The file content stays behind an opaque handle `B` (a browser
//! `File` in the web app) and is never read here.
//!
//! Policy, identical for every form:
//! - a batch of more than [`MAX_UPLOAD_FILES`] files is refused as a whole
//! - each file must be at most [`MAX_UPLOAD_SIZE`] bytes
//! - each file must have one of the [`AUDIO_MIME_TYPES`]
//! - an accepted batch replaces whatever was staged before
//! - a refused batch leaves the staged list untouched

use crate::config::{AUDIO_MIME_TYPES, MAX_UPLOAD_FILES, MAX_UPLOAD_SIZE};
use crate::error::{FileIssue, UploadError, UploadResult};

/// A file reference waiting for submission.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedUpload<B> {
    /// Display name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the browser.
    pub mime: String,
    /// Opaque content handle.
    pub handle: B,
}

impl<B> StagedUpload<B> {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>, handle: B) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            handle,
        }
    }

    fn check(&self) -> Option<FileIssue> {
        if self.size > MAX_UPLOAD_SIZE {
            return Some(FileIssue::TooLarge {
                name: self.name.clone(),
                size: self.size,
            });
        }
        if !is_audio_mime(&self.mime) {
            return Some(FileIssue::UnsupportedType {
                name: self.name.clone(),
                mime: self.mime.clone(),
            });
        }
        None
    }
}

/// Whether `mime` is an accepted audio format (case-insensitive).
pub fn is_audio_mime(mime: &str) -> bool {
    let mime = mime.trim();
    AUDIO_MIME_TYPES.iter().any(|m| m.eq_ignore_ascii_case(mime))
}

/// The staged upload list of a draft.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadStage<B> {
    files: Vec<StagedUpload<B>>,
}

impl<B> Default for UploadStage<B> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<B> UploadStage<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the staged list with `batch`, if the whole batch is acceptable.
    pub fn add_files(&mut self, batch: Vec<StagedUpload<B>>) -> UploadResult<()> {
        if batch.len() > MAX_UPLOAD_FILES {
            log::warn!("Refused upload batch of {} files", batch.len());
            return Err(UploadError::TooManyFiles { count: batch.len() });
        }

        let issues: Vec<FileIssue> = batch.iter().filter_map(StagedUpload::check).collect();
        if !issues.is_empty() {
            log::warn!("Refused upload batch: {} file(s) rejected", issues.len());
            return Err(UploadError::Rejected(issues));
        }

        log::debug!("Staged {} audio sample(s)", batch.len());
        self.files = batch;
        Ok(())
    }

    /// Remove the staged file at `index`.
    pub fn remove_file(&mut self, index: usize) -> UploadResult<StagedUpload<B>> {
        if index >= self.files.len() {
            return Err(UploadError::IndexOutOfBounds {
                index,
                len: self.files.len(),
            });
        }
        Ok(self.files.remove(index))
    }

    pub fn files(&self) -> &[StagedUpload<B>] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mp3(name: &str) -> StagedUpload<()> {
        StagedUpload::new(name, 3 * 1024 * 1024, "audio/mpeg", ())
    }

    fn staged_names(stage: &UploadStage<()>) -> Vec<&str> {
        stage.files().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_batch_replaces_staged_list() {
        let mut stage = UploadStage::new();
        stage.add_files(vec![mp3("a.mp3"), mp3("b.mp3")]).unwrap();
        stage.add_files(vec![mp3("c.mp3")]).unwrap();
        assert_eq!(staged_names(&stage), ["c.mp3"]);
    }

    #[test]
    fn test_oversized_batch_leaves_list_unchanged() {
        let mut stage = UploadStage::new();
        stage.add_files(vec![mp3("keep.mp3")]).unwrap();

        let batch = (0..4).map(|i| mp3(&format!("{i}.mp3"))).collect();
        let err = stage.add_files(batch).unwrap_err();
        assert_eq!(err, UploadError::TooManyFiles { count: 4 });
        assert_eq!(staged_names(&stage), ["keep.mp3"]);
    }

    #[test]
    fn test_exactly_three_files_accepted() {
        let mut stage = UploadStage::new();
        stage.add_files(vec![mp3("1.mp3"), mp3("2.mp3"), mp3("3.mp3")]).unwrap();
        assert_eq!(stage.len(), MAX_UPLOAD_FILES);
    }

    #[test]
    fn test_per_file_checks() {
        let mut stage = UploadStage::new();
        stage.add_files(vec![mp3("keep.mp3")]).unwrap();

        let batch = vec![
            StagedUpload::new("big.wav", MAX_UPLOAD_SIZE + 1, "audio/wav", ()),
            mp3("fine.mp3"),
            StagedUpload::new("cover.png", 1024, "image/png", ()),
        ];
        match stage.add_files(batch) {
            Err(UploadError::Rejected(issues)) => {
                assert_eq!(issues.len(), 2);
                assert!(matches!(&issues[0], FileIssue::TooLarge { name, .. } if name == "big.wav"));
                assert!(matches!(&issues[1], FileIssue::UnsupportedType { name, .. } if name == "cover.png"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(staged_names(&stage), ["keep.mp3"]);
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let mut stage = UploadStage::new();
        let exact = StagedUpload::new("exact.wav", MAX_UPLOAD_SIZE, "audio/wav", ());
        assert!(stage.add_files(vec![exact]).is_ok());
    }

    #[test]
    fn test_remove_file() {
        for i in 0..3 {
            let mut stage = UploadStage::new();
            stage.add_files(vec![mp3("a"), mp3("b"), mp3("c")]).unwrap();
            let removed = stage.remove_file(i).unwrap();
            assert_eq!(stage.len(), 2);
            assert!(!staged_names(&stage).contains(&removed.name.as_str()));
        }
    }

    #[test]
    fn test_remove_out_of_bounds_is_reported() {
        let mut stage: UploadStage<()> = UploadStage::new();
        assert_eq!(
            stage.remove_file(0),
            Err(UploadError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_audio_mime() {
        assert!(is_audio_mime("audio/mpeg"));
        assert!(is_audio_mime("Audio/WAV"));
        assert!(!is_audio_mime("audio/ogg"));
        assert!(!is_audio_mime(""));
    }
}
