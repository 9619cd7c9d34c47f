//! Outbound registration payload.
//!
//! A [`RegistrationPayload`] is the ordered list of multipart fields a
//! submission sends: scalar fields as text, tag selections and social links
//! as JSON strings, and each staged audio sample under a positional key
//! (`audioSample0`, `audioSample1`, ...).

use crate::config::AUDIO_SAMPLE_KEY_PREFIX;
use crate::error::SubmitResult;
use crate::form::{Draft, FormKind, PayloadEntry};
use crate::upload::StagedUpload;
use crate::validation::Field;

/// Value of one multipart field.
#[derive(Clone, Debug, PartialEq)]
pub enum PayloadPart<B> {
    Text(String),
    File(StagedUpload<B>),
}

/// Ordered multipart fields of a submission.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationPayload<B> {
    parts: Vec<(String, PayloadPart<B>)>,
}

impl<B> Default for RegistrationPayload<B> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<B> RegistrationPayload<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parts.push((key.into(), PayloadPart::Text(value.into())));
    }

    pub fn push_file(&mut self, key: impl Into<String>, upload: StagedUpload<B>) {
        self.parts.push((key.into(), PayloadPart::File(upload)));
    }

    pub fn parts(&self) -> &[(String, PayloadPart<B>)] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<(String, PayloadPart<B>)> {
        self.parts
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(k, _)| k.as_str())
    }

    /// Text value stored under `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.parts.iter().find_map(|(k, part)| match part {
            PayloadPart::Text(value) if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &StagedUpload<B>)> {
        self.parts.iter().filter_map(|(k, part)| match part {
            PayloadPart::File(upload) => Some((k.as_str(), upload)),
            PayloadPart::Text(_) => None,
        })
    }

    /// One-line description safe to log: keys and file names, no values.
    pub fn summary(&self) -> String {
        let keys: Vec<&str> = self.keys().collect();
        let files: Vec<&str> = self.files().map(|(_, f)| f.name.as_str()).collect();
        format!("fields=[{}] files=[{}]", keys.join(", "), files.join(", "))
    }
}

/// Assemble the payload of `draft` following `kind`'s field layout.
pub fn build<B: Clone>(kind: FormKind, draft: &Draft<B>) -> SubmitResult<RegistrationPayload<B>> {
    let mut payload = RegistrationPayload::new();

    for entry in kind.payload_layout() {
        match *entry {
            PayloadEntry::Field(field) => {
                payload.push_text(field.payload_key(), field_value(draft, field));
            }
            PayloadEntry::Tags(group) => {
                let json = match draft.tags(group) {
                    Some(set) => set.to_json()?,
                    None => "[]".to_string(),
                };
                payload.push_text(group.payload_key(), json);
            }
            PayloadEntry::SocialLinks => {
                payload.push_text("socialLinks", serde_json::to_string(draft.social())?);
            }
        }
    }

    for (index, upload) in draft.uploads().files().iter().enumerate() {
        payload.push_file(format!("{AUDIO_SAMPLE_KEY_PREFIX}{index}"), upload.clone());
    }

    Ok(payload)
}

fn field_value<B>(draft: &Draft<B>, field: Field) -> String {
    let value = draft.value(field);
    match field {
        Field::FormationYear => value.trim().to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SocialNetwork;
    use crate::tags::TagGroup;

    #[test]
    fn test_musician_layout() {
        let mut draft: Draft<()> = Draft::new(FormKind::Musician);
        draft.set_value(Field::FirstName, "Ana".into());
        draft.tags_mut(TagGroup::Genres).unwrap().toggle("Jazz").unwrap();
        draft.social_mut().set(SocialNetwork::Instagram, "@ana".into());

        let payload = build(FormKind::Musician, &draft).unwrap();
        let keys: Vec<&str> = payload.keys().collect();
        assert_eq!(
            keys,
            [
                "firstName", "lastName", "email", "password", "phone", "instrument",
                "experience", "genres", "bio", "socialLinks",
            ]
        );
        assert_eq!(payload.text("firstName"), Some("Ana"));
        assert_eq!(payload.text("phone"), Some(""));
        assert_eq!(payload.text("genres"), Some(r#"["Jazz"]"#));
        assert_eq!(
            payload.text("socialLinks"),
            Some(r#"{"instagram":"@ana","youtube":"","spotify":""}"#)
        );
    }

    #[test]
    fn test_band_layout_and_samples() {
        let mut draft: Draft<u8> = Draft::new(FormKind::Band);
        draft.set_value(Field::FormationYear, " 1999 ".into());
        draft.tags_mut(TagGroup::Positions).unwrap().toggle("Drums").unwrap();
        draft
            .uploads_mut()
            .add_files(vec![
                StagedUpload::new("demo.mp3", 10, "audio/mpeg", 1),
                StagedUpload::new("live.wav", 20, "audio/wav", 2),
            ])
            .unwrap();

        let payload = build(FormKind::Band, &draft).unwrap();
        let keys: Vec<&str> = payload.keys().collect();
        assert_eq!(
            keys,
            [
                "bandName", "email", "password", "genres", "memberNeeds", "locationCity",
                "locationState", "formationYear", "bio", "influences", "socialLinks",
                "audioSample0", "audioSample1",
            ]
        );
        assert_eq!(payload.text("formationYear"), Some("1999"));
        assert_eq!(payload.text("memberNeeds"), Some(r#"["Drums"]"#));
        assert_eq!(
            payload.text("socialLinks"),
            Some(r#"{"instagram":"","youtube":"","spotify":"","website":""}"#)
        );

        let handles: Vec<(&str, u8)> = payload.files().map(|(k, f)| (k, f.handle)).collect();
        assert_eq!(handles, [("audioSample0", 1), ("audioSample1", 2)]);
    }

    #[test]
    fn test_summary_omits_values() {
        let mut draft: Draft<()> = Draft::new(FormKind::Musician);
        draft.set_value(Field::Password, "hunter2hunter2".into());
        let summary = build(FormKind::Musician, &draft).unwrap().summary();
        assert!(summary.contains("password"));
        assert!(!summary.contains("hunter2"));
    }
}
