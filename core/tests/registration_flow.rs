//! End-to-end musician registration against a scripted transport.

use std::cell::RefCell;

use bandconnect::{
    dispatch, Event, Field, FormKind, NoticeLevel, RegistrationForm, RegistrationPayload,
    StagedUpload, Step, SubmitError, SubmitResult, SubmissionState, TagGroup, Transport,
};
use serde_json::{json, Value};

/// Records every payload and answers with a fixed outcome.
struct ScriptedTransport {
    answer: fn() -> SubmitResult<Value>,
    sent: RefCell<Vec<RegistrationPayload<&'static str>>>,
}

impl ScriptedTransport {
    fn new(answer: fn() -> SubmitResult<Value>) -> Self {
        Self {
            answer,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport<&'static str> for ScriptedTransport {
    async fn send(&self, payload: RegistrationPayload<&'static str>) -> SubmitResult<Value> {
        self.sent.borrow_mut().push(payload);
        (self.answer)()
    }
}

async fn fill_musician(form: &mut RegistrationForm<&'static str>, transport: &ScriptedTransport) {
    let edits = [
        (Field::FirstName, "Ana"),
        (Field::LastName, "Lee"),
        (Field::Email, "ana@x.com"),
        (Field::Password, "password123"),
    ];
    for (field, value) in edits {
        dispatch(form, transport, Event::Edit(field, value.into())).await;
    }
    dispatch(form, transport, Event::Next).await;

    dispatch(form, transport, Event::Edit(Field::Instrument, "Guitar".into())).await;
    dispatch(form, transport, Event::Edit(Field::Experience, "3-5".into())).await;
    dispatch(form, transport, Event::ToggleTag(TagGroup::Genres, "Rock".into())).await;
    dispatch(form, transport, Event::Next).await;

    dispatch(form, transport, Event::Edit(Field::Bio, "short bio".into())).await;
    assert_eq!(form.step(), Step::MediaAndSubmit);
}

#[tokio::test]
async fn musician_submission_succeeds() {
    let transport = ScriptedTransport::new(|| Ok(json!({ "ok": true })));
    let mut form = RegistrationForm::new(FormKind::Musician);
    fill_musician(&mut form, &transport).await;

    dispatch(&mut form, &transport, Event::Submit).await;

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    let payload = &sent[0];
    assert_eq!(payload.text("firstName"), Some("Ana"));
    assert_eq!(payload.text("lastName"), Some("Lee"));
    assert_eq!(payload.text("email"), Some("ana@x.com"));
    assert_eq!(payload.text("password"), Some("password123"));
    assert_eq!(payload.text("instrument"), Some("Guitar"));
    assert_eq!(payload.text("experience"), Some("3-5"));
    assert_eq!(payload.text("genres"), Some(r#"["Rock"]"#));
    assert_eq!(payload.text("bio"), Some("short bio"));
    assert_eq!(payload.files().count(), 0);

    let notice = form.notice().expect("success notice");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Registration successful!");
    assert_eq!(form.step(), Step::BasicInfo);
}

#[tokio::test]
async fn musician_submission_failure_keeps_draft() {
    let transport =
        ScriptedTransport::new(|| Err(SubmitError::Network("connection refused".into())));
    let mut form = RegistrationForm::new(FormKind::Musician);
    fill_musician(&mut form, &transport).await;

    dispatch(&mut form, &transport, Event::Submit).await;

    let notice = form.notice().expect("failure notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("connection refused"));

    assert_eq!(form.submission(), SubmissionState::Failed);
    assert_eq!(form.draft().value(Field::FirstName), "Ana");
    assert_eq!(form.draft().value(Field::Bio), "short bio");
    assert!(form.draft().tags(TagGroup::Genres).unwrap().contains("Rock"));
    assert_eq!(form.step(), Step::MediaAndSubmit);
}

#[tokio::test]
async fn staged_samples_are_sent_in_order() {
    let transport = ScriptedTransport::new(|| Ok(json!({ "ok": true })));
    let mut form = RegistrationForm::new(FormKind::Musician);
    fill_musician(&mut form, &transport).await;

    let batch = vec![
        StagedUpload::new("intro.mp3", 2_000_000, "audio/mpeg", "blob-1"),
        StagedUpload::new("solo.wav", 8_000_000, "audio/wav", "blob-2"),
        StagedUpload::new("outro.mp3", 1_000, "audio/mp3", "blob-3"),
    ];
    dispatch(&mut form, &transport, Event::AddFiles(batch)).await;
    dispatch(&mut form, &transport, Event::RemoveFile(1)).await;
    dispatch(&mut form, &transport, Event::Submit).await;

    let sent = transport.sent.borrow();
    let files: Vec<(&str, &str)> = sent[0].files().map(|(k, f)| (k, f.handle)).collect();
    assert_eq!(files, [("audioSample0", "blob-1"), ("audioSample1", "blob-3")]);
}

#[tokio::test]
async fn invalid_sample_is_refused_before_submit() {
    let transport = ScriptedTransport::new(|| Ok(json!({ "ok": true })));
    let mut form = RegistrationForm::new(FormKind::Musician);
    fill_musician(&mut form, &transport).await;

    let batch = vec![StagedUpload::new("huge.wav", 11 * 1024 * 1024, "audio/wav", "blob")];
    dispatch(&mut form, &transport, Event::AddFiles(batch)).await;

    let notice = form.notice().expect("upload notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("huge.wav"));
    assert!(form.draft().uploads().is_empty());
    assert!(transport.sent.borrow().is_empty());
}
