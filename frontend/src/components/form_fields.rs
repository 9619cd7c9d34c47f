//! Building blocks of the registration form.
//!
//! Each block reads the shared form state and reports user input as
//! [`bandconnect::Event`]s through `on_event`; none of them keeps state
//! of its own.

use bandconnect::config::{MAX_UPLOAD_FILES, MAX_UPLOAD_SIZE};
use bandconnect::{Event, FieldSpec, FormKind, InputKind, SocialNetwork, Step, TagGroup};
use leptos::*;
use web_sys::{File, HtmlInputElement};

use crate::services::take_selected_files;

use super::FormState;

fn input_type(input: InputKind) -> &'static str {
    match input {
        InputKind::Email => "email",
        InputKind::Password => "password",
        InputKind::Tel => "tel",
        InputKind::Number => "number",
        _ => "text",
    }
}

/// Progress bar with one segment per step.
#[component]
pub fn StepIndicator(#[prop(into)] step: Signal<Step>) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {Step::ALL
                .into_iter()
                .map(|segment| view! {
                    <div class="step-segment" class:active=move || step.get().has_reached(segment)></div>
                })
                .collect_view()}
        </div>
    }
}

/// A labelled scalar field with its inline error.
#[component]
pub fn FieldInput(
    spec: &'static FieldSpec,
    form: RwSignal<FormState>,
    on_event: Callback<Event<File>>,
) -> impl IntoView {
    let field = spec.field;
    let value = move || form.with(|f| f.draft().value(field).to_string());
    let error = move || form.with(|f| f.error_message(field).map(str::to_string));
    let on_input = move |ev: ev::Event| on_event.call(Event::Edit(field, event_target_value(&ev)));

    let control = match spec.input {
        InputKind::TextArea { rows } => view! {
            <textarea
                rows=rows.to_string()
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view(),
        InputKind::Select { prompt, options } => view! {
            <select prop:value=value on:change=on_input>
                <option value="">{prompt}</option>
                {options
                    .pairs()
                    .into_iter()
                    .map(|(option, label)| view! {
                        // Initial pick only; `prop:value` tracks the draft afterwards.
                        <option value=option selected=value() == option>{label}</option>
                    })
                    .collect_view()}
            </select>
        }
        .into_view(),
        other => view! {
            <input
                type=input_type(other)
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
    };

    view! {
        <div class="form-field" class:invalid=move || error().is_some()>
            <label>{spec.label}</label>
            {control}
            {move || error().map(|message| view! { <p class="field-error">"⚠ " {message}</p> })}
        </div>
    }
}

/// Toggle buttons over a tag vocabulary.
#[component]
pub fn TagPicker(
    group: TagGroup,
    form: RwSignal<FormState>,
    on_event: Callback<Event<File>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{group.label()}</label>
            <div class="tag-list">
                {group
                    .vocabulary()
                    .iter()
                    .map(|&tag| {
                        let selected = move || {
                            form.with(|f| f.draft().tags(group).is_some_and(|set| set.contains(tag)))
                        };
                        view! {
                            <button
                                type="button"
                                class="tag"
                                class:selected=selected
                                on:click=move |_| on_event.call(Event::ToggleTag(group, tag.to_string()))
                            >
                                {tag}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Audio sample picker and the staged file list.
#[component]
pub fn UploadZone(
    kind: FormKind,
    form: RwSignal<FormState>,
    on_event: Callback<Event<File>>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let batch = take_selected_files(&input);
        if !batch.is_empty() {
            on_event.call(Event::AddFiles(batch));
        }
    };

    let staged = move || {
        form.with(|f| {
            f.draft()
                .uploads()
                .files()
                .iter()
                .enumerate()
                .map(|(index, upload)| (index, upload.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="form-field">
            <label>"🎵 " {kind.upload_label()}</label>
            <div class="upload-zone">
                <input
                    type="file"
                    accept="audio/*"
                    multiple=true
                    id="audio-upload"
                    style="display:none"
                    on:change=on_change
                />
                <label for="audio-upload" class="upload-label">
                    <span class="upload-text">{kind.upload_prompt()}</span>
                    <span class="upload-hint">
                        {format!(
                            "Maximum {} files, up to {}MB each",
                            MAX_UPLOAD_FILES,
                            MAX_UPLOAD_SIZE / (1024 * 1024),
                        )}
                    </span>
                </label>
            </div>

            <div class="staged-files">
                <For
                    each=staged
                    key=|entry| entry.clone()
                    children=move |(index, name)| view! {
                        <div class="staged-file">
                            <span>{name}</span>
                            <button
                                type="button"
                                class="staged-remove"
                                on:click=move |_| on_event.call(Event::RemoveFile(index))
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                />
            </div>
        </div>
    }
}

/// Optional social link inputs offered by `kind`.
#[component]
pub fn SocialLinksInputs(
    kind: FormKind,
    form: RwSignal<FormState>,
    on_event: Callback<Event<File>>,
) -> impl IntoView {
    let row = move |network: SocialNetwork| {
        let value = move || {
            form.with(|f| f.draft().social().get(network).unwrap_or_default().to_string())
        };
        view! {
            <div class="social-row">
                <span class="social-label">{network.label()}</span>
                <input
                    placeholder=network.placeholder()
                    prop:value=value
                    on:input=move |ev| on_event.call(Event::EditSocial(network, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="form-field">
            <label>{kind.social_label()}</label>
            {kind.social_networks().iter().map(|network| row(*network)).collect_view()}
        </div>
    }
}
