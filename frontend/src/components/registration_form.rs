//! Three-step registration form.
//!
//! Owns one [`bandconnect::RegistrationForm`] for as long as the component
//! is mounted. User input is turned into events, the state machine decides
//! what happens, and submissions run on the form's transport. Leaving the
//! page aborts a request still in flight.

use bandconnect::{Effect, Event, FormKind, Transport};
use leptos::*;
use web_sys::{AbortController, File};

use crate::services::RegistrationTransport;

use super::{FieldInput, NoticeBanner, SocialLinksInputs, StepIndicator, TagPicker, UploadZone};

/// Form state held by the component (files stay browser `File` handles).
pub type FormState = bandconnect::RegistrationForm<File>;

#[component]
pub fn RegistrationForm(kind: FormKind) -> impl IntoView {
    let form = create_rw_signal(FormState::new(kind));
    let step = create_memo(move |_| form.with(|f| f.step()));
    let submitting = create_memo(move |_| form.with(|f| f.is_submitting()));
    let notice = Signal::derive(move || form.with(|f| f.notice().cloned()));

    let abort = store_value(AbortController::new().ok());
    on_cleanup(move || {
        abort.with_value(|controller| {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    });

    let on_event = Callback::new(move |event: Event<File>| {
        let effect = form.try_update(|f| f.update(event));
        let Some(Effect::Send(payload)) = effect else {
            return;
        };

        let signal = abort.with_value(|c| c.as_ref().map(AbortController::signal));
        let transport = RegistrationTransport::for_kind(kind, signal);
        spawn_local(async move {
            let outcome = transport.send(payload).await;
            // No-op if the form was torn down meanwhile.
            form.try_update(|f| {
                let _ = f.update(Event::Completed(outcome));
            });
        });
    });

    let on_dismiss = Callback::new(move |_: ()| on_event.call(Event::DismissNotice));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_event.call(Event::Submit);
    };

    view! {
        <div class="form-container">
            <div class="form-header">
                <h2>{kind.title()}</h2>
                <StepIndicator step=step/>
            </div>

            <NoticeBanner notice=notice on_dismiss=on_dismiss/>

            <form class="registration-form" on:submit=on_submit>
                {move || {
                    let current = step.get();
                    view! {
                        <div class="form-step">
                            <h3>{kind.step_title(current)}</h3>

                            {kind
                                .fields(current)
                                .iter()
                                .map(|spec| view! { <FieldInput spec=spec form=form on_event=on_event/> })
                                .collect_view()}

                            {kind
                                .tag_groups(current)
                                .iter()
                                .map(|group| view! { <TagPicker group=*group form=form on_event=on_event/> })
                                .collect_view()}

                            {current.is_last().then(|| view! {
                                <UploadZone kind=kind form=form on_event=on_event/>
                                <SocialLinksInputs kind=kind form=form on_event=on_event/>
                            })}

                            <StepActions step=current submitting=submitting on_event=on_event/>
                        </div>
                    }
                }}
            </form>
        </div>
    }
}

/// Back / Next / Complete Registration buttons.
#[component]
fn StepActions(
    step: bandconnect::Step,
    #[prop(into)] submitting: Signal<bool>,
    on_event: Callback<Event<File>>,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            {(!step.is_first()).then(|| view! {
                <button type="button" class="btn btn-secondary" on:click=move |_| on_event.call(Event::Back)>
                    "Back"
                </button>
            })}

            {if step.is_last() {
                view! {
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Complete Registration" }}
                    </button>
                }
                .into_view()
            } else {
                view! {
                    <button type="button" class="btn btn-primary" on:click=move |_| on_event.call(Event::Next)>
                        "Next"
                    </button>
                }
                .into_view()
            }}
        </div>
    }
}
