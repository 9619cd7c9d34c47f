//! Blocking notice overlay (registration outcome, refused uploads).

use bandconnect::Notice;
use leptos::*;

#[component]
pub fn NoticeBanner(
    /// Notice to show, if any
    #[prop(into)]
    notice: Signal<Option<Notice>>,
    /// Called when the user acknowledges the notice
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            view! {
                <div class="notice-overlay" role="alertdialog">
                    <div class=format!("notice {}", notice.level.css_class())>
                        <p>{notice.level.emoji()} " " {notice.message}</p>
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| on_dismiss.call(())
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
