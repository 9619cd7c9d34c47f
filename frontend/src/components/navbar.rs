use leptos::*;
use leptos_router::A;

#[component]
pub fn RegistrationNavbar() -> impl IntoView {
    view! {
        <nav class="registration-nav">
            <div class="logo">
                <span class="logo-band">"BAND"</span>
                <span class="logo-connect">"CONNECT"</span>
            </div>
            <A href="/" class="btn btn-outline">"Back to Home"</A>
        </nav>
    }
}
