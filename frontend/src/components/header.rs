use leptos::*;
use leptos_router::A;

use crate::LOGIN_URL;

const NAV_LINKS: &[&str] = &["HOME", "FIND MUSICIANS", "FIND BANDS", "EVENTS", "CONTACT"];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <nav class="navbar overlay">
                <div class="logo">"BandConnect"</div>
                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|label| view! { <li><a href="#">{*label}</a></li> })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <a href=LOGIN_URL class="login-btn">"Login"</a>
                    <A href="/register" class="signup-btn">"Sign Up Free"</A>
                </div>
            </nav>
        </header>
    }
}
