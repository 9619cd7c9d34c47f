//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = bandconnect::current_year();

    view! {
        <footer>
            <p>{format!("© {} {}. All rights reserved.", year, crate::APP_NAME)}</p>
            <ul class="footer-links">
                <li><a href="#" class="footer-link">"Privacy Policy"</a></li>
                <li><a href="#" class="footer-link">"Terms of Service"</a></li>
                <li><a href="#" class="footer-link">"Contact Us"</a></li>
            </ul>
        </footer>
    }
}
