//! Hero section and feature cards

use leptos::*;
use leptos_router::A;

/// A landing feature card: title, blurb, button label.
struct Feature {
    title: &'static str,
    text: &'static str,
    cta: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Find Musicians",
        text: "Search for talented musicians by genre, location, or skill.",
        cta: "Get Started",
    },
    Feature {
        title: "Find Bands",
        text: "Looking for a band to join? Browse through profiles.",
        cta: "Sign Up",
    },
    Feature {
        title: "Find Venues",
        text: "Find venues looking for performers and book your gigs.",
        cta: "Learn More",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero overlay">
            <div class="hero-content">
                <h1>"BAND" <span class="highlight">"CONNECT"</span></h1>
                <p>"Join a community of musicians. Connect, find bands, and explore venues."</p>
                <A href="/register" class="cta-btn">"Sign Up for Free"</A>
            </div>
        </section>

        <section class="features overlay">
            {FEATURES
                .iter()
                .map(|feature| view! {
                    <div class="feature-box">
                        <h2>{feature.title}</h2>
                        <p>{feature.text}</p>
                        <A href="/register" class="feature-btn">{feature.cta}</A>
                    </div>
                })
                .collect_view()}
        </section>
    }
}
