//! BandConnect - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend with the marketing landing page and the
//! musician/band registration flow of the BandConnect music community.
//!
//! # Routes
//!
//! ```text
//! /                   Landing      Header · Hero + features · Footer
//! /register           Hub          Navbar · Musician / Band / Venue cards · login link
//! /musician-register  Musician     Navbar · 3-step RegistrationForm (HTTP submit)
//! /band-register      Band         Navbar · 3-step RegistrationForm (logged only)
//! ```
//!
//! All form rules (validation, tags, uploads, steps, payload) come from the
//! `bandconnect` core crate; components here only render a
//! [`bandconnect::RegistrationForm`] and feed it events.
//!
//! # Modules
//!
//! - [`config`] - API endpoint and app name
//! - [`components`] - UI components (landing, hub, registration form)
//! - [`services`] - Submission transport and file conversion

use bandconnect::FormKind;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/register" view=RegistrationHub/>
                    <Route path="/musician-register" view=MusicianRegistration/>
                    <Route path="/band-register" view=BandRegistration/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <Title text=APP_NAME/>
        <div class="wrapper">
            <Header/>
            <Hero/>
            <Footer/>
        </div>
    }
}

#[component]
fn RegistrationHub() -> impl IntoView {
    view! {
        <Title text=format!("Join {}", APP_NAME)/>
        <div class="registration-page">
            <RegistrationNavbar/>
            <RoleCards/>
        </div>
    }
}

#[component]
fn MusicianRegistration() -> impl IntoView {
    view! {
        <Title text="Musician Registration"/>
        <div class="registration-page">
            <RegistrationNavbar/>
            <RegistrationForm kind=FormKind::Musician/>
        </div>
    }
}

#[component]
fn BandRegistration() -> impl IntoView {
    view! {
        <Title text="Band Registration"/>
        <div class="registration-page">
            <RegistrationNavbar/>
            <RegistrationForm kind=FormKind::Band/>
        </div>
    }
}
