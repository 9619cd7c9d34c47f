//! Registration hub: pick how to join.
//!
//! Stateless; each card only routes to its registration form.

use leptos::*;
use leptos_router::A;

use crate::LOGIN_URL;

/// A way of joining the community.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Musician,
    Band,
    Venue,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Musician, Role::Band, Role::Venue];

    pub fn title(&self) -> &'static str {
        match self {
            Role::Musician => "Musician",
            Role::Band => "Band",
            Role::Venue => "Venue",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Musician => "🎤",
            Role::Band => "👥",
            Role::Venue => "📍",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Role::Musician => "Join bands, showcase your talent, and connect with other musicians",
            Role::Band => "Create your band profile, find members, and book gigs",
            Role::Venue => "List your venue, find performers, and manage bookings",
        }
    }

    pub fn perks(&self) -> [&'static str; 4] {
        match self {
            Role::Musician => [
                "Create your musician profile",
                "Upload performance samples",
                "Find bands to join",
                "Connect with other musicians",
            ],
            Role::Band => [
                "Create band profile",
                "Find new band members",
                "Manage band calendar",
                "Book venues and gigs",
            ],
            Role::Venue => [
                "Create venue profile",
                "Find performers",
                "Manage bookings",
                "Handle event calendar",
            ],
        }
    }

    /// Registration route, if this role has a form.
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Role::Musician => Some("/musician-register"),
            Role::Band => Some("/band-register"),
            Role::Venue => None,
        }
    }
}

#[component]
pub fn RoleCards() -> impl IntoView {
    view! {
        <div class="hub">
            <div class="hub-intro">
                <h1>"Join BandConnect"</h1>
                <p>"Choose how you want to be part of our music community"</p>
            </div>

            <div class="role-grid">
                {Role::ALL.into_iter().map(|role| view! { <RoleCard role=role/> }).collect_view()}
            </div>

            <div class="login-section">
                <p>
                    "Already have an account? "
                    <a href=LOGIN_URL class="login-link">"Log in here"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    let cta = format!("Register as {}", role.title());

    view! {
        <div class="role-card">
            <div class="role-icon">{role.icon()}</div>
            <h2>{role.title()}</h2>
            <p class="role-tagline">{role.tagline()}</p>
            <ul class="role-perks">
                {role.perks().into_iter().map(|perk| view! { <li>"✓ " {perk}</li> }).collect_view()}
            </ul>
            {match role.route() {
                Some(route) => view! { <A href=route class="btn btn-primary">{cta}</A> }.into_view(),
                None => view! {
                    <button class="btn btn-primary" disabled=true title="Coming soon">{cta}</button>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_venue_lacks_a_form() {
        let routed: Vec<Role> = Role::ALL.into_iter().filter(|r| r.route().is_some()).collect();
        assert_eq!(routed, [Role::Musician, Role::Band]);
    }
}
