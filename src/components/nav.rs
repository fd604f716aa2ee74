//! Navigation Component
//!
//! Header navigation bar with role-aware links and logout.

use leptos::*;
use leptos_router::*;

use crate::state::session::{Role, Session};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let session_for_logout = session.clone();
    let logout = move |_: web_sys::MouseEvent| {
        session_for_logout.sign_out();
        session_for_logout.show_success("Logged out successfully");
        navigate("/", Default::default());
    };

    let session_for_links = session.clone();
    let session_for_admin = session.clone();

    view! {
        <nav class="bg-indigo-600 text-white">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🤝"</span>
                        <span class="text-xl font-bold text-white">"MentorMatch"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            if session_for_links.signed_in() {
                                let role = session_for_admin.role();
                                view! {
                                    <NavLink href="/" label="Dashboard" />
                                    {if role == Some(Role::Mentor) {
                                        view! { <NavLink href="/mentor" label="Mentorship" /> }.into_view()
                                    } else {
                                        view! {}.into_view()
                                    }}
                                    {if role == Some(Role::Admin) {
                                        view! { <NavLink href="/admin" label="Admin" /> }.into_view()
                                    } else {
                                        view! {}.into_view()
                                    }}
                                    <button
                                        on:click=logout.clone()
                                        class="ml-4 bg-white text-indigo-600 px-4 py-2 rounded-lg hover:bg-indigo-50 transition-colors"
                                    >
                                        "Logout"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Login" />
                                    <A
                                        href="/signup"
                                        class="ml-4 bg-white text-indigo-600 px-4 py-2 rounded-lg hover:bg-indigo-50 transition-colors"
                                    >
                                        "Sign Up"
                                    </A>
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-indigo-100 hover:text-white hover:bg-indigo-500 transition-colors"
            active_class="bg-indigo-500 text-white"
        >
            {label}
        </A>
    }
}
