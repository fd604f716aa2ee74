//! App Root Component
//!
//! Main application component with routing and the session provider.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{AdminDashboard, Dashboard, Login, MentorDashboard, Signup};
use crate::state::session::{provide_session, Session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the session to all components
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 max-w-7xl w-full mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route path="/mentor" view=MentorDashboard />
                        <Route path="/admin" view=AdminDashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Home route: the student dashboard when signed in, a sign-in prompt
/// otherwise.
#[component]
fn Home() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    view! {
        {move || {
            if session.signed_in() {
                view! { <Dashboard /> }.into_view()
            } else {
                view! { <SignedOutHome /> }.into_view()
            }
        }}
    }
}

/// Prompt shown on the home route when nobody is signed in
#[component]
fn SignedOutHome() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-4xl font-bold text-gray-900 mb-2">"MentorMatch"</h1>
            <p class="text-gray-600 mb-6">
                "Register for events, build your team, and find the right mentor."
            </p>
            <div class="flex space-x-4">
                <A
                    href="/signup"
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Get Started"
                </A>
                <A
                    href="/login"
                    class="px-6 py-3 border border-indigo-600 text-indigo-600 hover:bg-indigo-50 rounded-lg font-medium transition-colors"
                >
                    "Sign In"
                </A>
            </div>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
