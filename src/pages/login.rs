//! Login Page
//!
//! Initializes the session from the auth endpoint and navigates home.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::state::session::Session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = api::LoginRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(auth) => {
                    let name = auth.user.name.clone();
                    session.sign_in(auth.token, auth.user);
                    session.show_success(&format!("Welcome back, {}!", name));
                    navigate("/", Default::default());
                }
                Err(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="flex flex-col items-center justify-center py-16">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold text-gray-900">"Welcome Back"</h1>
                    <p class="text-gray-600 mt-2">"Sign in to your account"</p>
                </div>

                <div class="bg-white rounded-2xl shadow-xl p-8 border border-gray-100">
                    {move || {
                        error.get().map(|message| view! {
                            <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded-lg text-sm">
                                {message}
                            </div>
                        })
                    }}

                    <form on:submit=on_submit class="space-y-6">
                        <div>
                            <label class="text-sm font-medium text-gray-700 block mb-2">"Email Address"</label>
                            <input
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required=true
                                class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="text-sm font-medium text-gray-700 block mb-2">"Password"</label>
                            <input
                                type="password"
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required=true
                                class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                            />
                        </div>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full px-4 py-3 rounded-lg text-white bg-indigo-600 hover:bg-indigo-700
                                   disabled:bg-gray-400 transition-colors font-medium"
                        >
                            {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <p class="text-center mt-6 text-sm text-gray-500">
                        "Don't have an account? "
                        <A href="/signup" class="font-medium text-indigo-600 hover:text-indigo-500">
                            "Sign up"
                        </A>
                    </p>
                </div>
            </div>
        </div>
    }
}
