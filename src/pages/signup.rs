//! Signup Page
//!
//! Account creation form; a successful signup initializes the session the
//! same way login does. The experience field only applies to mentors.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::state::session::Session;

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let form = create_rw_signal(api::SignupRequest {
        role: "student".to_string(),
        ..Default::default()
    });
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = form.get();
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            set_error.set(Some("Name, email, and password are required".to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::signup(&request).await {
                Ok(auth) => {
                    session.sign_in(auth.token, auth.user);
                    session.show_success("Registration successful!");
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
                    <h1 class="text-4xl font-bold text-gray-900">"Create Account"</h1>
                    <p class="text-gray-600 mt-2">"Join our community today"</p>
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
                        // Basic info
                        <div class="space-y-4">
                            <div>
                                <label class="text-sm font-medium text-gray-700 block mb-2">"Full Name"</label>
                                <input
                                    placeholder="John Doe"
                                    prop:value=move || form.get().name
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                    required=true
                                    class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                />
                            </div>
                            <div>
                                <label class="text-sm font-medium text-gray-700 block mb-2">"Email Address"</label>
                                <input
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || form.get().email
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                    required=true
                                    class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                />
                            </div>
                            <div>
                                <label class="text-sm font-medium text-gray-700 block mb-2">"Password"</label>
                                <input
                                    type="password"
                                    placeholder="••••••••"
                                    prop:value=move || form.get().password
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                    required=true
                                    class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                />
                            </div>
                            <div>
                                <label class="text-sm font-medium text-gray-700 block mb-2">"Role"</label>
                                <select
                                    prop:value=move || form.get().role
                                    on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                                    class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                >
                                    <option value="student">"Student"</option>
                                    <option value="mentor">"Mentor"</option>
                                    <option value="admin">"Admin"</option>
                                </select>
                            </div>
                        </div>

                        // Location
                        <div class="space-y-4">
                            <div class="grid grid-cols-2 gap-4">
                                <div>
                                    <label class="text-sm font-medium text-gray-700 block mb-2">"City"</label>
                                    <input
                                        placeholder="Your City"
                                        prop:value=move || form.get().city
                                        on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                                        class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                    />
                                </div>
                                <div>
                                    <label class="text-sm font-medium text-gray-700 block mb-2">"State"</label>
                                    <input
                                        placeholder="Your State"
                                        prop:value=move || form.get().state
                                        on:input=move |ev| form.update(|f| f.state = event_target_value(&ev))
                                        class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                    />
                                </div>
                            </div>
                            <div>
                                <label class="text-sm font-medium text-gray-700 block mb-2">"College/Institution"</label>
                                <input
                                    placeholder="Your College"
                                    prop:value=move || form.get().college
                                    on:input=move |ev| form.update(|f| f.college = event_target_value(&ev))
                                    class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                />
                            </div>
                        </div>

                        // Domain & category
                        <div class="space-y-4">
                            <div>
                                <label class="text-sm font-medium text-gray-700 block mb-2">"Domain"</label>
                                <select
                                    prop:value=move || form.get().domain
                                    on:change=move |ev| form.update(|f| f.domain = event_target_value(&ev))
                                    class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                >
                                    <option value="">"Select Domain"</option>
                                    <option value="AI">"AI"</option>
                                    <option value="Web Dev">"Web Development"</option>
                                    <option value="IoT">"IoT"</option>
                                </select>
                            </div>
                            <div>
                                <label class="text-sm font-medium text-gray-700 block mb-2">"Category"</label>
                                <select
                                    prop:value=move || form.get().category
                                    on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                                    class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                >
                                    <option value="">"Select Category"</option>
                                    <option value="Robotics">"Robotics"</option>
                                    <option value="SaaS">"SaaS"</option>
                                    <option value="Mobile">"Mobile Development"</option>
                                </select>
                            </div>
                        </div>

                        // Mentors describe their experience
                        {move || {
                            if form.get().role == "mentor" {
                                view! {
                                    <div>
                                        <label class="text-sm font-medium text-gray-700 block mb-2">"Experience"</label>
                                        <textarea
                                            placeholder="Tell us about your experience..."
                                            rows="3"
                                            prop:value=move || form.get().experience
                                            on:input=move |ev| form.update(|f| f.experience = event_target_value(&ev))
                                            class="block w-full px-4 py-3 border border-gray-200 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                        />
                                    </div>
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}

                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full px-4 py-3 rounded-lg text-white bg-indigo-600 hover:bg-indigo-700
                                   disabled:bg-gray-400 transition-colors font-medium"
                        >
                            {move || if submitting.get() { "Creating..." } else { "Create Account" }}
                        </button>
                    </form>

                    <p class="text-center mt-6 text-sm text-gray-500">
                        "Already have an account? "
                        <A href="/login" class="font-medium text-indigo-600 hover:text-indigo-500">
                            "Sign in instead"
                        </A>
                    </p>
                </div>
            </div>
        </div>
    }
}
