//! Mentor Card Component
//!
//! Profile card for an available mentor with the mentorship-request modal.
//! The introduction is validated client-side (minimum length) before any
//! network call; on success the modal closes and the text clears, on failure
//! the modal stays open showing the server's message.

use leptos::*;

use crate::api;
use crate::state::session::Session;
use crate::state::workflow::validate_introduction;

/// Mentor card with request modal
#[component]
pub fn MentorCard(mentor: api::Mentor) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    let (show_modal, set_show_modal) = create_signal(false);
    let (introduction, set_introduction) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let mentor_id = mentor.id.clone();
    let mentor_name = mentor.name.clone();
    let mentor_name_label = mentor.name.clone();
    let initial = mentor.name.chars().next().unwrap_or('?');

    let token = session.token;
    let session_for_submit = session.clone();
    let on_submit = move |_: web_sys::MouseEvent| {
        let text = introduction.get();
        if let Err(message) = validate_introduction(&text) {
            set_error.set(Some(message.to_string()));
            return;
        }
        let Some(token) = token.get() else {
            set_error.set(Some("You must be signed in to request mentorship".to_string()));
            return;
        };

        set_error.set(None);
        set_submitting.set(true);

        let mentor_id = mentor_id.clone();
        let session = session_for_submit.clone();
        spawn_local(async move {
            match api::send_mentor_request(&token, &mentor_id, text.trim()).await {
                Ok(()) => {
                    session.show_success("Mentor request sent successfully!");
                    set_show_modal.try_set(false);
                    set_introduction.try_set(String::new());
                }
                Err(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="bg-white rounded-xl p-6 shadow-sm hover:shadow-md transition-shadow border border-gray-100">
            // Profile
            <div class="flex items-center space-x-4 mb-4">
                <div class="h-12 w-12 rounded-full bg-indigo-600 flex items-center justify-center text-white text-xl font-bold">
                    {initial.to_string()}
                </div>
                <div>
                    <h3 class="text-lg font-bold text-gray-900">{mentor.name.clone()}</h3>
                    <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-800">
                        {mentor.domain.clone()}
                    </span>
                </div>
            </div>

            // Experience
            <div class="mb-6">
                <h4 class="text-sm font-medium text-gray-500 mb-2">"Experience"</h4>
                <p class="text-gray-700">{mentor.experience.clone()}</p>
            </div>

            <button
                on:click=move |_| {
                    set_show_modal.set(true);
                    set_error.set(None);
                }
                class="w-full bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 transition-colors"
            >
                "Request Mentorship"
            </button>

            // Introduction modal
            {move || {
                if !show_modal.get() {
                    return view! {}.into_view();
                }
                let mentor_name = mentor_name_label.clone();
                view! {
                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                        <div class="bg-white rounded-xl p-6 w-full max-w-md mx-4">
                            <div class="flex justify-between items-center mb-4">
                                <h4 class="text-xl font-bold text-gray-900">"Request Mentorship"</h4>
                                <button
                                    on:click=move |_| {
                                        set_show_modal.set(false);
                                        set_error.set(None);
                                    }
                                    class="text-gray-400 hover:text-gray-600"
                                >
                                    "✕"
                                </button>
                            </div>

                            // Validation / server error
                            {move || {
                                error.get().map(|message| view! {
                                    <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded-lg text-sm">
                                        {message}
                                    </div>
                                })
                            }}

                            <div class="space-y-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-2">
                                        "Introduce yourself to "{mentor_name}
                                    </label>
                                    <textarea
                                        placeholder="Tell your potential mentor about yourself, your goals, and why you'd like their mentorship..."
                                        prop:value=move || introduction.get()
                                        on:input=move |ev| set_introduction.set(event_target_value(&ev))
                                        class="w-full h-32 px-4 py-3 rounded-lg border border-gray-300
                                               focus:ring-2 focus:ring-indigo-500 focus:outline-none resize-none"
                                    />
                                    <p class="mt-1 text-sm text-gray-500">
                                        "Minimum 10 characters required"
                                    </p>
                                </div>

                                <div class="flex justify-end space-x-3">
                                    <button
                                        on:click=move |_| {
                                            set_show_modal.set(false);
                                            set_error.set(None);
                                        }
                                        disabled=move || submitting.get()
                                        class="px-4 py-2 text-gray-700 hover:text-gray-900 transition-colors"
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        on:click=on_submit.clone()
                                        disabled=move || submitting.get()
                                        class="px-4 py-2 rounded-lg text-white bg-indigo-600 hover:bg-indigo-700
                                               disabled:bg-gray-400 transition-colors"
                                    >
                                        {move || if submitting.get() { "Sending..." } else { "Send Request" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
