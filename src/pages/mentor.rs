//! Mentor Dashboard Page
//!
//! Pending mentorship requests, current mentees, and feedback history for
//! the signed-in mentor. Approving a request re-fetches every mentor-scoped
//! collection rather than patching the lists in place.

use leptos::*;
use leptos_router::use_navigate;
use std::collections::HashSet;

use crate::api::{self, ApiError, Feedback, Mentee, MentorRequestView};
use crate::components::{format_date, Loading};
use crate::state::session::{Role, Session};

/// Mentor dashboard page component
#[component]
pub fn MentorDashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    let requests = create_rw_signal(Vec::<MentorRequestView>::new());
    let mentees = create_rw_signal(Vec::<Mentee>::new());
    let feedbacks = create_rw_signal(Vec::<Feedback>::new());
    let (loading, set_loading) = create_signal(true);

    // Request currently being approved, rendered as busy.
    let approving = create_rw_signal(None::<String>);

    let (show_modal, set_show_modal) = create_signal(false);
    let selected_mentee = create_rw_signal(None::<Mentee>);
    let (feedback_text, set_feedback_text) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Access check before any fetch; client-side convenience only.
    let session_for_guard = session.clone();
    let navigate = use_navigate();
    create_effect(move |_| {
        if !session_for_guard.signed_in() || session_for_guard.role() != Some(Role::Mentor) {
            session_for_guard.show_error("Access denied. Mentors only.");
            navigate("/", Default::default());
        }
    });

    // Fetch mentor collections on mount.
    let session_for_mount = session.clone();
    create_effect(move |_| {
        let Some(token) = session_for_mount.token.get() else {
            return;
        };
        if session_for_mount.role() != Some(Role::Mentor) {
            return;
        }
        spawn_local(async move {
            load_requests(token.clone(), requests).await;
            load_mentees(token.clone(), mentees).await;
            load_given_feedback(token, feedbacks).await;
            set_loading.try_set(false);
        });
    });

    // Approve a mentorship request, then refresh every mentor collection.
    let session_for_approve = session.clone();
    let on_approve = Callback::new(move |request_id: String| {
        let Some(token) = session_for_approve.token.get() else {
            return;
        };
        approving.set(Some(request_id.clone()));

        let session = session_for_approve.clone();
        spawn_local(async move {
            match api::approve_mentor_request(&token, &request_id).await {
                Ok(()) => {
                    session.show_success("Request approved successfully!");
                    load_requests(token.clone(), requests).await;
                    load_mentees(token.clone(), mentees).await;
                    load_given_feedback(token, feedbacks).await;
                }
                Err(e) => session.show_error(&format!("Failed to approve request: {}", e)),
            }
            approving.try_set(None);
        });
    });

    // Submit feedback for the mentee selected in the modal.
    let session_for_feedback = session.clone();
    let on_feedback_submit = move |_: web_sys::MouseEvent| {
        let Some(mentee) = selected_mentee.get() else {
            session_for_feedback.show_error("Please select a student first");
            return;
        };
        let text = feedback_text.get();
        if text.trim().is_empty() {
            session_for_feedback.show_error("Please enter feedback text");
            return;
        }
        let Some(token) = session_for_feedback.token.get() else {
            return;
        };

        set_submitting.set(true);

        let session = session_for_feedback.clone();
        spawn_local(async move {
            match api::give_feedback(&token, &mentee.student_id, text.trim()).await {
                Ok(()) => {
                    session.show_success("Feedback submitted successfully!");
                    set_feedback_text.try_set(String::new());
                    set_show_modal.try_set(false);
                    selected_mentee.try_set(None);
                    load_given_feedback(token, feedbacks).await;
                }
                Err(e) => session.show_error(&format!("Failed to submit feedback: {}", e)),
            }
            set_submitting.try_set(false);
        });
    };

    let events_mentored = create_memo(move |_| {
        mentees
            .get()
            .iter()
            .filter_map(|m| m.event.as_ref().map(|e| e.id.clone()))
            .collect::<HashSet<_>>()
            .len()
    });

    let user_name = {
        let session = session.clone();
        move || {
            session
                .user
                .get()
                .map(|u| u.name)
                .unwrap_or_else(|| "Mentor".to_string())
        }
    };

    view! {
        <div class="space-y-8">
            // Header with stats
            <div class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h1 class="text-4xl font-bold text-gray-900">"Mentor Dashboard"</h1>
                <p class="text-gray-600 mt-2">"Welcome back, "{user_name}</p>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-6">
                    <div class="bg-gradient-to-br from-blue-50 to-indigo-50 rounded-xl p-6 border border-blue-100">
                        <p class="text-sm font-medium text-blue-600">"Total Mentees"</p>
                        <h3 class="text-3xl font-bold text-gray-900 mt-1">{move || mentees.get().len()}</h3>
                        <p class="text-sm text-gray-600 mt-2">"Students under your mentorship"</p>
                    </div>
                    <div class="bg-gradient-to-br from-green-50 to-teal-50 rounded-xl p-6 border border-green-100">
                        <p class="text-sm font-medium text-green-600">"Events Mentored"</p>
                        <h3 class="text-3xl font-bold text-gray-900 mt-1">{move || events_mentored.get()}</h3>
                        <p class="text-sm text-gray-600 mt-2">"Events you are mentoring"</p>
                    </div>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                view! {}.into_view()
            }}

            // Pending requests
            <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Pending Mentorship Requests"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        let pending = requests.get();
                        if pending.is_empty() {
                            return view! {
                                <div class="col-span-full text-center py-8">
                                    <p class="text-gray-500">"No pending mentorship requests"</p>
                                </div>
                            }.into_view();
                        }
                        pending.into_iter().map(|request| {
                            let request_id = request.id.clone();
                            let busy_id = request.id.clone();
                            let is_busy = create_memo(move |_| approving.get().as_deref() == Some(busy_id.as_str()));
                            view! {
                                <div class=move || {
                                    let base = "bg-white rounded-lg shadow-md p-6 border border-gray-100";
                                    if is_busy.get() {
                                        format!("{} opacity-50 pointer-events-none", base)
                                    } else {
                                        base.to_string()
                                    }
                                }>
                                    <div class="space-y-4">
                                        <div>
                                            <h3 class="text-lg font-semibold text-gray-800">"Student Introduction"</h3>
                                            <p class="text-gray-600 mt-1">{request.introduction.clone()}</p>
                                        </div>
                                        <div class="flex justify-between items-center">
                                            <div>
                                                <p class="text-sm text-gray-500">"Domain: "{request.domain.clone()}</p>
                                                <p class="text-sm text-gray-500">"Student: "{request.student_name.clone()}</p>
                                            </div>
                                            <button
                                                on:click=move |_| on_approve.call(request_id.clone())
                                                disabled=move || is_busy.get()
                                                class="bg-green-600 text-white px-4 py-2 rounded-lg hover:bg-green-700
                                                       disabled:bg-gray-400 transition-colors"
                                            >
                                                {move || if is_busy.get() { "Approving..." } else { "Accept Request" }}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </section>

            // Mentees
            <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Your Mentees"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        let current = mentees.get();
                        if current.is_empty() {
                            return view! {
                                <div class="col-span-full text-center py-8">
                                    <p class="text-gray-500">"No mentees yet"</p>
                                </div>
                            }.into_view();
                        }
                        current.into_iter().map(|mentee| {
                            let mentee_for_modal = mentee.clone();
                            view! {
                                <div class="bg-white rounded-lg shadow-md p-6 border border-gray-100">
                                    <div class="space-y-4">
                                        <div>
                                            <h3 class="text-lg font-semibold text-gray-800">{mentee.student_name.clone()}</h3>
                                            <p class="text-gray-600 mt-1">"Domain: "{mentee.domain.clone()}</p>
                                            <p class="text-gray-600">"College: "{mentee.college.clone()}</p>
                                            {mentee.event.clone().map(|event| view! {
                                                <div class="mt-3 p-2 bg-blue-50 rounded-lg">
                                                    <p class="text-sm font-medium text-blue-700">"Event: "{event.name}</p>
                                                </div>
                                            })}
                                            {(!mentee.teammates.is_empty()).then(|| view! {
                                                <div class="mt-3">
                                                    <p class="text-sm font-medium text-gray-700 mb-2">"Team Members:"</p>
                                                    <div class="space-y-1">
                                                        {mentee.teammates.iter().map(|teammate| view! {
                                                            <div class="flex items-center space-x-2">
                                                                <div class="w-2 h-2 bg-green-400 rounded-full" />
                                                                <span class="text-sm text-gray-600">{teammate.name.clone()}</span>
                                                            </div>
                                                        }).collect_view()}
                                                    </div>
                                                </div>
                                            })}
                                        </div>
                                        <button
                                            on:click=move |_| {
                                                selected_mentee.set(Some(mentee_for_modal.clone()));
                                                set_show_modal.set(true);
                                            }
                                            class="w-full bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 transition-colors"
                                        >
                                            "Give Feedback"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </section>

            // Previous feedback
            <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Previous Feedbacks"</h2>
                <div class="space-y-6">
                    {move || {
                        let history = feedbacks.get();
                        if history.is_empty() {
                            return view! {
                                <p class="text-center text-gray-500">"No feedback history"</p>
                            }.into_view();
                        }
                        history.into_iter().map(|feedback| view! {
                            <div class="bg-gray-50 rounded-lg p-6">
                                <div class="flex justify-between items-start mb-4">
                                    <div>
                                        <p class="text-gray-800 font-medium">"To: "{feedback.student_name.clone()}</p>
                                        <p class="text-gray-600 mt-1">{feedback.feedback.clone()}</p>
                                    </div>
                                    <span class="text-sm text-gray-500">{format_date(&feedback.created_at)}</span>
                                </div>
                                {feedback.student_reply.clone().map(|reply| view! {
                                    <div class="mt-4 bg-white p-4 rounded-lg">
                                        <p class="text-sm text-gray-500">"Student's response:"</p>
                                        <p class="text-gray-800 mt-1">{reply}</p>
                                    </div>
                                })}
                            </div>
                        }).collect_view()
                    }}
                </div>
            </section>

            // Feedback modal
            {
                let on_feedback_submit = on_feedback_submit.clone();
                move || {
                    if !show_modal.get() {
                        return view! {}.into_view();
                    }
                    let student_name = selected_mentee
                        .get()
                        .map(|m| m.student_name)
                        .unwrap_or_default();
                    let on_feedback_submit = on_feedback_submit.clone();
                    view! {
                        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                            <div class="bg-white rounded-lg p-6 w-full max-w-md">
                                <h3 class="text-xl font-bold mb-4">"Give Feedback to "{student_name}</h3>
                                <textarea
                                    placeholder="Write your feedback here..."
                                    prop:value=move || feedback_text.get()
                                    on:input=move |ev| set_feedback_text.set(event_target_value(&ev))
                                    class="w-full h-32 p-2 border rounded-lg mb-4 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                />
                                <div class="flex justify-end space-x-2">
                                    <button
                                        on:click=move |_| {
                                            set_show_modal.set(false);
                                            selected_mentee.set(None);
                                            set_feedback_text.set(String::new());
                                        }
                                        disabled=move || submitting.get()
                                        class="px-4 py-2 text-gray-600 hover:text-gray-800"
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        on:click=on_feedback_submit
                                        disabled=move || submitting.get()
                                        class="px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700
                                               disabled:bg-gray-400 transition-colors"
                                    >
                                        {move || if submitting.get() { "Sending..." } else { "Send Feedback" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }.into_view()
                }
            }
        </div>
    }
}

// ============ Collection loaders ============

async fn load_requests(token: String, slot: RwSignal<Vec<MentorRequestView>>) {
    match api::fetch_mentor_requests(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("mentorship requests", &e),
    }
}

async fn load_mentees(token: String, slot: RwSignal<Vec<Mentee>>) {
    match api::fetch_mentees(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("mentees", &e),
    }
}

async fn load_given_feedback(token: String, slot: RwSignal<Vec<Feedback>>) {
    match api::fetch_given_feedback(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("given feedback", &e),
    }
}

fn log_fetch_error(what: &str, error: &ApiError) {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", what, error).into());
}
