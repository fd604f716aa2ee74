//! Student Dashboard Page
//!
//! Orchestrates the event-registration and team-formation workflow: fetches
//! the student collections on mount, holds them as independent signals, and
//! exposes the mutating operations (register, invite, accept/decline,
//! feedback response), each of which re-fetches the collections it
//! invalidates after the server call succeeds.

use leptos::*;
use std::collections::HashMap;

use crate::api::{
    self, ApiError, Event, Feedback, MatchedStudent, Mentor, Registration, Suggestion, TeamRequest,
    Teammate,
};
use crate::components::{
    EventCard, FeedbackList, MatchingStudentsTable, MentorCard, TeamRequestsTable, TeammatesList,
};
use crate::state::session::Session;
use crate::state::workflow::{EventCardState, RegistrationDraft};

/// Student dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    // Server collections; every list stays empty until its fetch resolves.
    let events = create_rw_signal(Vec::<Event>::new());
    let suggestions = create_rw_signal(Vec::<Suggestion>::new());
    let matching_students = create_rw_signal(Vec::<MatchedStudent>::new());
    let registered_events = create_rw_signal(Vec::<Registration>::new());
    let team_requests = create_rw_signal(Vec::<TeamRequest>::new());
    let teammates = create_rw_signal(Vec::<Teammate>::new());
    let mentors = create_rw_signal(Vec::<Mentor>::new());
    let feedback = create_rw_signal(Vec::<Feedback>::new());

    // Workflow state.
    let cards = create_rw_signal(EventCardState::default());
    let draft = create_rw_signal(RegistrationDraft::default());
    let (registering, set_registering) = create_signal(false);
    let invite_event = create_rw_signal(None::<String>);
    let feedback_drafts = create_rw_signal(HashMap::<String, String>::new());

    // Fetch all collections on mount, one task per collection. Completion
    // order is not significant; a failed fetch logs to the console and
    // leaves its own slice empty without affecting the others.
    let session_for_mount = session.clone();
    create_effect(move |_| {
        let token = session_for_mount.token.get();

        spawn_local(load_events(events));

        let Some(token) = token else { return };
        spawn_local(load_suggestions(token.clone(), suggestions));
        spawn_local(load_matching_students(token.clone(), matching_students));
        spawn_local(load_registered_events(token.clone(), registered_events));
        spawn_local(load_team_requests(token.clone(), team_requests));
        spawn_local(load_teammates(token.clone(), teammates));
        spawn_local(load_mentors(token.clone(), mentors));
        spawn_local(load_feedback(token, feedback));
    });

    // Register for the event whose form is open.
    let session_for_register = session.clone();
    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(event_id) = cards.get().form_target().map(str::to_string) else {
            return;
        };
        let form = draft.get();
        if !form.is_complete() {
            session_for_register.show_error("Please fill in all registration fields");
            return;
        }
        let Some(token) = session_for_register.token.get() else {
            return;
        };
        let user = session_for_register.user.get();

        set_registering.set(true);

        let request = api::RegisterEventRequest {
            event_id,
            name: form.name.trim().to_string(),
            college: form.college.trim().to_string(),
            degree: form.degree.trim().to_string(),
            study_year: form.study_year.trim().to_string(),
            end_year: form.end_year.trim().to_string(),
            domain: user.as_ref().map(|u| u.domain.clone()).unwrap_or_default(),
            category: user.as_ref().map(|u| u.category.clone()).unwrap_or_default(),
        };

        let session = session_for_register.clone();
        spawn_local(async move {
            match api::register_event(&token, &request).await {
                Ok(()) => {
                    session.show_success("Successfully registered for the event!");
                    cards.try_update(|c| c.close_form());
                    draft.try_update(|d| d.reset());
                    load_registered_events(token, registered_events).await;
                }
                Err(e) => {
                    // The form stays open so the user can retry.
                    session.show_error(&e.to_string());
                }
            }
            set_registering.try_set(false);
        });
    };

    // Invite another student to the selected event.
    let session_for_invite = session.clone();
    let on_invite = Callback::new(move |target_user_id: String| {
        let Some(event_id) = invite_event.get() else {
            session_for_invite.show_error("Please select an event to invite for.");
            return;
        };
        let Some(token) = session_for_invite.token.get() else {
            return;
        };

        let session = session_for_invite.clone();
        spawn_local(async move {
            match api::send_team_request(&token, &target_user_id, &event_id).await {
                Ok(()) => session.show_success("Team invite sent successfully!"),
                Err(e) => session.show_error(&format!("Failed to send invite: {}", e)),
            }
        });
    });

    // Accept or decline a pending team request.
    let session_for_respond = session.clone();
    let on_respond = Callback::new(move |(request_id, approved): (String, bool)| {
        let Some(token) = session_for_respond.token.get() else {
            return;
        };

        let session = session_for_respond.clone();
        spawn_local(async move {
            match api::approve_team_request(&token, &request_id, approved).await {
                Ok(()) => {
                    session.show_success(if approved {
                        "Team request accepted!"
                    } else {
                        "Team request declined."
                    });
                    // Both affected collections are refreshed unconditionally.
                    spawn_local(load_team_requests(token.clone(), team_requests));
                    spawn_local(load_teammates(token, teammates));
                }
                Err(e) => session.show_error(&format!("Failed to process request: {}", e)),
            }
        });
    });

    // Reply to one feedback entry.
    let session_for_feedback = session.clone();
    let on_feedback_submit = Callback::new(move |feedback_id: String| {
        let text = feedback_drafts
            .get()
            .get(&feedback_id)
            .cloned()
            .unwrap_or_default();
        if text.trim().is_empty() {
            session_for_feedback.show_error("Please write a response first");
            return;
        }
        let Some(token) = session_for_feedback.token.get() else {
            return;
        };

        let session = session_for_feedback.clone();
        spawn_local(async move {
            match api::submit_feedback_response(&token, &feedback_id, text.trim()).await {
                Ok(()) => {
                    feedback_drafts.try_update(|d| {
                        d.remove(&feedback_id);
                    });
                    load_feedback(token, feedback).await;
                    session.show_success("Response submitted successfully!");
                }
                Err(e) => session.show_error(&format!("Failed to submit response: {}", e)),
            }
        });
    });

    let user_name = {
        let session = session.clone();
        move || {
            session
                .user
                .get()
                .map(|u| u.name)
                .unwrap_or_else(|| "Student".to_string())
        }
    };

    view! {
        <div class="space-y-8">
            // Header with stats
            <div class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h1 class="text-4xl font-bold text-gray-900">"Student Dashboard"</h1>
                <p class="text-gray-600 mt-2">"Welcome back, "{user_name}</p>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-6">
                    <StatCard
                        label="Registered Events"
                        value=Signal::derive(move || registered_events.get().len())
                        note="Events you have registered for"
                    />
                    <StatCard
                        label="Available Events"
                        value=Signal::derive(move || events.get().len())
                        note="Total events available"
                    />
                </div>
            </div>

            // Upcoming competitions
            <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Upcoming Competitions"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        events.get().into_iter().map(|event| {
                            view! { <EventCard event=event cards=cards /> }
                        }).collect_view()
                    }}
                </div>
            </section>

            // Registration modal (single slot: at most one event's form open)
            {
                let on_register = on_register.clone();
                move || {
                    cards.get().form_target().map(|_| view! {
                        <RegistrationModal
                            draft=draft
                            submitting=registering
                            on_submit=on_register.clone()
                            on_close=move || cards.update(|c| c.close_form())
                        />
                    })
                }
            }

            // Registered events
            <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Your Registered Events"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        registered_events.get().into_iter().map(|reg| view! {
                            <div class="bg-white rounded-xl p-6 shadow-md border border-gray-100">
                                <div class="flex justify-between items-start mb-4">
                                    <h3 class="text-lg font-semibold text-gray-800">{reg.event.name.clone()}</h3>
                                    <span class="bg-green-100 text-green-800 text-xs font-medium px-2.5 py-0.5 rounded-full">
                                        "Registered"
                                    </span>
                                </div>
                                <p class="text-sm text-gray-600">"Host: "{reg.event.host.clone()}</p>
                                <p class="text-sm text-gray-500 mt-2">
                                    {crate::components::format_date(&reg.event.deadline)}
                                </p>
                            </div>
                        }).collect_view()
                    }}
                </div>
            </section>

            // Team management
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <TeamRequestsTable requests=team_requests on_respond=on_respond />
                <TeammatesList teammates=teammates />
            </div>

            // Suggested teammates
            <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Suggested Teammates"</h2>
                {move || {
                    let suggested = suggestions.get();
                    if suggested.is_empty() {
                        return view! {
                            <p class="text-center text-gray-500">"No suggestions right now"</p>
                        }.into_view();
                    }
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {suggested.into_iter().map(|student| view! {
                                <div class="bg-gray-50 rounded-lg p-4">
                                    <h3 class="text-sm font-medium text-gray-900">{student.name.clone()}</h3>
                                    <p class="text-sm text-gray-500 mt-1">
                                        {format!("{} • {}", student.domain, student.category)}
                                    </p>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </section>

            // Find teammates
            <MatchingStudentsTable
                students=matching_students
                registered=registered_events
                selected_event=invite_event
                on_invite=on_invite
            />

            // Available mentors
            <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Available Mentors"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        mentors.get().into_iter().map(|mentor| {
                            view! { <MentorCard mentor=mentor /> }
                        }).collect_view()
                    }}
                </div>
            </section>

            // Mentor feedback
            <FeedbackList items=feedback drafts=feedback_drafts on_submit=on_feedback_submit />
        </div>
    }
}

/// Header stat card
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    note: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-blue-50 to-indigo-50 rounded-xl p-6 border border-blue-100">
            <p class="text-sm font-medium text-blue-600">{label}</p>
            <h3 class="text-3xl font-bold text-gray-900 mt-1">{move || value.get()}</h3>
            <p class="text-sm text-gray-600 mt-2">{note}</p>
        </div>
    }
}

/// Registration modal bound to the dashboard's single-slot form state
#[component]
fn RegistrationModal(
    draft: RwSignal<RegistrationDraft>,
    submitting: ReadSignal<bool>,
    on_submit: impl Fn(web_sys::SubmitEvent) + 'static,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let on_close_for_x = on_close;

    view! {
        <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center">
            <div class="bg-white rounded-2xl p-8 w-full max-w-xl shadow-2xl space-y-6 relative">
                <button
                    class="absolute top-4 right-4 text-gray-400 hover:text-gray-600"
                    on:click=move |_| on_close_for_x()
                >
                    "✕"
                </button>
                <div>
                    <h2 class="text-2xl font-bold text-gray-800">"Register for Event"</h2>
                    <p class="text-gray-600 text-sm mt-1">"Fill in your details to complete registration"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="Your Name"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                        required=true
                    />
                    <input
                        type="text"
                        placeholder="College"
                        prop:value=move || draft.get().college
                        on:input=move |ev| draft.update(|d| d.college = event_target_value(&ev))
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                        required=true
                    />
                    <input
                        type="text"
                        placeholder="Degree"
                        prop:value=move || draft.get().degree
                        on:input=move |ev| draft.update(|d| d.degree = event_target_value(&ev))
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                        required=true
                    />
                    <div class="grid grid-cols-2 gap-4">
                        <input
                            type="text"
                            placeholder="Current Year"
                            prop:value=move || draft.get().study_year
                            on:input=move |ev| draft.update(|d| d.study_year = event_target_value(&ev))
                            class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                            required=true
                        />
                        <input
                            type="text"
                            placeholder="Graduation Year"
                            prop:value=move || draft.get().end_year
                            on:input=move |ev| draft.update(|d| d.end_year = event_target_value(&ev))
                            class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                            required=true
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-indigo-600 text-white py-3 rounded-lg hover:bg-indigo-700
                               disabled:bg-gray-400 transition-colors"
                    >
                        {move || if submitting.get() { "Registering..." } else { "Complete Registration" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

// ============ Collection loaders ============
//
// One loader per collection; used for both the mount fetch and the
// re-fetch-after-mutation policy. Failures are console-only.

async fn load_events(slot: RwSignal<Vec<Event>>) {
    match api::fetch_events().await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("events", &e),
    }
}

async fn load_suggestions(token: String, slot: RwSignal<Vec<Suggestion>>) {
    match api::fetch_suggestions(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("suggestions", &e),
    }
}

async fn load_matching_students(token: String, slot: RwSignal<Vec<MatchedStudent>>) {
    match api::fetch_matching_students(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("matching students", &e),
    }
}

async fn load_registered_events(token: String, slot: RwSignal<Vec<Registration>>) {
    match api::fetch_registered_events(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("registered events", &e),
    }
}

async fn load_team_requests(token: String, slot: RwSignal<Vec<TeamRequest>>) {
    match api::fetch_team_requests(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("team requests", &e),
    }
}

async fn load_teammates(token: String, slot: RwSignal<Vec<Teammate>>) {
    match api::fetch_teammates(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("teammates", &e),
    }
}

async fn load_mentors(token: String, slot: RwSignal<Vec<Mentor>>) {
    match api::fetch_mentors_by_domain(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("mentors", &e),
    }
}

async fn load_feedback(token: String, slot: RwSignal<Vec<Feedback>>) {
    match api::fetch_mentor_feedback(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("mentor feedback", &e),
    }
}

fn log_fetch_error(what: &str, error: &ApiError) {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", what, error).into());
}
