//! Admin Dashboard Page
//!
//! Event management plus read-only views over registrations and teams.
//! The role check runs before any data fetch and redirects non-admins away;
//! it is a client-side convenience, not a security boundary.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{self, ApiError, Event, Registration, Team};
use crate::state::session::{Role, Session};

/// Admin dashboard page component
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    let registrations = create_rw_signal(Vec::<Registration>::new());
    let teams = create_rw_signal(Vec::<Team>::new());
    let events = create_rw_signal(Vec::<Event>::new());

    let (show_form, set_show_form) = create_signal(false);

    // Access check before any fetch; client-side convenience only.
    let session_for_guard = session.clone();
    let navigate = use_navigate();
    create_effect(move |_| {
        if !session_for_guard.signed_in() || session_for_guard.role() != Some(Role::Admin) {
            session_for_guard.show_error("Access denied. Admins only.");
            navigate("/", Default::default());
        }
    });

    let session_for_mount = session.clone();
    create_effect(move |_| {
        let Some(token) = session_for_mount.token.get() else {
            return;
        };
        if session_for_mount.role() != Some(Role::Admin) {
            return;
        }
        spawn_local(load_registrations(token.clone(), registrations));
        spawn_local(load_teams(token, teams));
        spawn_local(load_events(events));
    });

    view! {
        <div class="space-y-8">
            // Header
            <div class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h1 class="text-4xl font-bold text-gray-900">"Admin Dashboard"</h1>
                <p class="text-gray-600 mt-2">"Manage events and monitor registrations"</p>
            </div>

            // Event management
            <div class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold text-gray-800">"Event Management"</h2>
                    <button
                        on:click=move |_| set_show_form.update(|open| *open = !*open)
                        class="px-6 py-3 bg-indigo-600 text-white rounded-lg font-medium hover:bg-indigo-700 transition-colors"
                    >
                        {move || if show_form.get() { "Cancel" } else { "+ Add Event" }}
                    </button>
                </div>

                {move || {
                    if show_form.get() {
                        view! {
                            <EventForm
                                events=events
                                on_created=move || set_show_form.set(false)
                            />
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Registrations per event
            <div class="space-y-6">
                {move || {
                    events.get().into_iter().map(|event| {
                        let event_id = event.id.clone();
                        let event_registrations = create_memo(move |_| {
                            registrations
                                .get()
                                .into_iter()
                                .filter(|reg| reg.event.id == event_id)
                                .collect::<Vec<_>>()
                        });
                        view! {
                            <div class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                                <div class="flex justify-between items-center mb-6">
                                    <h3 class="text-xl font-bold text-gray-800">{event.name.clone()}</h3>
                                    <span class="px-4 py-1 bg-blue-100 text-blue-800 rounded-full text-sm font-medium">
                                        {move || format!("{} Registrations", event_registrations.get().len())}
                                    </span>
                                </div>
                                <div class="overflow-x-auto">
                                    <table class="min-w-full divide-y divide-gray-200">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Student"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"College"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Degree & Year"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Domain"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Category"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="bg-white divide-y divide-gray-200">
                                            {move || {
                                                event_registrations.get().into_iter().map(|reg| view! {
                                                    <tr class="hover:bg-gray-50">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{reg.name.clone()}</td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{reg.college.clone()}</td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                            {format!("{} • Year {}", reg.degree, reg.study_year)}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                            <span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-blue-100 text-blue-800">
                                                                {reg.domain.clone()}
                                                            </span>
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                            <span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-purple-100 text-purple-800">
                                                                {reg.category.clone()}
                                                            </span>
                                                        </td>
                                                    </tr>
                                                }).collect_view()
                                            }}
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            // Teams overview
            <div class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">"Teams Overview"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        teams.get().into_iter().map(|team| {
                            let short_id: String = team
                                .id
                                .chars()
                                .rev()
                                .take(6)
                                .collect::<Vec<_>>()
                                .into_iter()
                                .rev()
                                .collect();
                            view! {
                                <div class="bg-gray-50 rounded-xl p-6 hover:shadow-md transition-shadow">
                                    <div class="mb-4">
                                        <p class="text-sm font-medium text-gray-900">"Team "{short_id}</p>
                                        <p class="text-xs text-gray-500">{format!("{} • {}", team.domain, team.category)}</p>
                                    </div>
                                    <div class="space-y-3">
                                        <span class="text-sm text-gray-600">
                                            {team.mentor.as_ref().map(|m| m.name.clone()).unwrap_or_else(|| "Mentor not assigned".to_string())}
                                        </span>
                                        <div class="border-t border-gray-200 pt-3">
                                            <p class="text-xs font-medium text-gray-500 mb-2">"Team Members"</p>
                                            {team.members.iter().map(|member| view! {
                                                <div class="flex items-center space-x-2 mb-2">
                                                    <div class="w-6 h-6 rounded-full bg-indigo-500 flex items-center justify-center">
                                                        <span class="text-xs text-white font-medium">
                                                            {member.name.chars().next().unwrap_or('?').to_string()}
                                                        </span>
                                                    </div>
                                                    <span class="text-sm text-gray-600">{member.name.clone()}</span>
                                                </div>
                                            }).collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

/// Event creation form: idle → submitting → idle; success clears the form
/// and re-fetches the event list.
#[component]
fn EventForm(
    events: RwSignal<Vec<Event>>,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    let (name, set_name) = create_signal(String::new());
    let (host, set_host) = create_signal(String::new());
    let (team_size, set_team_size) = create_signal(String::new());
    let (deadline, set_deadline) = create_signal(String::new());
    let (contact_person, set_contact_person) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(size) = team_size.get().trim().parse::<u32>() else {
            session.show_error("Team size must be a number");
            return;
        };
        let Some(token) = session.token.get() else {
            return;
        };

        set_submitting.set(true);

        let event = api::NewEvent {
            name: name.get().trim().to_string(),
            host: host.get().trim().to_string(),
            team_size: size,
            description: description.get().trim().to_string(),
            deadline: deadline.get(),
            contact_person: contact_person.get().trim().to_string(),
        };

        let session = session.clone();
        let on_created = on_created.clone();
        spawn_local(async move {
            match api::create_event(&token, &event).await {
                Ok(_created) => {
                    session.show_success("Event added!");
                    set_name.try_set(String::new());
                    set_host.try_set(String::new());
                    set_team_size.try_set(String::new());
                    set_deadline.try_set(String::new());
                    set_contact_person.try_set(String::new());
                    set_description.try_set(String::new());
                    on_created();
                    load_events(events).await;
                }
                Err(e) => session.show_error(&format!("Failed to add event: {}", e)),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Event Name"</label>
                    <input
                        placeholder="Hackathon 2026"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required=true
                        class="w-full px-4 py-3 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Host"</label>
                    <input
                        placeholder="Organization Name"
                        prop:value=move || host.get()
                        on:input=move |ev| set_host.set(event_target_value(&ev))
                        required=true
                        class="w-full px-4 py-3 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Team Size"</label>
                    <input
                        type="number"
                        placeholder="Maximum participants"
                        prop:value=move || team_size.get()
                        on:input=move |ev| set_team_size.set(event_target_value(&ev))
                        required=true
                        class="w-full px-4 py-3 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Deadline"</label>
                    <input
                        type="date"
                        prop:value=move || deadline.get()
                        on:input=move |ev| set_deadline.set(event_target_value(&ev))
                        required=true
                        class="w-full px-4 py-3 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Contact Person"</label>
                    <input
                        placeholder="Who students should reach out to"
                        prop:value=move || contact_person.get()
                        on:input=move |ev| set_contact_person.set(event_target_value(&ev))
                        class="w-full px-4 py-3 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                    />
                </div>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-2">"Description"</label>
                <textarea
                    placeholder="Event details and requirements..."
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    required=true
                    class="w-full px-4 py-3 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                />
            </div>
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-indigo-600 text-white py-3 rounded-lg hover:bg-indigo-700
                       disabled:bg-gray-400 transition-colors"
            >
                {move || if submitting.get() { "Creating..." } else { "Create Event" }}
            </button>
        </form>
    }
}

// ============ Collection loaders ============

async fn load_registrations(token: String, slot: RwSignal<Vec<Registration>>) {
    match api::fetch_all_registrations(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("registrations", &e),
    }
}

async fn load_teams(token: String, slot: RwSignal<Vec<Team>>) {
    match api::fetch_all_teams(&token).await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("teams", &e),
    }
}

async fn load_events(slot: RwSignal<Vec<Event>>) {
    match api::fetch_events().await {
        Ok(list) => {
            slot.try_set(list);
        }
        Err(e) => log_fetch_error("events", &e),
    }
}

fn log_fetch_error(what: &str, error: &ApiError) {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", what, error).into());
}
