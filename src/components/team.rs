//! Team Components
//!
//! Pending team-request table, teammates list, and the find-teammates table
//! with its selection-gated invite button.

use leptos::*;

use crate::api::{MatchedStudent, Registration, TeamRequest, Teammate};

/// Pending team requests with accept/decline actions
#[component]
pub fn TeamRequestsTable(
    #[prop(into)]
    requests: Signal<Vec<TeamRequest>>,
    #[prop(into)]
    on_respond: Callback<(String, bool)>,
) -> impl IntoView {
    view! {
        <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
            <h2 class="text-2xl font-bold text-gray-800 mb-6">"Team Requests"</h2>

            {move || {
                let pending = requests.get();
                if pending.is_empty() {
                    return view! {
                        <div class="text-center py-8">
                            <p class="text-gray-500">"No pending team requests"</p>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead>
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"From"</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"College"</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Event"</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {pending.into_iter().map(|request| {
                                    let accept_id = request.id.clone();
                                    let decline_id = request.id.clone();
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{request.from_user.name.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{request.from_user.college.clone().unwrap_or_default()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{request.event.name.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium space-x-2">
                                                <button
                                                    on:click=move |_| on_respond.call((accept_id.clone(), true))
                                                    class="bg-green-100 text-green-700 hover:bg-green-200 px-3 py-1 rounded-full text-sm font-medium transition-colors"
                                                >
                                                    "Accept"
                                                </button>
                                                <button
                                                    on:click=move |_| on_respond.call((decline_id.clone(), false))
                                                    class="bg-red-100 text-red-700 hover:bg-red-200 px-3 py-1 rounded-full text-sm font-medium transition-colors"
                                                >
                                                    "Decline"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view()
            }}
        </section>
    }
}

/// Current teammates across all events
#[component]
pub fn TeammatesList(
    #[prop(into)]
    teammates: Signal<Vec<Teammate>>,
) -> impl IntoView {
    view! {
        <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
            <h2 class="text-2xl font-bold text-gray-800 mb-6">"Your Teammates"</h2>

            {move || {
                let members = teammates.get();
                if members.is_empty() {
                    return view! {
                        <div class="text-center py-8">
                            <p class="text-gray-500">"You don't have any teammates yet"</p>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="grid gap-4">
                        {members.into_iter().map(|teammate| view! {
                            <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
                                <div>
                                    <h3 class="text-sm font-medium text-gray-900">{teammate.user.name.clone()}</h3>
                                    <p class="text-sm text-gray-500">{teammate.user.college.clone().unwrap_or_default()}</p>
                                </div>
                                <span class="text-sm text-gray-500">{teammate.event.name.clone()}</span>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </section>
    }
}

/// Matching students with the event selector and invite buttons.
///
/// The invite target event is a single-slot selection owned by the dashboard;
/// invite buttons are disabled until an event is selected.
#[component]
pub fn MatchingStudentsTable(
    #[prop(into)]
    students: Signal<Vec<MatchedStudent>>,
    #[prop(into)]
    registered: Signal<Vec<Registration>>,
    selected_event: RwSignal<Option<String>>,
    #[prop(into)]
    on_invite: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">"Find Teammates"</h2>
                <div class="w-64">
                    <select
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            selected_event.set(if value.is_empty() { None } else { Some(value) });
                        }
                        prop:value=move || selected_event.get().unwrap_or_default()
                        class="w-full rounded-lg border-gray-300 shadow-sm focus:border-indigo-500 focus:ring-indigo-500"
                    >
                        <option value="">"Select Event"</option>
                        {move || {
                            registered.get().into_iter().map(|reg| view! {
                                <option value=reg.event.id.clone()>{reg.event.name.clone()}</option>
                            }).collect_view()
                        }}
                    </select>
                </div>
            </div>

            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead>
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Name"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Domain"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Location"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Action"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        {move || {
                            students.get().into_iter().map(|student| {
                                let student_id = student.id.clone();
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{student.name.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-blue-100 text-blue-800">
                                                {student.domain.clone()}
                                            </span>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {format!("{}, {}", student.city, student.state)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                                            <button
                                                on:click=move |_| on_invite.call(student_id.clone())
                                                disabled=move || selected_event.get().is_none()
                                                class="bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-100 disabled:text-gray-400
                                                       text-white px-4 py-2 rounded-lg text-sm font-medium transition-colors"
                                            >
                                                "Send Invite"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
