//! Feedback Components
//!
//! Mentor feedback list with per-item reply drafts keyed by feedback id.
//! Answered items (those carrying a student reply) render the reply instead
//! of the textarea.

use leptos::*;
use std::collections::HashMap;

use crate::api::Feedback;
use crate::components::format_date;

/// Mentor feedback list for the student dashboard
#[component]
pub fn FeedbackList(
    #[prop(into)]
    items: Signal<Vec<Feedback>>,
    /// Reply drafts keyed by feedback id, owned by the dashboard.
    drafts: RwSignal<HashMap<String, String>>,
    #[prop(into)]
    on_submit: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="bg-white rounded-2xl shadow-lg p-8 border border-blue-50">
            <h2 class="text-2xl font-bold text-gray-800 mb-6">"Mentor Feedback"</h2>

            <div class="space-y-6">
                {move || {
                    let feedback = items.get();
                    if feedback.is_empty() {
                        return view! {
                            <p class="text-center text-gray-500">"No feedback received yet"</p>
                        }.into_view();
                    }

                    feedback.into_iter().map(|item| {
                        view! { <FeedbackItem item=item drafts=drafts on_submit=on_submit /> }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// Single feedback entry with its reply form or recorded reply
#[component]
fn FeedbackItem(
    item: Feedback,
    drafts: RwSignal<HashMap<String, String>>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let draft_id = item.id.clone();
    let input_id = item.id.clone();
    let submit_id = item.id.clone();

    let draft = create_memo(move |_| drafts.get().get(&draft_id).cloned().unwrap_or_default());

    view! {
        <div class="bg-gray-50 rounded-lg p-6">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <p class="text-gray-800 font-medium">{item.mentor_name.clone()}</p>
                    <p class="text-gray-600 mt-1">{item.feedback.clone()}</p>
                </div>
                <span class="text-sm text-gray-500">{format_date(&item.created_at)}</span>
            </div>

            {match item.student_reply.clone() {
                Some(reply) => view! {
                    <div class="mt-4 bg-white p-4 rounded-lg">
                        <p class="text-sm text-gray-500">"Your response:"</p>
                        <p class="text-gray-800 mt-1">{reply}</p>
                    </div>
                }.into_view(),
                None => view! {
                    <div class="mt-4">
                        <textarea
                            placeholder="Write your response..."
                            rows="3"
                            prop:value=move || draft.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                drafts.update(|d| {
                                    d.insert(input_id.clone(), value);
                                });
                            }
                            class="w-full p-2 border rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                        />
                        <button
                            on:click=move |_| on_submit.call(submit_id.clone())
                            class="mt-2 bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 transition-colors"
                        >
                            "Send Response"
                        </button>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
