//! Event Card Component
//!
//! Flip card for an open event: the front shows name, host, and deadline
//! with a register button; the back shows the description. The expand/flip
//! slot is owned by the dashboard so only one card is ever expanded.

use leptos::*;

use crate::api::Event;
use crate::components::format_date;
use crate::state::workflow::EventCardState;

/// Flip card for a single event
#[component]
pub fn EventCard(
    event: Event,
    cards: RwSignal<EventCardState>,
) -> impl IntoView {
    let flip_id = event.id.clone();
    let flip_id_back = event.id.clone();
    let form_id = event.id.clone();
    let expanded_id = event.id.clone();

    let is_expanded = create_memo(move |_| cards.get().is_expanded(&expanded_id));

    let description = event
        .description
        .clone()
        .unwrap_or_else(|| "No description available".to_string());

    view! {
        <div class="relative group perspective">
            <div class=move || {
                let base = "relative h-[300px] w-full transition-all duration-700 transform-gpu preserve-3d";
                if is_expanded.get() {
                    format!("{} rotate-y-180", base)
                } else {
                    base.to_string()
                }
            }>
                // Front face
                <div
                    class="absolute w-full h-full backface-hidden bg-white rounded-xl shadow-lg p-6
                           flex flex-col justify-between cursor-pointer border border-gray-100"
                    on:click=move |_| cards.update(|c| c.toggle(&flip_id))
                >
                    <div class="space-y-4">
                        <div class="flex justify-between items-start">
                            <h3 class="text-xl font-bold text-gray-800">{event.name.clone()}</h3>
                            <span class="bg-blue-100 text-blue-800 text-xs font-semibold px-2.5 py-0.5 rounded-full">
                                "New"
                            </span>
                        </div>
                        <p class="text-sm text-gray-600">"Host: "{event.host.clone()}</p>
                        <p class="text-sm text-gray-500">{format_date(&event.deadline)}</p>
                    </div>
                    <button
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cards.update(|c| c.open_form(&form_id));
                        }
                        class="w-full bg-indigo-600 text-white py-2 px-4 rounded-lg hover:bg-indigo-700
                               transition-colors focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    >
                        "Register Now"
                    </button>
                </div>

                // Back face
                <div
                    class="absolute w-full h-full backface-hidden rotate-y-180 bg-white rounded-xl
                           shadow-lg p-6 cursor-pointer border border-gray-100"
                    on:click=move |_| cards.update(|c| c.toggle(&flip_id_back))
                >
                    <div class="h-full flex flex-col">
                        <h3 class="text-xl font-bold text-gray-800 mb-4">"Event Details"</h3>
                        <div class="flex-grow overflow-auto">
                            <p class="text-gray-600">{description}</p>
                            {event.team_size.map(|size| view! {
                                <p class="text-sm text-gray-500 mt-2">{format!("Team size: up to {}", size)}</p>
                            })}
                            {event.contact_person.clone().map(|contact| view! {
                                <p class="text-sm text-gray-500 mt-1">"Contact: "{contact}</p>
                            })}
                        </div>
                        <span class="mt-4 text-indigo-600 text-sm font-medium">
                            "← Back to Event"
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
