use chrono::NaiveDate;
use common::finance::due_label;
use common::DashboardCard;
use model::Medication;
use yew::prelude::*;

use super::shell::{CardShell, EmptyState};

/// Refills closer than this are highlighted.
const REFILL_WARNING_DAYS: i64 = 7;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub medications: Vec<Medication>,
    pub today: NaiveDate,
}

#[function_component(MedicationCard)]
pub fn medication_card(props: &Props) -> Html {
    html! {
        <CardShell card={DashboardCard::Medications}>
            if props.medications.is_empty() {
                <EmptyState message="No medications tracked." />
            } else {
                <ul class="space-y-3">
                    {for props.medications.iter().map(|medication| medication_row(medication, props.today))}
                </ul>
            }
        </CardShell>
    }
}

fn medication_row(medication: &Medication, today: NaiveDate) -> Html {
    let refill_soon = (medication.refill_on - today).num_days() < REFILL_WARNING_DAYS;

    html! {
        <li key={medication.id} class="border-b pb-2 last:border-none">
            <div class="flex justify-between items-center">
                <p class="font-medium text-gray-800">{format!("{} {}", medication.name, medication.dosage)}</p>
                <span class={classes!("text-xs", "px-2", "py-0.5", "rounded-full",
                    if refill_soon { "bg-amber-100 text-amber-700" } else { "bg-gray-100 text-gray-600" })}>
                    {format!("Refill {}", due_label(medication.refill_on, today).to_lowercase())}
                </span>
            </div>
            <p class="text-sm text-gray-500">{&medication.schedule}</p>
        </li>
    }
}
