use chrono::NaiveDate;
use common::finance::{bills_total, due_label};
use common::{format_currency, DashboardCard};
use model::Bill;
use yew::prelude::*;

use super::shell::{CardShell, EmptyState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub bills: Vec<Bill>,
    pub today: NaiveDate,
}

#[function_component(UpcomingBills)]
pub fn upcoming_bills(props: &Props) -> Html {
    let total = bills_total(&props.bills);

    html! {
        <CardShell card={DashboardCard::UpcomingBills}>
            if props.bills.is_empty() {
                <EmptyState message="Nothing due. Enjoy it." />
            } else {
                <ul class="space-y-3">
                    {for props.bills.iter().map(|bill| bill_row(bill, props.today))}
                </ul>
                <div class="flex justify-between mt-4 pt-3 border-t text-gray-800">
                    <span class="font-medium">{"Total due"}</span>
                    <span class="font-semibold">{format_currency(total)}</span>
                </div>
            }
        </CardShell>
    }
}

fn bill_row(bill: &Bill, today: NaiveDate) -> Html {
    let overdue = bill.due_date < today;

    html! {
        <li key={bill.id} class="flex justify-between items-center border-b pb-2 last:border-none">
            <div>
                <p class="font-medium text-gray-800">
                    {&bill.name}
                    if bill.autopay {
                        <span class="ml-2 text-xs px-2 py-0.5 rounded-full bg-blue-100 text-blue-700">{"Autopay"}</span>
                    }
                </p>
                <p class={classes!("text-sm", if overdue { "text-red-600" } else { "text-gray-500" })}>
                    {format!("{} · {}", bill.due_date.format("%b %d"), due_label(bill.due_date, today))}
                </p>
            </div>
            <span class="text-lg font-semibold text-gray-800">{format_currency(bill.amount)}</span>
        </li>
    }
}
