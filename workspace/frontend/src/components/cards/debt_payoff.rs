use common::finance::{debt_payoff_months, total_debt};
use common::{format_currency, DashboardCard};
use model::Debt;
use yew::prelude::*;

use super::shell::{CardShell, EmptyState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub debts: Vec<Debt>,
}

#[function_component(DebtPayoffTool)]
pub fn debt_payoff_tool(props: &Props) -> Html {
    html! {
        <CardShell card={DashboardCard::DebtPayoff}>
            if props.debts.is_empty() {
                <EmptyState message="Debt free!" />
            } else {
                <div class="mb-4">
                    <p class="text-sm text-gray-500">{"Total owed"}</p>
                    <p class="text-2xl font-bold text-gray-800">{format_currency(total_debt(&props.debts))}</p>
                </div>
                <ul class="space-y-3">
                    {for props.debts.iter().map(debt_row)}
                </ul>
            }
        </CardShell>
    }
}

fn debt_row(debt: &Debt) -> Html {
    let estimate = match debt_payoff_months(debt) {
        Some(0) => html! { <span class="text-green-600">{"Paid off"}</span> },
        Some(months) => html! {
            <span class="text-gray-600">
                {format!("Paid off in {} months ({:.1} years) at the minimum", months, f64::from(months) / 12.0)}
            </span>
        },
        None => html! {
            <span class="text-red-600">{"Minimum payment does not cover the interest"}</span>
        },
    };

    html! {
        <li key={debt.id} class="border-b pb-2 last:border-none">
            <div class="flex justify-between items-center">
                <p class="font-medium text-gray-800">{&debt.lender}</p>
                <span class="text-lg font-semibold text-gray-800">{format_currency(debt.balance)}</span>
            </div>
            <p class="text-sm text-gray-500">
                {format!("{}% APR · {} minimum", debt.apr, format_currency(debt.minimum_payment))}
            </p>
            <p class="text-sm">{estimate}</p>
        </li>
    }
}
