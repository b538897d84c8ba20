use common::{format_signed, AmountTone, DashboardCard};
use model::Transaction;
use yew::prelude::*;

use super::shell::{CardShell, EmptyState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub transactions: Vec<Transaction>,
}

#[function_component(RecentTransactionsCard)]
pub fn recent_transactions_card(props: &Props) -> Html {
    html! {
        <CardShell card={DashboardCard::RecentTransactions}>
            if props.transactions.is_empty() {
                <EmptyState message="No transactions yet." />
            } else {
                <ul class="space-y-3">
                    {for props.transactions.iter().map(transaction_row)}
                </ul>
            }
        </CardShell>
    }
}

fn transaction_row(transaction: &Transaction) -> Html {
    let tone = AmountTone::of(transaction.amount());

    html! {
        <li key={transaction.id()} class="flex justify-between items-center border-b pb-2 last:border-none">
            <div>
                <p class="font-medium text-gray-800">{transaction.description()}</p>
                <p class="text-sm text-gray-500">{transaction.date().format("%Y-%m-%d").to_string()}</p>
            </div>
            <span class={classes!("text-lg", "font-semibold", tone.text_class())}>
                {format_signed(transaction.amount())}
            </span>
        </li>
    }
}
