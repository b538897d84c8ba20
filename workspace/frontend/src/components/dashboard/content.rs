use chrono::{Local, NaiveDate};
use common::DashboardCard;
use model::DashboardSnapshot;
use yew::prelude::*;

use crate::components::cards::{
    DebtPayoffTool, MedicationCard, RecentTransactionsCard, SavingsGoalCard, SpendingChart,
    SubscriptionCard, UpcomingBills,
};

/// Renders the expanded body of `card` from its slice of the snapshot.
pub fn render_card(card: DashboardCard, data: &DashboardSnapshot) -> Html {
    log::trace!("Rendering card content: {:?}", card);
    let today: NaiveDate = Local::now().date_naive();

    match card {
        DashboardCard::UpcomingBills => html! {
            <UpcomingBills bills={data.bills.clone()} {today} />
        },
        DashboardCard::Subscriptions => html! {
            <SubscriptionCard subscriptions={data.subscriptions.clone()} />
        },
        DashboardCard::Medications => html! {
            <MedicationCard medications={data.medications.clone()} {today} />
        },
        DashboardCard::DebtPayoff => html! {
            <DebtPayoffTool debts={data.debts.clone()} />
        },
        DashboardCard::SavingsGoal => html! {
            <SavingsGoalCard goals={data.savings_goals.clone()} />
        },
        DashboardCard::SpendingTrends => html! {
            <SpendingChart points={data.spending.clone()} />
        },
        DashboardCard::RecentTransactions => html! {
            <RecentTransactionsCard transactions={data.transactions.clone()} />
        },
    }
}
