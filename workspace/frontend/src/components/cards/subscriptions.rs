use common::finance::monthly_subscription_total;
use common::{format_currency, DashboardCard};
use model::Subscription;
use rust_decimal::Decimal;
use yew::prelude::*;

use super::shell::{CardShell, EmptyState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub subscriptions: Vec<Subscription>,
}

#[function_component(SubscriptionCard)]
pub fn subscription_card(props: &Props) -> Html {
    let monthly = monthly_subscription_total(&props.subscriptions);
    let yearly = monthly * Decimal::from(12);

    html! {
        <CardShell card={DashboardCard::Subscriptions}>
            if props.subscriptions.is_empty() {
                <EmptyState message="No active subscriptions." />
            } else {
                <ul class="space-y-3">
                    {for props.subscriptions.iter().map(|subscription| html! {
                        <li key={subscription.id} class="flex justify-between items-center border-b pb-2 last:border-none">
                            <div>
                                <p class="font-medium text-gray-800">{&subscription.name}</p>
                                <p class="text-sm text-gray-500">
                                    {format!("Renews {}", subscription.renews_on.format("%b %d"))}
                                </p>
                            </div>
                            <span class="text-lg font-semibold text-gray-800">
                                {format!("{}/mo", format_currency(subscription.monthly_cost))}
                            </span>
                        </li>
                    })}
                </ul>
                <div class="mt-4 pt-3 border-t text-sm text-gray-600 flex justify-between">
                    <span>{format!("{} per month", format_currency(monthly))}</span>
                    <span>{format!("{} per year", format_currency(yearly))}</span>
                </div>
            }
        </CardShell>
    }
}
