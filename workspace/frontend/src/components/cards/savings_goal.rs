use common::finance::{goal_progress, goal_remaining};
use common::{format_currency, DashboardCard};
use model::SavingsGoal;
use rust_decimal::Decimal;
use yew::prelude::*;

use super::shell::{CardShell, EmptyState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub goals: Vec<SavingsGoal>,
}

#[function_component(SavingsGoalCard)]
pub fn savings_goal_card(props: &Props) -> Html {
    html! {
        <CardShell card={DashboardCard::SavingsGoal}>
            if props.goals.is_empty() {
                <EmptyState message="Set a goal to start saving." />
            } else {
                <div class="space-y-5">
                    {for props.goals.iter().map(goal_row)}
                </div>
            }
        </CardShell>
    }
}

fn goal_row(goal: &SavingsGoal) -> Html {
    let progress = goal_progress(goal);
    let remaining = goal_remaining(goal);
    let reached = progress >= Decimal::ONE_HUNDRED;

    html! {
        <div key={goal.id}>
            <div class="flex justify-between mb-1 text-gray-800">
                <span class="font-medium">{&goal.name}</span>
                <span class="text-sm">
                    {format!("{} / {}", format_currency(goal.saved), format_currency(goal.target))}
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-3 overflow-hidden">
                <div
                    class={if reached { "bg-green-500 h-3 rounded-full transition-all" } else { "bg-blue-600 h-3 rounded-full transition-all" }}
                    style={format!("width: {}%", progress)}
                ></div>
            </div>
            <div class="flex justify-between mt-1 text-xs text-gray-500">
                <span>{format!("{}%", progress)}</span>
                <span>
                    if reached {
                        {"Goal reached 🎉"}
                    } else {
                        {format!("{} to go by {}", format_currency(remaining), goal.deadline.format("%b %d, %Y"))}
                    }
                </span>
            </div>
        </div>
    }
}
