use common::DashboardCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardShellProps {
    pub card: DashboardCard,
    pub children: Children,
}

/// White card frame with the card's icon and title as heading.
#[function_component(CardShell)]
pub fn card_shell(props: &CardShellProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow border border-gray-200">
            <h2 class="text-lg font-semibold mb-4 text-gray-800">
                {format!("{} {}", props.card.emoji(), props.card.title())}
            </h2>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <p class="text-sm text-gray-500 text-center py-4">{props.message.clone()}</p>
    }
}
