use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-8 gap-2 text-center">
            <span class="font-semibold text-red-600">{"Something went wrong"}</span>
            <span class="text-sm text-gray-500">{&props.message}</span>
        </div>
    }
}
