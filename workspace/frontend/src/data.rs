use std::rc::Rc;

use model::{DashboardData, DashboardSnapshot, MockDataProvider};
use yew::prelude::*;

/// Read-only dashboard data shared with every component below the provider.
pub type DashboardContext = Rc<DashboardSnapshot>;

#[derive(Properties, PartialEq)]
pub struct DataProviderProps {
    pub children: Children,
}

/// Takes one snapshot of the fixtures at mount and hands it down the tree.
#[function_component(DataProvider)]
pub fn data_provider(props: &DataProviderProps) -> Html {
    let snapshot = use_memo((), |_| {
        log::debug!("Taking dashboard data snapshot");
        MockDataProvider::new().snapshot()
    });

    html! {
        <ContextProvider<DashboardContext> context={snapshot}>
            {props.children.clone()}
        </ContextProvider<DashboardContext>>
    }
}

/// Dashboard data from the nearest [`DataProvider`], or a fresh snapshot when
/// rendered outside of one.
#[hook]
pub fn use_dashboard_data() -> DashboardContext {
    use_context::<DashboardContext>().unwrap_or_else(|| {
        log::warn!("No DataProvider above this component, using fixtures directly");
        Rc::new(MockDataProvider::new().snapshot())
    })
}
