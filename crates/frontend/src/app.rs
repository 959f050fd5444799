use crate::domain::orders::ui::list::OrderDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <OrderDashboard />
    }
}
