pub mod state;

use crate::shared::api_utils::api_url;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use contracts::domain::order::Order;
use contracts::enums::{FulfillmentStatus, OrderStatus};
use gloo_net::http::Request;
use leptos::prelude::*;
use log::{error, info};
use state::{create_state, row_key, state_from_response, ViewState};

/// Fixed user-facing message for any fetch or decode failure. The cause
/// goes to the console log only.
const LOAD_ERROR_MESSAGE: &str =
    "Failed to load order data. Check that the backend and proxy are running.";

#[component]
pub fn OrderDashboard() -> impl IntoView {
    let state = create_state();

    let load_orders = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match Request::get(&api_url("/orders")).send().await {
                Ok(response) => {
                    let status = response.status();
                    match response.text().await {
                        Ok(text) => {
                            let next = state_from_response(status, &text);
                            if let ViewState::Ready(ref orders) = next {
                                info!("Loaded {} orders", orders.len());
                            }
                            state.set(next);
                        }
                        Err(e) => {
                            error!("Failed to read orders response: {:?}", e);
                            state.set(ViewState::Failed);
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to fetch orders: {:?}", e);
                    state.set(ViewState::Failed);
                }
            }
        });
    };

    // One fetch per component lifetime: no retry, no re-fetch trigger
    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            load_orders();
        }
    });

    view! {
        <div class="order-dashboard">
            {move || match state.get() {
                ViewState::Loading => {
                    view! {
                        <div class="center-screen">
                            <div class="loading-indicator">"Loading orders..."</div>
                        </div>
                    }
                        .into_any()
                }
                ViewState::Failed => {
                    view! {
                        <div class="center-screen center-screen--error">
                            <div class="error-message">{LOAD_ERROR_MESSAGE}</div>
                        </div>
                    }
                        .into_any()
                }
                ViewState::Ready(orders) => {
                    let is_empty = orders.is_empty();
                    view! {
                        <div class="dashboard-page">
                            <h1 class="dashboard-title">"Shopify Order Dashboard"</h1>
                            <div class="table-container">
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Order ID"</th>
                                            <th>"Number"</th>
                                            <th>"Date"</th>
                                            <th>"Payment status"</th>
                                            <th>"Customer"</th>
                                            <th>"Email"</th>
                                            <th>"Phone"</th>
                                            <th>"Total"</th>
                                            <th>"Items"</th>
                                            <th>"Qty"</th>
                                            <th>"Fulfillment"</th>
                                            <th>"Items cost"</th>
                                            <th>"Shipping"</th>
                                            <th>"Admin link"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || {
                                                orders.clone().into_iter().enumerate().collect::<Vec<_>>()
                                            }
                                            key=|(index, order)| row_key(order, *index)
                                            children=|(_, order): (usize, Order)| {
                                                let order_date = if order.order_date.is_empty() {
                                                    "—".to_string()
                                                } else {
                                                    format_datetime(&order.order_date)
                                                };
                                                let payment_variant = OrderStatus::from_label(
                                                        &order.order_status,
                                                    )
                                                    .badge_variant()
                                                    .to_string();
                                                let fulfillment_variant = FulfillmentStatus::from_label(
                                                        &order.fulfillment_status,
                                                    )
                                                    .badge_variant()
                                                    .to_string();
                                                let total = format!(
                                                    "{:.2} {}",
                                                    order.total_amount,
                                                    order.currency,
                                                );
                                                let items_cost = format!("{:.2}", order.items_cost);
                                                let shipping_cost = format!("{:.2}", order.shipping_cost);
                                                view! {
                                                    <tr>
                                                        <td class="cell--nowrap">{order.shopify_order_id}</td>
                                                        <td>{order.order_number}</td>
                                                        <td class="cell--nowrap">{order_date}</td>
                                                        <td>
                                                            <Badge variant=payment_variant>{order.order_status}</Badge>
                                                        </td>
                                                        <td>{order.customer_name}</td>
                                                        <td>{order.customer_email}</td>
                                                        <td>{order.customer_phone}</td>
                                                        <td class="cell--money">{total}</td>
                                                        <td>{order.line_item_titles}</td>
                                                        <td>{order.line_item_quantities}</td>
                                                        <td>
                                                            <Badge variant=fulfillment_variant>
                                                                {order.fulfillment_status}
                                                            </Badge>
                                                        </td>
                                                        <td class="cell--money">{items_cost}</td>
                                                        <td class="cell--money">{shipping_cost}</td>
                                                        <td>
                                                            <a
                                                                href=order.admin_url
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                            >
                                                                "Open"
                                                            </a>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                            {is_empty
                                .then(|| {
                                    view! {
                                        <div class="empty-notice">"No orders to display."</div>
                                    }
                                })}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
