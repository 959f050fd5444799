use contracts::domain::order::Order;
use leptos::prelude::*;

/// View state of the dashboard
///
/// One tagged union instead of separate loading/error flags, so
/// "loading and failed at the same time" cannot be represented. The only
/// transitions are `Loading -> Ready` and `Loading -> Failed`; there is no
/// retry and no re-fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    /// The one fetch of this component's lifetime is in flight
    Loading,
    /// Fetch or decode failed; the UI shows a single fixed message
    Failed,
    /// Orders received, possibly an empty list
    Ready(Vec<Order>),
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<ViewState> {
    RwSignal::new(ViewState::Loading)
}

/// Decide the next view state from an HTTP response.
///
/// Any non-2xx status is a failure; the body is not inspected for error
/// detail (the backend's error shape is unspecified). A 2xx body must
/// decode as an order array.
pub fn state_from_response(status: u16, body: &str) -> ViewState {
    if !(200..300).contains(&status) {
        log::error!("Orders endpoint returned status {}", status);
        return ViewState::Failed;
    }
    state_from_body(body)
}

/// Decode a successful response body into the next view state.
///
/// Any decode error collapses into `Failed`; the cause is logged but the
/// user-facing message never distinguishes it from a network failure.
pub fn state_from_body(body: &str) -> ViewState {
    match serde_json::from_str::<Vec<Order>>(body) {
        Ok(orders) => ViewState::Ready(orders),
        Err(e) => {
            log::error!("Failed to parse orders response: {}", e);
            ViewState::Failed
        }
    }
}

/// Table row key: order id when non-empty, positional index otherwise.
/// Uniqueness is not guaranteed; the backend may repeat ids.
pub fn row_key(order: &Order, index: usize) -> String {
    if order.shopify_order_id.is_empty() {
        index.to_string()
    } else {
        order.shopify_order_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with_id(id: &str) -> Order {
        serde_json::from_str(&format!(r#"{{"ID Замовлення Shopify": "{}"}}"#, id)).unwrap()
    }

    #[test]
    fn body_with_n_orders_becomes_ready_with_n_rows() {
        let body = r#"[
            {"ID Замовлення Shopify": "1", "Статус Замовлення Shopify": "paid"},
            {"ID Замовлення Shopify": "2", "Статус Замовлення Shopify": "pending"},
            {"ID Замовлення Shopify": "3"}
        ]"#;
        match state_from_body(body) {
            ViewState::Ready(orders) => {
                assert_eq!(orders.len(), 3);
                assert_eq!(orders[0].order_status, "paid");
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_becomes_ready_with_no_rows() {
        assert_eq!(state_from_body("[]"), ViewState::Ready(Vec::new()));
    }

    #[test]
    fn malformed_body_becomes_failed() {
        assert_eq!(state_from_body("not json"), ViewState::Failed);
        // A JSON object is not the expected array either
        assert_eq!(state_from_body(r#"{"error": "boom"}"#), ViewState::Failed);
    }

    #[test]
    fn non_2xx_response_becomes_failed() {
        assert_eq!(state_from_response(404, ""), ViewState::Failed);
        assert_eq!(
            state_from_response(500, r#"{"error": "upstream"}"#),
            ViewState::Failed
        );
        // A well-formed body does not rescue an error status
        assert_eq!(state_from_response(503, "[]"), ViewState::Failed);
    }

    #[test]
    fn ok_response_decodes_body() {
        assert_eq!(state_from_response(200, "[]"), ViewState::Ready(Vec::new()));
        assert_eq!(state_from_response(201, "not json"), ViewState::Failed);
    }

    #[test]
    fn row_key_prefers_order_id() {
        assert_eq!(row_key(&order_with_id("5551234567890"), 7), "5551234567890");
    }

    #[test]
    fn row_key_falls_back_to_index() {
        assert_eq!(row_key(&order_with_id(""), 7), "7");
    }
}
