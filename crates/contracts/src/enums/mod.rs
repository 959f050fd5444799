pub mod fulfillment_status;
pub mod order_status;

pub use fulfillment_status::FulfillmentStatus;
pub use order_status::OrderStatus;
