use serde::{Deserialize, Serialize};

/// Order DTO as returned by the `/api/orders` endpoint.
///
/// The backend labels every field with a Ukrainian display string; those
/// labels are the wire contract, so each field carries a `rename`. The
/// snapshot is read-only (nothing here is ever sent back), and sparse
/// objects are expected: customer fields are often empty upstream, so every
/// field defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Shopify order id; keys the table row when non-empty
    #[serde(rename = "ID Замовлення Shopify", default)]
    pub shopify_order_id: String,
    #[serde(rename = "Номер Замовлення", default)]
    pub order_number: String,
    /// ISO 8601 datetime from Shopify `created_at`
    #[serde(rename = "Дата Замовлення", default)]
    pub order_date: String,
    /// Payment status (Shopify `financial_status`: "paid", "pending", ...)
    #[serde(rename = "Статус Замовлення Shopify", default)]
    pub order_status: String,
    #[serde(rename = "Ім'я Клієнта", default)]
    pub customer_name: String,
    #[serde(rename = "Email Клієнта", default)]
    pub customer_email: String,
    #[serde(rename = "Телефон Клієнта", default)]
    pub customer_phone: String,
    #[serde(rename = "Загальна Сума", default)]
    pub total_amount: f64,
    #[serde(rename = "Валюта", default)]
    pub currency: String,
    /// Line item titles, "; "-joined by the backend
    #[serde(rename = "Товари Замовлення (Назва)", default)]
    pub line_item_titles: String,
    /// Line item quantities, "; "-joined, same order as the titles
    #[serde(rename = "Товари Замовлення (Кількість)", default)]
    pub line_item_quantities: String,
    /// Internal production-tracking stage, distinct from `order_status`
    #[serde(rename = "Статус Виготовлення", default)]
    pub fulfillment_status: String,
    #[serde(rename = "Вартість Товарів", default)]
    pub items_cost: f64,
    #[serde(rename = "Вартість Доставки", default)]
    pub shipping_cost: f64,
    /// Link into the Shopify admin panel
    #[serde(rename = "URL Замовлення Shopify", default)]
    pub admin_url: String,
}
