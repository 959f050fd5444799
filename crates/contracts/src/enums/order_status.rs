use serde::{Deserialize, Serialize};

/// Payment status of an order (Shopify `financial_status`)
///
/// The backend forwards the raw status string; anything outside the two
/// values the dashboard distinguishes collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Paid,
    Pending,
    Other,
}

impl OrderStatus {
    /// Parse the wire status string. Total: unknown values map to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "paid" => OrderStatus::Paid,
            "pending" => OrderStatus::Pending,
            _ => OrderStatus::Other,
        }
    }

    /// Badge variant for the status badge
    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "success",
            OrderStatus::Pending => "warning",
            OrderStatus::Other => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        assert_eq!(OrderStatus::from_label("paid"), OrderStatus::Paid);
        assert_eq!(OrderStatus::from_label("pending"), OrderStatus::Pending);
    }

    #[test]
    fn unknown_labels_are_other() {
        assert_eq!(OrderStatus::from_label("refunded"), OrderStatus::Other);
        assert_eq!(OrderStatus::from_label(""), OrderStatus::Other);
        // Matching is exact, not case-folded
        assert_eq!(OrderStatus::from_label("Paid"), OrderStatus::Other);
    }

    #[test]
    fn badge_variants() {
        assert_eq!(OrderStatus::Paid.badge_variant(), "success");
        assert_eq!(OrderStatus::Pending.badge_variant(), "warning");
        assert_eq!(OrderStatus::Other.badge_variant(), "neutral");
    }
}
