use serde::{Deserialize, Serialize};

/// Internal production-tracking stage of an order
///
/// Distinct from [`crate::enums::OrderStatus`]: this tracks the workshop
/// pipeline, not payment. The backend sends Ukrainian stage labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentStatus {
    New,
    InProgress,
    Done,
    Other,
}

impl FulfillmentStatus {
    /// Parse the wire stage label. Total: unknown values map to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Нове" => FulfillmentStatus::New,
            "В роботі" => FulfillmentStatus::InProgress,
            "Виконано" => FulfillmentStatus::Done,
            _ => FulfillmentStatus::Other,
        }
    }

    /// Badge variant for the stage badge; a separate palette from the
    /// payment-status badge so the two columns read apart at a glance
    pub fn badge_variant(&self) -> &'static str {
        match self {
            FulfillmentStatus::New => "info",
            FulfillmentStatus::InProgress => "progress",
            FulfillmentStatus::Done => "done",
            FulfillmentStatus::Other => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        assert_eq!(
            FulfillmentStatus::from_label("Нове"),
            FulfillmentStatus::New
        );
        assert_eq!(
            FulfillmentStatus::from_label("В роботі"),
            FulfillmentStatus::InProgress
        );
        assert_eq!(
            FulfillmentStatus::from_label("Виконано"),
            FulfillmentStatus::Done
        );
    }

    #[test]
    fn unknown_labels_are_other() {
        assert_eq!(
            FulfillmentStatus::from_label("Скасовано"),
            FulfillmentStatus::Other
        );
        assert_eq!(FulfillmentStatus::from_label(""), FulfillmentStatus::Other);
    }

    #[test]
    fn badge_variants() {
        assert_eq!(FulfillmentStatus::New.badge_variant(), "info");
        assert_eq!(FulfillmentStatus::InProgress.badge_variant(), "progress");
        assert_eq!(FulfillmentStatus::Done.badge_variant(), "done");
        assert_eq!(FulfillmentStatus::Other.badge_variant(), "neutral");
    }
}
