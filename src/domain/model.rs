use serde::{Deserialize, Serialize};

/// A discount record. `price` and `expiration_date` are carried as-is and
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub price: String,
    pub expiration_date: String,
}

impl Promotion {
    pub fn new(
        id: impl Into<String>,
        price: impl Into<String>,
        expiration_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            price: price.into(),
            expiration_date: expiration_date.into(),
        }
    }
}

/// A dataset row that the loader dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub line: u64,
    pub fields: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_serializes_with_fixed_field_names() {
        let promotion = Promotion::new("1", "9.99", "2025-01-01");
        let value = serde_json::to_value(&promotion).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"id": "1", "price": "9.99", "expiration_date": "2025-01-01"})
        );
    }
}
