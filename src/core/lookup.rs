use crate::core::PromotionRepository;
use crate::domain::model::Promotion;
use crate::utils::error::{PromoError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Accepted shape of the identifier in a lookup request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum IdFormat {
    /// Must parse as a signed 64-bit integer; looked up by its canonical
    /// decimal form, so `007` and `7` hit the same record.
    #[default]
    Numeric,
    /// Used verbatim as the key.
    Opaque,
}

impl IdFormat {
    pub fn canonicalize(&self, raw: &str) -> Result<String> {
        match self {
            IdFormat::Numeric => raw
                .parse::<i64>()
                .map(|id| id.to_string())
                .map_err(|_| PromoError::InvalidIdError {
                    raw: raw.to_string(),
                }),
            IdFormat::Opaque if raw.is_empty() => Err(PromoError::InvalidIdError {
                raw: raw.to_string(),
            }),
            IdFormat::Opaque => Ok(raw.to_string()),
        }
    }
}

/// Resolves raw request identifiers against the promotion repository.
#[derive(Clone)]
pub struct LookupService {
    repository: Arc<dyn PromotionRepository>,
    id_format: IdFormat,
}

impl LookupService {
    pub fn new(repository: Arc<dyn PromotionRepository>, id_format: IdFormat) -> Self {
        Self {
            repository,
            id_format,
        }
    }

    pub fn find(&self, raw_id: &str) -> Result<Promotion> {
        let id = self.id_format.canonicalize(raw_id)?;
        self.repository.get(&id)
    }

    pub fn id_format(&self) -> IdFormat {
        self.id_format
    }

    pub fn repository(&self) -> &dyn PromotionRepository {
        self.repository.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::PromotionStore;

    fn service(id_format: IdFormat) -> LookupService {
        let store = PromotionStore::new();
        store
            .add("7".to_string(), Promotion::new("7", "7.77", "2025-07-07"))
            .unwrap();
        store
            .add("summer".to_string(), Promotion::new("summer", "5.00", "2025-08-31"))
            .unwrap();
        LookupService::new(Arc::new(store), id_format)
    }

    #[test]
    fn test_numeric_canonicalization() {
        let format = IdFormat::Numeric;
        assert_eq!(format.canonicalize("7").unwrap(), "7");
        assert_eq!(format.canonicalize("007").unwrap(), "7");
        assert_eq!(format.canonicalize("+7").unwrap(), "7");
        assert_eq!(format.canonicalize("-0").unwrap(), "0");
        assert_eq!(format.canonicalize("-12").unwrap(), "-12");
    }

    #[test]
    fn test_numeric_rejects_non_integers() {
        let format = IdFormat::Numeric;
        for raw in ["", "abc", "7a", "1.5", " 7", "99999999999999999999"] {
            assert!(
                matches!(format.canonicalize(raw), Err(PromoError::InvalidIdError { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_opaque_keeps_raw_id() {
        let format = IdFormat::Opaque;
        assert_eq!(format.canonicalize("007").unwrap(), "007");
        assert!(format.canonicalize("").is_err());
    }

    #[test]
    fn test_find_equivalent_numeric_spellings() {
        let service = service(IdFormat::Numeric);
        assert_eq!(service.find("007").unwrap(), service.find("7").unwrap());
    }

    #[test]
    fn test_find_non_numeric_id_unreachable_in_numeric_mode() {
        let service = service(IdFormat::Numeric);
        assert!(matches!(
            service.find("summer"),
            Err(PromoError::InvalidIdError { .. })
        ));
    }

    #[test]
    fn test_find_opaque_mode() {
        let service = service(IdFormat::Opaque);
        assert_eq!(service.find("summer").unwrap().price, "5.00");
        assert!(matches!(
            service.find("007"),
            Err(PromoError::NotFoundError { .. })
        ));
    }

    #[test]
    fn test_find_missing() {
        let service = service(IdFormat::Numeric);
        let err = service.find("0042").unwrap_err();
        assert_eq!(err.to_string(), "Promotion with ID 42 not found");
    }
}
