use crate::core::PromotionRepository;
use crate::domain::model::Promotion;
use crate::utils::error::{PromoError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory promotion store guarded by a single readers-writer lock.
#[derive(Debug, Default)]
pub struct PromotionStore {
    promotions: RwLock<HashMap<String, Promotion>>,
}

impl PromotionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(promotions: HashMap<String, Promotion>) -> Self {
        Self {
            promotions: RwLock::new(promotions),
        }
    }
}

impl PromotionRepository for PromotionStore {
    /// Insert or overwrite `id`.
    fn add(&self, id: String, promotion: Promotion) -> Result<()> {
        let mut promotions = self
            .promotions
            .write()
            .map_err(|_| PromoError::LockPoisoned)?;
        promotions.insert(id, promotion);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Promotion> {
        let promotions = self
            .promotions
            .read()
            .map_err(|_| PromoError::LockPoisoned)?;
        promotions
            .get(id)
            .cloned()
            .ok_or_else(|| PromoError::NotFoundError { id: id.to_string() })
    }

    fn len(&self) -> Result<usize> {
        let promotions = self
            .promotions
            .read()
            .map_err(|_| PromoError::LockPoisoned)?;
        Ok(promotions.len())
    }
}
