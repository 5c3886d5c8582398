use crate::domain::model::Promotion;
use crate::utils::error::Result;

/// Keyed access to the loaded promotions.
pub trait PromotionRepository: Send + Sync {
    fn add(&self, id: String, promotion: Promotion) -> Result<()>;
    fn get(&self, id: &str) -> Result<Promotion>;
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
