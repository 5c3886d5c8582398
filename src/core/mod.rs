pub mod loader;
pub mod lookup;
pub mod store;

pub use crate::domain::model::{Promotion, RowDiagnostic};
pub use crate::domain::ports::PromotionRepository;
pub use crate::utils::error::Result;
