use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{InvestorError, InvestorResult};
use crate::models::{Investor, UpdateInvestor};
use crate::repository::InvestorRepository;

/// Service layer for Investor operations
pub struct InvestorService<R: InvestorRepository> {
    repository: Arc<R>,
}

impl<R: InvestorRepository> Clone for InvestorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: InvestorRepository> InvestorService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, investor), fields(investor_name = %investor.name))]
    pub async fn create_investor(&self, investor: Investor) -> InvestorResult<i64> {
        investor
            .validate()
            .map_err(|e| InvestorError::Validation(e.to_string()))?;

        self.repository.create(investor).await
    }

    #[instrument(skip(self))]
    pub async fn list_investors(&self) -> InvestorResult<Vec<Investor>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_investor(&self, id: i64) -> InvestorResult<Investor> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_investor(&self, id: i64, input: UpdateInvestor) -> InvestorResult<()> {
        input
            .validate()
            .map_err(|e| InvestorError::Validation(e.to_string()))?;

        let mut investor = self.repository.get(id).await?;
        investor.apply_update(input);
        self.repository.update(investor).await
    }

    #[instrument(skip(self))]
    pub async fn delete_investor(&self, id: i64) -> InvestorResult<()> {
        self.repository.delete(id).await
    }
}
