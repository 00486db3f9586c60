use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{Customer, UpdateCustomer};
use crate::repository::CustomerRepository;
use crate::suggest::Suggester;

/// Service layer for Customer operations
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
    suggester: Option<Arc<dyn Suggester>>,
}

impl<R: CustomerRepository> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            suggester: self.suggester.clone(),
        }
    }
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            suggester: None,
        }
    }

    /// Enable `suggest_names` with the given engine.
    pub fn with_suggester(mut self, suggester: Arc<dyn Suggester>) -> Self {
        self.suggester = Some(suggester);
        self
    }

    #[instrument(skip(self, customer), fields(customer_name = %customer.name))]
    pub async fn create_customer(&self, customer: Customer) -> CustomerResult<i64> {
        customer
            .validate()
            .map_err(|e| CustomerError::Validation(e.to_string()))?;

        self.repository.create(customer).await
    }

    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> CustomerResult<Vec<Customer>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: i64) -> CustomerResult<Customer> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_customer(&self, id: i64, input: UpdateCustomer) -> CustomerResult<()> {
        input
            .validate()
            .map_err(|e| CustomerError::Validation(e.to_string()))?;

        let mut customer = self.repository.get(id).await?;
        customer.apply_update(input);
        self.repository.update(customer).await
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: i64) -> CustomerResult<()> {
        self.repository.delete(id).await
    }

    /// Customer names similar to `query`. Empty when no suggester is configured.
    #[instrument(skip(self))]
    pub async fn suggest_names(&self, query: &str) -> CustomerResult<Vec<String>> {
        let Some(suggester) = &self.suggester else {
            tracing::debug!("No suggester configured");
            return Ok(Vec::new());
        };

        let suggestions = suggester.suggest(query).await?;
        Ok(suggestions.into_iter().map(|s| s.text).collect())
    }
}
