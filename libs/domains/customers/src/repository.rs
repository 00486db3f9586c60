use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{CustomerError, CustomerResult};
use crate::models::Customer;

/// Repository trait for Customer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a customer and return the storage-assigned id
    async fn create(&self, customer: Customer) -> CustomerResult<i64>;

    async fn list(&self) -> CustomerResult<Vec<Customer>>;

    async fn get(&self, id: i64) -> CustomerResult<Customer>;

    async fn update(&self, customer: Customer) -> CustomerResult<()>;

    async fn delete(&self, id: i64) -> CustomerResult<()>;
}

/// In-memory implementation of CustomerRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, mut customer: Customer) -> CustomerResult<i64> {
        let mut customers = self.customers.write().await;
        customer.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = customer.id;
        customers.push(customer);

        tracing::info!(customer_id = id, "Created customer");
        Ok(id)
    }

    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn get(&self, id: i64) -> CustomerResult<Customer> {
        let customers = self.customers.read().await;
        customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CustomerError::NotFound(id))
    }

    async fn update(&self, customer: Customer) -> CustomerResult<()> {
        let mut customers = self.customers.write().await;
        let slot = customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or(CustomerError::NotFound(customer.id))?;
        *slot = customer;
        Ok(())
    }

    async fn delete(&self, id: i64) -> CustomerResult<()> {
        let mut customers = self.customers.write().await;
        let before = customers.len();
        customers.retain(|c| c.id != id);

        if customers.len() == before {
            return Err(CustomerError::NotFound(id));
        }
        tracing::info!(customer_id = id, "Deleted customer");
        Ok(())
    }
}
