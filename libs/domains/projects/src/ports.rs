//! The child operations a project needs: create and delete for the saga, get for
//! enrichment. Implemented here for each child service.

use async_trait::async_trait;
use domain_customers::{Customer, CustomerRepository, CustomerResult, CustomerService};
use domain_fields::{Field, FieldRepository, FieldResult, FieldService};
use domain_investors::{Investor, InvestorRepository, InvestorResult, InvestorService};
use domain_managers::{Manager, ManagerRepository, ManagerResult, ManagerService};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerPort: Send + Sync {
    async fn create_customer(&self, customer: Customer) -> CustomerResult<i64>;
    async fn get_customer(&self, id: i64) -> CustomerResult<Customer>;
    async fn delete_customer(&self, id: i64) -> CustomerResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ManagerPort: Send + Sync {
    async fn create_manager(&self, manager: Manager) -> ManagerResult<i64>;
    async fn get_manager(&self, id: i64) -> ManagerResult<Manager>;
    async fn delete_manager(&self, id: i64) -> ManagerResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvestorPort: Send + Sync {
    async fn create_investor(&self, investor: Investor) -> InvestorResult<i64>;
    async fn get_investor(&self, id: i64) -> InvestorResult<Investor>;
    async fn delete_investor(&self, id: i64) -> InvestorResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FieldPort: Send + Sync {
    /// Creates the field together with its nested lots.
    async fn create_field(&self, field: Field) -> FieldResult<i64>;
    /// The field with its lots attached.
    async fn get_field(&self, id: i64) -> FieldResult<Field>;
    async fn delete_field(&self, id: i64) -> FieldResult<()>;
}

#[async_trait]
impl<R: CustomerRepository + 'static> CustomerPort for CustomerService<R> {
    async fn create_customer(&self, customer: Customer) -> CustomerResult<i64> {
        CustomerService::create_customer(self, customer).await
    }

    async fn get_customer(&self, id: i64) -> CustomerResult<Customer> {
        CustomerService::get_customer(self, id).await
    }

    async fn delete_customer(&self, id: i64) -> CustomerResult<()> {
        CustomerService::delete_customer(self, id).await
    }
}

#[async_trait]
impl<R: ManagerRepository + 'static> ManagerPort for ManagerService<R> {
    async fn create_manager(&self, manager: Manager) -> ManagerResult<i64> {
        ManagerService::create_manager(self, manager).await
    }

    async fn get_manager(&self, id: i64) -> ManagerResult<Manager> {
        ManagerService::get_manager(self, id).await
    }

    async fn delete_manager(&self, id: i64) -> ManagerResult<()> {
        ManagerService::delete_manager(self, id).await
    }
}

#[async_trait]
impl<R: InvestorRepository + 'static> InvestorPort for InvestorService<R> {
    async fn create_investor(&self, investor: Investor) -> InvestorResult<i64> {
        InvestorService::create_investor(self, investor).await
    }

    async fn get_investor(&self, id: i64) -> InvestorResult<Investor> {
        InvestorService::get_investor(self, id).await
    }

    async fn delete_investor(&self, id: i64) -> InvestorResult<()> {
        InvestorService::delete_investor(self, id).await
    }
}

#[async_trait]
impl<R: FieldRepository + 'static> FieldPort for FieldService<R> {
    async fn create_field(&self, field: Field) -> FieldResult<i64> {
        FieldService::create_field(self, field).await
    }

    async fn get_field(&self, id: i64) -> FieldResult<Field> {
        FieldService::get_field(self, id).await
    }

    async fn delete_field(&self, id: i64) -> FieldResult<()> {
        FieldService::delete_field(self, id).await
    }
}
