//! The monthly budget: income and expense entries, totals and percentages.

mod aggregate;
mod create;
mod delete;
mod domain;
mod page;

pub use aggregate::{Budget, BudgetSummary};
pub use create::create_budget_item_endpoint;
pub use delete::delete_budget_item_endpoint;
pub use domain::{BudgetItem, BudgetItemFormData, BudgetItemId, ItemDescription, ItemKind, ItemValue};
pub use page::get_budget_page;
