//! The monthly budget: income and expense lists with their derived totals.

use crate::budget::domain::{BudgetItem, BudgetItemId, ItemDescription, ItemKind, ItemValue};

/// The derived figures shown at the top of the budget page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expense: f64,
    /// Income minus expenses.
    pub budget: f64,
    /// Expenses as a share of income, `None` while there is no income.
    pub percentage: Option<i64>,
}

/// A month's income and expenses.
///
/// Totals and percentages are derived data. They are only brought up to date
/// by [Budget::recalculate] and [Budget::recalculate_percentages].
#[derive(Debug, Default)]
pub struct Budget {
    incomes: Vec<BudgetItem>,
    expenses: Vec<BudgetItem>,
    total_income: f64,
    total_expense: f64,
    budget: f64,
    percentage: Option<i64>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item of `kind`.
    ///
    /// The new item's ID is one greater than the ID of the last item of the
    /// same kind, or zero for the first item.
    pub fn add_item(
        &mut self,
        kind: ItemKind,
        description: ItemDescription,
        value: ItemValue,
    ) -> BudgetItem {
        let items = self.items_mut(kind);
        let id = items.last().map_or(0, |item| item.id + 1);

        let item = BudgetItem {
            id,
            kind,
            description,
            value: value.get(),
            percentage: None,
        };
        items.push(item.clone());

        item
    }

    /// Remove the item of `kind` with `id`.
    ///
    /// Returns `false` if there is no such item.
    pub fn delete_item(&mut self, kind: ItemKind, id: BudgetItemId) -> bool {
        let items = self.items_mut(kind);

        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Update the totals, the remaining budget and the overall percentage.
    pub fn recalculate(&mut self) {
        self.total_income = self.incomes.iter().map(|item| item.value).sum();
        self.total_expense = self.expenses.iter().map(|item| item.value).sum();
        self.budget = self.total_income - self.total_expense;

        self.percentage = if self.total_income > 0.0 {
            Some((self.total_expense / self.total_income * 100.0).round() as i64)
        } else {
            None
        };
    }

    /// Update each expense's share of the current total income.
    ///
    /// Uses the total income from the last call to [Budget::recalculate].
    pub fn recalculate_percentages(&mut self) {
        let total_income = self.total_income;

        for expense in &mut self.expenses {
            expense.calculate_percentage(total_income);
        }
    }

    /// The percentage of each expense, in list order.
    pub fn percentages(&self) -> Vec<Option<i64>> {
        self.expenses.iter().map(|item| item.percentage).collect()
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            total_income: self.total_income,
            total_expense: self.total_expense,
            budget: self.budget,
            percentage: self.percentage,
        }
    }

    /// The items of `kind` in the order they were added.
    pub fn items(&self, kind: ItemKind) -> &[BudgetItem] {
        match kind {
            ItemKind::Income => &self.incomes,
            ItemKind::Expense => &self.expenses,
        }
    }

    fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<BudgetItem> {
        match kind {
            ItemKind::Income => &mut self.incomes,
            ItemKind::Expense => &mut self.expenses,
        }
    }
}
