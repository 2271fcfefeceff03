//! Core budget domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether a budget item is money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Income,
    Expense,
}

impl ItemKind {
    /// The short code used in forms and URLs.
    pub fn code(self) -> &'static str {
        match self {
            ItemKind::Income => "inc",
            ItemKind::Expense => "exp",
        }
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inc" | "income" => Ok(ItemKind::Income),
            "exp" | "expense" => Ok(ItemKind::Expense),
            other => Err(Error::InvalidItemKind(other.to_owned())),
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validated, non-empty budget item description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ItemDescription(String);

impl ItemDescription {
    /// Create an item description.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyDescription] if `description`
    /// is empty or only whitespace.
    pub fn new(description: &str) -> Result<Self, Error> {
        let description = description.trim();

        if description.is_empty() {
            Err(Error::EmptyDescription)
        } else {
            Ok(Self(description.to_owned()))
        }
    }
}

impl AsRef<str> for ItemDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ItemDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated budget item value, always finite and greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemValue(f64);

impl ItemValue {
    /// Create an item value.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `value` is not a
    /// finite number greater than zero.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAmount(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Identifier for a budget item, unique within its kind for the lifetime of a
/// [crate::budget::Budget].
pub type BudgetItemId = u64;

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: BudgetItemId,
    pub kind: ItemKind,
    pub description: ItemDescription,
    pub value: f64,
    /// The share of total income this expense accounts for.
    ///
    /// Always `None` for income items, and `None` for expenses while there is
    /// no income.
    pub percentage: Option<i64>,
}

impl BudgetItem {
    pub(super) fn calculate_percentage(&mut self, total_income: f64) {
        self.percentage = match self.kind {
            ItemKind::Expense if total_income > 0.0 => {
                Some((self.value / total_income * 100.0).round() as i64)
            }
            _ => None,
        };
    }
}

/// Form data for adding a budget item.
#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetItemFormData {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub value: f64,
}
