use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub description: Option<String>,
}

/// Request body for item create/update. Both fields of the required pair are
/// optional at the serde level so a missing field surfaces as a 400, not a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemPayload {
    /// Presence checks plus normalization: trimmed-empty description becomes
    /// NULL, name must be non-blank, quantity must be present and non-negative.
    pub fn validate(self) -> AppResult<(String, i32, Option<String>)> {
        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(AppError::InvalidInput("name is required".to_string())),
        };

        let quantity = self
            .quantity
            .ok_or_else(|| AppError::InvalidInput("quantity is required".to_string()))?;
        if quantity < 0 {
            return Err(AppError::InvalidInput(
                "quantity must be non-negative".to_string(),
            ));
        }

        let description = self
            .description
            .filter(|d| !d.trim().is_empty());

        Ok((name, quantity, description))
    }
}
