//! Typed client for the inventory API. The server is the source of truth;
//! the local item list is a render cache reconciled after each successful
//! call, never mutated ahead of the server's answer.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use crate::models::Item;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Local mutable form fields; `quantity` defaults to 1 for new items.
#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub quantity: i32,
    pub description: String,
    pub editing: Option<i64>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            description: String::new(),
            editing: None,
        }
    }
}

pub struct InventoryClient {
    client: Client,
    base_url: String,
    items: Vec<Item>,
    pub form: FormState,
}

impl InventoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            items: Vec::new(),
            form: FormState::default(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replaces the cache from GET /items. On failure the cache is left
    /// untouched and the error is returned for display.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let url = format!("{}/items", self.base_url);
        let response = self.client.get(&url).send().await?;
        let items: Vec<Item> = Self::check(response).await?.json().await?;
        self.items = items;
        Ok(())
    }

    pub fn begin_edit(&mut self, item: &Item) {
        self.form = FormState {
            name: item.name.clone(),
            quantity: item.quantity,
            description: item.description.clone().unwrap_or_default(),
            editing: Some(item.id),
        };
    }

    pub fn cancel_edit(&mut self) {
        self.form = FormState::default();
    }

    /// Creates or updates depending on whether an item is being edited; the
    /// form resets only after the server accepts the write.
    pub async fn submit(&mut self) -> ClientResult<()> {
        let description = self.form.description.trim();
        let body = json!({
            "name": self.form.name,
            "quantity": self.form.quantity,
            "description": if description.is_empty() { None } else { Some(description) },
        });

        match self.form.editing {
            Some(id) => {
                let url = format!("{}/items/{}", self.base_url, id);
                let response = self.client.put(&url).json(&body).send().await?;
                let updated: Item = Self::check(response).await?.json().await?;
                self.apply_updated(updated);
            }
            None => {
                let url = format!("{}/items", self.base_url);
                let response = self.client.post(&url).json(&body).send().await?;
                let created: Item = Self::check(response).await?.json().await?;
                self.apply_created(created);
            }
        }

        self.form = FormState::default();
        Ok(())
    }

    /// Deletion is destructive; callers are expected to confirm with the
    /// user before invoking this.
    pub async fn delete(&mut self, id: i64) -> ClientResult<()> {
        let url = format!("{}/items/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await?;
        self.apply_removed(id);
        Ok(())
    }

    fn apply_created(&mut self, item: Item) {
        self.items.push(item);
    }

    fn apply_updated(&mut self, item: Item) {
        for entry in &mut self.items {
            if entry.id == item.id {
                *entry = item;
                return;
            }
        }
    }

    fn apply_removed(&mut self, id: i64) {
        self.items.retain(|entry| entry.id != id);
    }

    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("message")?.as_str().map(String::from))
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
