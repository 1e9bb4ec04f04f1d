//! HTTP DTOs for quote endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::quote::{ComponentOptions, QuoteSnapshot, RemoveItemResult};
use crate::domain::catalog::{Component, ComponentOption};
use crate::domain::configuration::Configuration;
use crate::domain::foundation::SessionKey;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct EditDimensionsRequest {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwapComponentRequest {
    pub option_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentLineResponse {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl From<&Component> for ComponentLineResponse {
    fn from(component: &Component) -> Self {
        Self {
            name: component.name.clone(),
            category: component.functional_category.clone(),
            quantity: component.quantity,
            unit_price: component.unit_price,
            subtotal: component.line_total(),
        }
    }
}

/// One priced ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItemResponse {
    pub index: usize,
    pub name: String,
    pub dimensions: String,
    pub material: String,
    pub color: String,
    pub price: f64,
    pub components: Vec<ComponentLineResponse>,
    pub total: f64,
}

impl QuoteItemResponse {
    pub fn new(index: usize, item: &Configuration) -> Self {
        Self {
            index,
            name: item.name().to_string(),
            dimensions: item.dimensions().to_string(),
            material: item.material().to_string(),
            color: item.color().to_string(),
            price: item.current_price(),
            components: item.components().iter().map(Into::into).collect(),
            total: item.total(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub session_id: String,
    pub items: Vec<QuoteItemResponse>,
    pub total: f64,
    pub finalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl QuoteResponse {
    /// Quote of a session that does not exist yet.
    pub fn empty(session_key: &SessionKey) -> Self {
        Self {
            session_id: session_key.to_string(),
            items: Vec::new(),
            total: 0.0,
            finalized: false,
            document: None,
        }
    }
}

impl From<QuoteSnapshot> for QuoteResponse {
    fn from(snapshot: QuoteSnapshot) -> Self {
        Self {
            session_id: snapshot.session_key.to_string(),
            items: snapshot
                .ledger
                .entries()
                .iter()
                .enumerate()
                .map(|(index, item)| QuoteItemResponse::new(index, item))
                .collect(),
            total: snapshot.grand_total(),
            finalized: snapshot.is_finalized(),
            document: snapshot.exported_document,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteStatusResponse {
    pub session_id: String,
    pub state: String,
    pub item_count: usize,
    pub total: f64,
    pub configuring: bool,
    pub finalized: bool,
}

impl From<QuoteSnapshot> for QuoteStatusResponse {
    fn from(snapshot: QuoteSnapshot) -> Self {
        Self {
            session_id: snapshot.session_key.to_string(),
            state: snapshot.state.as_str().to_string(),
            item_count: snapshot.ledger.len(),
            total: snapshot.grand_total(),
            configuring: snapshot.in_progress.is_some(),
            finalized: snapshot.is_finalized(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveItemResponse {
    pub removed: String,
    pub remaining: usize,
    pub state: String,
}

impl From<RemoveItemResult> for RemoveItemResponse {
    fn from(result: RemoveItemResult) -> Self {
        Self {
            removed: result.removed_name,
            remaining: result.remaining,
            state: result.state.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionResponse {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
}

impl From<ComponentOption> for OptionResponse {
    fn from(option: ComponentOption) -> Self {
        Self {
            id: option.id,
            name: option.name,
            unit_price: option.unit_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentOptionsResponse {
    pub category: String,
    pub options: Vec<OptionResponse>,
}

impl From<ComponentOptions> for ComponentOptionsResponse {
    fn from(result: ComponentOptions) -> Self {
        Self {
            category: result.category,
            options: result.options.into_iter().map(Into::into).collect(),
        }
    }
}
