//! Post-confirmation item edits: dimensions and component swaps.

use std::sync::Arc;

use crate::domain::catalog::ComponentOption;
use crate::domain::configuration::{Configuration, Dimensions};
use crate::domain::foundation::{DomainError, ErrorCode, SessionKey};
use crate::ports::{CatalogProvider, SessionStore};

use super::{ensure_editable, existing_session};

// ─────────────────────────────────────────────────────────────────────────────
// Dimensions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct EditItemDimensionsCommand {
    pub session_key: SessionKey,
    pub index: usize,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

/// Resizes a confirmed item and reprices it.
pub struct EditItemDimensionsHandler {
    sessions: Arc<dyn SessionStore>,
}

impl EditItemDimensionsHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: EditItemDimensionsCommand) -> Result<Configuration, DomainError> {
        let dimensions = Dimensions::new(cmd.width_mm, cmd.height_mm, cmd.depth_mm)
            .map_err(|e| DomainError::new(ErrorCode::InvalidDimensions, e.to_string()))?;

        let handle = existing_session(self.sessions.as_ref(), &cmd.session_key).await?;
        let mut session = handle.lock().await;
        ensure_editable(&session)?;

        let item = session.ledger_mut().entry_mut(cmd.index)?;
        item.set_dimensions(dimensions);

        tracing::info!(
            session_id = %cmd.session_key,
            index = cmd.index,
            price = item.current_price(),
            "Quote item resized"
        );
        Ok(item.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component options
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ListComponentOptionsQuery {
    pub session_key: SessionKey,
    pub index: usize,
    pub component_index: usize,
}

/// Substitution options for one component slot.
#[derive(Debug, Clone)]
pub struct ComponentOptions {
    /// Normalized category key of the component.
    pub category: String,
    pub options: Vec<ComponentOption>,
}

/// Lists substitution options for one component of a confirmed item.
pub struct ListComponentOptionsHandler {
    sessions: Arc<dyn SessionStore>,
    catalog: Arc<dyn CatalogProvider>,
}

impl ListComponentOptionsHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { sessions, catalog }
    }

    pub async fn handle(&self, query: ListComponentOptionsQuery) -> Result<ComponentOptions, DomainError> {
        let category_key = {
            let handle = existing_session(self.sessions.as_ref(), &query.session_key).await?;
            let session = handle.lock().await;
            component_category(session.ledger().get(query.index), query.index, query.component_index)?
        };

        let catalog = self.catalog.substitution_catalog().await?;
        let options = catalog
            .options(&category_key)
            .map(<[ComponentOption]>::to_vec)
            .ok_or_else(|| category_not_found(&category_key))?;
        Ok(ComponentOptions {
            category: category_key,
            options,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component swap
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SwapItemComponentCommand {
    pub session_key: SessionKey,
    pub index: usize,
    pub component_index: usize,
    pub option_id: String,
}

/// Swaps one component of a confirmed item for a catalog option of the
/// same category, keeping its quantity.
pub struct SwapItemComponentHandler {
    sessions: Arc<dyn SessionStore>,
    catalog: Arc<dyn CatalogProvider>,
}

impl SwapItemComponentHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { sessions, catalog }
    }

    pub async fn handle(&self, cmd: SwapItemComponentCommand) -> Result<Configuration, DomainError> {
        let catalog = self.catalog.substitution_catalog().await?;

        let handle = existing_session(self.sessions.as_ref(), &cmd.session_key).await?;
        let mut session = handle.lock().await;
        ensure_editable(&session)?;

        let category_key =
            component_category(session.ledger().get(cmd.index), cmd.index, cmd.component_index)?;
        let option = catalog.find_option(&category_key, &cmd.option_id).ok_or_else(|| {
            DomainError::new(ErrorCode::OptionNotFound, "Unknown component option")
                .with_detail("category", category_key.clone())
                .with_detail("option_id", cmd.option_id.clone())
        })?;

        let item = session.ledger_mut().entry_mut(cmd.index)?;
        let previous = item.swap_component_at(cmd.component_index, &category_key, option)?;

        tracing::info!(
            session_id = %cmd.session_key,
            index = cmd.index,
            from = %previous.name,
            to = %option.name,
            "Quote item component swapped"
        );
        Ok(item.clone())
    }
}

fn component_category(
    item: Option<&Configuration>,
    index: usize,
    component_index: usize,
) -> Result<String, DomainError> {
    let item = item.ok_or_else(|| {
        DomainError::new(ErrorCode::ItemNotFound, "Quote item not found")
            .with_detail("index", index.to_string())
    })?;
    item.components()
        .get(component_index)
        .map(|c| c.category_key())
        .ok_or_else(|| {
            DomainError::new(ErrorCode::ComponentNotFound, "Component not found")
                .with_detail("index", component_index.to_string())
        })
}

fn category_not_found(category_key: &str) -> DomainError {
    DomainError::new(ErrorCode::CategoryNotFound, "No substitutions for this category")
        .with_detail("category", category_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalog;
    use crate::application::handlers::quote::test_support::store_with_two_items;

    fn key() -> SessionKey {
        SessionKey::new("a")
    }

    mod dimensions {
        use super::*;

        fn cmd(index: usize, width_mm: f64) -> EditItemDimensionsCommand {
            EditItemDimensionsCommand {
                session_key: key(),
                index,
                width_mm,
                height_mm: 2200.0,
                depth_mm: 600.0,
            }
        }

        #[tokio::test]
        async fn resize_reprices_the_item() {
            let handler = EditItemDimensionsHandler::new(store_with_two_items("a").await);

            let item = handler.handle(cmd(0, 3200.0)).await.unwrap();

            // footprint doubles: 3.2 m x 0.6 m against 0.96 m2
            assert!((item.current_price() - 3600.0).abs() < 1e-6);
        }

        #[tokio::test]
        async fn non_positive_dimensions_are_rejected() {
            let handler = EditItemDimensionsHandler::new(store_with_two_items("a").await);
            let err = handler.handle(cmd(0, -1.0)).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidDimensions);
        }

        #[tokio::test]
        async fn unknown_item_is_not_found() {
            let handler = EditItemDimensionsHandler::new(store_with_two_items("a").await);
            let err = handler.handle(cmd(5, 800.0)).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ItemNotFound);
        }
    }

    mod swap {
        use super::*;

        async fn handlers() -> (ListComponentOptionsHandler, SwapItemComponentHandler) {
            let store = store_with_two_items("a").await;
            let catalog = Arc::new(InMemoryCatalog::seeded());
            (
                ListComponentOptionsHandler::new(store.clone(), catalog.clone()),
                SwapItemComponentHandler::new(store, catalog),
            )
        }

        #[tokio::test]
        async fn lists_options_of_the_component_category() {
            let (list, _) = handlers().await;

            // wardrobe component 1 is the hinge
            let result = list
                .handle(ListComponentOptionsQuery {
                    session_key: key(),
                    index: 0,
                    component_index: 1,
                })
                .await
                .unwrap();

            assert_eq!(result.category, "dobradica");
            let ids: Vec<&str> = result.options.iter().map(|o| o.id.as_str()).collect();
            assert_eq!(ids, vec!["DOB01", "DOB02"]);
        }

        #[tokio::test]
        async fn swap_keeps_quantity_and_position() {
            let (_, swap) = handlers().await;

            let item = swap
                .handle(SwapItemComponentCommand {
                    session_key: key(),
                    index: 0,
                    component_index: 1,
                    option_id: "DOB02".to_string(),
                })
                .await
                .unwrap();

            let hinge = item.components().get(1).unwrap();
            assert_eq!(hinge.name, "Dobradiça Soft Close");
            assert_eq!(hinge.quantity, 8);
            assert_eq!(hinge.unit_price, 32.0);
        }

        #[tokio::test]
        async fn option_from_another_category_is_rejected() {
            let (_, swap) = handlers().await;

            let err = swap
                .handle(SwapItemComponentCommand {
                    session_key: key(),
                    index: 0,
                    component_index: 1,
                    option_id: "PUX01".to_string(),
                })
                .await
                .unwrap_err();

            assert_eq!(err.code, ErrorCode::OptionNotFound);
        }

        #[tokio::test]
        async fn unknown_component_is_not_found() {
            let (list, _) = handlers().await;

            let err = list
                .handle(ListComponentOptionsQuery {
                    session_key: key(),
                    index: 0,
                    component_index: 9,
                })
                .await
                .unwrap_err();

            assert_eq!(err.code, ErrorCode::ComponentNotFound);
        }
    }
}
