use parking_lot::RwLock;

use crate::error::AppError;
use crate::models::inventory::{InventoryItem, SkuType};

/// Warehouse SKUs, most recently added first.
#[derive(Default)]
pub struct InventoryStore {
    items: RwLock<Vec<InventoryItem>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, items: Vec<InventoryItem>) {
        self.items.write().extend(items);
    }

    pub fn add(&self, item: InventoryItem) -> Result<InventoryItem, AppError> {
        validate(&item)?;

        let mut items = self.items.write();
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(AppError::Conflict(format!("sku {} already exists", item.id)));
        }
        items.insert(0, item.clone());

        Ok(item)
    }

    pub fn update(&self, item: InventoryItem) -> Result<InventoryItem, AppError> {
        validate(&item)?;

        let mut items = self.items.write();
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| AppError::NotFound(format!("sku {} not found", item.id)))?;
        *slot = item.clone();

        Ok(item)
    }

    pub fn get(&self, id: &str) -> Result<InventoryItem, AppError> {
        self.items
            .read()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("sku {id} not found")))
    }

    pub fn list(&self) -> Vec<InventoryItem> {
        self.items.read().clone()
    }

    pub fn search(&self, term: &str) -> Vec<InventoryItem> {
        let needle = term.trim().to_lowercase();
        self.items
            .read()
            .iter()
            .filter(|item| item.product_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.items
            .read()
            .iter()
            .filter(|item| item.is_low_stock())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

fn validate(item: &InventoryItem) -> Result<(), AppError> {
    if item.id.trim().is_empty() {
        return Err(AppError::BadRequest("sku id cannot be empty".to_string()));
    }
    if item.product_name.trim().is_empty() {
        return Err(AppError::BadRequest("product name cannot be empty".to_string()));
    }

    match item.sku_type {
        SkuType::Bundle if item.bundle_items.is_empty() => Err(AppError::BadRequest(format!(
            "bundle {} must list at least one component",
            item.product_name
        ))),
        SkuType::Bundle => {
            if item
                .bundle_items
                .iter()
                .any(|component| component.product_name.trim().is_empty() || component.quantity == 0)
            {
                return Err(AppError::BadRequest(format!(
                    "bundle {} has an empty component",
                    item.product_name
                )));
            }
            Ok(())
        }
        SkuType::Individual => Ok(()),
    }
}
