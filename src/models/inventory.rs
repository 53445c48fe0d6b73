use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkuType {
    Individual,
    Bundle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkuCategory {
    #[serde(rename = "Value Bundles")]
    ValueBundles,
    #[serde(rename = "Pantry Staples")]
    PantryStaples,
    #[serde(rename = "Hygiene & Care")]
    HygieneAndCare,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProcurementType {
    #[serde(rename = "In-House")]
    InHouse,
    #[serde(rename = "Local Procurement")]
    LocalProcurement,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleComponent {
    pub product_name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub product_name: String,
    pub current_stock: u32,
    pub min_threshold: u32,
    pub warehouse_location: String,
    pub sku_type: SkuType,
    #[serde(default)]
    pub bundle_items: Vec<BundleComponent>,
    pub category: Option<SkuCategory>,
    pub procurement_type: Option<ProcurementType>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_threshold
    }
}
