//! Property Manager products

use serde::{Deserialize, Serialize};

/// Products available under one contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Products {
    pub account_id: String,
    pub contract_id: String,
    pub products: ProductItems,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItems {
    #[serde(default)]
    pub items: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Contract the product was listed under; not part of the wire format.
    #[serde(skip)]
    contract_id: Option<String>,
    pub product_id: String,
    pub product_name: String,
}

impl Products {
    pub(crate) fn link_parents(&mut self) {
        for product in &mut self.products.items {
            product.contract_id = Some(self.contract_id.clone());
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.products.items
    }

    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products
            .items
            .iter()
            .find(|p| p.product_id == product_id)
    }
}

impl Product {
    pub fn contract_id(&self) -> Option<&str> {
        self.contract_id.as_deref()
    }
}
