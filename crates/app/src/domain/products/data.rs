//! Products Data

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub description: String,
    pub tags: Vec<String>,
}
