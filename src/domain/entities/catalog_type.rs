//! Catalog type entity: the product-category axis of item classification.

/// A product category items can be filtered by.
#[derive(Debug, Clone)]
pub struct CatalogType {
    pub id: i64,
    pub name: String,
}

impl CatalogType {
    /// Creates a new CatalogType instance.
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_type_creation() {
        let kind = CatalogType::new(3, "Footwear".to_string());

        assert_eq!(kind.id, 3);
        assert_eq!(kind.name, "Footwear");
    }
}
