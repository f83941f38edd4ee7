//! Catalog brand entity: the manufacturer axis of item classification.

/// A brand items can be filtered by.
#[derive(Debug, Clone)]
pub struct CatalogBrand {
    pub id: i64,
    pub name: String,
}

impl CatalogBrand {
    /// Creates a new CatalogBrand instance.
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_brand_creation() {
        let brand = CatalogBrand::new(2, "Daybird".to_string());

        assert_eq!(brand.id, 2);
        assert_eq!(brand.name, "Daybird");
    }
}
