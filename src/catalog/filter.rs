use crate::model::Product;
use rust_decimal::Decimal;

/// Product list filter.
///
/// Sent to the backend as query parameters; blank and unset fields are
/// omitted. [`matches`](ProductFilter::matches) applies the same rules
/// locally to a cached listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub low_stock_only: bool,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = non_blank(term);
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn min_price(mut self, price: Decimal) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: Decimal) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn low_stock_only(mut self) -> Self {
        self.low_stock_only = true;
        self
    }

    /// Resets every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(search) = self.search.as_deref().and_then(non_blank) {
            query.push(("search".to_string(), search));
        }
        if let Some(category) = self.category.as_deref().and_then(non_blank) {
            query.push(("category".to_string(), category));
        }
        if let Some(min) = self.min_price {
            query.push(("min_price".to_string(), min.normalize().to_string()));
        }
        if let Some(max) = self.max_price {
            query.push(("max_price".to_string(), max.normalize().to_string()));
        }
        if self.low_stock_only {
            query.push(("low_stock_only".to_string(), "true".to_string()));
        }
        query
    }

    /// Local equivalent of the backend filter. Search is a case-insensitive
    /// substring match on name and description.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = self.search.as_deref().and_then(non_blank) {
            let term = term.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&term);
            let in_description = product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term));
            if !in_name && !in_description {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref().and_then(non_blank) {
            if product.category != category {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        !self.low_stock_only || product.is_low_stock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_blank_fields() {
        let filter = ProductFilter::new()
            .search("  ")
            .category("Dairy")
            .min_price(Decimal::new(250, 2))
            .low_stock_only();

        assert_eq!(
            filter.to_query(),
            vec![
                ("category".to_string(), "Dairy".to_string()),
                ("min_price".to_string(), "2.5".to_string()),
                ("low_stock_only".to_string(), "true".to_string()),
            ]
        );
        assert!(ProductFilter::new().search("").is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut filter = ProductFilter::new().search("milk").low_stock_only();
        filter.clear();
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn local_match_mirrors_query() {
        let milk = Product::new(1, "Oat Milk", Decimal::new(399, 2), 3)
            .with_category("Dairy")
            .with_description("Barista edition");
        let bread = Product::new(2, "Rye Bread", Decimal::new(450, 2), 20).with_category("Bakery");

        let filter = ProductFilter::new().search("BARISTA");
        assert!(filter.matches(&milk));
        assert!(!filter.matches(&bread));

        let low = ProductFilter::new().low_stock_only();
        assert!(low.matches(&milk));
        assert!(!low.matches(&bread));

        let priced = ProductFilter::new().max_price(Decimal::new(4, 0));
        assert!(priced.matches(&milk));
        assert!(!priced.matches(&bread));
    }
}
