//! Visibility classification of a collection's products.
//!
//! Everything here is recomputed from the product list on each call; nothing
//! is cached, so the displayed subset and the tab counts cannot drift from
//! the list they were derived from.

use storedesk_types::{Product, ProductFilter};

/// Products matching `filter`, in their original relative order.
pub fn filter_products(products: &[Product], filter: ProductFilter) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| filter.matches(&product.visibility))
        .collect()
}

/// Partition sizes shown next to each filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    pub all: usize,
    pub published: usize,
    pub inactive: usize,
}

impl FilterCounts {
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(
            Self {
                all: products.len(),
                ..Self::default()
            },
            |mut counts, product| {
                if ProductFilter::Published.matches(&product.visibility) {
                    counts.published += 1;
                }
                if ProductFilter::Inactive.matches(&product.visibility) {
                    counts.inactive += 1;
                }
                counts
            },
        )
    }

    pub fn count_for(&self, filter: ProductFilter) -> usize {
        match filter {
            ProductFilter::All => self.all,
            ProductFilter::Published => self.published,
            ProductFilter::Inactive => self.inactive,
        }
    }

    /// Tab caption, e.g. `"Published (4)"`.
    pub fn tab_label(&self, filter: ProductFilter) -> String {
        format!("{} ({})", filter.label(), self.count_for(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storedesk_types::Visibility;

    fn product(id: &str, visibility: &str) -> Product {
        Product {
            id: id.into(),
            poster: String::new(),
            name: format!("Product {id}"),
            price: Default::default(),
            visibility: Visibility::parse(visibility),
        }
    }

    #[test]
    fn filters_preserve_order() {
        let products = vec![
            product("1", "PUBLISHED"),
            product("2", "draft"),
            product("3", "Published"),
            product("4", "HIDDEN"),
        ];
        let published: Vec<_> = filter_products(&products, ProductFilter::Published)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(published, ["1", "3"]);
        let inactive: Vec<_> = filter_products(&products, ProductFilter::Inactive)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(inactive, ["2", "4"]);
    }

    #[test]
    fn counts_follow_classification() {
        let products = vec![
            product("1", "PUBLISHED"),
            product("2", "DRAFT"),
            product("3", "ARCHIVED"),
        ];
        let counts = FilterCounts::from_products(&products);
        assert_eq!(
            counts,
            FilterCounts {
                all: 3,
                published: 1,
                inactive: 1
            }
        );
        assert_eq!(counts.tab_label(ProductFilter::All), "View all (3)");
        assert_eq!(counts.tab_label(ProductFilter::Inactive), "Inactive (1)");
    }

    #[test]
    fn empty_list_has_zero_counts() {
        assert_eq!(FilterCounts::from_products(&[]), FilterCounts::default());
        assert!(filter_products(&[], ProductFilter::All).is_empty());
    }
}
