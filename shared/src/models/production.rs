//! Production models

use serde::{Deserialize, Serialize};

/// The products recorded in a daily production entry.
///
/// This enum is the allow-list for the dynamic product filter: caller-supplied
/// product names resolve through [`Product::from_param`] and only a known
/// variant ever reaches query construction, so filter syntax in the parameter
/// (`$`-operators and the like) can never leak into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Milk,
    Curd,
    Paneer,
    LowFatPaneer,
    Butter,
    Cream,
    Ghee,
}

impl Product {
    pub const ALL: [Product; 7] = [
        Product::Milk,
        Product::Curd,
        Product::Paneer,
        Product::LowFatPaneer,
        Product::Butter,
        Product::Cream,
        Product::Ghee,
    ];

    /// Resolve a caller-supplied product parameter.
    ///
    /// Anything outside the allow-list returns None and is ignored by the
    /// filter builder.
    pub fn from_param(param: &str) -> Option<Self> {
        match param.trim() {
            "milk" => Some(Product::Milk),
            "curd" => Some(Product::Curd),
            "paneer" => Some(Product::Paneer),
            "low_fat_paneer" => Some(Product::LowFatPaneer),
            "butter" => Some(Product::Butter),
            "cream" => Some(Product::Cream),
            "ghee" => Some(Product::Ghee),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Milk => "milk",
            Product::Curd => "curd",
            Product::Paneer => "paneer",
            Product::LowFatPaneer => "low_fat_paneer",
            Product::Butter => "butter",
            Product::Cream => "cream",
            Product::Ghee => "ghee",
        }
    }

    /// Column holding this product's quantity, following the
    /// `<name>_quantity` convention.
    pub fn quantity_column(&self) -> &'static str {
        match self {
            Product::Milk => "milk_quantity",
            Product::Curd => "curd_quantity",
            Product::Paneer => "paneer_quantity",
            Product::LowFatPaneer => "low_fat_paneer_quantity",
            Product::Butter => "butter_quantity",
            Product::Cream => "cream_quantity",
            Product::Ghee => "ghee_quantity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_known_products() {
        assert_eq!(Product::from_param("milk"), Some(Product::Milk));
        assert_eq!(Product::from_param("ghee"), Some(Product::Ghee));
        assert_eq!(
            Product::from_param("low_fat_paneer"),
            Some(Product::LowFatPaneer)
        );
    }

    #[test]
    fn test_from_param_rejects_unknown() {
        assert_eq!(Product::from_param("cheese"), None);
        assert_eq!(Product::from_param(""), None);
        assert_eq!(Product::from_param("MILK"), None);
    }

    #[test]
    fn test_from_param_rejects_operator_syntax() {
        assert_eq!(Product::from_param("$where"), None);
        assert_eq!(Product::from_param("milk$gt"), None);
        assert_eq!(Product::from_param("milk_quantity; DROP TABLE"), None);
    }

    #[test]
    fn test_quantity_column_convention() {
        for product in Product::ALL {
            let column = product.quantity_column();
            assert!(column.ends_with("_quantity"));
            assert!(column.starts_with(product.as_str()));
        }
    }
}
