/// Categorises registered transactions for display and reporting. The
/// taxonomy is fixed; the core only cares about the opaque `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
}

/// Sentinel key shown by the register screen before a category is chosen.
/// Records carrying it are rejected at validation time.
pub const DEFAULT_CATEGORY_KEY: &str = "category";

pub const CATEGORIES: &[Category] = &[
    Category {
        key: "purchases",
        name: "Compras",
    },
    Category {
        key: "food",
        name: "Alimentação",
    },
    Category {
        key: "salary",
        name: "Salário",
    },
    Category {
        key: "car",
        name: "Carro",
    },
    Category {
        key: "leisure",
        name: "Lazer",
    },
    Category {
        key: "studies",
        name: "Estudos",
    },
];

/// Looks up a taxonomy entry by its key.
pub fn category_by_key(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.key == key)
}
