// Built-in catalog used whenever the remote catalog cannot be reached.
use crate::model::{Product, PLACEHOLDER_IMAGE};
use std::collections::BTreeMap;

fn product(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    brand: &str,
    specs: &[(&str, &str)],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        brand: brand.to_string(),
        specs: specs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        image_url: PLACEHOLDER_IMAGE.to_string(),
    }
}

/// At least one product per build slot, in a stable order.
pub fn fallback_products() -> Vec<Product> {
    vec![
        product("1", "Intel Core i9-13900K", "CPU", 589.99, "Intel", &[("socketType", "LGA1700"), ("wattage", "125")]),
        product("2", "AMD Ryzen 9 7950X", "CPU", 550.00, "AMD", &[("socketType", "AM5"), ("wattage", "170")]),
        product("3", "Intel Core i5-13600K", "CPU", 319.99, "Intel", &[("socketType", "LGA1700"), ("wattage", "125")]),
        product("4", "NVIDIA GeForce RTX 4090", "GPU", 1599.99, "NVIDIA", &[("powerRequirement", "450")]),
        product("5", "NVIDIA GeForce RTX 4070", "GPU", 599.99, "NVIDIA", &[("powerRequirement", "200")]),
        product("6", "ASUS ROG Maximus Z790", "Motherboard", 499.99, "ASUS", &[("socketType", "LGA1700"), ("memoryType", "DDR5"), ("formFactor", "ATX")]),
        product("7", "MSI MAG B650 Tomahawk", "Motherboard", 219.99, "MSI", &[("socketType", "AM5"), ("memoryType", "DDR5"), ("formFactor", "ATX")]),
        product("8", "Corsair Vengeance 32GB DDR5", "RAM", 129.99, "Corsair", &[("type", "DDR5")]),
        product("9", "Samsung 990 Pro 2TB", "Storage", 169.99, "Samsung", &[]),
        product("10", "Corsair RM1000x", "PSU", 189.99, "Corsair", &[("wattage", "1000")]),
        product("11", "Corsair RM750x", "PSU", 119.99, "Corsair", &[("wattage", "750")]),
        product("12", "NZXT Kraken Z73", "Cooler", 279.99, "NZXT", &[]),
        product("13", "Lian Li O11 Dynamic", "Case", 149.99, "Lian Li", &[("formFactor", "ATX")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use std::collections::HashSet;

    #[test]
    fn covers_every_slot_with_unique_ids() {
        let products = fallback_products();
        for slot in Category::ALL {
            assert!(products.iter().any(|p| p.slot() == Some(slot)), "missing {slot}");
        }
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }
}
