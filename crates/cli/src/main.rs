use entrepot_catalog::Product;
use entrepot_registry::Registry;

fn main() {
    entrepot_observability::init();

    let mut registry = Registry::new();

    for product in [
        Product::electronic("E001", "Smartphone", 799.99, 24),
        Product::electronic("E002", "Ordinateur", 1200.00, 12),
    ] {
        if let Err(err) = registry.add(product) {
            tracing::error!(%err, "rejected product");
        }
    }

    println!("Current stock ({} items):", registry.len());
    for product in registry.list_all() {
        println!("- {product}");
    }

    if let Some(found) = registry.find("E001") {
        println!("\nLookup E001: {found}");
    }

    match registry.find_by_name("ordinateur") {
        Ok(found) => println!("Lookup by name \"ordinateur\": {found}"),
        Err(err) => tracing::error!(%err, "name lookup failed"),
    }

    println!("\nPriced at 1000€ or more:");
    for product in registry.filter_by_min_price(1000.0) {
        println!("- {product}");
    }

    // Both rejection paths: a blank id, then a duplicate of E001. Errors are
    // captured and logged; neither reaches the exit code.
    if let Err(err) = registry.add(Product::new("", "Erreur", 0.0)) {
        tracing::error!(%err, "rejected product");
    }
    if let Err(err) = registry.add(Product::electronic("E001", "Smartphone Bis", 500.0, 6)) {
        tracing::error!(%err, "rejected product");
    }
}
