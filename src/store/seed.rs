//! Seed Data
//!
//! Populates a fresh store with the demo catalog the client expects on
//! first run: three categories, three suppliers, three products and their
//! many-to-many links.

use tracing::info;

use crate::store::MemoryStore;

/// Seeds the demo inventory. Intended for an empty store at startup.
pub fn seed_demo_data(store: &mut MemoryStore) {
    let electronics = store.insert_category("Electronics".to_string());
    let furniture = store.insert_category("Furniture".to_string());
    let accessories = store.insert_category("Accessories".to_string());

    let tech_corp = store.insert_supplier(
        "TechCorp".to_string(),
        "contact@techcorp.com".to_string(),
        Some("123 Tech Street, Silicon Valley, CA 94000".to_string()),
        Some("+1-555-0123".to_string()),
    );
    let office_supply = store.insert_supplier(
        "OfficeSupply Inc".to_string(),
        "orders@officesupply.com".to_string(),
        Some("456 Business Ave, New York, NY 10001".to_string()),
        Some("+1-555-0456".to_string()),
    );
    let global_electronics = store.insert_supplier(
        "Global Electronics".to_string(),
        "sales@globalelectronics.com".to_string(),
        Some("789 Innovation Blvd, Austin, TX 73301".to_string()),
        Some("+1-555-0789".to_string()),
    );

    let laptop = store.insert_product("Laptop".to_string(), 999.99, 15);
    let chair = store.insert_product("Office Chair".to_string(), 299.99, 8);
    let mouse = store.insert_product("Wireless Mouse".to_string(), 29.99, 25);

    store.set_product_categories(laptop.product_id, &[electronics.category_id]);
    store.set_product_categories(chair.product_id, &[furniture.category_id]);
    store.set_product_categories(
        mouse.product_id,
        &[electronics.category_id, accessories.category_id],
    );

    store.set_product_suppliers(laptop.product_id, &[tech_corp.supplier_id]);
    store.set_product_suppliers(chair.product_id, &[office_supply.supplier_id]);
    store.set_product_suppliers(
        mouse.product_id,
        &[tech_corp.supplier_id, global_electronics.supplier_id],
    );

    info!(
        products = store.product_count(),
        suppliers = store.supplier_count(),
        "seeded demo inventory"
    );
}
