use mech_content::ContentFactory;
use mech_core::{EquipmentSlot, GameConfig};

fn factory() -> ContentFactory {
    ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../../data"))
}

#[test]
fn bundled_content_loads() {
    let catalog = factory().load_catalog().expect("bundled catalog is valid");
    let config = factory().load_config().expect("bundled config is valid");

    assert_eq!(config, GameConfig::default());
    assert!(catalog.items().len() >= EquipmentSlot::EQUIPPABLE.len());
    assert!(catalog.boss(1).is_some());
}

#[test]
fn bundled_catalog_covers_every_slot() {
    let catalog = factory().load_catalog().unwrap();
    for slot in EquipmentSlot::EQUIPPABLE {
        assert!(
            catalog.items().iter().any(|template| template.slot == slot),
            "no item for {slot}"
        );
    }
}
