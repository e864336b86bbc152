//! Snapshots and equip actions racing the loop thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use mech_core::{
    ArenaState, EquipmentSlot, GameConfig, Item, ItemTemplate, Mech, PilotClass, Rarity, StatKind,
    StatLedger,
};
use mech_runtime::{Runtime, RuntimeConfig};

const SLOTS: [EquipmentSlot; 4] = [
    EquipmentSlot::Head,
    EquipmentSlot::Chest,
    EquipmentSlot::Legs,
    EquipmentSlot::LeftArmWeapon,
];

fn runtime_with_gear() -> Runtime {
    let mut player = Mech::new("Player", PilotClass::default_player_stats());
    for (n, slot) in SLOTS.iter().enumerate() {
        for copy in 0..2 {
            let id = format!("{slot}_{copy}");
            let template = ItemTemplate::new(
                id.clone(),
                id,
                *slot,
                StatLedger::from([(StatKind::Health, 10.0 * (n + 1) as f64)]),
            );
            player.add_to_inventory(Item::new(Arc::new(template), Rarity::Common).unwrap());
        }
    }

    let config = RuntimeConfig {
        tick_interval: Duration::from_millis(1),
        ..RuntimeConfig::default()
    };
    Runtime::builder()
        .initial_state(ArenaState::new(player, &GameConfig::default()))
        .config(config)
        .build()
}

#[test]
fn snapshots_never_see_a_torn_equip() {
    let runtime = runtime_with_gear();
    let total_items = SLOTS.len() * 2;
    runtime.start().unwrap();

    let done = Arc::new(AtomicBool::new(false));

    let mutator = {
        let handle = runtime.handle();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut round = 0usize;
            while !done.load(Ordering::Acquire) {
                let slot = SLOTS[round % SLOTS.len()];
                if round % 3 == 2 {
                    let _ = handle.unequip(slot);
                } else {
                    let _ = handle.equip_from_inventory(round % total_items);
                }
                round += 1;
            }
            round
        })
    };

    let handle = runtime.handle();
    for _ in 0..2_000 {
        let snapshot = handle.snapshot().unwrap();
        let equipped = snapshot.player.equipment.len();
        assert_eq!(snapshot.inventory.len() + equipped, total_items);

        for entry in &snapshot.inventory {
            assert_ne!(
                snapshot.player.equipment.get(&entry.slot),
                Some(&entry.name),
                "{} is both equipped and in the inventory",
                entry.name
            );
        }

        let gear_health: f64 = snapshot.player.total_stats.get(StatKind::Health) - 200.0;
        assert!(gear_health >= 0.0);
        assert!(snapshot.player.health <= snapshot.player.max_health);
    }

    done.store(true, Ordering::Release);
    let rounds = mutator.join().unwrap();
    runtime.stop().unwrap();

    assert!(rounds > 0);
}

#[test]
fn equip_requests_from_many_threads_keep_item_count() {
    let runtime = runtime_with_gear();
    let total_items = SLOTS.len() * 2;
    runtime.start().unwrap();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let handle = runtime.handle();
            thread::spawn(move || {
                for round in 0..200 {
                    if (round + worker) % 2 == 0 {
                        let _ = handle.equip_from_inventory(round % total_items);
                    } else {
                        let _ = handle.unequip(SLOTS[(round + worker) % SLOTS.len()]);
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
    runtime.stop().unwrap();

    let snapshot = runtime.handle().snapshot().unwrap();
    assert_eq!(snapshot.inventory.len() + snapshot.player.equipment.len(), total_items);
}
