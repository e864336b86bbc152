//! Plain-text rendering of arena snapshots.
use std::fmt::Write;

use mech_runtime::{ArenaSnapshot, CombatantView};

fn gauge(view: &CombatantView) -> String {
    format!(
        "{} HP {:.0}/{:.0} SH {:.0}/{:.0}",
        view.name, view.health, view.max_health, view.shield, view.max_shield
    )
}

pub fn render(snapshot: &ArenaSnapshot, new_log: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "== Floor {} | defeated {} | {} ==",
        snapshot.floor, snapshot.defeated_on_floor, snapshot.phase
    );
    let _ = writeln!(out, "  {}", gauge(&snapshot.player));
    match &snapshot.opponent {
        Some(opponent) if snapshot.opponent_is_boss => {
            let _ = writeln!(out, "  [BOSS] {}", gauge(opponent));
        }
        Some(opponent) => {
            let _ = writeln!(out, "  {}", gauge(opponent));
        }
        None => {}
    }
    for (slot, name) in &snapshot.player.equipment {
        let _ = writeln!(out, "  {slot:<22} {name}");
    }
    if !snapshot.inventory.is_empty() {
        let _ = writeln!(out, "  inventory: {} item(s)", snapshot.inventory.len());
    }
    for line in new_log {
        let _ = writeln!(out, "  > {line}");
    }
    out
}
