use crate::battle::state::BattleEvent;

/// Lowest damage-variance multiplier; a roll of 0 gives this, a roll near 1 gives nearly 1.0.
const MIN_VARIANCE: f64 = 0.85;

/// `floor(power * attack / max(1, defense) / 2)`, at least 1.
pub fn base_damage(power: u16, attack: u16, defense: u16) -> u32 {
    let defense = u32::from(defense.max(1));
    (u32::from(power) * u32::from(attack) / (defense * 2)).max(1)
}

/// Full damage for a hit. `variance_roll` is a uniform draw in `[0, 1)` mapped onto
/// `[0.85, 1.0)`. Never returns less than 1.
pub fn calculate_damage(power: u16, attack: u16, defense: u16, multiplier: f32, variance_roll: f64) -> u16 {
    let variance = MIN_VARIANCE + (1.0 - MIN_VARIANCE) * variance_roll;
    let scaled = f64::from(base_damage(power, attack, defense)) * f64::from(multiplier) * variance;
    let damage = scaled.floor().clamp(1.0, f64::from(u16::MAX));
    damage as u16
}

/// Log line for a type multiplier; neutral hits say nothing extra.
pub fn effectiveness_event(multiplier: f32) -> Option<BattleEvent> {
    if multiplier > 1.0 {
        Some(BattleEvent::SuperEffective)
    } else if multiplier > 0.0 && multiplier < 1.0 {
        Some(BattleEvent::NotVeryEffective)
    } else {
        None
    }
}
