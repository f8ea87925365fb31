/// Turn order for a fight: the player acts first unless the opponent is strictly faster.
pub fn player_moves_first(player_speed: u16, opponent_speed: u16) -> bool {
    player_speed >= opponent_speed
}

/// Probability that running from a wild battle succeeds.
pub fn escape_chance(player_speed: u16, opponent_speed: u16) -> f64 {
    if opponent_speed > player_speed {
        0.5
    } else {
        1.0
    }
}

/// A roll hits when it does not exceed the move's accuracy.
pub fn move_hits(accuracy: f64, roll: f64) -> bool {
    roll <= accuracy
}

/// End-of-turn poison or burn damage: a tenth of max HP, at least 1.
pub fn residual_damage(max_hp: u16) -> u16 {
    (max_hp / 10).max(1)
}
