use schema::CreatureType;
use std::collections::HashMap;
use std::sync::LazyLock;

const TYPE_CHART: &str = include_str!("../data/type_chart.ron");

static TYPE_EFFECTIVENESS: LazyLock<HashMap<(CreatureType, CreatureType), f32>> =
    LazyLock::new(|| match parse_type_chart(TYPE_CHART) {
        Ok(chart) => chart,
        Err(err) => {
            // An unreadable chart degrades to all-neutral matchups.
            tracing::error!(%err, "type chart could not be parsed");
            HashMap::new()
        }
    });

pub fn parse_type_chart(
    source: &str,
) -> Result<HashMap<(CreatureType, CreatureType), f32>, ron::error::SpannedError> {
    let entries: Vec<(CreatureType, CreatureType, f32)> = ron::from_str(source)?;
    Ok(entries
        .into_iter()
        .map(|(attacking, defending, multiplier)| ((attacking, defending), multiplier))
        .collect())
}

/// Damage multiplier for a move of type `attacking` hitting a `defending` creature.
/// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective
pub fn type_effectiveness(attacking: CreatureType, defending: CreatureType) -> f32 {
    TYPE_EFFECTIVENESS
        .get(&(attacking, defending))
        .copied()
        .unwrap_or(1.0)
}
