/// Score handed out when a population has zero spread: with every deviation
/// equal there is nothing to discriminate on.
pub(crate) const NEUTRAL_RATING: u8 = 5;

/// Map a deviation onto the bounded 1-10 scale for the given population
/// spread.
///
/// The population minimum rates 10 and the maximum rates 1; a smaller
/// deviation never scores below a larger one. The clamp only guards
/// floating-point edge effects: population-derived spreads keep every value
/// inside `[min, max]` to begin with.
pub(crate) fn rating(value: i64, min: i64, max: i64) -> u8 {
    if min == max {
        return NEUTRAL_RATING;
    }

    let t = (value - min) as f64 / (max - min) as f64;
    let raw = 10.0 - (t * 9.0).floor();
    raw.clamp(1.0, 10.0) as u8
}

/// Min/max of one deviation dimension across the completed population.
///
/// Each dimension gets its own spread; the cost minimum and the duration
/// minimum may well come from different records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeviationSpread {
    pub(crate) min: i64,
    pub(crate) max: i64,
}

impl DeviationSpread {
    /// One-pass scan; `None` for an empty population.
    pub(crate) fn of(values: impl IntoIterator<Item = i64>) -> Option<Self> {
        values.into_iter().fold(None, |spread, value| match spread {
            None => Some(Self {
                min: value,
                max: value,
            }),
            Some(Self { min, max }) => Some(Self {
                min: min.min(value),
                max: max.max(value),
            }),
        })
    }

    pub(crate) fn rating_for(&self, value: i64) -> u8 {
        rating(value, self.min, self.max)
    }
}
