/// Combat posture chosen by the player.
///
/// Switching stance is a free action; the actual modifiers come from
/// [`StanceTable`](crate::config::StanceTable).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stance {
    #[default]
    Balanced,
    Aggressive,
    Defensive,
}

impl Stance {
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stances_round_trip_through_names() {
        for stance in Stance::all() {
            assert_eq!(stance.as_ref().parse::<Stance>().unwrap(), stance);
        }
        assert_eq!(Stance::default(), Stance::Balanced);
    }
}
