//! Dietary guidance derived from the thithi.

use serde::Serialize;

use crate::thithi::ThithiName;

/// Food guidance for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FoodGuidance {
    /// No dietary restriction applies.
    Regular,
    /// Ekadasi fasting day.
    Fasting,
    /// Pournami or Amavasai, avoid non-vegetarian food.
    AvoidNonVeg,
}

impl FoodGuidance {
    /// Machine-readable tag for the guidance.
    pub const fn name(self) -> &'static str {
        match self {
            FoodGuidance::Regular => "regular",
            FoodGuidance::Fasting => "fasting",
            FoodGuidance::AvoidNonVeg => "avoidNonVeg",
        }
    }

    /// User-facing message for the guidance.
    pub const fn message(self) -> &'static str {
        match self {
            FoodGuidance::Regular => "No dietary restrictions today",
            FoodGuidance::Fasting => "Ekadasi - Fasting recommended",
            FoodGuidance::AvoidNonVeg => "Avoid non-vegetarian food",
        }
    }
}

/// Guidance for a thithi. Ekadasi in either paksha calls for fasting;
/// the full and new moon days call for a vegetarian diet.
pub const fn food_guidance_for_thithi(thithi: ThithiName) -> FoodGuidance {
    match thithi {
        ThithiName::Ekadasi => FoodGuidance::Fasting,
        ThithiName::Pournami | ThithiName::Amavasai => FoodGuidance::AvoidNonVeg,
        _ => FoodGuidance::Regular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thithi::thithi_from_angle;

    #[test]
    fn ekadasi_is_a_fasting_day() {
        // Ekadasi is thithi 11 (Shukla) and 26 (Krishna).
        let shukla = thithi_from_angle(10.0 * 12.0 + 6.0);
        let krishna = thithi_from_angle(25.0 * 12.0 + 6.0);
        assert_eq!(food_guidance_for_thithi(shukla.name), FoodGuidance::Fasting);
        assert_eq!(food_guidance_for_thithi(krishna.name), FoodGuidance::Fasting);
    }

    #[test]
    fn full_and_new_moon_avoid_non_veg() {
        let pournami = thithi_from_angle(14.0 * 12.0 + 6.0);
        let amavasai = thithi_from_angle(29.0 * 12.0 + 6.0);
        assert_eq!(pournami.name, ThithiName::Pournami);
        assert_eq!(amavasai.name, ThithiName::Amavasai);
        assert_eq!(food_guidance_for_thithi(pournami.name), FoodGuidance::AvoidNonVeg);
        assert_eq!(food_guidance_for_thithi(amavasai.name), FoodGuidance::AvoidNonVeg);
    }

    #[test]
    fn ordinary_thithis_have_no_restriction() {
        for number in [1u8, 5, 8, 14, 20, 28] {
            let pos = thithi_from_angle((number as f64 - 1.0) * 12.0 + 6.0);
            assert_eq!(food_guidance_for_thithi(pos.name), FoodGuidance::Regular);
        }
    }
}
