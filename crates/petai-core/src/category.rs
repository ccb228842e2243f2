//! Business categories and their Places provider query mapping.

use serde::{Deserialize, Serialize};

/// A user-facing business category filter for nearby search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCategory {
    All,
    Veterinary,
    Grooming,
    Training,
    Hotel,
    Daycare,
    Cafe,
    PetShop,
    Insurance,
}

impl SearchCategory {
    pub const ALL_VARIANTS: [SearchCategory; 9] = [
        SearchCategory::All,
        SearchCategory::Veterinary,
        SearchCategory::Grooming,
        SearchCategory::Training,
        SearchCategory::Hotel,
        SearchCategory::Daycare,
        SearchCategory::Cafe,
        SearchCategory::PetShop,
        SearchCategory::Insurance,
    ];

    /// Looks up a category by its wire key. Returns `None` for unknown keys;
    /// callers decide how to fall back.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL_VARIANTS
            .into_iter()
            .find(|c| c.key() == key.trim())
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SearchCategory::All => "all",
            SearchCategory::Veterinary => "veterinary",
            SearchCategory::Grooming => "grooming",
            SearchCategory::Training => "training",
            SearchCategory::Hotel => "hotel",
            SearchCategory::Daycare => "daycare",
            SearchCategory::Cafe => "cafe",
            SearchCategory::PetShop => "pet_shop",
            SearchCategory::Insurance => "insurance",
        }
    }

    /// Free-text keyword sent to the provider's nearby search.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            SearchCategory::All => "ペット",
            SearchCategory::Veterinary => "ペット 動物病院",
            SearchCategory::Grooming => "ペット トリミング 美容室",
            SearchCategory::Training => "ペット しつけ トレーニング",
            SearchCategory::Hotel => "ペット ホテル",
            SearchCategory::Daycare => "ペット 保育園 デイケア",
            SearchCategory::Cafe => "ペット カフェ",
            SearchCategory::PetShop => "ペットショップ",
            SearchCategory::Insurance => "ペット 保険",
        }
    }

    /// Provider place-type filter, when the category has a direct equivalent.
    #[must_use]
    pub fn place_type(self) -> Option<&'static str> {
        match self {
            SearchCategory::Veterinary => Some("veterinary_care"),
            SearchCategory::Cafe => Some("cafe"),
            SearchCategory::PetShop => Some("pet_store"),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Dashboard label for an analytics category key.
///
/// Covers every search category plus `funeral`, which only appears in
/// analytics. Unknown keys are returned unchanged.
#[must_use]
pub fn category_label(key: &str) -> &str {
    match key {
        "veterinary" => "동물병원",
        "grooming" => "미용실",
        "training" => "훈련소",
        "hotel" => "호텔",
        "daycare" => "유치원",
        "cafe" => "카페",
        "insurance" => "보험",
        "pet_shop" => "펫샵",
        "funeral" => "장례",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_round_trips_every_variant() {
        for category in SearchCategory::ALL_VARIANTS {
            assert_eq!(SearchCategory::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn from_key_unknown_is_none() {
        assert_eq!(SearchCategory::from_key("aquarium"), None);
        assert_eq!(SearchCategory::from_key(""), None);
    }

    #[test]
    fn place_types_only_for_mapped_categories() {
        assert_eq!(
            SearchCategory::Veterinary.place_type(),
            Some("veterinary_care")
        );
        assert_eq!(SearchCategory::PetShop.place_type(), Some("pet_store"));
        assert_eq!(SearchCategory::Grooming.place_type(), None);
        assert_eq!(SearchCategory::All.place_type(), None);
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&SearchCategory::PetShop).unwrap();
        assert_eq!(json, "\"pet_shop\"");
    }

    #[test]
    fn category_label_falls_back_to_key() {
        assert_eq!(category_label("veterinary"), "동물병원");
        assert_eq!(category_label("funeral"), "장례");
        assert_eq!(category_label("aquarium"), "aquarium");
    }
}
