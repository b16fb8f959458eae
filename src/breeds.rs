use serde::{Deserialize, Serialize};

/// Category of a breed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreedCategory {
    Cattle,
    Buffalo,
}

impl BreedCategory {
    pub fn as_str(&self) -> &str {
        match self {
            BreedCategory::Cattle => "cattle",
            BreedCategory::Buffalo => "buffalo",
        }
    }
}

/// Target breeds for the Indian cattle/buffalo context.
///
/// The label set is fixed at build time; the classifier downstream is trained
/// against exactly these 43 names.
pub const TARGET_BREEDS: &[(&str, BreedCategory)] = &[
    // Cattle breeds
    ("Gir", BreedCategory::Cattle),
    ("Sahiwal", BreedCategory::Cattle),
    ("Red_Sindhi", BreedCategory::Cattle),
    ("Tharparkar", BreedCategory::Cattle),
    ("Rathi", BreedCategory::Cattle),
    ("Hariana", BreedCategory::Cattle),
    ("Kankrej", BreedCategory::Cattle),
    ("Ongole", BreedCategory::Cattle),
    ("Krishna_Valley", BreedCategory::Cattle),
    ("Deoni", BreedCategory::Cattle),
    ("Khillari", BreedCategory::Cattle),
    ("Malvi", BreedCategory::Cattle),
    ("Nimari", BreedCategory::Cattle),
    ("Nagori", BreedCategory::Cattle),
    ("Mewati", BreedCategory::Cattle),
    ("Ponwar", BreedCategory::Cattle),
    ("Bachaur", BreedCategory::Cattle),
    ("Gaolao", BreedCategory::Cattle),
    ("Dangi", BreedCategory::Cattle),
    ("Amritmahal", BreedCategory::Cattle),
    ("Hallikar", BreedCategory::Cattle),
    ("Kangayam", BreedCategory::Cattle),
    ("Pulikulam", BreedCategory::Cattle),
    ("Umblachery", BreedCategory::Cattle),
    ("Vechur", BreedCategory::Cattle),
    ("Kasaragod", BreedCategory::Cattle),
    ("Holstein_Friesian", BreedCategory::Cattle),
    ("Jersey", BreedCategory::Cattle),
    ("Brown_Swiss", BreedCategory::Cattle),
    ("Crossbred", BreedCategory::Cattle),
    // Buffalo breeds
    ("Murrah", BreedCategory::Buffalo),
    ("Nili_Ravi", BreedCategory::Buffalo),
    ("Bhadawari", BreedCategory::Buffalo),
    ("Jaffarabadi", BreedCategory::Buffalo),
    ("Mehsana", BreedCategory::Buffalo),
    ("Nagpuri", BreedCategory::Buffalo),
    ("Pandharpuri", BreedCategory::Buffalo),
    ("Toda", BreedCategory::Buffalo),
    ("Chilika", BreedCategory::Buffalo),
    ("Kalahandi", BreedCategory::Buffalo),
    ("Marathwadi", BreedCategory::Buffalo),
    ("Godavari", BreedCategory::Buffalo),
    ("Surti", BreedCategory::Buffalo),
];

/// Look up the category for a breed name.
pub fn breed_category(name: &str) -> Option<BreedCategory> {
    TARGET_BREEDS
        .iter()
        .find(|(breed, _)| *breed == name)
        .map(|(_, category)| *category)
}

/// Breed names in alphabetical order, the order class ids are assigned in.
pub fn breed_names_sorted() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = TARGET_BREEDS.iter().map(|(breed, _)| *breed).collect();
    names.sort_unstable();
    names
}

pub fn cattle_count() -> usize {
    TARGET_BREEDS
        .iter()
        .filter(|(_, category)| *category == BreedCategory::Cattle)
        .count()
}

pub fn buffalo_count() -> usize {
    TARGET_BREEDS
        .iter()
        .filter(|(_, category)| *category == BreedCategory::Buffalo)
        .count()
}
