//! Label table for the classifier's output indices, plus the catalog of
//! species the app carries richer descriptions for.

/// Display labels, ordered by model class index.
pub const MUSHROOM_LABELS: &[&str] = &[
    "Almond Mushroom",
    "Bay Bolete",
    "Birch Polypore",
    "Chanterelle",
    "Chicken Of The Woods",
    "Common Puffball",
    "Death Cap",
    "Destroying Angel",
    "Fly Agaric",
    "Giant Puffball",
    "Hen Of The Woods",
    "Honey Fungus",
    "Horse Mushroom",
    "King Bolete",
    "Liberty Cap",
    "Morel",
    "Oyster Mushroom",
    "Parasol Mushroom",
    "Shaggy Ink Cap",
    "Turkey Tail",
];

/// Label for a model class index. Indices outside the table map to a
/// placeholder rather than failing the capture cycle.
pub fn label_for(index: usize) -> String {
    MUSHROOM_LABELS
        .get(index)
        .map(|label| label.to_string())
        .unwrap_or_else(|| "Unknown Species".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesKind {
    Edible,
    Toxic,
    Psychoactive,
    Rare,
    Deadly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub name: &'static str,
    pub scientific: &'static str,
    pub kind: SpeciesKind,
    pub description: &'static str,
}

const SPECIES_CATALOG: &[SpeciesInfo] = &[
    SpeciesInfo {
        name: "Common Puffball",
        scientific: "Lycoperdon perlatum",
        kind: SpeciesKind::Edible,
        description: "A medium-sized puffball mushroom with a wide distribution. \
            Must be pure white inside to be edible.",
    },
    SpeciesInfo {
        name: "Fly Agaric",
        scientific: "Amanita muscaria",
        kind: SpeciesKind::Toxic,
        description: "The iconic red mushroom with white spots. \
            Contains ibotenic acid; highly recognizable but dangerous.",
    },
    SpeciesInfo {
        name: "Death Cap",
        scientific: "Amanita phalloides",
        kind: SpeciesKind::Deadly,
        description: "One of the most poisonous mushrooms in the world. \
            Often mistaken for edible paddy straw mushrooms.",
    },
    SpeciesInfo {
        name: "Chanterelle",
        scientific: "Cantharellus cibarius",
        kind: SpeciesKind::Edible,
        description: "A prized golden funnel-shaped mushroom with false gills.",
    },
    SpeciesInfo {
        name: "Liberty Cap",
        scientific: "Psilocybe semilanceata",
        kind: SpeciesKind::Psychoactive,
        description: "A small bell-capped grassland mushroom.",
    },
];

/// Catalog lookup by display label, case-insensitive.
pub fn species_info(label: &str) -> Option<&'static SpeciesInfo> {
    SPECIES_CATALOG
        .iter()
        .find(|info| info.name.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_known_index() {
        assert_eq!(label_for(3), "Chanterelle");
        assert_eq!(label_for(0), "Almond Mushroom");
    }

    #[test]
    fn test_label_for_out_of_range_index() {
        assert_eq!(label_for(MUSHROOM_LABELS.len()), "Unknown Species");
        assert_eq!(label_for(usize::MAX), "Unknown Species");
    }

    #[test]
    fn test_species_info_lookup() {
        let info = species_info("death cap").unwrap();
        assert_eq!(info.scientific, "Amanita phalloides");
        assert_eq!(info.kind, SpeciesKind::Deadly);
    }

    #[test]
    fn test_species_info_unknown_label() {
        assert!(species_info("Turkey Tail").is_none());
    }
}
