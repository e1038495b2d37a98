//! Fixed catalog of business sectors an account can subscribe to. Sector ids
//! are the stable values stored in the profile; titles and descriptions are
//! presentation only.

/// One selectable business sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sector {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECTORS: [Sector; 6] = [
    Sector {
        id: "hospitality",
        title: "Hospitality",
        description: "Hotels, restaurants, guest services",
    },
    Sector {
        id: "commerce",
        title: "Commerce",
        description: "Retail, inventory, sales",
    },
    Sector {
        id: "tourism",
        title: "Tourism",
        description: "Travel packages, destinations",
    },
    Sector {
        id: "health",
        title: "Health",
        description: "Healthcare, patient care",
    },
    Sector {
        id: "agriculture",
        title: "Agriculture",
        description: "Farming, supply chain",
    },
    Sector {
        id: "others",
        title: "Others",
        description: "Custom industry solutions",
    },
];

/// Looks up a sector by id, falling back to the catch-all entry so profiles
/// carrying ids from an older catalog still render.
pub fn sector_or_default(id: &str) -> Sector {
    SECTORS
        .iter()
        .copied()
        .find(|sector| sector.id == id)
        .unwrap_or(SECTORS[SECTORS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sector_ids_are_unique() {
        let ids: HashSet<_> = SECTORS.iter().map(|sector| sector.id).collect();
        assert_eq!(ids.len(), SECTORS.len());
    }

    #[test]
    fn lookup_finds_known_sectors() {
        assert_eq!(sector_or_default("commerce").title, "Commerce");
        assert_eq!(sector_or_default("agriculture").title, "Agriculture");
    }

    #[test]
    fn lookup_falls_back_to_others() {
        assert_eq!(sector_or_default("pharmacy").id, "others");
        assert_eq!(sector_or_default("").id, "others");
    }
}
