//! Natural (naisargika) graha relationships and classifications.
//!
//! Three fixed tables drive the favorability model: the naisargika
//! friendship matrix between grahas, the benefic/malefic nature of each
//! graha, and the functional category of each house counted from the
//! lagna. All three are universal constants, not chart-dependent.

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maitri {
    Friend,
    Enemy,
    Neutral,
}

impl Maitri {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::Enemy => "Enemy",
            Self::Neutral => "Neutral",
        }
    }
}

/// Naisargika (natural) maitri of `graha` toward `other`.
///
/// The classical fixed table. A graha is Neutral toward itself, and the
/// nodes Rahu/Ketu are Neutral toward everything (and everything toward
/// them). Note the table is not symmetric: Chandra counts Surya a friend
/// while Surya counts Chandra a friend too, but e.g. Buddh is an enemy
/// of Chandra while Chandra holds no enemies.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> Maitri {
    if graha as u8 == other as u8 {
        return Maitri::Neutral;
    }
    match graha {
        Graha::Surya => match other {
            Graha::Chandra | Graha::Mangal | Graha::Guru => Maitri::Friend,
            Graha::Shukra | Graha::Shani => Maitri::Enemy,
            _ => Maitri::Neutral,
        },
        Graha::Chandra => match other {
            Graha::Surya | Graha::Buddh => Maitri::Friend,
            _ => Maitri::Neutral,
        },
        Graha::Mangal => match other {
            Graha::Surya | Graha::Chandra | Graha::Guru => Maitri::Friend,
            Graha::Buddh => Maitri::Enemy,
            _ => Maitri::Neutral,
        },
        Graha::Buddh => match other {
            Graha::Surya | Graha::Shukra => Maitri::Friend,
            Graha::Chandra => Maitri::Enemy,
            _ => Maitri::Neutral,
        },
        Graha::Guru => match other {
            Graha::Surya | Graha::Chandra | Graha::Mangal => Maitri::Friend,
            Graha::Buddh | Graha::Shukra => Maitri::Enemy,
            _ => Maitri::Neutral,
        },
        Graha::Shukra => match other {
            Graha::Buddh | Graha::Shani => Maitri::Friend,
            Graha::Surya | Graha::Chandra => Maitri::Enemy,
            _ => Maitri::Neutral,
        },
        Graha::Shani => match other {
            Graha::Buddh | Graha::Shukra => Maitri::Friend,
            Graha::Surya | Graha::Chandra | Graha::Mangal => Maitri::Enemy,
            _ => Maitri::Neutral,
        },
        Graha::Rahu | Graha::Ketu => Maitri::Neutral,
    }
}

/// Natural benefic/malefic classification of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyNature {
    Benefic,
    Malefic,
    Neutral,
}

impl BodyNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Benefic => "Benefic",
            Self::Malefic => "Malefic",
            Self::Neutral => "Neutral",
        }
    }
}

/// Natural nature of a graha: Chandra, Buddh, Guru and Shukra are
/// benefic; Surya, Mangal and Shani malefic; the nodes neutral.
pub const fn natural_nature(graha: Graha) -> BodyNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BodyNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani => BodyNature::Malefic,
        Graha::Rahu | Graha::Ketu => BodyNature::Neutral,
    }
}

/// Affinity of a graha for a rashi: the graha's naisargika maitri toward
/// the rashi's lord. Own sign comes out Neutral (self-maitri is Neutral).
pub const fn sign_affinity(graha: Graha, rashi: Rashi) -> Maitri {
    naisargika_maitri(graha, rashi_lord(rashi))
}

/// Functional category of a house counted from the lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseCategory {
    /// Houses 6, 8, 12.
    Dusthana,
    /// Houses 1, 5, 9.
    Trikona,
    /// Houses 1, 4, 7, 10.
    Kendra,
    /// Houses 2, 3, 11.
    Other,
}

impl HouseCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dusthana => "Dusthana",
            Self::Trikona => "Trikona",
            Self::Kendra => "Kendra",
            Self::Other => "Other",
        }
    }
}

/// Category of a 1-based house number.
///
/// Precedence when sets overlap: Dusthana beats Trikona beats Kendra,
/// so house 1 classifies as Trikona even though it is also a kendra.
pub const fn house_category(house: u8) -> HouseCategory {
    match house {
        6 | 8 | 12 => HouseCategory::Dusthana,
        1 | 5 | 9 => HouseCategory::Trikona,
        4 | 7 | 10 => HouseCategory::Kendra,
        _ => HouseCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    #[test]
    fn self_maitri_is_neutral() {
        for g in ALL_GRAHAS {
            assert_eq!(naisargika_maitri(g, g), Maitri::Neutral);
        }
    }

    #[test]
    fn nodes_always_neutral() {
        for g in ALL_GRAHAS {
            assert_eq!(naisargika_maitri(Graha::Rahu, g), Maitri::Neutral);
            assert_eq!(naisargika_maitri(Graha::Ketu, g), Maitri::Neutral);
            assert_eq!(naisargika_maitri(g, Graha::Rahu), Maitri::Neutral);
            assert_eq!(naisargika_maitri(g, Graha::Ketu), Maitri::Neutral);
        }
    }

    #[test]
    fn classical_friendships() {
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Guru), Maitri::Friend);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Shani), Maitri::Enemy);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Buddh), Maitri::Neutral);
        assert_eq!(naisargika_maitri(Graha::Shani, Graha::Shukra), Maitri::Friend);
        assert_eq!(naisargika_maitri(Graha::Guru, Graha::Shukra), Maitri::Enemy);
    }

    #[test]
    fn asymmetric_pairs() {
        // Chandra holds no enemies, but Buddh counts Chandra an enemy.
        assert_eq!(naisargika_maitri(Graha::Chandra, Graha::Buddh), Maitri::Friend);
        assert_eq!(naisargika_maitri(Graha::Buddh, Graha::Chandra), Maitri::Enemy);
    }

    #[test]
    fn chandra_has_no_enemies() {
        for g in ALL_GRAHAS {
            assert_ne!(naisargika_maitri(Graha::Chandra, g), Maitri::Enemy);
        }
    }

    #[test]
    fn nature_partition() {
        let benefics: Vec<_> = ALL_GRAHAS
            .iter()
            .filter(|g| natural_nature(**g) == BodyNature::Benefic)
            .collect();
        let malefics: Vec<_> = ALL_GRAHAS
            .iter()
            .filter(|g| natural_nature(**g) == BodyNature::Malefic)
            .collect();
        assert_eq!(benefics.len(), 4);
        assert_eq!(malefics.len(), 3);
    }

    #[test]
    fn sign_affinity_via_lord() {
        // Simha is ruled by Surya; Guru counts Surya a friend.
        assert_eq!(sign_affinity(Graha::Guru, Rashi::Simha), Maitri::Friend);
        // Makara is ruled by Shani; Surya counts Shani an enemy.
        assert_eq!(sign_affinity(Graha::Surya, Rashi::Makara), Maitri::Enemy);
        // Own sign is Neutral.
        assert_eq!(sign_affinity(Graha::Mangal, Rashi::Mesha), Maitri::Neutral);
    }

    #[test]
    fn house_category_precedence() {
        // House 1 is both trikona and kendra; trikona wins.
        assert_eq!(house_category(1), HouseCategory::Trikona);
        assert_eq!(house_category(6), HouseCategory::Dusthana);
        assert_eq!(house_category(8), HouseCategory::Dusthana);
        assert_eq!(house_category(12), HouseCategory::Dusthana);
        assert_eq!(house_category(5), HouseCategory::Trikona);
        assert_eq!(house_category(9), HouseCategory::Trikona);
        assert_eq!(house_category(4), HouseCategory::Kendra);
        assert_eq!(house_category(7), HouseCategory::Kendra);
        assert_eq!(house_category(10), HouseCategory::Kendra);
        assert_eq!(house_category(2), HouseCategory::Other);
        assert_eq!(house_category(3), HouseCategory::Other);
        assert_eq!(house_category(11), HouseCategory::Other);
    }
}
