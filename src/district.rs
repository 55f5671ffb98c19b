// src/district.rs
//! The 13 districts tracked by the bulletins, in canonical table order.

use std::fmt;

use crate::core::sanitize::name_key;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum District {
    Anantapur,
    Chittoor,
    EastGodavari,
    Guntur,
    Kadapa,
    Krishna,
    Kurnool,
    Nellore,
    Prakasam,
    Srikakulam,
    Visakhapatnam,
    Vizianagaram,
    WestGodavari,
}

use District::*;

impl District {
    /// Canonical order; used as the column index of every table.
    pub const ALL: [District; 13] = [
        Anantapur, Chittoor, EastGodavari, Guntur, Kadapa, Krishna, Kurnool,
        Nellore, Prakasam, Srikakulam, Visakhapatnam, Vizianagaram, WestGodavari,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn name(self) -> &'static str {
        match self {
            Anantapur => "Anantapur",
            Chittoor => "Chittoor",
            EastGodavari => "East Godavari",
            Guntur => "Guntur",
            Kadapa => "Kadapa",
            Krishna => "Krishna",
            Kurnool => "Kurnool",
            Nellore => "Nellore",
            Prakasam => "Prakasam",
            Srikakulam => "Srikakulam",
            Visakhapatnam => "Visakhapatnam",
            Vizianagaram => "Vizianagaram",
            WestGodavari => "West Godavari",
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a name as printed in a bulletin or cache file.
    /// Case, spacing and punctuation are ignored; known spellings map too.
    pub fn from_name(raw: &str) -> Option<District> {
        let key = name_key(raw);
        if key.is_empty() {
            return None;
        }
        let hit = match key.as_str() {
            "anantapur" | "anantapuram" | "ananthapur" | "ananthapuramu" | "anantapuramu" => Anantapur,
            "chittoor" | "chitoor" => Chittoor,
            "eastgodavari" | "egodavari" | "eg" => EastGodavari,
            "guntur" => Guntur,
            "kadapa" | "ysrkadapa" | "cuddapah" | "ysr" => Kadapa,
            "krishna" => Krishna,
            "kurnool" => Kurnool,
            "nellore" | "spsnellore" | "spsrnellore" => Nellore,
            "prakasam" => Prakasam,
            "srikakulam" => Srikakulam,
            "visakhapatnam" | "visakhapatanam" | "vizag" | "visakapatnam" => Visakhapatnam,
            "vizianagaram" | "vizianagram" => Vizianagaram,
            "westgodavari" | "wgodavari" | "wg" => WestGodavari,
            _ => return None,
        };
        Some(hit)
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, d) in District::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
        assert_eq!(District::COUNT, 13);
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for d in District::ALL {
            assert_eq!(District::from_name(d.name()), Some(d));
        }
    }

    #[test]
    fn bulletin_spellings_resolve() {
        assert_eq!(District::from_name("E.Godavari"), Some(EastGodavari));
        assert_eq!(District::from_name("  WEST  GODAVARI "), Some(WestGodavari));
        assert_eq!(District::from_name("YSR Kadapa"), Some(Kadapa));
        assert_eq!(District::from_name("S.P.S.R Nellore"), Some(Nellore));
        assert_eq!(District::from_name("Ananthapuramu"), Some(Anantapur));
        assert_eq!(District::from_name("Total"), None);
        assert_eq!(District::from_name(""), None);
    }
}
