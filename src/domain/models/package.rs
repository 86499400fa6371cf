use serde::{Deserialize, Serialize};
use std::fmt;

pub const KIDS_SLOTS: &[&str] = &["11:00–14:00", "15:00–18:00"];
pub const NIGHT_SLOTS: &[&str] = &["20:00–02:00"];
pub const TEEN_SLOTS_3H: &[&str] = &["20:00–23:00", "21:00–00:00", "22:00–01:00"];
pub const TEEN_SLOTS_4H: &[&str] = &["20:00–00:00", "21:00–01:00", "22:00–02:00"];
pub const TEEN_SLOTS_ALL: &[&str] = &[
    "20:00–23:00",
    "21:00–00:00",
    "22:00–01:00",
    "20:00–00:00",
    "21:00–01:00",
    "22:00–02:00",
];

/// Daytime + night slots. The calendar "fullness" indicator counts against
/// this set, matching what a single day can physically hold.
pub const ALL_DAY_SLOTS: &[&str] = &["11:00–14:00", "15:00–18:00", "20:00–02:00"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKey {
    Kids,
    Teen,
    Adult,
    Eighteen,
    Baby,
    Gender,
    Premium,
}

impl PackageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageKey::Kids => "kids",
            PackageKey::Teen => "teen",
            PackageKey::Adult => "adult",
            PackageKey::Eighteen => "eighteen",
            PackageKey::Baby => "baby",
            PackageKey::Gender => "gender",
            PackageKey::Premium => "premium",
        }
    }

    pub fn parse(s: &str) -> Option<PackageKey> {
        match s {
            "kids" => Some(PackageKey::Kids),
            "teen" => Some(PackageKey::Teen),
            "adult" => Some(PackageKey::Adult),
            "eighteen" => Some(PackageKey::Eighteen),
            "baby" => Some(PackageKey::Baby),
            "gender" => Some(PackageKey::Gender),
            "premium" => Some(PackageKey::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Open,
    Closed,
}

impl SpaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceType::Open => "open",
            SpaceType::Closed => "closed",
        }
    }
}

/// Teen parties come in two lengths; the choice picks the candidate slot set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeenDuration {
    ThreeHours,
    FourHours,
}

impl TeenDuration {
    pub fn from_hours(hours: u8) -> Option<TeenDuration> {
        match hours {
            3 => Some(TeenDuration::ThreeHours),
            4 => Some(TeenDuration::FourHours),
            _ => None,
        }
    }

    pub fn hours(&self) -> u32 {
        match self {
            TeenDuration::ThreeHours => 3,
            TeenDuration::FourHours => 4,
        }
    }

    pub fn slots(&self) -> &'static [&'static str] {
        match self {
            TeenDuration::ThreeHours => TEEN_SLOTS_3H,
            TeenDuration::FourHours => TEEN_SLOTS_4H,
        }
    }
}

/// A fixed venue offering. The catalog is defined at process start and never
/// mutated.
#[derive(Debug, Serialize)]
pub struct Package {
    pub key: PackageKey,
    pub name: &'static str,
    pub duration: &'static str,
    pub inclusions: &'static [&'static str],
    pub slots: &'static [&'static str],
    pub max_guests_open: u32,
    pub max_guests_closed: u32,
}

static CATALOG: &[Package] = &[
    Package {
        key: PackageKey::Kids,
        name: "Kids' Birthday",
        duration: "3h",
        inclusions: &[
            "air conditioning",
            "heating",
            "parking",
            "playground",
            "trampoline",
            "kids' entertainment",
            "glassware (adults)",
            "plastic cups (kids)",
            "bar counter",
            "sound system",
        ],
        slots: KIDS_SLOTS,
        max_guests_open: 200,
        max_guests_closed: 70,
    },
    Package {
        key: PackageKey::Teen,
        name: "Teen Party",
        duration: "3h / 4h",
        inclusions: &[
            "15 standard bar tables",
            "tablecloths",
            "air conditioning",
            "heating",
            "parking",
            "glassware (adults)",
            "plastic cups (kids)",
            "bar counter",
            "sound system",
        ],
        slots: TEEN_SLOTS_ALL,
        max_guests_open: 200,
        max_guests_closed: 70,
    },
    Package {
        key: PackageKey::Adult,
        name: "Adult Party",
        duration: "6h",
        inclusions: &[
            "15 standard bar tables",
            "tablecloths",
            "air conditioning",
            "heating",
            "parking",
            "glassware",
            "sound system",
        ],
        slots: NIGHT_SLOTS,
        max_guests_open: 200,
        max_guests_closed: 70,
    },
    Package {
        key: PackageKey::Eighteen,
        name: "18th Birthday",
        duration: "6h",
        inclusions: &[
            "15 standard bar tables",
            "tablecloths",
            "air conditioning",
            "heating",
            "parking",
            "glassware",
            "bar counter",
            "sound system",
        ],
        slots: NIGHT_SLOTS,
        max_guests_open: 200,
        max_guests_closed: 70,
    },
    Package {
        key: PackageKey::Baby,
        name: "Birth Celebration",
        duration: "6h",
        inclusions: &[
            "15 standard bar tables",
            "tablecloths",
            "air conditioning",
            "heating",
            "parking",
            "glassware",
            "sound system",
        ],
        slots: NIGHT_SLOTS,
        max_guests_open: 200,
        max_guests_closed: 70,
    },
    Package {
        key: PackageKey::Gender,
        name: "Gender Reveal",
        duration: "6h",
        inclusions: &[
            "15 standard bar tables",
            "tablecloths",
            "air conditioning",
            "heating",
            "parking",
            "glassware",
            "sound system",
        ],
        slots: NIGHT_SLOTS,
        max_guests_open: 200,
        max_guests_closed: 70,
    },
    Package {
        key: PackageKey::Premium,
        name: "Premium Celebrations",
        duration: "custom",
        inclusions: &[
            "everything arranged in person",
            "seated guests only",
            "formal events",
            "parking",
            "air conditioning",
            "heating",
        ],
        slots: NIGHT_SLOTS,
        max_guests_open: 120,
        max_guests_closed: 70,
    },
];

pub fn catalog() -> &'static [Package] {
    CATALOG
}

impl Package {
    pub fn get(key: PackageKey) -> &'static Package {
        CATALOG
            .iter()
            .find(|p| p.key == key)
            .expect("catalog covers every package key")
    }

    pub fn max_guests(&self, space: SpaceType) -> u32 {
        match space {
            SpaceType::Open => self.max_guests_open,
            SpaceType::Closed => self.max_guests_closed,
        }
    }
}
