//! Wire-level enumerations.
//!
//! Every enum reserves `0` for `Unspecified`. Values serialize as their
//! SCREAMING_SNAKE_CASE name; deserialization accepts either the name or the
//! integer value, and anything unrecognised decodes as `Unspecified`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;
use std::hash::Hash;

/// Common surface of all wire enums.
pub trait WireEnum: Copy + Eq + Hash + Debug + Default + 'static {
    /// Every specified value, in declaration order (excludes `Unspecified`).
    fn values() -> &'static [Self];
    fn as_i32(self) -> i32;
    fn from_i32(value: i32) -> Option<Self>;
    fn as_str_name(self) -> &'static str;
    fn from_str_name(name: &str) -> Option<Self>;

    fn is_unspecified(self) -> bool {
        self == Self::default()
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $value:literal => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(i32)]
        pub enum $name {
            #[default]
            Unspecified = 0,
            $($variant = $value,)+
        }

        impl WireEnum for $name {
            fn values() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_i32(self) -> i32 {
                self as i32
            }

            fn from_i32(value: i32) -> Option<Self> {
                match value {
                    0 => Some(Self::Unspecified),
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_str_name(self) -> &'static str {
                match self {
                    Self::Unspecified => "UNSPECIFIED",
                    $(Self::$variant => $wire,)+
                }
            }

            fn from_str_name(name: &str) -> Option<Self> {
                match name {
                    "UNSPECIFIED" => Some(Self::Unspecified),
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str_name())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Number(i32),
                    Name(String),
                }

                Ok(match Raw::deserialize(deserializer)? {
                    Raw::Number(value) => Self::from_i32(value).unwrap_or_default(),
                    Raw::Name(name) => Self::from_str_name(&name).unwrap_or_default(),
                })
            }
        }
    };
}

wire_enum! {
    /// Playable races.
    Race {
        Dragonborn = 1 => "DRAGONBORN",
        Dwarf = 2 => "DWARF",
        Elf = 3 => "ELF",
        Gnome = 4 => "GNOME",
        HalfElf = 5 => "HALF_ELF",
        Halfling = 6 => "HALFLING",
        HalfOrc = 7 => "HALF_ORC",
        Human = 8 => "HUMAN",
        Tiefling = 9 => "TIEFLING",
    }
}

wire_enum! {
    /// Character classes.
    Class {
        Barbarian = 1 => "BARBARIAN",
        Bard = 2 => "BARD",
        Cleric = 3 => "CLERIC",
        Druid = 4 => "DRUID",
        Fighter = 5 => "FIGHTER",
        Monk = 6 => "MONK",
        Paladin = 7 => "PALADIN",
        Ranger = 8 => "RANGER",
        Rogue = 9 => "ROGUE",
        Sorcerer = 10 => "SORCERER",
        Warlock = 11 => "WARLOCK",
        Wizard = 12 => "WIZARD",
    }
}

wire_enum! {
    Background {
        Acolyte = 1 => "ACOLYTE",
        Charlatan = 2 => "CHARLATAN",
        Criminal = 3 => "CRIMINAL",
        Entertainer = 4 => "ENTERTAINER",
        FolkHero = 5 => "FOLK_HERO",
        GuildArtisan = 6 => "GUILD_ARTISAN",
        Hermit = 7 => "HERMIT",
        Noble = 8 => "NOBLE",
        Outlander = 9 => "OUTLANDER",
        Sage = 10 => "SAGE",
        Sailor = 11 => "SAILOR",
        Soldier = 12 => "SOLDIER",
        Urchin = 13 => "URCHIN",
    }
}

wire_enum! {
    Alignment {
        LawfulGood = 1 => "LAWFUL_GOOD",
        NeutralGood = 2 => "NEUTRAL_GOOD",
        ChaoticGood = 3 => "CHAOTIC_GOOD",
        LawfulNeutral = 4 => "LAWFUL_NEUTRAL",
        TrueNeutral = 5 => "TRUE_NEUTRAL",
        ChaoticNeutral = 6 => "CHAOTIC_NEUTRAL",
        LawfulEvil = 7 => "LAWFUL_EVIL",
        NeutralEvil = 8 => "NEUTRAL_EVIL",
        ChaoticEvil = 9 => "CHAOTIC_EVIL",
    }
}

wire_enum! {
    Ability {
        Strength = 1 => "STRENGTH",
        Dexterity = 2 => "DEXTERITY",
        Constitution = 3 => "CONSTITUTION",
        Intelligence = 4 => "INTELLIGENCE",
        Wisdom = 5 => "WISDOM",
        Charisma = 6 => "CHARISMA",
    }
}

wire_enum! {
    Skill {
        Acrobatics = 1 => "ACROBATICS",
        AnimalHandling = 2 => "ANIMAL_HANDLING",
        Arcana = 3 => "ARCANA",
        Athletics = 4 => "ATHLETICS",
        Deception = 5 => "DECEPTION",
        History = 6 => "HISTORY",
        Insight = 7 => "INSIGHT",
        Intimidation = 8 => "INTIMIDATION",
        Investigation = 9 => "INVESTIGATION",
        Medicine = 10 => "MEDICINE",
        Nature = 11 => "NATURE",
        Perception = 12 => "PERCEPTION",
        Performance = 13 => "PERFORMANCE",
        Persuasion = 14 => "PERSUASION",
        Religion = 15 => "RELIGION",
        SleightOfHand = 16 => "SLEIGHT_OF_HAND",
        Stealth = 17 => "STEALTH",
        Survival = 18 => "SURVIVAL",
    }
}

wire_enum! {
    Language {
        Common = 1 => "COMMON",
        Dwarvish = 2 => "DWARVISH",
        Elvish = 3 => "ELVISH",
        Giant = 4 => "GIANT",
        Gnomish = 5 => "GNOMISH",
        Goblin = 6 => "GOBLIN",
        Halfling = 7 => "HALFLING",
        Orc = 8 => "ORC",
        Abyssal = 9 => "ABYSSAL",
        Celestial = 10 => "CELESTIAL",
        Draconic = 11 => "DRACONIC",
        DeepSpeech = 12 => "DEEP_SPEECH",
        Infernal = 13 => "INFERNAL",
        Primordial = 14 => "PRIMORDIAL",
        Sylvan = 15 => "SYLVAN",
        Undercommon = 16 => "UNDERCOMMON",
    }
}

wire_enum! {
    /// What kind of thing a choice picks.
    ChoiceCategory {
        Skills = 1 => "SKILLS",
        Languages = 2 => "LANGUAGES",
        Tools = 3 => "TOOLS",
        Feats = 4 => "FEATS",
        Equipment = 5 => "EQUIPMENT",
        Spells = 6 => "SPELLS",
        AbilityScores = 7 => "ABILITY_SCORES",
    }
}

wire_enum! {
    /// Where a choice comes from.
    ChoiceSource {
        Race = 1 => "RACE",
        Subrace = 2 => "SUBRACE",
        Class = 3 => "CLASS",
        Background = 4 => "BACKGROUND",
        Other = 5 => "OTHER",
    }
}

wire_enum! {
    /// Character creation steps, `Review` being terminal.
    CreationStep {
        Name = 1 => "NAME",
        Race = 2 => "RACE",
        Class = 3 => "CLASS",
        Background = 4 => "BACKGROUND",
        AbilityScores = 5 => "ABILITY_SCORES",
        Skills = 6 => "SKILLS",
        Review = 7 => "REVIEW",
    }
}
