//! Bidirectional mapping between domain string ids and wire enums.
//!
//! Each wire enum has a static table built once on first use. The empty
//! string and `Unspecified` map to each other; anything not in a table maps
//! to the empty string or `Unspecified`, never to an error.

use std::collections::HashMap;
use std::sync::OnceLock;

use charforge_domain::{choice_source, choice_type};
use charforge_shared::enums::{
    Ability, Alignment, Background, ChoiceCategory, ChoiceSource, Class, Language, Race, Skill,
    WireEnum,
};

/// Invertible lookup between one wire enum and its domain ids.
#[derive(Debug)]
pub struct EnumTable<W: WireEnum> {
    to_domain: HashMap<W, &'static str>,
    to_wire: HashMap<&'static str, W>,
}

impl<W: WireEnum> EnumTable<W> {
    fn new(pairs: &[(W, &'static str)]) -> Self {
        Self {
            to_domain: pairs.iter().copied().collect(),
            to_wire: pairs.iter().map(|&(wire, id)| (id, wire)).collect(),
        }
    }

    pub fn domain_id(&self, value: W) -> &'static str {
        self.to_domain.get(&value).copied().unwrap_or("")
    }

    pub fn wire(&self, domain_id: &str) -> W {
        self.to_wire.get(domain_id).copied().unwrap_or_default()
    }
}

/// Conversion between a wire enum and domain string ids.
pub trait DomainIdMapping: WireEnum {
    fn table() -> &'static EnumTable<Self>;

    /// Domain id for this value; `""` for `Unspecified`.
    fn to_domain_id(self) -> &'static str {
        Self::table().domain_id(self)
    }

    /// Wire value for a domain id; `Unspecified` for `""` and unknown ids.
    fn from_domain_id(domain_id: &str) -> Self {
        Self::table().wire(domain_id)
    }
}

macro_rules! domain_ids {
    ($wire:ident { $($variant:ident => $id:expr),+ $(,)? }) => {
        impl DomainIdMapping for $wire {
            fn table() -> &'static EnumTable<Self> {
                static TABLE: OnceLock<EnumTable<$wire>> = OnceLock::new();
                TABLE.get_or_init(|| EnumTable::new(&[$(($wire::$variant, $id)),+]))
            }
        }
    };
}

domain_ids!(Race {
    Dragonborn => "dragonborn",
    Dwarf => "dwarf",
    Elf => "elf",
    Gnome => "gnome",
    HalfElf => "half-elf",
    Halfling => "halfling",
    HalfOrc => "half-orc",
    Human => "human",
    Tiefling => "tiefling",
});

domain_ids!(Class {
    Barbarian => "barbarian",
    Bard => "bard",
    Cleric => "cleric",
    Druid => "druid",
    Fighter => "fighter",
    Monk => "monk",
    Paladin => "paladin",
    Ranger => "ranger",
    Rogue => "rogue",
    Sorcerer => "sorcerer",
    Warlock => "warlock",
    Wizard => "wizard",
});

domain_ids!(Background {
    Acolyte => "acolyte",
    Charlatan => "charlatan",
    Criminal => "criminal",
    Entertainer => "entertainer",
    FolkHero => "folk-hero",
    GuildArtisan => "guild-artisan",
    Hermit => "hermit",
    Noble => "noble",
    Outlander => "outlander",
    Sage => "sage",
    Sailor => "sailor",
    Soldier => "soldier",
    Urchin => "urchin",
});

domain_ids!(Alignment {
    LawfulGood => "lawful-good",
    NeutralGood => "neutral-good",
    ChaoticGood => "chaotic-good",
    LawfulNeutral => "lawful-neutral",
    TrueNeutral => "true-neutral",
    ChaoticNeutral => "chaotic-neutral",
    LawfulEvil => "lawful-evil",
    NeutralEvil => "neutral-evil",
    ChaoticEvil => "chaotic-evil",
});

domain_ids!(Ability {
    Strength => "str",
    Dexterity => "dex",
    Constitution => "con",
    Intelligence => "int",
    Wisdom => "wis",
    Charisma => "cha",
});

domain_ids!(Skill {
    Acrobatics => "acrobatics",
    AnimalHandling => "animal-handling",
    Arcana => "arcana",
    Athletics => "athletics",
    Deception => "deception",
    History => "history",
    Insight => "insight",
    Intimidation => "intimidation",
    Investigation => "investigation",
    Medicine => "medicine",
    Nature => "nature",
    Perception => "perception",
    Performance => "performance",
    Persuasion => "persuasion",
    Religion => "religion",
    SleightOfHand => "sleight-of-hand",
    Stealth => "stealth",
    Survival => "survival",
});

domain_ids!(Language {
    Common => "common",
    Dwarvish => "dwarvish",
    Elvish => "elvish",
    Giant => "giant",
    Gnomish => "gnomish",
    Goblin => "goblin",
    Halfling => "halfling",
    Orc => "orc",
    Abyssal => "abyssal",
    Celestial => "celestial",
    Draconic => "draconic",
    DeepSpeech => "deep-speech",
    Infernal => "infernal",
    Primordial => "primordial",
    Sylvan => "sylvan",
    Undercommon => "undercommon",
});

domain_ids!(ChoiceCategory {
    Skills => choice_type::SKILL,
    Languages => choice_type::LANGUAGE,
    Tools => choice_type::TOOL,
    Feats => choice_type::FEAT,
    Equipment => choice_type::EQUIPMENT,
    Spells => choice_type::SPELL,
    AbilityScores => choice_type::ABILITY_SCORE,
});

domain_ids!(ChoiceSource {
    Race => choice_source::RACE,
    Subrace => choice_source::SUBRACE,
    Class => choice_source::CLASS,
    Background => choice_source::BACKGROUND,
    Other => choice_source::OTHER,
});

/// Map a list of domain ids, dropping ids that have no wire value.
pub fn wire_values<W: DomainIdMapping>(domain_ids: &[String]) -> Vec<W> {
    domain_ids
        .iter()
        .map(|id| W::from_domain_id(id))
        .filter(|w| !w.is_unspecified())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trips<W: DomainIdMapping>() {
        for &value in W::values() {
            let id = value.to_domain_id();
            assert!(!id.is_empty(), "{value:?} has no domain id");
            assert_eq!(W::from_domain_id(id), value);
            assert_eq!(W::from_domain_id(id).to_domain_id(), id);
        }
        assert_eq!(W::default().to_domain_id(), "");
        assert_eq!(W::from_domain_id(""), W::default());
    }

    #[test]
    fn every_enum_round_trips() {
        assert_round_trips::<Race>();
        assert_round_trips::<Class>();
        assert_round_trips::<Background>();
        assert_round_trips::<Alignment>();
        assert_round_trips::<Ability>();
        assert_round_trips::<Skill>();
        assert_round_trips::<Language>();
        assert_round_trips::<ChoiceCategory>();
        assert_round_trips::<ChoiceSource>();
    }

    #[test]
    fn multi_word_ids_use_kebab_case() {
        assert_eq!(Race::HalfElf.to_domain_id(), "half-elf");
        assert_eq!(Background::FolkHero.to_domain_id(), "folk-hero");
        assert_eq!(Skill::from_domain_id("sleight-of-hand"), Skill::SleightOfHand);
        assert_eq!(Language::DeepSpeech.to_domain_id(), "deep-speech");
        assert_eq!(ChoiceCategory::AbilityScores.to_domain_id(), "ability-score");
    }

    #[test]
    fn unknown_values_map_to_unspecified() {
        assert_eq!(Race::from_domain_id("warforged"), Race::Unspecified);
        assert_eq!(Race::from_i32(42).unwrap_or_default().to_domain_id(), "");
        assert_eq!(Race::from_i32(8).unwrap_or_default().to_domain_id(), "human");
    }

    #[test]
    fn wire_values_drops_unknown_ids() {
        let ids = vec!["common".to_string(), "klingon".to_string(), "elvish".to_string()];
        assert_eq!(
            wire_values::<Language>(&ids),
            vec![Language::Common, Language::Elvish]
        );
    }
}
