/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Languages accepted for translated names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    ChsCn,
    ChtCn,
    EngUs,
    FreFr,
    GerDe,
    IndId,
    ItaIt,
    JpnJp,
    KorKr,
    PorBr,
    RusRu,
    SpaXm,
    ThaTh,
    TurTr,
}

/// Collections served by the `/swgoh/data` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    AbilityList,
    BattleEnvironmentsList,
    BattleTargetingRuleList,
    CategoryList,
    ChallengeList,
    ChallengeStyleList,
    EffectList,
    EnvironmentCollectionList,
    EquipmentList,
    EventSamplingList,
    GuildExchangeItemList,
    GuildRaidList,
    HelpEntryList,
    MaterialList,
    PlayerTitleList,
    PowerUpBundleList,
    RaidConfigList,
    RecipeList,
    RequirementList,
    SkillList,
    StarterGuildList,
    StatModList,
    StatModSetList,
    StatProgressionList,
    TableList,
    TargetingSetList,
    TerritoryBattleDefinitionList,
    TerritoryWarDefinitionList,
    UnitsList,
    UnlockAnnouncementDefinitionList,
    WarDefinitionList,
    XpTableList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_wire_names() {
        assert_eq!(serde_json::to_string(&Language::EngUs).unwrap(), r#""eng_us""#);
        assert_eq!(serde_json::to_string(&Language::ChtCn).unwrap(), r#""cht_cn""#);
        let parsed: Language = serde_json::from_str(r#""spa_xm""#).unwrap();
        assert_eq!(parsed, Language::SpaXm);
    }

    #[test]
    fn test_collection_wire_names() {
        assert_eq!(
            serde_json::to_string(&Collection::AbilityList).unwrap(),
            r#""abilityList""#
        );
        assert_eq!(
            serde_json::to_string(&Collection::UnlockAnnouncementDefinitionList).unwrap(),
            r#""unlockAnnouncementDefinitionList""#
        );
    }
}
