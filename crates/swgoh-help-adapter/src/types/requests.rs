/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{Collection, Language};

/// One ally code or a list of them.
///
/// Endpoints expect a list; a bare code is wrapped by [`AllyCodes::normalized`]
/// before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllyCodes {
    One(u64),
    Many(Vec<u64>),
}

impl AllyCodes {
    pub fn normalized(self) -> Self {
        match self {
            AllyCodes::One(code) => AllyCodes::Many(vec![code]),
            many => many,
        }
    }

    pub fn as_slice(&self) -> &[u64] {
        match self {
            AllyCodes::One(code) => std::slice::from_ref(code),
            AllyCodes::Many(codes) => codes,
        }
    }
}

impl From<u64> for AllyCodes {
    fn from(code: u64) -> Self {
        AllyCodes::One(code)
    }
}

impl From<Vec<u64>> for AllyCodes {
    fn from(codes: Vec<u64>) -> Self {
        AllyCodes::Many(codes)
    }
}

impl<const N: usize> From<[u64; N]> for AllyCodes {
    fn from(codes: [u64; N]) -> Self {
        AllyCodes::Many(codes.to_vec())
    }
}

/// Request body for `/swgoh/player`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRequest {
    pub allycodes: AllyCodes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
}

impl PlayerRequest {
    pub fn new(allycodes: impl Into<AllyCodes>) -> Self {
        Self {
            allycodes: allycodes.into(),
            language: None,
            enums: None,
            project: None,
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn project(mut self, project: Value) -> Self {
        self.project = Some(project);
        self
    }
}

/// Request body for `/swgoh/guild`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildRequest {
    pub allycode: u64,
    /// Replace the guild roster with full player profiles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<bool>,
    /// With `roster`, replace it with a guild-wide units report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<bool>,
    /// With `units`, include unit mods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
}

impl GuildRequest {
    pub fn new(allycode: u64) -> Self {
        Self {
            allycode,
            roster: None,
            units: None,
            mods: None,
            language: None,
            enums: None,
            project: None,
        }
    }
}

/// Request body for `/swgoh/units`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitsRequest {
    pub allycodes: AllyCodes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
}

impl UnitsRequest {
    pub fn new(allycodes: impl Into<AllyCodes>) -> Self {
        Self {
            allycodes: allycodes.into(),
            mods: None,
            language: None,
            enums: None,
            project: None,
        }
    }
}

/// Request body for `/swgoh/events`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
}

/// Request body for `/swgoh/battles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattlesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
}

/// Request body for `/swgoh/data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRequest {
    pub collection: Collection,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
}

impl DataRequest {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            match_: None,
            language: None,
            enums: None,
            project: None,
        }
    }
}
