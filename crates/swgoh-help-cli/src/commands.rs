/*
[INPUT]:  Parsed subcommands and a configured client
[OUTPUT]: Endpoint responses as JSON values
[POS]:    Command layer - maps CLI subcommands to endpoint calls
[UPDATE]: When adding subcommands or endpoint options
*/

use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;
use swgoh_help_adapter::{
    AllyCodes, BattlesRequest, Collection, DataRequest, EventsRequest, GuildRequest, Language,
    PlayerRequest, SwgohClient, UnitsRequest,
};
use tracing::info;

/// Options shared by every endpoint
#[derive(Args, Debug, Clone, Default)]
pub struct RequestOptions {
    /// Translate names, e.g. eng_us
    #[arg(long, global = true, value_parser = parse_wire_name::<Language>)]
    pub language: Option<Language>,
    /// Return enumerated items as strings
    #[arg(long, global = true)]
    pub enums: bool,
    /// Projection object, passed through verbatim (JSON)
    #[arg(long, global = true, value_parser = parse_json)]
    pub project: Option<Value>,
}

impl RequestOptions {
    fn enums(&self) -> Option<bool> {
        self.enums.then_some(true)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch player profiles
    Player {
        #[arg(required = true, value_name = "ALLY_CODE")]
        allycodes: Vec<u64>,
    },
    /// Fetch the guild of a player
    Guild {
        #[arg(value_name = "ALLY_CODE")]
        allycode: u64,
        /// Replace the roster with full player profiles
        #[arg(long)]
        roster: bool,
        /// With --roster, return a guild-wide units report
        #[arg(long)]
        units: bool,
        /// With --units, include mods
        #[arg(long)]
        mods: bool,
    },
    /// Fetch a units report
    Units {
        #[arg(required = true, value_name = "ALLY_CODE")]
        allycodes: Vec<u64>,
        /// Include unit mods
        #[arg(long)]
        mods: bool,
    },
    /// Fetch current events
    Events,
    /// Fetch campaign battles
    Battles,
    /// Fetch a reference-data collection, e.g. unitsList
    Data {
        #[arg(value_parser = parse_wire_name::<Collection>)]
        collection: Collection,
        /// Match filter (JSON)
        #[arg(long = "match", value_parser = parse_json)]
        match_: Option<Value>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Player { .. } => "player",
            Command::Guild { .. } => "guild",
            Command::Units { .. } => "units",
            Command::Events => "events",
            Command::Battles => "battles",
            Command::Data { .. } => "data",
        }
    }
}

/// Run one endpoint call and return its body as JSON
pub async fn run(
    client: &SwgohClient,
    command: Command,
    options: RequestOptions,
) -> anyhow::Result<Value> {
    let name = command.name();
    info!(command = name, "calling endpoint");

    let value = match command {
        Command::Player { allycodes } => {
            let request = PlayerRequest {
                allycodes: ally_codes(allycodes),
                language: options.language,
                enums: options.enums(),
                project: options.project.clone(),
            };
            serde_json::to_value(client.fetch_player(request).await?)?
        }
        Command::Guild {
            allycode,
            roster,
            units,
            mods,
        } => {
            let request = GuildRequest {
                allycode,
                roster: roster.then_some(true),
                units: units.then_some(true),
                mods: mods.then_some(true),
                language: options.language,
                enums: options.enums(),
                project: options.project.clone(),
            };
            serde_json::to_value(client.fetch_guild(request).await?)?
        }
        Command::Units { allycodes, mods } => {
            let request = UnitsRequest {
                allycodes: ally_codes(allycodes),
                mods: mods.then_some(true),
                language: options.language,
                enums: options.enums(),
                project: options.project.clone(),
            };
            serde_json::to_value(client.fetch_units(request).await?)?
        }
        Command::Events => {
            let request = EventsRequest {
                language: options.language,
                enums: options.enums(),
                project: options.project.clone(),
            };
            serde_json::to_value(client.fetch_events(request).await?)?
        }
        Command::Battles => {
            let request = BattlesRequest {
                language: options.language,
                enums: options.enums(),
                project: options.project.clone(),
            };
            serde_json::to_value(client.fetch_battles(request).await?)?
        }
        Command::Data {
            collection,
            match_,
        } => {
            let request = DataRequest {
                collection,
                match_,
                language: options.language,
                enums: options.enums(),
                project: options.project.clone(),
            };
            client.fetch_data(request).await?
        }
    };

    Ok(value)
}

fn ally_codes(mut codes: Vec<u64>) -> AllyCodes {
    if codes.len() == 1 {
        AllyCodes::One(codes.remove(0))
    } else {
        AllyCodes::Many(codes)
    }
}

/// Parse an enum from its wire name, e.g. `eng_us` or `unitsList`
fn parse_wire_name<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(raw.to_string()))
        .map_err(|_| format!("unknown value '{raw}'"))
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        assert_eq!(parse_wire_name::<Language>("eng_us"), Ok(Language::EngUs));
        assert_eq!(
            parse_wire_name::<Collection>("unitsList"),
            Ok(Collection::UnitsList)
        );
        assert!(parse_wire_name::<Language>("klingon").is_err());
    }

    #[test]
    fn test_single_ally_code_stays_bare() {
        assert_eq!(ally_codes(vec![1]), AllyCodes::One(1));
        assert_eq!(ally_codes(vec![1, 2]), AllyCodes::Many(vec![1, 2]));
    }

    #[test]
    fn test_parse_json() {
        assert_eq!(parse_json(r#"{"name":true}"#), Ok(serde_json::json!({"name": true})));
        assert!(parse_json("{").is_err());
    }
}
