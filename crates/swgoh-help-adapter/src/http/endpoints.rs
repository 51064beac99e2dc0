/*
[INPUT]:  Typed endpoint requests
[OUTPUT]: Typed endpoint responses
[POS]:    HTTP layer - /swgoh/{resource}/ data endpoints (bearer token required)
[UPDATE]: When adding new endpoints or changing request normalization
*/

use serde_json::Value;

use crate::http::{Result, SwgohClient};
use crate::types::{
    BattlesRequest, BattlesResponse, DataRequest, EventsRequest, EventsResponse, GuildRequest,
    GuildResponse, PlayerRequest, PlayerResponse, UnitsRequest, UnitsResponse,
};

impl SwgohClient {
    /// Fetch player profiles
    ///
    /// POST /swgoh/player/
    pub async fn fetch_player(&self, mut req: PlayerRequest) -> Result<Vec<PlayerResponse>> {
        req.allycodes = req.allycodes.normalized();
        let url = self.endpoint_url("/swgoh/player/")?;
        self.send(url, &req).await
    }

    /// Fetch guild profiles
    ///
    /// POST /swgoh/guild/
    pub async fn fetch_guild(&self, req: GuildRequest) -> Result<Vec<GuildResponse>> {
        let url = self.endpoint_url("/swgoh/guild/")?;
        self.send(url, &req).await
    }

    /// Fetch a units report, keyed by unit id
    ///
    /// POST /swgoh/units/
    pub async fn fetch_units(&self, mut req: UnitsRequest) -> Result<UnitsResponse> {
        req.allycodes = req.allycodes.normalized();
        let url = self.endpoint_url("/swgoh/units/")?;
        self.send(url, &req).await
    }

    /// Fetch current events
    ///
    /// POST /swgoh/events/
    pub async fn fetch_events(&self, req: EventsRequest) -> Result<EventsResponse> {
        let url = self.endpoint_url("/swgoh/events/")?;
        self.send(url, &req).await
    }

    /// Fetch campaign battles
    ///
    /// POST /swgoh/battles/
    pub async fn fetch_battles(&self, req: BattlesRequest) -> Result<BattlesResponse> {
        let url = self.endpoint_url("/swgoh/battles/")?;
        self.send(url, &req).await
    }

    /// Fetch a reference-data collection. The shape depends on the collection.
    ///
    /// POST /swgoh/data/
    pub async fn fetch_data(&self, req: DataRequest) -> Result<Value> {
        let url = self.endpoint_url("/swgoh/data/")?;
        self.send(url, &req).await
    }
}
