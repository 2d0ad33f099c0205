use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

use super::{ChartData, ChartKind, ChartOptions, draw};

pub const CHART_REQUEST_JSON_SCHEMA_V1: u32 = 1;

/// A self-contained draw request: what to draw, with which data and options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequestJsonContractV1 {
    pub schema_version: u32,
    pub request: ChartRequest,
}

impl ChartRequest {
    #[must_use]
    pub fn new(kind: ChartKind, data: ChartData, options: ChartOptions) -> Self {
        Self {
            kind,
            data,
            options,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart request json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartRequestJsonContractV1 {
            schema_version: CHART_REQUEST_JSON_SCHEMA_V1,
            request: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart request contract v1: {e}"))
        })
    }

    /// Parses either a bare request or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(request) = serde_json::from_str::<ChartRequest>(input) {
            return Ok(request);
        }
        let payload: ChartRequestJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart request json payload: {e}"))
        })?;
        if payload.schema_version != CHART_REQUEST_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart request schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.request)
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        draw(self.kind, surface, &self.data, &self.options)
    }
}
