use serde::{Deserialize, Serialize};

use crate::core::{BarValue, ChartConfig};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawPrimitive;

use super::layout_engine::layout;

pub const LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutJsonContractV1 {
    pub schema_version: u32,
    pub primitives: Vec<DrawPrimitive>,
}

impl LayoutJsonContractV1 {
    #[must_use]
    pub fn new(primitives: Vec<DrawPrimitive>) -> Self {
        Self {
            schema_version: LAYOUT_JSON_SCHEMA_V1,
            primitives,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare primitive array or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(primitives) = serde_json::from_str::<Vec<DrawPrimitive>>(input) {
            return Ok(Self::new(primitives));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

/// Lays out `values` and serializes the primitives as a v1 contract.
pub fn layout_json_contract_v1_pretty(
    config: &ChartConfig,
    values: &[BarValue],
) -> ChartResult<String> {
    LayoutJsonContractV1::new(layout(config, values)?).to_json_pretty()
}

impl ChartConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

/// Parses a JSON array of bar values and validates each one.
pub fn bar_values_from_json_str(input: &str) -> ChartResult<Vec<BarValue>> {
    let values: Vec<BarValue> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse bar values: {e}")))?;
    for value in &values {
        value.validate()?;
    }
    Ok(values)
}
