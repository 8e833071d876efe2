use serde::{Deserialize, Serialize};

use crate::core::TickSource;
use crate::error::{AxisError, AxisResult};
use crate::render::Renderer;

use super::{AxisConfig, AxisRenderer, AxisStyle, RenderedTick};

pub const AXIS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Summary of one detail level at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub index: usize,
    pub strength: f64,
    pub tick_count: usize,
}

/// Serializable deterministic state of a ruler, used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub config: AxisConfig,
    pub style: AxisStyle,
    pub levels: Vec<LevelSnapshot>,
    pub ticks: Vec<RenderedTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: AxisSnapshot,
}

impl AxisSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = AxisSnapshotJsonContractV1 {
            schema_version: AXIS_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize axis snapshot contract v1: {e}"))
        })
    }

    /// Accepts both the bare snapshot and the versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<AxisSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: AxisSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse axis snapshot json payload: {e}"))
        })?;
        if payload.schema_version != AXIS_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(AxisError::InvalidData(format!(
                "unsupported axis snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer, T: TickSource> AxisRenderer<R, T> {
    #[must_use]
    pub fn snapshot(&self) -> AxisSnapshot {
        let levels = (0..self.tick_source().level_count())
            .map(|index| LevelSnapshot {
                index,
                strength: self.tick_source().strength_at(index),
                tick_count: self.tick_source().ticks_at(index).len(),
            })
            .collect();

        AxisSnapshot {
            config: self.config(),
            style: self.style(),
            levels,
            ticks: self.build_ticks(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> AxisResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
