use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{LayoutError, LayoutResult},
    layout::settings::GridSettings,
    room::model::{RoomSpec, TileModule},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A ceiling job document: the room, the chosen module and optional grid settings.
///
/// ```json
/// {
///   "room": { "width": 4000, "length": 3000 },
///   "module": { "width": 600, "length": 600 },
///   "settings": { "min_border_mm": 301 }
/// }
/// ```
pub struct CeilingJob {
    /// Room to cover.
    pub room: RoomSpec,
    /// Tile module to lay.
    pub module: TileModule,
    /// Grid constants; omitted fields take their defaults.
    #[serde(default)]
    pub settings: GridSettings,
}

/// Job document as written, before room and module dimensions are checked.
#[derive(serde::Deserialize)]
struct CeilingJobDef {
    room: DimsDef,
    module: DimsDef,
    #[serde(default)]
    settings: GridSettings,
}

#[derive(serde::Deserialize)]
struct DimsDef {
    width: f64,
    length: f64,
}

impl CeilingJobDef {
    fn into_job(self) -> LayoutResult<CeilingJob> {
        Ok(CeilingJob {
            room: RoomSpec::new(self.room.width, self.room.length)?,
            module: TileModule::new(self.module.width, self.module.length)?,
            settings: self.settings,
        })
    }
}

impl CeilingJob {
    /// Parse a job from a JSON reader.
    ///
    /// Malformed JSON is a `Serde` error; a bad room or module dimension is `InvalidInput`.
    pub fn from_reader<R: std::io::Read>(r: R) -> LayoutResult<Self> {
        let def: CeilingJobDef = serde_json::from_reader(r)
            .map_err(|e| LayoutError::serde(format!("parse job JSON: {e}")))?;
        def.into_job()
    }

    /// Parse a job from a JSON string.
    pub fn from_json_str(s: &str) -> LayoutResult<Self> {
        let def: CeilingJobDef = serde_json::from_str(s)
            .map_err(|e| LayoutError::serde(format!("parse job JSON: {e}")))?;
        def.into_job()
    }

    /// Parse a job from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the settings; room and module were checked on construction.
    pub fn validate(&self) -> LayoutResult<()> {
        self.settings.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/room/job.rs"]
mod tests;
