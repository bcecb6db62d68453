use std::error::Error;
use std::fs;
use std::path::Path;

use maze_geom::{Transform, Vec3};
use maze_grid::BlockerVolume;
use maze_runtime::Maze;
use serde::Deserialize;

/// Authored maze description, as read from TOML.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SceneConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    /// Cell positions in maze units.
    #[serde(default)]
    pub cells: Vec<[f32; 3]>,
    /// Cell positions as grid coordinates; scaled by `cell_size` on load.
    #[serde(default)]
    pub grid: Vec<[i32; 3]>,
    #[serde(default)]
    pub blockers: Vec<BlockerDef>,
}

fn default_cell_size() -> f32 {
    3.0
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BlockerDef {
    #[serde(default)]
    pub center: [f32; 3],
    #[serde(default = "default_blocker_size")]
    pub size: [f32; 3],
    #[serde(default)]
    pub translation: [f32; 3],
    /// Euler angles in degrees.
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_blocker_size() -> [f32; 3] {
    [3.0, 3.0, 3.0]
}
fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}
fn default_active() -> bool {
    true
}

impl BlockerDef {
    pub fn to_volume(&self) -> BlockerVolume {
        let transform = Transform::from_translation(self.translation.into())
            .with_rotation(self.rotation.into())
            .with_scale(self.scale.into());
        BlockerVolume::new(self.center.into(), self.size.into(), transform)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    InvalidCellSize(f32),
    InvalidBlockerSize { index: usize, size: [f32; 3] },
    NonFinitePosition { index: usize },
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::InvalidCellSize(s) => {
                write!(f, "cell_size must be finite and positive, got {}", s)
            }
            SceneError::InvalidBlockerSize { index, size } => {
                write!(f, "blocker {} has a negative or non-finite size {:?}", index, size)
            }
            SceneError::NonFinitePosition { index } => {
                write!(f, "cell {} has a non-finite position", index)
            }
        }
    }
}

impl std::error::Error for SceneError {}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SceneError::InvalidCellSize(self.cell_size));
        }
        for (index, p) in self.cells.iter().enumerate() {
            if p.iter().any(|c| !c.is_finite()) {
                return Err(SceneError::NonFinitePosition { index });
            }
        }
        for (index, b) in self.blockers.iter().enumerate() {
            if b.size.iter().any(|&s| !s.is_finite() || s < 0.0) {
                return Err(SceneError::InvalidBlockerSize {
                    index,
                    size: b.size,
                });
            }
        }
        Ok(())
    }

    /// Positions of every authored cell: `cells` first, then `grid`.
    pub fn cell_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let size = self.cell_size;
        self.cells.iter().map(|&p| Vec3::from(p)).chain(
            self.grid
                .iter()
                .map(move |&[x, y, z]| Vec3::new(x as f32, y as f32, z as f32) * size),
        )
    }

    /// Builds a maze with all cells inserted and active blockers applied.
    /// The maze is left dirty; the caller decides when to rebuild.
    pub fn build_maze(&self) -> Maze {
        let mut maze = Maze::new(self.cell_size);
        for p in self.cell_positions() {
            maze.add_cell(p);
        }
        for def in &self.blockers {
            maze.add_blocker(def.to_volume(), def.active);
        }
        log::info!(
            target: "scene",
            "scene loaded cells={} blockers={} blocked={}",
            maze.cells().len(),
            maze.blockers().len(),
            maze.blocked_cells().count()
        );
        maze
    }
}

pub fn scene_from_toml_str(s: &str) -> Result<SceneConfig, Box<dyn Error>> {
    let cfg: SceneConfig = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_scene_from_path(path: &Path) -> Result<SceneConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    scene_from_toml_str(&s)
}
