//! Content pack data files and the override resolver

use crate::config::read_json;
use crate::error::{FamilyPlanningError, Result};
use crate::snapshot::AgeStage;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location of the data file inside a pack
pub const PACK_DATA_FILE: &str = "assets/data.json";

/// Sprite sheet names for one dependent
///
/// Either name may be left out; an empty name falls through to the next pack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteNames {
    #[serde(rename = "BabySpriteName")]
    pub baby: String,
    #[serde(rename = "ToddlerSpriteName")]
    pub toddler: String,
}

/// Spouse line for the n-th dependent
///
/// `{0}` is replaced with the baby's name and `{1}` with the player's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDialogue {
    #[serde(rename = "BabyNumber")]
    pub baby_number: u32,
    #[serde(rename = "Dialogue")]
    pub dialogue: String,
}

/// Contents of a pack's data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPackData {
    /// Dependent name to sprite names
    #[serde(rename = "ChildSpriteID")]
    pub child_sprites: AHashMap<String, SpriteNames>,
    /// Spouse display name to birth lines
    #[serde(rename = "SpouseDialogue")]
    pub spouse_dialogue: AHashMap<String, Vec<BirthDialogue>>,
}

/// What the core asks a resolver for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OverrideKey {
    ChildSprite { name: String, stage: AgeStage },
    SpouseDialogue { spouse: String },
}

/// A resolved cosmetic override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    /// Asset key of the sprite sheet
    Sprite(String),
    Dialogue(Vec<BirthDialogue>),
}

/// Looks up cosmetic overrides by key
pub trait OverrideResolver {
    fn resolve(&self, key: &OverrideKey) -> Option<Override>;
}

/// Resolver with nothing installed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideResolver for NoOverrides {
    fn resolve(&self, _key: &OverrideKey) -> Option<Override> {
        None
    }
}

/// A single loaded content pack
#[derive(Debug, Clone)]
pub struct ContentPack {
    pub name: String,
    pub root: PathBuf,
    pub data: ContentPackData,
}

impl ContentPack {
    /// Load the pack rooted at `root`
    pub fn load(root: &Path) -> Result<Self> {
        let data_path = root.join(PACK_DATA_FILE);
        if !data_path.is_file() {
            return Err(FamilyPlanningError::ContentPack(format!(
                "{} has no {}",
                root.display(),
                PACK_DATA_FILE
            )));
        }

        let data = read_json(&data_path)?;
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            root: root.to_path_buf(),
            data,
        })
    }

    /// Asset key for a sprite file of this pack
    fn asset_key(&self, file: &str) -> String {
        self.root.join(file).to_string_lossy().into_owned()
    }
}

/// All installed packs, searched in load order
#[derive(Debug, Clone, Default)]
pub struct ContentPackSet {
    packs: Vec<ContentPack>,
}

impl ContentPackSet {
    pub fn new(packs: Vec<ContentPack>) -> Self {
        Self { packs }
    }

    /// Load every pack directory under `dir`, in name order
    ///
    /// Unreadable packs are skipped.
    pub fn load_dir(dir: &Path) -> Self {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "content pack directory unreadable");
                return Self::default();
            }
        };

        let mut roots: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .collect();
        roots.sort();

        let packs = roots
            .iter()
            .filter_map(|root| match ContentPack::load(root) {
                Ok(pack) => {
                    info!(pack = %pack.name, path = %root.display(), "reading content pack");
                    Some(pack)
                }
                Err(e) => {
                    debug!(path = %root.display(), error = %e, "skipping content pack");
                    None
                }
            })
            .collect();

        Self { packs }
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

impl OverrideResolver for ContentPackSet {
    fn resolve(&self, key: &OverrideKey) -> Option<Override> {
        match key {
            OverrideKey::ChildSprite { name, stage } => self.packs.iter().find_map(|pack| {
                let sprites = pack.data.child_sprites.get(name)?;
                let file = if stage.occupies_bed() { &sprites.toddler } else { &sprites.baby };
                (!file.is_empty()).then(|| Override::Sprite(pack.asset_key(file)))
            }),
            OverrideKey::SpouseDialogue { spouse } => self
                .packs
                .iter()
                .find_map(|pack| pack.data.spouse_dialogue.get(spouse))
                .map(|lines| Override::Dialogue(lines.clone())),
        }
    }
}
