//! Gallery configuration and batch rendering
//!
//! A gallery is a titled list of [`PatternSpec`]s, loaded from TOML or JSON:
//!
//! ```toml
//! [[entries]]
//! title = "Triangle Pattern"
//! pattern = { kind = "triangle", size = 5 }
//!
//! [[entries]]
//! title = "Hexagon Pattern"
//! pattern = { kind = "polygon", size = 15, sides = 6 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{PatternError, Result};
use crate::patterns::{
    Butterfly, Circle, Diamond, Fish, Ganesh, HalfPyramid, Heart, Kite, Ladder, Pattern,
    Pentagram, Polygon, Pyramid, Rectangle, Rhombus, RouterBox, Sandglass, Shuriken, Square, Star,
    Swastik, Triangle, Wave, XPattern, ZigZag,
};

/// Parameters of one pattern, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternSpec {
    Ganesh { size: usize },
    Butterfly { size: usize },
    Triangle { size: usize },
    Square { size: usize },
    Pyramid { size: usize },
    Diamond { size: usize },
    Circle { size: usize },
    Fish { size: usize },
    Heart { size: usize },
    Kite { size: usize },
    Pentagram { size: usize },
    Rhombus { size: usize },
    RouterBox { size: usize },
    Star { size: usize },
    Swastik { size: usize },
    Sandglass { size: usize },
    Shuriken { size: usize },
    Wave {
        length: usize,
        amplitude: usize,
        frequency: usize,
    },
    XPattern { size: usize },
    ZigZag { height: usize, width: usize },
    Ladder { height: usize, width: usize },
    /// `variant` is one of `straight`, `inverted`, `left`, `invertedLeft`
    HalfPyramid { height: usize, variant: String },
    Rectangle {
        height: usize,
        width: usize,
        #[serde(default)]
        hollow: bool,
    },
    Polygon { size: usize, sides: usize },
}

impl PatternSpec {
    /// Validate the parameters and build the pattern
    pub fn build(&self) -> Result<Box<dyn Pattern>> {
        let pattern: Box<dyn Pattern> = match *self {
            Self::Ganesh { size } => Box::new(Ganesh::new(size)?),
            Self::Butterfly { size } => Box::new(Butterfly::new(size)?),
            Self::Triangle { size } => Box::new(Triangle::new(size)?),
            Self::Square { size } => Box::new(Square::new(size)?),
            Self::Pyramid { size } => Box::new(Pyramid::new(size)?),
            Self::Diamond { size } => Box::new(Diamond::new(size)?),
            Self::Circle { size } => Box::new(Circle::new(size)?),
            Self::Fish { size } => Box::new(Fish::new(size)?),
            Self::Heart { size } => Box::new(Heart::new(size)?),
            Self::Kite { size } => Box::new(Kite::new(size)?),
            Self::Pentagram { size } => Box::new(Pentagram::new(size)?),
            Self::Rhombus { size } => Box::new(Rhombus::new(size)?),
            Self::RouterBox { size } => Box::new(RouterBox::new(size)?),
            Self::Star { size } => Box::new(Star::new(size)?),
            Self::Swastik { size } => Box::new(Swastik::new(size)?),
            Self::Sandglass { size } => Box::new(Sandglass::new(size)?),
            Self::Shuriken { size } => Box::new(Shuriken::new(size)?),
            Self::Wave {
                length,
                amplitude,
                frequency,
            } => Box::new(Wave::new(length, amplitude, frequency)?),
            Self::XPattern { size } => Box::new(XPattern::new(size)?),
            Self::ZigZag { height, width } => Box::new(ZigZag::new(height, width)?),
            Self::Ladder { height, width } => Box::new(Ladder::new(height, width)?),
            Self::HalfPyramid {
                height,
                ref variant,
            } => Box::new(HalfPyramid::from_tag(height, variant)?),
            Self::Rectangle {
                height,
                width,
                hollow,
            } => Box::new(Rectangle::new(height, width, hollow)?),
            Self::Polygon { size, sides } => Box::new(Polygon::new(size, sides)?),
        };
        Ok(pattern)
    }

    /// Build and draw in one step
    pub fn render(&self) -> Result<String> {
        Ok(self.build()?.draw())
    }
}

/// A titled pattern in a gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub title: String,
    pub pattern: PatternSpec,
}

impl GalleryEntry {
    pub fn new(title: impl Into<String>, pattern: PatternSpec) -> Self {
        Self {
            title: title.into(),
            pattern,
        }
    }
}

/// Outcome of rendering one gallery entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub title: String,
    /// Shape kind reported by [`Pattern::name`], `None` when the build failed
    pub kind: Option<&'static str>,
    pub result: Result<String>,
}

impl Rendered {
    /// Markdown block with a heading and a fenced drawing, `None` on failure
    pub fn to_markdown(&self) -> Option<String> {
        self.result
            .as_ref()
            .ok()
            .map(|text| format!("### {}:\n\n```\n{}\n```\n\n", self.title, text))
    }

    /// One-line report for a failed entry
    pub fn error_message(&self) -> Option<String> {
        self.result
            .as_ref()
            .err()
            .map(|err| format!("Error displaying {}: {}", self.title, err))
    }
}

/// Ordered collection of gallery entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub entries: Vec<GalleryEntry>,
}

impl Gallery {
    pub fn new(entries: Vec<GalleryEntry>) -> Self {
        Self { entries }
    }

    /// Every shape at its showcase size
    pub fn default_showcase() -> Self {
        use crate::gallery::PatternSpec as P;

        let half = |variant: &str| P::HalfPyramid {
            height: 5,
            variant: variant.to_string(),
        };
        let polygon = |sides| P::Polygon { size: 15, sides };

        Self::new(
            [
                ("Ganesh Pattern", P::Ganesh { size: 5 }),
                ("Butterfly Pattern", P::Butterfly { size: 5 }),
                ("Triangle Pattern", P::Triangle { size: 5 }),
                ("Square Pattern", P::Square { size: 5 }),
                ("Pyramid Pattern", P::Pyramid { size: 5 }),
                ("Diamond Pattern", P::Diamond { size: 5 }),
                ("Circle Pattern", P::Circle { size: 5 }),
                ("Fish Pattern", P::Fish { size: 5 }),
                ("Heart Pattern", P::Heart { size: 10 }),
                ("Kite Pattern", P::Kite { size: 5 }),
                ("Pentagram Pattern", P::Pentagram { size: 10 }),
                ("Rhombus Pattern", P::Rhombus { size: 10 }),
                ("RouterBox Pattern", P::RouterBox { size: 10 }),
                ("Star Pattern", P::Star { size: 10 }),
                ("Sandglass Pattern", P::Sandglass { size: 9 }),
                ("Shuriken Pattern", P::Shuriken { size: 9 }),
                ("XPattern Pattern", P::XPattern { size: 9 }),
                (
                    "Wave Pattern",
                    P::Wave {
                        length: 60,
                        amplitude: 5,
                        frequency: 2,
                    },
                ),
                (
                    "Ladder Pattern",
                    P::Ladder {
                        height: 5,
                        width: 10,
                    },
                ),
                ("Straight Pyramid Pattern", half("straight")),
                ("Inverted Pyramid Pattern", half("inverted")),
                ("Left Pyramid Pattern", half("left")),
                ("Inverted Left Pyramid Pattern", half("invertedLeft")),
                (
                    "Filled Rectangle Pattern",
                    P::Rectangle {
                        height: 5,
                        width: 10,
                        hollow: false,
                    },
                ),
                (
                    "Hollow Rectangle Pattern",
                    P::Rectangle {
                        height: 5,
                        width: 10,
                        hollow: true,
                    },
                ),
                ("Pentagon Pattern", polygon(5)),
                ("Hexagon Pattern", polygon(6)),
                ("Octagon Pattern", polygon(8)),
                ("Swastik Pattern", P::Swastik { size: 11 }),
                ("ZigZag Pattern", P::ZigZag { height: 3, width: 5 }),
            ]
            .into_iter()
            .map(|(title, pattern)| GalleryEntry::new(title, pattern))
            .collect(),
        )
    }

    /// Location of the user gallery file
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ascii-patterns", "patterns")
            .map(|dirs| dirs.config_dir().join("gallery.toml"))
    }

    /// Parse a gallery file, TOML for `.toml` and JSON otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PatternError::config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let gallery: Self = if path.extension().is_some_and(|e| e == "toml") {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            entries = gallery.entries.len(),
            "loaded gallery"
        );
        Ok(gallery)
    }

    /// Load the explicit path, else the user gallery, else the showcase
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no gallery file, using the showcase");
                Ok(Self::default_showcase())
            }
        }
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PatternError::config(format!("Failed to serialize gallery: {e}")))
    }

    /// Keep entries whose title contains `needle`, case-insensitively
    pub fn filter(&self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        Self::new(
            self.entries
                .iter()
                .filter(|entry| entry.title.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        )
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.title.as_str())
    }

    /// Render every entry in parallel, preserving order
    ///
    /// A failing entry is logged and reported in its [`Rendered`] slot; it
    /// never stops the others.
    pub fn render(&self) -> Vec<Rendered> {
        tracing::debug!(entries = self.entries.len(), "rendering gallery");
        self.entries
            .par_iter()
            .map(|entry| match entry.pattern.build() {
                Ok(pattern) => {
                    let kind = pattern.name();
                    tracing::debug!(title = %entry.title, kind, "drawing pattern");
                    Rendered {
                        title: entry.title.clone(),
                        kind: Some(kind),
                        result: Ok(pattern.draw()),
                    }
                }
                Err(err) => {
                    tracing::warn!(title = %entry.title, error = %err, "pattern failed");
                    Rendered {
                        title: entry.title.clone(),
                        kind: None,
                        result: Err(err),
                    }
                }
            })
            .collect()
    }
}
