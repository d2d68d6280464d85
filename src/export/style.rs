//! Colour palettes for exported graphs

use super::{ExportError, ExportResult};
use crate::graph::NodeType;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`
    pub fn parse(text: &str) -> ExportResult<Self> {
        let invalid =
            || ExportError::Palette(format!("invalid colour '{}', expected #rrggbb", text));
        let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colours for nodes, links, clusters and the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub hca: Color,
    /// Links that touch a host adapter
    pub hca_edge: Color,
    pub switch: Color,
    /// Switch-to-switch links
    pub switch_edge: Color,
    pub cluster: Color,
    /// Canvas colour; `None` leaves the viewer default
    pub background: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Palette {
    /// Colours for a white canvas
    pub fn light() -> Self {
        Self {
            hca: Color::rgb(0xff, 0x80, 0x80),
            hca_edge: Color::rgb(0xff, 0x00, 0x00),
            switch: Color::rgb(0xd5, 0xf6, 0xff),
            switch_edge: Color::rgb(0x00, 0x00, 0x00),
            cluster: Color::rgb(0xff, 0xff, 0x00),
            background: None,
        }
    }

    /// Colours tuned for plotting on a black canvas
    pub fn black_background() -> Self {
        Self {
            hca: Color::rgb(0xcc, 0xcc, 0xcc),
            hca_edge: Color::rgb(0xff, 0x00, 0x00),
            switch: Color::rgb(0xff, 0xff, 0xff),
            switch_edge: Color::rgb(0xa0, 0xa0, 0xa0),
            cluster: Color::rgb(0xff, 0xff, 0x00),
            background: Some(Color::rgb(0x00, 0x00, 0x00)),
        }
    }

    /// Pick the built-in palette for the canvas
    pub fn for_background(black: bool) -> Self {
        if black {
            Self::black_background()
        } else {
            Self::light()
        }
    }

    /// Fill and outline colour of a node
    pub fn node_color(&self, node_type: NodeType) -> Color {
        match node_type {
            NodeType::Switch => self.switch,
            NodeType::Hca => self.hca,
        }
    }

    /// Colour of a link between two devices of the given types
    pub fn edge_color(&self, a: NodeType, b: NodeType) -> Color {
        if a == NodeType::Hca || b == NodeType::Hca {
            self.hca_edge
        } else {
            self.switch_edge
        }
    }

    /// Apply overrides from a YAML file on top of this palette
    ///
    /// Colours must be quoted; YAML reads an unquoted `#336699` as a comment.
    ///
    /// ```yaml
    /// hca: "#336699"
    /// switch_edge: "#404040"
    /// background: "#101010"
    /// ```
    pub fn load_overrides(self, path: &Path) -> ExportResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExportError::Palette(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let overrides = PaletteOverrides::from_yaml(&text)?;
        if overrides.is_empty() {
            warn!(
                path = %path.display(),
                "palette file sets no colours; unquoted #rrggbb values are read as comments"
            );
        }
        overrides.apply(self)
    }

    /// Apply overrides from YAML text
    pub fn apply_yaml(self, yaml: &str) -> ExportResult<Self> {
        PaletteOverrides::from_yaml(yaml)?.apply(self)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteOverrides {
    hca: Option<String>,
    hca_edge: Option<String>,
    switch: Option<String>,
    switch_edge: Option<String>,
    cluster: Option<String>,
    background: Option<String>,
}

impl PaletteOverrides {
    fn from_yaml(yaml: &str) -> ExportResult<Self> {
        // an empty or comment-only file is a null document
        let overrides: Option<Self> = serde_yaml::from_str(yaml)
            .map_err(|e| ExportError::Palette(format!("YAML parse error: {}", e)))?;
        Ok(overrides.unwrap_or_default())
    }

    fn is_empty(&self) -> bool {
        [
            &self.hca,
            &self.hca_edge,
            &self.switch,
            &self.switch_edge,
            &self.cluster,
            &self.background,
        ]
        .iter()
        .all(|slot| slot.is_none())
    }

    fn apply(self, mut palette: Palette) -> ExportResult<Palette> {
        let slots = [
            (self.hca, &mut palette.hca),
            (self.hca_edge, &mut palette.hca_edge),
            (self.switch, &mut palette.switch),
            (self.switch_edge, &mut palette.switch_edge),
            (self.cluster, &mut palette.cluster),
        ];
        for (value, slot) in slots {
            if let Some(text) = value {
                *slot = Color::parse(&text)?;
            }
        }
        if let Some(text) = self.background {
            palette.background = Some(Color::parse(&text)?);
        }
        Ok(palette)
    }
}
