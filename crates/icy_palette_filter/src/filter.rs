use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{colors_match, Color, Palette, PaletteEntry, PaletteError, PaletteSource, Result};

/// Parameters of a palette filter.
///
/// Serializes to TOML like:
///
/// ```toml
/// target_color = "#00ff00"
/// fill_color = "#ffffff"
/// tolerance = 12.5
/// invert = false
/// ```
///
/// A missing `fill_color` makes matching entries transparent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    pub target_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default)]
    pub tolerance: f64,
    #[serde(default)]
    pub invert: bool,
}

impl FilterParameters {
    /// Exact match on `target_color`, matching entries become transparent.
    pub fn new(target_color: Color) -> Self {
        Self {
            target_color,
            fill_color: None,
            tolerance: 0.0,
            invert: false,
        }
    }

    pub fn with_fill_color(mut self, fill_color: Option<Color>) -> Self {
        self.fill_color = fill_color;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidConfig`] if `text` is not a valid
    /// parameter document.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidConfig`] if the parameters can't be
    /// represented in TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// # Errors
    ///
    /// Fails if the file can't be read or doesn't parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| PaletteError::read_file(path, err.to_string()))?;
        Self::from_toml(&text)
    }

    /// # Errors
    ///
    /// Fails if the parameters can't be serialized or written.
    pub fn store(&self, path: &Path) -> Result<()> {
        let text = self.to_toml()?;
        fs::write(path, text).map_err(|err| PaletteError::write_file(path, err.to_string()))
    }
}

/// Builds a filtered copy of `source`.
///
/// Every entry whose color matches `target_color` (see [`colors_match`]) is
/// replaced by `fill_color`, or made transparent when there is no fill color.
/// All other entries come out opaque with their source color. Source
/// transparency is not carried over.
pub fn rebuild<S: PaletteSource + ?Sized>(source: &S, target_color: Color, fill_color: Option<Color>, tolerance: f64, invert: bool) -> Palette {
    let entries = (0..source.len())
        .map(|index| {
            let color = source.color(index);
            if !colors_match(color, target_color, tolerance, invert) {
                return PaletteEntry::Opaque(color);
            }
            match fill_color {
                Some(fill) => PaletteEntry::Opaque(fill),
                None => PaletteEntry::Transparent(color),
            }
        })
        .collect();
    Palette::from_entries(entries)
}

/// Keeps a filtered palette in sync with its parameters.
///
/// The output palette is rebuilt on construction and whenever a setter
/// receives a value different from the current one. Readers have to fetch
/// [`PaletteFilter::palette`] again after a change.
#[derive(Debug)]
pub struct PaletteFilter<'a, S: PaletteSource + ?Sized = Palette> {
    source: &'a S,
    params: FilterParameters,
    palette: Palette,
    revision: u64,
}

impl<'a, S: PaletteSource + ?Sized> PaletteFilter<'a, S> {
    pub fn new(source: &'a S, target_color: Color, fill_color: Option<Color>, tolerance: f64, invert: bool) -> Self {
        let params = FilterParameters {
            target_color,
            fill_color,
            tolerance,
            invert,
        };
        Self::with_parameters(source, params)
    }

    pub fn with_parameters(source: &'a S, params: FilterParameters) -> Self {
        let mut filter = Self {
            source,
            params,
            palette: Palette::default(),
            revision: 0,
        };
        filter.filter_palette();
        filter
    }

    /// The filtered palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn into_palette(self) -> Palette {
        self.palette
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    pub fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    /// Number of rebuilds so far. Changes exactly when the output palette was
    /// replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn target_color(&self) -> Color {
        self.params.target_color
    }

    /// `None` means matching entries are made transparent.
    pub fn fill_color(&self) -> Option<Color> {
        self.params.fill_color
    }

    pub fn tolerance(&self) -> f64 {
        self.params.tolerance
    }

    pub fn invert(&self) -> bool {
        self.params.invert
    }

    /// Returns `true` if the palette was rebuilt.
    pub fn set_target_color(&mut self, target_color: Color) -> bool {
        if self.params.target_color == target_color {
            log::trace!("target color unchanged ({})", target_color.to_hex());
            return false;
        }
        self.params.target_color = target_color;
        self.filter_palette();
        true
    }

    /// Returns `true` if the palette was rebuilt.
    pub fn set_fill_color(&mut self, fill_color: Option<Color>) -> bool {
        if self.params.fill_color == fill_color {
            log::trace!("fill color unchanged ({fill_color:?})");
            return false;
        }
        self.params.fill_color = fill_color;
        self.filter_palette();
        true
    }

    /// Returns `true` if the palette was rebuilt.
    pub fn set_tolerance(&mut self, tolerance: f64) -> bool {
        if self.params.tolerance == tolerance {
            log::trace!("tolerance unchanged ({tolerance})");
            return false;
        }
        self.params.tolerance = tolerance;
        self.filter_palette();
        true
    }

    /// Returns `true` if the palette was rebuilt.
    pub fn set_invert(&mut self, invert: bool) -> bool {
        if self.params.invert == invert {
            log::trace!("invert unchanged ({invert})");
            return false;
        }
        self.params.invert = invert;
        self.filter_palette();
        true
    }

    /// Replaces all parameters at once, rebuilding at most one time.
    ///
    /// Returns `true` if the palette was rebuilt.
    pub fn set_parameters(&mut self, params: FilterParameters) -> bool {
        if self.params == params {
            log::trace!("filter parameters unchanged");
            return false;
        }
        self.params = params;
        self.filter_palette();
        true
    }

    /// Whether the source entry at `index` matches the current parameters.
    /// `None` if `index` is out of range.
    pub fn matches(&self, index: usize) -> Option<bool> {
        if index >= self.source.len() {
            return None;
        }
        Some(colors_match(
            self.source.color(index),
            self.params.target_color,
            self.params.tolerance,
            self.params.invert,
        ))
    }

    fn filter_palette(&mut self) {
        let FilterParameters {
            target_color,
            fill_color,
            tolerance,
            invert,
        } = self.params;
        self.palette = rebuild(self.source, target_color, fill_color, tolerance, invert);
        self.revision += 1;
        log::debug!(
            "palette filter revision {}: target {} tolerance {} invert {} over {} entries",
            self.revision,
            target_color.to_hex(),
            tolerance,
            invert,
            self.palette.len()
        );
    }
}
