use crate::{Color, PaletteError, Result};

/// A single palette slot.
///
/// Transparency travels with the entry instead of living in a separate
/// flag table. A transparent entry keeps the color it had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteEntry {
    Opaque(Color),
    Transparent(Color),
}

impl Default for PaletteEntry {
    fn default() -> Self {
        PaletteEntry::Opaque(Color::BLACK)
    }
}

impl PaletteEntry {
    pub fn color(&self) -> Color {
        match self {
            PaletteEntry::Opaque(c) | PaletteEntry::Transparent(c) => *c,
        }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, PaletteEntry::Transparent(_))
    }
}

impl From<Color> for PaletteEntry {
    fn from(value: Color) -> Self {
        PaletteEntry::Opaque(value)
    }
}

/// Read access to an indexed color table supplied by the host.
///
/// Indices passed to [`PaletteSource::color`] and
/// [`PaletteSource::is_transparent`] must be below [`PaletteSource::len`].
pub trait PaletteSource {
    fn len(&self) -> usize;

    fn color(&self, index: usize) -> Color;

    fn is_transparent(&self, index: usize) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PaletteSource for [Color] {
    fn len(&self) -> usize {
        <[Color]>::len(self)
    }

    fn color(&self, index: usize) -> Color {
        self[index]
    }

    fn is_transparent(&self, _index: usize) -> bool {
        false
    }
}

impl PaletteSource for Vec<Color> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn color(&self, index: usize) -> Color {
        self[index]
    }

    fn is_transparent(&self, _index: usize) -> bool {
        false
    }
}

impl PaletteSource for [PaletteEntry] {
    fn len(&self) -> usize {
        <[PaletteEntry]>::len(self)
    }

    fn color(&self, index: usize) -> Color {
        self[index].color()
    }

    fn is_transparent(&self, index: usize) -> bool {
        self[index].is_transparent()
    }
}

/// Fixed-length indexed color table.
///
/// The number of entries is set on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    pub title: String,
    pub description: String,
    pub author: String,
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Creates a palette of `len` opaque black entries.
    pub fn new(len: usize) -> Self {
        Self::from_entries(vec![PaletteEntry::default(); len])
    }

    pub fn from_colors(colors: &[Color]) -> Self {
        Self::from_entries(colors.iter().copied().map(PaletteEntry::Opaque).collect())
    }

    pub fn from_entries(entries: Vec<PaletteEntry>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            entries,
        }
    }

    /// Copies colors and transparency out of any palette source.
    pub fn from_source<S: PaletteSource + ?Sized>(source: &S) -> Self {
        Self::from_entries(
            (0..source.len())
                .map(|i| {
                    let color = source.color(i);
                    if source.is_transparent(i) {
                        PaletteEntry::Transparent(color)
                    } else {
                        PaletteEntry::Opaque(color)
                    }
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PaletteEntry> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(PaletteEntry::color)
    }

    /// Sets the color at `index` and makes the entry opaque.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_color(&mut self, index: usize, color: impl Into<Color>) -> Result<()> {
        *self.entry_mut(index)? = PaletteEntry::Opaque(color.into());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PaletteError::IndexOutOfRange`] if `index >= len()`.
    pub fn make_transparent(&mut self, index: usize) -> Result<()> {
        let entry = self.entry_mut(index)?;
        *entry = PaletteEntry::Transparent(entry.color());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PaletteError::IndexOutOfRange`] if `index >= len()`.
    pub fn make_opaque(&mut self, index: usize) -> Result<()> {
        let entry = self.entry_mut(index)?;
        *entry = PaletteEntry::Opaque(entry.color());
        Ok(())
    }

    pub fn are_colors_equal(&self, other: &Palette) -> bool {
        self.entries == other.entries
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut PaletteEntry> {
        let len = self.entries.len();
        self.entries.get_mut(index).ok_or(PaletteError::IndexOutOfRange { index, len })
    }
}

impl PaletteSource for Palette {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn color(&self, index: usize) -> Color {
        self.entries[index].color()
    }

    fn is_transparent(&self, index: usize) -> bool {
        self.entries[index].is_transparent()
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = PaletteEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
