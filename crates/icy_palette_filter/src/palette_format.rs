use std::path::Path;

use regex::Regex;

use crate::{Color, Palette, PaletteEntry, PaletteError, Result};

lazy_static::lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^\s*([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})\s*$").unwrap();

    static ref PAL_REGEX: Regex = Regex::new(r"^\s*(\d+)\s+(\d+)\s+(\d+)\s*$").unwrap();

    static ref GPL_COLOR_REGEX: Regex = Regex::new(r"^\s*(\d+)\s+(\d+)\s+(\d+)\s*(.*)$").unwrap();
    static ref GPL_NAME_REGEX: Regex = Regex::new(r"^\s*#\s*Palette Name:\s*(.*?)\s*$").unwrap();
    static ref GPL_AUTHOR_REGEX: Regex = Regex::new(r"^\s*#\s*Author:\s*(.*?)\s*$").unwrap();
    static ref GPL_DESCRIPTION_REGEX: Regex = Regex::new(r"^\s*#\s*Description:\s*(.*?)\s*$").unwrap();

    static ref TXT_COLOR_REGEX: Regex = Regex::new(r"^\s*([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})\s*$").unwrap();
    static ref TXT_NAME_REGEX: Regex = Regex::new(r"^\s*;\s*Palette Name:\s*(.*?)\s*$").unwrap();
    static ref TXT_AUTHOR_REGEX: Regex = Regex::new(r"^\s*;\s*Author:\s*(.*?)\s*$").unwrap();
    static ref TXT_DESCRIPTION_REGEX: Regex = Regex::new(r"^\s*;\s*Description:\s*(.*?)\s*$").unwrap();
}

/// Text palette formats understood by [`Palette::load_palette`] and
/// [`Palette::export_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    /// One `rrggbb` per line.
    Hex,
    /// JASC-PAL (Paint Shop Pro).
    Pal,
    /// GIMP palette.
    Gpl,
    /// paint.net palette, `AARRGGBB` per line.
    Txt,
}

impl PaletteFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "hex" => Some(PaletteFormat::Hex),
            "pal" => Some(PaletteFormat::Pal),
            "gpl" => Some(PaletteFormat::Gpl),
            "txt" => Some(PaletteFormat::Txt),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            PaletteFormat::Hex => "hex",
            PaletteFormat::Pal => "pal",
            PaletteFormat::Gpl => "gpl",
            PaletteFormat::Txt => "txt",
        }
    }
}

fn parse_decimal_rgb(r: &str, g: &str, b: &str) -> Result<Color> {
    Ok(Color::new(r.parse::<u8>()?, g.parse::<u8>()?, b.parse::<u8>()?))
}

fn parse_hex_rgb(r: &str, g: &str, b: &str) -> Result<Color> {
    Ok(Color::new(u8::from_str_radix(r, 16)?, u8::from_str_radix(g, 16)?, u8::from_str_radix(b, 16)?))
}

fn capture_into(regex: &Regex, line: &str, target: &mut String) -> bool {
    if let Some(value) = regex.captures(line).and_then(|cap| cap.get(1)) {
        *target = value.as_str().to_string();
        return true;
    }
    false
}

impl Palette {
    /// Parses a palette in the given text format.
    ///
    /// Lines that carry neither a color nor known metadata are skipped.
    /// Transparency is not part of these formats except for paint.net files,
    /// where an alpha of `00` yields a transparent entry.
    ///
    /// # Errors
    ///
    /// Fails if the data is not UTF-8, the mandatory header is missing, or a
    /// channel value does not fit into 8 bits.
    pub fn load_palette(format: PaletteFormat, bytes: &[u8]) -> Result<Self> {
        let data = String::from_utf8(bytes.to_vec())?;
        let mut entries = Vec::new();
        let mut title = String::new();
        let mut author = String::new();
        let mut description = String::new();

        match format {
            PaletteFormat::Hex => {
                for (line_no, line) in data.lines().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Some(cap) = HEX_REGEX.captures(line) {
                        let (_, [r, g, b]) = cap.extract();
                        entries.push(PaletteEntry::Opaque(parse_hex_rgb(r, g, b)?));
                    } else {
                        log::warn!("Skipping invalid hex palette line {}: {line}", line_no + 1);
                    }
                }
            }
            PaletteFormat::Pal => {
                let mut lines = data.lines().enumerate();
                match lines.next() {
                    Some((_, header)) if header.trim() == "JASC-PAL" => {}
                    Some((_, header)) => return Err(PaletteError::invalid_format(format!("Only JASC-PAL supported: {header}"))),
                    None => return Err(PaletteError::invalid_format("Empty JASC-PAL file")),
                }
                // version and entry count
                let _ = lines.next();
                let _ = lines.next();
                for (line_no, line) in lines {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Some(cap) = PAL_REGEX.captures(line) {
                        let (_, [r, g, b]) = cap.extract();
                        entries.push(PaletteEntry::Opaque(parse_decimal_rgb(r, g, b)?));
                    } else {
                        log::warn!("Skipping invalid JASC-PAL line {}: {line}", line_no + 1);
                    }
                }
            }
            PaletteFormat::Gpl => {
                let mut lines = data.lines().enumerate();
                match lines.next() {
                    Some((_, header)) if header.trim() == "GIMP Palette" => {}
                    Some((_, header)) => return Err(PaletteError::invalid_format(format!("Only GIMP Palette supported: {header}"))),
                    None => return Err(PaletteError::invalid_format("Empty GIMP palette file")),
                }
                for (line_no, line) in lines {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed.starts_with('#') {
                        let _ = capture_into(&GPL_NAME_REGEX, line, &mut title)
                            || capture_into(&GPL_AUTHOR_REGEX, line, &mut author)
                            || capture_into(&GPL_DESCRIPTION_REGEX, line, &mut description);
                    } else if let Some(name) = trimmed.strip_prefix("Name:") {
                        title = name.trim().to_string();
                    } else if trimmed.starts_with("Columns:") {
                        // layout hint only
                    } else if let Some(cap) = GPL_COLOR_REGEX.captures(line) {
                        let (_, [r, g, b, _name]) = cap.extract();
                        entries.push(PaletteEntry::Opaque(parse_decimal_rgb(r, g, b)?));
                    } else {
                        log::warn!("Skipping invalid GIMP palette line {}: {line}", line_no + 1);
                    }
                }
            }
            PaletteFormat::Txt => {
                for (line_no, line) in data.lines().enumerate() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed.starts_with(';') {
                        let _ = capture_into(&TXT_NAME_REGEX, line, &mut title)
                            || capture_into(&TXT_AUTHOR_REGEX, line, &mut author)
                            || capture_into(&TXT_DESCRIPTION_REGEX, line, &mut description);
                    } else if let Some(cap) = TXT_COLOR_REGEX.captures(line) {
                        let (_, [a, r, g, b]) = cap.extract();
                        let color = parse_hex_rgb(r, g, b)?;
                        if u8::from_str_radix(a, 16)? == 0 {
                            entries.push(PaletteEntry::Transparent(color));
                        } else {
                            entries.push(PaletteEntry::Opaque(color));
                        }
                    } else {
                        log::warn!("Skipping invalid paint.net palette line {}: {line}", line_no + 1);
                    }
                }
            }
        }

        log::debug!("Loaded {} palette entries ({format:?})", entries.len());
        let mut palette = Palette::from_entries(entries);
        palette.title = title;
        palette.author = author;
        palette.description = description;
        Ok(palette)
    }

    /// Loads a palette, picking the format from the file extension.
    ///
    /// # Errors
    ///
    /// Fails on a missing or unknown extension and on any error of
    /// [`Palette::load_palette`].
    pub fn import_palette(file_name: &Path, bytes: &[u8]) -> Result<Self> {
        let Some(ext) = file_name.extension().and_then(|ext| ext.to_str()) else {
            return Err(PaletteError::UnsupportedPaletteFormat {
                expected: "a file extension (hex, pal, gpl, txt)".to_string(),
            });
        };
        let Some(format) = PaletteFormat::from_extension(ext) else {
            return Err(PaletteError::UnsupportedPaletteFormat {
                expected: format!("hex, pal, gpl or txt, got '{ext}'"),
            });
        };
        Palette::load_palette(format, bytes)
    }

    /// Reads and parses a palette file from disk.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|err| PaletteError::read_file(path, err.to_string()))?;
        Palette::import_palette(path, &bytes)
    }

    /// Serializes the palette. Transparent entries are written with the color
    /// they keep; only the paint.net format records their transparency.
    pub fn export_palette(&self, format: PaletteFormat) -> Vec<u8> {
        let mut res = String::new();
        match format {
            PaletteFormat::Hex => {
                for c in self.colors() {
                    res.push_str(&format!("{:02x}{:02x}{:02x}\n", c.r, c.g, c.b));
                }
            }
            PaletteFormat::Pal => {
                res.push_str("JASC-PAL\n");
                res.push_str("0100\n");
                res.push_str(&format!("{}\n", self.len()));
                for c in self.colors() {
                    res.push_str(&format!("{} {} {}\n", c.r, c.g, c.b));
                }
            }
            PaletteFormat::Gpl => {
                res.push_str("GIMP Palette\n");
                res.push_str(&format!("#Palette Name: {}\n", self.title));
                res.push_str(&format!("#Author: {}\n", self.author));
                res.push_str(&format!("#Description: {}\n", self.description));
                res.push_str(&format!("#Colors: {}\n", self.len()));
                for c in self.colors() {
                    res.push_str(&format!("{:3} {:3} {:3} {}\n", c.r, c.g, c.b, c.to_hex()));
                }
            }
            PaletteFormat::Txt => {
                res.push_str(";paint.net Palette File\n");
                res.push_str(&format!(";Palette Name: {}\n", self.title));
                res.push_str(&format!(";Author: {}\n", self.author));
                res.push_str(&format!(";Description: {}\n", self.description));
                res.push_str(&format!(";Colors: {}\n", self.len()));
                for entry in self.iter() {
                    let c = entry.color();
                    let alpha = if entry.is_transparent() { 0 } else { 0xFF };
                    res.push_str(&format!("{:02X}{:02X}{:02X}{:02X}\n", alpha, c.r, c.g, c.b));
                }
            }
        }
        res.into_bytes()
    }
}
