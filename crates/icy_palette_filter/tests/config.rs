use icy_palette_filter::{Color, FilterParameters, Palette, PaletteError, PaletteFilter, PaletteSource};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_full_parameters() {
    let params = FilterParameters::from_toml(
        r##"
target_color = "#00ff00"
fill_color = "#ffffff"
tolerance = 12.5
invert = true
"##,
    )
    .unwrap();
    assert_eq!(
        params,
        FilterParameters::new(Color::from_u32(0x00FF00))
            .with_fill_color(Some(Color::WHITE))
            .with_tolerance(12.5)
            .with_invert(true)
    );
}

#[test]
fn test_missing_fields_use_defaults() {
    let params = FilterParameters::from_toml("target_color = \"080808\"\n").unwrap();
    assert_eq!(params.target_color, Color::from_u32(0x080808));
    assert_eq!(params.fill_color, None);
    assert_eq!(params.tolerance, 0.0);
    assert!(!params.invert);
}

#[test]
fn test_integer_colors() {
    let params = FilterParameters::from_toml("target_color = 0x00FF00\nfill_color = 16777215\ntolerance = 4.0\n").unwrap();
    assert_eq!(params.target_color, Color::from_u32(0x00FF00));
    assert_eq!(params.fill_color, Some(Color::WHITE));
    assert_eq!(params.tolerance, 4.0);
}

#[test]
fn test_invalid_parameters() {
    let err = FilterParameters::from_toml("fill_color = \"#ffffff\"\n").unwrap_err();
    assert!(matches!(err, PaletteError::InvalidConfig { .. }));

    let err = FilterParameters::from_toml("target_color = \"#gg0000\"\n").unwrap_err();
    assert!(matches!(err, PaletteError::InvalidConfig { .. }));

    let err = FilterParameters::from_toml("target_color = 0x1000000\n").unwrap_err();
    assert!(matches!(err, PaletteError::InvalidConfig { .. }));
}

#[test]
fn test_written_parameters_read_back() {
    let params = FilterParameters::new(Color::from_u32(0x123456)).with_tolerance(30.0);
    let text = params.to_toml().unwrap();
    assert!(text.contains("target_color = \"#123456\""), "{text}");
    assert!(!text.contains("fill_color"), "{text}");
    assert_eq!(FilterParameters::from_toml(&text).unwrap(), params);
}

#[test]
fn test_store_and_load() {
    let path = std::env::temp_dir().join(format!("icy_palette_filter_{}.toml", std::process::id()));
    let params = FilterParameters::new(Color::from_u32(0x00FF00)).with_fill_color(Some(Color::from_u32(0xFF00FF)));
    params.store(&path).unwrap();
    let loaded = FilterParameters::load(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.unwrap(), params);
}

#[test]
fn test_filter_from_loaded_parameters() {
    let source = Palette::from_colors(&[Color::from_u32(0x00FF00), Color::from_u32(0x000000)]);
    let params = FilterParameters::from_toml("target_color = \"#00ff00\"\n").unwrap();
    let filter = PaletteFilter::with_parameters(&source, params);
    assert!(filter.palette().is_transparent(0));
    assert!(!filter.palette().is_transparent(1));
}
