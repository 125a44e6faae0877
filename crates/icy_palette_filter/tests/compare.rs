use icy_palette_filter::{color_distance, colors_match, compare_colors, Color, MAX_TOLERANCE};

fn random_color(rng: &mut fastrand::Rng) -> Color {
    Color::from_u32(rng.u32(0..=0xFF_FFFF))
}

#[test]
fn test_self_match_at_zero_tolerance() {
    let mut rng = fastrand::Rng::with_seed(0x0808_0808);
    for _ in 0..2000 {
        let c = random_color(&mut rng);
        assert!(colors_match(c, c, 0.0, false), "{c}");
        assert!(!colors_match(c, c, 0.0, true), "{c}");
    }
    assert!(colors_match(Color::BLACK, Color::BLACK, 0.0, false));
    assert!(colors_match(Color::WHITE, Color::WHITE, 0.0, false));
}

#[test]
fn test_invert_is_negation() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..2000 {
        let a = random_color(&mut rng);
        let b = random_color(&mut rng);
        let tolerance = rng.f64() * 800.0 - 20.0;
        assert_eq!(colors_match(a, b, tolerance, true), !colors_match(a, b, tolerance, false), "a={a} b={b} t={tolerance}");
    }
}

#[test]
fn test_zero_tolerance_only_matches_equal_colors() {
    let target = Color::from_u32(0x00FF00);
    assert!(colors_match(Color::from_u32(0x00FF00), target, 0.0, false));
    assert!(!colors_match(Color::from_u32(0x00FE00), target, 0.0, false));
    assert!(!colors_match(Color::from_u32(0x01FF00), target, 0.0, false));
    assert!(!colors_match(Color::from_u32(0x00FF01), target, 0.0, false));
}

#[test]
fn test_negative_tolerance_matches_nothing() {
    let c = Color::from_u32(0x123456);
    assert!(!colors_match(c, c, -1.0, false));
    assert!(colors_match(c, c, -1.0, true));
}

#[test]
fn test_max_tolerance_matches_everything() {
    let mut rng = fastrand::Rng::with_seed(765);
    for _ in 0..1000 {
        let a = random_color(&mut rng);
        let b = random_color(&mut rng);
        assert!(colors_match(a, b, MAX_TOLERANCE, false), "a={a} b={b}");
    }
    assert!(colors_match(Color::BLACK, Color::WHITE, MAX_TOLERANCE, false));
}

#[test]
fn test_distance_is_symmetric() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..1000 {
        let a = random_color(&mut rng);
        let b = random_color(&mut rng);
        assert_eq!(color_distance(a, b), color_distance(b, a), "a={a} b={b}");
    }
}

#[test]
fn test_match_is_monotonic_in_tolerance() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..1000 {
        let a = random_color(&mut rng);
        let b = random_color(&mut rng);
        let low = rng.f64() * 400.0;
        let high = low + rng.f64() * 400.0;
        if colors_match(a, b, low, false) {
            assert!(colors_match(a, b, high, false), "a={a} b={b} low={low} high={high}");
        }
    }
}

#[test]
fn test_green_is_weighted_heavier_than_red_and_blue() {
    let base = Color::new(0x80, 0x80, 0x80);
    let red = color_distance(base, Color::new(0x90, 0x80, 0x80));
    let green = color_distance(base, Color::new(0x80, 0x90, 0x80));
    let blue = color_distance(base, Color::new(0x80, 0x80, 0x90));
    assert!(green > red, "green={green} red={red}");
    assert!(green > blue, "green={green} blue={blue}");
    // green difference of 16 weighs exactly 4 * 16^2
    assert!((green - 32.0).abs() < 1e-12, "green={green}");
}

#[test]
fn test_compare_colors_on_packed_values() {
    assert!(compare_colors(0x080808, 0x090909, 4.0, false));
    assert!(!compare_colors(0x080808, 0x0A0A0A, 4.0, false));
    assert!(compare_colors(0x080808, 0x0A0A0A, 4.0, true));
}
