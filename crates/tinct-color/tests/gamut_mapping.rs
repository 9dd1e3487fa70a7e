//! Gamut mapping behavior against narrow and wide RGB gamuts.

use approx::assert_abs_diff_eq;
use tinct_color::{gamut_map_css, spaces, Color, DeltaE, GamutMapConfig, GamutMapper, Space};

fn bounded_destinations() -> Vec<Space> {
    vec![
        spaces::srgb(),
        spaces::srgb_linear(),
        spaces::display_p3(),
        spaces::a98_rgb(),
        spaces::rec2020(),
        spaces::prophoto_rgb(),
    ]
}

#[test]
fn in_gamut_colors_are_converted_only() {
    let c = Color::with_alpha(&spaces::srgb(), 0.2, 0.5, 0.8, 0.7);
    for to in bounded_destinations() {
        assert_eq!(gamut_map_css(&c, &to), c.convert(&to), "{}", to.id());
    }
}

#[test]
fn mapping_is_idempotent() {
    let c = Color::new(&spaces::oklch(), 0.65, 0.29, 0.0);
    let once = gamut_map_css(&c, &spaces::srgb());
    let twice = gamut_map_css(&once, &spaces::srgb());
    assert_eq!(once, twice);
}

#[test]
fn always_lands_in_gamut() {
    for to in bounded_destinations() {
        for l in 1..20 {
            for chroma in [0.05, 0.15, 0.3, 0.5, 1.0] {
                for h in (0..360).step_by(30) {
                    let c = Color::new(&spaces::oklch(), l as f64 / 20.0, chroma, h as f64);
                    let mapped = gamut_map_css(&c, &to);
                    assert!(mapped.in_gamut(), "{c} -> {} gave {mapped}", to.id());
                    assert!(std::sync::Arc::ptr_eq(mapped.space(), &to));
                }
            }
        }
    }
}

#[test]
fn chroma_is_reduced_not_lightness() {
    let c = Color::new(&spaces::oklch(), 0.65, 0.29, 0.0);
    let mapped = gamut_map_css(&c, &spaces::srgb()).convert(&spaces::oklch()).values();
    assert!(mapped[1] < 0.29);
    assert_abs_diff_eq!(mapped[0], 0.65, epsilon = 0.02);
}

#[test]
fn white_and_black_endpoints() {
    let white = Color::new(&spaces::oklch(), 1.0, 0.2, 40.0);
    let brighter = Color::new(&spaces::oklch(), 1.3, 0.1, 200.0);
    let black = Color::new(&spaces::oklch(), 0.0, 0.2, 40.0);
    let darker = Color::new(&spaces::oklch(), -0.1, 0.1, 200.0);

    for to in bounded_destinations() {
        for c in [&white, &brighter] {
            for v in gamut_map_css(c, &to).values() {
                assert_abs_diff_eq!(v, 1.0, epsilon = 1e-6);
            }
        }
        for c in [&black, &darker] {
            for v in gamut_map_css(c, &to).values() {
                assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn extreme_lightness_stays_in_gamut() {
    for (l, chroma, h) in [(0.001, 0.3, 200.0), (0.01, 0.4, 30.0), (0.99, 0.3, 100.0), (0.999, 0.5, 300.0)] {
        let c = Color::new(&spaces::oklch(), l, chroma, h);
        assert!(gamut_map_css(&c, &spaces::srgb()).in_gamut());
        assert!(gamut_map_css(&c, &spaces::prophoto_rgb()).in_gamut());
    }
}

#[test]
fn wide_gamut_source_into_prophoto() {
    // Display P3 fits inside ProPhoto
    let red = Color::new(&spaces::display_p3(), 1.0, 0.0, 0.0);
    assert_eq!(gamut_map_css(&red, &spaces::prophoto_rgb()), red.convert(&spaces::prophoto_rgb()));

    // ... but not inside sRGB
    let mapped = gamut_map_css(&red, &spaces::srgb());
    assert!(!red.in_gamut_of(&spaces::srgb()));
    assert!(mapped.in_gamut());
}

#[test]
fn unbounded_destination_is_plain_conversion() {
    let c = Color::new(&spaces::oklch(), 0.7, 0.9, 120.0);
    for to in [spaces::oklab(), spaces::lab(), spaces::xyz_d50()] {
        assert_eq!(gamut_map_css(&c, &to), c.convert(&to));
    }
}

#[test]
fn configurable_mapper() {
    let coarse = GamutMapper::new(GamutMapConfig {
        jnd: 0.05,
        epsilon: 1e-3,
        metric: DeltaE::E76,
    });
    assert_eq!(coarse.config().jnd, 0.05);
    let c = Color::new(&spaces::oklch(), 0.5, 0.4, 260.0);
    assert!(coarse.map(&c, &spaces::srgb()).in_gamut());
    assert!(c.map_to_gamut(&spaces::srgb()).in_gamut());
}
