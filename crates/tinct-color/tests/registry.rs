//! Registry lookups, parsing and concurrent registration.

use std::sync::Arc;
use std::thread;

use tinct_color::{spaces, Color, ColorSpace, ParseError, SpaceRegistry, Transform};

#[test]
fn parse_matches_constructor() {
    let registry = SpaceRegistry::with_builtins();
    let parsed = registry.parse("color(srgb 1 0 0)").unwrap();
    assert_eq!(parsed, Color::new(&spaces::srgb(), 1.0, 0.0, 0.0));
    assert_eq!(parsed.to_string(), "color(srgb 1.000000 0.000000 0.000000)");
}

#[test]
fn serialized_colors_parse_back() {
    let registry = SpaceRegistry::with_builtins();
    for space in spaces::all() {
        let c = Color::with_alpha(&space, 0.25, 0.5, 0.75, 0.5);
        let parsed = registry.parse(&c.to_string()).unwrap();
        assert_eq!(parsed, c, "{}", space.id());
    }
}

#[test]
fn unknown_space() {
    let registry = SpaceRegistry::with_builtins();
    assert_eq!(
        registry.parse("color(--hsl 1 0 0)"),
        Err(ParseError::UnknownSpace("--hsl".into()))
    );
}

#[test]
fn concurrent_register_and_lookup() {
    let registry = SpaceRegistry::with_builtins();
    let builtins = registry.len();

    thread::scope(|s| {
        for t in 0..8 {
            let registry = &registry;
            s.spawn(move || {
                for i in 0..25 {
                    let space = ColorSpace::builder(format!("scaled-{t}-{i}"), "Scaled XYZ")
                        .base(&spaces::xyz_d65())
                        .transform(Transform::custom(|c| c.map(|v| v / 2.0), |c| c.map(|v| v * 2.0)))
                        .build();
                    registry.register(&space);
                    assert!(Arc::ptr_eq(&registry.lookup("srgb").unwrap(), &spaces::srgb()));
                    assert!(registry.lookup(&format!("scaled-{t}-{i}")).is_some());
                }
            });
        }
    });

    assert_eq!(registry.len(), builtins + 8 * 25);
}
