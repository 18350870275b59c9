//! Blend operation properties
//!
//! Identities, the screen/multiply duality, overlay branch boundaries, and
//! the silent guards in `light` and `shine`.

use blend_tests::patterns::{TestPattern, generate_colors, random_percentages};
use blend_tests::reference::{multiply_exact, overlay_exact, screen_exact};
use oxblend_core::{Color, dim, light, multiply, overlay, screen, shine};

fn round(x: f64) -> u8 {
    (x + 0.5).floor() as u8
}

fn invert(c: Color) -> Color {
    Color::new(255 - c.r, 255 - c.g, 255 - c.b)
}

#[test]
fn multiply_matches_formula_on_random_pairs() {
    let bases = generate_colors(TestPattern::Random(1), 500);
    let tops = generate_colors(TestPattern::Random(2), 500);

    for (&a, &b) in bases.iter().zip(&tops) {
        let out = multiply(a, &[b]);
        for i in 0..3 {
            assert_eq!(
                out[i],
                round(multiply_exact(a[i] as f64, b[i] as f64)),
                "multiply({a}, {b}) channel {i}"
            );
        }
    }
}

#[test]
fn screen_is_inverted_multiply() {
    let bases = generate_colors(TestPattern::Random(3), 500);
    let tops = generate_colors(TestPattern::Random(4), 500);

    for (&a, &b) in bases.iter().zip(&tops) {
        let screened = screen(a, &[b]);
        let dual = invert(multiply(invert(a), &[invert(b)]));
        for i in 0..3 {
            assert!(
                screened[i].abs_diff(dual[i]) <= 1,
                "screen({a}, {b}) = {screened}, dual = {dual}"
            );
        }
    }
}

#[test]
fn screen_matches_formula() {
    for a in generate_colors(TestPattern::Grayscale, 0) {
        let b = Color::new(17, 128, 240);
        let out = screen(a, &[b]);
        for i in 0..3 {
            assert_eq!(out[i], round(screen_exact(a[i] as f64, b[i] as f64)));
        }
    }
}

#[test]
fn overlay_branch_boundary() {
    for v in 0..=255u8 {
        let top = Color::new(v, v, v);

        // 127 / 255 < 0.5: doubled multiply
        let low = overlay(Color::new(127, 127, 127), &[top]);
        assert_eq!(low.r, round(2.0 * 127.0 * v as f64 / 255.0), "top {v}");

        // 128 / 255 >= 0.5: doubled screen
        let high = overlay(Color::new(128, 128, 128), &[top]);
        assert_eq!(
            high.r,
            round(255.0 - 2.0 * 127.0 * (255.0 - v as f64) / 255.0),
            "top {v}"
        );
    }
}

#[test]
fn overlay_near_midpoint_matches_reference() {
    let tops = generate_colors(TestPattern::Random(5), 16);
    for base in generate_colors(TestPattern::Midpoint, 0) {
        for &top in &tops {
            let out = overlay(base, &[top]);
            for i in 0..3 {
                assert_eq!(out[i], round(overlay_exact(base[i] as f64, top[i] as f64)));
            }
        }
    }
}

#[test]
fn folds_apply_in_order() {
    let base = Color::new(180, 90, 30);
    let layers = generate_colors(TestPattern::Random(6), 5);

    let stepwise = layers.iter().fold(base, |acc, &c| overlay(acc, &[c]));
    assert_eq!(overlay(base, &layers), stepwise);

    let stepwise = layers.iter().fold(base, |acc, &c| screen(acc, &[c]));
    assert_eq!(screen(base, &layers), stepwise);
}

#[test]
fn identities() {
    for c in generate_colors(TestPattern::Random(7), 200) {
        assert_eq!(multiply(c, &[Color::WHITE]), c);
        assert_eq!(screen(c, &[Color::BLACK]), c);
        assert_eq!(multiply(c, &[Color::BLACK]), Color::BLACK);
        assert_eq!(screen(c, &[Color::WHITE]), Color::WHITE);
    }
}

#[test]
fn dim_with_black_is_identity() {
    let colors = generate_colors(TestPattern::Random(8), 100);
    let mut percentages = random_percentages(9, 10);
    percentages.extend([-2.0, 0.0, 1.0, 3.5]);

    for c in colors {
        for &p in &percentages {
            assert_eq!(dim(c, Color::BLACK, p), c, "dim({c}, black, {p})");
        }
    }
}

#[test]
fn dim_never_brightens_within_unit_percentage() {
    let bases = generate_colors(TestPattern::Random(10), 200);
    let layers = generate_colors(TestPattern::Random(11), 200);
    let percentages = random_percentages(12, 200);

    for ((&base, &layer), &p) in bases.iter().zip(&layers).zip(&percentages) {
        let out = dim(base, layer, p);
        for i in 0..3 {
            assert!(out[i] <= base[i]);
        }
    }
}

#[test]
fn light_and_shine_ignore_non_positive_reflex() {
    let bases = generate_colors(TestPattern::Random(13), 100);
    let layers = generate_colors(TestPattern::Random(14), 100);

    for (&base, &layer) in bases.iter().zip(&layers) {
        for reflex in [0.0, -0.0, -1.0, -100.0, f64::NAN] {
            for p in [0.0, 0.5, 0.61, 0.9, 1.0] {
                assert_eq!(light(base, layer, p, reflex), base);
                assert_eq!(shine(base, layer, p, reflex), base);
            }
        }
    }
}

#[test]
fn shine_ignores_low_percentage() {
    let bases = generate_colors(TestPattern::Random(15), 100);
    let layers = generate_colors(TestPattern::Random(16), 100);

    for (&base, &layer) in bases.iter().zip(&layers) {
        for p in [-1.0, 0.0, 0.3, 0.59, 0.6, 0.60] {
            for reflex in [0.5, 1.0, 10.0] {
                assert_eq!(shine(base, layer, p, reflex), base);
            }
        }
    }
}

#[test]
fn shine_never_darkens() {
    let bases = generate_colors(TestPattern::Random(17), 200);
    let layers = generate_colors(TestPattern::Random(18), 200);

    for (&base, &layer) in bases.iter().zip(&layers) {
        let out = shine(base, layer, 0.8, 3.0);
        for i in 0..3 {
            assert!(out[i] >= base[i]);
        }
    }
}
