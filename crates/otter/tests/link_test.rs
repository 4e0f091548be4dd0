use otter::{Card, CardKind, link_path, links};

fn card(id: &str, x: f64, y: f64) -> Card {
    Card::new(id, CardKind::Identity, id, x, y)
}

#[test]
fn coincident_endpoints_give_a_finite_curve() {
    let a = card("a", 250.0, 350.0);
    for t in [0.0, 1.0, 2617.99, 1.7e12, -5.0] {
        let path = link_path(&a, &a, t);
        for p in [path.from, path.control, path.to] {
            assert!(p.x.is_finite() && p.y.is_finite(), "t={t}: {p:?}");
        }
        assert_eq!((path.control.x, path.control.y), (250.0, 350.0));
        assert!(!path.to_svg_path().contains("NaN"));
    }
}

#[test]
fn wave_term_breathes_the_bulge() {
    let a = card("a", 100.0, 100.0);
    let b = card("b", 500.0, 100.0);

    // sin(t * 0.0006) peaks at t = (pi / 2) / 0.0006.
    let peak = std::f64::consts::FRAC_PI_2 / 0.0006;
    let high = link_path(&a, &b, peak);
    let low = link_path(&a, &b, -peak);

    assert!((high.control.y - 128.0).abs() < 1e-9, "high: {:?}", high.control);
    assert!((low.control.y - 112.0).abs() < 1e-9, "low: {:?}", low.control);
    assert!((high.control.x - 300.0).abs() < 1e-9);
}

#[test]
fn reversed_link_bulges_to_the_other_side() {
    let a = card("a", 100.0, 100.0);
    let b = card("b", 500.0, 100.0);

    let forward = link_path(&a, &b, 0.0);
    let backward = link_path(&b, &a, 0.0);

    assert_eq!(forward.control.y, 120.0);
    assert_eq!(backward.control.y, 80.0);
}

#[test]
fn links_are_listed_once_per_pair() {
    let cards = vec![
        card("a", 100.0, 100.0).with_connections(["b", "c", "ghost", "a"]),
        card("b", 400.0, 100.0).with_connections(["a"]),
        card("c", 400.0, 400.0),
        card("d", 100.0, 400.0).with_connections(["c"]),
    ];

    let pairs: Vec<(&str, &str)> = links(&cards, 0.0)
        .iter()
        .map(|l| (l.from, l.to))
        .collect();

    assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("c", "d")]);
}

#[test]
fn svg_path_uses_quadratic_command() {
    let a = card("a", 100.0, 100.0);
    let b = card("b", 500.0, 100.0);
    assert_eq!(link_path(&a, &b, 0.0).to_svg_path(), "M 100 100 Q 300 120 500 100");
}
