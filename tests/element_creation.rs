use egui::Pos2;
use shape_paint::element::{self, ElementKind, ERASER_COLOR};
use shape_paint::{Color, Document, Element};

#[test]
fn test_factory_seeds_degenerate_geometry() {
    let start = Pos2::new(10.0, 10.0);

    let ellipse = element::factory::create_ellipse(start, Color::RED, 2.0);
    assert_eq!(ellipse.kind(), ElementKind::Ellipse);
    let e = ellipse.as_ellipse().unwrap();
    assert_eq!(e.center(), start);
    assert_eq!(e.radius_x(), element::INITIAL_ELLIPSE_RADIUS);
    assert_eq!(e.radius_y(), element::INITIAL_ELLIPSE_RADIUS);

    let rect = element::factory::create_rectangle(start, Color::RED, 2.0);
    assert_eq!(rect.as_rectangle().unwrap().edges(), [10.0, 10.0, 12.0, 12.0]);

    let pen = element::factory::create_pen(start, Color::RED, 2.0);
    assert_eq!(pen.as_stroke().unwrap().points(), &[start, Pos2::new(11.0, 11.0)]);

    let eraser = element::factory::create_eraser(start, 2.0);
    assert_eq!(eraser.kind(), ElementKind::Eraser);
    assert_eq!(eraser.as_stroke().unwrap().color(), None);
}

#[test]
fn test_eraser_ignores_recolor() {
    let mut eraser = element::factory::create_eraser(Pos2::ZERO, 2.0);
    eraser.set_color(Color::RED);
    assert!(eraser.as_stroke().unwrap().is_eraser());

    let mut pen = element::factory::create_pen(Pos2::ZERO, Color::RED, 2.0);
    pen.set_color(Color::BLACK);
    assert_eq!(pen.as_stroke().unwrap().color(), Some(Color::BLACK));
    assert_ne!(ERASER_COLOR, Color::BLACK);
}

#[test]
fn test_iter_ordered_matches_insertion_order() {
    let mut doc = Document::new();
    let mut inserted = Vec::new();
    for i in 0..20 {
        let pos = Pos2::new(i as f32, i as f32);
        let element = match i % 4 {
            0 => element::factory::create_ellipse(pos, Color::RED, 1.0),
            1 => element::factory::create_rectangle(pos, Color::RED, 1.0),
            2 => element::factory::create_pen(pos, Color::RED, 1.0),
            _ => element::factory::create_eraser(pos, 1.0),
        };
        inserted.push((doc.insert(element), i % 4));
    }

    let ids: Vec<_> = doc.iter_ordered().map(|(id, _)| id).collect();
    assert_eq!(ids, (0..20).collect::<Vec<_>>());
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    // The iterator is restartable
    assert_eq!(doc.iter_ordered().count(), 20);
    assert_eq!(inserted.len(), 20);
}

#[test]
fn test_clear_keeps_counting() {
    let mut doc = Document::new();
    doc.insert(element::factory::create_ellipse(Pos2::ZERO, Color::RED, 1.0));
    doc.insert(element::factory::create_ellipse(Pos2::ZERO, Color::RED, 1.0));
    doc.set_background(Color::BLACK);

    doc.clear();
    assert_eq!(doc.iter_ordered().count(), 0);
    assert_eq!(doc.background(), Color::WHITE);

    let id = doc.insert(element::factory::create_rectangle(Pos2::ZERO, Color::RED, 1.0));
    assert_eq!(id, 2);
}

#[test]
fn test_latest_of_kind_allows_mutation() {
    let mut doc = Document::new();
    doc.insert(element::factory::create_pen(Pos2::ZERO, Color::RED, 1.0));
    doc.insert(element::factory::create_ellipse(Pos2::ZERO, Color::RED, 1.0));

    if let Some((id, pen)) = doc.latest_of_kind(ElementKind::Pen) {
        assert_eq!(id, 0);
        pen.as_stroke_mut().unwrap().add_point(Pos2::new(9.0, 9.0));
    }
    assert_eq!(doc.get(0).unwrap().as_stroke().unwrap().points().len(), 3);
}
