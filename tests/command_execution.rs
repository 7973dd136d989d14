use egui::{PointerButton, Pos2, Rect, Vec2};
use shape_paint::command::Command;
use shape_paint::element::ElementKind;
use shape_paint::input::route_event;
use shape_paint::surface::{DrawCall, RecordingFactory};
use shape_paint::tools::{FillOutcome, ToolbarButton};
use shape_paint::{Color, DpiScale, EditorContext, InputEvent, Mode, Renderer, Shape, StrokeWidth, ToolSettings};

const HELD: &[PointerButton] = &[PointerButton::Primary];

fn context() -> EditorContext {
    EditorContext::new(ToolSettings::default(), DpiScale::default())
}

fn renderer() -> Renderer<RecordingFactory> {
    Renderer::new(RecordingFactory::new(), Rect::from_min_size(Pos2::ZERO, Vec2::new(640.0, 480.0)))
}

fn no_choice() -> Option<Color> {
    None
}

fn run(ctx: &mut EditorContext, command: Command) {
    command.execute(ctx, &mut no_choice);
}

fn drag(ctx: &mut EditorContext, from: Pos2, to: Pos2) {
    ctx.pointer_down(from);
    ctx.pointer_move(to, HELD);
    ctx.pointer_up();
}

#[test]
fn test_rectangle_scenario() {
    let mut ctx = context();
    let mut renderer = renderer();
    run(&mut ctx, Command::Toolbar(ToolbarButton::Rectangle));

    route_event(
        &InputEvent::PointerDown {
            position: Pos2::new(10.0, 10.0),
        },
        &mut ctx,
        &mut renderer,
    );
    let rect = ctx.document().get(0).and_then(|e| e.as_rectangle()).unwrap();
    assert_eq!(rect.edges(), [10.0, 10.0, 12.0, 12.0]);

    route_event(
        &InputEvent::PointerMove {
            position: Pos2::new(50.0, 60.0),
            held_buttons: vec![PointerButton::Primary],
        },
        &mut ctx,
        &mut renderer,
    );
    route_event(&InputEvent::PointerUp, &mut ctx, &mut renderer);

    let rect = ctx.document().get(0).and_then(|e| e.as_rectangle()).unwrap();
    assert_eq!(rect.edges(), [10.0, 10.0, 50.0, 60.0]);
    assert_eq!(ctx.document().len(), 1);

    route_event(&InputEvent::Repaint, &mut ctx, &mut renderer);
    let bounds = Rect::from_min_max(Pos2::new(10.0, 10.0), Pos2::new(50.0, 60.0));
    assert_eq!(
        renderer.surface().unwrap().calls(),
        &[
            DrawCall::BeginFrame,
            DrawCall::Clear(Color::WHITE),
            DrawCall::FillRectangle {
                rect: bounds,
                color: Color::YELLOW,
            },
            DrawCall::StrokeRectangle {
                rect: bounds,
                color: Color::YELLOW,
                width: 1.0,
            },
            DrawCall::EndFrame,
        ]
    );
}

#[test]
fn test_ellipse_drag_spans_from_press() {
    let mut ctx = context();
    ctx.pointer_down(Pos2::new(100.0, 100.0));
    ctx.pointer_move(Pos2::new(140.0, 80.0), HELD);
    ctx.pointer_move(Pos2::new(60.0, 160.0), HELD);

    let ellipse = ctx.document().get(0).and_then(|e| e.as_ellipse()).unwrap();
    assert_eq!(ellipse.center(), Pos2::new(80.0, 130.0));
    assert_eq!(ellipse.radius_x(), 20.0);
    assert_eq!(ellipse.radius_y(), 30.0);
}

#[test]
fn test_pen_and_eraser_append_points() {
    let mut ctx = context();
    run(&mut ctx, Command::Toolbar(ToolbarButton::Pen));
    ctx.pointer_down(Pos2::new(0.0, 0.0));
    for i in 1..=5 {
        ctx.pointer_move(Pos2::new(i as f32 * 10.0, 0.0), HELD);
    }
    ctx.pointer_up();

    run(&mut ctx, Command::Toolbar(ToolbarButton::Eraser));
    ctx.pointer_down(Pos2::new(0.0, 20.0));
    ctx.pointer_move(Pos2::new(30.0, 20.0), HELD);
    ctx.pointer_up();

    let pen = ctx.document().get(0).and_then(|e| e.as_stroke()).unwrap();
    assert_eq!(pen.points().len(), 7);
    assert_eq!(pen.color(), Some(Color::YELLOW));

    let eraser = ctx.document().get(1).unwrap();
    assert_eq!(eraser.kind(), ElementKind::Eraser);
    assert_eq!(eraser.as_stroke().unwrap().points().len(), 3);
}

#[test]
fn test_clear_mode_erases_whatever_shape_is_selected() {
    let mut ctx = context();
    run(&mut ctx, Command::SelectShape(Shape::Rectangle));
    run(&mut ctx, Command::SelectMode(Mode::Clear));
    drag(&mut ctx, Pos2::new(5.0, 5.0), Pos2::new(9.0, 9.0));

    let element = ctx.document().get(0).unwrap();
    assert_eq!(element.kind(), ElementKind::Eraser);
    assert_eq!(element.as_stroke().unwrap().points().len(), 3);
}

#[test]
fn test_moves_after_release_change_nothing() {
    let mut ctx = context();
    run(&mut ctx, Command::Toolbar(ToolbarButton::Pen));
    drag(&mut ctx, Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));

    assert!(!ctx.pointer_move(Pos2::new(50.0, 50.0), HELD));
    assert_eq!(ctx.document().get(0).unwrap().as_stroke().unwrap().points().len(), 3);
}

#[test]
fn test_drag_only_touches_the_active_element() {
    let mut ctx = context();
    run(&mut ctx, Command::Toolbar(ToolbarButton::Rectangle));
    drag(&mut ctx, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    drag(&mut ctx, Pos2::new(20.0, 20.0), Pos2::new(30.0, 30.0));

    let first = ctx.document().get(0).and_then(|e| e.as_rectangle()).unwrap();
    assert_eq!(first.edges(), [0.0, 0.0, 10.0, 10.0]);
    let second = ctx.document().get(1).and_then(|e| e.as_rectangle()).unwrap();
    assert_eq!(second.edges(), [20.0, 20.0, 30.0, 30.0]);
}

#[test]
fn test_fill_recolors_every_overlapping_shape() {
    let mut ctx = context();
    run(&mut ctx, Command::Toolbar(ToolbarButton::Ellipse));
    drag(&mut ctx, Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0));
    run(&mut ctx, Command::Toolbar(ToolbarButton::Rectangle));
    drag(&mut ctx, Pos2::new(40.0, 40.0), Pos2::new(200.0, 200.0));
    run(&mut ctx, Command::Toolbar(ToolbarButton::Pen));
    drag(&mut ctx, Pos2::new(50.0, 50.0), Pos2::new(60.0, 60.0));

    let fill_color = Color::rgb(0.1, 0.2, 0.3);
    ctx.set_brush_color(fill_color);
    run(&mut ctx, Command::Toolbar(ToolbarButton::Fill));
    assert!(ctx.pointer_down(Pos2::new(50.0, 50.0)));
    ctx.pointer_up();

    let doc = ctx.document();
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.get(0).unwrap().as_ellipse().unwrap().color(), fill_color);
    assert_eq!(doc.get(1).unwrap().as_rectangle().unwrap().color(), fill_color);
    assert_eq!(doc.get(2).unwrap().as_stroke().unwrap().color(), Some(Color::YELLOW));
    assert_eq!(doc.background(), Color::WHITE);
}

#[test]
fn test_fill_outside_recolors_background() {
    let mut ctx = context();
    drag(&mut ctx, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    ctx.set_brush_color(Color::BLACK);

    assert_eq!(ctx.fill_area(Pos2::new(300.0, 300.0)), FillOutcome::Background);
    assert_eq!(ctx.document().background(), Color::BLACK);
    assert_eq!(ctx.document().get(0).unwrap().as_ellipse().unwrap().color(), Color::YELLOW);
}

#[test]
fn test_fill_ignores_moves() {
    let mut ctx = context();
    run(&mut ctx, Command::SelectMode(Mode::Fill));
    ctx.pointer_down(Pos2::new(1.0, 1.0));
    assert!(!ctx.pointer_move(Pos2::new(2.0, 2.0), HELD));
    assert!(ctx.document().is_empty());
    assert!(ctx.state().is_idle());
}

#[test]
fn test_clear_canvas_keeps_tool_settings() {
    let mut ctx = context();
    run(&mut ctx, Command::Toolbar(ToolbarButton::Pen));
    run(&mut ctx, Command::SelectWidth(StrokeWidth::new(4).unwrap()));
    ctx.set_brush_color(Color::RED);
    drag(&mut ctx, Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));
    ctx.fill_area(Pos2::new(500.0, 500.0));

    let settings_before = *ctx.settings();
    run(&mut ctx, Command::ClearCanvas);

    assert_eq!(ctx.document().iter_ordered().count(), 0);
    assert_eq!(ctx.document().background(), Color::WHITE);
    assert_eq!(*ctx.settings(), settings_before);

    ctx.pointer_down(Pos2::new(1.0, 1.0));
    assert_eq!(ctx.state().active_element(), Some(1));
}

#[test]
fn test_clear_during_drag_ends_it() {
    let mut ctx = context();
    ctx.pointer_down(Pos2::new(0.0, 0.0));
    run(&mut ctx, Command::ClearCanvas);
    assert!(ctx.state().is_idle());
    assert!(!ctx.pointer_move(Pos2::new(5.0, 5.0), HELD));
}

#[test]
fn test_width_applies_to_new_elements_only() {
    let mut ctx = context();
    run(&mut ctx, Command::Toolbar(ToolbarButton::Rectangle));
    drag(&mut ctx, Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));

    run(&mut ctx, Command::SelectWidth(StrokeWidth::new(3).unwrap()));
    run(&mut ctx, Command::SelectWidth(StrokeWidth::new(5).unwrap()));
    let checked: Vec<u8> = StrokeWidth::all()
        .filter(|w| ctx.settings().width.is_checked(*w))
        .map(|w| w.value())
        .collect();
    assert_eq!(checked, vec![5]);

    drag(&mut ctx, Pos2::new(10.0, 10.0), Pos2::new(15.0, 15.0));
    let doc = ctx.document();
    assert_eq!(doc.get(0).unwrap().as_rectangle().unwrap().stroke_width(), 1.0);
    assert_eq!(doc.get(1).unwrap().as_rectangle().unwrap().stroke_width(), 5.0);
}

#[test]
fn test_chosen_color_is_used_with_red_and_blue_swapped() {
    let mut ctx = context();
    let mut chooser = || Some(Color::RED);
    Command::ChooseColor.execute(&mut ctx, &mut chooser);
    assert_eq!(ctx.settings().brush_color, Color::rgb(0.0, 0.0, 1.0));

    drag(&mut ctx, Pos2::new(0.0, 0.0), Pos2::new(4.0, 4.0));
    assert_eq!(
        ctx.document().get(0).unwrap().as_ellipse().unwrap().color(),
        Color::rgb(0.0, 0.0, 1.0)
    );
}
