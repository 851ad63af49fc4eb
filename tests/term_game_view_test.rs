use blockfall::core::{GameLoop, GameSnapshot, ScriptedShapes};
use blockfall::term::{cell_color, AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, GameStatus, ShapeKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_in_palette_color() {
    let mut snap = GameSnapshot::default();
    snap.started = true;
    snap.board[19][0] = 3;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(Some(cell.style.fg), cell_color(3));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let mut game = GameLoop::new(ScriptedShapes::repeat(ShapeKind::T));
    game.handle_action(GameAction::Start);
    let snap = game.snapshot();

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 22));

    // T spawns at x=4: its top cell is column 5, its base spans 4..=6.
    assert_eq!(fb.get(1 + 5 * 2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 4 * 2, 1).unwrap().ch, '·');
    for col in 4..=6 {
        let cell = fb.get(1 + col * 2, 2).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(Some(cell.style.fg), cell_color(6));
    }
}

#[test]
fn term_view_side_panel_shows_score_and_start_control() {
    let mut snap = GameSnapshot::default();
    snap.started = true;
    snap.start_enabled = false;
    snap.score = 1230;
    snap.lines = 123;

    let view = GameView::default().with_rotate_key('x');
    let text = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("SCORE"));
    assert!(text.contains("1230"));
    assert!(text.contains("LINES"));
    assert!(text.contains("[ENTER] -----"));
    assert!(text.contains("↑/x"));

    snap.status = GameStatus::Over;
    snap.start_enabled = true;
    let text = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("[ENTER] START"));
}

#[test]
fn term_view_overlays() {
    let view = GameView::default();

    let idle = GameSnapshot::default();
    assert!(screen_text(&view.render(&idle, Viewport::new(22, 22))).contains("PRESS ENTER"));

    let mut over = GameSnapshot::default();
    over.started = true;
    over.status = GameStatus::Over;
    let text = screen_text(&view.render(&over, Viewport::new(22, 22)));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PRESS ENTER"));
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = GameSnapshot::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    view.render_into(&snap, Viewport::new(30, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 22));
    assert_eq!(fb, view.render(&snap, Viewport::new(30, 22)));
}
