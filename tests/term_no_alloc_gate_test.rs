use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{GameLoop, GameSnapshot, ScriptedShapes};
use blockfall::term::{for_each_changed_run, FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, ShapeKind};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn render_and_diff_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);

    let mut game = GameLoop::new(ScriptedShapes::repeat(ShapeKind::T));
    game.handle_action(GameAction::Start);
    let mut snap = GameSnapshot::default();

    // Warm-up.
    game.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut prev);

    let mut now = 0u64;
    let mut changed_cells = 0usize;
    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let action = if i % 2 == 0 {
                GameAction::MoveLeft
            } else {
                GameAction::MoveRight
            };
            game.handle_action(action);
            now += 16;
            game.frame(now);

            game.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut next);
            let _ = for_each_changed_run(&prev, &next, |_, _, len| {
                changed_cells += len as usize;
                Ok(())
            });
            std::mem::swap(&mut prev, &mut next);
        }
    });

    assert_eq!(allocs, 0);
    assert!(changed_cells > 0);
}
