//! Card Stack Interaction Tests
//! Full drag, release, and settle scenarios across the core modules

use cardstack_core::{CardStack, Layout, PoseMapper, Spring, SpringConfig, Viewport};

const FRAME: f64 = 1.0 / 60.0;

fn phone_layout() -> Layout {
    Layout::from_viewport(Viewport {
        width: 390.0,
        height: 844.0,
    })
}

/// Drives the release spring until it settles, feeding each frame back into
/// the stack the way the screen's animation loop does.
fn settle(stack: &mut CardStack, target: f64) {
    let mut spring = Spring::new(stack.scroll(), target, SpringConfig::default());
    let mut frames = 0;
    loop {
        let moving = spring.step(FRAME);
        stack.set_scroll(spring.position());
        if !moving {
            break;
        }
        frames += 1;
        assert!(frames < 10_000, "spring failed to settle");
    }
}

// ============== Drag Tests ==============

#[test]
fn test_drag_maps_delta_through_ratio() {
    let mut stack = CardStack::new(phone_layout());
    let bottom = stack.layout().bottom_position;

    for dy in [-1.0, -40.0, -85.0, -200.0] {
        assert!(stack.drag(dy));
        assert_eq!(stack.scroll(), dy * 0.7 + bottom);
    }
}

#[test]
fn test_drag_never_leaves_snap_bounds() {
    let mut stack = CardStack::new(phone_layout());
    let layout = *stack.layout();
    let max_drag = layout.max_scroll_distance() / layout.drag_ratio;

    let mut dy = 0.0;
    while dy >= -max_drag {
        stack.drag(dy);
        assert!(stack.scroll() >= layout.top_position);
        assert!(stack.scroll() <= layout.bottom_position);
        dy -= 11.0;
    }
}

// ============== Release Tests ==============

#[test]
fn test_full_swap_up_and_back_down() {
    let mut stack = CardStack::new(phone_layout());
    let layout = *stack.layout();

    stack.drag(-120.0);
    let target = stack.release(-120.0);
    assert!(stack.on_top());
    assert_eq!(target, layout.top_position);
    settle(&mut stack, target);
    assert_eq!(stack.scroll(), layout.top_position);

    stack.drag(90.0);
    let target = stack.release(90.0);
    assert!(!stack.on_top());
    assert_eq!(target, layout.bottom_position);
    settle(&mut stack, target);
    assert_eq!(stack.scroll(), layout.bottom_position);
}

#[test]
fn test_short_drag_snaps_back_without_state_change() {
    let mut stack = CardStack::new(phone_layout());
    let layout = *stack.layout();

    for dy in [-1.0, -30.0, -84.9] {
        stack.drag(dy);
        let target = stack.release(dy);
        assert!(!stack.on_top());
        assert_eq!(target, layout.bottom_position);
        settle(&mut stack, target);
        assert_eq!(stack.scroll(), layout.bottom_position);
    }
}

#[test]
fn test_threshold_is_inclusive() {
    let mut stack = CardStack::new(phone_layout());
    stack.drag(-85.0);
    stack.release(-85.0);
    assert!(stack.on_top());

    stack.drag(85.0);
    stack.release(85.0);
    assert!(!stack.on_top());
}

#[test]
fn test_release_converges_from_any_drag_depth() {
    let layout = phone_layout();
    let max_drag = layout.max_scroll_distance() / layout.drag_ratio;

    let mut dy = 0.0;
    while dy >= -max_drag {
        let mut stack = CardStack::new(layout);
        stack.drag(dy);
        let target = stack.release(dy);
        settle(&mut stack, target);
        assert!(
            stack.scroll() == layout.top_position || stack.scroll() == layout.bottom_position
        );
        assert_eq!(stack.scroll(), target);
        dy -= 37.0;
    }
}

// ============== Presentation Tests ==============

#[test]
fn test_poses_stay_bounded_through_a_whole_gesture() {
    let mut stack = CardStack::new(phone_layout());
    let layout = *stack.layout();
    let mapper = PoseMapper::new(&layout).unwrap();

    let mut dy = 0.0;
    while dy >= -500.0 {
        stack.drag(dy);
        for pose in [mapper.top(stack.scroll()), mapper.bottom(stack.scroll())] {
            assert!((0.0..=1.0).contains(&pose.label_opacity));
            assert!((0.0..=1.0).contains(&pose.description_opacity));
        }
        dy -= 13.0;
    }

    let target = stack.release(-500.0);
    settle(&mut stack, target);
    let raised = mapper.top(stack.scroll());
    assert_eq!(raised.translate_y, -(layout.card.height / 1.5));
    assert_eq!(raised.label_opacity, 1.0);
}

#[test]
fn test_fixed_card_layout_behaves_like_proportional() {
    use cardstack_core::CardMetrics;

    let viewport = Viewport {
        width: 390.0,
        height: 844.0,
    };
    let layout = Layout::new(viewport, CardMetrics::fixed());
    let mut stack = CardStack::new(layout);
    let mapper = PoseMapper::new(&layout).unwrap();

    stack.drag(-100.0);
    let target = stack.release(-100.0);
    settle(&mut stack, target);
    assert!(stack.on_top());
    assert_eq!(stack.scroll(), layout.top_position);
    assert_eq!(mapper.bottom(stack.scroll()).translate_y, layout.top_position);
}
