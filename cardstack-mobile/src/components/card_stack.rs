//! Card stack screen with drag-to-swap gesture

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{PointerEvent, TouchEvent};
use yew::prelude::*;

use cardstack_core::{
    CardStack, Layout, PoseMapper, Spring, SpringConfig, Viewport,
};

use super::card_face::CardFace;

const VIRTUAL_LABEL: &str = "Virtual card";
const VIRTUAL_DESCRIPTION: &str =
    "This is your virtual card. It's\nlike a physical card, but virtual";
const PHYSICAL_LABEL: &str = "Physical card";
const PHYSICAL_DESCRIPTION: &str =
    "This is your physical card. It's\nlike a virtual card, but physical";

/// Per-gesture bookkeeping: where the touch started and how far it has moved.
/// `touchend` carries no touch points, so the release decision reads `last_dy`.
#[derive(Default)]
struct GestureTracker {
    start_y: Option<f64>,
    last_dy: f64,
}

/// Interaction state shared between event handlers and the frame loop.
struct MotionState {
    stack: CardStack,
    spring: Option<Spring>,
    /// Pending animation frame; dropping it cancels the callback, which is
    /// how a new gesture supersedes a running snap.
    frame: Option<AnimationFrame>,
    last_timestamp: Option<f64>,
}

fn viewport_from_window() -> Viewport {
    let window = web_sys::window().expect("browser window");
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(390.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(844.0);
    Viewport { width, height }
}

fn begin_gesture(motion: &Rc<RefCell<MotionState>>, tracker: &Rc<RefCell<GestureTracker>>, y: f64) {
    let mut state = motion.borrow_mut();
    state.frame = None;
    state.spring = None;
    state.last_timestamp = None;

    let mut tracker = tracker.borrow_mut();
    tracker.start_y = Some(y);
    tracker.last_dy = 0.0;
}

fn move_gesture(
    motion: &Rc<RefCell<MotionState>>,
    tracker: &Rc<RefCell<GestureTracker>>,
    scroll: &UseStateHandle<f64>,
    y: f64,
) {
    let dy = {
        let mut tracker = tracker.borrow_mut();
        let start = match tracker.start_y {
            Some(start) => start,
            None => return,
        };
        let dy = y - start;
        tracker.last_dy = dy;
        dy
    };

    let mut state = motion.borrow_mut();
    if state.stack.drag(dy) {
        scroll.set(state.stack.scroll());
    }
}

fn end_gesture(
    motion: &Rc<RefCell<MotionState>>,
    tracker: &Rc<RefCell<GestureTracker>>,
    scroll: &UseStateHandle<f64>,
) {
    let dy = {
        let mut tracker = tracker.borrow_mut();
        if tracker.start_y.take().is_none() {
            return;
        }
        tracker.last_dy
    };

    {
        let mut state = motion.borrow_mut();
        let target = state.stack.release(dy);
        state.spring = Some(Spring::new(state.stack.scroll(), target, SpringConfig::default()));
        state.last_timestamp = None;
    }
    schedule_frame(motion.clone(), scroll.clone());
}

/// Steps the release spring once per animation frame until it settles,
/// mirroring each position into the scroll state so the cards re-render.
fn schedule_frame(motion: Rc<RefCell<MotionState>>, scroll: UseStateHandle<f64>) {
    let frame = {
        let motion = motion.clone();
        let scroll = scroll.clone();
        request_animation_frame(move |timestamp| {
            let keep_going = {
                let mut guard = motion.borrow_mut();
                let state = &mut *guard;
                let dt = match state.last_timestamp {
                    Some(previous) => (timestamp - previous) / 1000.0,
                    None => 1.0 / 60.0,
                };
                state.last_timestamp = Some(timestamp);

                let moving = match state.spring.as_mut() {
                    Some(spring) => {
                        let moving = spring.step(dt);
                        state.stack.set_scroll(spring.position());
                        moving
                    }
                    None => false,
                };
                scroll.set(state.stack.scroll());
                if !moving {
                    state.spring = None;
                    state.frame = None;
                    state.last_timestamp = None;
                }
                moving
            };
            if keep_going {
                schedule_frame(motion, scroll);
            }
        })
    };
    motion.borrow_mut().frame = Some(frame);
}

#[function_component(CardStackScreen)]
pub fn card_stack_screen() -> Html {
    let scene = use_memo((), |_| {
        let layout = Layout::from_viewport(viewport_from_window());
        let mapper = PoseMapper::new(&layout).expect("viewport leaves enough scroll travel");
        (layout, mapper)
    });
    let layout = scene.0;
    let mapper = &scene.1;

    let scroll = {
        let bottom = layout.bottom_position;
        use_state(move || bottom)
    };
    let motion = use_mut_ref(move || MotionState {
        stack: CardStack::new(layout),
        spring: None,
        frame: None,
        last_timestamp: None,
    });
    let tracker = use_mut_ref(GestureTracker::default);

    let on_touch_start = {
        let motion = motion.clone();
        let tracker = tracker.clone();

        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                begin_gesture(&motion, &tracker, touch.client_y() as f64);
            }
        })
    };

    let on_touch_move = {
        let motion = motion.clone();
        let tracker = tracker.clone();
        let scroll = scroll.clone();

        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                move_gesture(&motion, &tracker, &scroll, touch.client_y() as f64);
            }
        })
    };

    let on_touch_end = {
        let motion = motion.clone();
        let tracker = tracker.clone();
        let scroll = scroll.clone();

        Callback::from(move |_: TouchEvent| {
            end_gesture(&motion, &tracker, &scroll);
        })
    };

    // Pointer handlers cover desktop browsers; touch input stays on the
    // touch path, so only mouse pointers are handled here.
    let on_pointer_down = {
        let motion = motion.clone();
        let tracker = tracker.clone();

        Callback::from(move |e: PointerEvent| {
            if e.pointer_type() == "mouse" {
                begin_gesture(&motion, &tracker, e.client_y() as f64);
            }
        })
    };

    let on_pointer_move = {
        let motion = motion.clone();
        let tracker = tracker.clone();
        let scroll = scroll.clone();

        Callback::from(move |e: PointerEvent| {
            if e.pointer_type() == "mouse" {
                move_gesture(&motion, &tracker, &scroll, e.client_y() as f64);
            }
        })
    };

    let on_pointer_up = {
        let motion = motion.clone();
        let tracker = tracker.clone();
        let scroll = scroll.clone();

        Callback::from(move |e: PointerEvent| {
            if e.pointer_type() == "mouse" {
                end_gesture(&motion, &tracker, &scroll);
            }
        })
    };

    let top_pose = mapper.top(*scroll);
    let bottom_pose = mapper.bottom(*scroll);

    html! {
        <div
            class="card-stack"
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_up}
        >
            <CardFace
                label={VIRTUAL_LABEL}
                description={VIRTUAL_DESCRIPTION}
                pose={top_pose}
                metrics={layout.card}
            />
            <CardFace
                label={PHYSICAL_LABEL}
                description={PHYSICAL_DESCRIPTION}
                pose={bottom_pose}
                metrics={layout.card}
                label_above={true}
            />
        </div>
    }
}
