use crate::components::map_canvas::painter;
use crate::components::map_canvas::surface::CanvasSurface;
use crate::engine::{InputEvent, MapEngine};
#[allow(unused_imports)]
use crate::logging::log;
use crate::models::TransitMap;
use leptos::{
    batch, component, create_effect, create_node_ref, create_signal, view, IntoView, ReadSignal,
    SignalGet, SignalGetUntracked, SignalSet, SignalWith, WriteSignal,
};
use leptos_use::{use_element_size, UseElementSizeReturn};
use web_sys::{MouseEvent, TouchEvent, WheelEvent};

/// Translate a browser client position into surface-local pixels.
fn pointer_position(
    canvas_ref: leptos::NodeRef<leptos::html::Canvas>,
    client_x: i32,
    client_y: i32,
) -> Option<(f64, f64)> {
    let canvas_elem = canvas_ref.get()?;
    let canvas: &web_sys::HtmlCanvasElement = &canvas_elem;
    let rect = canvas.get_bounding_client_rect();
    Some((
        f64::from(client_x) - rect.left(),
        f64::from(client_y) - rect.top(),
    ))
}

/// Run one event through the engine and persist the outcome.
///
/// The engine state always lands back in its signal, but the repaint epoch
/// only advances when the engine says the view changed. The render effect
/// tracks the epoch rather than the engine, so drag arming and release never
/// schedule a pass.
fn dispatch_event(
    engine: ReadSignal<MapEngine>,
    set_engine: WriteSignal<MapEngine>,
    repaint_epoch: ReadSignal<u64>,
    set_repaint_epoch: WriteSignal<u64>,
    event: InputEvent,
) {
    let mut current = engine.get_untracked();
    let needs_repaint = current.handle_event(event);

    batch(move || {
        set_engine.set(current);
        if needs_repaint {
            set_repaint_epoch.set(repaint_epoch.get_untracked() + 1);
        }
    });
}

fn canvas_cursor_style(engine: ReadSignal<MapEngine>) -> &'static str {
    if engine.with(MapEngine::is_dragging) {
        "cursor: grabbing;"
    } else {
        "cursor: grab;"
    }
}

/// Keep the engine's viewport in step with the canvas element's CSS size.
fn setup_resize_effect(
    engine: ReadSignal<MapEngine>,
    set_engine: WriteSignal<MapEngine>,
    repaint_epoch: ReadSignal<u64>,
    set_repaint_epoch: WriteSignal<u64>,
    canvas_ref: leptos::NodeRef<leptos::html::Canvas>,
) {
    let UseElementSizeReturn { width, height } = use_element_size(canvas_ref);

    create_effect(move |_| {
        let new_width = width.get();
        let new_height = height.get();

        if new_width <= 0.0 || new_height <= 0.0 {
            return;
        }

        dispatch_event(
            engine,
            set_engine,
            repaint_epoch,
            set_repaint_epoch,
            InputEvent::Resize {
                width: new_width,
                height: new_height,
            },
        );
    });
}

/// Repaint whenever the map changes or the repaint epoch advances.
fn setup_render_effect(
    map: ReadSignal<TransitMap>,
    engine: ReadSignal<MapEngine>,
    set_engine: WriteSignal<MapEngine>,
    repaint_epoch: ReadSignal<u64>,
    canvas_ref: leptos::NodeRef<leptos::html::Canvas>,
) {
    create_effect(move |_| {
        let current_map = map.get();
        let _ = repaint_epoch.get();

        let Some(canvas) = canvas_ref.get() else { return };
        let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;

        let mut current_engine = engine.get_untracked();
        let width = current_engine.viewport().width;
        let height = current_engine.viewport().height;

        // Nothing sensible to paint before the first size observation
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        #[cfg(all(target_arch = "wasm32", feature = "perf_timing"))]
        let pass_start = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now());

        let surface = match CanvasSurface::from_canvas(canvas_elem.clone()) {
            Ok(surface) => surface,
            Err(message) => {
                web_sys::console::error_1(&message.into());
                return;
            }
        };
        surface.set_size(width as u32, height as u32);

        let scene = current_engine.build_scene(&current_map);
        for warning in &scene.warnings {
            web_sys::console::warn_1(
                &format!(
                    "Line \"{}\" references station {} which is not on the map; skipping it",
                    warning.line_name, warning.station
                )
                .into(),
            );
        }

        painter::paint(surface.context(), &scene, width, height);

        // Persist which dangling references have been reported. The effect
        // does not track the engine signal, so this queues no extra pass.
        set_engine.set(current_engine);

        #[cfg(all(target_arch = "wasm32", feature = "perf_timing"))]
        if let (Some(start), Some(perf)) = (
            pass_start,
            web_sys::window().and_then(|w| w.performance()),
        ) {
            log!("Render pass: {:.2}ms", perf.now() - start);
        }
    });
}

fn create_event_handlers(
    canvas_ref: leptos::NodeRef<leptos::html::Canvas>,
    engine: ReadSignal<MapEngine>,
    set_engine: WriteSignal<MapEngine>,
    repaint_epoch: ReadSignal<u64>,
    set_repaint_epoch: WriteSignal<u64>,
) -> (
    impl Fn(MouseEvent),
    impl Fn(MouseEvent),
    impl Fn(MouseEvent) + Copy,
    impl Fn(WheelEvent),
    impl Fn(TouchEvent),
    impl Fn(TouchEvent),
    impl Fn(TouchEvent),
) {
    let dispatch = move |event: InputEvent| {
        dispatch_event(engine, set_engine, repaint_epoch, set_repaint_epoch, event);
    };

    let handle_mouse_down = move |ev: MouseEvent| {
        if let Some((x, y)) = pointer_position(canvas_ref, ev.client_x(), ev.client_y()) {
            dispatch(InputEvent::PointerDown { x, y });
        }
    };

    let handle_mouse_move = move |ev: MouseEvent| {
        if let Some((x, y)) = pointer_position(canvas_ref, ev.client_x(), ev.client_y()) {
            dispatch(InputEvent::PointerMove { x, y });
        }
    };

    // Shared by mouseup and mouseleave; leaving the surface ends the drag
    let handle_pointer_end = move |_ev: MouseEvent| {
        dispatch(InputEvent::PointerUp);
    };

    let handle_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        dispatch(InputEvent::Wheel {
            delta_y: ev.delta_y(),
        });
    };

    let handle_touch_start = move |ev: TouchEvent| {
        ev.prevent_default();
        if let Some(touch) = ev.touches().item(0) {
            if let Some((x, y)) = pointer_position(canvas_ref, touch.client_x(), touch.client_y())
            {
                dispatch(InputEvent::PointerDown { x, y });
            }
        }
    };

    let handle_touch_move = move |ev: TouchEvent| {
        ev.prevent_default();
        if let Some(touch) = ev.touches().item(0) {
            if let Some((x, y)) = pointer_position(canvas_ref, touch.client_x(), touch.client_y())
            {
                dispatch(InputEvent::PointerMove { x, y });
            }
        }
    };

    let handle_touch_end = move |ev: TouchEvent| {
        ev.prevent_default();
        dispatch(InputEvent::PointerUp);
    };

    (
        handle_mouse_down,
        handle_mouse_move,
        handle_pointer_end,
        handle_wheel,
        handle_touch_start,
        handle_touch_move,
        handle_touch_end,
    )
}

/// The interactive map surface: a full-size canvas wired to one engine.
#[component]
#[must_use]
pub fn MapView(map: ReadSignal<TransitMap>) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    // The real size arrives with the first element size observation
    let (engine, set_engine) = create_signal(MapEngine::new(0.0, 0.0));
    let (repaint_epoch, set_repaint_epoch) = create_signal(0_u64);

    setup_resize_effect(engine, set_engine, repaint_epoch, set_repaint_epoch, canvas_ref);
    setup_render_effect(map, engine, set_engine, repaint_epoch, canvas_ref);

    let (
        handle_mouse_down,
        handle_mouse_move,
        handle_pointer_end,
        handle_wheel,
        handle_touch_start,
        handle_touch_move,
        handle_touch_end,
    ) = create_event_handlers(canvas_ref, engine, set_engine, repaint_epoch, set_repaint_epoch);

    view! {
        <div class="map-canvas-container">
            <canvas
                node_ref=canvas_ref
                class="map-canvas"
                on:mousedown=handle_mouse_down
                on:mousemove=handle_mouse_move
                on:mouseup=handle_pointer_end
                on:mouseleave=handle_pointer_end
                on:wheel=handle_wheel
                on:touchstart=handle_touch_start
                on:touchmove=handle_touch_move
                on:touchend=handle_touch_end
                on:contextmenu=|ev| ev.prevent_default()
                style=move || canvas_cursor_style(engine)
            />
        </div>
    }
}
