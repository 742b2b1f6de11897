//! `#[wasm_bindgen]` surface for the orrery.
//!
//! The host page calls `app_init()` once, then `app_tick(dt)` from its
//! requestAnimationFrame loop, forwards pointer and control events, and
//! reads the per-frame buffers through the pointer/count accessors.
//!
//! Pointer coordinates cross this boundary already normalized to device
//! coordinates ([-1, 1] each axis, Y up) against the canvas rect; the
//! canvas fills the viewport, so window- and canvas-relative normalization
//! coincide.

pub mod runner;

pub use runner::AppRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use helio_core::{InputEvent, CUSTOM_RESIZE, CUSTOM_TOGGLE_PAUSE, CUSTOM_TOGGLE_THEME};

thread_local! {
    static RUNNER: RefCell<Option<AppRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AppRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("App not initialized. Call app_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn app_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = AppRunner::new();
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("helio: initialized");
}

#[wasm_bindgen]
pub fn app_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Pointer events ----

#[wasm_bindgen]
pub fn app_pointer_move(ndc_x: f32, ndc_y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x: ndc_x, y: ndc_y }));
}

#[wasm_bindgen]
pub fn app_click(ndc_x: f32, ndc_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Click { x: ndc_x, y: ndc_y }));
}

#[wasm_bindgen]
pub fn app_double_click() {
    with_runner(|r| r.push_input(InputEvent::DoubleClick));
}

// ---- Control surface ----

#[wasm_bindgen]
pub fn app_toggle_pause() {
    with_runner(|r| {
        r.push_input(InputEvent::Custom { kind: CUSTOM_TOGGLE_PAUSE, a: 0.0, b: 0.0, c: 0.0 })
    });
}

#[wasm_bindgen]
pub fn app_toggle_theme() {
    with_runner(|r| {
        r.push_input(InputEvent::Custom { kind: CUSTOM_TOGGLE_THEME, a: 0.0, b: 0.0, c: 0.0 })
    });
}

#[wasm_bindgen]
pub fn app_set_speed(planet: &str, value: f32) {
    with_runner(|r| r.set_speed(planet, value));
}

#[wasm_bindgen]
pub fn app_resize(width: f32, height: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::Custom { kind: CUSTOM_RESIZE, a: width, b: height, c: 0.0 })
    });
}

// ---- Textures ----

#[wasm_bindgen]
pub fn app_load_textures(json: &str) {
    with_runner(|r| r.load_textures(json));
}

#[wasm_bindgen]
pub fn app_texture_failed(slot: u32) {
    with_runner(|r| r.texture_failed(slot));
}

#[wasm_bindgen]
pub fn get_texture_count() -> u32 {
    with_runner(|r| r.app().textures().len() as u32)
}

#[wasm_bindgen]
pub fn get_texture_path(slot: u32) -> Option<String> {
    with_runner(|r| r.app().textures().path(slot).map(str::to_string))
}

// ---- Planet / UI state accessors ----

#[wasm_bindgen]
pub fn get_planet_count() -> u32 {
    with_runner(|r| r.app().planet_count() as u32)
}

#[wasm_bindgen]
pub fn get_planet_name(index: u32) -> Option<String> {
    with_runner(|r| r.app().planet_name(index as usize).map(str::to_string))
}

#[wasm_bindgen]
pub fn get_planet_speed(index: u32) -> f32 {
    with_runner(|r| r.app().planet_speed(index as usize).unwrap_or(0.0))
}

#[wasm_bindgen]
pub fn get_hover_index() -> i32 {
    with_runner(|r| r.app().hover_index())
}

#[wasm_bindgen]
pub fn get_hover_name() -> Option<String> {
    with_runner(|r| r.app().hover_name().map(str::to_string))
}

#[wasm_bindgen]
pub fn is_paused() -> bool {
    with_runner(|r| r.app().paused())
}

#[wasm_bindgen]
pub fn get_theme() -> String {
    with_runner(|r| r.app().theme().as_str().to_string())
}

#[wasm_bindgen]
pub fn get_clear_color_r() -> f32 {
    with_runner(|r| r.app().clear_color()[0])
}

#[wasm_bindgen]
pub fn get_clear_color_g() -> f32 {
    with_runner(|r| r.app().clear_color()[1])
}

#[wasm_bindgen]
pub fn get_clear_color_b() -> f32 {
    with_runner(|r| r.app().clear_color()[2])
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vector_vertices_ptr())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(|r| r.vector_vertex_count())
}

#[wasm_bindgen]
pub fn get_star_vertices_ptr() -> *const f32 {
    with_runner(|r| r.star_vertices_ptr())
}

#[wasm_bindgen]
pub fn get_star_vertex_count() -> u32 {
    with_runner(|r| r.star_vertex_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_frame_counter() -> u32 {
    with_runner(|r| r.app().frame_counter() as u32)
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_max_vector_vertices() -> u32 {
    with_runner(|r| r.max_vector_vertices())
}

#[wasm_bindgen]
pub fn get_max_star_vertices() -> u32 {
    with_runner(|r| r.max_star_vertices())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
