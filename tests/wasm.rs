// Browser smoke test: mounts the widget into a real DOM. Only built for
// wasm32 (run via `wasm-pack test --headless --chrome`); native `cargo test`
// skips it entirely.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_mounts_the_top_scene() {
    kana_zoom::start_game().expect("mount failed");
    let doc = web_sys::window().unwrap().document().unwrap();
    let root = doc.get_element_by_id("kz-root").expect("root mounted");
    assert!(root.inner_html().contains("超拡大ひらがなクイズ"));
}
