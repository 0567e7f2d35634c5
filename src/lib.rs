//! Kana Zoom core crate.
//!
//! A single hiragana glyph is shown at extreme magnification inside a small
//! viewport and shrinks over a fixed duration; the player presses "answer"
//! once they recognize it, types the kana, and gets correct/incorrect
//! feedback plus a per-question timing summary. The quiz logic in [`quiz`]
//! is host-native and fully testable; only the DOM layer touches the browser.

use wasm_bindgen::prelude::*;

pub mod quiz;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Quiz character pool
// Base (unvoiced) hiragana only: no dakuten, handakuten, or small kana.
// -----------------------------------------------------------------------------

pub const HIRAGANA: &[char] = &[
    'あ', 'い', 'う', 'え', 'お',
    'か', 'き', 'く', 'け', 'こ',
    'さ', 'し', 'す', 'せ', 'そ',
    'た', 'ち', 'つ', 'て', 'と',
    'な', 'に', 'ぬ', 'ね', 'の',
    'は', 'ひ', 'ふ', 'へ', 'ほ',
    'ま', 'み', 'む', 'め', 'も',
    'や', 'ゆ', 'よ',
    'ら', 'り', 'る', 'れ', 'ろ',
    'わ', 'を', 'ん',
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Mounts the quiz UI into the host page and shows the top scene.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    quiz::dom::start_quiz_mode()
}

/// Wall-clock milliseconds from `performance.now()`, 0.0 outside a browser.
pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
