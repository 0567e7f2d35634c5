//! Presentation layer: renders the active scene into the host page and
//! forwards button clicks and the typed answer into the [`QuizApp`]
//! callbacks. The single app instance lives in a thread-local; every
//! mutation is followed by a full re-render of the root container.

use std::cell::RefCell;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, window};

use super::{QuizApp, Scene, format_seconds};

thread_local! {
    static APP: RefCell<QuizApp> = RefCell::new(QuizApp::new());
}

/// Mounts (or remounts) the widget: resets the app to the top scene and
/// renders into `#kz-root`, creating the container under `<body>` if the
/// host page does not provide one.
pub fn start_quiz_mode() -> Result<(), JsValue> {
    APP.with(|app| *app.borrow_mut() = QuizApp::new());
    render()
}

fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn render() -> Result<(), JsValue> {
    let doc = document()?;
    let root: Element = if let Some(el) = doc.get_element_by_id("kz-root") {
        el
    } else {
        let el = doc.create_element("div")?;
        el.set_id("kz-root");
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&el)?;
        el
    };
    root.set_inner_html("");

    let (scene, item, rows) = APP.with(|app| {
        let app = app.borrow();
        (app.scene(), app.current_item(), app.score_entries())
    });
    match scene {
        Scene::Top => render_top(&doc, &root),
        Scene::Quiz => render_quiz(&doc, &root, item.unwrap_or('?')),
        Scene::InputAnswer => render_input(&doc, &root),
        Scene::Correct => render_feedback(&doc, &root, "正解!", "次へ"),
        Scene::Wrong => render_feedback(&doc, &root, "不正解…", "トップに戻る"),
        Scene::Score => render_score(&doc, &root, &rows),
    }
}

// --- Per-scene views ----------------------------------------------------------

fn render_top(doc: &Document, root: &Element) -> Result<(), JsValue> {
    let title = doc.create_element("h1")?;
    title.set_text_content(Some("超拡大ひらがなクイズ"));
    root.append_child(&title)?;

    let intro = doc.create_element("p")?;
    intro.set_text_content(Some(
        "ひらがな1文字が超拡大されて表示されます(濁点、半濁点、拗音はなし)。\
         徐々にズームアウトするので、わかったら「回答する」ボタンを押してください。\
         回答するを押すとひらがなの表示が消えます。",
    ));
    root.append_child(&intro)?;

    let start = button(doc, "start", || {
        // Uniformity of the shuffle needs a uniform generator, not an
        // unpredictable seed; the click instant is plenty.
        let mut rng = Pcg32::seed_from_u64(crate::performance_now().to_bits());
        let now = crate::performance_now();
        APP.with(|app| app.borrow_mut().on_start(&mut rng, now));
        let _ = render();
    })?;
    root.append_child(&start)?;
    Ok(())
}

fn render_quiz(doc: &Document, root: &Element, item: char) -> Result<(), JsValue> {
    let frame: HtmlElement = doc.create_element("div")?.dyn_into()?;
    frame.set_attribute(
        "style",
        "width: 300px; height: 300px; border: 1px solid #000; overflow: hidden; \
         display: flex; flex-direction: column; justify-content: center; align-items: center; \
         font-size: 10000px; transition: font-size 15s ease-out;",
    )?;
    frame.set_text_content(Some(&item.to_string()));
    root.append_child(&frame)?;

    // Shrink on the next frame so the transition starts from 10000px. Purely
    // cosmetic: answering never waits on it.
    let frame_ref = frame.clone();
    let shrink = Closure::once_into_js(move |_ts: f64| {
        let _ = frame_ref.style().set_property("font-size", "18px");
    });
    if let Some(win) = window() {
        win.request_animation_frame(shrink.unchecked_ref())?;
    }

    let ready = button(doc, "回答する", || {
        let now = crate::performance_now();
        APP.with(|app| app.borrow_mut().on_ready(now));
        let _ = render();
    })?;
    root.append_child(&ready)?;
    Ok(())
}

fn render_input(doc: &Document, root: &Element) -> Result<(), JsValue> {
    let input: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
    root.append_child(&input)?;

    // The typed value is forwarded exactly as-is: no trim, no normalization.
    let input_ref = input.clone();
    let submit = button(doc, "回答する", move || {
        let answer = input_ref.value();
        APP.with(|app| app.borrow_mut().on_submit(&answer));
        let _ = render();
    })?;
    root.append_child(&submit)?;
    Ok(())
}

fn render_feedback(
    doc: &Document,
    root: &Element,
    message: &str,
    label: &str,
) -> Result<(), JsValue> {
    let text = doc.create_element("span")?;
    text.set_text_content(Some(message));
    root.append_child(&text)?;

    let ok = button(doc, label, || {
        let now = crate::performance_now();
        APP.with(|app| app.borrow_mut().on_acknowledge(now));
        let _ = render();
    })?;
    root.append_child(&ok)?;
    Ok(())
}

fn render_score(doc: &Document, root: &Element, rows: &[(char, f64)]) -> Result<(), JsValue> {
    let heading = doc.create_element("div")?;
    heading.set_text_content(Some("スコア"));
    root.append_child(&heading)?;

    let list = doc.create_element("ul")?;
    for (kana, elapsed_ms) in rows {
        let row = doc.create_element("li")?;
        row.set_text_content(Some(&format!("{kana}: {}秒", format_seconds(*elapsed_ms))));
        list.append_child(&row)?;
    }
    root.append_child(&list)?;

    let back = button(doc, "トップに戻る", || {
        let now = crate::performance_now();
        APP.with(|app| app.borrow_mut().on_acknowledge(now));
        let _ = render();
    })?;
    root.append_child(&back)?;
    Ok(())
}

// --- Wiring -------------------------------------------------------------------

fn button(
    doc: &Document,
    label: &str,
    on_click: impl FnMut() + 'static,
) -> Result<Element, JsValue> {
    let btn = doc.create_element("button")?;
    btn.set_text_content(Some(label));
    let closure = Closure::wrap(Box::new(on_click) as Box<dyn FnMut()>);
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(btn)
}
