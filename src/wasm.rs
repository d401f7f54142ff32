use crate::log::init_logger;
use crate::placement;
use crate::word_list::WordList;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(e: serde_wasm_bindgen::Error, what: &str) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Convert to a plain JS value: objects for structs, `null` for `None`.
fn to_js<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| serialization_error(e, what))
}

/// Initialize crossgrid logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: `(words: string[])` returns `Array<Array<{letter, clue}>>`, or `null` when
/// `words` is empty.
///
/// `clue` is `null`, a number, or an array of numbers, exactly as the grid UI expects.
#[wasm_bindgen]
pub fn generate_crossword(words: JsValue) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        details: "The words parameter must be a JavaScript array of strings, in clue order."
            .to_string(),
        help: Some(
            "Ensure you're passing a valid string array, e.g., ['react', 'node', 'express']"
                .to_string(),
        ),
    })?;

    let Some(layout) = placement::layout(&words) else {
        log::debug!("no words given; returning null");
        return Ok(JsValue::NULL);
    };
    log::info!(
        "placed {} words ({} on overflow rows)",
        layout.placed().len(),
        layout.overflow_count()
    );

    to_js(&layout.to_matrix(), "grid")
}

/// Parse a newline-separated word list (`word` or `word;tip` per line) into
/// `Array<{word, tip?}>`, preserving order.
///
/// # Errors
/// Returns a `JsValue` error if the result cannot be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text);
    to_js(&word_list.entries, "word list")
}

/// Build a plain-text bug report for the grid UI to attach when generation misbehaves.
///
/// `words` is the same `string[]` that was passed to [`generate_crossword`]. The report
/// replays the layout and lists every placement, so words that ended up on overflow rows
/// are visible without a screenshot of the grid.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, words: JsValue) -> String {
    let generated = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_else(|| "unknown".to_string());
    let user_agent = web_sys::window().and_then(|w| w.navigator().user_agent().ok());

    let words: Result<Vec<String>, _> = serde_wasm_bindgen::from_value(words);
    let layout_section = match words {
        Ok(words) => layout_report(&words),
        Err(e) => format!("words could not be read: {e}\n"),
    };

    format!(
        "=== crossgrid {} debug report ({generated}) ===\n\
         error: {error_message}\n\
         user agent: {}\n\n\
         {layout_section}",
        env!("CARGO_PKG_VERSION"),
        user_agent.as_deref().unwrap_or("unknown"),
    )
}

/// One line per placement record, then the grid size and how many words overflowed.
fn layout_report(words: &[String]) -> String {
    let Some(layout) = placement::layout(words) else {
        return "no words\n".to_string();
    };

    let mut report = String::new();
    for placed in layout.placed() {
        report.push_str(&format!("{placed}\n"));
    }
    let matrix = layout.to_matrix();
    report.push_str(&format!(
        "grid {}x{}, {} of {} words on overflow rows\n",
        matrix.height(),
        matrix.width(),
        layout.overflow_count(),
        words.len()
    ));
    report
}
