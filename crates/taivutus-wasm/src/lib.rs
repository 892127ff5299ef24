// WASM bindings for Finnish verb conjugation.
//
// Provides a `WasmConjugator` class exported via wasm-bindgen that wraps
// the `Conjugator` from taivutus-fi. Paradigm tables and stem sets are
// serialized to plain JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const conj = new WasmConjugator();
//   conj.conjugate("puhua");    // => { preesens: ["puhun", ...], ... }
//   conj.stems("nukkua");       // => { present: "nukku", past: "nukkui", perfect: "nukkunut" }
//   conj.verbClass("tavata");   // => 2
//   conj.verbClass("olla");     // => 0 (irregular)
//   conj.normalize(" Puhua! "); // => "puhua"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use taivutus_fi::Conjugator;
use taivutus_fi::lookup::normalize_verb_input;
use taivutus_fi::morphology::Derivation;

// ============================================================================
// Conversion helpers
// ============================================================================

/// Class number exposed to JavaScript: 1..=6, or 0 for an irregular verb.
fn derivation_class_number(derivation: &Derivation) -> u8 {
    match derivation {
        Derivation::Irregular(_) => 0,
        Derivation::Regular(class) => class.number(),
    }
}

/// Objects come out as plain `{}` rather than `Map`, matching the JSON form.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmConjugator
// ============================================================================

/// Finnish verb conjugator for WebAssembly.
#[wasm_bindgen]
pub struct WasmConjugator {
    conjugator: Conjugator,
}

#[wasm_bindgen]
impl WasmConjugator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConjugator {
        WasmConjugator {
            conjugator: Conjugator::new(),
        }
    }

    /// Full paradigm of a verb: an object mapping each tense key to an
    /// array of eight forms.
    pub fn conjugate(&self, verb: &str) -> Result<JsValue, JsError> {
        to_js(&self.conjugator.conjugate(verb))
    }

    /// Present, past and perfect stems of a verb.
    pub fn stems(&self, verb: &str) -> Result<JsValue, JsError> {
        to_js(&self.conjugator.stems(verb))
    }

    /// Conjugation class number, 0 for irregular verbs.
    #[wasm_bindgen(js_name = "verbClass")]
    pub fn verb_class(&self, verb: &str) -> u8 {
        derivation_class_number(&self.conjugator.derivation(verb))
    }

    /// Normalize user input the way lookups do.
    pub fn normalize(&self, raw: &str) -> String {
        normalize_verb_input(raw)
    }
}

impl Default for WasmConjugator {
    fn default() -> Self {
        Self::new()
    }
}
