use seedpow::{Difficulty, Nonce, PowEngine, Proof, SearcherBuilder, Seed};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ProofPayload {
    proof: Proof,
    hash_hex: String,
    leading_zero_bits: u32,
}

impl From<Proof> for ProofPayload {
    fn from(proof: Proof) -> Self {
        Self {
            hash_hex: proof.digest_hex(),
            leading_zero_bits: proof.leading_zero_bits(),
            proof,
        }
    }
}

/// Search for a proof over a 32-byte hex seed. `max_attempts == 0` means unbounded.
#[wasm_bindgen]
pub fn search(seed_hex: &str, bits: u8, max_attempts: u64) -> Result<JsValue, JsValue> {
    let seed = Seed::from_hex(seed_hex).map_err(to_js_err)?;
    let target = Difficulty::new(bits).map_err(to_js_err)?;
    let mut builder = SearcherBuilder::default();
    if max_attempts > 0 {
        builder = builder.max_attempts(max_attempts);
    }
    let searcher = builder.build_validated().map_err(to_js_err)?;
    let proof = searcher.search(&seed, target).map_err(to_js_err)?;
    to_value(&ProofPayload::from(proof)).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Check a nonce (decimal string, since JS numbers cannot hold every i64).
#[wasm_bindgen]
pub fn verify(seed_hex: &str, nonce: &str, bits: u8) -> Result<JsValue, JsValue> {
    let seed = Seed::from_hex(seed_hex).map_err(to_js_err)?;
    let nonce: i64 = nonce
        .parse()
        .map_err(|_| JsValue::from_str("nonce must be a decimal i64"))?;
    let target = Difficulty::new(bits).map_err(to_js_err)?;
    let proof = seedpow::verify(seed.as_bytes(), Nonce::new(nonce), target).map_err(to_js_err)?;
    to_value(&ProofPayload::from(proof)).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn to_js_err(err: seedpow::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
