//! A minimal bridge to the Petra browser extension (`window.aptos`).

use aptoswap_core::Error;
use leptos::prelude::window;
use tracing::debug;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    js_sys::{Function, Promise, Reflect},
    wasm_bindgen::{JsCast, JsValue},
};

fn extension() -> Result<JsValue, Error> {
    let aptos = Reflect::get(&window(), &JsValue::from_str("aptos"))?;

    if aptos.is_undefined() || aptos.is_null() {
        Err(Error::WalletNotFound)
    } else {
        Ok(aptos)
    }
}

async fn call(wallet: &JsValue, method: &str) -> Result<JsValue, Error> {
    let function = Reflect::get(wallet, &JsValue::from_str(method))?
        .dyn_into::<Function>()
        .map_err(|_| Error::wallet(format!("missing `{method}` method")))?;

    let result = function.call0(wallet)?;

    Ok(JsFuture::from(Promise::resolve(&result)).await?)
}

/// Asks the extension for access and returns the account address.
pub async fn connect() -> Result<String, Error> {
    let wallet = extension()?;
    debug!("Trying to connect to Petra...");

    let account = call(&wallet, "connect").await?;
    let address = Reflect::get(&account, &JsValue::from_str("address"))?;

    address
        .as_string()
        .ok_or_else(|| Error::wallet("no address in the connect response"))
}

pub async fn disconnect() -> Result<(), Error> {
    let wallet = extension()?;
    call(&wallet, "disconnect").await.map(|_| ())
}
