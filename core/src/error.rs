use web_sys::wasm_bindgen::JsValue;

// The Serialize and Deserialize traits are derived to ensure that Errors can be
// transmitted to or from a server, which is necessary for them to function as Resources.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("Coin not found in the map!")]
    UnknownCoin,

    #[error("Serde Error: {0}")]
    Serde(String),

    #[error("Pricing error: {0}")]
    Pricing(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("No Aptos wallet found!")]
    WalletNotFound,
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }
    pub fn wallet(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Wallet(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

impl From<aptoswap_sdk::Error> for Error {
    fn from(error: aptoswap_sdk::Error) -> Self {
        Error::Pricing(error.to_string())
    }
}

// Rejections from the wallet extension arrive as plain JS values.
impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Wallet(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}
