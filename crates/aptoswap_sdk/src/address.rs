//! Validation of Aptos account addresses, coin types and human-readable names.

/// Longest hex body of an account address (32 bytes).
pub const MAX_ADDRESS_HEX_LEN: usize = 64;

/// `0x` followed by 1 to 64 hex digits. Short forms like `0x1` are valid.
pub fn is_account_address(value: &str) -> bool {
    value.strip_prefix("0x").is_some_and(|hex| {
        !hex.is_empty()
            && hex.len() <= MAX_ADDRESS_HEX_LEN
            && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

fn is_identifier(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}

/// A fully qualified coin type such as `0x1::aptos_coin::AptosCoin`.
///
/// Generic coin types (`Foo<Bar>`) are not accepted.
pub fn is_coin_type(value: &str) -> bool {
    let mut parts = value.split("::");
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(address), Some(module), Some(name), None) => {
            is_account_address(address) && is_identifier(module) && is_identifier(name)
        }
        _ => false,
    }
}

/// Lowercases the hex body and strips its leading zeros, so `0x01` and `0x1` compare equal.
fn normalize_account_address(value: &str) -> String {
    let hex = value.strip_prefix("0x").unwrap_or(value).trim_start_matches('0');
    if hex.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", hex.to_ascii_lowercase())
    }
}

/// Parses an account address or a coin type into its canonical spelling.
///
/// Only the address part of a coin type is normalized; module and struct names are
/// case-sensitive and kept as written.
pub fn parse_address(value: &str) -> Option<String> {
    if is_account_address(value) {
        return Some(normalize_account_address(value));
    }

    if is_coin_type(value) {
        let (address, path) = value.split_once("::")?;
        return Some(format!("{}::{path}", normalize_account_address(address)));
    }

    None
}

/// `^0x[a-fA-F0-9]{40}$`
pub fn is_hex_address_40(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn is_name_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-@:%._+~#=".contains(&b)
}

fn is_name_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-@:%_+.~#?&/=".contains(&b)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Matches `^[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)?$`.
///
/// The label may itself contain dots, so every dot is tried as the label/tld separator.
pub fn is_name(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.iter().enumerate().any(|(dot, &b)| {
        if b != b'.' {
            return false;
        }

        let label = &bytes[..dot];
        if !(2..=256).contains(&label.len()) || !label.iter().copied().all(is_name_label_byte) {
            return false;
        }

        let rest = &bytes[dot + 1..];
        let tld_run = rest.iter().take_while(|b| b.is_ascii_lowercase()).count();

        (2..=tld_run.min(6)).any(|tld_len| {
            let tail = &rest[tld_len..];
            let at_boundary = tail.first().map_or(true, |&next| !is_word_byte(next));
            at_boundary && tail.iter().copied().all(is_name_path_byte)
        })
    })
}
