use leptos::prelude::window;

pub fn alert(msg: impl AsRef<str>) {
    let _ = window().alert_with_message(msg.as_ref());
}

pub fn shorten_address(address: impl ToString) -> String {
    let address = address.to_string();
    if address.len() > 15 {
        format!("{}...{}", &address[..8], &address[address.len() - 4..])
    } else {
        address // Return the address as is if it's too short to shorten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses() {
        let address = "0x9a5f1e3c0cbd0a1b4a7d5e7f8e9d0c1b2a3f4e5d6c7b8a9f0e1d2c3b4a5f6e7d";
        assert_eq!(shorten_address(address), "0x9a5f1e...6e7d");
        assert_eq!(shorten_address("0x1"), "0x1");
    }
}
