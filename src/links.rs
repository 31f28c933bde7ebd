//! Deep links handed to external apps (WhatsApp, phone dialer).
//!
//! Nothing is consumed back from these links.

use url::Url;

fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// `https://wa.me/<digits>?text=<message>` with the message URL-encoded.
pub fn whatsapp_link(number: &str, message: Option<&str>) -> String {
    let base = format!("https://wa.me/{}", digits(number));
    match message {
        Some(text) => match Url::parse_with_params(&base, &[("text", text)]) {
            Ok(url) => url.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to build WhatsApp link");
                base
            }
        },
        None => base,
    }
}

/// `tel:+<digits>`.
pub fn dialer_link(number: &str) -> String {
    format!("tel:+{}", digits(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link("+2348000000000", Some("Hi Níbbo Support, I need help."));
        assert!(link.starts_with("https://wa.me/2348000000000?text="));
        assert!(!link.contains(' '));

        let parsed = Url::parse(&link).unwrap();
        let (key, value) = parsed.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, "Hi Níbbo Support, I need help.");
    }

    #[test]
    fn whatsapp_link_without_message() {
        assert_eq!(
            whatsapp_link("+234 800 000 0000", None),
            "https://wa.me/2348000000000"
        );
    }

    #[test]
    fn dialer_link_strips_formatting() {
        assert_eq!(dialer_link("+234-800-000-0000"), "tel:+2348000000000");
    }
}
