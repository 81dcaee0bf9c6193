//! WhatsApp deep-link construction.
//!
//! Builds the `api.whatsapp.com/send` URL that pre-populates WhatsApp with
//! a recipient and a message body. Opening the link (and actually sending
//! the message) is entirely up to the user; nothing here performs network
//! I/O.

/// WhatsApp send endpoint with its fixed query parameters: phone-number
/// addressed messaging, web fallback when the app is absent.
const WA_SEND_BASE: &str = "https://api.whatsapp.com/send/?&type=phone_number&app_absent=0";

/// Build a WhatsApp send link for a normalized phone number and message.
///
/// The message text is percent-encoded; decoding the `text` query parameter
/// always reproduces the original text exactly.
#[must_use]
pub fn wa_send_link(phone: &str, text: &str) -> String {
    format!(
        "{WA_SEND_BASE}&phone={phone}&text={}",
        urlencoding::encode(text)
    )
}
