//! Contact card and deep links for the connect page

use crate::context::LocaleContext;
use crate::keys::TranslationKey;
use url::form_urlencoded;

/// Path of the downloadable product catalog
pub const CATALOG_PDF: &str = "/documents/SCA_Catalog.pdf";

/// Trade fair the connect page promotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub name: &'static str,
    pub location: &'static str,
    pub year: u16,
}

impl EventInfo {
    /// `Spoga Horse 2026`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.year)
    }
}

/// The event currently advertised
pub const EVENT: EventInfo = EventInfo {
    name: "Spoga Horse",
    location: "Cologne, Germany",
    year: 2026,
};

/// A person's business card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub name: String,
    pub company: String,
    pub position: Option<String>,
    pub email: String,
    pub phone: String,
    pub website: Option<String>,
    pub address: Option<String>,
}

impl ContactCard {
    /// The company's managing partner
    pub fn company_contact() -> Self {
        Self {
            name: "Santiago A. Salerno".to_string(),
            company: "SCA - Saddle Company Argentina".to_string(),
            position: Some("Managing Partner".to_string()),
            email: "santiago@horsebrandcompany.com.ar".to_string(),
            phone: "+5401156650533".to_string(),
            website: Some("https://www.saddlecompanyargentina.com/en".to_string()),
            address: Some("Cochabamba 476, Villa Martelli, Buenos Aires, Argentina".to_string()),
        }
    }

    /// vCard 3.0 text. Absent optional fields produce no line.
    pub fn to_vcard(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", self.name),
            format!("ORG:{}", self.company),
        ];
        if let Some(position) = &self.position {
            lines.push(format!("TITLE:{}", position));
        }
        lines.push(format!("EMAIL:{}", self.email));
        lines.push(format!("TEL:{}", self.phone));
        if let Some(website) = &self.website {
            lines.push(format!("URL:{}", website));
        }
        if let Some(address) = &self.address {
            lines.push(format!("ADR:;;{}", address));
        }
        lines.push("END:VCARD".to_string());
        lines.join("\n")
    }

    /// Download name: company with whitespace runs replaced by `_`
    pub fn vcard_filename(&self) -> String {
        let stem: Vec<&str> = self.company.split_whitespace().collect();
        format!("{}.vcf", stem.join("_"))
    }
}

/// `https://wa.me/{digits}?text={message}`. Non-digits are dropped from the
/// phone number.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, encode_component(message))
}

/// `mailto:` link with subject and body
pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        encode_component(subject),
        encode_component(body)
    )
}

/// Pre-filled WhatsApp text in the context's locale
pub fn localized_whatsapp_message(ctx: &LocaleContext<'_>) -> String {
    let event = EVENT.display_name().to_uppercase();
    ctx.t_with(TranslationKey::EventWhatsappMessage, [("event", event.as_str())])
}

/// Email subject in the context's locale
pub fn localized_email_subject(ctx: &LocaleContext<'_>) -> String {
    let event = EVENT.display_name();
    ctx.t_with(TranslationKey::ContactEmailSubject, [("event", event.as_str())])
}

/// Email body for enquiries from the event
pub fn email_body() -> String {
    format!(
        "Hi,\n\nWe met at {} in {}.\n\nI'd like to learn more about your OEM saddle manufacturing services.\n\nBest regards,",
        EVENT.name, EVENT.location
    )
}

/// Percent-encode like a URI component: spaces become `%20`, not `+`.
fn encode_component(text: &str) -> String {
    // byte_serialize escapes a literal '+', so every '+' left is a space.
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
