//! Devotional sharing.
//!
//! Builds the share text and, for targets that are links, the target URL.
//! Clipboard sharing has no URL; the caller copies the text itself.

use serde::{Deserialize, Serialize};

use crate::models::Devotional;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareTarget {
    Whatsapp,
    Email,
    Clipboard,
}

impl ShareTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareTarget::Whatsapp => "whatsapp",
            ShareTarget::Email => "email",
            ShareTarget::Clipboard => "clipboard",
        }
    }
}

/// The canonical share text for a devotional.
pub fn render_text(devotional: &Devotional) -> String {
    format!(
        "*{title}*\n\n\"{verse}\" - {reference}\n\n{message}\n\n*Oração*: \
         {prayer}\n\n*Desafio*: {challenge}\n\n-- Enviado por BIBL.IA",
        title = devotional.title,
        verse = devotional.verse,
        reference = devotional.reference,
        message = devotional.message,
        prayer = devotional.prayer,
        challenge = devotional.challenge,
    )
}

/// The link that opens the target with the text prefilled, or `None` when
/// the target is the clipboard.
pub fn share_link(devotional: &Devotional, target: ShareTarget) -> Option<String> {
    let text = render_text(devotional);
    match target {
        ShareTarget::Whatsapp => Some(format!(
            "https://wa.me/?text={}",
            urlencoding::encode(&text)
        )),
        ShareTarget::Email => Some(format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&format!("Devocional BIBL.IA: {}", devotional.title)),
            urlencoding::encode(&text)
        )),
        ShareTarget::Clipboard => None,
    }
}
