//! Support and crisis resources.

use serde::Serialize;

/// A place to get help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Name of the service
    pub title: &'static str,
    /// What it offers and how to reach it
    pub description: &'static str,
    /// `tel:`, `sms:` or `https:` link
    pub link: &'static str,
}

impl Resource {
    /// Kind of contact the link opens.
    #[must_use]
    pub fn contact_kind(&self) -> &'static str {
        match self.link.split_once(':').map(|(scheme, _)| scheme) {
            Some("tel") => "phone",
            Some("sms") => "text",
            _ => "web",
        }
    }
}

/// Built-in resources.
pub const RESOURCES: [Resource; 3] = [
    Resource {
        title: "National Suicide Prevention Lifeline",
        description: "Call 1-800-273-TALK (8255) for immediate help.",
        link: "tel:18002738255",
    },
    Resource {
        title: "Crisis Text Line",
        description: "Text HOME to 741741 to connect with a crisis counselor.",
        link: "sms:741741",
    },
    Resource {
        title: "Mental Health America",
        description: "Find resources and support for mental health.",
        link: "https://www.mhanational.org",
    },
];

/// Every resource in display order.
#[must_use]
pub fn all() -> &'static [Resource] {
    &RESOURCES
}
