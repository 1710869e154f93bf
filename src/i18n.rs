//! Locale selection and UI string translation.
//!
//! Strings are looked up by opaque keys such as `hero.title`. A key with no
//! entry for the current locale is returned as-is, so a missing translation
//! shows up on screen instead of failing.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::domain::Locale;

type Table = HashMap<&'static str, &'static str>;

static TABLES: OnceLock<HashMap<Locale, Table>> = OnceLock::new();

const EN: &[(&str, &str)] = &[
    (
        "hero.title",
        "Hi, I'm Alfred Klimov \u{2014} Designer, Developer & Sound Engineer based in Vienna",
    ),
    (
        "hero.subtitle",
        "Creative mind with passion for design, code, sound & motion",
    ),
    ("about.title", "About"),
    (
        "about.text",
        "I was born on February 2, 2009 in Saint Petersburg. Since 2011 I have been living in Austria. \
         I studied at Volksschule im Park (Währinger Straße), then at Glassergasse 8 (focus on computer science), \
         later at FMS Burggasse. In parallel, I interned at Ahead Media as a graphic designer and worked in catering. \
         In addition, I have created many personal projects at home on my computer.",
    ),
    ("skills.title", "Skills"),
    ("skills.design", "Design"),
    ("skills.development", "Development"),
    ("skills.ai", "AI & Prompt Engineering"),
    ("skills.sound", "Sound Design"),
    ("skills.motion", "Motion & Video"),
    ("portfolio.title", "Portfolio"),
    ("experience.title", "Experience"),
    ("experience.ahead", "Ahead Media \u{2014} Internship, Graphic Design"),
    ("experience.catering", "Catering \u{2014} Team Member"),
    (
        "experience.freelance",
        "Freelance Projects \u{2014} Web Design & Development, Creative Projects",
    ),
    ("contact.title", "Let's Connect"),
    ("contact.email", "Email"),
    ("contact.phone", "Phone"),
    ("admin.title", "Admin Dashboard"),
    ("admin.login", "Login"),
    ("admin.logout", "Logout"),
    ("admin.password", "Password"),
    ("admin.portfolio", "Portfolio Management"),
    ("admin.content", "Content Management"),
    ("admin.add", "Add"),
    ("admin.edit", "Edit"),
    ("admin.delete", "Delete"),
    ("admin.save", "Save"),
    ("admin.cancel", "Cancel"),
];

const DE: &[(&str, &str)] = &[
    (
        "hero.title",
        "Hallo, ich bin Alfred Klimov \u{2014} Designer, Entwickler & Sound Engineer aus Wien",
    ),
    (
        "hero.subtitle",
        "Kreativer Kopf mit Leidenschaft für Design, Code, Sound & Motion",
    ),
    ("about.title", "Über mich"),
    (
        "about.text",
        "Ich wurde am 2. Februar 2009 in Sankt Petersburg geboren. Seit 2011 lebe ich in Österreich. \
         Ich habe an der Volksschule im Park (Währinger Straße) studiert, dann an der Glassergasse 8 \
         (Schwerpunkt Informatik) und später an der FMS Burggasse. Parallel dazu absolvierte ich ein Praktikum \
         bei Ahead Media als Grafikdesigner und arbeitete im Catering. Darüber hinaus habe ich viele eigene \
         Projekte am Computer entwickelt.",
    ),
    ("skills.title", "Kenntnisse"),
    ("skills.design", "Design"),
    ("skills.development", "Entwicklung"),
    ("skills.ai", "KI & Prompt Engineering"),
    ("skills.sound", "Sound Design"),
    ("skills.motion", "Motion & Video"),
    ("portfolio.title", "Portfolio"),
    ("experience.title", "Erfahrung"),
    ("experience.ahead", "Ahead Media \u{2014} Praktikum, Grafikdesign"),
    ("experience.catering", "Catering \u{2014} Teammitglied"),
    (
        "experience.freelance",
        "Freelance Projekte \u{2014} Webdesign & Entwicklung, Kreative Projekte",
    ),
    ("contact.title", "Lass uns verbinden"),
    ("contact.email", "E-Mail"),
    ("contact.phone", "Telefon"),
    ("admin.title", "Admin Dashboard"),
    ("admin.login", "Anmelden"),
    ("admin.logout", "Abmelden"),
    ("admin.password", "Passwort"),
    ("admin.portfolio", "Portfolio-Verwaltung"),
    ("admin.content", "Inhaltsverwaltung"),
    ("admin.add", "Hinzufügen"),
    ("admin.edit", "Bearbeiten"),
    ("admin.delete", "Löschen"),
    ("admin.save", "Speichern"),
    ("admin.cancel", "Abbrechen"),
];

fn tables() -> &'static HashMap<Locale, Table> {
    TABLES.get_or_init(|| {
        HashMap::from([
            (Locale::En, EN.iter().copied().collect()),
            (Locale::De, DE.iter().copied().collect()),
        ])
    })
}

/// Translates UI keys for the currently selected locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    /// Create a translator for a locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Currently selected locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the display language
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::debug!("Locale changed: {} -> {}", self.locale, locale);
        }
        self.locale = locale;
    }

    /// Display string for `key`, or `key` itself when untranslated
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        tables()
            .get(&self.locale)
            .and_then(|table| table.get(key))
            .copied()
            .unwrap_or(key)
    }

    /// Whether `key` has a translation in the current locale
    pub fn has(&self, key: &str) -> bool {
        tables()
            .get(&self.locale)
            .is_some_and(|table| table.contains_key(key))
    }
}

/// All keys known for a locale, sorted
pub fn keys(locale: Locale) -> Vec<&'static str> {
    let mut keys: Vec<_> = tables()
        .get(&locale)
        .map(|table| table.keys().copied().collect())
        .unwrap_or_default();
    keys.sort_unstable();
    keys
}
