// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static translation tables.
//
// Adding a key: add it to `EN`, then to `AR`. The key-parity test fails if
// the two tables drift apart.

use folio_core::Language;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.portfolio", "Portfolio"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.contact", "Contact"),
    ("nav.blog", "Blog"),
    // Home
    ("hero.title", "Senior Graphic Designer"),
    ("hero.subtitle", "Creative visual identity solutions for your brand"),
    ("hero.cta", "View My Work"),
    ("hero.contact", "Get In Touch"),
    // About
    ("about.title", "About Me"),
    (
        "about.description",
        "Creative and experienced Branding and Logo Designer with over 9 years of expertise in developing impactful visual identities.",
    ),
    ("about.experience", "Experience"),
    ("about.education", "Education"),
    ("about.skills", "Skills"),
    ("about.languages", "Languages"),
    // Services
    ("services.title", "My Services"),
    ("services.logo", "Logo Design"),
    ("services.branding", "Brand Identity"),
    ("services.print", "Print Design"),
    ("services.ui", "UI/UX Design"),
    // Contact
    ("contact.title", "Get In Touch"),
    ("contact.name", "Name"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Send Message"),
    ("contact.info", "Contact Information"),
    // Portfolio
    ("portfolio.title", "My Portfolio"),
    ("portfolio.all", "All"),
    ("portfolio.logos", "Logos"),
    ("portfolio.branding", "Branding"),
    ("portfolio.print", "Print Design"),
    ("portfolio.ui", "UI/UX"),
    // Common
    ("common.loading", "Loading..."),
    ("common.viewMore", "View More"),
    ("common.close", "Close"),
];

const AR: Table = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.portfolio", "الأعمال"),
    ("nav.about", "نبذة عني"),
    ("nav.services", "الخدمات"),
    ("nav.contact", "التواصل"),
    ("nav.blog", "المدونة"),
    // Home
    ("hero.title", "مصمم جرافيك أول"),
    ("hero.subtitle", "حلول هوية بصرية إبداعية لعلامتك التجارية"),
    ("hero.cta", "شاهد أعمالي"),
    ("hero.contact", "تواصل معي"),
    // About
    ("about.title", "نبذة عني"),
    (
        "about.description",
        "مصمم شعارات وهوية تجارية مبدع وذو خبرة تزيد عن 9 سنوات في تطوير هويات بصرية مؤثرة.",
    ),
    ("about.experience", "الخبرة"),
    ("about.education", "التعليم"),
    ("about.skills", "المهارات"),
    ("about.languages", "اللغات"),
    // Services
    ("services.title", "خدماتي"),
    ("services.logo", "تصميم الشعارات"),
    ("services.branding", "الهوية التجارية"),
    ("services.print", "التصميم الطباعي"),
    ("services.ui", "تصميم واجهات المستخدم"),
    // Contact
    ("contact.title", "تواصل معي"),
    ("contact.name", "الاسم"),
    ("contact.email", "البريد الإلكتروني"),
    ("contact.message", "الرسالة"),
    ("contact.send", "إرسال الرسالة"),
    ("contact.info", "معلومات التواصل"),
    // Portfolio
    ("portfolio.title", "أعمالي"),
    ("portfolio.all", "الكل"),
    ("portfolio.logos", "الشعارات"),
    ("portfolio.branding", "الهوية التجارية"),
    ("portfolio.print", "التصميم الطباعي"),
    ("portfolio.ui", "واجهات المستخدم"),
    // Common
    ("common.loading", "جاري التحميل..."),
    ("common.viewMore", "عرض المزيد"),
    ("common.close", "إغلاق"),
];

/// The full table for `lang`.
pub fn table_for(lang: Language) -> Table {
    match lang {
        Language::En => EN,
        Language::Ar => AR,
    }
}

/// Look up `key` in `lang`'s table only. No fallback.
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    table_for(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Translation of `key` in `lang`, or `key` itself when the table has no
/// entry. Never empty for a non-empty key and never panics.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(translate(Language::En, "nav.home"), "Home");
        assert_eq!(translate(Language::Ar, "nav.home"), "الرئيسية");
        assert_eq!(translate(Language::Ar, "portfolio.print"), "التصميم الطباعي");
    }

    #[test]
    fn missing_key_returns_key_verbatim() {
        assert_eq!(translate(Language::En, "hero.missing"), "hero.missing");
        assert_eq!(translate(Language::Ar, "not a key"), "not a key");
        assert_eq!(lookup(Language::En, "hero.missing"), None);
    }

    #[test]
    fn no_english_fallback_for_arabic() {
        assert_eq!(lookup(Language::Ar, "nav.home"), Some("الرئيسية"));
        assert_ne!(translate(Language::Ar, "hero.cta"), "View My Work");
    }

    #[test]
    fn tables_share_the_same_keys() {
        let en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        let ar: Vec<_> = AR.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, ar);
    }

    #[test]
    fn keys_are_unique() {
        for table in [EN, AR] {
            let mut keys: Vec<_> = table.iter().map(|(k, _)| *k).collect();
            keys.sort_unstable();
            let before = keys.len();
            keys.dedup();
            assert_eq!(before, keys.len());
        }
    }

    #[test]
    fn no_empty_values() {
        for table in [EN, AR] {
            assert!(table.iter().all(|(_, v)| !v.is_empty()));
        }
    }
}
