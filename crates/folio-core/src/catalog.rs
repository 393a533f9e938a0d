// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static page content: services catalog, work process, CV entries, and
// headline statistics. None of this is editable at runtime.

/// A display string that is either a translation key or fixed English copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Key(&'static str),
    Literal(&'static str),
}

impl Text {
    /// Resolve through `translate` when this is a key.
    pub fn resolve<'a>(&self, translate: impl Fn(&'a str) -> &'a str) -> &'a str {
        match *self {
            Self::Key(key) => translate(key),
            Self::Literal(text) => text,
        }
    }
}

/// One entry of the services catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offering {
    pub title: Text,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    /// Highlighted with a "Popular" badge.
    pub popular: bool,
}

pub const OFFERINGS: &[Offering] = &[
    Offering {
        title: Text::Key("services.logo"),
        description: "Professional logo design that represents your brand identity with creativity and impact.",
        icon: "\u{1F3A8}",
        features: &["Custom Logo Design", "Multiple Concepts", "Vector Files", "Brand Guidelines"],
        price: "Starting from $299",
        popular: true,
    },
    Offering {
        title: Text::Key("services.branding"),
        description: "Complete brand identity systems including colors, typography, and visual guidelines.",
        icon: "\u{1F3F7}",
        features: &["Logo Design", "Color Palette", "Typography System", "Brand Guidelines", "Business Cards"],
        price: "Starting from $599",
        popular: true,
    },
    Offering {
        title: Text::Key("services.print"),
        description: "Print materials including brochures, flyers, business cards, and marketing materials.",
        icon: "\u{1F4C4}",
        features: &["Brochure Design", "Flyer Design", "Business Cards", "Poster Design", "Print Ready Files"],
        price: "Starting from $199",
        popular: false,
    },
    Offering {
        title: Text::Key("services.ui"),
        description: "User interface and user experience design for mobile apps and web applications.",
        icon: "\u{1F4BB}",
        features: &["UI Design", "UX Research", "Wireframing", "Prototyping", "Mobile First"],
        price: "Starting from $799",
        popular: false,
    },
    Offering {
        title: Text::Literal("Packaging Design"),
        description: "Creative packaging solutions that make your products stand out on the shelf.",
        icon: "\u{1F4E6}",
        features: &["Package Design", "3D Mockups", "Label Design", "Box Design", "Print Specifications"],
        price: "Starting from $399",
        popular: false,
    },
    Offering {
        title: Text::Literal("Social Media Design"),
        description: "Eye-catching social media graphics and templates for all major platforms.",
        icon: "\u{1F4F7}",
        features: &["Instagram Posts", "Facebook Covers", "LinkedIn Banners", "Story Templates", "Social Media Kit"],
        price: "Starting from $149",
        popular: true,
    },
    Offering {
        title: Text::Literal("Illustration"),
        description: "Custom illustrations for books, websites, marketing materials, and brand assets.",
        icon: "\u{270F}",
        features: &["Digital Illustration", "Character Design", "Icon Design", "Infographics", "Vector Art"],
        price: "Starting from $249",
        popular: false,
    },
    Offering {
        title: Text::Literal("Marketing Materials"),
        description: "Complete marketing collateral design including ads, banners, and promotional materials.",
        icon: "\u{1F3AF}",
        features: &["Advertisement Design", "Banner Design", "Brochures", "Catalogs", "Marketing Campaigns"],
        price: "Starting from $199",
        popular: false,
    },
];

/// Home-page overview: the first four offerings with short blurbs.
pub const HOME_SERVICES: &[(Text, &str, &str)] = &[
    (Text::Key("services.logo"), "Professional logo design that represents your brand identity", "\u{1F3A8}"),
    (Text::Key("services.branding"), "Complete brand identity systems with guidelines", "\u{1F3F7}"),
    (Text::Key("services.print"), "Print materials including brochures, business cards, and more", "\u{1F4C4}"),
    (Text::Key("services.ui"), "User interface and user experience design for digital products", "\u{1F4BB}"),
];

/// Subjects offered in the contact form's service selector.
pub const CONTACT_SUBJECTS: &[&str] = &[
    "Logo Design",
    "Brand Identity",
    "Print Design",
    "UI/UX Design",
    "Packaging Design",
    "Social Media Design",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery",
        description: "We start with understanding your needs, goals, and brand vision through detailed consultation.",
    },
    ProcessStep {
        step: "02",
        title: "Concept",
        description: "Multiple creative concepts are developed based on your requirements and brand guidelines.",
    },
    ProcessStep {
        step: "03",
        title: "Design",
        description: "Selected concepts are refined and developed into final designs with attention to detail.",
    },
    ProcessStep {
        step: "04",
        title: "Delivery",
        description: "Final files are delivered in all required formats with complete documentation and guidelines.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub current: bool,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Graphic Designer",
        company: "Al Masjid Al Nabawi",
        location: "Al-Madina, Saudi Arabia",
        period: "2022 - Present",
        description: "Created impactful designs for awareness and guidance campaigns. Enhanced branding through innovative design solutions.",
        current: true,
    },
    Experience {
        title: "Graphic & Printing Specialist",
        company: "Al Fanoos Press",
        location: "Al-Madina, Saudi Arabia",
        period: "2020 - 2022",
        description: "Designed engaging graphic & printing content and printable items. Collaborated with cross-functional teams to deliver projects on time.",
        current: false,
    },
    Experience {
        title: "Freelance Designer",
        company: "Self Employed",
        location: "Remote",
        period: "2015 - Present",
        description: "Delivered custom design solutions for clients across various industries.",
        current: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education { degree: "Bachelor of Graphic & Multimedia", institution: "University", year: "2021" },
    Education { degree: "TOFEL ITP", institution: "Language Center", year: "2021" },
    Education { degree: "Designing Diploma", institution: "Design Institute", year: "2016" },
    Education { degree: "English Advanced Diploma", institution: "Language Institute", year: "2018" },
    Education { degree: "Diplôme français junior", institution: "French Institute", year: "2022" },
    Education { degree: "ICDL Certificate", institution: "Computer Center", year: "2016" },
];

pub const SKILLS: &[&str] = &[
    "Adobe Creative Suite",
    "Photoshop",
    "Illustrator",
    "InDesign",
    "3D Modeling & Rendering",
    "UI/UX Design",
    "Typography",
    "Branding Design",
    "Print Design",
    "Logo Design",
    "Brand Identity",
    "Creative Direction",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpokenLanguage {
    pub name: &'static str,
    pub level: &'static str,
    /// Proficiency bar fill, 0..=100.
    pub percentage: u8,
}

pub const SPOKEN_LANGUAGES: &[SpokenLanguage] = &[
    SpokenLanguage { name: "Arabic", level: "Mother Tongue", percentage: 100 },
    SpokenLanguage { name: "English", level: "Advanced", percentage: 90 },
    SpokenLanguage { name: "French", level: "Elementary", percentage: 40 },
];

/// Headline numbers on the home page.
pub const STATS: &[(&str, &str)] = &[
    ("9+", "Years Experience"),
    ("200+", "Projects Done"),
    ("50+", "Happy Clients"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape() {
        assert_eq!(OFFERINGS.len(), 8);
        assert_eq!(OFFERINGS.iter().filter(|o| o.popular).count(), 3);
        assert_eq!(PROCESS.len(), 4);
        assert!(SPOKEN_LANGUAGES.iter().all(|l| l.percentage <= 100));
    }

    #[test]
    fn copy_resolves_keys_only() {
        let upper = |_: &str| "TRANSLATED";
        assert_eq!(Text::Key("services.logo").resolve(upper), "TRANSLATED");
        assert_eq!(Text::Literal("Illustration").resolve(upper), "Illustration");
    }
}
