// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Folio portfolio.

use serde::{Deserialize, Serialize};

/// Unique identifier for a portfolio project.
///
/// Seed projects use small integers ("1".."4"); projects added at runtime
/// receive the creation time in milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is one.
    pub fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Design discipline a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Logos,
    Branding,
    Print,
    Ui,
}

impl Category {
    /// Lowercase keyword used on the wire and as a display tag.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Logos => "logos",
            Self::Branding => "branding",
            Self::Print => "print",
            Self::Ui => "ui",
        }
    }

    /// Translation key of the gallery filter label (`portfolio.*`).
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Logos => "portfolio.logos",
            Self::Branding => "portfolio.branding",
            Self::Print => "portfolio.print",
            Self::Ui => "portfolio.ui",
        }
    }

    /// All categories, in filter-bar order.
    pub fn all() -> &'static [Category] {
        &[Self::Logos, Self::Branding, Self::Print, Self::Ui]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A portfolio project.
///
/// Text fields and flags default when missing from a stored payload so that
/// older or hand-edited records still load; `id` and `category` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Opaque image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Shown in the home-page highlight strip.
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Build a project from a draft and a freshly issued id.
    pub fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            images: draft.images,
            featured: draft.featured,
        }
    }

    /// Return a new record with every field supplied in `patch` overwritten.
    /// The id is never touched.
    pub fn merged(&self, patch: ProjectPatch) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            category: patch.category.unwrap_or(self.category),
            images: patch.images.unwrap_or_else(|| self.images.clone()),
            featured: patch.featured.unwrap_or(self.featured),
        }
    }

    /// First image, used as the card cover.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// "1 image" / "3 images".
    pub fn image_count_label(&self) -> String {
        match self.images.len() {
            1 => "1 image".to_owned(),
            n => format!("{n} images"),
        }
    }
}

/// A project that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub images: Vec<String>,
    pub featured: bool,
}

/// Partial project update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
}

/// The designer's profile. There is exactly one per site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub profile_image: String,
    pub logo_image: String,
}

impl PersonalInfo {
    /// Return a new record with every field supplied in `patch` overwritten.
    pub fn merged(&self, patch: PersonalInfoPatch) -> Self {
        let keep = |new: Option<String>, old: &String| new.unwrap_or_else(|| old.clone());
        Self {
            name: keep(patch.name, &self.name),
            title: keep(patch.title, &self.title),
            bio: keep(patch.bio, &self.bio),
            phone: keep(patch.phone, &self.phone),
            email: keep(patch.email, &self.email),
            location: keep(patch.location, &self.location),
            profile_image: keep(patch.profile_image, &self.profile_image),
            logo_image: keep(patch.logo_image, &self.logo_image),
        }
    }

    /// First `max_chars` characters of the bio followed by "...", as shown
    /// in the footer.
    pub fn bio_excerpt(&self, max_chars: usize) -> String {
        let excerpt: String = self.bio.chars().take(max_chars).collect();
        format!("{excerpt}...")
    }
}

/// Partial personal-info update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
    pub logo_image: Option<String>,
}

/// Supported site languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Locale tag written to the document root.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Ar)
    }

    pub fn direction(&self) -> Direction {
        if self.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    /// Label of the language switch button: the language you would switch to.
    pub fn toggle_label(&self) -> &'static str {
        self.toggled().native_name()
    }
}

/// Text direction of the document root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
