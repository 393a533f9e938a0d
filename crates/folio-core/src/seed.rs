// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Compiled-in content used on first run and whenever stored content cannot
// be read.

use crate::types::{Category, PersonalInfo, Project, ProjectId};

const CDN: &str = "https://pub-cdn.sider.ai/u/U0GVH7E0AK4/web-coder/6886515794baea4807edd079/resource";

fn asset(name: &str) -> String {
    format!("{CDN}/{name}")
}

/// The designer's profile as shipped.
pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "EmadAlddine Ismael".into(),
        title: "Senior Graphic Designer".into(),
        bio: "Creative and experienced Branding and Logo Designer with over 9 years of expertise \
              in developing impactful visual identities. Skilled in managing design teams, \
              fostering collaboration, and ensuring the successful execution of creative projects."
            .into(),
        phone: "+966 504487308".into(),
        email: "Emad.i202020@gmail.com".into(),
        location: "Al-Madina, Saudi Arabia".into(),
        profile_image: asset("8d3a6ed1-c027-4ee6-9103-986b671ccc0a.jpg"),
        logo_image: asset("0f1c13e8-cf81-4f41-83c1-0f7a4f36e010.png"),
    }
}

/// The four projects shipped with the site. Ids 1, 2 and 4 are featured.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new("1"),
            title: "Logo Design Collection".into(),
            description: "A collection of modern logo designs for various clients".into(),
            category: Category::Logos,
            images: vec![asset("3fa29827-b94c-4d4c-9561-e2af46dce7b3.jpg")],
            featured: true,
        },
        Project {
            id: ProjectId::new("2"),
            title: "Brand Identity System".into(),
            description: "Complete brand identity package including logo, colors, and guidelines"
                .into(),
            category: Category::Branding,
            images: vec![asset("2637f619-e959-487b-b89a-8b10ed5102d5.jpg")],
            featured: true,
        },
        Project {
            id: ProjectId::new("3"),
            title: "Print Design Portfolio".into(),
            description:
                "Various print materials including brochures, flyers, and business cards".into(),
            category: Category::Print,
            images: vec![asset("ebb53587-47e5-4da9-b2a6-933c2f0fb59e.jpg")],
            featured: false,
        },
        Project {
            id: ProjectId::new("4"),
            title: "UI/UX Design Projects".into(),
            description: "Mobile app and web interface designs".into(),
            category: Category::Ui,
            images: vec![asset("56e38699-3847-4493-a2ef-8ec70ef28e7a.jpg")],
            featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_ordered() {
        let ids: Vec<_> = projects().into_iter().map(|p| p.id.0).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn every_seed_project_has_a_cover() {
        assert!(projects().iter().all(|p| p.cover_image().is_some()));
    }

    #[test]
    fn seed_images_point_at_the_cdn() {
        let info = personal_info();
        assert!(info.profile_image.starts_with(CDN));
        assert!(info.logo_image.ends_with(".png"));
    }
}
