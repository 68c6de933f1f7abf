//! Catalog data the product ships with. Used whenever no snapshot file is configured.

use crate::connectors::catalog::CatalogSnapshot;
use crate::models::{BlogPost, Category, PricingTier, Template, Tier};
use chrono::NaiveDate;

const PLACEHOLDER_PREVIEW: &str = "/api/placeholder/400/600";

pub fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        templates: templates(),
        pricing_tiers: pricing_tiers(),
        canonical_features: canonical_features(),
        blog_posts: blog_posts(),
    }
}

#[allow(clippy::too_many_arguments)]
fn template(
    number: u32,
    name: &str,
    description: &str,
    code_name: &str,
    tier: Tier,
    category: Category,
    tags: &[&str],
    colors: &[&str],
    featured: bool,
) -> Template {
    Template {
        id: format!("wedding_template_{:03}", number),
        name: name.to_string(),
        description: description.to_string(),
        code_name: code_name.to_string(),
        preview_image_url: PLACEHOLDER_PREVIEW.to_string(),
        tier,
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        colors: colors.iter().map(|color| color.to_string()).collect(),
        demo_url: format!("/demo/{}", code_name.to_lowercase().replace('_', "-")),
        featured,
    }
}

pub fn templates() -> Vec<Template> {
    let mut classic = template(
        1,
        "Classic Wedding Invite",
        "A timeless design for wedding invitations with elegant typography and traditional styling.",
        "CLASSIC_WEDDING",
        Tier::Premium,
        Category::Classic,
        &["elegant", "minimal", "traditional"],
        &["#EDE8E3", "#1F1D1B"],
        true,
    );
    classic.preview_image_url =
        "http://localhost:8080/api/v1/images/1633f19a-cc7e-4e10-9c2b-d9671bc9772c.webp".to_string();

    vec![
        classic,
        template(
            2,
            "Modern Minimalist",
            "Clean lines and contemporary design for the modern couple who values simplicity.",
            "MODERN_MINIMAL",
            Tier::Pro,
            Category::Modern,
            &["clean", "contemporary", "minimal"],
            &["#FFFFFF", "#2C2C2C", "#D4AF37"],
            true,
        ),
        template(
            3,
            "Botanical Bliss",
            "Delicate floral illustrations and nature-inspired elements for garden ceremonies.",
            "BOTANICAL_BLISS",
            Tier::Pro,
            Category::Floral,
            &["botanical", "nature", "garden", "flowers"],
            &["#F8F5F1", "#7B8D6B", "#E8C5A0"],
            true,
        ),
        template(
            4,
            "Simple Elegance",
            "Perfect for couples who believe less is more. Clean typography and subtle accents.",
            "SIMPLE_ELEGANCE",
            Tier::Free,
            Category::Minimal,
            &["simple", "elegant", "typography"],
            &["#FEFEFE", "#333333"],
            false,
        ),
        template(
            5,
            "Bohemian Dream",
            "Free-spirited design with artistic flourishes and warm earth tones.",
            "BOHEMIAN_DREAM",
            Tier::Pro,
            Category::Boho,
            &["bohemian", "artistic", "free-spirit", "earthy"],
            &["#F4E4BC", "#D2691E", "#8B4513"],
            false,
        ),
        template(
            6,
            "Luxe Gold & Black",
            "Opulent design with gold foil accents and sophisticated black typography.",
            "LUXE_GOLD_BLACK",
            Tier::Premium,
            Category::Luxury,
            &["luxury", "gold", "sophisticated", "opulent"],
            &["#000000", "#FFD700", "#F5F5DC"],
            false,
        ),
        template(
            7,
            "Watercolor Romance",
            "Soft watercolor backgrounds with romantic florals and delicate details.",
            "WATERCOLOR_ROMANCE",
            Tier::Pro,
            Category::Floral,
            &["watercolor", "romantic", "soft", "artistic"],
            &["#FAF0E6", "#DDA0DD", "#FF69B4"],
            false,
        ),
        template(
            8,
            "Vintage Classic",
            "Inspired by vintage wedding announcements with ornate borders and classic fonts.",
            "VINTAGE_CLASSIC",
            Tier::Free,
            Category::Classic,
            &["vintage", "ornate", "classic", "traditional"],
            &["#F5F5DC", "#8B4513", "#2F4F4F"],
            false,
        ),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "Free".to_string(),
            price: "$0".to_string(),
            description: "Perfect for getting started".to_string(),
            features: strings(&[
                "Basic templates",
                "Single event page",
                "RSVP form (basic)",
                "Limited media uploads",
                "No custom domain",
                "Email support (standard)",
            ]),
            cta: "Get Free".to_string(),
            popular: false,
        },
        PricingTier {
            name: "Pro".to_string(),
            price: "$9".to_string(),
            description: "Most popular for couples".to_string(),
            features: strings(&[
                "All Free features",
                "Pro templates",
                "RSVP with meal choices",
                "Photo gallery",
                "Custom domain",
                "Password-protected invites",
                "Priority email support",
            ]),
            cta: "Go Pro".to_string(),
            popular: true,
        },
        PricingTier {
            name: "Premium".to_string(),
            price: "$19".to_string(),
            description: "Complete wedding solution".to_string(),
            features: strings(&[
                "All Pro features",
                "Premium templates",
                "Video header support",
                "Advanced analytics",
                "Multi-language invites",
                "White-label branding",
                "Live chat support",
            ]),
            cta: "Go Premium".to_string(),
            popular: false,
        },
    ]
}

pub fn canonical_features() -> Vec<String> {
    strings(&[
        "Basic templates",
        "Pro templates",
        "Premium templates",
        "Single event page",
        "RSVP form (basic)",
        "RSVP with meal choices",
        "Photo gallery",
        "Video header support",
        "Limited media uploads",
        "Advanced analytics",
        "Custom domain",
        "Password-protected invites",
        "Multi-language invites",
        "White-label branding",
        "Email support (standard)",
        "Priority email support",
        "Live chat support",
    ])
}

fn post(id: &str, title: &str, excerpt: &str, date: (i32, u32, u32), slug: &str) -> BlogPost {
    let (year, month, day) = date;
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        slug: slug.to_string(),
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            "blog_001",
            "10 Essential Tips for Planning Your Dream Wedding",
            "From choosing the perfect venue to creating your guest list, discover the secrets to planning a memorable celebration.",
            (2024, 1, 15),
            "essential-tips-planning-dream-wedding",
        ),
        post(
            "blog_002",
            "Digital vs Traditional: Modern Wedding Invitation Trends",
            "Explore the latest trends in wedding invitations and discover why digital invitations are becoming the preferred choice.",
            (2024, 1, 10),
            "digital-vs-traditional-wedding-invitations",
        ),
        post(
            "blog_003",
            "Color Psychology in Wedding Design: Setting the Perfect Mood",
            "Learn how color choices in your wedding stationery can influence the atmosphere and emotions of your special day.",
            (2024, 1, 5),
            "color-psychology-wedding-design",
        ),
    ]
}
