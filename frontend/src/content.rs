// Static site content. Sections render straight from these tables.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Icon {
    Building,
    Settings,
    Shield,
    FileCheck,
    Truck,
    Award,
    Clock,
    CheckCircle,
    Users,
    Phone,
    Mail,
    MapPin,
}

impl Icon {
    // Glyphs instead of an icon font, keeps the bundle small
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Building => "🏢",
            Icon::Settings => "⚙️",
            Icon::Shield => "🛡️",
            Icon::FileCheck => "📋",
            Icon::Truck => "🚚",
            Icon::Award => "🏅",
            Icon::Clock => "⏱️",
            Icon::CheckCircle => "✅",
            Icon::Users => "👷",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::MapPin => "📍",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Benefit {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub kind: &'static str,
    pub location: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactDetails {
    pub company: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub area: &'static str,
    pub area_short: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    company: "AMR Échafaudage",
    tagline: "Votre partenaire sécurité",
    phone: "01 23 45 67 89",
    email: crate::config::RECIPIENT,
    area: "Île-de-France et régions limitrophes",
    area_short: "Île-de-France",
};

// Shown on the Google badge above the reviews
pub const GOOGLE_RATING: &str = "4.9/5";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", anchor: "#services" },
    NavLink { label: "Réalisations", anchor: "#realisations" },
    NavLink { label: "Avis clients", anchor: "#avis" },
    NavLink { label: "Équipe", anchor: "#equipe" },
    NavLink { label: "Contact", anchor: CONTACT_ANCHOR },
];

// The quote CTA targets this one, so the nav bar renders it as a button
pub const CONTACT_ANCHOR: &str = "#contact";

impl NavLink {
    /// Anchors resolve against the landing page, so they also work from the legal pages.
    pub fn href(&self) -> String {
        format!("/{}", self.anchor)
    }

    pub fn is_contact(&self) -> bool {
        self.anchor == CONTACT_ANCHOR
    }
}

pub const STATS: &[Stat] = &[
    Stat { value: "15+", label: "Ans d'expérience" },
    Stat { value: "500+", label: "Chantiers réalisés" },
    Stat { value: "100%", label: "Conformité" },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Building,
        title: "Échafaudage de façade",
        description: "Solutions adaptées pour tous types de façades, résidentielles et commerciales",
    },
    Service {
        icon: Icon::Settings,
        title: "Échafaudage industriel",
        description: "Structures renforcées pour sites industriels et interventions complexes",
    },
    Service {
        icon: Icon::Shield,
        title: "Montage & démontage sécurisé",
        description: "Installation professionnelle selon les normes de sécurité en vigueur",
    },
    Service {
        icon: Icon::FileCheck,
        title: "Étude technique & conformité",
        description: "Analyse de vos besoins et garantie de conformité réglementaire",
    },
    Service {
        icon: Icon::Truck,
        title: "Livraison rapide sur chantier",
        description: "Service logistique efficace pour respecter vos délais",
    },
];

// Short names for the footer column
pub const FOOTER_SERVICES: &[&str] = &[
    "Échafaudage façade",
    "Échafaudage industriel",
    "Montage & démontage",
    "Étude technique",
];

pub const SAVOIR_FAIRE: &[&str] = &[
    "Installation professionnelle",
    "Équipements de sécurité certifiés",
    "Respect des normes en vigueur",
];

pub const BENEFITS: &[Benefit] = &[
    Benefit { icon: Icon::Shield, text: "Respect strict des normes de sécurité" },
    Benefit { icon: Icon::Award, text: "Équipe certifiée et expérimentée" },
    Benefit { icon: Icon::Clock, text: "Intervention rapide" },
    Benefit { icon: Icon::CheckCircle, text: "Matériel professionnel contrôlé" },
    Benefit { icon: Icon::Users, text: "Excellent rapport qualité/prix" },
];

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Jean-Marc L.",
        company: "BTP Constructions",
        rating: 5,
        text: "Entreprise sérieuse, montage rapide et sécurisé. Je recommande vivement pour tous vos chantiers.",
    },
    Review {
        name: "Sophie D.",
        company: "Rénovation Plus",
        rating: 5,
        text: "Service impeccable, équipe professionnelle. Matériel de qualité et respect des délais.",
    },
    Review {
        name: "Laurent M.",
        company: "Industrie & Co",
        rating: 5,
        text: "Parfait pour nos besoins industriels. Très réactifs et toujours conformes aux normes.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project { kind: "Rénovation façade", location: "Paris 15ème" },
    Project { kind: "Chantier industriel", location: "Lyon" },
    Project { kind: "Immeuble résidentiel", location: "Marseille" },
    Project { kind: "Site commercial", location: "Toulouse" },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Ahmed R.",
        role: "Fondateur & gérant",
        bio: "Plus de 15 ans sur les chantiers, il suit chaque projet de l'étude technique à la réception.",
    },
    TeamMember {
        name: "Marc T.",
        role: "Chef d'équipe montage",
        bio: "Monteur certifié R408, il encadre les équipes de montage et de démontage sur site.",
    },
    TeamMember {
        name: "Claire V.",
        role: "Responsable devis & logistique",
        bio: "Elle prépare vos devis sous 24h et organise les livraisons de matériel sur chantier.",
    },
];

/// Number of filled stars to draw for a rating.
pub fn review_stars(rating: u8) -> usize {
    rating.min(5) as usize
}

/// Mean rating over `reviews`, or `None` when there is nothing to average.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| review_stars(r.rating) as u32).sum();
    Some(total as f32 / reviews.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(review_stars(0), 0);
        assert_eq!(review_stars(4), 4);
        assert_eq!(review_stars(9), 5);
    }

    #[test]
    fn average_of_empty_table_is_none() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn average_uses_capped_ratings() {
        let reviews = [
            Review { name: "a", company: "x", rating: 4, text: "" },
            Review { name: "b", company: "y", rating: 7, text: "" },
        ];
        assert_eq!(average_rating(&reviews), Some(4.5));
        assert_eq!(average_rating(REVIEWS), Some(5.0));
    }

    #[test]
    fn nav_links_cover_contact_and_resolve_from_any_route() {
        let contact: Vec<_> = NAV_LINKS.iter().filter(|link| link.is_contact()).collect();
        assert_eq!(contact.len(), 1);
        assert_eq!(contact[0].href(), "/#contact");
        let services = NavLink { label: "Services", anchor: "#services" };
        assert_eq!(services.href(), "/#services");
    }

    #[test]
    fn anchors_point_inside_the_page() {
        assert!(NAV_LINKS.iter().all(|link| link.anchor.starts_with('#')));
        assert!(NAV_LINKS.iter().all(|link| link.href().starts_with("/#")));
        assert_eq!(SERVICES.len(), 5);
        assert_eq!(BENEFITS.len(), 5);
    }
}
