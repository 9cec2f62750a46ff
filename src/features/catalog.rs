//! Static storefront content
//!
//! Slides, categories, links and the vehicle catalog are compiled into the
//! binary. Nothing here is fetched or persisted.

/// Gradient tint behind a hero slide's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTint {
    /// Brand red
    Primary,
    /// Navigation bar blue
    Nav,
}

/// One item of rotating promotional content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub call_to_action: &'static str,
    pub image_ref: &'static str,
    pub link_target: &'static str,
    pub tint: SlideTint,
}

/// Hero carousel slides, in display order
pub const HERO_SLIDES: &[Slide] = &[
    Slide {
        id: 1,
        title: "MEGA SALE",
        subtitle: "AUTO CARE PRODUCTS",
        call_to_action: "GET DEALS",
        image_ref: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64",
        link_target: "/shop?category=auto-care",
        tint: SlideTint::Primary,
    },
    Slide {
        id: 2,
        title: "READY FOR",
        subtitle: "A CLEAN CAR?",
        call_to_action: "GET DEALS",
        image_ref: "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f",
        link_target: "/shop?category=cleaning",
        tint: SlideTint::Nav,
    },
    Slide {
        id: 3,
        title: "PROFESSIONAL",
        subtitle: "DETAILING SERVICES",
        call_to_action: "GET DEALS",
        image_ref: "https://images.unsplash.com/photo-1507136566006-cfc505b114fc",
        link_target: "/services",
        tint: SlideTint::Primary,
    },
];

/// Featured product category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub image_ref: &'static str,
    pub slug: &'static str,
    pub product_count: u32,
}

impl Category {
    /// Shop page filtered to this category
    pub fn href(&self) -> String {
        format!("/shop?category={}", self.slug)
    }
}

pub const FEATURED_CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        name: "Engine Oils",
        image_ref: "https://images.unsplash.com/photo-1635773054018-32a55bc1d157",
        slug: "engine-oils",
        product_count: 48,
    },
    Category {
        id: 2,
        name: "Paint & Body",
        image_ref: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e",
        slug: "paint-body",
        product_count: 32,
    },
    Category {
        id: 3,
        name: "Cleaning Products",
        image_ref: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf",
        slug: "cleaning-products",
        product_count: 65,
    },
    Category {
        id: 4,
        name: "Auto Care",
        image_ref: "https://images.unsplash.com/photo-1607860108855-64acf2078ed9",
        slug: "auto-care",
        product_count: 120,
    },
    Category {
        id: 5,
        name: "Detailing",
        image_ref: "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f",
        slug: "detailing",
        product_count: 27,
    },
    Category {
        id: 6,
        name: "Accessories",
        image_ref: "https://images.unsplash.com/photo-1489824904134-891ab64532f1",
        slug: "accessories",
        product_count: 0,
    },
    Category {
        id: 7,
        name: "Car Polish",
        image_ref: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64",
        slug: "car-polish",
        product_count: 19,
    },
    Category {
        id: 8,
        name: "Interior Care",
        image_ref: "https://images.unsplash.com/photo-1503376780353-7e6692767b70",
        slug: "interior-care",
        product_count: 0,
    },
];

/// A navigation target handed to the external router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    /// Whether this link points at the page currently shown
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// Path of the only page this application renders
pub const HOME_PATH: &str = "/";

pub const NAV_LINKS: &[Link] = &[
    Link::new("Home", "/"),
    Link::new("About Us", "/about"),
    Link::new("Shop", "/shop"),
    Link::new("Services", "/services"),
    Link::new("Blog", "/blog"),
    Link::new("Contact Us", "/contact"),
];

/// Entries of the "ALL CATEGORIES" dropdown
pub const MENU_CATEGORIES: &[&str] = &[
    "Auto Care Products",
    "Car Cleaning",
    "Detailing Services",
    "Paint & Body Work",
    "Engine Care",
    "Brake Parts",
    "Suspension",
    "Filters",
    "Engine Oils",
];

/// Shop URL for a dropdown category name
pub fn menu_category_href(name: &str) -> String {
    format!("/shop?category={}", slugify(name))
}

/// Lowercase, with every run of non-alphanumerics collapsed to one dash
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for part in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
    {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(&part.to_ascii_lowercase());
    }
    slug
}

pub mod top_bar {
    use super::Link;

    pub const OPENING_HOURS: &str = "Mon-Fri: 9am-6pm | Sat: 9am-4pm";
    pub const SLOGAN: &str = "100% GENUINE AUTO CARE PRODUCTS TO KEEP YOUR VEHICLE IN TOP SHAPE.";
    pub const WHATSAPP: Link = Link::new("WhatsApp", "https://wa.me/07073158078");
    pub const LOCATIONS: Link = Link::new("Our Locations", "/locations");
    pub const START_SHOPPING: Link = Link::new("START SHOPPING", "/shop");
}

pub mod header {
    use super::Link;

    pub const PHONE: &str = "09012345678";
    pub const PHONE_LINK: Link = Link::new("09012345678", "tel:09012345678");
    pub const WISHLIST: Link = Link::new("Wishlist", "/wishlist");
    pub const CART: Link = Link::new("Cart", "/cart");
    pub const ACCOUNT: Link = Link::new("Account", "/account");
}

/// Vehicle catalog used by the vehicle selector
pub mod vehicles {
    pub const MAKES: &[&str] = &[
        "Toyota", "Honda", "Ford", "BMW", "Mercedes", "Lexus", "Nissan", "Hyundai",
    ];

    /// Newest first
    pub const YEARS: &[&str] = &["2024", "2023", "2022", "2021", "2020", "2019", "2018"];

    pub const ENGINES: &[&str] = &["4-Cylinder", "V6", "V8", "Electric", "Hybrid", "Diesel"];

    pub const TRANSMISSIONS: &[&str] = &["Automatic", "Manual", "CVT", "DSG"];

    pub const TRIMS: &[&str] = &["Base", "LE", "SE", "XLE", "Sport", "Luxury", "Premium"];

    const MODELS: &[(&str, &[&str])] = &[
        (
            "toyota",
            &["Camry", "Corolla", "RAV4", "Highlander", "Tacoma", "4Runner", "Sienna"],
        ),
        (
            "honda",
            &["Civic", "Accord", "CR-V", "Pilot", "Odyssey", "HR-V", "Ridgeline"],
        ),
        (
            "ford",
            &["Focus", "Fusion", "Escape", "Explorer", "F-150", "Mustang", "Edge"],
        ),
        (
            "bmw",
            &["3 Series", "5 Series", "7 Series", "X3", "X5", "X7", "M3"],
        ),
        (
            "mercedes",
            &["C-Class", "E-Class", "S-Class", "GLC", "GLE", "GLS", "A-Class"],
        ),
        ("lexus", &["ES", "RX", "NX", "UX", "LS", "GX", "LX"]),
        (
            "nissan",
            &["Altima", "Sentra", "Rogue", "Pathfinder", "Frontier", "Murano", "Maxima"],
        ),
        (
            "hyundai",
            &["Elantra", "Sonata", "Tucson", "Santa Fe", "Kona", "Palisade", "Venue"],
        ),
    ];

    /// Models for a make, matched case-insensitively. Empty for unknown makes.
    pub fn models_for(make: &str) -> &'static [&'static str] {
        MODELS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(make))
            .map(|(_, models)| *models)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_slides() {
        assert_eq!(HERO_SLIDES.len(), 3);
        assert_eq!(HERO_SLIDES[0].title, "MEGA SALE");
        assert_eq!(HERO_SLIDES[2].link_target, "/services");
        assert_eq!(HERO_SLIDES[1].tint, SlideTint::Nav);
    }

    #[test]
    fn test_category_href() {
        assert_eq!(FEATURED_CATEGORIES.len(), 8);
        assert_eq!(
            FEATURED_CATEGORIES[1].href(),
            "/shop?category=paint-body"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Paint & Body Work"), "paint-body-work");
        assert_eq!(slugify("  Engine Oils "), "engine-oils");
        assert_eq!(menu_category_href("Brake Parts"), "/shop?category=brake-parts");
    }

    #[test]
    fn test_only_home_is_active() {
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|link| link.is_active(HOME_PATH))
            .map(|link| link.label)
            .collect();
        assert_eq!(active, vec!["Home"]);
    }

    #[test]
    fn test_every_make_has_seven_models() {
        for make in vehicles::MAKES {
            assert_eq!(
                vehicles::models_for(make).len(),
                7,
                "{} should list seven models",
                make
            );
        }
        assert!(vehicles::models_for("Tesla").is_empty());
        assert_eq!(vehicles::models_for("bmw")[0], "3 Series");
    }
}
