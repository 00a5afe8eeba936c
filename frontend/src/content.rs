// Static site copy. Section ids double as the in-page anchors the nav links point at.

pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("tour", "Tour"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

pub struct Service {
    pub name: &'static str,
    pub price: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        name: "Haircut",
        price: "from ₩35,000",
        summary: "Precision cut and styling by a senior designer.",
        details: "Includes consultation, shampoo, cut and blow-dry finish.",
    },
    Service {
        name: "Perm",
        price: "from ₩120,000",
        summary: "Digital and setting perms for soft, lasting waves.",
        details: "Korean digital perm, C-curl and S-curl. Aftercare treatment included.",
    },
    Service {
        name: "Color",
        price: "from ₩90,000",
        summary: "Low-damage color with Korean and Japanese lines.",
        details: "Root touch-up, full color, balayage and toning. Patch test on request.",
    },
    Service {
        name: "Head Spa",
        price: "from ₩60,000",
        summary: "Scalp care ritual with massage and steam.",
        details: "Scalp analysis, deep cleanse, massage and a nourishing mask.",
    },
    Service {
        name: "Treatment",
        price: "from ₩50,000",
        summary: "Protein and moisture repair for damaged hair.",
        details: "Multi-step clinic treatment matched to your hair condition.",
    },
];

pub const STYLISTS: &[&str] = &["Any Stylist", "Jane", "Minji", "Seo-yeon", "Daniel"];

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/assets/gallery/layered-bob.webp", caption: "Layered bob with soft C-curl" },
    GalleryImage { src: "/assets/gallery/hush-cut.webp", caption: "Hush cut, ash brown" },
    GalleryImage { src: "/assets/gallery/digital-perm.webp", caption: "Digital perm, loose waves" },
    GalleryImage { src: "/assets/gallery/balayage.webp", caption: "Honey balayage" },
    GalleryImage { src: "/assets/gallery/two-block.webp", caption: "Two-block cut" },
    GalleryImage { src: "/assets/gallery/see-through-bangs.webp", caption: "See-through bangs" },
];

pub struct TourSlide {
    pub src: &'static str,
    pub title: &'static str,
}

pub const TOUR_SLIDES: &[TourSlide] = &[
    TourSlide { src: "/assets/tour/reception.webp", title: "Reception" },
    TourSlide { src: "/assets/tour/styling-floor.webp", title: "Styling floor" },
    TourSlide { src: "/assets/tour/spa-room.webp", title: "Head spa room" },
    TourSlide { src: "/assets/tour/lounge.webp", title: "Lounge" },
];

pub const FAQS: &[(&str, &str)] = &[
    (
        "Do I need to book in advance?",
        "Walk-ins are welcome when a chair is free, but booking through WhatsApp guarantees your slot.",
    ),
    (
        "Do your stylists speak English?",
        "Yes. Every stylist speaks English and most also speak Japanese.",
    ),
    (
        "How long does a digital perm take?",
        "Plan for two and a half to three hours including the aftercare treatment.",
    ),
    (
        "What is your cancellation policy?",
        "Let us know at least 24 hours ahead so we can offer the slot to someone else.",
    ),
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { quote: "Best haircut I've had in Seoul, and they actually listened.", author: "Emily R." },
    Testimonial { quote: "The head spa is worth the trip on its own.", author: "Kenji T." },
    Testimonial { quote: "My perm still looks great three months later.", author: "Sophie L." },
];

pub const ABOUT_IMAGES: (&str, &str) = ("/assets/about/salon-interior.webp", "/assets/about/team.webp");

pub const BEFORE_AFTER: (&str, &str) = ("/assets/before-after/before.webp", "/assets/before-after/after.webp");
