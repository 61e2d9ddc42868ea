//! Copy and metadata for the informational pages.
//!
//! Pages render these slices directly; nothing here has behavior beyond
//! lookup.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        href: "/",
        label: "Home",
    },
    NavLink {
        href: "/about",
        label: "About",
    },
    NavLink {
        href: "/projects",
        label: "Projects",
    },
    NavLink {
        href: "/map",
        label: "Find NGOs",
    },
    NavLink {
        href: "/contact",
        label: "Contact",
    },
];

pub const SITE_NAME: &str = "GiveBack Hub";

/// A headline figure with a short caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const HOME_STATS: [Stat; 4] = [
    Stat {
        value: "2,500+",
        label: "Lives Impacted",
        description: "Community members directly benefited",
    },
    Stat {
        value: "15",
        label: "Active Projects",
        description: "Ongoing initiatives across regions",
    },
    Stat {
        value: "85%",
        label: "Funds to Programs",
        description: "Direct allocation to community projects",
    },
    Stat {
        value: "50+",
        label: "Volunteers",
        description: "Dedicated community champions",
    },
];

pub const DONATE_STATS: [Stat; 4] = [
    Stat {
        value: "2,500+",
        label: "Lives Impacted",
        description: "People directly benefiting from our projects",
    },
    Stat {
        value: "12",
        label: "Countries",
        description: "Communities we're actively supporting",
    },
    Stat {
        value: "18",
        label: "Active Projects",
        description: "Ongoing initiatives making a difference",
    },
    Stat {
        value: "95%",
        label: "Direct Impact",
        description: "Of donations go directly to projects",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactExample {
    pub amount: u32,
    pub impact: &'static str,
}

pub const IMPACT_EXAMPLES: [ImpactExample; 6] = [
    ImpactExample {
        amount: 25,
        impact: "Provides clean water for 1 family for a month",
    },
    ImpactExample {
        amount: 50,
        impact: "Supplies school materials for 5 children",
    },
    ImpactExample {
        amount: 100,
        impact: "Funds medical care for 10 patients",
    },
    ImpactExample {
        amount: 250,
        impact: "Supports a teacher's salary for a month",
    },
    ImpactExample {
        amount: 500,
        impact: "Builds a water well serving 50 families",
    },
    ImpactExample {
        amount: 1000,
        impact: "Constructs a classroom for 30 students",
    },
];

/// Impact sentence for a preset amount, if one is published.
#[must_use]
pub fn impact_for(amount: u32) -> Option<&'static str> {
    IMPACT_EXAMPLES
        .iter()
        .find(|example| example.amount == amount)
        .map(|example| example.impact)
}

pub const TRUST_POINTS: [&str; 4] = [
    "95% of donations go directly to project implementation",
    "Regular updates and photos from supported communities",
    "Transparent reporting on project outcomes and impact",
    "Tax-deductible receipts provided for all donations",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HelpOption {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

pub const OTHER_WAYS_TO_HELP: [HelpOption; 3] = [
    HelpOption {
        title: "Volunteer",
        description: "Join our team of volunteers and contribute your skills to make a direct impact.",
        action: "Learn More",
    },
    HelpOption {
        title: "Spread the Word",
        description: "Share our mission with friends and family to expand our reach and impact.",
        action: "Share Now",
    },
    HelpOption {
        title: "Corporate Partnership",
        description: "Partner with us to create meaningful corporate social responsibility programs.",
        action: "Get Started",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedProject {
    pub project_id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub image: &'static str,
}

pub const FEATURED_PROJECTS: [FeaturedProject; 3] = [
    FeaturedProject {
        project_id: 1,
        title: "Clean Water Initiative",
        description: "Providing access to clean drinking water in rural communities through well construction and water purification systems.",
        impact: "500 families served",
        image: "/public/clean-water-well-construction-rural-community.jpg",
    },
    FeaturedProject {
        project_id: 2,
        title: "Education Support Program",
        description: "Building schools and providing educational resources to underserved children in remote areas.",
        impact: "300 children enrolled",
        image: "/public/diverse-children-learning.png",
    },
    FeaturedProject {
        project_id: 3,
        title: "Healthcare Access Project",
        description: "Mobile health clinics bringing essential medical care to communities lacking healthcare infrastructure.",
        impact: "1,200 patients treated",
        image: "/public/mobile-health-clinic-medical-care-rural-area.jpg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrgValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [OrgValue; 4] = [
    OrgValue {
        title: "Transparency",
        description: "We believe in complete transparency with our donors and communities about how funds are used and impact is measured.",
    },
    OrgValue {
        title: "Community-Led",
        description: "Our projects are designed and implemented with direct input from the communities we serve, ensuring sustainable solutions.",
    },
    OrgValue {
        title: "Measurable Impact",
        description: "Every project includes clear metrics and regular reporting to demonstrate real, lasting change in people's lives.",
    },
    OrgValue {
        title: "Collaboration",
        description: "We work with local partners, volunteers, and stakeholders to maximize our collective impact and reach.",
    },
];

pub const MISSION: [&str; 3] = [
    "We partner with underserved communities to identify their most pressing needs and develop sustainable solutions that create lasting positive impact.",
    "Through collaborative projects in education, healthcare, clean water, and economic development, we work to break cycles of poverty and build resilient communities.",
    "Our approach prioritizes local leadership, transparent operations, and measurable outcomes to ensure every donation creates maximum impact.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Priya Sharma",
        role: "Executive Director",
        bio: "15+ years in international development with focus on sustainable community programs.",
        image: "/public/professional-indian-woman-business-attire-headshot.jpg",
    },
    TeamMember {
        name: "Arjun Patel",
        role: "Program Manager",
        bio: "Former Peace Corps volunteer with expertise in water and sanitation projects.",
        image: "/public/professional-indian-man-business-suit-headshot.jpg",
    },
    TeamMember {
        name: "Kavya Reddy",
        role: "Community Outreach",
        bio: "Local community leader with deep connections across our target regions.",
        image: "/public/professional-indian-woman-traditional-modern-headshot.jpg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Address,
    ResponseTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        kind: ContactKind::Email,
        title: "Email",
        details: "info@givebackhub.org",
        description: "Send us an email anytime",
    },
    ContactChannel {
        kind: ContactKind::Phone,
        title: "Phone",
        details: "+1 (555) 123-4567",
        description: "Mon-Fri, 9AM-5PM EST",
    },
    ContactChannel {
        kind: ContactKind::Address,
        title: "Address",
        details: "123 Community Drive, Suite 100",
        description: "New York, NY 10001",
    },
    ContactChannel {
        kind: ContactKind::ResponseTime,
        title: "Response Time",
        details: "Within 24 hours",
        description: "We respond to all inquiries quickly",
    },
];

pub const OFFICE_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 5:00 PM EST",
    "Saturday: 10:00 AM - 2:00 PM EST",
    "Sunday: Closed",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "How can I volunteer?",
        answer: "We offer various volunteer opportunities both locally and internationally. Contact us to learn about current openings and how to get involved.",
    },
    FaqEntry {
        question: "Where does my donation go?",
        answer: "85% of donations go directly to programs, with detailed impact reports available for all donors. We maintain full transparency in our financial operations.",
    },
    FaqEntry {
        question: "Can I visit project sites?",
        answer: "Yes! We organize donor trips and volunteer visits to project sites. These experiences provide firsthand insight into our work and impact.",
    },
    FaqEntry {
        question: "How do you measure impact?",
        answer: "We use rigorous monitoring and evaluation frameworks, including baseline studies, regular assessments, and third-party evaluations to measure our impact.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Pickup,
    Dropoff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub areas: &'static [&'static str],
}

pub const SERVICES: [Service; 2] = [
    Service {
        kind: ServiceKind::Pickup,
        title: "Donation Pickup",
        description: "We'll collect your donations directly from your location",
        features: &[
            "Free pickup for donations above ₹500",
            "Scheduled pickup slots",
            "Receipt generation",
            "Tax exemption certificates",
        ],
        areas: &["Mumbai Central", "Bandra", "Andheri", "Powai", "Thane"],
    },
    Service {
        kind: ServiceKind::Dropoff,
        title: "Supply Drop-off",
        description: "Direct delivery of essential supplies to communities in need",
        features: &[
            "Emergency supply delivery",
            "Scheduled distribution",
            "Real-time tracking",
            "Community coordination",
        ],
        areas: &["Dharavi", "Govandi", "Mankhurd", "Kurla", "Chembur"],
    },
];

/// Short feature lists for the home-page services teaser.
pub const SERVICE_HIGHLIGHTS: [(&str, &str, &[&str]); 2] = [
    (
        "Donation Pickup",
        "We'll collect your donations directly from your location with free pickup for donations above ₹500.",
        &["Free pickup service", "Scheduled slots", "Tax receipts"],
    ),
    (
        "Supply Drop-off",
        "Direct delivery of essential supplies to communities in need with real-time tracking.",
        &[
            "Emergency delivery",
            "Community coordination",
            "Live tracking",
        ],
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemCategory {
    pub name: &'static str,
    pub class: &'static str,
}

pub const ACCEPTED_ITEMS: [ItemCategory; 6] = [
    ItemCategory {
        name: "Clothing & Textiles",
        class: "tile tile--blue",
    },
    ItemCategory {
        name: "Books & Stationery",
        class: "tile tile--green",
    },
    ItemCategory {
        name: "Food Items",
        class: "tile tile--orange",
    },
    ItemCategory {
        name: "Medical Supplies",
        class: "tile tile--red",
    },
    ItemCategory {
        name: "Electronics",
        class: "tile tile--purple",
    },
    ItemCategory {
        name: "Toys & Games",
        class: "tile tile--pink",
    },
];

pub const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "1. Schedule Pickup",
        "Call us or book online to schedule a convenient pickup time",
    ),
    (
        "2. Prepare Items",
        "Pack your donations and have them ready for collection",
    ),
    (
        "3. We Collect",
        "Our team arrives at your location and collects the donations",
    ),
];

pub const SERVICE_HOURS: [&str; 2] = [
    "Monday - Saturday: 9:00 AM - 6:00 PM",
    "Sunday: 10:00 AM - 4:00 PM",
];

pub const SERVICES_PHONE: &str = "+91 98765 43210";
pub const SERVICES_EMAIL: &str = "services@givebackhub.org";
