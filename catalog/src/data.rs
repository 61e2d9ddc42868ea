//! The fixed record set compiled into the site.

use crate::ngo::{Contact, Coordinates, NgoCategory, NgoRecord};
use crate::project::{PhaseStatus, ProjectCategory, ProjectRecord, ProjectStatus, TimelinePhase};

pub(crate) static NGOS: [NgoRecord; 4] = [
    NgoRecord {
        id: 1,
        name: "Mumbai Education Foundation",
        description: "Providing quality education to underprivileged children in Mumbai slums",
        category: NgoCategory::Education,
        location: "Dharavi, Mumbai",
        coordinates: Coordinates {
            lat: 19.043,
            lng: 72.857,
        },
        distance: "2.3 km",
        beneficiaries: "5,000+ children",
        contact: Contact {
            phone: "+91 98765 43210",
            email: "contact@mumbaieducation.org",
        },
        urgent_needs: &["Books", "Stationery", "Computers"],
        image: "/public/diverse-children-learning.png",
    },
    NgoRecord {
        id: 2,
        name: "Clean Water Mumbai",
        description: "Installing water purification systems in Mumbai's underserved communities",
        category: NgoCategory::WaterSanitation,
        location: "Bandra East, Mumbai",
        coordinates: Coordinates {
            lat: 19.0596,
            lng: 72.8656,
        },
        distance: "4.1 km",
        beneficiaries: "15,000+ families",
        contact: Contact {
            phone: "+91 98765 43211",
            email: "help@cleanwatermumbai.org",
        },
        urgent_needs: &["Water Filters", "Pipes", "Funding"],
        image: "/public/clean-water-well-construction-rural-community.jpg",
    },
    NgoRecord {
        id: 3,
        name: "Mumbai Health Care Initiative",
        description: "Mobile health clinics serving remote areas of Greater Mumbai",
        category: NgoCategory::Healthcare,
        location: "Powai, Mumbai",
        coordinates: Coordinates {
            lat: 19.1176,
            lng: 72.906,
        },
        distance: "6.8 km",
        beneficiaries: "8,000+ patients",
        contact: Contact {
            phone: "+91 98765 43212",
            email: "care@mumbaihealthcare.org",
        },
        urgent_needs: &["Medical Supplies", "Medicines", "Volunteers"],
        image: "/public/mobile-health-clinic-medical-care-rural-area.jpg",
    },
    NgoRecord {
        id: 4,
        name: "Women Empowerment Mumbai",
        description: "Skill development and microfinance for women entrepreneurs",
        category: NgoCategory::WomenEmpowerment,
        location: "Andheri West, Mumbai",
        coordinates: Coordinates {
            lat: 19.1136,
            lng: 72.8697,
        },
        distance: "8.2 km",
        beneficiaries: "3,500+ women",
        contact: Contact {
            phone: "+91 98765 43213",
            email: "empower@wemumbai.org",
        },
        urgent_needs: &["Sewing Machines", "Training Materials", "Microfinance"],
        image: "/public/women-entrepreneurs-business-training-microfinance.jpg",
    },
];

pub(crate) static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: 1,
        title: "Clean Water Initiative",
        description: "Providing access to clean drinking water in rural communities through well construction and water purification systems.",
        full_description: "The Clean Water Initiative addresses the critical need for safe drinking water in rural Kenyan communities. Through partnerships with local organizations and community leaders, we're constructing sustainable water wells and implementing water purification systems that will serve families for generations to come.",
        location: "Rural Kenya",
        status: ProjectStatus::Active,
        category: ProjectCategory::WaterSanitation,
        funding_goal: 50_000,
        funding_raised: 35_000,
        beneficiaries: 500,
        start_date: "2024-01-15",
        end_date: "2024-12-31",
        image: "/public/clean-water-well-construction-rural-community.jpg",
        impact: "15 wells constructed, 500 families with clean water access",
        objectives: &[
            "Construct 25 sustainable water wells",
            "Install water purification systems in 10 communities",
            "Train 50 local technicians for maintenance",
            "Establish water committees for long-term management",
        ],
        timeline: &[
            TimelinePhase {
                name: "Planning & Community Engagement",
                status: PhaseStatus::Completed,
                date_label: "Jan 2024",
            },
            TimelinePhase {
                name: "Well Construction Phase 1",
                status: PhaseStatus::Completed,
                date_label: "Feb-Apr 2024",
            },
            TimelinePhase {
                name: "Well Construction Phase 2",
                status: PhaseStatus::InProgress,
                date_label: "May-Aug 2024",
            },
            TimelinePhase {
                name: "Training & Handover",
                status: PhaseStatus::Upcoming,
                date_label: "Sep-Dec 2024",
            },
        ],
    },
    ProjectRecord {
        id: 2,
        title: "Education Support Program",
        description: "Building schools and providing educational resources to underserved children in remote areas.",
        full_description: "The Education Support Program builds classrooms and equips teachers in remote Guatemalan villages where the nearest school is hours away on foot. Each school is run with a parent committee that shares responsibility for attendance, maintenance, and the school garden.",
        location: "Guatemala",
        status: ProjectStatus::Active,
        category: ProjectCategory::Education,
        funding_goal: 75_000,
        funding_raised: 45_000,
        beneficiaries: 300,
        start_date: "2024-02-01",
        end_date: "2025-01-31",
        image: "/public/school-construction-children-learning-guatemala.jpg",
        impact: "2 schools built, 300 children enrolled, 15 teachers trained",
        objectives: &[
            "Build 4 primary school classrooms",
            "Supply textbooks and learning kits for 300 children",
            "Train 15 local teachers in child-centred methods",
            "Set up parent committees for every school",
        ],
        timeline: &[
            TimelinePhase {
                name: "Site Selection & Permits",
                status: PhaseStatus::Completed,
                date_label: "Feb 2024",
            },
            TimelinePhase {
                name: "Classroom Construction",
                status: PhaseStatus::InProgress,
                date_label: "Mar-Sep 2024",
            },
            TimelinePhase {
                name: "Teacher Training",
                status: PhaseStatus::Upcoming,
                date_label: "Oct-Nov 2024",
            },
            TimelinePhase {
                name: "First Full School Year",
                status: PhaseStatus::Upcoming,
                date_label: "Jan 2025",
            },
        ],
    },
    ProjectRecord {
        id: 3,
        title: "Healthcare Access Project",
        description: "Mobile health clinics bringing essential medical care to communities lacking healthcare infrastructure.",
        full_description: "The Healthcare Access Project runs mobile clinics across rural Bangladesh, bringing consultations, vaccinations, and maternal care to villages without a permanent health post. Community health workers follow up between visits.",
        location: "Rural Bangladesh",
        status: ProjectStatus::Active,
        category: ProjectCategory::Healthcare,
        funding_goal: 60_000,
        funding_raised: 60_000,
        beneficiaries: 1200,
        start_date: "2023-09-01",
        end_date: "2024-08-31",
        image: "/public/mobile-health-clinic-medical-care-rural-area.jpg",
        impact: "3 mobile clinics operational, 1,200 patients treated monthly",
        objectives: &[
            "Operate 3 fully equipped mobile clinics",
            "Reach 1,200 patients every month",
            "Train 20 community health workers",
            "Run quarterly vaccination drives",
        ],
        timeline: &[
            TimelinePhase {
                name: "Clinic Procurement",
                status: PhaseStatus::Completed,
                date_label: "Sep-Oct 2023",
            },
            TimelinePhase {
                name: "Route Planning & Staffing",
                status: PhaseStatus::Completed,
                date_label: "Nov 2023",
            },
            TimelinePhase {
                name: "Clinic Operations",
                status: PhaseStatus::InProgress,
                date_label: "Dec 2023-Aug 2024",
            },
            TimelinePhase {
                name: "Handover to District Health Office",
                status: PhaseStatus::Upcoming,
                date_label: "Sep 2024",
            },
        ],
    },
    ProjectRecord {
        id: 4,
        title: "Women's Empowerment Initiative",
        description: "Providing microfinance and business training to women entrepreneurs in underserved communities.",
        full_description: "The Women's Empowerment Initiative pairs business training with small loans so that women in rural India can start and grow their own enterprises. Repaid loans return to a community fund that finances the next cohort.",
        location: "Rural India",
        status: ProjectStatus::Planning,
        category: ProjectCategory::EconomicDevelopment,
        funding_goal: 40_000,
        funding_raised: 12_000,
        beneficiaries: 200,
        start_date: "2024-06-01",
        end_date: "2025-05-31",
        image: "/public/women-entrepreneurs-business-training-microfinance.jpg",
        impact: "Project launching soon - 200 women to receive training and microloans",
        objectives: &[
            "Deliver a 12-week business training course to 200 women",
            "Issue microloans to every graduate with a business plan",
            "Create a revolving community loan fund",
        ],
        timeline: &[
            TimelinePhase {
                name: "Partner Selection",
                status: PhaseStatus::InProgress,
                date_label: "Apr-May 2024",
            },
            TimelinePhase {
                name: "First Training Cohort",
                status: PhaseStatus::Upcoming,
                date_label: "Jun-Aug 2024",
            },
            TimelinePhase {
                name: "Loan Disbursement",
                status: PhaseStatus::Upcoming,
                date_label: "Sep 2024",
            },
            TimelinePhase {
                name: "Second Cohort",
                status: PhaseStatus::Upcoming,
                date_label: "Jan-Mar 2025",
            },
        ],
    },
    ProjectRecord {
        id: 5,
        title: "Sustainable Agriculture Program",
        description: "Teaching sustainable farming techniques and providing seeds and tools to improve food security.",
        full_description: "The Sustainable Agriculture Program trained smallholder farmers in rural Ethiopia in conservation farming, drought-tolerant crops, and seed saving. Farmer field schools continue to share the techniques with neighbouring villages.",
        location: "Rural Ethiopia",
        status: ProjectStatus::Completed,
        category: ProjectCategory::Agriculture,
        funding_goal: 30_000,
        funding_raised: 30_000,
        beneficiaries: 150,
        start_date: "2023-03-01",
        end_date: "2023-12-15",
        image: "/public/sustainable-farming-techniques-rural-agriculture.jpg",
        impact: "150 farmers trained, 40% increase in crop yields, improved food security",
        objectives: &[
            "Train 150 farmers in conservation agriculture",
            "Distribute drought-tolerant seed varieties",
            "Establish 5 farmer field schools",
        ],
        timeline: &[
            TimelinePhase {
                name: "Baseline Survey",
                status: PhaseStatus::Completed,
                date_label: "Mar 2023",
            },
            TimelinePhase {
                name: "Farmer Field Schools",
                status: PhaseStatus::Completed,
                date_label: "Apr-Sep 2023",
            },
            TimelinePhase {
                name: "Harvest Evaluation",
                status: PhaseStatus::Completed,
                date_label: "Oct-Dec 2023",
            },
        ],
    },
    ProjectRecord {
        id: 6,
        title: "Youth Skills Development",
        description: "Vocational training programs for young adults to develop marketable skills and find employment.",
        full_description: "Youth Skills Development offers vocational courses in trades, hospitality, and digital skills to young adults in the urban Philippines, followed by job placement support with local employers.",
        location: "Urban Philippines",
        status: ProjectStatus::Active,
        category: ProjectCategory::Education,
        funding_goal: 45_000,
        funding_raised: 28_000,
        beneficiaries: 100,
        start_date: "2024-03-01",
        end_date: "2025-02-28",
        image: "/public/youth-vocational-training-skills-development.jpg",
        impact: "80 youth enrolled, 65% job placement rate for graduates",
        objectives: &[
            "Enrol 100 young adults in vocational courses",
            "Partner with 20 local employers for apprenticeships",
            "Reach a 70% job placement rate",
        ],
        timeline: &[
            TimelinePhase {
                name: "Curriculum Design",
                status: PhaseStatus::Completed,
                date_label: "Mar 2024",
            },
            TimelinePhase {
                name: "First Intake",
                status: PhaseStatus::InProgress,
                date_label: "Apr-Sep 2024",
            },
            TimelinePhase {
                name: "Job Placement",
                status: PhaseStatus::Upcoming,
                date_label: "Oct 2024-Feb 2025",
            },
        ],
    },
];
