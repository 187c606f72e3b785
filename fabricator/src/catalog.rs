//! Fixed generation catalogs
//!
//! Immutable description templates, street names, and weight tables.
//! These are configuration data frozen at compile time; the strings are
//! part of the demo dataset's look and feel and match what the issue
//! tracker's seed data has always used.

use shared::{IssueCategory, IssuePriority, IssueStatus};

/// 5 description templates per category, each with one `{}` street slot.
pub static TEMPLATES: [(IssueCategory, [&str; 5]); 10] = [
    (
        IssueCategory::Pothole,
        [
            "Large pothole causing vehicle damage on {}",
            "Deep pothole needs urgent repair at {}",
            "Multiple potholes forming on {}",
            "Dangerous pothole filled with water on {}",
            "Pothole getting bigger daily at {}",
        ],
    ),
    (
        IssueCategory::Garbage,
        [
            "Overflowing garbage bins at {}, attracting pests",
            "Garbage collection missed for 3 days at {}",
            "Illegal dumping site near {}",
            "Broken garbage bin needs replacement at {}",
            "Foul smell from uncollected garbage at {}",
        ],
    ),
    (
        IssueCategory::Streetlight,
        [
            "Street light not working on {}",
            "Multiple streetlights out on {}",
            "Street light pole damaged at {}",
            "Flickering street light needs replacement at {}",
            "Broken street light causing safety concerns at {}",
        ],
    ),
    (
        IssueCategory::WaterLeak,
        [
            "Major water leak from underground pipe at {}",
            "Continuous water spillage affecting road at {}",
            "Valve leak creating puddle on {}",
            "Water pipe burst at {}",
            "Leaking fire hydrant wasting water at {}",
        ],
    ),
    (
        IssueCategory::BrokenSidewalk,
        [
            "Cracked pavement creating trip hazard on {}",
            "Sidewalk sinking at {} intersection",
            "Broken curb edge dangerous for pedestrians at {}",
            "Large hole in footpath near {}",
            "Uneven sidewalk tiles at {}",
        ],
    ),
    (
        IssueCategory::TrafficSignal,
        [
            "Traffic signal not functioning at {}",
            "Malfunctioning pedestrian signal at {}",
            "Traffic light stuck on red at {}",
            "Yellow light flickering continuously at {}",
            "Timer not working on traffic light at {}",
        ],
    ),
    (
        IssueCategory::Drainage,
        [
            "Blocked storm drain causing flooding at {}",
            "Drainage cover missing creating hazard at {}",
            "Clogged drainage pipe on {}",
            "Poor drainage causing water accumulation at {}",
            "Broken drainage grate at {}",
        ],
    ),
    (
        IssueCategory::TreeMaintenance,
        [
            "Dangerous hanging branch above {} road",
            "Overgrown tree branches blocking view at {}",
            "Dead tree needs removal at {}",
            "Tree blocking street sign at {}",
            "Tree roots damaging sidewalk at {}",
        ],
    ),
    (
        IssueCategory::NoiseComplaint,
        [
            "Construction noise violating hours at {}",
            "Loud music from commercial area disturbing {} residents",
            "Industrial machinery noise at night near {}",
            "Barking dogs complaint in {} area",
            "Late night party noise at {}",
        ],
    ),
    (
        IssueCategory::Parking,
        [
            "Illegal parking blocking driveway at {}",
            "Abandoned vehicle on {} for weeks",
            "No parking zone ignored on {}",
            "Parking violations at {} daily",
            "Double parking causing traffic issues at {}",
        ],
    ),
];

/// Street names used for locations and description slots.
pub static STREETS: [&str; 24] = [
    "Main Street",
    "Oak Avenue",
    "Maple Avenue",
    "Elm Boulevard",
    "Pine Road",
    "Cedar Lane",
    "Birch Drive",
    "Willow Way",
    "Ash Court",
    "Cherry Lane",
    "Walnut Avenue",
    "Spruce Street",
    "Cypress Street",
    "Redwood Circle",
    "Juniper Lane",
    "Hawthorn Way",
    "Sycamore Street",
    "Dogwood Way",
    "Magnolia Drive",
    "Cottonwood Road",
    "Beech Boulevard",
    "Chestnut Avenue",
    "Sequoia Avenue",
    "Palm Street",
];

/// Status distribution: 35% pending, 30% in progress, 35% resolved
pub static STATUS_WEIGHTS: [(IssueStatus, f64); 3] = [
    (IssueStatus::Pending, 0.35),
    (IssueStatus::InProgress, 0.30),
    (IssueStatus::Resolved, 0.35),
];

/// Priority distribution: 40% low, 40% medium, 20% high
pub static PRIORITY_WEIGHTS: [(IssuePriority, f64); 3] = [
    (IssuePriority::Low, 0.40),
    (IssuePriority::Medium, 0.40),
    (IssuePriority::High, 0.20),
];

/// Templates for one category.
pub fn templates_for(category: IssueCategory) -> &'static [&'static str; 5] {
    // TEMPLATES is ordered like IssueCategory::ALL
    &TEMPLATES[category as usize].1
}

/// Substitute the street into a description template.
pub fn render_description(template: &str, street: &str) -> String {
    template.replacen("{}", street, 1)
}
