//! Batch generation engine
//!
//! Fabricates a batch of plausible issue reports. A leading slice of the
//! batch is stamped from duplicate-report clusters: several records that
//! reuse one incident's id, category, description, street, and priority,
//! with coordinates jittered around a shared base point. Those clusters
//! model multiple citizens independently reporting the same incident and
//! feed the tracker's dedup tooling, so the id collisions are deliberate.
//!
//! All randomness flows through the caller-supplied [`Rng`]; seeding it
//! makes a run fully reproducible.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use shared::{
    Comment, Issue, IssueCategory, IssuePriority, IssueStatus, StatusHistoryEntry, UserRecord,
};

use crate::catalog::{self, PRIORITY_WEIGHTS, STATUS_WEIGHTS, STREETS};

// ── Geography ───────────────────────────────────────────────────────

/// South-west corner of the coordinate bounding box
const BASE_LAT: f64 = 22.24;
const BASE_LON: f64 = 73.31;
/// Box extent; coordinates land in `[base, base + SPAN)`
const COORD_SPAN: f64 = 0.10;
/// Duplicate members scatter this far around the cluster's base point
const DUPLICATE_JITTER: f64 = 0.002;

// ── Admin authorship for synthesized follow-ups ─────────────────────

const ADMIN_ID: &str = "admin-1";
const ADMIN_NAME: &str = "City Administrator";

const COMMENT_IN_PROGRESS: &str =
    "We have received your report and our team is working on the resolution.";
const COMMENT_RESOLVED: &str =
    "We have received your report and our team has completed the resolution.";
const HISTORY_IN_PROGRESS: &str = "Issue assigned to relevant department";
const HISTORY_RESOLVED: &str = "Issue resolved successfully";

/// Batch shape knobs
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Issues to fabricate
    pub count: usize,
    /// Duplicate-report clusters to seed
    pub duplicate_groups: usize,
    /// Leading batch indices drawn from the clusters
    pub duplicate_window: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 200,
            duplicate_groups: 15,
            duplicate_window: 40,
        }
    }
}

/// One real-world incident that several fabricated reports describe.
///
/// Generation-time only; members stamped from it carry its identity into
/// the store, the group itself is never persisted.
#[derive(Debug, Clone)]
struct DuplicateGroup {
    id: String,
    category: IssueCategory,
    description: String,
    street: &'static str,
    priority: IssuePriority,
    base_lat: f64,
    base_lon: f64,
}

/// Fabricate `opts.count` issues reported by random roster users.
///
/// `now` anchors all timestamps; `created_at` lands 0-60 whole days
/// before it.
///
/// # Panics
///
/// Panics if `users` is empty. Callers go through
/// [`crate::store::load_users`], which rejects an empty roster up front.
pub fn fabricate_batch(
    rng: &mut impl Rng,
    users: &[UserRecord],
    now: DateTime<Utc>,
    opts: &BatchOptions,
) -> Vec<Issue> {
    let groups = build_duplicate_groups(rng, opts.duplicate_groups);

    (0..opts.count)
        .map(|index| {
            let in_window = index < opts.duplicate_window && !groups.is_empty();
            let seed = if in_window {
                // Stamp a member of a random cluster: shared identity,
                // jittered coordinates.
                let group = &groups[rng.gen_range(0..groups.len())];
                IssueSeed {
                    id: group.id.clone(),
                    category: group.category,
                    description: group.description.clone(),
                    street: group.street,
                    priority: group.priority,
                    latitude: group.base_lat + rng.gen_range(-DUPLICATE_JITTER..=DUPLICATE_JITTER),
                    longitude: group.base_lon + rng.gen_range(-DUPLICATE_JITTER..=DUPLICATE_JITTER),
                }
            } else {
                independent_seed(rng)
            };
            finish_issue(rng, seed, users, now)
        })
        .collect()
}

/// Identity half of an issue, before reporter/timeline attributes.
struct IssueSeed {
    id: String,
    category: IssueCategory,
    description: String,
    street: &'static str,
    priority: IssuePriority,
    latitude: f64,
    longitude: f64,
}

fn build_duplicate_groups(rng: &mut impl Rng, count: usize) -> Vec<DuplicateGroup> {
    (0..count)
        .map(|_| {
            let category = random_category(rng);
            let street = random_street(rng);
            DuplicateGroup {
                id: synth_issue_id(rng),
                category,
                description: random_description(rng, category, street),
                street,
                priority: weighted_choice(rng, &PRIORITY_WEIGHTS),
                base_lat: BASE_LAT + rng.gen_range(0.0..COORD_SPAN),
                base_lon: BASE_LON + rng.gen_range(0.0..COORD_SPAN),
            }
        })
        .collect()
}

fn independent_seed(rng: &mut impl Rng) -> IssueSeed {
    let category = random_category(rng);
    let street = random_street(rng);
    IssueSeed {
        id: synth_issue_id(rng),
        category,
        description: random_description(rng, category, street),
        street,
        priority: weighted_choice(rng, &PRIORITY_WEIGHTS),
        latitude: BASE_LAT + rng.gen_range(0.0..COORD_SPAN),
        longitude: BASE_LON + rng.gen_range(0.0..COORD_SPAN),
    }
}

/// Attach reporter, timeline, and follow-up records to a seed.
fn finish_issue(
    rng: &mut impl Rng,
    seed: IssueSeed,
    users: &[UserRecord],
    now: DateTime<Utc>,
) -> Issue {
    let user = &users[rng.gen_range(0..users.len())];

    let created_at = now - Duration::days(rng.gen_range(0..=60));
    let status = weighted_choice(rng, &STATUS_WEIGHTS);
    // How long an issue sits before its last touch depends on where it
    // is in the lifecycle.
    let update_offset_days = match status {
        IssueStatus::Pending => rng.gen_range(0..=2),
        IssueStatus::InProgress => rng.gen_range(1..=7),
        IssueStatus::Resolved => rng.gen_range(1..=15),
    };
    let updated_at = created_at + Duration::days(update_offset_days);

    let image_path = if rng.gen_bool(0.40) {
        Some(format!("/uploads/issue_{}.jpg", rng.gen_range(1000..=9999)))
    } else {
        None
    };

    let (public_comments, status_history) = match status {
        IssueStatus::Pending => (vec![], vec![]),
        IssueStatus::InProgress | IssueStatus::Resolved => (
            vec![admin_comment(&seed.id, status, updated_at)],
            vec![admin_transition(&seed.id, status, updated_at)],
        ),
    };

    Issue {
        user_id: user.id.clone(),
        issue_type: seed.category,
        description: seed.description,
        priority: seed.priority,
        latitude: round14(seed.latitude),
        longitude: round14(seed.longitude),
        status,
        is_anonymous: rng.gen_bool(0.30),
        id: seed.id,
        created_at,
        updated_at,
        location_address: seed.street.to_string(),
        image_path,
        public_comments,
        status_history,
    }
}

fn admin_comment(issue_id: &str, status: IssueStatus, at: DateTime<Utc>) -> Comment {
    let text = match status {
        IssueStatus::Resolved => COMMENT_RESOLVED,
        _ => COMMENT_IN_PROGRESS,
    };
    Comment {
        id: format!("comment-{}", &issue_id[..8]),
        issue_id: issue_id.to_string(),
        author_type: "admin".to_string(),
        author_id: ADMIN_ID.to_string(),
        author_name: ADMIN_NAME.to_string(),
        comment: text.to_string(),
        created_at: at,
    }
}

fn admin_transition(issue_id: &str, status: IssueStatus, at: DateTime<Utc>) -> StatusHistoryEntry {
    let text = match status {
        IssueStatus::Resolved => HISTORY_RESOLVED,
        _ => HISTORY_IN_PROGRESS,
    };
    StatusHistoryEntry {
        id: format!("status-{}", &issue_id[..8]),
        issue_id: issue_id.to_string(),
        old_status: IssueStatus::Pending,
        new_status: status,
        changed_by: ADMIN_ID.to_string(),
        changed_by_name: ADMIN_NAME.to_string(),
        changed_at: at,
        comment: text.to_string(),
    }
}

// ── Random primitives ───────────────────────────────────────────────

/// Synthetic issue id: `176` + 10 digits + lowercase letter + 3 digits.
///
/// Collisions across runs are possible and accepted; the store has no
/// uniqueness guarantee on issue ids.
fn synth_issue_id(rng: &mut impl Rng) -> String {
    let number: u64 = rng.gen_range(1_400_000_000..=1_700_000_000);
    let letter = (b'a' + rng.gen_range(0..26u8)) as char;
    let suffix: u32 = rng.gen_range(100..=999);
    format!("176{number}{letter}{suffix}")
}

fn random_category(rng: &mut impl Rng) -> IssueCategory {
    IssueCategory::ALL[rng.gen_range(0..IssueCategory::ALL.len())]
}

fn random_street(rng: &mut impl Rng) -> &'static str {
    STREETS[rng.gen_range(0..STREETS.len())]
}

fn random_description(rng: &mut impl Rng, category: IssueCategory, street: &str) -> String {
    let templates = catalog::templates_for(category);
    let template = templates[rng.gen_range(0..templates.len())];
    catalog::render_description(template, street)
}

fn weighted_choice<T: Copy>(rng: &mut impl Rng, table: &[(T, f64)]) -> T {
    // Tables are fixed catalogs with positive weights, so the only
    // failure mode (invalid weights) cannot occur.
    table
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(value, _)| *value)
        .unwrap_or(table[0].0)
}

/// Match the store's 14-decimal coordinate precision.
fn round14(value: f64) -> f64 {
    (value * 1e14).round() / 1e14
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn roster(n: usize) -> Vec<UserRecord> {
        (1..=n).map(|i| UserRecord { id: format!("u{i}") }).collect()
    }

    fn batch(seed: u64, opts: &BatchOptions) -> Vec<Issue> {
        let mut rng = StdRng::seed_from_u64(seed);
        fabricate_batch(&mut rng, &roster(12), Utc::now(), opts)
    }

    #[test]
    fn produces_exactly_count_issues() {
        let issues = batch(1, &BatchOptions::default());
        assert_eq!(issues.len(), 200);
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        for issue in batch(2, &BatchOptions::default()) {
            assert!(issue.updated_at >= issue.created_at, "issue {}", issue.id);
        }
    }

    #[test]
    fn followups_present_iff_worked_on() {
        for issue in batch(3, &BatchOptions::default()) {
            let worked_on =
                matches!(issue.status, IssueStatus::InProgress | IssueStatus::Resolved);
            assert_eq!(issue.public_comments.len(), usize::from(worked_on));
            assert_eq!(issue.status_history.len(), usize::from(worked_on));

            if let Some(comment) = issue.public_comments.first() {
                assert_eq!(comment.issue_id, issue.id);
                assert_eq!(comment.created_at, issue.updated_at);
                assert_eq!(comment.author_id, "admin-1");
            }
            if let Some(entry) = issue.status_history.first() {
                assert_eq!(entry.old_status, IssueStatus::Pending);
                assert_eq!(entry.new_status, issue.status);
                assert_eq!(entry.changed_at, issue.updated_at);
            }
        }
    }

    #[test]
    fn coordinates_stay_inside_the_city_box() {
        // Duplicate members may drift up to the jitter past the box edge.
        for issue in batch(4, &BatchOptions::default()) {
            assert!(issue.latitude >= BASE_LAT - DUPLICATE_JITTER);
            assert!(issue.latitude <= BASE_LAT + COORD_SPAN + DUPLICATE_JITTER);
            assert!(issue.longitude >= BASE_LON - DUPLICATE_JITTER);
            assert!(issue.longitude <= BASE_LON + COORD_SPAN + DUPLICATE_JITTER);
        }
    }

    #[test]
    fn description_embeds_the_location_address() {
        for issue in batch(5, &BatchOptions::default()) {
            assert!(
                issue.description.contains(&issue.location_address),
                "{} not in {:?}",
                issue.location_address,
                issue.description
            );
        }
    }

    #[test]
    fn issue_ids_have_the_synthetic_shape() {
        for issue in batch(6, &BatchOptions::default()) {
            let id = &issue.id;
            assert_eq!(id.len(), 17, "{id}");
            assert!(id.starts_with("176"));
            assert!(id[..13].bytes().all(|b| b.is_ascii_digit()));
            assert!(id.as_bytes()[13].is_ascii_lowercase());
            assert!(id[14..].bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn duplicate_members_share_incident_identity() {
        let issues = batch(7, &BatchOptions::default());

        let mut by_id: HashMap<&str, Vec<&Issue>> = HashMap::new();
        for issue in &issues {
            by_id.entry(issue.id.as_str()).or_default().push(issue);
        }

        let clustered: Vec<_> = by_id.values().filter(|v| v.len() > 1).collect();
        // 40 draws over 15 groups: at least one cluster gets two members.
        assert!(!clustered.is_empty());

        for members in clustered {
            let first = members[0];
            for member in members {
                assert_eq!(member.issue_type, first.issue_type);
                assert_eq!(member.description, first.description);
                assert_eq!(member.location_address, first.location_address);
                assert_eq!(member.priority, first.priority);
                assert!((member.latitude - first.latitude).abs() <= 2.0 * DUPLICATE_JITTER);
                assert!((member.longitude - first.longitude).abs() <= 2.0 * DUPLICATE_JITTER);
            }
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let now = Utc::now();
        let opts = BatchOptions::default();
        let users = roster(5);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = fabricate_batch(&mut rng_a, &users, now, &opts);
        let b = fabricate_batch(&mut rng_b, &users, now, &opts);

        let a = serde_json::to_string(&a).unwrap();
        let b = serde_json::to_string(&b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_user_roster_attributes_everything_to_them() {
        let mut rng = StdRng::seed_from_u64(8);
        let users = vec![UserRecord { id: "u1".into() }];
        let issues = fabricate_batch(&mut rng, &users, Utc::now(), &BatchOptions::default());
        assert_eq!(issues.len(), 200);
        assert!(issues.iter().all(|i| i.user_id == "u1"));
    }

    #[test]
    fn zero_duplicate_groups_disables_the_window() {
        let issues = batch(
            9,
            &BatchOptions {
                count: 60,
                duplicate_groups: 0,
                duplicate_window: 40,
            },
        );
        assert_eq!(issues.len(), 60);
        // No shared incident: collisions would need two identical ids
        // out of a trillions-wide id space.
        let mut ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 60);
    }

    #[test]
    fn status_and_priority_distributions_hold_at_scale() {
        let issues = batch(
            10,
            &BatchOptions {
                count: 10_000,
                duplicate_groups: 0,
                duplicate_window: 0,
            },
        );
        let total = issues.len() as f64;

        let share = |pred: &dyn Fn(&Issue) -> bool| {
            issues.iter().filter(|i| pred(i)).count() as f64 / total
        };

        assert!((share(&|i| i.status == IssueStatus::Pending) - 0.35).abs() < 0.05);
        assert!((share(&|i| i.status == IssueStatus::InProgress) - 0.30).abs() < 0.05);
        assert!((share(&|i| i.status == IssueStatus::Resolved) - 0.35).abs() < 0.05);

        assert!((share(&|i| i.priority == IssuePriority::Low) - 0.40).abs() < 0.05);
        assert!((share(&|i| i.priority == IssuePriority::Medium) - 0.40).abs() < 0.05);
        assert!((share(&|i| i.priority == IssuePriority::High) - 0.20).abs() < 0.05);

        assert!((share(&|i| i.image_path.is_some()) - 0.40).abs() < 0.05);
        assert!((share(&|i| i.is_anonymous) - 0.30).abs() < 0.05);
    }
}
