//! Mock data a freshly seeded store starts with: two children with their
//! credentials and linked apps, and a handful of ledger entries.

use chrono::{DateTime, NaiveDate, Utc};
use shared::{
    AppCategory, AuthFactor, ChildStatus, DashboardLayout, Gender, LinkedAppStatus, LogStatus,
    ThemeColor, ThemePattern,
};

use crate::domain::models::activity_log::ActivityLog;
use crate::domain::models::auth_policy::AuthPolicy;
use crate::domain::models::child::Child;
use crate::domain::models::credential::Credential;
use crate::domain::models::linked_app::LinkedApp;
use crate::domain::models::presentation::PresentationConfig;
use crate::domain::models::user::MOCK_PARENT_CHILD_IDS as SEED_CHILD_IDS;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn seed_credential(token: &str, required_auth: Vec<AuthFactor>, now: DateTime<Utc>) -> Credential {
    Credential {
        token: token.to_string(),
        generated_at: now,
        expires_at: now + Credential::lifetime(),
        required_auth,
    }
}

fn linked_app(
    id: &str,
    name: &str,
    category: AppCategory,
    status: LinkedAppStatus,
    last_access: &str,
    permissions: &[&str],
) -> LinkedApp {
    LinkedApp {
        id: id.to_string(),
        name: name.to_string(),
        category,
        status,
        last_access: last_access.to_string(),
        permissions: strings(permissions),
    }
}

/// Seed children, with credentials stamped at `now`
pub fn seed_children(now: DateTime<Utc>) -> Vec<Child> {
    vec![
        Child {
            id: SEED_CHILD_IDS[0].to_string(),
            name: "Sara Ahmed".to_string(),
            dob: date(2015, 5, 12),
            gender: Gender::Female,
            national_id: "1092837465".to_string(),
            photo_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=zaher&backgroundColor=b6e3f4"
                .to_string(),
            status: ChildStatus::Active,
            last_verification: "2 hours ago".to_string(),
            credential: seed_credential(
                "did:nowa:BIO-PAR-LOC:sara123",
                vec![
                    AuthFactor::Biometric,
                    AuthFactor::ParentApproval,
                    AuthFactor::LocationCheck,
                ],
                now,
            ),
            auth_policy: AuthPolicy {
                biometric: true,
                pin: false,
                parent_approval: true,
                location_check: true,
            },
            presentation: PresentationConfig {
                color: ThemeColor::Rose,
                pattern: ThemePattern::Dots,
                layout: DashboardLayout::Grid,
            },
            linked_apps: vec![
                linked_app(
                    "app1",
                    "Madrasati Platform",
                    AppCategory::Education,
                    LinkedAppStatus::Active,
                    "2 hours ago",
                    &["full"],
                ),
                linked_app(
                    "app2",
                    "Minecraft Education",
                    AppCategory::Game,
                    LinkedAppStatus::Active,
                    "yesterday",
                    &["time-limited"],
                ),
            ],
        },
        Child {
            id: SEED_CHILD_IDS[1].to_string(),
            name: "Omar Ahmed".to_string(),
            dob: date(2018, 9, 23),
            gender: Gender::Male,
            national_id: "1029384756".to_string(),
            photo_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=d&backgroundColor=c0aede"
                .to_string(),
            status: ChildStatus::Active,
            last_verification: "yesterday".to_string(),
            credential: seed_credential(
                "did:nowa:BIO-PIN:omar456",
                vec![AuthFactor::Biometric, AuthFactor::Pin],
                now,
            ),
            auth_policy: AuthPolicy {
                biometric: true,
                pin: true,
                parent_approval: false,
                location_check: false,
            },
            presentation: PresentationConfig {
                color: ThemeColor::Blue,
                pattern: ThemePattern::Abstract,
                layout: DashboardLayout::List,
            },
            linked_apps: vec![linked_app(
                "app3",
                "Roblox",
                AppCategory::Game,
                LinkedAppStatus::Blocked,
                "3 days ago",
                &["read-only"],
            )],
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn log(
    id: &str,
    child_id: &str,
    action: &str,
    location: &str,
    timestamp: &str,
    status: LogStatus,
    hash: &str,
    block_number: u64,
    application: Option<&str>,
    criteria_met: Option<&[&str]>,
) -> ActivityLog {
    ActivityLog {
        id: id.to_string(),
        child_id: child_id.to_string(),
        action: action.to_string(),
        location: location.to_string(),
        timestamp: timestamp.to_string(),
        status,
        hash: hash.to_string(),
        block_number,
        application: application.map(str::to_string),
        criteria_met: criteria_met.map(strings),
    }
}

pub fn seed_logs() -> Vec<ActivityLog> {
    vec![
        log(
            "l1", "c1", "School entry", "Al-Rowad School", "07:30 AM",
            LogStatus::Success, "0x8f...2a1", 10245,
            Some("GateSystem"), Some(&["Location", "Time"]),
        ),
        log(
            "l2", "c1", "Canteen purchase", "School canteen", "10:15 AM",
            LogStatus::Success, "0x3c...9b2", 10248,
            Some("CanteenPOS"), Some(&["Bio"]),
        ),
        log(
            "l3", "c2", "Clinic visit", "Dallah Hospital", "04:00 PM",
            LogStatus::Success, "0x7d...1f4", 10255,
            Some("HealthLink"), Some(&["ParentApproval"]),
        ),
        log(
            "l4", "c1", "Unauthorized entry attempt", "Club gate", "06:00 PM",
            LogStatus::Failed, "0xe1...5a9", 10260,
            None, None,
        ),
        log(
            "l5", "c2", "School exit", "Al-Rowad School", "01:30 PM",
            LogStatus::Success, "0xa2...8c3", 10262,
            Some("GateSystem"), Some(&["Location"]),
        ),
    ]
}
