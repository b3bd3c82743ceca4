//! Main-shell navigation and content cards.

use dashdeck_types::IconName as I;
use dashdeck_types::{OverlayId, SectionId};

use super::{Tab, overlay_icon};

pub(super) fn tabs(section: SectionId) -> &'static [Tab] {
    match section {
        SectionId::Dashboard => DASHBOARD,
        SectionId::School => SCHOOL,
        SectionId::Crm => CRM,
        SectionId::ToolPlatform => TOOL_PLATFORM,
        SectionId::Communication => COMMUNICATION,
        SectionId::ConciergeAi => &[],
        // Built from the overlay list, see `overlay_setting_tab`.
        SectionId::OverlaySetting => &[],
        SectionId::Setting => SETTING,
    }
}

/// The single `management` tab listing every overlay app in tray order.
pub(super) fn overlay_setting_tab() -> (&'static str, &'static str, Vec<(&'static str, String, I)>) {
    let items = OverlayId::all()
        .iter()
        .map(|app| {
            (
                app.as_str(),
                app.display_name().to_uppercase(),
                overlay_icon(*app),
            )
        })
        .collect();
    ("management", "Management", items)
}

const DASHBOARD: &[Tab] = &[
    ("overview", "Overview", &[]),
    ("analytics", "Analytics", &[]),
    ("market", "Market", &[]),
    ("system", "System", &[]),
];

const SCHOOL: &[Tab] = &[
    ("courses", "Courses", &[("all-courses", "ALL COURSES", I::GraduationCap)]),
    ("students", "Students", &[("enrollment", "ENROLLMENT", I::Cog6Tooth)]),
];

const CRM: &[Tab] = &[
    ("contacts", "Contacts", &[
        ("all-contacts", "ALL CONTACTS", I::Briefcase),
        ("leads", "LEADS", I::Star),
    ]),
    ("deals", "Deals", &[("pipeline", "PIPELINE", I::Calculator)]),
];

const TOOL_PLATFORM: &[Tab] = &[("tools", "Tools", &[])];

const COMMUNICATION: &[Tab] = &[
    ("email", "Email", &[
        ("inbox", "INBOX", I::InboxArrowDown),
        ("starred", "STARRED", I::Star),
        ("spam", "SPAM", I::ExclamationTriangle),
        ("scheduler", "SCHEDULER", I::CalendarDays),
        ("sent", "SENT", I::PaperAirplane),
    ]),
    ("social_media", "Social-Media", &[
        ("feed", "FEED", I::Home),
        ("messages", "MESSAGES", I::ChatBubbleLeftRight),
    ]),
    ("community", "Community", &[
        ("general", "GENERAL", I::ChatBubbleLeftRight),
        ("announcements", "ANNOUNCEMENTS", I::Bell),
    ]),
    ("templates", "Templates", &[
        ("email-templates", "EMAIL", I::InboxArrowDown),
        ("post-templates", "POSTS", I::PaperAirplane),
    ]),
    ("management", "Management", &[
        ("email_management", "Email", I::InboxArrowDown),
        ("social_media_management", "Social-Media", I::PaperAirplane),
        ("community_management", "Community", I::ChatBubbleLeftRight),
        ("templates_management", "Templates", I::Photo),
    ]),
];

const SETTING: &[Tab] = &[("general", "General", &[
    ("profile", "PROFILE", I::Briefcase),
    ("preferences", "PREFERENCES", I::Cog6Tooth),
])];

// ============================================================================
// Cards
// ============================================================================

/// `count` numbered cards: ids `{id_prefix}-{i}` from 0, titles
/// `{title_prefix} {i + 1}`.
pub(super) struct CardRun {
    pub section: SectionId,
    pub header: &'static str,
    pub subnav: &'static str,
    pub count: usize,
    pub id_prefix: &'static str,
    pub title_prefix: &'static str,
    pub icon: I,
}

pub(super) const CARD_RUNS: &[CardRun] = &[
    CardRun {
        section: SectionId::Dashboard,
        header: "overview",
        subnav: "",
        count: 18,
        id_prefix: "card-dash",
        title_prefix: "Dashboard Metric",
        icon: I::Home,
    },
    CardRun {
        section: SectionId::Dashboard,
        header: "analytics",
        subnav: "",
        count: 8,
        id_prefix: "card-analytics",
        title_prefix: "Analytics Data",
        icon: I::Calculator,
    },
    CardRun {
        section: SectionId::Dashboard,
        header: "market",
        subnav: "",
        count: 10,
        id_prefix: "card-market",
        title_prefix: "Market Info",
        icon: I::BuildingStorefront,
    },
    CardRun {
        section: SectionId::Dashboard,
        header: "system",
        subnav: "",
        count: 6,
        id_prefix: "card-system",
        title_prefix: "System Status",
        icon: I::Cog6Tooth,
    },
    CardRun {
        section: SectionId::School,
        header: "courses",
        subnav: "all-courses",
        count: 12,
        id_prefix: "card-course",
        title_prefix: "Course",
        icon: I::GraduationCap,
    },
    CardRun {
        section: SectionId::Communication,
        header: "email",
        subnav: "inbox",
        count: 24,
        id_prefix: "card-email",
        title_prefix: "Email Item",
        icon: I::InboxArrowDown,
    },
    CardRun {
        section: SectionId::Communication,
        header: "social_media",
        subnav: "feed",
        count: 15,
        id_prefix: "card-feed",
        title_prefix: "Social Post",
        icon: I::PaperAirplane,
    },
];

/// Hand-written card lists under `communication / management`.
pub(super) const MANAGEMENT_CARDS: &[(&str, &[(&str, &str, I)])] = &[
    ("email_management", &[
        ("email-management-1", "Email Settings", I::Cog6Tooth),
        ("email-management-2", "Signature Editor", I::WrenchScrewdriver),
        ("email-management-3", "Auto Responders", I::PaperAirplane),
    ]),
    ("social_media_management", &[
        ("sm-management-1", "Account Linking", I::SquaresPlus),
        ("sm-management-2", "Posting Defaults", I::Cog6Tooth),
        ("sm-management-3", "Analytics Setup", I::Calculator),
    ]),
    ("community_management", &[
        ("comm-management-1", "Moderation Rules", I::ExclamationTriangle),
        ("comm-management-2", "User Roles", I::WrenchScrewdriver),
        ("comm-management-3", "Welcome Messages", I::ChatBubbleLeftRight),
    ]),
    ("templates_management", &[
        ("temp-management-1", "Manage Templates", I::Briefcase),
        ("temp-management-2", "Create New Template", I::Plus),
        ("temp-management-3", "Template Analytics", I::Calculator),
    ]),
];
