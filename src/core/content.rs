//! Fixed sample content shown by the dashboard panels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskItem {
    pub text: &'static str,
    pub done: bool,
    pub due: Option<&'static str>,
}

impl TaskItem {
    const fn open(text: &'static str) -> Self {
        Self { text, done: false, due: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Percent(u8),
    Overdue,
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completion::Percent(p) => write!(f, "{p}%"),
            Completion::Overdue => f.write_str("Overdue"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub completion: Completion,
}

/// Overall onboarding progress in percent.
pub const PROGRESS_PERCENT: f32 = 60.0;

pub static CHECKLIST_TASKS: [TaskItem; 3] = [
    TaskItem::open("Complete Profile"),
    TaskItem::open("Upload Documents"),
    TaskItem::open("Review Policies"),
];

pub static TODAYS_TASKS: [TaskItem; 3] = [
    TaskItem::open("Complete Benefits Enrollment"),
    TaskItem { text: "Review Employee Handbook", done: true, due: Some("Jul 26") },
    TaskItem { text: "Set Up Workstation", done: false, due: Some("Jul 26") },
];

pub static TEAM: [TeamMember; 3] = [
    TeamMember { name: "Jane Cooper", role: "Marketing Coordinator", completion: Completion::Percent(75) },
    TeamMember { name: "Ronald Richards", role: "Sales Associate", completion: Completion::Overdue },
    TeamMember { name: "Cody Fisher", role: "Product Designer", completion: Completion::Percent(60) },
];

pub static TEAM_ACTIONS: [&str; 3] = [
    "Assign Role-Specific Task",
    "Send Reminder",
    "Collect Feedback",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mentor {
    pub name: &'static str,
    pub focus: &'static str,
    pub next_session: &'static str,
}

pub static MENTORS: [Mentor; 2] = [
    Mentor { name: "Esther Howard", focus: "Company culture & tools", next_session: "Jul 28" },
    Mentor { name: "Wade Warren", focus: "Role-specific coaching", next_session: "Aug 2" },
];

pub static SOCIAL_EVENTS: [&str; 3] = [
    "Welcome lunch with your team",
    "Friday coffee chat",
    "New hire meetup",
];
