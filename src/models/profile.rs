use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-user profile. The role flags are independent: any combination may be
/// set at once and nothing checks that exactly one is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub profile_pic: Option<String>,
    pub about: Option<String>,
    pub phone: Option<String>,
    pub is_hr: bool,
    pub is_teamlead: bool,
    pub is_manager: bool,
    pub is_main_hr: bool,
    pub is_team_member: bool,
    pub is_onboarding_hr: bool,
    pub released_job_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Hr,
    TeamLead,
    Manager,
    MainHr,
    TeamMember,
    OnboardingHr,
}

impl Role {
    /// Backing boolean column on `profiles`.
    pub fn column(self) -> &'static str {
        match self {
            Role::Hr => "is_hr",
            Role::TeamLead => "is_teamlead",
            Role::Manager => "is_manager",
            Role::MainHr => "is_main_hr",
            Role::TeamMember => "is_team_member",
            Role::OnboardingHr => "is_onboarding_hr",
        }
    }
}

impl Profile {
    pub fn roles(&self) -> Vec<Role> {
        [
            (self.is_hr, Role::Hr),
            (self.is_teamlead, Role::TeamLead),
            (self.is_manager, Role::Manager),
            (self.is_main_hr, Role::MainHr),
            (self.is_team_member, Role::TeamMember),
            (self.is_onboarding_hr, Role::OnboardingHr),
        ]
        .into_iter()
        .filter_map(|(set, role)| set.then_some(role))
        .collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    /// Profiles are listed under their owner's username.
    pub fn label(username: &str) -> String {
        username.to_string()
    }
}
