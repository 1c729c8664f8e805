use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BirthType {
    #[default]
    Vaginal,
    #[serde(rename = "C-Section")]
    CSection,
    #[serde(rename = "Vaginal with Intervention")]
    VaginalWithIntervention,
    Other,
}

impl BirthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BirthType::Vaginal => "Vaginal",
            BirthType::CSection => "C-Section",
            BirthType::VaginalWithIntervention => "Vaginal with Intervention",
            BirthType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub kids: i32,
    pub kids_ages: String,
    pub birth_type: BirthType,
    pub medical_notes: String,
    pub diagnoses: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// One day's symptom and mood ratings. Every rating is on a 1-5 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckIn {
    pub date: DateTime<Utc>,
    pub happiness: u8,
    pub pain: u8,
    pub nausea: u8,
    pub swelling: u8,
    pub fatigue: u8,
    pub milk_supply: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumReply {
    pub id: String,
    pub author_name: String,
    pub content: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub timestamp: i64,
    pub location: String,
    #[serde(default)]
    pub replies: Vec<ForumReply>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    Park,
    #[serde(rename = "Coffee Shop")]
    CoffeeShop,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEvent {
    pub id: String,
    pub organizer_name: String,
    pub location_name: String,
    pub location_type: LocationType,
    pub date: String,
    pub time: String,
    pub description: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl CommunityEvent {
    /// Adds `attendee` unless already present. Returns whether the list changed.
    pub fn join(&mut self, attendee: &str) -> bool {
        if self.attendees.iter().any(|existing| existing == attendee) {
            return false;
        }
        self.attendees.push(attendee.to_string());
        true
    }
}

/// Everything the application persists, held in memory between writes.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub profile: Option<UserProfile>,
    pub check_ins: Vec<DailyCheckIn>,
    pub posts: Vec<ForumPost>,
    pub events: Vec<CommunityEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub kids: Option<i32>,
    #[serde(default)]
    pub kids_ages: String,
    #[serde(default)]
    pub health_issues: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub happiness: i64,
    pub pain: i64,
    pub nausea: i64,
    pub swelling: i64,
    pub fatigue: i64,
    pub milk_supply: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CheckInRequest {
    /// Builds the stored entry, or names the first rating outside the 1-5 scale.
    pub fn into_check_in(self, date: DateTime<Utc>) -> Result<DailyCheckIn, &'static str> {
        let rating = |name: &'static str, value: i64| {
            u8::try_from(value)
                .ok()
                .filter(|value| (RATING_MIN..=RATING_MAX).contains(value))
                .ok_or(name)
        };
        Ok(DailyCheckIn {
            date,
            happiness: rating("happiness", self.happiness)?,
            pain: rating("pain", self.pain)?,
            nausea: rating("nausea", self.nausea)?,
            swelling: rating("swelling", self.swelling)?,
            fatigue: rating("fatigue", self.fatigue)?,
            milk_supply: rating("milkSupply", self.milk_supply)?,
            notes: self.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub check_in: DailyCheckIn,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneResponse {
    pub days_to_next: Option<u32>,
    pub progress_percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub name: String,
    pub streak: u32,
    pub milestone: MilestoneResponse,
    pub last_check_in: Option<DailyCheckIn>,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTaskRequest {
    pub task: String,
}
