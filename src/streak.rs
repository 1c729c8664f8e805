use crate::models::DailyCheckIn;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

const MILESTONE_DAYS: u32 = 7;

pub fn current_streak(history: &[DailyCheckIn]) -> u32 {
    streak_at(history, Local::now())
}

/// Counts consecutive calendar days with at least one check-in, walking back
/// from `now`. Days are taken in `now`'s time zone.
pub fn streak_at<Tz: TimeZone>(history: &[DailyCheckIn], now: DateTime<Tz>) -> u32 {
    let zone = now.timezone();
    let days = history
        .iter()
        .map(|entry| entry.date.with_timezone(&zone).date_naive())
        .collect::<Vec<_>>();
    streak_from_days(days, now.date_naive())
}

pub fn streak_from_days(mut days: Vec<NaiveDate>, today: NaiveDate) -> u32 {
    days.sort_unstable_by(|a, b| b.cmp(a));
    // Several check-ins on one day count as that day once.
    days.dedup();

    let mut streak = 0u32;
    let mut last_counted = today;
    for day in days {
        if (last_counted - day).num_days() <= 1 {
            streak = streak.saturating_add(1);
            last_counted = day;
        } else {
            break;
        }
    }
    streak
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub days_to_next: Option<u32>,
    pub progress_percent: f64,
}

pub fn milestone(streak: u32) -> Milestone {
    let into_week = streak % MILESTONE_DAYS;
    Milestone {
        days_to_next: (streak > 0).then(|| MILESTONE_DAYS - into_week),
        progress_percent: (f64::from(into_week) * 14.2).min(100.0),
    }
}
