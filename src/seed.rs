//! Records shown on a fresh install, before anything has been posted.

use crate::models::{CommunityEvent, ForumPost, ForumReply, LocationType};

const HOUR_MS: i64 = 3_600_000;

pub fn seed_posts(now_ms: i64) -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: "1".to_string(),
            author_name: "Emma R.".to_string(),
            author_email: "emma@example.com".to_string(),
            content: "Does anyone in Hamilton know a good stroller-friendly trail near Gage Park?"
                .to_string(),
            timestamp: now_ms - HOUR_MS,
            location: "Hamilton, Ontario".to_string(),
            replies: vec![ForumReply {
                id: "r1".to_string(),
                author_name: "Jessica M.".to_string(),
                content: "The outer loop is paved and very smooth!".to_string(),
                timestamp: now_ms - HOUR_MS / 2,
            }],
        },
        ForumPost {
            id: "2".to_string(),
            author_name: "Sarah L.".to_string(),
            author_email: "sarah@example.com".to_string(),
            content: "Just moved to the Westdale area! Would love to connect with other new moms."
                .to_string(),
            timestamp: now_ms - 2 * HOUR_MS,
            location: "Hamilton, Ontario".to_string(),
            replies: Vec::new(),
        },
    ]
}

pub fn seed_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: "e1".to_string(),
            organizer_name: "Sarah L.".to_string(),
            location_name: "Gage Park".to_string(),
            location_type: LocationType::Park,
            date: "2024-05-15".to_string(),
            time: "10:00 AM".to_string(),
            description: "Morning stroller walk near the fountain!".to_string(),
            attendees: vec!["sarah@example.com".to_string()],
        },
        CommunityEvent {
            id: "e2".to_string(),
            organizer_name: "Jessica M.".to_string(),
            location_name: "Mulberry Coffeehouse".to_string(),
            location_type: LocationType::CoffeeShop,
            date: "2024-05-18".to_string(),
            time: "02:00 PM".to_string(),
            description: "Coffee and chat for postpartum support.".to_string(),
            attendees: vec!["jessica@example.com".to_string()],
        },
    ]
}
