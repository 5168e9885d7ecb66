use crate::model::{Activity, ActivityCatalog};

pub const NO_PARTICIPANTS: &str = "No participants yet — be the first!";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const LOADING: &str = "Loading activities...";

/// Capacity minus roster size; an over-full roster counts as zero.
pub fn spots_left(activity: &Activity) -> u32 {
    let taken = u32::try_from(activity.participants.len()).unwrap_or(u32::MAX);
    activity.max_participants.saturating_sub(taken)
}

pub fn availability_label(spots: u32) -> String {
    if spots == 0 {
        "Full".to_string()
    } else {
        format!("{spots} spots left")
    }
}

pub fn avatar_letter(email: &str) -> String {
    email
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub avatar: String,
    pub email: String,
}

/// Everything one activity card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub availability: String,
    pub is_full: bool,
    pub roster_count: String,
    pub participants: Vec<ParticipantRow>,
}

impl CardView {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        let spots = spots_left(activity);
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            availability: availability_label(spots),
            is_full: spots == 0,
            roster_count: format!(
                "{} / {}",
                activity.participants.len(),
                activity.max_participants
            ),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    avatar: avatar_letter(email),
                    email: email.clone(),
                })
                .collect(),
        }
    }
}

pub fn cards(catalog: &ActivityCatalog) -> Vec<CardView> {
    catalog
        .iter()
        .map(|(name, activity)| CardView::from_activity(name, activity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, roster: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies and compete in chess tournaments".into(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
            max_participants: max,
            participants: roster.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn full_when_roster_reaches_capacity() {
        let card = CardView::from_activity("A", &activity(2, &["a@x.com", "b@x.com"]));
        assert_eq!(card.availability, "Full");
        assert!(card.is_full);
        assert_eq!(card.roster_count, "2 / 2");
    }

    #[test]
    fn spots_left_label() {
        let card = CardView::from_activity("A", &activity(3, &["a@x.com"]));
        assert_eq!(card.availability, "2 spots left");
        assert!(!card.is_full);
    }

    #[test]
    fn over_capacity_is_full_not_negative() {
        let a = activity(1, &["a@x.com", "b@x.com"]);
        assert_eq!(spots_left(&a), 0);
        assert_eq!(CardView::from_activity("A", &a).availability, "Full");
    }

    #[test]
    fn zero_capacity_is_full() {
        assert_eq!(CardView::from_activity("A", &activity(0, &[])).availability, "Full");
    }

    #[test]
    fn avatar_is_uppercased_first_letter() {
        assert_eq!(avatar_letter("michael@mergington.edu"), "M");
        assert_eq!(avatar_letter("9lives@x.com"), "9");
        assert_eq!(avatar_letter("émile@x.com"), "É");
        assert_eq!(avatar_letter(""), "");
    }

    #[test]
    fn rows_follow_roster_order() {
        let card = CardView::from_activity("A", &activity(5, &["zoe@x.com", "adam@x.com"]));
        let emails: Vec<_> = card.participants.iter().map(|p| p.email.as_str()).collect();
        assert_eq!(emails, vec!["zoe@x.com", "adam@x.com"]);
        assert_eq!(card.participants[0].avatar, "Z");
    }

    #[test]
    fn cards_follow_catalog_order() {
        let catalog: ActivityCatalog = vec![
            ("Gym Class".to_string(), activity(30, &[])),
            ("Chess Club".to_string(), activity(12, &[])),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = cards(&catalog).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Gym Class", "Chess Club"]);
    }
}
