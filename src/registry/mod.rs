use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Participant not found in this activity")]
    ParticipantNotFound,
}

/// In-memory mapping from activity name to its record. Names are fixed at
/// startup; only the rosters change.
pub struct ActivityRegistry {
    activities: IndexMap<String, Activity>,
}

impl ActivityRegistry {
    /// Registry pre-filled with the school's activity catalog.
    pub fn with_seed() -> Self {
        let mut activities = IndexMap::new();
        for (name, description, schedule, max_participants, participants) in SEED {
            activities.insert(
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            );
        }
        Self { activities }
    }

    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Adds `email` to the roster. Rejects unknown activities and duplicate
    /// enrollments; the roster is untouched on rejection.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from the roster. A missing participant is NotFound,
    /// not a conflict; that matches what the sign-up page expects.
    pub fn remove(&mut self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let index = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::ParticipantNotFound)?;

        activity.participants.remove(index);
        Ok(format!("Removed {} from {}", email, activity_name))
    }
}

/// Handlers share the registry behind a lock so concurrent signups for the
/// same activity cannot double-enroll.
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;

pub fn shared_with_seed() -> SharedRegistry {
    Arc::new(RwLock::new(ActivityRegistry::with_seed()))
}

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Basketball Team",
        "Join the school basketball team and compete in inter-school tournaments",
        "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Practice soccer skills and participate in league matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["james@mergington.edu", "sarah@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore various art techniques including painting, drawing, and sculpture",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        &["emily@mergington.edu"],
    ),
    (
        "Drama Club",
        "Participate in theater productions and develop acting skills",
        "Thursdays, 3:30 PM - 5:30 PM",
        25,
        &["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop critical thinking and public speaking through competitive debates",
        "Tuesdays, 3:30 PM - 5:00 PM",
        16,
        &["noah@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Compete in science competitions and conduct experiments",
        "Fridays, 3:30 PM - 5:30 PM",
        18,
        &["ava@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nine_activities_in_catalog_order() {
        let registry = ActivityRegistry::with_seed();
        assert_eq!(registry.activities().len(), 9);
        let first = registry.activities().keys().next().unwrap();
        assert_eq!(first, "Basketball Team");
    }

    #[test]
    fn signup_appends_in_order() {
        let mut registry = ActivityRegistry::with_seed();
        registry.signup("Art Club", "x@mergington.edu").unwrap();
        registry.signup("Art Club", "y@mergington.edu").unwrap();

        let roster = &registry.activities()["Art Club"].participants;
        let expected: Vec<String> = ["emily@mergington.edu", "x@mergington.edu", "y@mergington.edu"]
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(roster, &expected);
    }

    #[test]
    fn duplicate_signup_is_a_conflict_and_leaves_one_entry() {
        let mut registry = ActivityRegistry::with_seed();
        registry.signup("Art Club", "x@mergington.edu").unwrap();
        let err = registry.signup("Art Club", "x@mergington.edu").unwrap_err();
        assert_eq!(err, RegistryError::AlreadySignedUp);

        let roster = &registry.activities()["Art Club"].participants;
        assert_eq!(roster.iter().filter(|p| *p == "x@mergington.edu").count(), 1);
    }

    #[test]
    fn unknown_activity_is_not_found_for_both_operations() {
        let mut registry = ActivityRegistry::with_seed();
        assert_eq!(
            registry.signup("Knitting Circle", "x@mergington.edu"),
            Err(RegistryError::ActivityNotFound)
        );
        assert_eq!(
            registry.remove("Knitting Circle", "x@mergington.edu"),
            Err(RegistryError::ActivityNotFound)
        );
    }

    #[test]
    fn activity_names_are_case_sensitive() {
        let mut registry = ActivityRegistry::with_seed();
        assert_eq!(
            registry.signup("basketball team", "x@mergington.edu"),
            Err(RegistryError::ActivityNotFound)
        );
    }

    #[test]
    fn remove_of_unenrolled_email_leaves_roster_unchanged() {
        let mut registry = ActivityRegistry::with_seed();
        let before = registry.activities()["Basketball Team"].participants.clone();

        let err = registry
            .remove("Basketball Team", "notregistered@mergington.edu")
            .unwrap_err();
        assert_eq!(err, RegistryError::ParticipantNotFound);
        assert_eq!(registry.activities()["Basketball Team"].participants, before);
    }

    #[test]
    fn remove_then_signup_restores_membership() {
        let mut registry = ActivityRegistry::with_seed();
        registry.remove("Basketball Team", "alex@mergington.edu").unwrap();
        assert!(!registry.activities()["Basketball Team"]
            .participants
            .contains(&"alex@mergington.edu".to_string()));

        registry.signup("Basketball Team", "alex@mergington.edu").unwrap();
        assert!(registry.activities()["Basketball Team"]
            .participants
            .contains(&"alex@mergington.edu".to_string()));
    }

    #[test]
    fn enrollment_in_one_activity_does_not_touch_another() {
        let mut registry = ActivityRegistry::with_seed();
        let chess_before = registry.activities()["Chess Club"].participants.clone();

        registry.signup("Art Club", "multi@mergington.edu").unwrap();
        assert_eq!(registry.activities()["Chess Club"].participants, chess_before);

        registry.signup("Chess Club", "multi@mergington.edu").unwrap();
        assert!(registry.activities()["Art Club"]
            .participants
            .contains(&"multi@mergington.edu".to_string()));
    }

    #[test]
    fn confirmation_messages_reference_email_and_activity() {
        let mut registry = ActivityRegistry::with_seed();
        let msg = registry.signup("Drama Club", "new@mergington.edu").unwrap();
        assert!(msg.contains("new@mergington.edu"));
        assert!(msg.contains("Drama Club"));

        let msg = registry.remove("Drama Club", "new@mergington.edu").unwrap();
        assert!(msg.contains("new@mergington.edu"));
    }
}
