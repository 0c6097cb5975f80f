// Application state management
// Contains the activity roster and per-activity membership rules

use serde::Serialize;
use std::collections::BTreeMap;

/// Name of an activity, unique within the roster
pub type ActivityName = String;

/// Activity structure
/// Represents one extracurricular activity and its enrolled participants
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Activity {
    /// Free-text description of the activity
    pub description: String,
    /// Free-text meeting schedule
    pub schedule: String,
    /// Advertised capacity; informational only, never enforced
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a new activity with an initial participant list
    pub fn new(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Check whether an email is on the participant list
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append an email to the participant list
    /// Returns false (and leaves the list untouched) if the email is already registered
    pub fn signup(&mut self, email: &str) -> bool {
        if self.is_registered(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// Remove an email from the participant list
    /// Returns false (and leaves the list untouched) if the email is not registered
    pub fn unregister(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Main application state
/// Holds the activity roster; names are fixed after startup, only participant
/// lists change at runtime
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Roster of all activities (name -> Activity), name-sorted
    pub activities: BTreeMap<ActivityName, Activity>,
}

impl AppState {
    /// Create a new, empty application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the application state pre-populated with the school's activity roster
    pub fn seeded() -> Self {
        let roster = [
            (
                "Chess Club",
                Activity::new(
                    "Learn strategies and compete in chess tournaments",
                    "Fridays, 3:30 PM - 5:00 PM",
                    12,
                    &["michael@mergington.edu", "daniel@mergington.edu"],
                ),
            ),
            (
                "Programming Class",
                Activity::new(
                    "Learn programming fundamentals and build software projects",
                    "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                    20,
                    &["emma@mergington.edu", "sophia@mergington.edu"],
                ),
            ),
            (
                "Gym Class",
                Activity::new(
                    "Physical education and sports activities",
                    "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                    30,
                    &["john@mergington.edu", "olivia@mergington.edu"],
                ),
            ),
            (
                "Soccer Team",
                Activity::new(
                    "Join the school soccer team and compete in matches",
                    "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                    22,
                    &["liam@mergington.edu", "noah@mergington.edu"],
                ),
            ),
            (
                "Basketball Team",
                Activity::new(
                    "Practice and play basketball with the school team",
                    "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                    15,
                    &["ava@mergington.edu", "mia@mergington.edu"],
                ),
            ),
            (
                "Art Club",
                Activity::new(
                    "Explore your creativity through painting and drawing",
                    "Thursdays, 3:30 PM - 5:00 PM",
                    15,
                    &["amelia@mergington.edu", "harper@mergington.edu"],
                ),
            ),
            (
                "Drama Club",
                Activity::new(
                    "Act, direct, and produce plays and performances",
                    "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                    20,
                    &["ella@mergington.edu", "scarlett@mergington.edu"],
                ),
            ),
            (
                "Math Club",
                Activity::new(
                    "Solve challenging problems and prepare for math competitions",
                    "Tuesdays, 3:30 PM - 4:30 PM",
                    10,
                    &["james@mergington.edu", "benjamin@mergington.edu"],
                ),
            ),
            (
                "Debate Team",
                Activity::new(
                    "Develop public speaking and argumentation skills",
                    "Fridays, 4:00 PM - 5:30 PM",
                    12,
                    &["charlotte@mergington.edu", "henry@mergington.edu"],
                ),
            ),
        ];

        let mut state = Self::new();
        for (name, activity) in roster {
            state.add_activity(name.to_string(), activity);
        }
        state
    }

    /// Add an activity to the roster
    /// Returns true if the activity was added (false if the name already exists)
    pub fn add_activity(&mut self, name: ActivityName, activity: Activity) -> bool {
        if self.activities.contains_key(&name) {
            false
        } else {
            self.activities.insert(name, activity);
            true
        }
    }

    /// Get the number of activities in the roster
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        )
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert_eq!(state.activity_count(), 0);
    }

    #[test]
    fn test_seeded_roster() {
        let state = AppState::seeded();
        assert_eq!(state.activity_count(), 9);

        let chess = state.activities.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert!(chess.is_registered("michael@mergington.edu"));
        assert!(chess.is_registered("daniel@mergington.edu"));
        assert!(state.activities.contains_key("Programming Class"));
        assert!(state.activities.contains_key("Gym Class"));
    }

    #[test]
    fn test_add_activity() {
        let mut state = AppState::new();

        assert!(state.add_activity("Chess Club".to_string(), chess_club()));
        assert_eq!(state.activity_count(), 1);
        assert!(!state.add_activity("Chess Club".to_string(), chess_club())); // Duplicate name should fail
        assert_eq!(state.activity_count(), 1);
    }

    #[test]
    fn test_signup_appends_in_order() {
        let mut activity = chess_club();

        assert!(activity.signup("first@mergington.edu"));
        assert!(activity.signup("second@mergington.edu"));

        assert_eq!(
            activity.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "first@mergington.edu",
                "second@mergington.edu",
            ]
        );
    }

    #[test]
    fn test_signup_rejects_duplicate() {
        let mut activity = chess_club();

        assert!(activity.signup("new@mergington.edu"));
        assert!(!activity.signup("new@mergington.edu"));

        let occurrences = activity
            .participants
            .iter()
            .filter(|p| *p == "new@mergington.edu")
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_unregister() {
        let mut activity = chess_club();

        assert!(activity.unregister("michael@mergington.edu"));
        assert!(!activity.is_registered("michael@mergington.edu"));
        assert_eq!(activity.participants, vec!["daniel@mergington.edu"]);

        // Unregistering an absent email fails and changes nothing
        assert!(!activity.unregister("michael@mergington.edu"));
        assert_eq!(activity.participants, vec!["daniel@mergington.edu"]);
    }

    #[test]
    fn test_email_can_join_multiple_activities() {
        let mut state = AppState::seeded();
        let email = "multi@mergington.edu";

        assert!(state.activities.get_mut("Chess Club").unwrap().signup(email));
        assert!(state.activities.get_mut("Art Club").unwrap().signup(email));

        assert!(state.activities.get("Chess Club").unwrap().is_registered(email));
        assert!(state.activities.get("Art Club").unwrap().is_registered(email));
    }

    #[test]
    fn test_activity_serializes_contract_fields() {
        let value = serde_json::to_value(chess_club()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert!(object.contains_key("description"));
        assert!(object.contains_key("schedule"));
        assert!(object.contains_key("max_participants"));
        assert!(object.contains_key("participants"));
        assert_eq!(object["max_participants"], 12);
    }
}
