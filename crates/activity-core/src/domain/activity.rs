// ============================================================================
// Activity Core - Activity Entity
// File: crates/activity-core/src/domain/activity.rs
// Description: Extracurricular activity with its participant list
// ============================================================================

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use validator::Validate;

use crate::error::DomainError;

/// Activity entity
///
/// `participants` keeps enrollment order and never holds the same email twice.
/// `max_participants` is informational: enrollment does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Activity {
    #[serde(skip)]
    #[validate(length(min = 1, message = "Activity name must not be empty"))]
    pub name: String,

    pub description: String,
    pub schedule: String,

    #[validate(range(min = 1, message = "Max participants must be at least 1"))]
    pub max_participants: u32,

    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let mut activity = Self {
            name: name.into().trim().to_string(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        };
        activity.validate()?;

        for email in participants {
            if !activity.is_enrolled(&email) {
                activity.participants.push(email);
            }
        }
        Ok(activity)
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn enroll(&mut self, email: &str) -> Result<(), DomainError> {
        if self.is_enrolled(email) {
            return Err(DomainError::AlreadyEnrolled);
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email`, leaving the order of everyone else untouched.
    pub fn unenroll(&mut self, email: &str) -> Result<(), DomainError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DomainError::NotEnrolled)?;
        self.participants.remove(position);
        Ok(())
    }
}

/// Point-in-time copy of every activity, in registry order.
///
/// Serializes as a JSON object keyed by activity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing {
    entries: Vec<Activity>,
}

impl ActivityListing {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.name.as_str())
    }
}

impl FromIterator<Activity> for ActivityListing {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for activity in &self.entries {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_create_activity_rejects_zero_capacity() {
        let result = Activity::new("Empty", "d", "s", 0, vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_activity_rejects_blank_name() {
        let result = Activity::new("   ", "d", "s", 5, vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_participants_deduplicated() {
        let activity = Activity::new(
            "Art Club",
            "d",
            "s",
            5,
            vec!["a@x".to_string(), "b@x".to_string(), "a@x".to_string()],
        )
        .unwrap();
        assert_eq!(activity.participants, vec!["a@x", "b@x"]);
    }

    #[test]
    fn test_enroll_then_unenroll_keeps_order() {
        let mut activity = chess();
        let before = activity.participants.clone();

        activity.enroll("new@mergington.edu").unwrap();
        assert_eq!(activity.participants.last().unwrap(), "new@mergington.edu");

        activity.unenroll("new@mergington.edu").unwrap();
        assert_eq!(activity.participants, before);
    }

    #[test]
    fn test_unenroll_middle_preserves_neighbours() {
        let mut activity = chess();
        activity.enroll("third@mergington.edu").unwrap();
        activity.unenroll("daniel@mergington.edu").unwrap();
        assert_eq!(
            activity.participants,
            vec!["michael@mergington.edu", "third@mergington.edu"]
        );
    }

    #[test]
    fn test_duplicate_and_missing() {
        let mut activity = chess();
        assert_eq!(
            activity.enroll("michael@mergington.edu"),
            Err(DomainError::AlreadyEnrolled)
        );
        assert_eq!(
            activity.unenroll("nobody@mergington.edu"),
            Err(DomainError::NotEnrolled)
        );
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn test_listing_serializes_as_object() {
        let listing: ActivityListing = vec![chess()].into_iter().collect();
        let json = serde_json::to_value(&listing).unwrap();

        let entry = &json["Chess Club"];
        assert_eq!(entry["max_participants"], 12);
        assert_eq!(entry["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(entry["participants"][0], "michael@mergington.edu");
        assert!(entry.get("name").is_none());
    }
}
