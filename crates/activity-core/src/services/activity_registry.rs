// ============================================================================
// Activity Core - Activity Registry
// File: crates/activity-core/src/services/activity_registry.rs
// ============================================================================
//! Activity catalogue with participant enrollment
//!
//! The registry knows nothing about sessions; callers authorize first.

use dashmap::DashMap;
use tracing::{info, warn};

use crate::domain::{seed_activities, Activity, ActivityListing};
use crate::error::DomainError;

pub struct ActivityRegistry {
    activities: DashMap<String, Activity>,
    /// Listing order, fixed at construction.
    order: Vec<String>,
}

impl ActivityRegistry {
    /// Later entries replace earlier ones with the same name.
    pub fn new(activities: Vec<Activity>) -> Self {
        let map = DashMap::with_capacity(activities.len());
        let mut order = Vec::with_capacity(activities.len());

        for activity in activities {
            let name = activity.name.clone();
            if map.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }

        info!("Activity registry loaded with {} activities", order.len());
        Self {
            activities: map,
            order,
        }
    }

    pub fn seeded() -> Result<Self, DomainError> {
        let activities =
            seed_activities().map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(Self::new(activities))
    }

    /// Copy of every activity. Later mutations do not show up in it.
    pub fn list(&self) -> ActivityListing {
        self.order
            .iter()
            .filter_map(|name| self.activities.get(name).map(|entry| entry.value().clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add `email` to the activity's participants.
    ///
    /// The duplicate check and the append happen under one entry lock.
    /// Capacity is not checked.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<(), DomainError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DomainError::ActivityNotFound(activity_name.to_string()))?;

        activity.enroll(email).map_err(|e| {
            warn!("Signup rejected for {} in {}: {}", email, activity_name, e);
            e
        })?;

        info!(
            "Signed up {} for {} ({}/{})",
            email,
            activity_name,
            activity.participants.len(),
            activity.max_participants
        );
        Ok(())
    }

    pub fn unenroll(&self, activity_name: &str, email: &str) -> Result<(), DomainError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DomainError::ActivityNotFound(activity_name.to_string()))?;

        activity.unenroll(email).map_err(|e| {
            warn!("Unregister rejected for {} in {}: {}", email, activity_name, e);
            e
        })?;

        info!("Unregistered {} from {}", email, activity_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry() -> ActivityRegistry {
        ActivityRegistry::seeded().unwrap()
    }

    fn participants(registry: &ActivityRegistry, name: &str) -> Vec<String> {
        registry.get(name).unwrap().participants
    }

    #[test]
    fn test_list_keeps_seed_order() {
        let registry = registry();
        let listing = registry.list();

        assert_eq!(listing.len(), 9);
        let names: Vec<&str> = listing.names().collect();
        assert_eq!(names[0], "Chess Club");
        assert_eq!(names[1], "Programming Class");
        assert_eq!(names[8], "Debate Team");
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let registry = registry();
        let listing = registry.list();

        registry.enroll("Chess Club", "new@mergington.edu").unwrap();

        assert_eq!(listing.get("Chess Club").unwrap().participants.len(), 2);
        assert_eq!(registry.list().get("Chess Club").unwrap().participants.len(), 3);
    }

    #[test]
    fn test_enroll_appends_once() {
        let registry = registry();
        registry.enroll("Chess Club", "new@mergington.edu").unwrap();

        let chess = participants(&registry, "Chess Club");
        assert_eq!(chess.last().unwrap(), "new@mergington.edu");
        assert_eq!(chess.iter().filter(|p| *p == "new@mergington.edu").count(), 1);
    }

    #[test]
    fn test_enroll_duplicate_leaves_set_unchanged() {
        let registry = registry();
        let before = participants(&registry, "Chess Club");

        let result = registry.enroll("Chess Club", "michael@mergington.edu");
        assert_eq!(result, Err(DomainError::AlreadyEnrolled));
        assert_eq!(participants(&registry, "Chess Club"), before);
    }

    #[test]
    fn test_unenroll_missing_leaves_set_unchanged() {
        let registry = registry();
        let before = participants(&registry, "Math Club");

        let result = registry.unenroll("Math Club", "ghost@mergington.edu");
        assert_eq!(result, Err(DomainError::NotEnrolled));
        assert_eq!(participants(&registry, "Math Club"), before);
    }

    #[test]
    fn test_unknown_activity() {
        let registry = registry();
        assert_eq!(
            registry.enroll("Unknown Club", "x"),
            Err(DomainError::ActivityNotFound("Unknown Club".to_string()))
        );
        assert_eq!(
            registry.unenroll("Unknown Club", "x"),
            Err(DomainError::ActivityNotFound("Unknown Club".to_string()))
        );
        assert!(!registry.contains("Unknown Club"));
    }

    #[test]
    fn test_enroll_unenroll_round_trip() {
        let registry = registry();
        let before = participants(&registry, "Drama Club");

        registry.enroll("Drama Club", "new@mergington.edu").unwrap();
        registry.unenroll("Drama Club", "new@mergington.edu").unwrap();

        assert_eq!(participants(&registry, "Drama Club"), before);
    }

    #[test]
    fn test_capacity_not_enforced() {
        let activity = Activity::new("Tiny", "d", "s", 1, vec!["a@x".to_string()]).unwrap();
        let registry = ActivityRegistry::new(vec![activity]);

        registry.enroll("Tiny", "b@x").unwrap();
        registry.enroll("Tiny", "c@x").unwrap();

        let tiny = registry.get("Tiny").unwrap();
        assert_eq!(tiny.participants.len(), 3);
        assert_eq!(tiny.max_participants, 1);
    }

    #[test]
    fn test_duplicate_names_keep_single_entry() {
        let first = Activity::new("Club", "first", "s", 5, vec![]).unwrap();
        let second = Activity::new("Club", "second", "s", 5, vec![]).unwrap();
        let registry = ActivityRegistry::new(vec![first, second]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Club").unwrap().description, "second");
    }

    #[test]
    fn test_concurrent_duplicate_signup_admits_one() {
        let registry = registry();
        let successes = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    if registry.enroll("Gym Class", "race@mergington.edu").is_ok() {
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(participants(&registry, "Gym Class").len(), 3);
    }

    #[test]
    fn test_concurrent_distinct_signups_all_land() {
        let registry = registry();

        std::thread::scope(|scope| {
            for i in 0..20 {
                let registry = &registry;
                scope.spawn(move || {
                    registry
                        .enroll("Soccer Team", &format!("player{}@mergington.edu", i))
                        .unwrap();
                });
            }
        });

        assert_eq!(participants(&registry, "Soccer Team").len(), 22);
    }
}
