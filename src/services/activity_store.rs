use dashmap::DashMap;
use tracing::{info, warn};

use crate::{error::ApiError, models::activity::Activity, utils::seed_utils};

struct Slot {
    position: usize,
    activity: Activity,
}

pub struct ActivityStore {
    activities: DashMap<String, Slot>,
}

fn slots(seed: Vec<(String, Activity)>) -> impl Iterator<Item = (String, Slot)> {
    seed.into_iter()
        .enumerate()
        .map(|(position, (name, activity))| (name, Slot { position, activity }))
}

impl ActivityStore {
    pub fn new(seed: Vec<(String, Activity)>) -> Self {
        ActivityStore {
            activities: slots(seed).collect(),
        }
    }

    pub fn seeded() -> Self {
        ActivityStore::new(seed_utils::initial_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|slot| slot.activity.clone())
    }

    /// Snapshot of every activity in seed order.
    pub fn list(&self) -> Vec<(String, Activity)> {
        let mut snapshot: Vec<(usize, String, Activity)> = self
            .activities
            .iter()
            .map(|entry| (entry.position, entry.key().clone(), entry.activity.clone()))
            .collect();
        snapshot.sort_by_key(|(position, _, _)| *position);

        snapshot.into_iter().map(|(_, name, activity)| (name, activity)).collect()
    }

    // The shard guard from get_mut is held across check and mutation,
    // so two signups for the same email cannot both pass the check.
    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), ApiError> {
        let mut slot = self.activities.get_mut(name).ok_or_else(|| {
            warn!(activity = name, "signup for unknown activity");
            ApiError::ActivityNotFound
        })?;
        let activity = &mut slot.activity;

        if activity.is_participant(email) {
            warn!(activity = name, email, "duplicate signup rejected");
            return Err(ApiError::AlreadySignedUp);
        }

        activity.add_participant(email.to_string());
        info!(
            activity = name,
            email,
            spots_left = activity.spots_left(),
            "participant signed up"
        );
        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), ApiError> {
        let mut slot = self.activities.get_mut(name).ok_or_else(|| {
            warn!(activity = name, "removal from unknown activity");
            ApiError::ActivityNotFound
        })?;
        let activity = &mut slot.activity;

        if !activity.remove_participant(email) {
            warn!(activity = name, email, "removal of unknown participant");
            return Err(ApiError::ParticipantNotFound);
        }

        info!(activity = name, email, "participant removed");
        Ok(())
    }

    /// Replaces the whole contents, e.g. to restore the seed between runs.
    #[cfg(test)]
    pub fn reset(&self, seed: Vec<(String, Activity)>) {
        self.activities.clear();
        for (name, slot) in slots(seed) {
            self.activities.insert(name, slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ActivityStore {
        ActivityStore::new(vec![
            ("Chess Club".to_string(), Activity::new("Chess", "Fridays", 12, &["a@x.com"])),
            ("Basketball Club".to_string(), Activity::new("Hoops", "Tuesdays", 15, &[])),
        ])
    }

    #[test]
    fn add_participant_appends_to_the_end() {
        let store = store();

        store.add_participant("Chess Club", "b@x.com").unwrap();

        let chess = store.get("Chess Club").unwrap();
        assert_eq!(chess.participants, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn add_participant_rejects_duplicates() {
        let store = store();

        store.add_participant("Basketball Club", "t@x.com").unwrap();
        let result = store.add_participant("Basketball Club", "t@x.com");

        assert_eq!(result, Err(ApiError::AlreadySignedUp));
        assert_eq!(store.get("Basketball Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn add_participant_to_unknown_activity_creates_nothing() {
        let store = store();

        let result = store.add_participant("No Such Club", "t@x.com");

        assert_eq!(result, Err(ApiError::ActivityNotFound));
        assert_eq!(store.len(), 2);
        assert!(store.get("No Such Club").is_none());
    }

    #[test]
    fn list_keeps_seed_order() {
        let store = ActivityStore::seeded();
        store.add_participant("Basketball Club", "t@x.com").unwrap();

        let names: Vec<String> = store.list().into_iter().map(|(name, _)| name).collect();
        let seed: Vec<String> = seed_utils::initial_activities().into_iter().map(|(name, _)| name).collect();

        assert_eq!(names, seed);
    }

    #[test]
    fn names_are_case_sensitive() {
        let store = store();

        assert_eq!(store.add_participant("chess club", "t@x.com"), Err(ApiError::ActivityNotFound));
    }

    #[test]
    fn remove_participant_checks_activity_then_email() {
        let store = store();

        assert_eq!(store.remove_participant("No Such Club", "a@x.com"), Err(ApiError::ActivityNotFound));
        assert_eq!(store.remove_participant("Chess Club", "zz@x.com"), Err(ApiError::ParticipantNotFound));

        store.remove_participant("Chess Club", "a@x.com").unwrap();
        assert!(store.get("Chess Club").unwrap().participants.is_empty());
    }

    #[test]
    fn reset_restores_the_seed() {
        let store = store();
        store.add_participant("Basketball Club", "t@x.com").unwrap();

        store.reset(seed_utils::initial_activities());

        assert!(store.get("Basketball Club").unwrap().participants.is_empty());
        assert_eq!(store.len(), seed_utils::initial_activities().len());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_add_one_entry() {
        let store = std::sync::Arc::new(store());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move { store.add_participant("Basketball Club", "race@x.com") })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(store.get("Basketball Club").unwrap().participants, vec!["race@x.com"]);
    }
}
