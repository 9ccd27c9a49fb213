/*
Activities offered by the school, keyed by name in the store.
*/

use serde::{Deserialize, Serialize, Serializer};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Self {
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends to the end of the list. Callers check `is_participant` first.
    pub fn add_participant(&mut self, email: String) {
        self.participants.push(email);
    }

    /// Returns false when the email was not signed up.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Informational only, signups are never rejected on capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Name-keyed JSON object that keeps the order activities were listed in.
#[derive(Debug)]
pub struct ActivityListing(pub Vec<(String, Activity)>);

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, activity)| (name, activity)))
    }
}

/// Body returned by the signup and removal routes.
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
