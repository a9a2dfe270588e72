//! ==============================================================================
//! model.rs - activity and snapshot types
//! ==============================================================================
//!
//! the backend answers `GET /activities` with a json object keyed by activity
//! name. the object order is the display order, so the snapshot keeps its
//! entries in a vec instead of a hash map.
//!
//! ==============================================================================

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ==============================================================================
// activity
// ==============================================================================

/// the per-activity body as it appears on the wire (the name is the json key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

/// a signup-able offering with a capacity and a roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    pub fn capacity(&self) -> Capacity {
        Capacity {
            current: self.participants.len(),
            max: self.max_participants,
        }
    }

    fn details(&self) -> ActivityDetails {
        ActivityDetails {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }
}

/// enrolled vs. allowed participants. not enforced client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub current: usize,
    pub max: u32,
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.max)
    }
}

// ==============================================================================
// snapshot
// ==============================================================================

/// every activity as last fetched, in backend order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    activities: Vec<Activity>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// inserts or replaces by name. a replaced entry keeps its position.
    pub fn insert(&mut self, activity: Activity) {
        match self.position(&activity.name) {
            Some(index) => self.activities[index] = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.activities.iter().position(|a| a.name == name)
    }
}

impl FromIterator<Activity> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for activity in iter {
            snapshot.insert(activity);
        }
        snapshot
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut snapshot = Snapshot::new();
        while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
            snapshot.insert(Activity::from_details(name, details));
        }
        Ok(snapshot)
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "Programming Class": {"description": "p", "schedule": "Tue", "max_participants": 20, "participants": []},
        "Chess Club": {"description": "d", "schedule": "Mon", "max_participants": 2, "participants": ["a@x.com"]},
        "Art Studio": {"description": "a", "schedule": "Fri", "max_participants": 5, "participants": ["z@x.com", "y@x.com"]}
    }"#;

    #[test]
    fn test_snapshot_keeps_backend_order() {
        let snapshot: Snapshot = serde_json::from_str(BODY).unwrap();
        let names: Vec<_> = snapshot.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
    }

    #[test]
    fn test_participants_keep_signup_order() {
        let snapshot: Snapshot = serde_json::from_str(BODY).unwrap();
        let art = snapshot.get("Art Studio").unwrap();
        assert_eq!(art.participants, vec!["z@x.com", "y@x.com"]);
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let body = r#"{
            "A": {"description": "first", "schedule": "", "max_participants": 1},
            "B": {"description": "", "schedule": "", "max_participants": 1},
            "A": {"description": "second", "schedule": "", "max_participants": 1}
        }"#;
        let snapshot: Snapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(snapshot.get("A").unwrap().description, "second");
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let body = r#"{"Solo": {"description": "", "schedule": "", "max_participants": 0}}"#;
        let snapshot: Snapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.get("Solo").unwrap().participants.is_empty());
    }

    #[test]
    fn test_snapshot_rejects_non_object() {
        assert!(serde_json::from_str::<Snapshot>("[]").is_err());
    }

    #[test]
    fn test_capacity_display() {
        let capacity = Capacity { current: 2, max: 2 };
        assert_eq!(capacity.to_string(), "2 / 2");
    }

    #[test]
    fn test_capacity_may_exceed_max() {
        let activity = Activity {
            name: "Over".into(),
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(activity.capacity().to_string(), "2 / 1");
    }

    #[test]
    fn test_serialize_uses_name_as_key() {
        let snapshot: Snapshot = serde_json::from_str(BODY).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.starts_with("{\"Programming Class\":"));
        assert!(json.contains("\"max_participants\":2"));
    }
}
