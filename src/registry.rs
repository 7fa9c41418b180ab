use std::collections::BTreeMap;
use std::fmt;
use std::sync::RwLock;

use crate::domain::StudentEmail;
use crate::utils::error_chain_fmt;

/// Extracurricular activity
#[derive(Clone, Debug, serde::Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Participant emails, in signup order
    pub participants: Vec<String>,
}

/// Signup error type
#[derive(thiserror::Error)]
pub enum SignupError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,
}

impl fmt::Debug for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Unregistration error type
#[derive(thiserror::Error)]
pub enum UnregisterError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Student not signed up for this activity")]
    NotRegistered,
}

impl fmt::Debug for UnregisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// In-memory registry of activities, keyed by case-sensitive activity name
pub struct ActivityRegistry {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Build a registry from an initial roster
    pub fn new(roster: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(roster),
        }
    }

    /// Build a registry seeded with the Mergington High School roster
    pub fn with_default_roster() -> Self {
        Self::new(default_roster())
    }

    /// Get a point-in-time copy of all activities
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities
            .read()
            .expect("Activity registry lock was poisoned")
            .clone()
    }

    /// Add a student to an activity roster
    ///
    /// The membership check and the roster update happen under a single
    /// write lock, so concurrent signups cannot observe a partial update.
    pub fn signup(&self, activity_name: &str, email: &StudentEmail) -> Result<(), SignupError> {
        let mut activities = self
            .activities
            .write()
            .expect("Activity registry lock was poisoned");

        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::UnknownActivity)?;
        if activity.participants.iter().any(|p| p == email.as_ref()) {
            return Err(SignupError::AlreadyRegistered);
        }

        activity.participants.push(email.as_ref().to_owned());
        Ok(())
    }

    /// Remove a student from an activity roster
    pub fn unregister(
        &self,
        activity_name: &str,
        email: &StudentEmail,
    ) -> Result<(), UnregisterError> {
        let mut activities = self
            .activities
            .write()
            .expect("Activity registry lock was poisoned");

        let activity = activities
            .get_mut(activity_name)
            .ok_or(UnregisterError::UnknownActivity)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email.as_ref())
            .ok_or(UnregisterError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(())
    }
}

/// Build the initial Mergington High School activity roster
fn default_roster() -> BTreeMap<String, Activity> {
    let activity = |description: &str, schedule: &str, max_participants, participants: &[&str]| {
        Activity {
            description: description.to_owned(),
            schedule: schedule.to_owned(),
            max_participants,
            participants: participants.iter().map(|&p| p.to_owned()).collect(),
        }
    };

    BTreeMap::from([
        (
            "Chess Club".to_owned(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_owned(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_owned(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".to_owned(),
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                25,
                &["lucas@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Swimming Club".to_owned(),
            activity(
                "Improve swimming techniques and participate in competitions",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["james@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_owned(),
            activity(
                "Explore various art mediums including painting and sculpture",
                "Fridays, 3:00 PM - 4:30 PM",
                18,
                &["isabella@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_owned(),
            activity(
                "Perform in school plays and develop acting skills",
                "Thursdays, 3:30 PM - 5:30 PM",
                22,
                &["noah@mergington.edu", "charlotte@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_owned(),
            activity(
                "Develop critical thinking and public speaking through debates",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
                &["william@mergington.edu", "amelia@mergington.edu"],
            ),
        ),
        (
            "Science Olympiad".to_owned(),
            activity(
                "Compete in science and engineering challenges",
                "Tuesdays, 3:30 PM - 5:00 PM",
                20,
                &["alexander@mergington.edu", "harper@mergington.edu"],
            ),
        ),
    ])
}
