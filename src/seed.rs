use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::{Activity, ActivityTable};

/// The built-in activity table loaded when no seed file is configured.
pub fn default_activities() -> ActivityTable {
    let seed = [
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
                "Join the school soccer team and compete in local tournaments",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["lucas@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice basketball and participate in inter-school competitions",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ethan@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore various art forms and create your own masterpieces",
                "Mondays, 3:30 PM - 5:00 PM",
                15,
                &["isabella@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Learn acting skills and participate in school plays",
                "Thursdays, 4:00 PM - 5:30 PM",
                20,
                &["amelia@mergington.edu", "liam@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging math problems and prepare for math competitions",
                "Wednesdays, 3:30 PM - 4:30 PM",
                10,
                &["charlotte@mergington.edu", "james@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Conduct experiments and explore scientific concepts",
                "Fridays, 4:00 PM - 5:00 PM",
                12,
                &["harper@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Learn and practice tennis with professional coaching",
                "Tuesdays and Thursdays, 3:00 PM - 4:30 PM",
                10,
                &["grace@mergington.edu", "henry@mergington.edu"],
            ),
        ),
        (
            "Swimming Team",
            Activity::new(
                "Train for swimming competitions and improve your skills",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["jackson@mergington.edu", "ella@mergington.edu"],
            ),
        ),
        (
            "Photography Club",
            Activity::new(
                "Learn photography techniques and capture stunning images",
                "Fridays, 3:00 PM - 4:30 PM",
                12,
                &["scarlett@mergington.edu", "leo@mergington.edu"],
            ),
        ),
        (
            "Music Band",
            Activity::new(
                "Join the school band and perform at events",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                20,
                &["victoria@mergington.edu", "sebastian@mergington.edu"],
            ),
        ),
        (
            "Debate Club",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["nathan@mergington.edu", "zoe@mergington.edu"],
            ),
        ),
        (
            "Robotics Club",
            Activity::new(
                "Build and program robots for competitions",
                "Mondays and Fridays, 3:30 PM - 5:00 PM",
                10,
                &["elijah@mergington.edu", "chloe@mergington.edu"],
            ),
        ),
    ];

    seed.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Reads a seed table from a JSON file shaped like the `/activities` response.
pub fn load_activities(path: &Path) -> AppResult<ActivityTable> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!("Cannot read seed file {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::Configuration(format!("Invalid seed file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_activities() {
        let activities = default_activities();
        assert_eq!(activities.len(), 15);

        let chess = &activities["Chess Club"];
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");

        for (name, activity) in &activities {
            assert_eq!(activity.participants.len(), 2, "{}", name);
            assert!(!activity.is_full(), "{}", name);
        }
    }

    #[test]
    fn test_load_activities_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"Chess Club": {{"description": "Chess", "schedule": "Fridays", "max_participants": 3}}}}"#
        )
        .unwrap();

        let activities = load_activities(&path).unwrap();
        assert_eq!(activities.len(), 1);
        assert!(activities["Chess Club"].participants.is_empty());
    }

    #[test]
    fn test_load_activities_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_activities(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_load_activities_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            load_activities(&path),
            Err(AppError::Configuration(_))
        ));
    }
}
