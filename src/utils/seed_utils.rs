use crate::models::activity::Activity;

/// Activities available when the process starts.
pub fn initial_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Club".to_string(),
            Activity::new(
                "Practice drills and play pickup games against other schools",
                "Tuesdays, 4:00 PM - 6:00 PM",
                15,
                &[],
            ),
        ),
        (
            "Soccer Team".to_string(),
            Activity::new(
                "Train and compete in the regional youth league",
                "Wednesdays and Saturdays, 3:00 PM - 5:00 PM",
                22,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Rehearse and stage the school plays",
                "Mondays, 4:00 PM - 6:00 PM",
                25,
                &[],
            ),
        ),
        (
            "Math Club".to_string(),
            Activity::new(
                "Solve competition problems and prepare for olympiads",
                "Wednesdays, 3:30 PM - 4:30 PM",
                10,
                &["noah@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Build argumentation skills and compete in debate tournaments",
                "Thursdays, 4:00 PM - 5:30 PM",
                16,
                &[],
            ),
        ),
    ]
}
