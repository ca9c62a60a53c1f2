use crate::models::{Activity, Catalog};

/// The activities offered at process start.
pub fn default_catalog() -> Catalog {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball practice and inter-school games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Team drills, scrimmages and weekend matches",
                "Wednesdays, 3:30 PM - 5:30 PM",
                22,
            )
            .with_participants(["noah@mergington.edu", "ava@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and mixed media",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Acting, stagecraft and the spring production",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["isabella@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Problem solving and competition preparation",
                "Tuesdays, 3:30 PM - 4:30 PM",
                16,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Argumentation, public speaking and tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["amelia@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
