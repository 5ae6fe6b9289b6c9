//! Activities the directory starts with.

use mergington::data::Activity;

fn school_email(name: &str) -> String {
    format!("{name}@mergington.edu")
}

/// The fixed activity set loaded at process start, keyed by name.
pub fn activities() -> Vec<(String, Activity)> {
    let seed = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael", "daniel"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma", "sophia"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john", "olivia"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            ["liam", "noah"],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
            15,
            ["ava", "sarah"],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["mia", "amelia"],
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            ["emily", "james"],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Tuesdays, 3:30 PM - 5:00 PM",
            16,
            ["lucas", "harper"],
        ),
        (
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Mondays, 3:30 PM - 4:30 PM",
            18,
            ["ethan", "charlotte"],
        ),
    ];

    seed.into_iter()
        .map(|(name, description, schedule, max, members)| {
            let activity = Activity::new(description, schedule, max)
                .with_participants(members.map(school_email));
            (name.to_string(), activity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let seed = activities();
        let mut names: Vec<_> = seed.iter().map(|(name, _)| name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), seed.len());
    }

    #[test]
    fn seeded_members_fit_capacity() {
        for (name, activity) in activities() {
            assert!(activity.max_participants > 0, "{name} has no capacity");
            assert!(activity.participants.len() <= activity.max_participants as usize);
        }
    }

    #[test]
    fn known_members_are_present() {
        let seed = activities();
        let find = |name: &str| {
            seed.iter()
                .find(|(n, _)| n == name)
                .map(|(_, a)| a)
                .unwrap()
        };

        assert!(find("Drama Club").is_registered("emily@mergington.edu"));
        assert!(find("Basketball Team").is_registered("sarah@mergington.edu"));
        assert!(!find("Science Club").is_registered("nobody@mergington.edu"));
    }
}
