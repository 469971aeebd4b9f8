//! Exercise library - built-in strength movement catalog

use serde::{Deserialize, Serialize};

/// Exercise categories for browsing the library
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Legs,
    Chest,
    Back,
    Shoulders,
    Arms,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Legs => "Legs",
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Shoulders => "Shoulders",
            Category::Arms => "Arms",
        }
    }

    /// All categories for iteration
    pub fn all() -> &'static [Category] {
        &[
            Category::Legs,
            Category::Chest,
            Category::Back,
            Category::Shoulders,
            Category::Arms,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub is_compound: bool,
    pub description: &'static str,
}

/// Built-in exercise catalog
pub const EXERCISES: &[Exercise] = &[
    // Legs
    Exercise {
        id: "barbell_squat",
        name: "Barbell Squat",
        category: Category::Legs,
        is_compound: true,
        description: "A fundamental compound exercise targeting the quadriceps, hamstrings, and glutes",
    },
    Exercise {
        id: "romanian_deadlift",
        name: "Romanian Deadlift",
        category: Category::Legs,
        is_compound: true,
        description: "Hip hinge movement targeting hamstrings and glutes",
    },
    Exercise {
        id: "leg_press",
        name: "Leg Press",
        category: Category::Legs,
        is_compound: true,
        description: "Machine exercise for overall leg development",
    },
    Exercise {
        id: "walking_lunges",
        name: "Walking Lunges",
        category: Category::Legs,
        is_compound: true,
        description: "Unilateral leg exercise for strength and balance",
    },
    Exercise {
        id: "leg_curl",
        name: "Leg Curl",
        category: Category::Legs,
        is_compound: false,
        description: "Isolation exercise for hamstrings",
    },
    // Chest
    Exercise {
        id: "bench_press",
        name: "Barbell Bench Press",
        category: Category::Chest,
        is_compound: true,
        description: "The king of upper body pressing exercises",
    },
    Exercise {
        id: "incline_dumbbell_press",
        name: "Incline Dumbbell Press",
        category: Category::Chest,
        is_compound: true,
        description: "Targets upper chest fibers",
    },
    Exercise {
        id: "dumbbell_flyes",
        name: "Dumbbell Flyes",
        category: Category::Chest,
        is_compound: false,
        description: "Chest isolation exercise",
    },
    Exercise {
        id: "pushups",
        name: "Push-ups",
        category: Category::Chest,
        is_compound: true,
        description: "Classic bodyweight chest exercise",
    },
    // Back
    Exercise {
        id: "bent_over_row",
        name: "Bent Over Row",
        category: Category::Back,
        is_compound: true,
        description: "Compound back exercise for thickness",
    },
    Exercise {
        id: "pullups",
        name: "Pull-ups",
        category: Category::Back,
        is_compound: true,
        description: "Classic bodyweight back exercise",
    },
    Exercise {
        id: "lat_pulldown",
        name: "Lat Pulldown",
        category: Category::Back,
        is_compound: true,
        description: "Machine alternative to pull-ups",
    },
    Exercise {
        id: "seated_cable_row",
        name: "Seated Cable Row",
        category: Category::Back,
        is_compound: true,
        description: "Mid-back rowing movement",
    },
    Exercise {
        id: "deadlift",
        name: "Deadlift",
        category: Category::Back,
        is_compound: true,
        description: "Full posterior chain pull from the floor",
    },
    // Shoulders
    Exercise {
        id: "overhead_press",
        name: "Overhead Press",
        category: Category::Shoulders,
        is_compound: true,
        description: "Primary shoulder pressing movement",
    },
    Exercise {
        id: "lateral_raises",
        name: "Lateral Raises",
        category: Category::Shoulders,
        is_compound: false,
        description: "Isolation exercise for side delts",
    },
    Exercise {
        id: "rear_delt_flyes",
        name: "Rear Delt Flyes",
        category: Category::Shoulders,
        is_compound: false,
        description: "Isolation for posterior deltoids",
    },
    // Arms
    Exercise {
        id: "barbell_curl",
        name: "Barbell Curl",
        category: Category::Arms,
        is_compound: false,
        description: "Classic bicep mass builder",
    },
    Exercise {
        id: "tricep_dips",
        name: "Tricep Dips",
        category: Category::Arms,
        is_compound: true,
        description: "Compound tricep exercise",
    },
    Exercise {
        id: "skull_crushers",
        name: "Skull Crushers",
        category: Category::Arms,
        is_compound: false,
        description: "Isolation exercise for triceps",
    },
];

pub fn all_exercises() -> &'static [Exercise] {
    EXERCISES
}

pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

/// Find exercise by display name (for matching imported records)
pub fn find_exercise_by_name(name: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
