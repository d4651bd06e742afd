use crate::models::Course;

/// How a course is shown: tag colour, icon and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseStyle {
    pub label: &'static str,
    pub picker_label: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

const STARTER_STYLE: CourseStyle = CourseStyle {
    label: "Starter",
    picker_label: "Starter 🥗",
    color: "#27ae60",
    emoji: "🥗",
};

const MAIN_STYLE: CourseStyle = CourseStyle {
    label: "Main",
    picker_label: "Main Course 🍖",
    color: "#e67e22",
    emoji: "🍖",
};

const DESSERT_STYLE: CourseStyle = CourseStyle {
    label: "Dessert",
    picker_label: "Dessert 🍰",
    color: "#9b59b6",
    emoji: "🍰",
};

/// Used for anything outside the three known courses
pub static FALLBACK_STYLE: CourseStyle = CourseStyle {
    label: "Other",
    picker_label: "Other 🍽️",
    color: "#95a5a6",
    emoji: "🍽️",
};

static STYLE_TABLE: [(Course, CourseStyle); 3] = [
    (Course::Starter, STARTER_STYLE),
    (Course::Main, MAIN_STYLE),
    (Course::Dessert, DESSERT_STYLE),
];

/// Look up the style for a course, falling back to [`FALLBACK_STYLE`]
pub fn course_style(course: &Course) -> &'static CourseStyle {
    STYLE_TABLE
        .iter()
        .find(|(key, _)| key == course)
        .map(|(_, style)| style)
        .unwrap_or(&FALLBACK_STYLE)
}

/// Entry of the course picker on the add-dish form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseOption {
    pub label: &'static str,
    pub value: Course,
}

pub const COURSE_OPTIONS: [CourseOption; 3] = [
    CourseOption {
        label: STARTER_STYLE.picker_label,
        value: Course::Starter,
    },
    CourseOption {
        label: MAIN_STYLE.picker_label,
        value: Course::Main,
    },
    CourseOption {
        label: DESSERT_STYLE.picker_label,
        value: Course::Dessert,
    },
];
