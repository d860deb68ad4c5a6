//! Copy for the home page sections. Every table here is immutable for the
//! process lifetime.

use serde::Serialize;

pub const TAGLINE: &str = "הופך טיפות מבוזבזות לצמיחה ירוקה — מרפסת אחת בכל פעם";
pub const TAGLINE_QUOTE: &str = "\"קלירדרופ הופך טיפות מבוזבזות לצמיחה ירוקה — מרפסת אחת בכל פעם.\"";
pub const CREATORS: &str = "גולן, איתן, דניאל — כיתה ט', אלתרמן הרצליה";
pub const LOADING_TAGLINE: &str = "הופך טיפות מבוזבזות לצמיחה ירוקה";

/// Heading pair shared by every section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// (title, description) pair used by cards and list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

const fn card(title: &'static str, description: &'static str) -> Card {
    Card { title, description }
}

pub mod hero {
    pub const TITLE: &str = "מערכת סינון מים אפורים";
    pub const TITLE_ACCENT: &str = "למדשאות ומרפסות";
    pub const HINT: &str = "גללו למטה";
}

pub mod problem {
    use super::*;
    pub const HEADING: SectionHeading = SectionHeading {
        title: "הבעיה",
        subtitle: "ישראל מתמודדת עם אתגר מים משמעותי, אך הפתרון נמצא ממש בבית שלנו",
    };
    pub const CARDS: [Card; 3] = [
        card("מחסור חמור במים", "ישראל סובלת ממחסור חמור במים, אך משפחות רבות משקות צמחים במי שתייה טריים."),
        card("מים אפורים מבוזבזים", "מים מקלחת, כיור ומזגן נזרקים לביוב למרות שניתן לסנן אותם בקלות."),
        card("בזבוז משאבים", "כל יום משפחות מבזבזות ליטרים רבים של מים שיכולים לשמש להשקיה."),
    ];
    /// (hue, saturation %, lightness %) of each card's badge.
    pub const CARD_ACCENTS: [(f32, f32, f32); 3] = [(195.0, 70.0, 45.0), (150.0, 50.0, 40.0), (45.0, 85.0, 50.0)];
    pub const STAT: &str = "עד 10 ליטר מים ביום יכולים להיחסך";
    pub const STAT_NOTE: &str = "בעזרת מערכת סינון פשוטה וזולה";
}

pub mod solution {
    use super::*;
    pub const HEADING: SectionHeading = SectionHeading {
        title: "הפתרון — ClearDrop",
        subtitle: "מערכת סינון זולה ובטוחה שממחזרת מים אפורים להשקיה",
    };
    pub const BENEFITS: [Card; 3] = [
        card("ידידותי לסביבה", "מנצל מים אפורים במקום לזרוק אותם"),
        card("עלות נמוכה", "פחות מ-10 ש\"ח לבניית המערכת"),
        card("קל לבנות", "ללא צורך בכלים מיוחדים"),
    ];
    pub const COMPONENTS_HEADING: &str = "מרכיבי הסינון:";
    pub const COMPONENTS: [Card; 3] = [
        card("צרורות קטנים", "סינון ראשוני של חלקיקים גדולים"),
        card("חול", "סינון חלקיקים עדינים"),
        card("פחם פעיל", "הסרת ריחות וזיהומים"),
    ];
    pub const DIAGRAM_HEADING: &str = "מבנה המערכת";
    pub const DIAGRAM_INPUT: &str = "💧 מים אפורים נכנסים";
    pub const DIAGRAM_OUTPUT: &str = "🌱 מים מסוננים להשקיה";
}

/// One layer of the three-stage filter diagram.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FilterLayer {
    pub label: &'static str,
    pub material: &'static str,
    pub role: &'static str,
    /// Top and bottom colours of the layer swatch.
    pub gradient: (&'static str, &'static str),
}

pub const FILTER_LAYERS: [FilterLayer; 3] = [
    FilterLayer { label: "שכבה 1", material: "צרורות + חול", role: "סינון ראשוני", gradient: ("#e0c090", "#c0a070") },
    FilterLayer { label: "שכבה 2", material: "פחם פעיל", role: "טיהור עמוק", gradient: ("#404040", "#202020") },
    FilterLayer { label: "שכבה 3", material: "מים נקיים", role: "איסוף", gradient: ("#60b0e0", "#3090c0") },
];

pub mod how_it_works {
    use super::*;

    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct Step {
        pub number: u8,
        pub title: &'static str,
        pub subtitle: &'static str,
        pub details: [&'static str; 3],
        /// (hue, saturation %, lightness %)
        pub accent: (f32, f32, f32),
    }

    pub const HEADING: SectionHeading = SectionHeading {
        title: "איך זה עובד?",
        subtitle: "מערכת שלושת הבקבוקים — פשוט, יעיל ובטוח",
    };
    pub const STEPS: [Step; 3] = [
        Step {
            number: 1,
            title: "בקבוק A (עליון)",
            subtitle: "סינון ראשוני",
            details: ["צרורות בתחתית הבקבוק", "חול גס מעל הצרורות", "בד סינון (גרב/כותנה) בחלק העליון"],
            accent: (40.0, 60.0, 55.0),
        },
        Step {
            number: 2,
            title: "בקבוק B (אמצעי)",
            subtitle: "טיהור עמוק",
            details: ["פחם פעיל גרגירי (GAC)", "שכבה עבה לספיגת מזהמים", "הסרת ריחות וכימיקלים"],
            accent: (0.0, 0.0, 30.0),
        },
        Step {
            number: 3,
            title: "בקבוק C (תחתון)",
            subtitle: "איסוף מים נקיים",
            details: ["חלק עליון מוסר (צורת משפך)", "איסוף המים המסוננים", "חיבור למיכל קטן"],
            accent: (195.0, 70.0, 50.0),
        },
    ];
    pub const GRAVITY_NOTE: &str = "💧 המים זורמים מלמעלה למטה בכוח הכבידה בלבד — ללא צורך בחשמל!";
    pub const VIEWER_HINT: &str = "גרור לסיבוב • צבוט לזום";
}

pub mod materials {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum Category {
        Main,
        Filtering,
        Tools,
    }

    impl Category {
        pub const ALL: [Category; 3] = [Category::Main, Category::Filtering, Category::Tools];
        pub fn label(self) -> &'static str {
            match self {
                Category::Main => "עיקרי",
                Category::Filtering => "סינון",
                Category::Tools => "כלים",
            }
        }
    }

    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct Material {
        pub name: &'static str,
        pub category: Category,
    }

    const fn item(name: &'static str, category: Category) -> Material {
        Material { name, category }
    }

    pub const HEADING: SectionHeading = SectionHeading {
        title: "חומרים נדרשים",
        subtitle: "כל מה שצריך כדי לבנות את המערכת — רוב החומרים כבר נמצאים בבית",
    };
    pub const ITEMS: [Material; 9] = [
        item("3 בקבוקי פלסטיק 1.5 ליטר", Category::Main),
        item("פחם פעיל (גרגירי)", Category::Main),
        item("חול (שטוף)", Category::Main),
        item("צרורות קטנים", Category::Main),
        item("גרב ישנה / בד כותנה", Category::Filtering),
        item("מספריים", Category::Tools),
        item("סרט דבק", Category::Tools),
        item("חבל (אופציונלי)", Category::Tools),
        item("מיכל לאיסוף מים", Category::Tools),
    ];
    pub const COST: &str = "עלות כוללת: פחות מ-10 ש\"ח!";
    pub const TIP: Card = card(
        "טיפ להרכבה",
        "השתמשו בסרט דבק חזק לחיבור בין הבקבוקים. וודאו שאין נזילות ושהמערכת יציבה. ניתן להשתמש בחבל לתליית המערכת על מרפסת או גדר.",
    );

    pub fn in_category(category: Category) -> impl Iterator<Item = &'static Material> {
        ITEMS.iter().filter(move |m| m.category == category)
    }
}

pub mod safety {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum RuleKind {
        Warning,
        Info,
    }

    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct Rule {
        pub rule: &'static str,
        pub description: &'static str,
        pub kind: RuleKind,
    }

    pub const HEADING: SectionHeading = SectionHeading {
        title: "הנחיות בטיחות",
        subtitle: "חשוב לעקוב אחר ההנחיות הבאות לשימוש בטוח ויעיל",
    };
    pub const RULES: [Rule; 5] = [
        Rule {
            rule: "רק לצמחים לא אכילים",
            description: "אין להשתמש במים המסוננים להשקיית ירקות, פירות או צמחי תבלין",
            kind: RuleKind::Warning,
        },
        Rule {
            rule: "אין לחבר למערכת צנרת",
            description: "המערכת מיועדת לשימוש ידני בלבד, לא לחיבור לצנרת הבית",
            kind: RuleKind::Warning,
        },
        Rule {
            rule: "עמידה בהנחיות",
            description: "פועל בהתאם להנחיות המשרד להגנת הסביבה 2021",
            kind: RuleKind::Info,
        },
        Rule {
            rule: "החלפת פחם",
            description: "יש להחליף את הפחם הפעיל כל 2-6 שבועות",
            kind: RuleKind::Info,
        },
        Rule {
            rule: "מניעת יתושים",
            description: "אין להשאיר מים עומדים — יש לרוקן את המערכת לאחר שימוש",
            kind: RuleKind::Warning,
        },
    ];
    pub const COMPLIANCE: Card = card(
        "תואם להנחיות רשמיות",
        "המערכת פועלת בהתאם להנחיות המשרד להגנת הסביבה לשימוש במים אפורים לגינון ביתי (2021)",
    );
}

pub mod impact {
    use super::*;

    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct Stat {
        pub value: &'static str,
        pub unit: &'static str,
        pub label: &'static str,
        /// (hue, saturation %, lightness %)
        pub accent: (f32, f32, f32),
    }

    pub const HEADING: SectionHeading = SectionHeading {
        title: "השפעה סביבתית",
        subtitle: "כל טיפה שנחסכת היא צעד לעבר עתיד ירוק יותר",
    };
    pub const STATS: [Stat; 3] = [
        Stat { value: "~300", unit: "ליטר", label: "נחסכים בחודש", accent: (195.0, 70.0, 45.0) },
        Stat { value: "3", unit: "בקבוקים", label: "ממוחזרים לשימוש", accent: (152.0, 60.0, 42.0) },
        Stat { value: "∞", unit: "", label: "מתאים לכל בית", accent: (45.0, 85.0, 55.0) },
    ];
    pub const USE_CASES_HEADING: &str = "מתאים לשימוש ב:";
    pub const USE_CASES: [Card; 4] = [
        card("בתים פרטיים", "השקיית גינה ומדשאה"),
        card("מרפסות", "עציצים וצמחי נוי"),
        card("גינות קהילתיות", "פרויקטים משותפים"),
        card("מוסדות חינוך", "למידה וחינוך סביבתי"),
    ];
}

pub mod improvements {
    use super::*;

    pub const HEADING: SectionHeading = SectionHeading {
        title: "שיפורים אופציונליים",
        subtitle: "שדרוגים פשוטים להגברת יעילות המערכת",
    };
    pub const ITEMS: [Card; 6] = [
        card("תא שקיעה", "הוספת תא שקיעה בחלק העליון לתת למוצקים לשקוע לפני הסינון"),
        card("פחם גרגירי (GAC)", "שימוש בפחם פעיל גרגירי במקום אבקה — זרימה טובה יותר, פחות סתימות"),
        card("שכבת חול עדין", "הוספת שכבת חול עדין מעל הפחם לשיפור הסרת חלקיקים"),
        card("פילטר בד סופי", "הוספת פילטר קפה או בד לפני תא האיסוף"),
        card("בקרת זרימה", "הוספת חור קטן או ברז פשוט לשליטה בקצב הזרימה"),
        card("מערכת דו-שלבית", "לתת למים לשקוע 30 דקות לפני הסינון לתוצאות טובות יותר"),
    ];
    pub const MAINTENANCE_HEADING: &str = "הוראות תחזוקה";
    /// (task, frequency)
    pub const MAINTENANCE: [Card; 4] = [
        card("ניקוי השכבה העליונה", "אחת לשבוע"),
        card("החלפת פחם (שימוש רב)", "אחת לחודש"),
        card("החלפת פחם (שימוש קל)", "כל 6 שבועות"),
        card("ייבוש המערכת בין שימושים", "לפי הצורך"),
    ];
    pub const PERFORMANCE_NOTE: Card = card(
        "שיפור ביצועים:",
        "יישום השיפורים יכול להגביר את קצב הזרימה ואת בהירות המים המסוננים. מומלץ לייבש את המערכת בין שימושים למניעת ריחות.",
    );
}

pub mod footer {
    pub const QUICK_LINKS_HEADING: &str = "ניווט מהיר";
    pub const RESOURCES_HEADING: &str = "משאבים";
    pub const POSTER_LINK: &str = "פוסטר להדפסה";
    pub const SCRIPT_LINK: &str = "תסריט מצגת";
    pub const PALETTE_HEADING: &str = "פלטת צבעים";

    pub fn credit(year: i32) -> String {
        format!("כיתה ט', אלתרמן הרצליה — {year}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materials_split_by_category() {
        use materials::{in_category, Category};
        let counts: Vec<usize> = Category::ALL.iter().map(|c| in_category(*c).count()).collect();
        assert_eq!(counts, vec![4, 1, 4]);
    }

    #[test]
    fn safety_has_three_warnings() {
        let warnings = safety::RULES
            .iter()
            .filter(|r| r.kind == safety::RuleKind::Warning)
            .count();
        assert_eq!(warnings, 3);
    }

    #[test]
    fn footer_credit_includes_year() {
        assert!(footer::credit(2026).ends_with("2026"));
    }
}
