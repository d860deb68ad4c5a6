//! Printable poster copy.

use serde::Serialize;

use super::home::{Card, FilterLayer, FILTER_LAYERS, TAGLINE_QUOTE};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PosterBlock {
    pub heading: &'static str,
    pub intro: Option<&'static str>,
    pub bullets: &'static [&'static str],
    pub footer: Option<&'static str>,
}

pub const TITLE: &str = "מערכת סינון מים אפורים למדשאות ומרפסות";
pub const BYLINE: &str = "גולן, איתן, דניאל — כיתה ט', אלתרמן הרצליה";
pub const BACK: &str = "חזרה";
pub const PRINT: &str = "הדפסה";

pub const PROBLEM: PosterBlock = PosterBlock {
    heading: "🚨 הבעיה",
    intro: None,
    bullets: &[
        "ישראל סובלת ממחסור חמור במים",
        "משפחות רבות משקות צמחים במי שתייה טריים",
        "מים אפורים (מקלחת/כיור/מזגן) נזרקים לביוב",
        "בזבוז של עד 10 ליטר מים ביום לכל משפחה",
    ],
    footer: None,
};

pub const SOLUTION: PosterBlock = PosterBlock {
    heading: "💡 הפתרון — ClearDrop",
    intro: Some("מערכת סינון זולה ובטוחה שממחזרת מים אפורים להשקיה באמצעות:"),
    bullets: &["צרורות קטנים", "חול", "פחם פעיל"],
    footer: None,
};

pub const LAYERS_HEADING: &str = "🔬 איך זה עובד — 3 שכבות סינון";
pub const LAYERS: &[FilterLayer] = &FILTER_LAYERS;

pub const MATERIALS: PosterBlock = PosterBlock {
    heading: "📦 חומרים נדרשים",
    intro: None,
    bullets: &[
        "3 × בקבוקי פלסטיק 1.5 ליטר",
        "פחם פעיל (גרגירי)",
        "חול (שטוף)",
        "צרורות קטנים",
        "גרב ישנה / בד כותנה",
        "מספריים, סרט דבק, מיכל לאיסוף",
    ],
    footer: Some("עלות: פחות מ-10 ש\"ח!"),
};

pub const SAFETY: PosterBlock = PosterBlock {
    heading: "⚠️ הנחיות בטיחות",
    intro: None,
    bullets: &[
        "❌ רק לצמחים לא אכילים",
        "❌ אין לחבר למערכת צנרת",
        "✓ לפי הנחיות משרד הסביבה 2021",
        "🔄 החלפת פחם כל 2-6 שבועות",
        "🦟 למנוע מים עומדים (יתושים)",
    ],
    footer: None,
};

pub const PRO_HEADING: &str = "⭐ גרסת PRO — שיפורים אופציונליים";
pub const PRO_UPGRADES: [Card; 6] = [
    Card { title: "תא שקיעה", description: "לתת למוצקים לשקוע" },
    Card { title: "פחם גרגירי (GAC)", description: "זרימה טובה יותר" },
    Card { title: "שכבת חול עדין", description: "סינון משופר" },
    Card { title: "פילטר בד סופי", description: "לפני האיסוף" },
    Card { title: "בקרת זרימה", description: "שליטה בקצב" },
    Card { title: "מערכת דו-שלבית", description: "שקיעה 30 דק' לפני סינון" },
];

pub const IMPACT_HEADING: &str = "🌍 השפעה סביבתית";
/// (figure, caption)
pub const IMPACT: [(&str, &str); 3] = [
    ("~300", "ליטר נחסכים בחודש"),
    ("3", "בקבוקים ממוחזרים"),
    ("10₪", "עלות מינימלית"),
];

pub const TAGLINE: &str = TAGLINE_QUOTE;
