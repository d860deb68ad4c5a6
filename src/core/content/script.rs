//! Presentation script for the science-fair talk.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptSection {
    pub title: &'static str,
    pub duration_secs: u32,
    /// Ordered lines; an empty line is a paragraph spacer.
    pub lines: &'static [&'static str],
    pub notes: Option<&'static str>,
}

impl ScriptSection {
    pub fn duration_label(&self) -> String {
        format!("{} שניות", self.duration_secs)
    }
}

pub const SCRIPT_TITLE: &str = "תסריט מצגת ClearDrop";
pub const SCRIPT_SUBTITLE: &str = "מצגת של 2-3 דקות להצגה בתחרות";
pub const PRESENTER_TIP_PREFIX: &str = "💡 טיפ למציג: ";
pub const PRINT_TIP_PREFIX: &str = "טיפ: ";
pub const FULL_SCRIPT_HEADING: &str = "תסריט מלא";
pub const BACK_TO_SITE: &str = "→ חזרה לאתר";
pub const TOTAL_PREFIX: &str = "זמן כולל: ";
pub const PREVIOUS: &str = "→ הקודם";
pub const NEXT: &str = "הבא ←";
pub const PRINT_FULL: &str = "הדפסת תסריט מלא";

pub const SCRIPT: [ScriptSection; 8] = [
    ScriptSection {
        title: "פתיחה",
        duration_secs: 15,
        lines: &[
            "שלום לכולם!",
            "אנחנו גולן, איתן ודניאל מכיתה ט' בבית ספר אלתרמן הרצליה.",
            "היום נציג בפניכם את ClearDrop — קלירדרופ.",
            "מערכת סינון מים אפורים פשוטה וזולה שכל אחד יכול לבנות בבית.",
        ],
        notes: Some("דברו באנרגיה ובהתלהבות. הציגו את עצמכם בביטחון."),
    },
    ScriptSection {
        title: "הבעיה",
        duration_secs: 30,
        lines: &[
            "ישראל נמצאת במשבר מים מתמשך.",
            "אבל האם ידעתם שמשפחה ממוצעת יכולה לחסוך עד 10 ליטר מים ביום?",
            "בכל פעם שאנחנו מתקלחים, שוטפים ידיים, או מפעילים מזגן — מים יורדים ישירות לביוב.",
            "אלה נקראים \"מים אפורים\" — מים שאינם מזוהמים מאוד, וניתן לסנן אותם בקלות.",
            "במקום לבזבז אותם, אפשר להשתמש בהם להשקיית צמחים!",
        ],
        notes: Some("הדגישו את הבעיה בקול רציני. הראו דאגה אמיתית."),
    },
    ScriptSection {
        title: "הפתרון — ClearDrop",
        duration_secs: 20,
        lines: &[
            "הפתרון שלנו הוא ClearDrop — מערכת סינון מים אפורים להשקיה.",
            "המערכת בנויה מ-3 בקבוקי פלסטיק ממוחזרים וחומרי סינון פשוטים.",
            "העלות הכוללת? פחות מ-10 שקלים!",
            "וכל אחד יכול לבנות אותה בבית בלי כלים מיוחדים.",
        ],
        notes: Some("הצביעו על המודל אם יש. הדגישו את הפשטות והמחיר הנמוך."),
    },
    ScriptSection {
        title: "איך זה עובד",
        duration_secs: 45,
        lines: &[
            "המערכת עובדת ב-3 שכבות סינון:",
            "",
            "שכבה ראשונה: צרורות וחול גס — עוצרים חלקיקים גדולים.",
            "",
            "שכבה שנייה: פחם פעיל — מסיר ריחות, צבעים וזיהומים קלים.",
            "",
            "שכבה שלישית: תא איסוף — כאן נאספים המים הנקיים והמסוננים.",
            "",
            "המים זורמים מלמעלה למטה רק בכוח הכבידה — בלי צורך בחשמל!",
            "פשוט מזרימים מים אפורים מלמעלה, ומקבלים מים מסוננים למטה.",
        ],
        notes: Some("הסבירו בצורה ויזואלית. הראו על המודל כל שכבה."),
    },
    ScriptSection {
        title: "בדיקות ותוצאות",
        duration_secs: 20,
        lines: &[
            "ביצענו מספר ניסויים עם המערכת.",
            "המים שיצאו היו צלולים יותר, ללא ריח, ומתאימים להשקיית צמחי נוי.",
            "בדקנו את המערכת במשך שבועיים ברציפות — והיא עבדה מצוין!",
            "הצמחים שהושקו עם המים המסוננים גדלו באותו קצב כמו צמחים שהושקו במים רגילים.",
        ],
        notes: Some("אם יש תמונות או נתונים — הציגו אותם."),
    },
    ScriptSection {
        title: "השפעה סביבתית",
        duration_secs: 20,
        lines: &[
            "אז מה ההשפעה של ClearDrop?",
            "כ-300 ליטר מים נחסכים כל חודש לכל משפחה.",
            "3 בקבוקי פלסטיק ממוחזרים במקום להיזרק לזבל.",
            "המערכת מתאימה לבתים, מרפסות, וגם לגינות קהילתיות.",
            "טיפה אחת בכל פעם — ויחד אנחנו יכולים לעשות שינוי!",
        ],
        notes: Some("הראו התלהבות! זו הנקודה להשפיע רגשית."),
    },
    ScriptSection {
        title: "שיפורים עתידיים",
        duration_secs: 15,
        lines: &[
            "אנחנו כבר מתכננים שיפורים לגרסה הבאה:",
            "הוספת תא שקיעה לשיפור הסינון.",
            "בקרת זרימה לשליטה טובה יותר.",
            "ומערכת דו-שלבית שנותנת למים לשקוע לפני הסינון.",
        ],
        notes: Some("הראו שאתם חושבים קדימה וממשיכים לפתח."),
    },
    ScriptSection {
        title: "סיכום וסיום",
        duration_secs: 15,
        lines: &[
            "לסיכום — ClearDrop הוא פתרון פשוט, זול וידידותי לסביבה.",
            "כל אחד יכול לבנות אותו ולהתחיל לחסוך מים כבר היום.",
            "",
            "\"קלירדרופ הופך טיפות מבוזבזות לצמיחה ירוקה — מרפסת אחת בכל פעם.\"",
            "",
            "תודה רבה! יש שאלות?",
        ],
        notes: Some("סיימו בחיוך ובביטחון. היו מוכנים לשאלות."),
    },
];

pub fn total_duration_secs(script: &[ScriptSection]) -> u32 {
    script.iter().map(|s| s.duration_secs).sum()
}

/// "3 דקות" for whole minutes, otherwise "N שניות".
pub fn total_duration_label(script: &[ScriptSection]) -> String {
    let secs = total_duration_secs(script);
    if secs % 60 == 0 {
        format!("{} דקות", secs / 60)
    } else {
        format!("{secs} שניות")
    }
}

/// "n. title" label of a navigation pill.
pub fn pill_label(index: usize, section: &ScriptSection) -> String {
    format!("{}. {}", index + 1, section.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn talk_runs_three_minutes() {
        assert_eq!(total_duration_secs(&SCRIPT), 180);
        assert_eq!(total_duration_label(&SCRIPT), "3 דקות");
    }

    #[test]
    fn every_section_has_notes_and_content() {
        for section in SCRIPT {
            assert!(section.notes.is_some());
            assert!(section.lines.iter().any(|l| !l.is_empty()));
        }
        assert_eq!(SCRIPT[3].duration_label(), "45 שניות");
        assert_eq!(pill_label(2, &SCRIPT[2]), "3. הפתרון — ClearDrop");
    }
}
