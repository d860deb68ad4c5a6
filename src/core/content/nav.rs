use serde::Serialize;

/// Scroll anchors of the home page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionId {
    Hero,
    Problem,
    Solution,
    HowItWorks,
    Materials,
    Safety,
    Impact,
    Improvements,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Problem,
        SectionId::Solution,
        SectionId::HowItWorks,
        SectionId::Materials,
        SectionId::Safety,
        SectionId::Impact,
        SectionId::Improvements,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Problem => "problem",
            SectionId::Solution => "solution",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Materials => "materials",
            SectionId::Safety => "safety",
            SectionId::Impact => "impact",
            SectionId::Improvements => "improvements",
        }
    }

    /// Resolve `#anchor` (or a bare anchor); unknown anchors resolve to nothing.
    pub fn from_href(href: &str) -> Option<Self> {
        let anchor = href.strip_prefix('#').unwrap_or(href);
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const fn nav(label: &'static str, href: &'static str) -> NavItem {
    NavItem { label, href }
}

pub const NAV_ITEMS: [NavItem; 6] = [
    nav("הבעיה", "#problem"),
    nav("הפתרון", "#solution"),
    nav("איך זה עובד", "#how-it-works"),
    nav("חומרים", "#materials"),
    nav("בטיחות", "#safety"),
    nav("השפעה", "#impact"),
];

/// Extra route links; desktop shows only the first.
pub const ROUTE_ITEMS: [NavItem; 2] = [nav("פוסטר להדפסה", "/poster"), nav("תסריט מצגת", "/presentation")];
pub const DESKTOP_POSTER_LABEL: &str = "פוסטר";

pub const FOOTER_LINKS: [NavItem; 4] = [
    nav("הבעיה", "#problem"),
    nav("הפתרון", "#solution"),
    nav("איך זה עובד", "#how-it-works"),
    nav("בטיחות", "#safety"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_item_resolves() {
        for item in NAV_ITEMS.iter().chain(FOOTER_LINKS.iter()) {
            assert!(SectionId::from_href(item.href).is_some(), "{}", item.href);
        }
    }

    #[test]
    fn unknown_anchor_is_none() {
        assert_eq!(SectionId::from_href("#contact"), None);
        assert_eq!(SectionId::from_href(""), None);
        assert_eq!(SectionId::from_href("how-it-works"), Some(SectionId::HowItWorks));
    }
}
