//! Anonymous visitor counters shown on the admin dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
    pub visits: u64,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: String,
    pub count: u64,
}

/// One page view as seen by the tracking endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visit {
    pub visitor_id: String,
    pub ip: String,
    pub user_agent: String,
    pub referrer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitorStats {
    pub total_visits: u64,
    pub today_visits: u64,
    pub weekly_visits: u64,
    pub monthly_visits: u64,
    pub last_visit: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub unique_visitors: BTreeMap<String, Visitor>,
    pub most_active_hours: Vec<HourCount>,
    pub most_active_days: Vec<DayCount>,
    pub browser_stats: BTreeMap<String, u64>,
    pub os_stats: BTreeMap<String, u64>,
    pub referrer_stats: BTreeMap<String, u64>,
}

fn bump(counter: u64, same_period: bool) -> u64 {
    if same_period { counter + 1 } else { 1 }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl VisitorStats {
    /// Count one visit at `now` (UTC calendar periods).
    pub fn record_visit(&mut self, visit: &Visit, now: DateTime<Utc>) {
        let (same_day, same_week, same_month) = match self.last_updated {
            Some(prev) => (
                prev.date_naive() == now.date_naive(),
                prev.iso_week() == now.iso_week(),
                (prev.year(), prev.month()) == (now.year(), now.month()),
            ),
            None => (false, false, false),
        };

        self.total_visits += 1;
        self.today_visits = bump(self.today_visits, same_day);
        self.weekly_visits = bump(self.weekly_visits, same_week);
        self.monthly_visits = bump(self.monthly_visits, same_month);
        self.last_visit = Some(now);
        self.last_updated = Some(now);

        self.unique_visitors
            .entry(visit.visitor_id.clone())
            .and_modify(|v| {
                v.last_visit = now;
                v.visits += 1;
            })
            .or_insert_with(|| Visitor {
                first_visit: now,
                last_visit: now,
                visits: 1,
                ip: visit.ip.clone(),
                user_agent: visit.user_agent.clone(),
            });

        *self.browser_stats.entry(detect_browser(&visit.user_agent).to_string()).or_default() += 1;
        *self.os_stats.entry(detect_os(&visit.user_agent).to_string()).or_default() += 1;

        if let Some(referrer) = visit.referrer.as_deref().filter(|r| !r.is_empty()) {
            *self.referrer_stats.entry(referrer.to_string()).or_default() += 1;
        }

        let hour = now.hour();
        match self.most_active_hours.iter_mut().find(|h| h.hour == hour) {
            Some(h) => h.count += 1,
            None => self.most_active_hours.push(HourCount { hour, count: 1 }),
        }

        let day = weekday_name(now.weekday());
        match self.most_active_days.iter_mut().find(|d| d.day == day) {
            Some(d) => d.count += 1,
            None => self.most_active_days.push(DayCount {
                day: day.to_string(),
                count: 1,
            }),
        }
    }
}

const EDGE_TOKENS: [&str; 4] = ["edg/", "edge/", "edga/", "edgios/"];

/// Browser family from a user agent. Edge and Opera advertise Chrome too,
/// so they are matched first.
pub fn detect_browser(user_agent: &str) -> &'static str {
    let ua = user_agent.to_lowercase();
    if EDGE_TOKENS.iter().any(|t| ua.contains(t)) {
        "Edge"
    } else if ua.contains("opera") || ua.contains("opr/") {
        "Opera"
    } else if ua.contains("chrome") {
        "Chrome"
    } else if ua.contains("safari") {
        "Safari"
    } else if ua.contains("firefox") {
        "Firefox"
    } else if ua.contains("msie") || ua.contains("trident") {
        "Internet Explorer"
    } else {
        "Unknown"
    }
}

/// Operating system from a user agent. iOS agents also say "Mac OS X".
pub fn detect_os(user_agent: &str) -> &'static str {
    let ua = user_agent.to_lowercase();
    if ua.contains("windows") {
        "Windows"
    } else if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
        "iOS"
    } else if ua.contains("mac os") || ua.contains("macintosh") {
        "macOS"
    } else if ua.contains("android") {
        "Android"
    } else if ua.contains("linux") {
        "Linux"
    } else if ua.contains("bsd") {
        "BSD"
    } else {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const FIREFOX_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
    const EDGE_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36 Edg/120.0";

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn visit(id: &str, ua: &str) -> Visit {
        Visit {
            visitor_id: id.to_string(),
            ip: "10.0.0.5".to_string(),
            user_agent: ua.to_string(),
            referrer: None,
        }
    }

    #[test]
    fn classifies_common_agents() {
        assert_eq!(detect_browser(CHROME_WIN), "Chrome");
        assert_eq!(detect_browser(SAFARI_IPHONE), "Safari");
        assert_eq!(detect_browser(FIREFOX_LINUX), "Firefox");
        assert_eq!(detect_browser(EDGE_WIN), "Edge");
        assert_eq!(detect_browser("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)"), "Internet Explorer");
        assert_eq!(detect_browser("curl/8.0"), "Unknown");

        assert_eq!(detect_os(CHROME_WIN), "Windows");
        assert_eq!(detect_os(SAFARI_IPHONE), "iOS");
        assert_eq!(detect_os(FIREFOX_LINUX), "Linux");
        assert_eq!(detect_os("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)"), "macOS");
        assert_eq!(detect_os(""), "Unknown");
    }

    #[test]
    fn edge_needs_a_version_token() {
        let legacy = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/70.0 Safari/537.36 Edge/18.17763";
        assert_eq!(detect_browser(legacy), "Edge");
        assert_eq!(detect_browser("HedgehogCrawler/1.0 Firefox/120.0"), "Firefox");
        assert_eq!(detect_browser("Mozilla/5.0 (KHTML, like Gecko) Chrome/120.0 knowledge-bot"), "Chrome");
    }

    #[test]
    fn counts_unique_visitors_and_breakdowns() {
        let mut stats = VisitorStats::default();
        let now = at(2025, 3, 5, 9);
        stats.record_visit(&visit("a", CHROME_WIN), now);
        stats.record_visit(&visit("a", CHROME_WIN), now);
        let mut from_intranet = visit("b", FIREFOX_LINUX);
        from_intranet.referrer = Some("http://intranet/".to_string());
        stats.record_visit(&from_intranet, now);

        assert_eq!(stats.total_visits, 3);
        assert_eq!(stats.today_visits, 3);
        assert_eq!(stats.unique_visitors.len(), 2);
        assert_eq!(stats.unique_visitors["a"].visits, 2);
        assert_eq!(stats.browser_stats["Chrome"], 2);
        assert_eq!(stats.os_stats["Linux"], 1);
        assert_eq!(stats.referrer_stats["http://intranet/"], 1);
        assert_eq!(stats.most_active_hours, vec![HourCount { hour: 9, count: 3 }]);
        assert_eq!(stats.most_active_days[0].day, "Wednesday");
    }

    #[test]
    fn period_counters_reset_on_boundaries() {
        let mut stats = VisitorStats::default();
        let v = visit("a", CHROME_WIN);

        // Fri 2025-02-28, then Sat 2025-03-01: new day and month, same ISO week.
        stats.record_visit(&v, at(2025, 2, 28, 10));
        stats.record_visit(&v, at(2025, 2, 28, 11));
        stats.record_visit(&v, at(2025, 3, 1, 10));
        assert_eq!(stats.today_visits, 1);
        assert_eq!(stats.monthly_visits, 1);
        assert_eq!(stats.weekly_visits, 3);

        // Mon 2025-03-03 starts a new ISO week.
        stats.record_visit(&v, at(2025, 3, 3, 10));
        assert_eq!(stats.weekly_visits, 1);
        assert_eq!(stats.monthly_visits, 2);
        assert_eq!(stats.total_visits, 4);
    }
}
