//! The fixed set of leave activities

use chrono::Duration;

/// One of the reasons a user may record a leave.
///
/// The set is static: each variant carries a stable key (used in control
/// payloads), a human-readable label, a button caption and an optional
/// time limit. An absent limit means the leave is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    /// Buying food (15 minute limit)
    BeliMakan,
    /// Stepping out to the balcony (5 minute limit)
    KeBalkon,
    /// Delivering goods (no limit)
    AntarBarang,
    /// Restroom break (no limit)
    KeToilet,
}

impl Activity {
    /// All activities, in the order they appear on the keyboard
    pub const ALL: [Activity; 4] = [
        Activity::BeliMakan,
        Activity::KeBalkon,
        Activity::AntarBarang,
        Activity::KeToilet,
    ];

    /// Resolve a payload key to an activity, `None` if unknown
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "beli_makan" => Some(Activity::BeliMakan),
            "ke_balkon" => Some(Activity::KeBalkon),
            "antar_barang" => Some(Activity::AntarBarang),
            "ke_toilet" => Some(Activity::KeToilet),
            _ => None,
        }
    }

    /// Stable key used in control payloads
    pub fn key(&self) -> &'static str {
        match self {
            Activity::BeliMakan => "beli_makan",
            Activity::KeBalkon => "ke_balkon",
            Activity::AntarBarang => "antar_barang",
            Activity::KeToilet => "ke_toilet",
        }
    }

    /// Human-readable label, copied into the record at creation time
    pub fn label(&self) -> &'static str {
        match self {
            Activity::BeliMakan => "beli makan",
            Activity::KeBalkon => "ke balkon",
            Activity::AntarBarang => "antar barang",
            Activity::KeToilet => "ke toilet",
        }
    }

    /// Caption shown on the keyboard button
    pub fn button_label(&self) -> &'static str {
        match self {
            Activity::BeliMakan => "Beli Makan",
            Activity::KeBalkon => "Ke Balkon",
            Activity::AntarBarang => "Antar Barang",
            Activity::KeToilet => "Ke Toilet",
        }
    }

    /// Time limit in minutes, `None` for unbounded activities
    pub fn time_limit_minutes(&self) -> Option<i64> {
        match self {
            Activity::BeliMakan => Some(15),
            Activity::KeBalkon => Some(5),
            Activity::AntarBarang => None,
            Activity::KeToilet => None,
        }
    }

    /// Time limit as a duration, `None` for unbounded activities
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_minutes().map(Duration::minutes)
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for activity in Activity::ALL {
            assert_eq!(Activity::from_key(activity.key()), Some(activity));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Activity::from_key("ke_pasar"), None);
        assert_eq!(Activity::from_key(""), None);
        // Keys are exact, not case-folded
        assert_eq!(Activity::from_key("Beli_Makan"), None);
    }

    #[test]
    fn test_time_limits() {
        assert_eq!(Activity::BeliMakan.time_limit_minutes(), Some(15));
        assert_eq!(Activity::KeBalkon.time_limit_minutes(), Some(5));
        assert_eq!(Activity::AntarBarang.time_limit_minutes(), None);
        assert_eq!(Activity::KeToilet.time_limit_minutes(), None);

        assert_eq!(Activity::BeliMakan.time_limit(), Some(Duration::minutes(15)));
        assert_eq!(Activity::KeToilet.time_limit(), None);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(Activity::AntarBarang.to_string(), "antar barang");
    }
}
