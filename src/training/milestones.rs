//! Distance milestones shown alongside the total distance.

/// Earth's circumference used for the round-the-world share.
pub const EARTH_CIRCUMFERENCE_KM: f64 = 40_000.0;

/// Milestone reached by a cumulative distance, largest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Milestone {
    /// 3200 km and up: share of a lap around the Earth
    AroundTheEarth { percent: f64 },
    /// 3000 km: roughly the length of the Japanese archipelago
    LengthOfJapan,
    /// 100 km: the edge of space
    EdgeOfSpace,
    /// 42.195 km: a full marathon
    Marathon,
    /// 35 km: one lap of the Yamanote line
    YamanoteLoop,
    /// 1 km and up
    Kilometres { km: f64 },
    /// Nothing logged yet
    GettingStarted,
}

impl Milestone {
    /// Message for the milestone.
    pub fn message(&self) -> String {
        match self {
            Milestone::AroundTheEarth { percent } => {
                format!("That's about {:.2}% of the way around the Earth", percent)
            }
            Milestone::LengthOfJapan => {
                "That's roughly the length of Japan from end to end!".to_string()
            }
            Milestone::EdgeOfSpace => "100 km rowed! That's as far as the edge of space!!".to_string(),
            Milestone::Marathon => "You've rowed a full marathon!".to_string(),
            Milestone::YamanoteLoop => {
                "You've rowed about one lap of the Yamanote line!".to_string()
            }
            Milestone::Kilometres { km } => format!("Amazing! You've already rowed {:.1} km!", km),
            Milestone::GettingStarted => "Let's start training!".to_string(),
        }
    }
}

/// Milestone for a cumulative distance in metres.
pub fn distance_milestone(total_m: f64) -> Milestone {
    let km = total_m / 1000.0;

    if km >= 3200.0 {
        Milestone::AroundTheEarth {
            percent: km / EARTH_CIRCUMFERENCE_KM * 100.0,
        }
    } else if km >= 3000.0 {
        Milestone::LengthOfJapan
    } else if km >= 100.0 {
        Milestone::EdgeOfSpace
    } else if km >= 42.195 {
        Milestone::Marathon
    } else if km >= 35.0 {
        Milestone::YamanoteLoop
    } else if km >= 1.0 {
        Milestone::Kilometres { km }
    } else {
        Milestone::GettingStarted
    }
}
