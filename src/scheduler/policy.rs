/*!
 * Policy Types
 * Named selectors for the built-in scheduling disciplines
 */

use super::discipline::{ByPriority, Discipline, FirstComeFirstServe, ShortestJobFirst};
use crate::core::errors::SchedulerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Built-in scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Ascending priority value (a smaller number runs first)
    Priority,
    /// Shortest job first, by burst time
    ShortestJob,
    /// First come first serve, by arrival pid
    FirstCome,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Priority, Policy::ShortestJob, Policy::FirstCome];

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::ShortestJob => "sjf",
            Self::FirstCome => "fcfs",
        }
    }

    /// The discipline value this policy selects
    pub fn discipline(&self) -> &'static dyn Discipline {
        match self {
            Self::Priority => &ByPriority,
            Self::ShortestJob => &ShortestJobFirst,
            Self::FirstCome => &FirstComeFirstServe,
        }
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" | "prio" => Ok(Self::Priority),
            "sjf" | "shortest_job_first" => Ok(Self::ShortestJob),
            "fcfs" | "first_come_first_serve" => Ok(Self::FirstCome),
            _ => Err(SchedulerError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("priority".parse::<Policy>().unwrap(), Policy::Priority);
        assert_eq!("prio".parse::<Policy>().unwrap(), Policy::Priority);
        assert_eq!("sjf".parse::<Policy>().unwrap(), Policy::ShortestJob);
        assert_eq!("SJF".parse::<Policy>().unwrap(), Policy::ShortestJob);
        assert_eq!("fcfs".parse::<Policy>().unwrap(), Policy::FirstCome);

        assert_eq!(
            "lottery".parse::<Policy>().unwrap_err(),
            SchedulerError::InvalidPolicy("lottery".to_string())
        );
    }

    #[test]
    fn test_policy_round_trip_through_name() {
        for policy in Policy::ALL {
            assert_eq!(policy.as_str().parse::<Policy>().unwrap(), policy);
            assert_eq!(policy.discipline().name(), policy.as_str());
        }
    }
}
