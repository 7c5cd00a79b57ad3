//! Resource Records
//!
//! Wire shapes for the five collections. The backend is loosely typed (ids
//! arrive as strings, foreign keys sometimes as numbers) and any field may be
//! missing, so every field is an optional [`Scalar`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A loosely typed JSON scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Empty text counts as absent.
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// The value, unless it is absent or blank.
pub fn present(value: &Option<Scalar>) -> Option<&Scalar> {
    value.as_ref().filter(|v| !v.is_blank())
}

/// First present, non-blank value.
pub fn first_present<'a>(candidates: &[&'a Option<Scalar>]) -> Option<&'a Scalar> {
    candidates.iter().find_map(|value| present(*value))
}

/// User profile
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<Scalar>,
    pub name: Option<Scalar>,
    pub email: Option<Scalar>,
    pub team: Option<Scalar>,
    pub fitness_level: Option<Scalar>,
    pub total_points: Option<Scalar>,
}

/// Team
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: Option<Scalar>,
    pub name: Option<Scalar>,
    pub description: Option<Scalar>,
    pub created_at: Option<Scalar>,
    pub members_count: Option<Scalar>,
    /// Raw member list; only its length is used.
    pub members: Option<serde_json::Value>,
}

impl Team {
    /// `members_count`, falling back to the length of `members`.
    pub fn member_count(&self) -> Option<Scalar> {
        if let Some(count) = present(&self.members_count) {
            return Some(count.clone());
        }
        self.members
            .as_ref()
            .and_then(|members| members.as_array())
            .map(|members| Scalar::Int(members.len() as i64))
    }
}

/// Logged activity
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: Option<Scalar>,
    pub user: Option<Scalar>,
    pub user_name: Option<Scalar>,
    pub activity_type: Option<Scalar>,
    pub duration_minutes: Option<Scalar>,
    pub calories_burned: Option<Scalar>,
    pub date: Option<Scalar>,
}

impl Activity {
    pub fn display_user(&self) -> Option<&Scalar> {
        first_present(&[&self.user_name, &self.user])
    }
}

/// Suggested workout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Workout {
    pub id: Option<Scalar>,
    pub user: Option<Scalar>,
    pub user_name: Option<Scalar>,
    pub workout_type: Option<Scalar>,
    /// Older backends send the workout type as `name`.
    pub name: Option<Scalar>,
    pub difficulty: Option<Scalar>,
    /// Older backends send the difficulty as `difficulty_level`.
    pub difficulty_level: Option<Scalar>,
    pub duration_minutes: Option<Scalar>,
    pub description: Option<Scalar>,
}

impl Workout {
    pub fn display_user(&self) -> Option<&Scalar> {
        first_present(&[&self.user_name, &self.user])
    }

    pub fn display_type(&self) -> Option<&Scalar> {
        first_present(&[&self.workout_type, &self.name])
    }

    pub fn display_difficulty(&self) -> Option<&Scalar> {
        first_present(&[&self.difficulty, &self.difficulty_level])
    }
}

/// Leaderboard entry, already ranked by the backend
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub id: Option<Scalar>,
    pub user: Option<Scalar>,
    pub user_name: Option<Scalar>,
    pub team: Option<Scalar>,
    pub team_name: Option<Scalar>,
    pub total_calories_burned: Option<Scalar>,
    pub activities_count: Option<Scalar>,
    pub points: Option<Scalar>,
}

impl LeaderboardEntry {
    pub fn display_user(&self) -> Option<&Scalar> {
        first_present(&[&self.user_name, &self.user])
    }

    pub fn display_team(&self) -> Option<&Scalar> {
        first_present(&[&self.team_name, &self.team])
    }
}
