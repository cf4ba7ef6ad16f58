//! Participant records fed into the balancer
//!
//! A `ParticipantStats` is a read-only snapshot of one player's profile and
//! playing history. The balancer only ever borrows these records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the self-declared skill rating
pub const MAX_BASE_RATING: f64 = 5.0;

/// Playing position category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[serde(alias = "gk", alias = "keeper")]
    Goalkeeper,
    #[serde(alias = "df", alias = "back")]
    Defender,
    /// Lateral player (winger / fullback)
    #[serde(alias = "fullback", alias = "lateral")]
    Winger,
    #[serde(alias = "mf")]
    Midfielder,
    #[serde(alias = "fw", alias = "striker")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Winger,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    /// Lateral players count toward the back line
    pub fn is_defender(&self) -> bool {
        matches!(self, Position::Defender | Position::Winger)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, Position::Midfielder)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::Forward)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Winger => "WG",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }
}

/// Preferred side of the pitch. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredSide {
    Left,
    Right,
    #[default]
    Both,
}

/// Snapshot of one participant's profile and history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub preferred_side: PreferredSide,

    // Physical profile (not used by scoring)
    #[serde(default)]
    pub height_cm: Option<f32>,
    #[serde(default)]
    pub weight_kg: Option<f32>,
    #[serde(default)]
    pub age: Option<u8>,

    /// Self-declared skill, 0.0-5.0
    pub base_rating: f64,
    #[serde(default)]
    pub matches: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    /// Historical win rate, 0.0-1.0
    #[serde(default)]
    pub win_rate: f64,
}

impl ParticipantStats {
    /// Participant with no recorded history
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        base_rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            preferred_side: PreferredSide::Both,
            height_cm: None,
            weight_kg: None,
            age: None,
            base_rating,
            matches: 0,
            goals: 0,
            assists: 0,
            win_rate: 0.0,
        }
    }

    pub fn with_history(mut self, matches: u32, goals: u32, assists: u32, win_rate: f64) -> Self {
        self.matches = matches;
        self.goals = goals;
        self.assists = assists;
        self.win_rate = win_rate;
        self
    }

    pub fn with_side(mut self, side: PreferredSide) -> Self {
        self.preferred_side = side;
        self
    }
}

/// Reasons a participant record is rejected at the boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Participant id cannot be empty")]
    EmptyId,

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Base rating {0} out of range. Must be between 0.0 and 5.0")]
    RatingOutOfRange(f64),

    #[error("Win rate {0} out of range. Must be between 0.0 and 1.0")]
    WinRateOutOfRange(f64),

    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Invalid {field}: {value}")]
    InvalidPhysical { field: &'static str, value: f32 },
}

/// Boundary checks for participant records
pub struct ParticipantValidator;

impl ParticipantValidator {
    pub fn validate(participant: &ParticipantStats) -> Result<(), ValidationError> {
        if participant.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Self::validate_name(&participant.name)?;
        Self::validate_rating(participant.base_rating)?;
        Self::validate_win_rate(participant.win_rate)?;
        Self::validate_physical("height_cm", participant.height_cm)?;
        Self::validate_physical("weight_kg", participant.weight_kg)?;
        Ok(())
    }

    /// 1-100 characters, not only whitespace
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidName("Name cannot be empty".to_string()));
        }
        if name.chars().count() > 100 {
            return Err(ValidationError::InvalidName(
                "Name cannot exceed 100 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
        if !rating.is_finite() {
            return Err(ValidationError::NonFinite { field: "base_rating" });
        }
        if !(0.0..=MAX_BASE_RATING).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }
        Ok(())
    }

    pub fn validate_win_rate(win_rate: f64) -> Result<(), ValidationError> {
        if !win_rate.is_finite() {
            return Err(ValidationError::NonFinite { field: "win_rate" });
        }
        if !(0.0..=1.0).contains(&win_rate) {
            return Err(ValidationError::WinRateOutOfRange(win_rate));
        }
        Ok(())
    }

    fn validate_physical(field: &'static str, value: Option<f32>) -> Result<(), ValidationError> {
        match value {
            Some(v) if !v.is_finite() => Err(ValidationError::NonFinite { field }),
            Some(v) if v <= 0.0 => Err(ValidationError::InvalidPhysical { field, value: v }),
            _ => Ok(()),
        }
    }
}
