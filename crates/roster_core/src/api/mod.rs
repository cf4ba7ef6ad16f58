pub mod balance_json;

pub use balance_json::{
    balance_roster, balance_roster_json, BalanceRequest, BalanceResponse, CandidateSummary,
    PlayerSummary, TeamSummary,
};
