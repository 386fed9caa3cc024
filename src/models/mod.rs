use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rostered player as stored and as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub jersey_number: i64,
    pub name: String,
    pub position: String,
    pub date_of_birth: NaiveDate,
}

/// Liveness payload for `/health`; `players` is the current roster size.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub players: i64,
    pub checked_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_json_uses_camel_case_and_iso_dates() {
        let player = Player {
            id: "1884823".to_string(),
            jersey_number: 5,
            name: "Ivana ANDRES".to_string(),
            position: "Defender".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1994, 7, 13).unwrap(),
        };

        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1884823",
                "jerseyNumber": 5,
                "name": "Ivana ANDRES",
                "position": "Defender",
                "dateOfBirth": "1994-07-13"
            })
        );
    }

    #[test]
    fn player_rejects_malformed_date() {
        let raw = r#"{"id":"1","jerseyNumber":9,"name":"A","position":"Forward","dateOfBirth":"13/07/1994"}"#;
        assert!(serde_json::from_str::<Player>(raw).is_err());
    }
}
