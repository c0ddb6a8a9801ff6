use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "1";

/// Game configuration of the harness.
///
/// Additional fields (timeouts, episode steps) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub rows: usize,
    pub columns: usize,
    pub inarow: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            inarow: 4,
        }
    }
}

impl Configuration {
    pub fn new(rows: usize, columns: usize, inarow: usize) -> Configuration {
        Configuration {
            rows,
            columns,
            inarow,
        }
    }
}

/// The current state as seen by the acting player.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Observation {
    /// Row major, row 0 is the top.
    pub board: Vec<u8>,
    /// Piece of the acting player (1 or 2).
    pub mark: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MoveRequest {
    pub observation: Observation,
    #[serde(default)]
    pub configuration: Configuration,
}

impl MoveRequest {
    pub fn new(observation: Observation, configuration: Configuration) -> MoveRequest {
        MoveRequest {
            observation,
            configuration,
        }
    }

    /// Columns whose top slot is free, read directly from the raw observation.
    ///
    /// Does not validate the board and therefore also works on malformed input.
    pub fn raw_legal_moves(&self) -> Vec<usize> {
        let board = &self.observation.board;
        (0..self.configuration.columns.min(board.len()))
            .filter(|&c| board[c] == 0)
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResponse {
    pub column: usize,
}

impl MoveResponse {
    pub fn new(column: usize) -> MoveResponse {
        MoveResponse { column }
    }
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub apiversion: String,
    pub author: String,
    pub version: String,
}

impl IndexResponse {
    pub fn new(apiversion: String, author: String, version: String) -> IndexResponse {
        IndexResponse {
            apiversion,
            author,
            version,
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn parse_request() {
        use super::*;

        let request: MoveRequest = serde_json::from_str(
            r#"{"observation":{"board":[0,0,0,1,0,0,0,2,0,0,0,0,0,0],"mark":1,"step":2},
            "configuration":{"rows":2,"columns":7,"inarow":4,"actTimeout":2,"timeout":2}}"#,
        )
        .unwrap();
        assert_eq!(request.configuration, Configuration::new(2, 7, 4));
        assert_eq!(request.observation.mark, 1);
        assert_eq!(request.raw_legal_moves(), vec![0, 1, 2, 4, 5, 6]);

        let request: MoveRequest =
            serde_json::from_str(r#"{"observation":{"board":[0,1],"mark":2}}"#).unwrap();
        assert_eq!(request.configuration, Configuration::default());
        assert_eq!(request.raw_legal_moves(), vec![0]);
    }

    #[test]
    fn serialize_response() {
        use super::*;
        assert_eq!(
            serde_json::to_string(&MoveResponse::new(3)).unwrap(),
            r#"{"column":3}"#
        );
    }
}
