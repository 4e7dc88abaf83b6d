//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fantasy_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = FantasyError::from(json_error);

        match error {
            FantasyError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = FantasyError::from(io_error);

        match error {
            FantasyError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let error = FantasyError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(error, FantasyError::Database(_)));
        assert!(!error.is_user_facing());
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "ten".parse::<u32>().unwrap_err();
        let error = FantasyError::from(parse_error);
        assert!(matches!(error, FantasyError::InvalidNumber(_)));
    }

    #[test]
    fn test_budget_exceeded_message() {
        let error = FantasyError::BudgetExceeded {
            needed: 6,
            available: 5,
        };
        assert_eq!(
            error.to_string(),
            "Team exceeds budget: needs 6 points but only 5 available"
        );
    }

    #[test]
    fn test_rule_violations_are_user_facing() {
        let errors = vec![
            FantasyError::BudgetExceeded {
                needed: 10,
                available: 0,
            },
            FantasyError::DuplicatePlayer {
                name: "MS Dhoni".to_string(),
            },
            FantasyError::EmptyRoster,
            FantasyError::MissingName,
            FantasyError::UnknownPlayer {
                name: "Nobody".to_string(),
            },
            FantasyError::InvalidPointValue {
                value: "0".to_string(),
            },
        ];

        for error in errors {
            assert!(error.is_user_facing(), "{error} should be user facing");
            assert_eq!(error.exit_code(), 1);
        }
    }

    #[test]
    fn test_config_error_exit_code() {
        let error = FantasyError::Config {
            message: "bad budget".to_string(),
        };
        assert_eq!(error.exit_code(), 2);
        assert!(!error.is_user_facing());
        assert!(error.to_string().contains("bad budget"));
    }
}
