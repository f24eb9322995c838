use thiserror::Error;

/// Convenient result alias for the metro library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The network reached its practical station bound.
    #[error("station capacity of {limit} reached; {name} was not added")]
    CapacityExceeded { name: String, limit: usize },

    /// Raised when a station name could not be found in the network.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an externally supplied station index does not exist.
    #[error("station index {index} is out of range for a network of {count} stations")]
    StationIndexOutOfRange { index: usize, count: usize },

    /// Raised when reconstruction input does not describe a usable path.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
