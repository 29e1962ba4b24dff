use std::env;

// Runtime/server settings (not game rules).

pub fn http_port() -> u16 {
    env::var("SCOREBOARD_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000)
}

/// Path of the question bank document, relative to the working directory.
pub fn questions_path() -> String {
    env::var("QUESTIONS_FILE").unwrap_or_else(|_| "questions.json".to_string())
}
