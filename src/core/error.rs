use std::path::PathBuf;

/// Failures while reading the static game resources. All of them are fatal.
#[derive(thiserror::Error, Debug)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a JSON array of strings: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} contains no entries", .path.display())]
    Empty { path: PathBuf },
}
