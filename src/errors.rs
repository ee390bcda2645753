use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("cannot rescale a zero-length vector")]
    DegenerateVector,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot file: {0}")]
    MalformedSnapshotFile(#[from] serde_json::Error),
}
