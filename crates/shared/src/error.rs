use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    #[error("unknown search mode '{0}', expected 'professor' or 'room'")]
    UnknownSearchMode(String),
    #[error("search text must not be blank")]
    BlankQuery,
    #[error("semester must not be blank")]
    BlankSemester,
    #[error("malformed lecture payload: {0}")]
    MalformedPayload(String),
}
