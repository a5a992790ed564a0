use thiserror::Error;

/// Errors surfaced by the canvas core.
///
/// None of these are fatal: the reducer never produces them, and every caller
/// in the app logs and carries on with the previous snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// A tool label did not match any known tool
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A gesture was started while no tool is armed
    #[error("No tool is active, gesture ignored")]
    NoActiveTool,

    /// The store owning the action stream has been dropped
    #[error("Action stream closed")]
    StoreClosed,
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
