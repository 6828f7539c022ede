pub mod error;
pub mod heuristics;
pub mod io;
pub mod models;
pub mod server;

pub use error::ProcessingError;
pub use heuristics::build_cornell_notes;
pub use io::{CornellSheet, load_request, render_cornell_sheet, write_json};
pub use models::{Citation, CitationType, NoteRequest, NoteResponse};
pub use server::{ServerConfig, create_router, run_server};
