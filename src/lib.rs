//! Repo Shuttle - Multi-backend repository synchronization
//!
//! This crate implements the options composition system that assembles the
//! configuration bundle consumed by the sync engine, plus the console,
//! filesystem, and HTTP transport abstractions the option modules hand out.

pub mod console;
pub mod fs;
pub mod options;
pub mod transport;

pub use console::{Console, LogConsole, MessageKind, RecordingConsole};
pub use fs::{FileSystem, InMemoryFileSystem, RealFileSystem};
pub use options::{
    Deferred, GeneralOptions, OptionModule, Options, OptionsBuilder, OptionsError,
    WorkflowOptions,
};
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, PendingRequest, TransportError,
    JSON_MEDIA_TYPE,
};
