#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod eraser;
pub mod error;
pub mod geometry;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tools;
pub mod util;

pub use app::TacticsBoardApp;
pub use command::Command;
pub use config::BoardConfig;
pub use document::Document;
pub use eraser::{Eraser, EraserConfig};
pub use error::{ConfigError, ConfigResult};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{DrawingSession, GestureState, Surface};
pub use stroke::{DraftPath, DrawingKind, PathEntity, PathId, PathKind, PathRef, StrokeSettings};
pub use tools::{Tool, ToolType};
