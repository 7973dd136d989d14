#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use color::Color;
pub use command::{ColorChooser, Command};
pub use config::PaintConfig;
pub use document::Document;
pub use element::{Element, ElementKind, ElementType};
pub use id_generator::ElementId;
pub use input::{DpiScale, InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState};
pub use tools::{Mode, Shape, StrokeWidth, ToolSettings};
