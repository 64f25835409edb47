//! Helper functions shared by the fragment templates

mod html;
mod url;

pub use html::*;
pub use url::*;
