//! Faith & SDG infographic generator
//!
//! Takes a small form (faith tradition, Sustainable Development Goal, optional
//! description), turns it into an image prompt, relays it to an image
//! generation provider, and hands the resulting image URL back to the browser.

pub mod ai;
pub mod error;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod relay;
pub mod startup;

pub use error::{Error, Result};
