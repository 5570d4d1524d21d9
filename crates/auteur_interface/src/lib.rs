//! Trait definitions for the collaborators behind each pipeline stage.
//!
//! Every stage of a production job is an opaque unit of async work
//! performed by one of these traits. The executor in `auteur_pipeline`
//! drives them in order; implementations decide how the work is done
//! (local computation, remote APIs, subprocesses).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{
    FootageSource, MetadataGenerator, MusicGenerator, NarrationSynthesizer, Publisher, Renderer,
    StageResult,
};
