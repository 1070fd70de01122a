//! Runtime style-registration pipeline.
//!
//! Turns template-literal CSS blocks into uniquely named style rules and
//! commits them to a pluggable [`StyleSink`]. The pipeline itself is host
//! agnostic: the clock, the deferred-task scheduler, the sink and the
//! capability record are all injected through [`Backend`], so everything here
//! runs and tests without a browser.
//!
//! The ambient entry points and macros live in the `cssink` crate; the
//! browser backend lives in `cssink-web`.

pub mod class_names;
pub mod clock;
pub mod config;
mod error;
pub mod ident;
pub mod registry;
pub mod schedule;
pub mod sink;
mod substitute;
mod validate;

pub use class_names::{class_names, ClassFragment};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{AppendStrategy, Config, ConfigUpdate, InsertionMode};
pub use error::Error;
pub use ident::{hash, DEFAULT_RADIX, HASH_SEED};
pub use registry::{resolve_mode, Backend, ScopedClass, StyleRegistry};
pub use schedule::{InlineScheduler, ManualScheduler, Scheduler};
pub use sink::{Capabilities, InsertedStyle, MemorySink, ResolvedMode, StyleSink};

pub type Result<T> = std::result::Result<T, Error>;
