//! Composite map hierarchies.
//!
//! A map is a tree of components: leaves are named points of interest,
//! composites group children under a shared local offset. Both kinds expose
//! the same capability set — recursive drawing and name lookup — so client
//! code treats a single point and a whole city identically.

pub mod cli;
pub mod component;
pub mod exitcode;
pub mod render;
pub mod scene;
pub mod util;

pub use component::{Composite, Leaf, MapComponent, PreorderIter, TreeDisplay};
pub use render::{ComponentKind, RecordBuffer, RenderRecord, RenderSink};
pub use scene::demo_map;
