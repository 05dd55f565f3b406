//! Assign custom `.icns` icons to files, applications, and directories.
//!
//! The Finder icon attribute and the application-registry lookups live
//! behind [`workspace::Workspace`]; everything else is plain filesystem
//! work and runs anywhere.

pub mod apply;
pub mod bundle;
pub mod icon;
pub mod invocation;
pub mod resolve;
pub mod scan;
pub mod workspace;
