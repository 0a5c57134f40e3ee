//! Top-level facade crate for beatex.
//!
//! Re-exports the flattening core and the exporter library so users can depend on a single crate.

pub mod core {
    pub use beatex_core::*;
}

pub mod exporter {
    pub use beatex_exporter::*;
}
