//! Config store infrastructure module

mod xdg;

pub use xdg::XdgConfigStore;
