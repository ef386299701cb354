//! This module contains the pure, stateless numeric kernels. They know nothing
//! about Python or the filesystem.

pub mod factorial;
