//! `dtn-spatial`: instantaneous contact graphs.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`contact`] | `ContactGraph` (CSR adjacency over one frame's nodes)       |
//!
//! A contact graph answers "who is within radio range of whom" at a single
//! timestamp.  Node sets change between timestamps, so graphs are rebuilt
//! from scratch for every frame and never cached.

pub mod contact;


pub use contact::ContactGraph;
