//! Embedded word list
//!
//! The bundled word list compiled into the binary at build time.

// Include the generated list from the build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
