//! Generated TypeScript bindings for the Lightly panel Core live in
//! `generated/typescript`, written by this crate's build script.
