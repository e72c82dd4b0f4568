//! XML document access for ReSpecTh files.

mod document;

pub use document::{
    attr, child_text, children, find, find_path, require, require_attr, require_text, text,
};
