/// Image upload module
///
/// This module handles everything between "the user has some photos" and
/// "the wizard has a transmission-ready payload":
/// - Accepting, previewing and removing files (collector.rs)
/// - Reading file bytes and base64-encoding them as a batch (encode.rs)

pub mod collector;
pub mod encode;
