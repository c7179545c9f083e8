//! UI module
//!
//! One view function per screen plus the shared chrome:
//! - Navigation header (header.rs)
//! - Landing, upload, results, gallery screens
//! - Toast overlay for drained notifications (toast.rs)
//! - Palette and widget styles (style.rs)
//!
//! Views only borrow state and emit `Message`s; all mutation happens in the
//! application update loop.

pub mod gallery;
pub mod header;
pub mod landing;
pub mod results;
pub mod style;
pub mod toast;
pub mod upload;
