//! Process-facing adapters for the Kirax chat console.
//!
//! This crate owns everything that touches the machine the process runs
//! on: configuration paths, the read-only secret file, credential
//! resolution, and PDF text extraction.

pub mod credential;
pub mod paths;
pub mod pdf;
pub mod secret_storage;

pub use crate::credential::{OPENROUTER_API_KEY_ENV, resolve_credential};
pub use crate::paths::KiraxPaths;
pub use crate::pdf::extract_pdf_text;
pub use crate::secret_storage::{SecretStorage, SecretStorageError};
