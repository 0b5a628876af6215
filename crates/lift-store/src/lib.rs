//! `lift-store` — persistence backends for `rust_lift` training data.
//!
//! The simulation talks to its persistence collaborator through two narrow
//! calls on [`TrainingStore`]: register run metadata once, then submit each
//! labeled request record.  Four backends implement the trait:
//!
//! | Backend       | Feature   | Destination                                  |
//! |---------------|-----------|----------------------------------------------|
//! | [`HttpStore`] | *(none)*  | The reference CRUD service (JSON over HTTP)  |
//! | [`CsvStore`]  | *(none)*  | `simulations.csv`, `elevator_requests.csv`   |
//! | [`SqliteStore`] | `sqlite` | `training.db`                               |
//! | [`MemoryStore`] | *(none)* | In-memory vectors (tests, dry runs)         |

pub mod csv;
pub mod error;
pub mod http;
pub mod memory;
pub mod record;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvStore;
pub use error::{StoreError, StoreResult};
pub use http::{HttpStore, HttpStoreConfig};
pub use memory::MemoryStore;
pub use record::{RequestId, RequestRecord, SimulationId, SimulationRecord};
pub use store::TrainingStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
